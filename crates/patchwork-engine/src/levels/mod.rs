//! Built-in demo levels.
//!
//! Each level supplies its symbol alphabet, start and goal boards, and a
//! glyph per symbol for board logging. Symbol display is this layer's
//! business -- the engine core never sees it.

pub mod double;
pub mod flip;
pub mod maze;

use patchwork_board::TileGrid;
use patchwork_core::config::EngineConfig;
use patchwork_core::runner::{self, RunOutcome};
use patchwork_core::{Alphabet, Puzzle};
use tracing::info;

use crate::error::EngineError;

/// Build and run the named level with the given configuration.
pub fn run(name: &str, config: &EngineConfig) -> Result<(), EngineError> {
    match name {
        "flip" => run_level(name, flip::build()?, flip::glyph, config),
        "maze" => run_level(name, maze::build()?, maze::glyph, config),
        "double" => run_level(name, double::build()?, double::glyph, config),
        _ => {
            return Err(EngineError::UnknownLevel {
                name: name.to_owned(),
            });
        }
    }
    Ok(())
}

/// Drive one level until it terminates and log the outcome.
fn run_level<A: Alphabet>(
    name: &str,
    mut puzzle: Puzzle<A>,
    glyph: fn(A::Symbol) -> char,
    config: &EngineConfig,
) where
    A::Symbol: Copy,
{
    puzzle.set_step_interval_ms(config.pacing.step_interval_ms);

    info!(level = name, rules = puzzle.rules().len(), "level ready");
    info!("start board:\n{}", render(puzzle.start(), glyph));

    // Frame interval zero means "no pacing": step flat out instead of
    // emulating the animation loop.
    let RunOutcome { end_reason, steps } = if config.pacing.frame_interval_ms == 0 {
        runner::run_to_completion(&mut puzzle, config.bounds.max_steps)
    } else {
        runner::run_paced(
            &mut puzzle,
            config.pacing.frame_interval_ms,
            config.bounds.max_steps,
        )
    };

    // Win detection lives here, in the collaborator: the engine stores the
    // goal but never consults it.
    let final_board = puzzle.current_board();
    let solved = final_board == puzzle.goal();
    info!(?end_reason, steps, solved, "run complete");
    info!("final board:\n{}", render(final_board, glyph));
}

/// Render a board as one line of glyphs per row; `.` marks undefined
/// positions inside the bounding box.
fn render<S: Copy>(board: &TileGrid<S>, glyph: fn(S) -> char) -> String {
    let Some(shape) = board.shape() else {
        return String::new();
    };
    let mut out = String::new();
    for y in shape.y..=shape.bottom() {
        for x in shape.x..=shape.right() {
            out.push(board.get(x, y).map_or('.', |&symbol| glyph(symbol)));
        }
        if y < shape.bottom() {
            out.push('\n');
        }
    }
    out
}
