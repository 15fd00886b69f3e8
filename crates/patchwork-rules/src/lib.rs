//! The ordered rewrite-rule collection for the Patchwork puzzle engine.
//!
//! Players build an ordered list of rules; the order is the program. The
//! UI reorders, inserts, deletes, and edits entries constantly, so every
//! entry carries a [`RuleId`] that survives all of that: ids are assigned
//! at insertion and never reused, letting a renderer cache per-rule widgets
//! by id across reorders without discarding them.
//!
//! # Modules
//!
//! - [`id`] -- the [`RuleId`] newtype.
//! - [`rule`] -- [`Rule`], a `from`/`to` pattern pair.
//! - [`list`] -- [`StableList`], the reorderable sequence with stable ids.

pub mod id;
pub mod list;
pub mod rule;

// Re-export primary types at crate root.
pub use id::RuleId;
pub use list::StableList;
pub use rule::Rule;
