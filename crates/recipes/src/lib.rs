//! Cookbook domain module.
//!
//! This crate contains the cookbook's business rules, implemented purely as
//! deterministic logic (no IO, no HTTP, no locking):
//! - `normalize`: handwritten recipe names to canonical Title Case
//! - `validate`: payload to `Entry` conversion and admission rules
//! - `cookbook`: the name-keyed entry registry
//! - `aggregate`: recursive expansion of a recipe into a `Summary`

pub mod aggregate;
pub mod cookbook;
pub mod normalize;
pub mod validate;

pub use aggregate::summarize;
pub use cookbook::Cookbook;
pub use normalize::{is_canonical, normalize};
pub use validate::{entry_from_parts, validate_entry};
