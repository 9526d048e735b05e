//! Period generation services.
//!
//! Leaf-first: [`identifier`] mints ids, [`arithmetic`] does per-granularity
//! calendar math, [`containment`] resolves enclosing periods, and
//! [`hierarchy`] assembles the record sequences. [`synchronizer`] is the
//! request-level entry point used by the HTTP layer.

pub mod arithmetic;
pub mod containment;
pub mod hierarchy;
pub mod identifier;
pub mod range;
pub mod synchronizer;
pub mod timezones;

pub use hierarchy::HierarchyBuilder;
pub use range::DateSpan;
pub use synchronizer::{generate_periods, GeneratorSettings};
pub use timezones::list_timezones;
