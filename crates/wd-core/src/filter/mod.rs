//! Filter engine: criteria plus the pure visibility derivations.

mod criteria;
pub mod engine;

pub use criteria::FilterCriteria;
pub use engine::{available_categories, visible_entries};
