//! Domain models for the medication plan.

mod frequency;
mod record;
mod schedule;

pub use frequency::*;
pub use record::*;
pub use schedule::*;
