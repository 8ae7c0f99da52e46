//! Advisory generation: nudges, safety warnings and daily motivation.
//!
//! Every function here is pure rule lookup over records or a schedule.
//! Nothing inspects drug semantics beyond a name watch-list.

mod catalog;
mod motivation;
mod nudges;
mod warnings;

pub use catalog::*;
pub use motivation::*;
pub use nudges::*;
pub use warnings::*;
