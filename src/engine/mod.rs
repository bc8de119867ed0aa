//! List engine
//!
//! Everything that decides list order lives here. Like a simulation step,
//! it is pure: callers pass the RNG in, nothing touches storage or the page.

pub mod print;
pub mod roster;
pub mod session;
pub mod shuffle;

pub use print::{generate_print_segments, generate_segments_with};
pub use roster::{Entry, Regenerated, RosterList};
pub use session::{Command, ListBinding, Session};
pub use shuffle::shuffle;
