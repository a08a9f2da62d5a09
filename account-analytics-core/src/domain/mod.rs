//! Core domain entities
//!
//! Pure data structures and the tie-break strategies that operate on them.
//! No I/O happens here.

mod account;
pub mod result;
pub mod tie_break;

pub use account::{Account, Sex};
pub use tie_break::{lower_id, lower_last_name, TieBreakPolicy};
