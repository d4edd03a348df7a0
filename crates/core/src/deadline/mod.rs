//! Deadline resolution
//!
//! Turns a [`RawDeadline`](lotclock_domain::RawDeadline) into a
//! [`ResolvedInstant`](lotclock_domain::ResolvedInstant), or reports why it
//! cannot be resolved.

mod parse;
pub mod resolver;

pub use resolver::{resolve, resolve_with_reason, DeadlineResolver, Unresolvable};
