//! Domain types and models
//!
//! - [`deadline`]: deadline values as they arrive from listing feeds
//! - [`instant`]: the unambiguous, resolved form of a deadline
//! - [`countdown`]: remaining-time breakdowns, lifecycle states and formats

pub mod countdown;
pub mod deadline;
pub mod instant;

pub use countdown::{CountdownFormat, CountdownState, RemainingBreakdown};
pub use deadline::{ListingDeadline, RawDeadline};
pub use instant::ResolvedInstant;
