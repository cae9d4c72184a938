//! Operators.
//!
//! Every operator is an inherent method on [`Observable`](crate::observable::Observable)
//! that returns a new observable. Subscribing to the result subscribes to the
//! upstream with an observer that does the operator's work.
pub mod filter;
pub mod flat_map;
pub mod map;
pub mod observe_on;
pub mod subscribe_on;
