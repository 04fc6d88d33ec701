//! # u-parcel
//!
//! Parcel-to-truck assignment library: capacity-bounded trucks, a
//! predicate-driven priority queue, random and greedy schedulers, and
//! post-run fleet statistics.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Parcel, Truck, Route, Fleet)
//! - [`distance`] — Distance map between named cities
//! - [`queue`] — Priority queue with a pluggable "comes before" predicate
//! - [`scheduler`] — Scheduling algorithms (Random, Greedy) and their configuration
//! - [`evaluation`] — Fleet statistics collected after a scheduling run

pub mod distance;
pub mod evaluation;
pub mod models;
pub mod queue;
pub mod scheduler;
