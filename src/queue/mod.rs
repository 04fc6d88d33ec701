//! Priority queue driven by a pluggable ordering predicate.

mod priority;

pub use priority::PriorityQueue;
