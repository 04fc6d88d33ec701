//! Post-run evaluation of a scheduled fleet.

mod stats;

pub use stats::FleetStats;
