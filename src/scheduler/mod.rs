//! Scheduling algorithms that decide which parcels go onto which trucks.
//!
//! - [`RandomScheduler`] — Shuffled parcels onto randomly drawn trucks, bounded retries
//! - [`GreedyScheduler`] — Priority-ordered parcels onto the best eligible truck
//!
//! [`SchedulerConfig`] selects one of them from configuration.

mod config;
mod greedy;
mod random;

pub use config::{ConfigError, GreedyConfig, Order, ParcelPriority, SchedulerConfig};
pub use greedy::{GreedyScheduler, ParcelPrecedes, TruckPrecedes};
pub use random::RandomScheduler;

use crate::models::{Parcel, Truck};

/// Decides which parcels go onto which trucks.
///
/// A scheduling run packs parcels onto the given trucks, which is how the
/// decision and each truck's route become observable. The `parcels` slice
/// and the parcels in it are left untouched.
///
/// # Examples
///
/// ```
/// use u_parcel::models::{Parcel, Truck};
/// use u_parcel::scheduler::Scheduler;
///
/// /// Packs everything onto the first truck that has room.
/// struct FirstFit;
///
/// impl Scheduler for FirstFit {
///     fn schedule(&mut self, parcels: &[Parcel], trucks: &mut [Truck], _verbose: bool) -> Vec<Parcel> {
///         parcels
///             .iter()
///             .filter(|p| !trucks.iter_mut().any(|t| t.pack(p)))
///             .cloned()
///             .collect()
///     }
/// }
///
/// let parcels = vec![Parcel::new(1, 4, "a", "b").unwrap()];
/// let mut trucks = vec![Truck::new(1, 5, "a").unwrap()];
/// assert!(FirstFit.schedule(&parcels, &mut trucks, false).is_empty());
/// ```
pub trait Scheduler: Send {
    /// Schedules `parcels` onto `trucks`, returning those that did not fit.
    ///
    /// Unscheduled parcels are returned in the order they were given up on.
    /// With `verbose` set, step-by-step decisions are logged at `info`
    /// level instead of `debug`.
    fn schedule(&mut self, parcels: &[Parcel], trucks: &mut [Truck], verbose: bool) -> Vec<Parcel>;
}
