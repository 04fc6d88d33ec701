//! Random scheduler.
//!
//! Visits parcels in a shuffled order and, for each one, draws trucks
//! uniformly at random (with replacement) until one has room. The number of
//! redraws is bounded by the fleet size, so a parcel can go unscheduled
//! through bad luck even when some truck could still take it.
//!
//! # Complexity
//!
//! O(n·m) draws in the worst case, where n = parcels and m = trucks.

use log::Level;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{Parcel, Truck};

use super::Scheduler;

/// Schedules each parcel onto a randomly drawn truck.
///
/// # Examples
///
/// ```
/// use u_parcel::models::{Parcel, Truck};
/// use u_parcel::scheduler::{RandomScheduler, Scheduler};
///
/// let parcels = vec![
///     Parcel::new(1, 5, "Toronto", "Hamilton").unwrap(),
///     Parcel::new(2, 50, "Toronto", "Ottawa").unwrap(),
/// ];
/// let mut trucks = vec![Truck::new(1, 10, "Toronto").unwrap()];
///
/// let mut scheduler = RandomScheduler::with_seed(42);
/// let unscheduled = scheduler.schedule(&parcels, &mut trucks, false);
/// assert_eq!(unscheduled, vec![parcels[1].clone()]);
/// assert_eq!(trucks[0].parcels(), &parcels[..1]);
/// ```
#[derive(Debug, Clone)]
pub struct RandomScheduler<R = StdRng> {
    rng: R,
}

impl RandomScheduler<StdRng> {
    /// Creates a scheduler seeded from operating-system entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates a reproducible scheduler from a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomScheduler<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomScheduler<R> {
    /// Creates a scheduler drawing from the given generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draws trucks until one can hold `parcel`, giving up after the first
    /// draw plus one redraw per truck.
    fn draw_truck(&mut self, trucks: &[Truck], parcel: &Parcel) -> Option<usize> {
        if trucks.is_empty() {
            return None;
        }
        let rng = &mut self.rng;
        (0..=trucks.len())
            .map(|_| rng.random_range(0..trucks.len()))
            .find(|&i| parcel.volume() <= trucks[i].available_space())
    }
}

impl<R: Rng + Send> Scheduler for RandomScheduler<R> {
    fn schedule(&mut self, parcels: &[Parcel], trucks: &mut [Truck], verbose: bool) -> Vec<Parcel> {
        let level = if verbose { Level::Info } else { Level::Debug };
        let mut order: Vec<&Parcel> = parcels.iter().collect();
        order.shuffle(&mut self.rng);

        let mut unscheduled = Vec::new();
        for parcel in order {
            match self.draw_truck(trucks, parcel) {
                Some(i) if trucks[i].pack(parcel) => {
                    log::log!(level, "packed {parcel} onto {}", trucks[i]);
                }
                _ => {
                    log::log!(level, "could not pack {parcel}");
                    unscheduled.push(parcel.clone());
                }
            }
        }

        log::debug!(
            "random scheduling done: {} of {} parcels unscheduled",
            unscheduled.len(),
            parcels.len()
        );
        unscheduled
    }
}
