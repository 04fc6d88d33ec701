//! Greedy scheduler.
//!
//! # Algorithm
//!
//! Parcels are taken from a priority queue ordered by the configured key
//! and direction. For each parcel the eligible trucks are those with enough
//! available space; if any of them already ends its route at the parcel's
//! destination, only those are kept. The eligible truck ranked first by
//! available space (in the configured direction) receives the parcel.
//!
//! # Complexity
//!
//! O(n² + n·m) where n = parcels and m = trucks. Nothing is indexed between
//! parcels: eligibility and ranking are recomputed every time.

use log::Level;

use crate::models::{Parcel, Truck};
use crate::queue::PriorityQueue;

use super::{GreedyConfig, Order, ParcelPriority, Scheduler};

/// "Comes before" predicate over parcels.
pub type ParcelPrecedes = fn(&Parcel, &Parcel) -> bool;

/// "Comes before" predicate over trucks.
pub type TruckPrecedes = fn(&Truck, &Truck) -> bool;

fn volume_non_decreasing(a: &Parcel, b: &Parcel) -> bool {
    a.volume() < b.volume()
}

fn volume_non_increasing(a: &Parcel, b: &Parcel) -> bool {
    a.volume() > b.volume()
}

fn destination_non_decreasing(a: &Parcel, b: &Parcel) -> bool {
    a.destination() < b.destination()
}

fn destination_non_increasing(a: &Parcel, b: &Parcel) -> bool {
    a.destination() > b.destination()
}

fn least_available(a: &Truck, b: &Truck) -> bool {
    a.available_space() < b.available_space()
}

fn most_available(a: &Truck, b: &Truck) -> bool {
    a.available_space() > b.available_space()
}

/// Returns the indices of trucks eligible to take `parcel`.
///
/// Trucks with room whose route already ends at the parcel's destination
/// are preferred; otherwise every truck with room is eligible.
fn eligible_trucks(trucks: &[Truck], parcel: &Parcel) -> Vec<usize> {
    let fits: Vec<usize> = trucks
        .iter()
        .enumerate()
        .filter(|(_, t)| parcel.volume() <= t.available_space())
        .map(|(i, _)| i)
        .collect();
    let heading: Vec<usize> = fits
        .iter()
        .copied()
        .filter(|&i| trucks[i].route().last() == parcel.destination())
        .collect();
    if heading.is_empty() {
        fits
    } else {
        heading
    }
}

/// Schedules parcels one at a time onto the best eligible truck.
///
/// Deterministic for a given configuration and input.
///
/// # Examples
///
/// ```
/// use u_parcel::models::{Parcel, Truck};
/// use u_parcel::scheduler::{GreedyConfig, GreedyScheduler, Order, ParcelPriority, Scheduler};
///
/// let config = GreedyConfig::new(ParcelPriority::Volume, Order::NonIncreasing, Order::NonIncreasing);
/// let parcels = vec![
///     Parcel::new(1, 3, "Toronto", "Hamilton").unwrap(),
///     Parcel::new(2, 8, "Toronto", "Ottawa").unwrap(),
/// ];
/// let mut trucks = vec![
///     Truck::new(1, 10, "Toronto").unwrap(),
///     Truck::new(2, 12, "Toronto").unwrap(),
/// ];
///
/// let unscheduled = GreedyScheduler::new(config).schedule(&parcels, &mut trucks, false);
/// assert!(unscheduled.is_empty());
/// // The larger parcel goes first, onto the emptiest truck.
/// assert_eq!(trucks[1].parcels()[0].id(), 2);
/// assert_eq!(trucks[0].parcels()[0].id(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyScheduler {
    config: GreedyConfig,
}

impl GreedyScheduler {
    /// Creates a greedy scheduler with the given configuration.
    pub fn new(config: GreedyConfig) -> Self {
        Self { config }
    }

    /// The configuration this scheduler was built with.
    pub fn config(&self) -> &GreedyConfig {
        &self.config
    }

    /// Predicate ordering parcels per the configured key and direction.
    pub fn parcel_precedes(&self) -> ParcelPrecedes {
        match (self.config.parcel_priority, self.config.parcel_order) {
            (ParcelPriority::Volume, Order::NonDecreasing) => volume_non_decreasing,
            (ParcelPriority::Volume, Order::NonIncreasing) => volume_non_increasing,
            (ParcelPriority::Destination, Order::NonDecreasing) => destination_non_decreasing,
            (ParcelPriority::Destination, Order::NonIncreasing) => destination_non_increasing,
        }
    }

    /// Predicate ordering trucks by available space.
    pub fn truck_precedes(&self) -> TruckPrecedes {
        match self.config.truck_order {
            Order::NonDecreasing => least_available,
            Order::NonIncreasing => most_available,
        }
    }
}

impl Scheduler for GreedyScheduler {
    fn schedule(&mut self, parcels: &[Parcel], trucks: &mut [Truck], verbose: bool) -> Vec<Parcel> {
        let level = if verbose { Level::Info } else { Level::Debug };
        let parcel_precedes = self.parcel_precedes();
        let truck_precedes = self.truck_precedes();

        let mut queue = PriorityQueue::new(|a: &&Parcel, b: &&Parcel| parcel_precedes(a, b));
        queue.extend(parcels.iter());

        let mut unscheduled = Vec::new();
        while let Some(parcel) = queue.remove() {
            log::log!(level, "chosen parcel: {parcel}");
            let chosen = {
                let mut ranked =
                    PriorityQueue::new(|&a: &usize, &b: &usize| truck_precedes(&trucks[a], &trucks[b]));
                ranked.extend(eligible_trucks(trucks, parcel));
                ranked.remove()
            };
            match chosen {
                Some(i) if trucks[i].pack(parcel) => {
                    log::log!(level, "packed onto {}", trucks[i]);
                }
                _ => {
                    log::log!(level, "parcel {} cannot be packed", parcel.id());
                    unscheduled.push(parcel.clone());
                }
            }
        }

        log::debug!(
            "greedy scheduling ({:?}) done: {} of {} parcels unscheduled",
            self.config,
            unscheduled.len(),
            parcels.len()
        );
        unscheduled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn parcel(id: usize, volume: u32, destination: &str) -> Parcel {
        Parcel::new(id, volume, "Toronto", destination).expect("valid")
    }

    fn truck(id: usize, capacity: u32) -> Truck {
        Truck::new(id, capacity, "Toronto").expect("valid")
    }

    fn ids(parcels: &[Parcel]) -> Vec<usize> {
        parcels.iter().map(Parcel::id).collect()
    }

    fn scheduler(priority: ParcelPriority, parcel_order: Order, truck_order: Order) -> GreedyScheduler {
        GreedyScheduler::new(GreedyConfig::new(priority, parcel_order, truck_order))
    }

    #[test]
    fn test_smallest_parcel_first_onto_least_available() {
        let ps = vec![parcel(1, 5, "Hamilton"), parcel(2, 4, "Montreal"), parcel(3, 2, "Windsor")];
        let mut ts = vec![truck(1, 10), truck(2, 20)];
        let mut s = scheduler(ParcelPriority::Volume, Order::NonDecreasing, Order::NonDecreasing);
        let unscheduled = s.schedule(&ps, &mut ts, false);
        assert!(unscheduled.is_empty());
        // Size 2 goes first onto truck 1 (least space), then 4 and 5 follow it
        // there until only truck 2 has room.
        assert_eq!(ids(ts[0].parcels()), vec![3, 2]);
        assert_eq!(ids(ts[1].parcels()), vec![1]);
    }

    #[test]
    fn test_smallest_parcel_first_onto_most_available() {
        let ps = vec![parcel(1, 5, "Hamilton"), parcel(2, 4, "Montreal"), parcel(3, 2, "Windsor")];
        let mut ts = vec![truck(1, 10), truck(2, 20)];
        let mut s = scheduler(ParcelPriority::Volume, Order::NonDecreasing, Order::NonIncreasing);
        s.schedule(&ps, &mut ts, false);
        assert_eq!(ids(ts[1].parcels()), vec![3, 2, 1]);
        assert!(ts[0].is_empty());
    }

    #[test]
    fn test_prefers_truck_heading_to_destination() {
        let ps = vec![parcel(1, 3, "Hamilton"), parcel(2, 3, "Ottawa"), parcel(3, 1, "Hamilton")];
        let mut ts = vec![truck(1, 10), truck(2, 10)];
        let mut s = scheduler(ParcelPriority::Volume, Order::NonIncreasing, Order::NonIncreasing);
        s.schedule(&ps, &mut ts, false);
        // Ties keep insertion order: parcel 1 then 2; parcel 3 joins the truck
        // already ending at Hamilton despite having less space.
        assert_eq!(ids(ts[0].parcels()), vec![1, 3]);
        assert_eq!(ids(ts[1].parcels()), vec![2]);
        assert_eq!(ts[0].route().stops(), ["Toronto", "Hamilton"]);
    }

    #[test]
    fn test_heading_truck_without_room_is_ignored() {
        let ps = vec![parcel(1, 9, "Hamilton"), parcel(2, 5, "Hamilton")];
        let mut ts = vec![truck(1, 10), truck(2, 6)];
        let mut s = scheduler(ParcelPriority::Volume, Order::NonIncreasing, Order::NonIncreasing);
        let unscheduled = s.schedule(&ps, &mut ts, false);
        assert!(unscheduled.is_empty());
        assert_eq!(ids(ts[0].parcels()), vec![1]);
        assert_eq!(ids(ts[1].parcels()), vec![2]);
    }

    #[rstest]
    #[case(Order::NonDecreasing, vec![3, 1, 2])]
    #[case(Order::NonIncreasing, vec![2, 1, 3])]
    fn test_destination_ordering(#[case] order: Order, #[case] expected: Vec<usize>) {
        let ps = vec![parcel(1, 1, "Montreal"), parcel(2, 1, "Windsor"), parcel(3, 1, "Hamilton")];
        let mut ts = vec![truck(1, 10)];
        scheduler(ParcelPriority::Destination, order, Order::NonIncreasing).schedule(&ps, &mut ts, false);
        assert_eq!(ids(ts[0].parcels()), expected);
    }

    #[test]
    fn test_unscheduled_in_removal_order() {
        let ps = vec![parcel(1, 30, "a"), parcel(2, 2, "b"), parcel(3, 50, "c"), parcel(4, 9, "d")];
        let mut ts = vec![truck(1, 10)];
        let mut s = scheduler(ParcelPriority::Volume, Order::NonIncreasing, Order::NonIncreasing);
        let unscheduled = s.schedule(&ps, &mut ts, false);
        assert_eq!(ids(&unscheduled), vec![3, 1, 2]);
        assert_eq!(ids(ts[0].parcels()), vec![4]);
    }

    #[test]
    fn test_no_trucks() {
        let ps = vec![parcel(1, 1, "a")];
        let unscheduled = GreedyScheduler::new(GreedyConfig::default()).schedule(&ps, &mut [], true);
        assert_eq!(ids(&unscheduled), vec![1]);
    }

    #[test]
    fn test_eligible_trucks_fallback() {
        let mut ts = vec![truck(1, 10), truck(2, 10), truck(3, 2)];
        assert_eq!(eligible_trucks(&ts, &parcel(9, 4, "Ottawa")), vec![0, 1]);
        ts[1].pack(&parcel(1, 1, "Ottawa"));
        assert_eq!(eligible_trucks(&ts, &parcel(9, 4, "Ottawa")), vec![1]);
        assert_eq!(eligible_trucks(&ts, &parcel(9, 4, "Hamilton")), vec![0, 1]);
        assert!(eligible_trucks(&ts, &parcel(9, 11, "Ottawa")).is_empty());
    }

    proptest! {
        #[test]
        fn prop_deterministic(
            volumes in prop::collection::vec(1u32..25, 0..20),
            capacities in prop::collection::vec(1u32..50, 1..5),
            by_destination in any::<bool>(),
            ascending in any::<bool>(),
            fullest_first in any::<bool>(),
        ) {
            let ps: Vec<Parcel> = volumes
                .iter()
                .enumerate()
                .map(|(i, &v)| parcel(i, v, ["a", "b", "c"][i % 3]))
                .collect();
            let priority = if by_destination { ParcelPriority::Destination } else { ParcelPriority::Volume };
            let parcel_order = if ascending { Order::NonDecreasing } else { Order::NonIncreasing };
            let truck_order = if fullest_first { Order::NonDecreasing } else { Order::NonIncreasing };
            let run = || {
                let mut ts: Vec<Truck> = capacities.iter().enumerate().map(|(i, &c)| truck(i, c)).collect();
                let unscheduled = scheduler(priority, parcel_order, truck_order).schedule(&ps, &mut ts, false);
                let placed: Vec<Vec<usize>> = ts.iter().map(|t| ids(t.parcels())).collect();
                (ids(&unscheduled), placed)
            };
            let first = run();
            prop_assert_eq!(&first, &run());
            let packed: usize = first.1.iter().map(Vec::len).sum();
            prop_assert_eq!(packed + first.0.len(), ps.len());
        }
    }
}
