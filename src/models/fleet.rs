//! Fleet of trucks and its aggregate statistics.

use std::collections::BTreeMap;
use std::fmt;

use crate::distance::DistanceMap;

use super::{ModelError, Parcel, ReportError, Truck};

/// A fleet of trucks making deliveries.
///
/// Trucks are kept in the order they were added and are unique by ID.
/// Aggregates over "non-empty" trucks ignore trucks with no parcels.
///
/// # Examples
///
/// ```
/// use u_parcel::models::{Fleet, Parcel, Truck};
///
/// let mut fleet = Fleet::new();
/// let mut t = Truck::new(1423, 1000, "Toronto").unwrap();
/// t.pack(&Parcel::new(1, 5, "Buffalo", "Hamilton").unwrap());
/// fleet.add_truck(t).unwrap();
/// assert_eq!(fleet.num_trucks(), 1);
/// assert_eq!(fleet.total_unused_space(), 995);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    trucks: Vec<Truck>,
}

impl Fleet {
    /// Creates a fleet with no trucks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `truck` to the fleet.
    ///
    /// Returns [`ModelError::DuplicateTruck`] if a truck with the same ID is
    /// already present.
    pub fn add_truck(&mut self, truck: Truck) -> Result<(), ModelError> {
        if self.trucks.iter().any(|t| t.id() == truck.id()) {
            return Err(ModelError::DuplicateTruck { id: truck.id() });
        }
        self.trucks.push(truck);
        Ok(())
    }

    /// Trucks in the order they were added.
    pub fn trucks(&self) -> &[Truck] {
        &self.trucks
    }

    /// Mutable access to the trucks, for handing to a scheduler.
    pub fn trucks_mut(&mut self) -> &mut [Truck] {
        &mut self.trucks
    }

    /// Number of trucks in the fleet.
    pub fn num_trucks(&self) -> usize {
        self.trucks.len()
    }

    fn nonempty(&self) -> impl Iterator<Item = &Truck> {
        self.trucks.iter().filter(|t| !t.is_empty())
    }

    /// Number of trucks carrying at least one parcel.
    pub fn num_nonempty_trucks(&self) -> usize {
        self.nonempty().count()
    }

    /// Maps each truck ID to the IDs of its parcels, in packing order.
    pub fn parcel_allocations(&self) -> BTreeMap<usize, Vec<usize>> {
        self.trucks
            .iter()
            .map(|t| (t.id(), t.parcels().iter().map(Parcel::id).collect()))
            .collect()
    }

    /// Unused space summed over non-empty trucks; zero if all are empty.
    pub fn total_unused_space(&self) -> u64 {
        self.nonempty().map(|t| u64::from(t.available_space())).sum()
    }

    /// Average percent fullness over non-empty trucks.
    pub fn average_fullness(&self) -> Result<f64, ReportError> {
        let n = self.num_nonempty_trucks();
        if n == 0 {
            return Err(ReportError::NoNonEmptyTrucks);
        }
        let total: f64 = self.nonempty().map(Truck::fullness).sum();
        Ok(total / n as f64)
    }

    /// Total closed-route distance over all non-empty trucks.
    pub fn total_distance_travelled(&self, distances: &DistanceMap) -> Result<u64, ReportError> {
        self.nonempty().try_fold(0u64, |total, t| {
            t.distance_travelled(distances).map(|d| total + d)
        })
    }

    /// Average distance over trucks that travelled a non-zero distance.
    pub fn average_distance_travelled(&self, distances: &DistanceMap) -> Result<f64, ReportError> {
        let mut total = 0u64;
        let mut travelled = 0usize;
        for t in self.nonempty() {
            let d = t.distance_travelled(distances)?;
            if d > 0 {
                total += d;
                travelled += 1;
            }
        }
        if travelled == 0 {
            return Err(ReportError::NoDistanceTravelled);
        }
        Ok(total as f64 / travelled as f64)
    }
}

impl From<Vec<Truck>> for Fleet {
    /// Builds a fleet, keeping the first truck seen for each ID.
    fn from(trucks: Vec<Truck>) -> Self {
        let mut fleet = Self::new();
        for truck in trucks {
            if let Err(err) = fleet.add_truck(truck) {
                log::warn!("{err}; keeping the first truck with that ID");
            }
        }
        fleet
    }
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "------START------")?;
        for truck in &self.trucks {
            writeln!(f, "{truck}")?;
        }
        write!(f, "------END------")
    }
}
