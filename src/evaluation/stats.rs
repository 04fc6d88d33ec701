//! Fleet statistics collected after a scheduling run.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMap;
use crate::models::{Fleet, Parcel, ReportError};

/// Aggregate figures describing how well a fleet was loaded.
///
/// Averages that are undefined for the fleet (no loaded trucks, or no truck
/// that travelled) are `None`.
///
/// # Examples
///
/// ```
/// use u_parcel::distance::DistanceMap;
/// use u_parcel::evaluation::FleetStats;
/// use u_parcel::models::{Fleet, Parcel, Truck};
///
/// let mut dm = DistanceMap::new();
/// dm.add_distance("Toronto", "Hamilton", 9).unwrap();
///
/// let mut truck = Truck::new(1, 10, "Toronto").unwrap();
/// truck.pack(&Parcel::new(1, 5, "Toronto", "Hamilton").unwrap());
/// let fleet = Fleet::from(vec![truck, Truck::new(2, 10, "Toronto").unwrap()]);
///
/// let stats = FleetStats::collect(&fleet, &dm, &[]).unwrap();
/// assert_eq!(stats.used_trucks, 1);
/// assert_eq!(stats.total_distance, 18);
/// assert_eq!(stats.avg_fullness, Some(50.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetStats {
    /// Number of trucks in the fleet.
    pub fleet_size: usize,
    /// Trucks carrying at least one parcel.
    pub used_trucks: usize,
    /// Trucks left empty.
    pub unused_trucks: usize,
    /// Free space summed over loaded trucks.
    pub unused_space: u64,
    /// Average percent fullness of loaded trucks.
    pub avg_fullness: Option<f64>,
    /// Parcels the scheduler could not place.
    pub unscheduled_parcels: usize,
    /// Closed-route distance summed over loaded trucks.
    pub total_distance: u64,
    /// Average distance over trucks that travelled.
    pub avg_distance: Option<f64>,
}

impl FleetStats {
    /// Collects statistics for `fleet` using `distances` for route lengths.
    ///
    /// Fails if a loaded truck's route has a leg missing from `distances`.
    pub fn collect(
        fleet: &Fleet,
        distances: &DistanceMap,
        unscheduled: &[Parcel],
    ) -> Result<Self, ReportError> {
        let used_trucks = fleet.num_nonempty_trucks();
        let total_distance = fleet.total_distance_travelled(distances)?;
        Ok(Self {
            fleet_size: fleet.num_trucks(),
            used_trucks,
            unused_trucks: fleet.num_trucks() - used_trucks,
            unused_space: fleet.total_unused_space(),
            avg_fullness: optional(fleet.average_fullness())?,
            unscheduled_parcels: unscheduled.len(),
            total_distance,
            avg_distance: optional(fleet.average_distance_travelled(distances))?,
        })
    }
}

/// Maps an undefined average to `None`, keeping real failures.
fn optional(average: Result<f64, ReportError>) -> Result<Option<f64>, ReportError> {
    match average {
        Ok(value) => Ok(Some(value)),
        Err(ReportError::NoNonEmptyTrucks | ReportError::NoDistanceTravelled) => Ok(None),
        Err(err) => Err(err),
    }
}
