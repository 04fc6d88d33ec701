//! Truck type with capacity tracking.

use std::fmt;

use crate::distance::DistanceMap;

use super::{ModelError, Parcel, ReportError, Route};

/// A truck that carries parcels out from its depot and back.
///
/// The truck records the parcels packed onto it in packing order, the
/// route implied by their destinations, and the space still available.
/// `available_space` always equals `capacity` minus the packed volume.
///
/// # Examples
///
/// ```
/// use u_parcel::models::{Parcel, Truck};
///
/// let mut t = Truck::new(1, 10, "Toronto").unwrap();
/// let p = Parcel::new(1, 2, "Toronto", "Vancouver").unwrap();
/// assert!(t.pack(&p));
/// assert_eq!(t.available_space(), 8);
/// assert_eq!(t.route().stops(), ["Toronto", "Vancouver"]);
/// assert_eq!(t.fullness(), 20.0);
/// ```
#[derive(Debug, Clone)]
pub struct Truck {
    id: usize,
    capacity: u32,
    parcels: Vec<Parcel>,
    route: Route,
    available_space: u32,
}

impl Truck {
    /// Creates an empty truck stationed at `depot`.
    ///
    /// Returns [`ModelError::ZeroCapacity`] if `capacity` is zero.
    pub fn new(id: usize, capacity: u32, depot: impl Into<String>) -> Result<Self, ModelError> {
        if capacity == 0 {
            return Err(ModelError::ZeroCapacity { id });
        }
        Ok(Self {
            id,
            capacity,
            parcels: Vec::new(),
            route: Route::new(depot),
            available_space: capacity,
        })
    }

    /// Packs `parcel` if it fits, returning `true` on success.
    ///
    /// A parcel that does not fit leaves the truck untouched. The caller
    /// must not pack the same parcel ID twice.
    pub fn pack(&mut self, parcel: &Parcel) -> bool {
        let loaded = self.loaded_volume();
        if loaded + u64::from(parcel.volume()) > u64::from(self.capacity) {
            return false;
        }
        self.parcels.push(parcel.clone());
        self.route.push_stop(parcel.destination());
        self.available_space = self.capacity - self.parcels.iter().map(Parcel::volume).sum::<u32>();
        true
    }

    fn loaded_volume(&self) -> u64 {
        self.parcels.iter().map(|p| u64::from(p.volume())).sum()
    }

    /// Truck ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Total volume capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// City the truck starts from and returns to.
    pub fn depot(&self) -> &str {
        self.route.depot()
    }

    /// Parcels on the truck, in packing order.
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// Route implied by the packed parcels.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Volume still free on the truck.
    pub fn available_space(&self) -> u32 {
        self.available_space
    }

    /// Returns `true` if no parcel has been packed.
    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Percentage of the capacity in use (0.0 for an empty truck).
    pub fn fullness(&self) -> f64 {
        (self.capacity - self.available_space) as f64 / self.capacity as f64 * 100.0
    }

    /// Length of the closed route; zero for an empty truck.
    pub fn distance_travelled(&self, distances: &DistanceMap) -> Result<u64, ReportError> {
        if self.is_empty() {
            return Ok(0);
        }
        self.route.length(distances)
    }
}

impl fmt::Display for Truck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Truck - id: {}, capacity: {}, depot: {}",
            self.id,
            self.capacity,
            self.depot()
        )
    }
}
