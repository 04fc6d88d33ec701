//! Error types for the domain model.

use thiserror::Error;

/// Errors raised when constructing parcels, trucks, or fleets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Parcels must have a positive volume.
    #[error("parcel {id} must have a positive volume")]
    ZeroVolume {
        /// Parcel ID.
        id: usize,
    },
    /// Trucks must have a positive capacity.
    #[error("truck {id} must have a positive capacity")]
    ZeroCapacity {
        /// Truck ID.
        id: usize,
    },
    /// A fleet may hold at most one truck per ID.
    #[error("truck {id} is already part of the fleet")]
    DuplicateTruck {
        /// Truck ID.
        id: usize,
    },
}

/// Errors raised while computing fleet statistics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// A route leg has no recorded distance.
    #[error("no distance recorded from {from} to {to}")]
    UnknownDistance {
        /// Origin city of the leg.
        from: String,
        /// Destination city of the leg.
        to: String,
    },
    /// An average over non-empty trucks was requested but every truck is empty.
    #[error("fleet has no non-empty trucks")]
    NoNonEmptyTrucks,
    /// An average over travelling trucks was requested but none travelled.
    #[error("no truck in the fleet travelled a non-zero distance")]
    NoDistanceTravelled,
}
