//! Parcel type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ModelError;

/// A parcel to be delivered from a source city to a destination city.
///
/// Parcels are immutable once created. Schedulers read them and pack
/// clones onto trucks; the caller's parcels are never modified.
///
/// # Examples
///
/// ```
/// use u_parcel::models::Parcel;
///
/// let p = Parcel::new(1, 5, "Toronto", "Hamilton").unwrap();
/// assert_eq!(p.id(), 1);
/// assert_eq!(p.volume(), 5);
/// assert_eq!(p.destination(), "Hamilton");
/// assert!(Parcel::new(2, 0, "Toronto", "Hamilton").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    id: usize,
    volume: u32,
    source: String,
    destination: String,
}

impl Parcel {
    /// Creates a new parcel.
    ///
    /// Returns [`ModelError::ZeroVolume`] if `volume` is zero.
    pub fn new(
        id: usize,
        volume: u32,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Result<Self, ModelError> {
        if volume == 0 {
            return Err(ModelError::ZeroVolume { id });
        }
        Ok(Self {
            id,
            volume,
            source: source.into(),
            destination: destination.into(),
        })
    }

    /// Parcel ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Volume of the parcel in cubic centimetres.
    pub fn volume(&self) -> u32 {
        self.volume
    }

    /// City the parcel comes from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// City the parcel must be delivered to.
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

impl fmt::Display for Parcel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parcel - id: {}, volume: {}, {} -> {}",
            self.id, self.volume, self.source, self.destination
        )
    }
}
