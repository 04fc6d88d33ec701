//! Distance map keyed by city names.

use std::collections::HashMap;

use thiserror::Error;

/// Errors raised while recording distances.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceError {
    /// Distances between two cities must be positive.
    #[error("distance from {from} to {to} must be positive")]
    ZeroDistance {
        /// Origin city.
        from: String,
        /// Destination city.
        to: String,
    },
}

/// Directed distances between pairs of named cities.
///
/// Each ordered pair is recorded at most once: the first distance written
/// for `(from, to)` wins and later writes for the same pair are ignored.
/// Looking up a pair that was never recorded yields `None`. A city is
/// always at distance zero from itself.
///
/// # Examples
///
/// ```
/// use u_parcel::distance::DistanceMap;
///
/// let mut dm = DistanceMap::new();
/// dm.add_distance("Toronto", "Hamilton", 9).unwrap();
/// assert_eq!(dm.distance("Toronto", "Hamilton"), Some(9));
/// assert_eq!(dm.distance("Hamilton", "Toronto"), Some(9));
/// assert_eq!(dm.distance("Toronto", "Ottawa"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistanceMap {
    record: HashMap<String, HashMap<String, u32>>,
    len: usize,
}

impl DistanceMap {
    /// Creates an empty distance map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `distance` in both directions between `from` and `to`.
    ///
    /// Returns `Ok(true)` if at least one direction was newly recorded.
    pub fn add_distance(&mut self, from: &str, to: &str, distance: u32) -> Result<bool, DistanceError> {
        self.add_asymmetric(from, to, distance, distance)
    }

    /// Records `there` for `from -> to` and `back` for `to -> from`.
    ///
    /// Returns `Ok(true)` if at least one direction was newly recorded.
    /// Directions already present keep their original distance.
    pub fn add_asymmetric(
        &mut self,
        from: &str,
        to: &str,
        there: u32,
        back: u32,
    ) -> Result<bool, DistanceError> {
        if there == 0 {
            return Err(DistanceError::ZeroDistance {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        if back == 0 {
            return Err(DistanceError::ZeroDistance {
                from: to.to_string(),
                to: from.to_string(),
            });
        }
        let forward = self.insert(from, to, there);
        let reverse = self.insert(to, from, back);
        Ok(forward || reverse)
    }

    fn insert(&mut self, from: &str, to: &str, distance: u32) -> bool {
        let row = self.record.entry(from.to_string()).or_default();
        if row.contains_key(to) {
            return false;
        }
        row.insert(to.to_string(), distance);
        self.len += 1;
        true
    }

    /// Returns the distance from `from` to `to`, or `None` if unknown.
    pub fn distance(&self, from: &str, to: &str) -> Option<u32> {
        if from == to {
            return Some(0);
        }
        self.record.get(from).and_then(|row| row.get(to)).copied()
    }

    /// Returns `true` if a distance from `from` to `to` has been recorded.
    pub fn contains(&self, from: &str, to: &str) -> bool {
        self.record.get(from).is_some_and(|row| row.contains_key(to))
    }

    /// Number of recorded ordered pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
