//! Route type.

use crate::distance::DistanceMap;

use super::ReportError;

/// The ordered list of cities a truck travels through.
///
/// A route starts at the truck's depot and implicitly returns there after
/// the last stop. Consecutive stops are never equal: pushing the city the
/// route already ends at is a no-op.
///
/// # Examples
///
/// ```
/// use u_parcel::models::Route;
///
/// let mut route = Route::new("Toronto");
/// assert!(route.push_stop("Hamilton"));
/// assert!(!route.push_stop("Hamilton"));
/// assert_eq!(route.stops(), ["Toronto", "Hamilton"]);
/// assert_eq!(route.last(), "Hamilton");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    depot: String,
    stops: Vec<String>,
}

impl Route {
    /// Creates a route containing only the depot.
    pub fn new(depot: impl Into<String>) -> Self {
        let depot = depot.into();
        Self {
            stops: vec![depot.clone()],
            depot,
        }
    }

    /// Appends `city` unless the route already ends there.
    ///
    /// Returns `true` if a stop was added.
    pub fn push_stop(&mut self, city: &str) -> bool {
        if self.last() == city {
            return false;
        }
        self.stops.push(city.to_string());
        true
    }

    /// The city the route starts from and returns to.
    pub fn depot(&self) -> &str {
        &self.depot
    }

    /// The city the route currently ends at.
    pub fn last(&self) -> &str {
        self.stops.last().map_or(self.depot.as_str(), String::as_str)
    }

    /// All stops in visit order, starting with the depot.
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Number of stops after the depot.
    pub fn len(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// Returns `true` if the route has no stops besides the depot.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Legs of the closed tour: each consecutive pair, then last back to depot.
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.stops
            .windows(2)
            .filter_map(|w| match w {
                [from, to] => Some((from.as_str(), to.as_str())),
                _ => None,
            })
            .chain(std::iter::once((self.last(), self.depot.as_str())))
    }

    /// Total length of the closed tour according to `distances`.
    ///
    /// Fails with [`ReportError::UnknownDistance`] on the first leg whose
    /// distance is not recorded.
    pub fn length(&self, distances: &DistanceMap) -> Result<u64, ReportError> {
        self.legs().try_fold(0u64, |total, (from, to)| {
            distances
                .distance(from, to)
                .map(|d| total + u64::from(d))
                .ok_or_else(|| ReportError::UnknownDistance {
                    from: from.to_string(),
                    to: to.to_string(),
                })
        })
    }
}
