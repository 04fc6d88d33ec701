//! Scheduler configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{GreedyScheduler, RandomScheduler, Scheduler};

/// Errors raised when parsing scheduler options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An option was given a value outside its allowed set.
    #[error("unrecognised value {value:?} for {option}; expected one of {expected}")]
    Unrecognised {
        /// Name of the option being parsed.
        option: &'static str,
        /// The rejected value.
        value: String,
        /// The accepted values, comma-separated.
        expected: &'static str,
    },
}

/// Parcel attribute the greedy scheduler orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParcelPriority {
    /// Order parcels by volume.
    Volume,
    /// Order parcels by destination name.
    Destination,
}

impl FromStr for ParcelPriority {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "volume" => Ok(Self::Volume),
            "destination" => Ok(Self::Destination),
            _ => Err(ConfigError::Unrecognised {
                option: "parcel_priority",
                value: s.to_string(),
                expected: "volume, destination",
            }),
        }
    }
}

impl fmt::Display for ParcelPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Volume => "volume",
            Self::Destination => "destination",
        })
    }
}

/// Direction in which a key is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Order {
    /// Smallest key first.
    NonDecreasing,
    /// Largest key first.
    NonIncreasing,
}

impl Order {
    fn parse(option: &'static str, s: &str) -> Result<Self, ConfigError> {
        match s {
            "non-decreasing" => Ok(Self::NonDecreasing),
            "non-increasing" => Ok(Self::NonIncreasing),
            _ => Err(ConfigError::Unrecognised {
                option,
                value: s.to_string(),
                expected: "non-decreasing, non-increasing",
            }),
        }
    }
}

impl FromStr for Order {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("order", s)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NonDecreasing => "non-decreasing",
            Self::NonIncreasing => "non-increasing",
        })
    }
}

/// Configuration for [`GreedyScheduler`].
///
/// Trucks are always ordered by available space; `truck_order` picks
/// whether the emptiest (`NonIncreasing`) or fullest (`NonDecreasing`)
/// eligible truck wins.
///
/// # Examples
///
/// ```
/// use u_parcel::scheduler::{GreedyConfig, Order, ParcelPriority};
///
/// let config = GreedyConfig::from_options("volume", "non-increasing", "non-decreasing").unwrap();
/// assert_eq!(config.parcel_priority, ParcelPriority::Volume);
/// assert_eq!(config.parcel_order, Order::NonIncreasing);
/// assert!(GreedyConfig::from_options("weight", "non-increasing", "non-decreasing").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreedyConfig {
    /// Parcel attribute to order by.
    pub parcel_priority: ParcelPriority,
    /// Direction to process parcels in.
    pub parcel_order: Order,
    /// Direction to rank eligible trucks by available space.
    pub truck_order: Order,
}

impl GreedyConfig {
    /// Creates a configuration from already-validated options.
    pub fn new(parcel_priority: ParcelPriority, parcel_order: Order, truck_order: Order) -> Self {
        Self {
            parcel_priority,
            parcel_order,
            truck_order,
        }
    }

    /// Parses the three string options, rejecting unknown values.
    pub fn from_options(
        parcel_priority: &str,
        parcel_order: &str,
        truck_order: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            parcel_priority: parcel_priority.parse()?,
            parcel_order: Order::parse("parcel_order", parcel_order)?,
            truck_order: Order::parse("truck_order", truck_order)?,
        })
    }
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self::new(
            ParcelPriority::Volume,
            Order::NonIncreasing,
            Order::NonIncreasing,
        )
    }
}

/// Selects a scheduling algorithm and its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "kebab-case")]
pub enum SchedulerConfig {
    /// Random scheduling, optionally seeded for reproducibility.
    Random {
        /// Seed for the random generator; OS entropy when absent.
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Greedy scheduling with the given orderings.
    Greedy(GreedyConfig),
}

impl SchedulerConfig {
    /// Builds the configured scheduler.
    pub fn build(&self) -> Box<dyn Scheduler> {
        match self {
            Self::Random { seed: Some(seed) } => Box::new(RandomScheduler::with_seed(*seed)),
            Self::Random { seed: None } => Box::new(RandomScheduler::new()),
            Self::Greedy(config) => Box::new(GreedyScheduler::new(*config)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("volume", ParcelPriority::Volume)]
    #[case("destination", ParcelPriority::Destination)]
    fn test_parse_parcel_priority(#[case] input: &str, #[case] expected: ParcelPriority) {
        assert_eq!(input.parse::<ParcelPriority>(), Ok(expected));
        assert_eq!(expected.to_string(), input);
    }

    #[rstest]
    #[case("non-decreasing", Order::NonDecreasing)]
    #[case("non-increasing", Order::NonIncreasing)]
    fn test_parse_order(#[case] input: &str, #[case] expected: Order) {
        assert_eq!(input.parse::<Order>(), Ok(expected));
        assert_eq!(expected.to_string(), input);
    }

    #[rstest]
    #[case("weight", "non-decreasing", "non-decreasing", "parcel_priority")]
    #[case("volume", "ascending", "non-decreasing", "parcel_order")]
    #[case("destination", "non-increasing", "Non-Increasing", "truck_order")]
    fn test_from_options_rejects_unknown(
        #[case] priority: &str,
        #[case] parcel_order: &str,
        #[case] truck_order: &str,
        #[case] bad_option: &str,
    ) {
        match GreedyConfig::from_options(priority, parcel_order, truck_order) {
            Err(ConfigError::Unrecognised { option, .. }) => assert_eq!(option, bad_option),
            other => panic!("expected an error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_options() {
        let config = GreedyConfig::from_options("destination", "non-decreasing", "non-increasing")
            .expect("valid");
        assert_eq!(
            config,
            GreedyConfig::new(
                ParcelPriority::Destination,
                Order::NonDecreasing,
                Order::NonIncreasing
            )
        );
    }

    #[test]
    fn test_error_message_lists_choices() {
        let err = "size".parse::<ParcelPriority>().expect_err("invalid");
        assert_eq!(
            err.to_string(),
            "unrecognised value \"size\" for parcel_priority; expected one of volume, destination"
        );
    }

    #[test]
    fn test_build_schedulers() {
        let configs = [
            SchedulerConfig::Random { seed: Some(7) },
            SchedulerConfig::Random { seed: None },
            SchedulerConfig::Greedy(GreedyConfig::default()),
        ];
        for config in configs {
            let mut scheduler = config.build();
            assert!(scheduler.schedule(&[], &mut [], false).is_empty());
        }
    }

    #[test]
    fn test_deserialize_scheduler_config() {
        let greedy: SchedulerConfig = serde_json::from_str(
            r#"{"algorithm": "greedy", "parcel_priority": "destination",
                "parcel_order": "non-increasing", "truck_order": "non-decreasing"}"#,
        )
        .expect("valid greedy config");
        assert_eq!(
            greedy,
            SchedulerConfig::Greedy(GreedyConfig::new(
                ParcelPriority::Destination,
                Order::NonIncreasing,
                Order::NonDecreasing
            ))
        );

        let random: SchedulerConfig =
            serde_json::from_str(r#"{"algorithm": "random"}"#).expect("valid random config");
        assert_eq!(random, SchedulerConfig::Random { seed: None });

        assert!(serde_json::from_str::<SchedulerConfig>(
            r#"{"algorithm": "greedy", "parcel_priority": "weight",
                "parcel_order": "non-increasing", "truck_order": "non-decreasing"}"#
        )
        .is_err());
    }
}
