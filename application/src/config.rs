//! [`Config`]-related definitions.

use common::Percent;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::{Display, Error};
use serde::Deserialize;
use service::domain::cancellation::{fee, FeeSchedule as DomainFeeSchedule};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Service configuration.
    pub service: Service,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Service configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Service {
    /// Cancellation fee schedule.
    pub fee_schedule: FeeSchedule,
}

impl TryFrom<Service> for service::Config {
    type Error = InvalidFeePercent;

    fn try_from(value: Service) -> Result<Self, Self::Error> {
        let Service {
            fee_schedule: FeeSchedule { tiers, fallback },
        } = value;

        let percent = |v: u8| Percent::new(v).ok_or(InvalidFeePercent(v));
        let tiers = tiers
            .into_iter()
            .map(|t| {
                Ok(fee::Tier {
                    min_days_before: t.min_days_before,
                    fee: percent(t.fee)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            fee_schedule: DomainFeeSchedule::new(tiers, percent(fallback)?),
        })
    }
}

/// Cancellation fee schedule configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct FeeSchedule {
    /// Fee tiers, matched from the furthest departure to the nearest one.
    #[default(vec![
        FeeTier { min_days_before: 30, fee: 10 },
        FeeTier { min_days_before: 15, fee: 25 },
        FeeTier { min_days_before: 7, fee: 50 },
    ])]
    pub tiers: Vec<FeeTier>,

    /// Fee percent applied when no tier matches.
    #[default(75)]
    pub fallback: u8,
}

/// Single tier of a [`FeeSchedule`].
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct FeeTier {
    /// Minimal number of days before departure the tier applies to.
    pub min_days_before: i64,

    /// Fee percent of the tier.
    pub fee: u8,
}

/// Error of a fee percent being out of the `0..=100` range.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("fee percent must be within `0..=100` range, got {_0}")]
pub struct InvalidFeePercent(#[error(not(source))] u8);

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    Info,

    /// Designates hazardous situations.
    ///
    /// Default, so the console is not cluttered by informational messages.
    #[default]
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use common::Percent;

    use super::{FeeSchedule, FeeTier, Service};

    #[test]
    fn default_matches_service_default() {
        let conf = service::Config::try_from(Service::default()).unwrap();

        assert_eq!(conf.fee_schedule, service::Config::default().fee_schedule);
    }

    #[test]
    fn custom_schedule() {
        let conf = service::Config::try_from(Service {
            fee_schedule: FeeSchedule {
                tiers: vec![FeeTier {
                    min_days_before: 3,
                    fee: 0,
                }],
                fallback: 100,
            },
        })
        .unwrap();

        let schedule = conf.fee_schedule;
        assert_eq!(schedule.fee_percent(3), Percent::new(0_u8).unwrap());
        assert_eq!(schedule.fee_percent(2), Percent::new(100_u8).unwrap());
    }

    #[test]
    fn rejects_invalid_percent() {
        let err = service::Config::try_from(Service {
            fee_schedule: FeeSchedule {
                tiers: vec![],
                fallback: 101,
            },
        })
        .unwrap_err();

        assert_eq!(err.0, 101);
    }
}
