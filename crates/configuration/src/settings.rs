use crate::error::ConfigError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section carries defaults, so an empty or missing `config.toml`
/// yields the stock behaviour.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub optimizer: WeightingParams,
    pub metrics: MetricsParams,
    pub latency: LatencyParams,
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    /// Optional TOML file replacing the built-in instrument table.
    pub universe_file: Option<PathBuf>,
}

impl Config {
    /// Rejects parameter combinations the optimizer cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.optimizer.validate()?;
        self.metrics.validate()?;
        Ok(())
    }
}

/// Parameters for the risk-tilted weighting step.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeightingParams {
    /// Lower clamp applied to each raw weight before normalization.
    pub min_weight: Decimal,
    /// Upper clamp applied to each raw weight before normalization.
    pub max_weight: Decimal,
    /// Return/risk ratio at which an instrument gets exactly the equal weight.
    pub sharpe_pivot: Decimal,
    /// How strongly the return/risk ratio moves a weight away from equal.
    pub tilt_factor: Decimal,
}

impl Default for WeightingParams {
    fn default() -> Self {
        Self {
            min_weight: dec!(0.05),
            max_weight: dec!(0.40),
            sharpe_pivot: dec!(0.5),
            tilt_factor: dec!(0.1),
        }
    }
}

impl WeightingParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_weight <= Decimal::ZERO {
            return Err(ConfigError::ValidationError(
                "optimizer.min_weight must be greater than 0".to_string(),
            ));
        }
        if self.max_weight > Decimal::ONE {
            return Err(ConfigError::ValidationError(
                "optimizer.max_weight must not exceed 1".to_string(),
            ));
        }
        if self.min_weight > self.max_weight {
            return Err(ConfigError::ValidationError(format!(
                "optimizer.min_weight ({}) is above optimizer.max_weight ({})",
                self.min_weight, self.max_weight
            )));
        }
        Ok(())
    }
}

/// Constants feeding the closed-form portfolio statistics.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsParams {
    /// Annual risk-free rate subtracted in the Sharpe-like ratio.
    pub risk_free_rate: Decimal,
    /// Scale of the `sqrt(variance)` term added for multi-asset portfolios.
    pub correlation_adjustment: Decimal,
    /// Drawdown estimate as a multiple of volatility.
    pub drawdown_multiplier: Decimal,
    /// Number of sectors a fully diversified portfolio spans.
    pub sector_universe_size: u32,
    /// Penalty applied to the spread of weights around equal weight.
    pub concentration_penalty: Decimal,
}

impl Default for MetricsParams {
    fn default() -> Self {
        Self {
            risk_free_rate: dec!(0.03),
            correlation_adjustment: dec!(0.3),
            drawdown_multiplier: dec!(1.5),
            sector_universe_size: 8,
            concentration_penalty: dec!(5),
        }
    }
}

impl MetricsParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sector_universe_size == 0 {
            return Err(ConfigError::ValidationError(
                "metrics.sector_universe_size must be at least 1".to_string(),
            ));
        }
        if self.correlation_adjustment.is_sign_negative() {
            return Err(ConfigError::ValidationError(
                "metrics.correlation_adjustment must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// The artificial delay standing in for a remote optimization service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LatencyParams {
    pub base_ms: u64,
    /// Upper bound of the uniform random delay added on top of `base_ms`.
    pub jitter_ms: u64,
}

impl Default for LatencyParams {
    fn default() -> Self {
        Self {
            base_ms: 1500,
            jitter_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            ConfigError::ValidationError(format!("server.host '{}' is not an IP address", self.host))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    pub format: LogFormat,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            directory: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn inverted_weight_bounds_are_rejected() {
        let mut config = Config::default();
        config.optimizer.min_weight = dec!(0.5);
        config.optimizer.max_weight = dec!(0.2);
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn zero_min_weight_is_rejected() {
        let mut config = Config::default();
        config.optimizer.min_weight = Decimal::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_sector_universe_is_rejected() {
        let mut config = Config::default();
        config.metrics.sector_universe_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn socket_addr_requires_an_ip() {
        let server = ServerSettings {
            host: "localhost".to_string(),
            port: 80,
        };
        assert!(server.socket_addr().is_err());

        let addr = ServerSettings::default().socket_addr().unwrap();
        assert_eq!(addr.port(), 3000);
    }
}
