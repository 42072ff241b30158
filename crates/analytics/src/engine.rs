use crate::error::AnalyticsError;
use configuration::MetricsParams;
use core_types::{Allocation, PortfolioMetrics};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

/// A stateless calculator deriving summary statistics from a weighted list.
#[derive(Debug, Clone, Default)]
pub struct MetricsEngine {
    params: MetricsParams,
}

impl MetricsEngine {
    pub fn new(params: MetricsParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &MetricsParams {
        &self.params
    }

    /// The main entry point for calculating portfolio metrics.
    ///
    /// # Arguments
    ///
    /// * `allocations` - The weighted positions of a portfolio. Weights are
    ///   expected to sum to one.
    ///
    /// # Returns
    ///
    /// The five summary statistics. An empty slice yields all zeros.
    pub fn calculate(&self, allocations: &[Allocation]) -> Result<PortfolioMetrics, AnalyticsError> {
        if allocations.is_empty() {
            return Ok(PortfolioMetrics::default());
        }
        if let Some(bad) = allocations.iter().find(|a| a.weight.is_sign_negative()) {
            return Err(AnalyticsError::InvalidWeights(format!(
                "{} has negative weight {}",
                bad.instrument.symbol, bad.weight
            )));
        }

        let expected_return = allocations
            .iter()
            .map(|a| a.weight * a.instrument.expected_return)
            .sum::<Decimal>();

        let volatility = self.volatility(allocations)?;

        let sharpe_ratio = if volatility.is_zero() {
            Decimal::ZERO
        } else {
            (expected_return - self.params.risk_free_rate) / volatility
        };

        let max_drawdown = volatility * self.params.drawdown_multiplier;
        let diversification_score = self.diversification(allocations);

        tracing::debug!(
            positions = allocations.len(),
            %expected_return,
            %volatility,
            "Portfolio metrics calculated."
        );

        Ok(PortfolioMetrics {
            expected_return,
            volatility,
            sharpe_ratio,
            max_drawdown,
            diversification_score,
        })
    }

    /// Diagonal variance plus a flat correlation term for multi-asset portfolios.
    fn volatility(&self, allocations: &[Allocation]) -> Result<Decimal, AnalyticsError> {
        let variance = allocations
            .iter()
            .map(|a| {
                let w = a.weight;
                let sigma = a.instrument.risk;
                w * w * sigma * sigma
            })
            .sum::<Decimal>();

        let adjustment = if allocations.len() > 1 {
            self.params.correlation_adjustment * sqrt(variance, "variance")?
        } else {
            Decimal::ZERO
        };

        sqrt(variance + adjustment, "volatility")
    }

    /// Sector coverage scaled down by how far weights drift from equal.
    fn diversification(&self, allocations: &[Allocation]) -> Decimal {
        let unique_sectors = allocations
            .iter()
            .map(|a| a.instrument.sector)
            .collect::<BTreeSet<_>>()
            .len();

        let equal_weight = Decimal::ONE / Decimal::from(allocations.len());
        let spread = allocations
            .iter()
            .map(|a| (a.weight - equal_weight) * (a.weight - equal_weight))
            .sum::<Decimal>();

        let coverage =
            Decimal::from(unique_sectors) / Decimal::from(self.params.sector_universe_size);
        let score = coverage * (Decimal::ONE - spread * self.params.concentration_penalty);

        score.min(Decimal::ONE)
    }
}

fn sqrt(value: Decimal, metric: &str) -> Result<Decimal, AnalyticsError> {
    value.sqrt().ok_or_else(|| {
        AnalyticsError::InternalError(format!("Failed to calculate square root for {metric}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Instrument, Sector};
    use rust_decimal_macros::dec;

    fn instrument(symbol: &str, sector: Sector, expected_return: Decimal, risk: Decimal) -> Instrument {
        Instrument {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            sector,
            expected_return,
            risk,
            correlation: Decimal::ZERO,
        }
    }

    fn close(actual: Decimal, expected: Decimal) -> bool {
        (actual - expected).abs() < dec!(0.000000001)
    }

    #[test]
    fn empty_allocations_yield_zero_metrics() {
        let metrics = MetricsEngine::default().calculate(&[]).unwrap();
        assert_eq!(metrics, PortfolioMetrics::default());
    }

    #[test]
    fn single_position_skips_correlation_term() {
        let allocations = [Allocation::new(
            instrument("MSFT", Sector::Technology, dec!(0.13), dec!(0.20)),
            Decimal::ONE,
            dec!(1000),
        )];
        let metrics = MetricsEngine::default().calculate(&allocations).unwrap();

        assert_eq!(metrics.expected_return, dec!(0.13));
        assert!(close(metrics.volatility, dec!(0.2)));
        assert!(close(metrics.sharpe_ratio, dec!(0.5)));
        assert!(close(metrics.max_drawdown, dec!(0.3)));
        assert_eq!(metrics.diversification_score, dec!(0.125));
    }

    #[test]
    fn two_positions_apply_correlation_term() {
        let allocations = [
            Allocation::new(
                instrument("MSFT", Sector::Technology, dec!(0.13), dec!(0.20)),
                dec!(0.5),
                dec!(1000),
            ),
            Allocation::new(
                instrument("UNH", Sector::Healthcare, dec!(0.11), dec!(0.16)),
                dec!(0.5),
                dec!(1000),
            ),
        ];
        let metrics = MetricsEngine::default().calculate(&allocations).unwrap();

        assert_eq!(metrics.expected_return, dec!(0.12));
        assert!(close(metrics.volatility, dec!(0.234134033033)));
        assert!(close(metrics.sharpe_ratio, dec!(0.384395206600)));
        assert!(close(metrics.max_drawdown, dec!(0.351201049550)));
        assert_eq!(metrics.diversification_score, dec!(0.25));
    }

    #[test]
    fn uneven_weights_lower_diversification() {
        let tech = instrument("A", Sector::Technology, dec!(0.1), dec!(0.2));
        let energy = instrument("B", Sector::Energy, dec!(0.1), dec!(0.2));
        let engine = MetricsEngine::default();

        let even = engine
            .calculate(&[
                Allocation::new(tech.clone(), dec!(0.5), dec!(1)),
                Allocation::new(energy.clone(), dec!(0.5), dec!(1)),
            ])
            .unwrap();
        let skewed = engine
            .calculate(&[
                Allocation::new(tech, dec!(0.7), dec!(1)),
                Allocation::new(energy, dec!(0.3), dec!(1)),
            ])
            .unwrap();

        // spread = 2 * 0.2^2 = 0.08, so 0.25 * (1 - 0.4)
        assert_eq!(skewed.diversification_score, dec!(0.15));
        assert!(skewed.diversification_score < even.diversification_score);
    }

    #[test]
    fn diversification_is_capped_at_one() {
        let mut params = MetricsParams::default();
        params.sector_universe_size = 1;
        let engine = MetricsEngine::new(params);
        let allocations = [
            Allocation::new(instrument("A", Sector::Technology, dec!(0.1), dec!(0.2)), dec!(0.5), dec!(1)),
            Allocation::new(instrument("B", Sector::Energy, dec!(0.1), dec!(0.2)), dec!(0.5), dec!(1)),
        ];
        let metrics = engine.calculate(&allocations).unwrap();
        assert_eq!(metrics.diversification_score, Decimal::ONE);
    }

    #[test]
    fn riskless_portfolio_has_zero_sharpe() {
        let allocations = [Allocation::new(
            instrument("CASH", Sector::Utilities, dec!(0.02), Decimal::ZERO),
            Decimal::ONE,
            dec!(100),
        )];
        let metrics = MetricsEngine::default().calculate(&allocations).unwrap();
        assert_eq!(metrics.volatility, Decimal::ZERO);
        assert_eq!(metrics.sharpe_ratio, Decimal::ZERO);
    }

    #[test]
    fn negative_weights_are_rejected() {
        let allocations = [Allocation::new(
            instrument("SHORT", Sector::Finance, dec!(0.1), dec!(0.2)),
            dec!(-0.5),
            dec!(100),
        )];
        assert!(matches!(
            MetricsEngine::default().calculate(&allocations),
            Err(AnalyticsError::InvalidWeights(_))
        ));
    }
}
