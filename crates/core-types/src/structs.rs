use crate::enums::Sector;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tradable instrument from the lookup table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: String,
    /// Display name, e.g. "Apple Inc.".
    #[serde(alias = "company")]
    pub name: String,
    pub sector: Sector,
    /// Annual expected return as a fraction (0.12 = 12%).
    pub expected_return: Decimal,
    /// Annual volatility as a fraction.
    pub risk: Decimal,
    /// Correlation hint against the broad market. Carried for display only.
    #[serde(default)]
    pub correlation: Decimal,
}

impl Instrument {
    /// Return per unit of risk. `None` when risk is zero.
    pub fn return_to_risk(&self) -> Option<Decimal> {
        self.expected_return.checked_div(self.risk)
    }
}

/// One line of an optimized portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub instrument: Instrument,
    /// Fraction of the budget; weights across a portfolio sum to one.
    pub weight: Decimal,
    /// `budget * weight`, in currency units.
    pub amount: Decimal,
}

impl Allocation {
    pub fn new(instrument: Instrument, weight: Decimal, budget: Decimal) -> Self {
        Self {
            instrument,
            weight,
            amount: budget * weight,
        }
    }
}

/// Summary statistics derived from a set of allocations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    pub expected_return: Decimal,
    pub volatility: Decimal,
    pub sharpe_ratio: Decimal,
    pub max_drawdown: Decimal,
    pub diversification_score: Decimal,
}

/// The immutable result of a single optimization call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub budget: Decimal,
    pub allocations: Vec<Allocation>,
    pub metrics: PortfolioMetrics,
}

impl Portfolio {
    pub fn new(budget: Decimal, allocations: Vec<Allocation>, metrics: PortfolioMetrics) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            budget,
            allocations,
            metrics,
        }
    }

    /// A portfolio with no positions and zeroed metrics.
    pub fn empty(budget: Decimal) -> Self {
        Self::new(budget, Vec::new(), PortfolioMetrics::default())
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    pub fn total_weight(&self) -> Decimal {
        self.allocations.iter().map(|a| a.weight).sum()
    }

    pub fn total_amount(&self) -> Decimal {
        self.allocations.iter().map(|a| a.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn msft() -> Instrument {
        Instrument {
            symbol: "MSFT".to_string(),
            name: "Microsoft Corporation".to_string(),
            sector: Sector::Technology,
            expected_return: dec!(0.13),
            risk: dec!(0.20),
            correlation: dec!(0.75),
        }
    }

    #[test]
    fn return_to_risk_divides() {
        assert_eq!(msft().return_to_risk(), Some(dec!(0.65)));
    }

    #[test]
    fn return_to_risk_is_none_without_risk() {
        let mut riskless = msft();
        riskless.risk = Decimal::ZERO;
        assert_eq!(riskless.return_to_risk(), None);
    }

    #[test]
    fn allocation_amount_is_budget_times_weight() {
        let allocation = Allocation::new(msft(), dec!(0.25), dec!(10000));
        assert_eq!(allocation.amount, dec!(2500));
    }

    #[test]
    fn empty_portfolio_has_zero_metrics() {
        let portfolio = Portfolio::empty(dec!(5000));
        assert!(portfolio.is_empty());
        assert_eq!(portfolio.metrics, PortfolioMetrics::default());
        assert_eq!(portfolio.total_weight(), Decimal::ZERO);
    }

    #[test]
    fn each_portfolio_gets_a_fresh_run_id() {
        let a = Portfolio::empty(dec!(1));
        let b = Portfolio::empty(dec!(1));
        assert_ne!(a.run_id, b.run_id);
    }

    #[test]
    fn instrument_accepts_company_alias() {
        let json = r#"{"symbol":"JNJ","company":"Johnson & Johnson","sector":"healthcare",
            "expected_return":0.08,"risk":0.15}"#;
        let instrument: Instrument = serde_json::from_str(json).unwrap();
        assert_eq!(instrument.name, "Johnson & Johnson");
        assert_eq!(instrument.correlation, Decimal::ZERO);
    }
}
