use core_types::PortfolioMetrics;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Coarse volatility bucket shown as a badge next to the risk figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_volatility(volatility: Decimal) -> Self {
        if volatility < dec!(0.15) {
            RiskLevel::Low
        } else if volatility < dec!(0.25) {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Qualitative reading of the Sharpe-like ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceGrade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl PerformanceGrade {
    pub fn from_sharpe(sharpe_ratio: Decimal) -> Self {
        if sharpe_ratio > dec!(2) {
            PerformanceGrade::Excellent
        } else if sharpe_ratio > dec!(1) {
            PerformanceGrade::Good
        } else if sharpe_ratio > dec!(0.5) {
            PerformanceGrade::Fair
        } else {
            PerformanceGrade::Poor
        }
    }
}

/// The metrics plus everything the results panel derives from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub metrics: PortfolioMetrics,
    pub risk_level: RiskLevel,
    pub performance_grade: PerformanceGrade,
    /// Progress-bar fill for the Sharpe ratio, 0-100.
    pub sharpe_gauge: Decimal,
    /// Progress-bar fill for the diversification score, 0-100.
    pub diversification_gauge: Decimal,
}

impl MetricsSummary {
    pub fn new(metrics: PortfolioMetrics) -> Self {
        let hundred = dec!(100);
        Self {
            metrics,
            risk_level: RiskLevel::from_volatility(metrics.volatility),
            performance_grade: PerformanceGrade::from_sharpe(metrics.sharpe_ratio),
            sharpe_gauge: (metrics.sharpe_ratio * dec!(50)).min(hundred),
            diversification_gauge: metrics.diversification_score * hundred,
        }
    }
}

impl From<PortfolioMetrics> for MetricsSummary {
    fn from(metrics: PortfolioMetrics) -> Self {
        Self::new(metrics)
    }
}
