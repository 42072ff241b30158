//! # Portfolio Optimizer
//!
//! Picks one representative instrument per requested sector, assigns tilted
//! and normalized weights, and attaches the analytics metrics. The optimizer
//! holds no mutable state: every call returns a fresh `Portfolio`.

use crate::error::OptimizerError;
use crate::latency::LatencySimulator;
use crate::selection::{dedupe_sectors, select_best_per_sector};
use crate::weighting::tilted_weights;
use analytics::MetricsEngine;
use configuration::{Config, WeightingParams};
use core_types::{Allocation, Portfolio, Sector};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use universe::InstrumentUniverse;

pub mod error;
pub mod latency;
pub mod selection;
pub mod weighting;

/// What the user asked for: a budget and the sectors to spread it over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    pub budget: Decimal,
    #[serde(default)]
    pub sectors: Vec<Sector>,
}

impl OptimizationRequest {
    pub fn new(budget: Decimal, sectors: Vec<Sector>) -> Self {
        Self { budget, sectors }
    }

    pub fn validate(&self) -> Result<(), OptimizerError> {
        if self.budget <= Decimal::ZERO {
            return Err(OptimizerError::InvalidBudget(self.budget));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PortfolioOptimizer {
    universe: InstrumentUniverse,
    weighting: WeightingParams,
    metrics: MetricsEngine,
    latency: LatencySimulator,
}

impl PortfolioOptimizer {
    pub fn new(
        universe: InstrumentUniverse,
        weighting: WeightingParams,
        metrics: MetricsEngine,
        latency: LatencySimulator,
    ) -> Self {
        Self {
            universe,
            weighting,
            metrics,
            latency,
        }
    }

    /// Wires every component from the loaded configuration.
    pub fn from_config(config: &Config, universe: InstrumentUniverse) -> Self {
        Self::new(
            universe,
            config.optimizer.clone(),
            MetricsEngine::new(config.metrics.clone()),
            LatencySimulator::new(&config.latency),
        )
    }

    pub fn universe(&self) -> &InstrumentUniverse {
        &self.universe
    }

    pub fn latency(&self) -> &LatencySimulator {
        &self.latency
    }

    /// Builds the portfolio for a request.
    ///
    /// A non-positive budget is rejected. An empty sector list, or one the
    /// universe cannot serve, yields an empty portfolio with zero metrics.
    pub fn optimize(&self, request: &OptimizationRequest) -> Result<Portfolio, OptimizerError> {
        request.validate()?;

        let sectors = dedupe_sectors(&request.sectors);
        let selections = select_best_per_sector(&self.universe, &sectors);
        if selections.is_empty() {
            tracing::info!(budget = %request.budget, "No sectors selected; returning empty portfolio.");
            return Ok(Portfolio::empty(request.budget));
        }

        let ratios: Vec<Decimal> = selections.iter().map(|s| s.ratio).collect();
        let weights = tilted_weights(&ratios, &self.weighting)?;

        let allocations: Vec<Allocation> = selections
            .iter()
            .zip(weights)
            .map(|(selection, weight)| {
                Allocation::new(selection.instrument.clone(), weight, request.budget)
            })
            .collect();

        let metrics = self.metrics.calculate(&allocations)?;
        let portfolio = Portfolio::new(request.budget, allocations, metrics);

        tracing::info!(
            run_id = %portfolio.run_id,
            budget = %portfolio.budget,
            positions = portfolio.allocations.len(),
            expected_return = %portfolio.metrics.expected_return,
            volatility = %portfolio.metrics.volatility,
            "Portfolio optimized."
        );
        Ok(portfolio)
    }

    /// `optimize` behind the simulated service latency.
    pub async fn simulate(&self, request: &OptimizationRequest) -> Result<Portfolio, OptimizerError> {
        let delay = self.latency.wait().await;
        tracing::debug!(delay_ms = delay.as_millis() as u64, "Simulated optimization latency elapsed.");
        self.optimize(request)
    }
}

impl Default for PortfolioOptimizer {
    fn default() -> Self {
        Self::from_config(&Config::default(), InstrumentUniverse::builtin())
    }
}
