use crate::{AppState, error::AppError};
use analytics::{ChartSeries, MetricsSummary};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Html,
};
use core_types::{Instrument, Portfolio, Sector};
use optimizer::OptimizationRequest;
use serde::Serialize;
use std::sync::Arc;

/// The single-page UI: budget input, sector toggles and the results panel.
const INDEX_HTML: &str = include_str!("../static/index.html");

#[derive(Debug, Serialize)]
pub struct SectorInfo {
    pub sector: Sector,
    pub label: &'static str,
    pub color: &'static str,
    pub instruments: usize,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub portfolio: Portfolio,
    pub summary: MetricsSummary,
    pub chart: ChartSeries,
}

impl From<Portfolio> for OptimizeResponse {
    fn from(portfolio: Portfolio) -> Self {
        let summary = MetricsSummary::new(portfolio.metrics);
        let chart = ChartSeries::from_allocations(&portfolio.allocations);
        Self {
            portfolio,
            summary,
            chart,
        }
    }
}

/// # GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// # GET /api/sectors
/// Every sector the form can offer, with how many instruments back it.
pub async fn get_sectors(State(state): State<Arc<AppState>>) -> Json<Vec<SectorInfo>> {
    let universe = state.optimizer.universe();
    let sectors = Sector::ALL
        .into_iter()
        .map(|sector| SectorInfo {
            sector,
            label: sector.label(),
            color: sector.color(),
            instruments: universe.instruments(sector).len(),
        })
        .collect();
    Json(sectors)
}

/// # GET /api/universe
pub async fn get_universe(State(state): State<Arc<AppState>>) -> Json<Vec<Instrument>> {
    Json(state.optimizer.universe().all().cloned().collect())
}

/// # POST /api/optimize
/// Runs the optimizer behind the simulated service latency.
/// Body rejections are answered with the same JSON error shape.
pub async fn post_optimize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<OptimizationRequest>, JsonRejection>,
) -> Result<Json<OptimizeResponse>, AppError> {
    let Json(request) = payload?;
    tracing::info!(budget = %request.budget, sectors = request.sectors.len(), "Optimization requested.");
    let portfolio = state.optimizer.simulate(&request).await?;
    Ok(Json(portfolio.into()))
}
