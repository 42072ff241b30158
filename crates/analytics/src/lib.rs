//! # Portfolio Analytics
//!
//! Turns a weighted allocation list into the statistics and derived views the
//! results panel shows.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of the
//!   web server or the CLI and depends only on `core-types` and `configuration`.
//! - **Stateless Calculation:** The `MetricsEngine` holds only its formula
//!   constants. It takes allocations as input and produces `PortfolioMetrics`.
//!
//! ## Public API
//!
//! - `MetricsEngine`: expected return, volatility, Sharpe-like ratio, drawdown
//!   estimate and diversification score.
//! - `MetricsSummary`, `RiskLevel`, `PerformanceGrade`: classified metrics.
//! - `ChartSeries`: pie and bar data for the allocation charts.

// Declare the modules that constitute this crate.
pub mod chart;
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use chart::{BarPoint, ChartSeries, PieSlice};
pub use engine::MetricsEngine;
pub use error::AnalyticsError;
pub use report::{MetricsSummary, PerformanceGrade, RiskLevel};
