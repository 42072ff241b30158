use analytics::MetricsSummary;
use comfy_table::{Cell, Table};
use core_types::{Portfolio, Sector};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use universe::InstrumentUniverse;

/// `0.1234` -> `"12.3%"` with `places` decimals.
pub fn format_pct(value: Decimal, places: usize) -> String {
    format!("{:.*}%", places, value * dec!(100))
}

/// Whole-dollar amount with thousands separators, e.g. `$12,500`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(0);
    let digits = rounded.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}${grouped}")
}

pub fn allocation_table(portfolio: &Portfolio) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Symbol",
        "Company",
        "Sector",
        "Weight",
        "Amount",
        "Exp. Return",
        "Risk",
    ]);
    for allocation in &portfolio.allocations {
        let instrument = &allocation.instrument;
        table.add_row(vec![
            Cell::new(&instrument.symbol),
            Cell::new(&instrument.name),
            Cell::new(instrument.sector.label()),
            Cell::new(format_pct(allocation.weight, 1)),
            Cell::new(format_currency(allocation.amount)),
            Cell::new(format_pct(instrument.expected_return, 1)),
            Cell::new(format_pct(instrument.risk, 1)),
        ]);
    }
    table
}

pub fn metrics_table(summary: &MetricsSummary) -> Table {
    let metrics = &summary.metrics;
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value", "Assessment"]);
    table.add_row(vec![
        "Expected Return".to_string(),
        format_pct(metrics.expected_return, 2),
        String::new(),
    ]);
    table.add_row(vec![
        "Volatility".to_string(),
        format_pct(metrics.volatility, 2),
        format!("{:?} risk", summary.risk_level),
    ]);
    table.add_row(vec![
        "Sharpe Ratio".to_string(),
        format!("{:.2}", metrics.sharpe_ratio),
        format!("{:?}", summary.performance_grade),
    ]);
    table.add_row(vec![
        "Max Drawdown".to_string(),
        format_pct(metrics.max_drawdown, 2),
        String::new(),
    ]);
    table.add_row(vec![
        "Diversification".to_string(),
        format!("{:.0}/100", summary.diversification_gauge),
        String::new(),
    ]);
    table
}

pub fn sectors_table(universe: &InstrumentUniverse) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Sector", "Label", "Instruments"]);
    for sector in Sector::ALL {
        let symbols: Vec<&str> = universe
            .instruments(sector)
            .iter()
            .map(|i| i.symbol.as_str())
            .collect();
        table.add_row(vec![
            sector.tag().to_string(),
            sector.label().to_string(),
            symbols.join(", "),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::PortfolioMetrics;

    #[test]
    fn percentages_round_to_requested_places() {
        assert_eq!(format_pct(dec!(0.1234), 1), "12.3%");
        assert_eq!(format_pct(dec!(0.12), 2), "12.00%");
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(dec!(5000)), "$5,000");
        assert_eq!(format_currency(dec!(1234567.6)), "$1,234,568");
        assert_eq!(format_currency(dec!(999.4)), "$999");
        assert_eq!(format_currency(dec!(0)), "$0");
    }

    #[test]
    fn metrics_table_names_grades() {
        let summary = MetricsSummary::new(PortfolioMetrics {
            volatility: dec!(0.3),
            sharpe_ratio: dec!(1.5),
            ..PortfolioMetrics::default()
        });
        let rendered = metrics_table(&summary).to_string();
        assert!(rendered.contains("High risk"));
        assert!(rendered.contains("Good"));
        assert!(rendered.contains("1.50"));
    }

    #[test]
    fn sectors_table_lists_builtin_symbols() {
        let rendered = sectors_table(&InstrumentUniverse::builtin()).to_string();
        assert!(rendered.contains("Consumer Goods"));
        assert!(rendered.contains("AMZN, TSLA, HD, MCD"));
    }
}
