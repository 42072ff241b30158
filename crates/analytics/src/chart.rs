use core_types::Allocation;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Colours assigned to chart entries by position, cycling after eight.
pub const PALETTE: [&str; 8] = [
    "#3B82F6", "#10B981", "#8B5CF6", "#F59E0B", "#EF4444", "#F97316", "#6366F1", "#14B8A6",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub symbol: String,
    /// Share of the portfolio in percent.
    pub value: Decimal,
    pub amount: Decimal,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPoint {
    pub symbol: String,
    pub allocation_pct: Decimal,
    pub expected_return_pct: Decimal,
    pub risk_pct: Decimal,
    pub color: &'static str,
}

/// Both chart views of an allocation list, with matching colours per symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub pie: Vec<PieSlice>,
    pub bar: Vec<BarPoint>,
}

impl ChartSeries {
    pub fn from_allocations(allocations: &[Allocation]) -> Self {
        let hundred = dec!(100);
        let colors = PALETTE.iter().cycle();

        let (pie, bar) = allocations
            .iter()
            .zip(colors)
            .map(|(allocation, &color)| {
                let symbol = allocation.instrument.symbol.clone();
                let slice = PieSlice {
                    symbol: symbol.clone(),
                    value: allocation.weight * hundred,
                    amount: allocation.amount,
                    color,
                };
                let point = BarPoint {
                    symbol,
                    allocation_pct: allocation.weight * hundred,
                    expected_return_pct: allocation.instrument.expected_return * hundred,
                    risk_pct: allocation.instrument.risk * hundred,
                    color,
                };
                (slice, point)
            })
            .unzip();

        Self { pie, bar }
    }

    pub fn is_empty(&self) -> bool {
        self.pie.is_empty()
    }
}
