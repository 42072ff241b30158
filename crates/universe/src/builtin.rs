use core_types::{Instrument, Sector};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// (symbol, name, expected_return, risk, correlation)
type Row = (&'static str, &'static str, Decimal, Decimal, Decimal);

const TECHNOLOGY: [Row; 4] = [
    ("AAPL", "Apple Inc.", dec!(0.12), dec!(0.22), dec!(0.7)),
    ("GOOGL", "Alphabet Inc.", dec!(0.14), dec!(0.25), dec!(0.8)),
    ("MSFT", "Microsoft Corporation", dec!(0.13), dec!(0.20), dec!(0.75)),
    ("NVDA", "NVIDIA Corporation", dec!(0.18), dec!(0.35), dec!(0.6)),
];

const HEALTHCARE: [Row; 4] = [
    ("JNJ", "Johnson & Johnson", dec!(0.08), dec!(0.15), dec!(0.3)),
    ("PFE", "Pfizer Inc.", dec!(0.09), dec!(0.18), dec!(0.4)),
    ("UNH", "UnitedHealth Group", dec!(0.11), dec!(0.16), dec!(0.35)),
    ("ABBV", "AbbVie Inc.", dec!(0.10), dec!(0.17), dec!(0.4)),
];

const FINANCE: [Row; 4] = [
    ("JPM", "JPMorgan Chase & Co.", dec!(0.10), dec!(0.25), dec!(0.6)),
    ("BAC", "Bank of America Corp.", dec!(0.09), dec!(0.28), dec!(0.65)),
    ("WFC", "Wells Fargo & Company", dec!(0.08), dec!(0.30), dec!(0.7)),
    ("GS", "Goldman Sachs Group", dec!(0.12), dec!(0.32), dec!(0.55)),
];

const ENERGY: [Row; 4] = [
    ("XOM", "Exxon Mobil Corporation", dec!(0.07), dec!(0.35), dec!(0.5)),
    ("CVX", "Chevron Corporation", dec!(0.08), dec!(0.32), dec!(0.6)),
    ("COP", "ConocoPhillips", dec!(0.09), dec!(0.38), dec!(0.55)),
    ("EOG", "EOG Resources Inc.", dec!(0.10), dec!(0.40), dec!(0.5)),
];

const CONSUMER: [Row; 4] = [
    ("AMZN", "Amazon.com Inc.", dec!(0.15), dec!(0.28), dec!(0.4)),
    ("TSLA", "Tesla Inc.", dec!(0.20), dec!(0.45), dec!(0.3)),
    ("HD", "Home Depot Inc.", dec!(0.11), dec!(0.18), dec!(0.5)),
    ("MCD", "McDonald's Corporation", dec!(0.09), dec!(0.14), dec!(0.2)),
];

const UTILITIES: [Row; 4] = [
    ("NEE", "NextEra Energy Inc.", dec!(0.07), dec!(0.12), dec!(0.2)),
    ("DUK", "Duke Energy Corporation", dec!(0.06), dec!(0.14), dec!(0.3)),
    ("SO", "Southern Company", dec!(0.05), dec!(0.13), dec!(0.35)),
    ("AEP", "American Electric Power", dec!(0.06), dec!(0.15), dec!(0.4)),
];

const INDUSTRIALS: [Row; 4] = [
    ("BA", "Boeing Company", dec!(0.11), dec!(0.30), dec!(0.5)),
    ("CAT", "Caterpillar Inc.", dec!(0.10), dec!(0.28), dec!(0.6)),
    ("GE", "General Electric Company", dec!(0.08), dec!(0.25), dec!(0.55)),
    ("MMM", "3M Company", dec!(0.07), dec!(0.16), dec!(0.4)),
];

const MATERIALS: [Row; 4] = [
    ("LIN", "Linde plc", dec!(0.09), dec!(0.20), dec!(0.4)),
    ("SHW", "Sherwin-Williams Company", dec!(0.10), dec!(0.22), dec!(0.3)),
    ("APD", "Air Products and Chemicals", dec!(0.08), dec!(0.18), dec!(0.35)),
    ("ECL", "Ecolab Inc.", dec!(0.09), dec!(0.17), dec!(0.25)),
];

fn rows(sector: Sector) -> &'static [Row] {
    match sector {
        Sector::Technology => &TECHNOLOGY,
        Sector::Healthcare => &HEALTHCARE,
        Sector::Finance => &FINANCE,
        Sector::Energy => &ENERGY,
        Sector::Consumer => &CONSUMER,
        Sector::Utilities => &UTILITIES,
        Sector::Industrials => &INDUSTRIALS,
        Sector::Materials => &MATERIALS,
    }
}

/// The stock mock universe: four large caps per sector.
pub fn instruments() -> Vec<Instrument> {
    Sector::ALL
        .into_iter()
        .flat_map(|sector| {
            rows(sector)
                .iter()
                .map(move |&(symbol, name, expected_return, risk, correlation)| Instrument {
                    symbol: symbol.to_string(),
                    name: name.to_string(),
                    sector,
                    expected_return,
                    risk,
                    correlation,
                })
        })
        .collect()
}
