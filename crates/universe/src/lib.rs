//! # Instrument Universe
//!
//! The lookup table the optimizer draws from. Instruments are grouped by
//! sector and keep their table order inside a sector, because the optimizer
//! breaks ranking ties in favour of the earlier entry.

use core_types::{Instrument, Sector};
use std::collections::{BTreeMap, HashSet};

pub mod builtin;
pub mod error;

pub use error::UniverseError;

#[derive(Debug, Clone)]
pub struct InstrumentUniverse {
    by_sector: BTreeMap<Sector, Vec<Instrument>>,
}

impl InstrumentUniverse {
    /// The built-in mock table.
    pub fn builtin() -> Self {
        let mut by_sector: BTreeMap<Sector, Vec<Instrument>> = BTreeMap::new();
        for instrument in builtin::instruments() {
            by_sector.entry(instrument.sector).or_default().push(instrument);
        }
        Self { by_sector }
    }

    /// Builds a universe from an arbitrary instrument list, e.g. one loaded
    /// from a universe file.
    pub fn from_instruments(instruments: Vec<Instrument>) -> Result<Self, UniverseError> {
        if instruments.is_empty() {
            return Err(UniverseError::Empty);
        }

        let mut seen = HashSet::new();
        let mut by_sector: BTreeMap<Sector, Vec<Instrument>> = BTreeMap::new();
        for instrument in instruments {
            if !seen.insert(instrument.symbol.clone()) {
                return Err(UniverseError::DuplicateSymbol(instrument.symbol));
            }
            if instrument.risk <= rust_decimal::Decimal::ZERO {
                return Err(UniverseError::NonPositiveRisk {
                    symbol: instrument.symbol,
                    sector: instrument.sector,
                });
            }
            by_sector.entry(instrument.sector).or_default().push(instrument);
        }

        tracing::debug!(
            instruments = seen.len(),
            sectors = by_sector.len(),
            "Custom instrument universe built."
        );
        Ok(Self { by_sector })
    }

    /// Instruments for one sector in table order. Empty if the sector is not covered.
    pub fn instruments(&self, sector: Sector) -> &[Instrument] {
        self.by_sector.get(&sector).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sectors that have at least one instrument, in display order.
    pub fn sectors(&self) -> impl Iterator<Item = Sector> + '_ {
        self.by_sector.keys().copied()
    }

    pub fn all(&self) -> impl Iterator<Item = &Instrument> {
        self.by_sector.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.by_sector.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, symbol: &str) -> Option<&Instrument> {
        self.all().find(|i| i.symbol.eq_ignore_ascii_case(symbol))
    }
}

impl Default for InstrumentUniverse {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn instrument(symbol: &str, sector: Sector) -> Instrument {
        Instrument {
            symbol: symbol.to_string(),
            name: format!("{symbol} Corp"),
            sector,
            expected_return: dec!(0.1),
            risk: dec!(0.2),
            correlation: dec!(0.5),
        }
    }

    #[test]
    fn builtin_covers_every_sector_with_four_names() {
        let universe = InstrumentUniverse::builtin();
        assert_eq!(universe.len(), 32);
        for sector in Sector::ALL {
            let names = universe.instruments(sector);
            assert_eq!(names.len(), 4, "{sector}");
            assert!(names.iter().all(|i| i.sector == sector));
        }
        assert_eq!(universe.sectors().collect::<Vec<_>>(), Sector::ALL.to_vec());
    }

    #[test]
    fn builtin_keeps_table_order() {
        let universe = InstrumentUniverse::builtin();
        let energy: Vec<_> = universe
            .instruments(Sector::Energy)
            .iter()
            .map(|i| i.symbol.as_str())
            .collect();
        assert_eq!(energy, ["XOM", "CVX", "COP", "EOG"]);
    }

    #[test]
    fn find_is_case_insensitive() {
        let universe = InstrumentUniverse::builtin();
        let mcd = universe.find("mcd").unwrap();
        assert_eq!(mcd.name, "McDonald's Corporation");
        assert_eq!(mcd.sector, Sector::Consumer);
    }

    #[test]
    fn custom_universe_may_leave_sectors_uncovered() {
        let universe = InstrumentUniverse::from_instruments(vec![
            instrument("AAA", Sector::Energy),
            instrument("BBB", Sector::Energy),
        ])
        .unwrap();
        assert_eq!(universe.instruments(Sector::Energy).len(), 2);
        assert!(universe.instruments(Sector::Finance).is_empty());
    }

    #[test]
    fn custom_universe_rejects_duplicates() {
        let err = InstrumentUniverse::from_instruments(vec![
            instrument("AAA", Sector::Energy),
            instrument("AAA", Sector::Finance),
        ])
        .unwrap_err();
        assert_eq!(err, UniverseError::DuplicateSymbol("AAA".to_string()));
    }

    #[test]
    fn custom_universe_rejects_riskless_instruments() {
        let mut riskless = instrument("ZZZ", Sector::Utilities);
        riskless.risk = dec!(0);
        assert!(matches!(
            InstrumentUniverse::from_instruments(vec![riskless]),
            Err(UniverseError::NonPositiveRisk { .. })
        ));
    }

    #[test]
    fn empty_custom_universe_is_rejected() {
        assert_eq!(
            InstrumentUniverse::from_instruments(Vec::new()).unwrap_err(),
            UniverseError::Empty
        );
    }
}
