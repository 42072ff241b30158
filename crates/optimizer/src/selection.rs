use core_types::{Instrument, Sector};
use rust_decimal::Decimal;
use universe::InstrumentUniverse;

/// The representative instrument chosen for one sector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection<'a> {
    pub instrument: &'a Instrument,
    /// The instrument's return/risk ratio, used again by the weighting step.
    pub ratio: Decimal,
}

/// Drops repeated sectors, keeping the first occurrence of each.
pub fn dedupe_sectors(sectors: &[Sector]) -> Vec<Sector> {
    let mut unique = Vec::with_capacity(sectors.len());
    for &sector in sectors {
        if !unique.contains(&sector) {
            unique.push(sector);
        }
    }
    unique
}

/// The instrument with the highest return/risk ratio. Ties keep the earlier
/// entry; instruments without risk cannot be ranked and are ignored.
pub fn best_in(instruments: &[Instrument]) -> Option<Selection<'_>> {
    instruments
        .iter()
        .filter_map(|instrument| {
            instrument
                .return_to_risk()
                .map(|ratio| Selection { instrument, ratio })
        })
        .fold(None, |best, candidate| match best {
            Some(current) if current.ratio >= candidate.ratio => Some(current),
            _ => Some(candidate),
        })
}

/// One selection per requested sector, in request order. Sectors the
/// universe does not cover are skipped.
pub fn select_best_per_sector<'a>(
    universe: &'a InstrumentUniverse,
    sectors: &[Sector],
) -> Vec<Selection<'a>> {
    sectors
        .iter()
        .filter_map(|&sector| {
            let selection = best_in(universe.instruments(sector));
            if selection.is_none() {
                tracing::warn!(%sector, "No rankable instruments for sector; skipping.");
            }
            selection
        })
        .collect()
}
