use core_types::Sector;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UniverseError {
    #[error("Instrument universe is empty")]
    Empty,

    #[error("Symbol '{0}' appears more than once in the universe")]
    DuplicateSymbol(String),

    #[error("Instrument '{symbol}' in {sector} has non-positive risk")]
    NonPositiveRisk { symbol: String, sector: Sector },
}
