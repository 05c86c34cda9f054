//! Frame variants of SUNA log lines.

use serde::{Deserialize, Serialize};

/// Source a decoded line came from.
///
/// Both variants share one field layout; they differ only in how the line is
/// framed. Only logger-relayed records carry an internal timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameVariant {
    /// Relayed by the data concentrator logger (DCL), which prefixes each
    /// line with its own `date time` stamp.
    #[serde(rename = "suna_dcl_recovered")]
    DclRelayed,
    /// Read straight off the instrument's internal storage.
    #[serde(rename = "suna_instrument_recovered")]
    InstrumentRecovered,
}

impl FrameVariant {
    /// Stream name of the record category this variant produces.
    pub fn particle_type(&self) -> &'static str {
        match self {
            FrameVariant::DclRelayed => "suna_dcl_recovered",
            FrameVariant::InstrumentRecovered => "suna_instrument_recovered",
        }
    }
}
