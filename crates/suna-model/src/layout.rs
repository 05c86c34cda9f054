//! Canonical field layout of a SUNA sample frame.
//!
//! A raw frame carries 286 comma-separated fields. After the serial sub-code
//! is split out of the first field, the 256 spectral channel counts sit at
//! positions 12..268 and collapse into a single logical slot, which leaves 28
//! named slots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of comma-separated fields in a well-formed raw line.
pub const RAW_FIELD_COUNT: usize = 286;

/// Number of spectral channel counts carried by every frame.
pub const SPECTRAL_CHANNEL_COUNT: usize = 256;

/// Layout slot (and reshaped field index) where the spectral block starts.
pub const SPECTRAL_SLOT: usize = 12;

/// Value type of a layout slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Kept verbatim.
    Str,
    /// Signed integer.
    Int,
    /// Floating-point number.
    Float,
    /// Fixed-length sequence of integers (the spectral block).
    IntArray,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Str => "string",
            FieldKind::Int => "integer",
            FieldKind::Float => "float",
            FieldKind::IntArray => "integer array",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Name and type of one layout slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// The 28 slots of a decoded record, in output order.
pub static SUNA_LAYOUT: [FieldSpec; 28] = [
    FieldSpec::new("frame_type", FieldKind::Str),
    FieldSpec::new("serial_number", FieldKind::Str),
    FieldSpec::new("date_of_sample", FieldKind::Int),
    FieldSpec::new("time_of_sample", FieldKind::Float),
    FieldSpec::new("nitrate_concentration", FieldKind::Float),
    FieldSpec::new("nutnr_nitrogen_in_nitrate", FieldKind::Float),
    FieldSpec::new("nutnr_absorbance_at_254_nm", FieldKind::Float),
    FieldSpec::new("nutnr_absorbance_at_350_nm", FieldKind::Float),
    FieldSpec::new("nutnr_bromide_trace", FieldKind::Float),
    FieldSpec::new("nutnr_spectrum_average", FieldKind::Int),
    FieldSpec::new("nutnr_dark_value_used_for_fit", FieldKind::Int),
    FieldSpec::new("nutnr_integration_time_factor", FieldKind::Int),
    FieldSpec::new("spectral_channels", FieldKind::IntArray),
    FieldSpec::new("temp_spectrometer", FieldKind::Float),
    FieldSpec::new("temp_interior", FieldKind::Float),
    FieldSpec::new("temp_lamp", FieldKind::Float),
    FieldSpec::new("lamp_time", FieldKind::Int),
    FieldSpec::new("humidity", FieldKind::Float),
    FieldSpec::new("voltage_main", FieldKind::Float),
    FieldSpec::new("voltage_lamp", FieldKind::Float),
    FieldSpec::new("nutnr_voltage_int", FieldKind::Float),
    FieldSpec::new("nutnr_current_main", FieldKind::Float),
    FieldSpec::new("aux_fitting_1", FieldKind::Float),
    FieldSpec::new("aux_fitting_2", FieldKind::Float),
    FieldSpec::new("nutnr_fit_base_1", FieldKind::Float),
    FieldSpec::new("nutnr_fit_base_2", FieldKind::Float),
    FieldSpec::new("nutnr_fit_rmse", FieldKind::Float),
    FieldSpec::new("checksum", FieldKind::Int),
];

/// Slot at `position`, if the layout has one.
pub fn field_spec(position: usize) -> Option<&'static FieldSpec> {
    SUNA_LAYOUT.get(position)
}
