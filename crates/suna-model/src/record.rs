//! Decoded records ("particles").

use serde::Serialize;

use crate::layout::SPECTRAL_SLOT;
use crate::variant::FrameVariant;

/// A successfully decoded field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    Float(f64),
    /// Spectral block; elements that failed to decode are `None`.
    IntArray(Vec<Option<i64>>),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[Option<i64>]> {
        match self {
            FieldValue::IntArray(values) => Some(values),
            _ => None,
        }
    }
}

/// One named slot of a record. `value` is `None` when the raw text could not
/// be decoded with the slot's kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedField {
    #[serde(rename = "value_id")]
    pub name: &'static str,
    pub value: Option<FieldValue>,
}

impl DecodedField {
    pub fn new(name: &'static str, value: Option<FieldValue>) -> Self {
        Self { name, value }
    }

    /// Number of missing values in this slot (array elements count one each).
    pub fn error_count(&self) -> usize {
        match &self.value {
            None => 1,
            Some(FieldValue::IntArray(values)) => values.iter().filter(|v| v.is_none()).count(),
            Some(_) => 0,
        }
    }
}

/// A decoded SUNA frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedRecord {
    #[serde(rename = "stream_name")]
    pub variant: FrameVariant,
    /// Logger timestamp in seconds since 1900-01-01T00:00:00Z.
    pub internal_timestamp: Option<f64>,
    pub values: Vec<DecodedField>,
}

impl DecodedRecord {
    pub fn new(
        variant: FrameVariant,
        internal_timestamp: Option<f64>,
        values: Vec<DecodedField>,
    ) -> Self {
        Self {
            variant,
            internal_timestamp,
            values,
        }
    }

    pub fn particle_type(&self) -> &'static str {
        self.variant.particle_type()
    }

    pub fn field(&self, name: &str) -> Option<&DecodedField> {
        self.values.iter().find(|field| field.name == name)
    }

    /// Decoded value of `name`; `None` if the slot is absent or failed.
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.field(name).and_then(|field| field.value.as_ref())
    }

    pub fn spectral_channels(&self) -> Option<&[Option<i64>]> {
        let name = crate::layout::SUNA_LAYOUT[SPECTRAL_SLOT].name;
        self.value(name).and_then(FieldValue::as_int_array)
    }

    /// Total number of values that failed to decode.
    pub fn error_count(&self) -> usize {
        self.values.iter().map(DecodedField::error_count).sum()
    }
}
