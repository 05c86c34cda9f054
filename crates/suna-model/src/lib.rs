//! Data model for decoded SUNA nitrate sensor records.
//!
//! The decoder in `suna-ingest` produces [`DecodedRecord`]s whose field order
//! follows [`SUNA_LAYOUT`]. Per-field decode failures are described by
//! [`DecodeIssue`] and never invalidate a whole record.

pub mod issue;
pub mod layout;
pub mod record;
pub mod variant;

pub use issue::{DecodeIssue, LineIssue};
pub use layout::{
    FieldKind, FieldSpec, RAW_FIELD_COUNT, SPECTRAL_CHANNEL_COUNT, SPECTRAL_SLOT, SUNA_LAYOUT,
    field_spec,
};
pub use record::{DecodedField, DecodedRecord, FieldValue};
pub use variant::FrameVariant;
