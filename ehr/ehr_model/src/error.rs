//! Errors raised while assembling entities or answering patient queries.

/// The result type for entity construction and patient queries.
pub type ModelResult<T> = Result<T, ModelError>;

/// An error produced by the entity model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// A builder was finalized without a string value for a field.
    #[error("`{field}` must be a string")]
    InvalidFieldType {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A timestamp did not match `YYYY-MM-DD HH:MM:SS.ffffff`.
    #[error("`{value}` is not a timestamp of the form YYYY-MM-DD HH:MM:SS.ffffff")]
    InvalidTimestamp {
        /// The rejected text.
        value: String,
    },

    /// A lab value could not be read as a floating-point number.
    #[error("value `{value}` of lab `{lab_name}` is not numeric")]
    InvalidLabValue {
        /// Name of the laboratory test.
        lab_name: String,
        /// The rejected value.
        value: String,
    },

    /// Age at first visit was requested for a patient without labs.
    #[error("patient `{patient_id}` has no recorded visit")]
    NoVisitRecorded {
        /// Identifier of the patient.
        patient_id: String,
    },

    /// An illness check found no lab with the requested name.
    #[error("patient `{patient_id}` has no results for lab `{lab_name}`")]
    NoMatchingLab {
        /// Identifier of the patient.
        patient_id: String,
        /// Requested laboratory test name.
        lab_name: String,
    },

    /// A comparison operator other than `>` or `<`.
    #[error("invalid operator `{0}`, expected `>` or `<`")]
    InvalidOperator(String),
}

impl ModelError {
    /// Shorthand for [`ModelError::InvalidFieldType`].
    pub fn invalid_field(field: &'static str) -> Self {
        ModelError::InvalidFieldType { field }
    }
}

/// Take a builder slot, failing with the field name when it was never set.
pub(crate) fn required(slot: Option<String>, field: &'static str) -> ModelResult<String> {
    slot.ok_or_else(|| ModelError::invalid_field(field))
}
