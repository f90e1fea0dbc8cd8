//! A single laboratory test result.

use std::fmt;

use crate::error::{required, ModelError, ModelResult};

/// The fields a [`Lab`] is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabField {
    /// Identifier of the patient the result belongs to.
    PatientId,
    /// Identifier of the hospital admission.
    AdmissionId,
    /// Name of the laboratory test.
    Name,
    /// Recorded value, kept as text.
    Value,
    /// Units of the value.
    Units,
    /// When the test was taken.
    DateTime,
}

impl LabField {
    /// Every field, in constructor order.
    pub const ALL: [LabField; 6] = [
        LabField::PatientId,
        LabField::AdmissionId,
        LabField::Name,
        LabField::Value,
        LabField::Units,
        LabField::DateTime,
    ];

    /// The field's name as reported in errors.
    pub fn name(self) -> &'static str {
        match self {
            LabField::PatientId => "patient_id",
            LabField::AdmissionId => "admission_id",
            LabField::Name => "name",
            LabField::Value => "value",
            LabField::Units => "units",
            LabField::DateTime => "date_time",
        }
    }
}

impl fmt::Display for LabField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A laboratory test result.
///
/// `patient_id` refers to the owning [`Patient`](crate::Patient) by value; the
/// patient holds the lab, not the other way round.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    patient_id: String,
    admission_id: String,
    name: String,
    value: String,
    units: String,
    date_time: String,
}

impl Lab {
    /// Start building a lab.
    pub fn builder() -> LabBuilder {
        LabBuilder::default()
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn admission_id(&self) -> &str {
        &self.admission_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw recorded value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    /// Timestamp text in `YYYY-MM-DD HH:MM:SS.ffffff` form.
    pub fn date_time(&self) -> &str {
        &self.date_time
    }

    /// The value read as a number, ignoring surrounding whitespace.
    pub fn numeric_value(&self) -> ModelResult<f64> {
        self.value
            .trim()
            .parse::<f64>()
            .map_err(|_| ModelError::InvalidLabValue {
                lab_name: self.name.clone(),
                value: self.value.clone(),
            })
    }
}

/// Collects lab fields and validates them together in [`LabBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct LabBuilder {
    patient_id: Option<String>,
    admission_id: Option<String>,
    name: Option<String>,
    value: Option<String>,
    units: Option<String>,
    date_time: Option<String>,
}

impl LabBuilder {
    /// Set any field by tag.
    pub fn set(mut self, field: LabField, value: impl Into<String>) -> Self {
        let slot = match field {
            LabField::PatientId => &mut self.patient_id,
            LabField::AdmissionId => &mut self.admission_id,
            LabField::Name => &mut self.name,
            LabField::Value => &mut self.value,
            LabField::Units => &mut self.units,
            LabField::DateTime => &mut self.date_time,
        };
        *slot = Some(value.into());
        self
    }

    pub fn patient_id(self, value: impl Into<String>) -> Self {
        self.set(LabField::PatientId, value)
    }

    pub fn admission_id(self, value: impl Into<String>) -> Self {
        self.set(LabField::AdmissionId, value)
    }

    pub fn name(self, value: impl Into<String>) -> Self {
        self.set(LabField::Name, value)
    }

    pub fn value(self, value: impl Into<String>) -> Self {
        self.set(LabField::Value, value)
    }

    pub fn units(self, value: impl Into<String>) -> Self {
        self.set(LabField::Units, value)
    }

    pub fn date_time(self, value: impl Into<String>) -> Self {
        self.set(LabField::DateTime, value)
    }

    /// Finish the lab. Fails with [`ModelError::InvalidFieldType`] naming the
    /// first field, in [`LabField::ALL`] order, that was never set.
    pub fn build(self) -> ModelResult<Lab> {
        Ok(Lab {
            patient_id: required(self.patient_id, LabField::PatientId.name())?,
            admission_id: required(self.admission_id, LabField::AdmissionId.name())?,
            name: required(self.name, LabField::Name.name())?,
            value: required(self.value, LabField::Value.name())?,
            units: required(self.units, LabField::Units.name())?,
            date_time: required(self.date_time, LabField::DateTime.name())?,
        })
    }
}
