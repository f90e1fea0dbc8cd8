//! Patients and the queries over their laboratory history.

use std::fmt;

use chrono::{Local, NaiveDate};

use crate::error::{required, ModelError, ModelResult};
use crate::lab::Lab;
use crate::operator::Operator;
use crate::timestamp::{parse_timestamp, years_between};

/// The fields a [`Patient`] is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatientField {
    /// Unique patient identifier.
    Id,
    /// Gender.
    Gender,
    /// Date and time of birth.
    DateOfBirth,
    /// Race.
    Race,
    /// Marital status.
    MaritalStatus,
    /// Primary language.
    Language,
    /// Share of the patient's community below the poverty line.
    PovertyPercentage,
}

impl PatientField {
    /// Every field, in constructor order.
    pub const ALL: [PatientField; 7] = [
        PatientField::Id,
        PatientField::Gender,
        PatientField::DateOfBirth,
        PatientField::Race,
        PatientField::MaritalStatus,
        PatientField::Language,
        PatientField::PovertyPercentage,
    ];

    /// The field's name as reported in errors.
    pub fn name(self) -> &'static str {
        match self {
            PatientField::Id => "id",
            PatientField::Gender => "gender",
            PatientField::DateOfBirth => "dob",
            PatientField::Race => "race",
            PatientField::MaritalStatus => "marital_status",
            PatientField::Language => "language",
            PatientField::PovertyPercentage => "poverty_percentage",
        }
    }
}

impl fmt::Display for PatientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A patient and the labs recorded for them, in the order they were added.
///
/// The identifier cannot change once the patient is built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Patient {
    id: String,
    gender: String,
    dob: String,
    race: String,
    marital_status: String,
    language: String,
    poverty_percentage: String,
    labs: Vec<Lab>,
}

impl Patient {
    /// Start building a patient.
    pub fn builder() -> PatientBuilder {
        PatientBuilder::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    /// Date of birth in `YYYY-MM-DD HH:MM:SS.ffffff` form.
    pub fn dob(&self) -> &str {
        &self.dob
    }

    pub fn race(&self) -> &str {
        &self.race
    }

    pub fn marital_status(&self) -> &str {
        &self.marital_status
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Community percentage below the poverty line, as recorded.
    pub fn poverty_percentage(&self) -> &str {
        &self.poverty_percentage
    }

    /// Lab history in insertion order. This is file order, not date order.
    pub fn labs(&self) -> &[Lab] {
        &self.labs
    }

    /// Append a lab to the history. No deduplication or sorting happens.
    pub fn add_lab(&mut self, lab: Lab) {
        self.labs.push(lab);
    }

    fn birth_date(&self) -> ModelResult<NaiveDate> {
        parse_timestamp(&self.dob).map(|dob| dob.date())
    }

    /// Age in whole years on `reference`, counting a year only once the
    /// birthday has been reached.
    pub fn age_on(&self, reference: NaiveDate) -> ModelResult<i32> {
        Ok(years_between(self.birth_date()?, reference))
    }

    /// Age today, according to the local system clock.
    ///
    /// The answer moves with the wall clock; use [`Patient::age_on`] when a
    /// stable result is needed.
    pub fn age(&self) -> ModelResult<i32> {
        self.age_on(Local::now().date_naive())
    }

    /// Timestamp text of the earliest lab, if any.
    pub fn first_visit(&self) -> Option<&str> {
        self.labs.iter().map(Lab::date_time).min()
    }

    /// Age in whole years at the earliest recorded lab.
    ///
    /// Fails with [`ModelError::NoVisitRecorded`] for a patient without labs.
    pub fn age_first_visit(&self) -> ModelResult<i32> {
        let first = self
            .first_visit()
            .ok_or_else(|| ModelError::NoVisitRecorded {
                patient_id: self.id.clone(),
            })?;
        let visit = parse_timestamp(first)?;
        Ok(years_between(self.birth_date()?, visit.date()))
    }

    /// Illness check with the operator given as text (`">"` or `"<"`).
    pub fn is_sick(&self, lab_name: &str, operator: &str, threshold: f64) -> ModelResult<bool> {
        self.is_sick_with(lab_name, operator.parse()?, threshold)
    }

    /// Whether any `lab_name` result crosses `threshold` in the direction of
    /// `operator`: the highest value exceeds it for `>`, the lowest falls
    /// under it for `<`.
    ///
    /// Fails with [`ModelError::NoMatchingLab`] when the patient has no result
    /// for `lab_name`, and with [`ModelError::InvalidLabValue`] when a matching
    /// value is not numeric.
    pub fn is_sick_with(
        &self,
        lab_name: &str,
        operator: Operator,
        threshold: f64,
    ) -> ModelResult<bool> {
        let values = self
            .labs
            .iter()
            .filter(|lab| lab.name() == lab_name)
            .map(Lab::numeric_value)
            .collect::<ModelResult<Vec<f64>>>()?;
        let extreme = operator
            .extreme(values)
            .ok_or_else(|| ModelError::NoMatchingLab {
                patient_id: self.id.clone(),
                lab_name: lab_name.to_string(),
            })?;
        Ok(operator.compare(extreme, threshold))
    }
}

/// Collects patient fields and validates them together in
/// [`PatientBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct PatientBuilder {
    id: Option<String>,
    gender: Option<String>,
    dob: Option<String>,
    race: Option<String>,
    marital_status: Option<String>,
    language: Option<String>,
    poverty_percentage: Option<String>,
}

impl PatientBuilder {
    /// Set any field by tag.
    pub fn set(mut self, field: PatientField, value: impl Into<String>) -> Self {
        let slot = match field {
            PatientField::Id => &mut self.id,
            PatientField::Gender => &mut self.gender,
            PatientField::DateOfBirth => &mut self.dob,
            PatientField::Race => &mut self.race,
            PatientField::MaritalStatus => &mut self.marital_status,
            PatientField::Language => &mut self.language,
            PatientField::PovertyPercentage => &mut self.poverty_percentage,
        };
        *slot = Some(value.into());
        self
    }

    pub fn id(self, value: impl Into<String>) -> Self {
        self.set(PatientField::Id, value)
    }

    pub fn gender(self, value: impl Into<String>) -> Self {
        self.set(PatientField::Gender, value)
    }

    pub fn dob(self, value: impl Into<String>) -> Self {
        self.set(PatientField::DateOfBirth, value)
    }

    pub fn race(self, value: impl Into<String>) -> Self {
        self.set(PatientField::Race, value)
    }

    pub fn marital_status(self, value: impl Into<String>) -> Self {
        self.set(PatientField::MaritalStatus, value)
    }

    pub fn language(self, value: impl Into<String>) -> Self {
        self.set(PatientField::Language, value)
    }

    pub fn poverty_percentage(self, value: impl Into<String>) -> Self {
        self.set(PatientField::PovertyPercentage, value)
    }

    /// Finish the patient with an empty lab history. Fails with
    /// [`ModelError::InvalidFieldType`] naming the first unset field.
    pub fn build(self) -> ModelResult<Patient> {
        Ok(Patient {
            id: required(self.id, PatientField::Id.name())?,
            gender: required(self.gender, PatientField::Gender.name())?,
            dob: required(self.dob, PatientField::DateOfBirth.name())?,
            race: required(self.race, PatientField::Race.name())?,
            marital_status: required(self.marital_status, PatientField::MaritalStatus.name())?,
            language: required(self.language, PatientField::Language.name())?,
            poverty_percentage: required(
                self.poverty_percentage,
                PatientField::PovertyPercentage.name(),
            )?,
            labs: Vec::new(),
        })
    }
}
