//! Index construction from patient and lab extracts.
//!
//! Each extract is read into memory in full and its handle released before
//! parsing starts. Patients are indexed first, then every lab is attached to
//! the patient it names, so a lab can only refer to a patient that appears
//! somewhere in the patient extract.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use ehr_model::Patient;
use log::{debug, error, trace, warn};

use crate::config::IndexConfig;
use crate::error::{ParseError, ParseResult, SourceKind};
use crate::header::ColumnMap;
use crate::record::{split_record, LabColumns, PatientColumns};

/// Patients keyed by identifier.
pub type PatientIndex = HashMap<String, Patient>;

/// Builds a [`PatientIndex`] from a patient extract and a lab extract.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexBuilder {
    config: IndexConfig,
}

impl IndexBuilder {
    /// Create a builder with default configuration
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// Create a builder with custom configuration
    pub fn with_config(config: IndexConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Read both extracts and build the index.
    pub fn build<P, L>(&self, patients: P, labs: L) -> ParseResult<PatientIndex>
    where
        P: Read,
        L: Read,
    {
        let text = read_source(patients, SourceKind::Patients)?;
        let mut index = self.index_patients(&text)?;
        let text = read_source(labs, SourceKind::Labs)?;
        self.attach_labs(&mut index, &text)?;
        Ok(index)
    }

    /// Open, read and index the two extract files.
    pub fn build_from_paths<P, L>(&self, patient_path: P, lab_path: L) -> ParseResult<PatientIndex>
    where
        P: AsRef<Path>,
        L: AsRef<Path>,
    {
        let text = read_file(patient_path.as_ref(), SourceKind::Patients)?;
        let mut index = self.index_patients(&text)?;
        let text = read_file(lab_path.as_ref(), SourceKind::Labs)?;
        self.attach_labs(&mut index, &text)?;
        Ok(index)
    }

    /// Index the patients in a patient extract.
    ///
    /// A repeated identifier replaces the earlier patient.
    pub fn index_patients(&self, text: &str) -> ParseResult<PatientIndex> {
        let (header, lines) = self.split_lines(text);
        let columns = PatientColumns::locate(&ColumnMap::resolve(header, &self.config))?;
        debug!("patient header resolved: {columns:?}");

        let mut index = PatientIndex::new();
        for (line, content) in lines {
            let fields = split_record(content, self.config.delimiter);
            let patient = columns
                .extract(&fields)
                .map_err(|source| ParseError::Record {
                    kind: SourceKind::Patients,
                    line,
                    source,
                })?;
            if let Some(previous) = index.insert(patient.id().to_string(), patient) {
                warn!(
                    "patient `{}` repeated on line {line}, replacing earlier record",
                    previous.id()
                );
            }
        }
        debug!("indexed {} patients", index.len());
        Ok(index)
    }

    /// Attach every lab in a lab extract to its patient, returning how many
    /// labs were attached.
    pub fn attach_labs(&self, index: &mut PatientIndex, text: &str) -> ParseResult<usize> {
        let (header, lines) = self.split_lines(text);
        let columns = LabColumns::locate(&ColumnMap::resolve(header, &self.config))?;
        debug!("lab header resolved: {columns:?}");

        let mut attached = 0;
        for (line, content) in lines {
            let fields = split_record(content, self.config.delimiter);
            let lab = columns
                .extract(&fields)
                .map_err(|source| ParseError::Record {
                    kind: SourceKind::Labs,
                    line,
                    source,
                })?;
            match index.get_mut(lab.patient_id()) {
                Some(patient) => {
                    trace!("line {line}: `{}` -> patient `{}`", lab.name(), patient.id());
                    patient.add_lab(lab);
                    attached += 1;
                }
                None => {
                    error!(
                        "lab on line {line} names patient `{}` absent from the patient extract",
                        lab.patient_id()
                    );
                    return Err(ParseError::UnknownPatientReference {
                        patient_id: lab.patient_id().to_string(),
                        line,
                    });
                }
            }
        }
        debug!("attached {attached} labs to {} patients", index.len());
        Ok(attached)
    }

    // Header line plus numbered data lines. Line numbers are 1-based and
    // count the header.
    fn split_lines<'a>(
        &self,
        text: &'a str,
    ) -> (&'a str, impl Iterator<Item = (usize, &'a str)> + 'a) {
        let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));
        let header = lines.next().map(|(_, l)| l).unwrap_or_default();
        let skip_blank = self.config.skip_blank_lines;
        let data = lines.filter(move |(_, l)| !(skip_blank && l.trim().is_empty()));
        (header, data)
    }
}

/// Build an index with default configuration.
pub fn build_index<P, L>(patients: P, labs: L) -> ParseResult<PatientIndex>
where
    P: Read,
    L: Read,
{
    IndexBuilder::new().build(patients, labs)
}

/// Build an index from two extract files with default configuration.
pub fn build_index_from_paths<P, L>(patient_path: P, lab_path: L) -> ParseResult<PatientIndex>
where
    P: AsRef<Path>,
    L: AsRef<Path>,
{
    IndexBuilder::new().build_from_paths(patient_path, lab_path)
}

fn read_source<R: Read>(mut source: R, kind: SourceKind) -> ParseResult<String> {
    let mut text = String::new();
    source
        .read_to_string(&mut text)
        .map_err(|source| ParseError::Io { kind, source })?;
    Ok(text)
}

fn read_file(path: &Path, kind: SourceKind) -> ParseResult<String> {
    debug!("reading {kind} from {}", path.display());
    let file = File::open(path).map_err(|source| ParseError::Io { kind, source })?;
    read_source(file, kind)
}
