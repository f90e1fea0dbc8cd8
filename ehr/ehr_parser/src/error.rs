use std::fmt;
use std::io;

use ehr_model::ModelError;

/// The result type for index construction.
pub type ParseResult<T> = Result<T, ParseError>;

/// Which extract an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Patients,
    Labs,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Patients => f.write_str("patient extract"),
            SourceKind::Labs => f.write_str("lab extract"),
        }
    }
}

/// An error raised while building a patient index.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The extract could not be read.
    #[error("failed to read {kind}: {source}")]
    Io {
        kind: SourceKind,
        #[source]
        source: io::Error,
    },

    /// A required column is absent from the header line.
    #[error("{kind} header is missing column `{column}`")]
    MissingColumn {
        kind: SourceKind,
        column: &'static str,
    },

    /// A lab names a patient that is not in the patient extract.
    #[error("lab on line {line} references unknown patient `{patient_id}`")]
    UnknownPatientReference { patient_id: String, line: usize },

    /// A data line could not be turned into an entity.
    #[error("{kind} line {line}: {source}")]
    Record {
        kind: SourceKind,
        line: usize,
        #[source]
        source: ModelError,
    },
}

impl ParseError {
    /// The model error behind a [`ParseError::Record`], if that is what this is.
    pub fn model_error(&self) -> Option<&ModelError> {
        match self {
            ParseError::Record { source, .. } => Some(source),
            _ => None,
        }
    }
}
