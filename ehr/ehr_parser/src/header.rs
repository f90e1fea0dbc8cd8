//! Header line resolution.
//!
//! Extract files saved with a UTF-8 byte-order marker and later decoded as
//! Latin-1 begin with the three characters `ï»¿`. The marker is glued to the
//! first column name, so it has to go before any column lookup.

use std::collections::HashMap;

use crate::config::IndexConfig;
use crate::error::{ParseError, ParseResult, SourceKind};

/// A UTF-8 byte-order marker read back as Latin-1.
pub const BOM_ARTIFACT: &str = "\u{ef}\u{bb}\u{bf}";

const BOM: char = '\u{feff}';

/// Remove every byte-order-marker artifact from `line`, wherever it occurs.
pub fn strip_bom_artifact(line: &str) -> String {
    line.replace(BOM_ARTIFACT, "").replace(BOM, "")
}

/// Column positions resolved from a header line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    positions: HashMap<String, usize>,
    width: usize,
}

impl ColumnMap {
    /// Resolve `line` using `config`. When a name repeats, its first position
    /// is kept.
    pub fn resolve(line: &str, config: &IndexConfig) -> Self {
        let cleaned = if config.strip_bom_artifact {
            strip_bom_artifact(line)
        } else {
            line.to_string()
        };
        let names = crate::record::split_record(&cleaned, config.delimiter);
        let mut positions = HashMap::with_capacity(names.len());
        for (pos, name) in names.iter().enumerate() {
            positions.entry((*name).to_string()).or_insert(pos);
        }
        Self {
            positions,
            width: names.len(),
        }
    }

    /// Zero-based position of `name`, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Position of a column the caller cannot do without.
    pub fn require(&self, column: &'static str, kind: SourceKind) -> ParseResult<usize> {
        self.position(column)
            .ok_or(ParseError::MissingColumn { kind, column })
    }

    /// Number of fields on the header line.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }
}

/// Resolve a header line with the default configuration.
pub fn resolve_header(line: &str) -> ColumnMap {
    ColumnMap::resolve(line, &IndexConfig::default())
}
