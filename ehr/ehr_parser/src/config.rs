//! Parser configuration.

/// Configuration for reading patient and lab extracts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    /// Field separator used by both header and data lines
    pub delimiter: char,
    /// Whether to remove byte-order-marker artifacts from header lines
    pub strip_bom_artifact: bool,
    /// Whether to skip data lines that hold only whitespace
    pub skip_blank_lines: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            strip_bom_artifact: true,
            skip_blank_lines: true,
        }
    }
}
