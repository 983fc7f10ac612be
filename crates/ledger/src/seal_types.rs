//! Configured enumeration of valid seal types.

/// Seal types shipped as the built-in default when no configuration is
/// supplied.
pub const DEFAULT_SEAL_TYPES: [&str; 5] = [
    "Standard Soft",
    "Standard Hard",
    "Custom Soft",
    "Custom Hard",
    "V-Rings",
];

/// The set of seal types a record may carry.
///
/// The set comes from configuration (see `sealtrack-app`), so membership is
/// checked against strings rather than a closed enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealTypeSet {
    types: Vec<String>,
}

impl SealTypeSet {
    /// Build from an explicit list. Blank entries are dropped; an entirely
    /// blank list falls back to the built-in default.
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let types: Vec<String> = types
            .into_iter()
            .map(Into::into)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if types.is_empty() {
            Self::default()
        } else {
            Self { types }
        }
    }

    pub fn contains(&self, seal_type: &str) -> bool {
        self.types.iter().any(|t| t == seal_type)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.types
    }
}

impl Default for SealTypeSet {
    fn default() -> Self {
        Self {
            types: DEFAULT_SEAL_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }
}
