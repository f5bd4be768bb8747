use std::collections::BTreeMap;

/// Immutable mapping from raw base-branch labels to their canonical form.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: BTreeMap<String, String>,
}

impl AliasTable {
    pub fn new(aliases: BTreeMap<String, String>) -> Self {
        Self { aliases }
    }

    /// Resolve `raw` through the table; unknown labels are already canonical.
    pub fn normalize(&self, raw: &str) -> String {
        self.aliases
            .get(raw)
            .cloned()
            .unwrap_or_else(|| raw.to_string())
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }
}

impl From<BTreeMap<String, String>> for AliasTable {
    fn from(aliases: BTreeMap<String, String>) -> Self {
        Self::new(aliases)
    }
}
