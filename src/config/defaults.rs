use std::collections::BTreeMap;
use std::path::PathBuf;

pub fn default_config_path() -> PathBuf {
    PathBuf::from("prdigest.yaml")
}

pub fn default_concurrency() -> usize {
    4
}

pub fn default_per_page() -> u8 {
    100
}

/// Base-branch labels that were renamed but still show up on older PRs.
pub fn default_aliases() -> BTreeMap<String, String> {
    BTreeMap::from([(
        "symphonics:dev".to_string(),
        "symphonics:development".to_string(),
    )])
}
