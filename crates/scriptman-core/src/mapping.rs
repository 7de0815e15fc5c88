//! Mapping assembly.
//!
//! Walks the discovered scripts in discovery order, extracts each help
//! text, and collects the cleaned strings into an insertion-ordered
//! mapping. The mapping serializes as a single JSON object so the docs
//! build can inject it verbatim as a constant.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{
    config::Config,
    discover::discover_scripts,
    extract::extract_help,
    Result,
};

/// Ordered script-identifier → cleaned-help-text mapping.
///
/// Keys are unique (one per discovered script) and iteration order is
/// insertion order, so two runs over unchanged inputs serialize to
/// byte-identical JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentationMapping {
    entries: Vec<(String, String)>,
}

impl DocumentationMapping {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `text` under `name`, replacing any existing entry in place
    /// so keys stay unique without disturbing order.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        let name = name.into();
        let text = text.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == name) {
            entry.1 = text;
        } else {
            self.entries.push((name, text));
        }
    }

    /// Look up the cleaned text for a script identifier.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Script identifiers in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// `(identifier, cleaned text)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no scripts were discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as a compact JSON object.
    ///
    /// # Errors
    ///
    /// Serialization of a string map does not fail in practice; the
    /// `Result` only propagates `serde_json` machinery errors.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize as a pretty-printed JSON object.
    ///
    /// # Errors
    ///
    /// See [`Self::to_json`].
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for DocumentationMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, text) in &self.entries {
            map.serialize_entry(name, text)?;
        }
        map.end()
    }
}

/// Run the full pipeline: discover scripts, extract each help text in
/// discovery order, and assemble the mapping.
///
/// Fail-fast: the first discovery or extraction error aborts the run and
/// no partial mapping is returned.
///
/// # Errors
///
/// Propagates discovery errors (`DirectoryNotFound`, `PermissionDenied`)
/// and extraction errors (`ScriptExecutionFailed`).
pub fn generate(config: &Config) -> Result<DocumentationMapping> {
    let scripts = discover_scripts(&config.script_dir, &config.script_ext)?;

    let mut mapping = DocumentationMapping::new();
    for script in &scripts {
        let help = extract_help(script, config)?;
        mapping.insert(&help.script, help.cleaned);
    }

    tracing::info!(
        dir = %config.script_dir.display(),
        scripts = mapping.len(),
        "generated man page mapping"
    );
    Ok(mapping)
}
