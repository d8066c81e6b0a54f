//! Component Sidecar Configuration
//!
//! A page or component may declare the components it embeds in a JSON file
//! sitting next to its source file (`pages/home/index.json` next to
//! `pages/home/index.js`). Only the `usingComponents` mapping is consumed;
//! everything else in the file belongs to the runtime and is ignored.

use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Failure to obtain a sidecar config. A missing file is not an error (see
/// [`ComponentConfig::load`]); these cover the unexpected cases.
#[derive(Debug, Error)]
pub enum SidecarError {
    #[error("failed to read component config: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse component config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parsed sidecar file. `usingComponents` values stay raw JSON so a
/// malformed value skips one component instead of rejecting the whole file.
#[derive(Debug, Default, Deserialize)]
pub struct ComponentConfig {
    #[serde(rename = "usingComponents", default)]
    pub using_components: IndexMap<String, serde_json::Value>,
}

impl ComponentConfig {
    /// Load the sidecar at `path`. Most source files have no sidecar, so a
    /// missing file reports as `Ok(None)`; any other failure is surfaced.
    pub fn load(path: &Path) -> Result<Option<ComponentConfig>, SidecarError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SidecarError::Read(e)),
        };
        let config: ComponentConfig = serde_json::from_str(&content)?;
        Ok(Some(config))
    }
}
