//! Reading records and view configs from disk.
//!
//! Records are JSON. View configs may be TOML or JSON, chosen by extension.

use std::fs;
use std::path::Path;

use formview_core::prelude::*;
use formview_core::FieldMap;
use serde_json::Value;

/// Load a JSON record.
pub fn load_record(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(Error::record_not_found(path));
    }

    let content = fs::read_to_string(path)?;
    let record: Value = serde_json::from_str(&content)?;
    debug!("Loaded record from {}", path.display());
    Ok(record)
}

/// Load a view config, choosing the parser from the file extension.
pub fn load_view_config(path: &Path) -> Result<FieldMap> {
    if !path.exists() {
        return Err(Error::view_not_found(path));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let content = fs::read_to_string(path)?;
    let config: FieldMap = match extension.as_str() {
        "toml" => {
            toml::from_str(&content).map_err(|e| Error::view_invalid(path, e.to_string()))?
        }
        "json" => serde_json::from_str(&content)
            .map_err(|e| Error::view_invalid(path, e.to_string()))?,
        _ => return Err(Error::unsupported_format(path, extension)),
    };

    debug!(
        "Loaded view config with {} fields from {}",
        config.len(),
        path.display()
    );
    Ok(config)
}
