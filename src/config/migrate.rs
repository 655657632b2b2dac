//! Detection and back-filling of keys missing from an on-disk config file.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default config is not a mapping".into())),
    }
}

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config("configuration root must be a mapping".into())),
    }
}

/// Keys known to this version but absent from `content`.
pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
    let current = parse_mapping(content)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value, keeping existing ones.
/// Returns the keys that were added; the file is only rewritten when needed.
pub fn fill_missing(path: &Path) -> AppResult<Vec<String>> {
    let content = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let mut current = parse_mapping(&content)?;
    let mut added = Vec::new();

    for (k, v) in default_mapping()? {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            current.insert(k, v);
        }
    }

    if !added.is_empty() {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(&Value::Mapping(current))?)?;
    }

    Ok(added)
}
