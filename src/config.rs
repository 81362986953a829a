use crate::error::{Result, VersusError};
use crate::scoring::tables::ScoringTables;
use crate::types::config::VersusConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::{debug, info};

pub const DEFAULT_CONFIG_FILE: &str = "versus.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".versus/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/versus/config.toml";

/// Phone tables compiled into the binary; every other layer overrides them.
pub const BUILTIN_PHONE_TABLES: &str = include_str!("../defaults/phone.toml");

/// Loads scoring tables for `root`, or from `explicit` when a config file was
/// named on the command line.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<ScoringTables> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<ScoringTables> {
    let config = load_merged(root, explicit, global_path)?;
    let tables = config.into_tables()?;
    info!(
        ranges = tables.range_count(),
        neutral = tables.neutral_count(),
        categories = tables.categories().len(),
        "scoring tables loaded"
    );
    Ok(tables)
}

pub(crate) fn load_merged(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<VersusConfig> {
    let mut merged = builtin_value()?;

    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(VersusError::PathNotFound(path.display().to_string()));
            }
            merge_file_if_exists(&mut merged, path)?;
        }
        None => merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?,
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    merged
        .try_into()
        .map_err(|e: toml::de::Error| VersusError::ConfigParse(e.to_string()))
}

/// The built-in tables on their own, without any file layers.
pub fn builtin_tables() -> Result<ScoringTables> {
    let config: VersusConfig = builtin_value()?
        .try_into()
        .map_err(|e: toml::de::Error| VersusError::ConfigParse(e.to_string()))?;
    config.into_tables()
}

fn builtin_value() -> Result<Value> {
    let value: Value = toml::from_str(BUILTIN_PHONE_TABLES)
        .map_err(|e| VersusError::ConfigParse(format!("built-in tables: {e}")))?;
    match value {
        Value::Table(_) => Ok(value),
        _ => Ok(Value::Table(Map::new())),
    }
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| VersusError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
