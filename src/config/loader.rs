use std::fs;
use std::path::{Path, PathBuf};
use log::debug;

use crate::toc::types::TocOptions;
use crate::utils::error::{BoxResult, TocError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 3] = ["_toc.yml", "_toc.yaml", "_toc.toml"];

/// Load TOC options from a config file.
///
/// Looks for the default config file names under `source_dir` unless an
/// explicit file is given; falls back to defaults when none exists.
pub fn load_options<P: AsRef<Path>>(
    source_dir: P,
    config_file: Option<PathBuf>,
) -> BoxResult<TocOptions> {
    let config_path = match config_file {
        Some(path) => Some(path),
        None => find_default_config_file(&source_dir),
    };

    let options = match config_path {
        Some(path) => {
            debug!("Loading TOC options from {}", path.display());
            read_options_file(&path)?
        }
        None => {
            debug!("No TOC config file found, using defaults");
            TocOptions::default()
        }
    };

    validate_options(&options)?;

    debug!("TOC options loaded: {:?}", options);
    Ok(options)
}

/// Find the first default config file present in the source directory
fn find_default_config_file<P: AsRef<Path>>(source_dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .find(|path| path.exists())
}

/// Read and parse a config file based on its extension
fn read_options_file(path: &Path) -> BoxResult<TocOptions> {
    if !path.exists() {
        return Err(TocError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        ))
        .into());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        TocError::Config(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yml" | "yaml" => parse_yaml_options(&content),
        "toml" => parse_toml_options(&content),
        "json" => parse_json_options(&content),
        other => Err(TocError::Config(format!(
            "Unsupported configuration format: {:?}",
            other
        ))
        .into()),
    }
}

fn parse_yaml_options(content: &str) -> BoxResult<TocOptions> {
    let options = serde_yaml::from_str(content)
        .map_err(|e| TocError::Config(format!("Invalid YAML configuration: {}", e)))?;
    Ok(options)
}

fn parse_toml_options(content: &str) -> BoxResult<TocOptions> {
    let options = toml::from_str(content)
        .map_err(|e| TocError::Config(format!("Invalid TOML configuration: {}", e)))?;
    Ok(options)
}

fn parse_json_options(content: &str) -> BoxResult<TocOptions> {
    let options = serde_json::from_str(content)
        .map_err(|e| TocError::Config(format!("Invalid JSON configuration: {}", e)))?;
    Ok(options)
}

/// Reject depth ranges that could never include a heading
fn validate_options(options: &TocOptions) -> BoxResult<()> {
    if options.from_heading == 0 {
        return Err(TocError::Config("from_heading must be at least 1".to_string()).into());
    }

    if options.from_heading > options.to_heading {
        return Err(TocError::Config(format!(
            "from_heading ({}) must not exceed to_heading ({})",
            options.from_heading, options.to_heading
        ))
        .into());
    }

    Ok(())
}
