//! `tagsmith.toml` configuration.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{
    Error, LookupTables, Result, Schema, SourceContext,
    tables::{
        HTML_BOOLEAN_ATTRIBUTES, HTML_EVENT_ATTRIBUTES, HTML_GLOBAL_ATTRIBUTES, HTML_VOID_ELEMENTS,
    },
};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tagsmith.toml";

/// Root configuration for tagsmith.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Input and output locations
    pub generator: GeneratorConfig,

    /// Overrides for the built-in HTML lookup tables
    pub tables: TablesConfig,
}

/// The `[generator]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Entity schema, relative to the config file
    pub schema: PathBuf,

    /// Output directory for builder files, relative to the config file
    pub output: PathBuf,

    /// Whether to emit the `registry.rs` module list alongside the builders
    pub registry: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            schema: PathBuf::from("elements.json"),
            output: PathBuf::from("src/builders"),
            registry: true,
        }
    }
}

/// The `[tables]` section. Each list replaces the built-in one when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TablesConfig {
    pub boolean_attributes: Option<Vec<String>>,
    pub void_elements: Option<Vec<String>>,
    pub global_attributes: Option<Vec<String>>,
    pub event_attributes: Option<Vec<String>>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_CONFIG_FILE)
    }
}

impl Config {
    /// Parse a config from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        toml::from_str(content).map_err(|e| ctx.config_parse_error(e))
    }

    /// Build the lookup tables, falling back to the HTML defaults per list.
    pub fn lookup_tables(&self) -> LookupTables {
        let t = &self.tables;
        let pick = |custom: &Option<Vec<String>>, fallback: &[&str]| -> Vec<String> {
            match custom {
                Some(list) => list.clone(),
                None => fallback.iter().map(|s| s.to_string()).collect(),
            }
        };

        LookupTables::new(
            pick(&t.boolean_attributes, HTML_BOOLEAN_ATTRIBUTES),
            pick(&t.void_elements, HTML_VOID_ELEMENTS),
        )
        .with_capability_attributes(
            pick(&t.global_attributes, HTML_GLOBAL_ATTRIBUTES),
            pick(&t.event_attributes, HTML_EVENT_ATTRIBUTES),
        )
    }
}

/// A loaded configuration together with the directory it resolves paths against.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a config file; a missing file is an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = Config::from_str_with_filename(&content, &path.display().to_string())?;
        Ok(Self { path, config })
    }

    /// Open a config file, using the default configuration if it does not exist.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self {
                path: path.to_path_buf(),
                config: Config::default(),
            })
        }
    }

    /// Get the config file path (which may not exist on disk).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory that relative paths in the config are resolved against.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Resolved path of the entity schema.
    pub fn schema_path(&self) -> PathBuf {
        self.base_dir().join(&self.config.generator.schema)
    }

    /// Resolved output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.base_dir().join(&self.config.generator.output)
    }

    /// Load the entity schema named by this config.
    pub fn load_schema(&self) -> Result<Schema> {
        Schema::from_file(self.schema_path())
    }
}
