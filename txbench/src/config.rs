use std::{fs, path::{Path, PathBuf}};

use serde::Deserialize;

use crate::{fmt_open_err, methods::Selector, path_str};

/// Run parameters as read from a TOML file or the command line. Every field
/// is optional so the two sources can be layered.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub transactions: Option<PathBuf>,
    pub queries: Option<PathBuf>,
    pub method: Option<String>,
    pub query: Option<usize>,
    pub limit: Option<i64>,
    pub dump_dir: Option<PathBuf>,
    pub parallel: Option<bool>,
    pub verify: Option<bool>,
    pub out: Option<PathBuf>,
}

/// Fully resolved run parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub transactions: PathBuf,
    pub queries: PathBuf,
    pub selector: Selector,
    pub query: Option<usize>,
    /// `None` means no limit.
    pub limit: Option<usize>,
    pub dump_dir: Option<PathBuf>,
    pub parallel: bool,
    pub verify: bool,
    pub out: Option<PathBuf>,
}

impl RunConfig {
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let config_toml = fs::read_to_string(path)
            .map_err(|e| fmt_open_err(e, path))?;
        Self::from_toml(&config_toml)
            .map_err(|e| format!("invalid toml file {}: {}", path_str(path), e))
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Fields set in `over` win.
    pub fn overlay(self, over: RunConfig) -> RunConfig {
        RunConfig {
            transactions: over.transactions.or(self.transactions),
            queries: over.queries.or(self.queries),
            method: over.method.or(self.method),
            query: over.query.or(self.query),
            limit: over.limit.or(self.limit),
            dump_dir: over.dump_dir.or(self.dump_dir),
            parallel: over.parallel.or(self.parallel),
            verify: over.verify.or(self.verify),
            out: over.out.or(self.out),
        }
    }

    pub fn into_settings(self) -> Result<Settings, String> {
        let selector = Selector::parse(self.method.as_deref().unwrap_or("all"))?;

        Ok(Settings {
            transactions: self.transactions
                .ok_or("no transactions file given")?,
            queries: self.queries
                .ok_or("no queries file given")?,
            selector,
            query: self.query,
            limit: self.limit.and_then(|k| usize::try_from(k).ok()),
            dump_dir: self.dump_dir,
            parallel: self.parallel.unwrap_or(false),
            verify: self.verify.unwrap_or(false),
            out: self.out,
        })
    }
}
