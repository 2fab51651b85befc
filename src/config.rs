use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::repository::RepoRegistry;

const PROJECTS_LIST: &str = "projects.list";

/// Where repositories come from.
///
/// Loaded from `$CONFIG_DIR/repobrowse/config.json` when present, then
/// overridden by `REPOBROWSE_*` environment variables and the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Prefix prepended to every repository path
    pub base_path: String,
    /// Inserted between the base path and each projects-list entry
    pub base_path_suffix: String,
    /// Repository paths, relative to `base_path`
    pub repos: Vec<String>,
    /// File listing one repository per line
    pub projects_list: Option<PathBuf>,
}

impl Config {
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("repobrowse").join("config.json"))
    }

    /// Config file (if any) plus environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_file_path() {
            Some(path) if path.exists() => {
                tracing::debug!("loading config from {:?}", path);
                Self::load_from_file(&path)?
            }
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {:?}", path))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse config file {:?}", path))
    }

    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(base) = var("REPOBROWSE_BASE_PATH") {
            self.base_path = base;
        }
        if let Some(suffix) = var("REPOBROWSE_BASE_PATH_SUFFIX") {
            self.base_path_suffix = suffix;
        }
        if let Some(repos) = var("REPOBROWSE_REPOS") {
            self.repos = repos.split_whitespace().map(str::to_string).collect();
        }
        if let Some(list) = var("REPOBROWSE_PROJECTS_LIST") {
            self.projects_list = Some(PathBuf::from(list));
        }
    }

    /// Build the registry: from the projects list when one exists,
    /// otherwise from `repos`.
    pub fn registry(&self) -> Result<RepoRegistry> {
        if let Some(list) = &self.projects_list {
            if !list.is_file() {
                bail!("projects list not found at {:?}", list);
            }
            return self.registry_from_list(list);
        }

        let default_list = Path::new(&self.base_path).join(PROJECTS_LIST);
        if default_list.is_file() {
            return self.registry_from_list(&default_list);
        }

        Ok(self
            .repos
            .iter()
            .map(|repo| {
                (
                    repo.trim_end_matches('/').to_string(),
                    PathBuf::from(format!("{}{}", self.base_path, repo)),
                )
            })
            .collect())
    }

    fn registry_from_list(&self, list: &Path) -> Result<RepoRegistry> {
        tracing::debug!("reading projects list {:?}", list);
        let contents = fs::read_to_string(list)
            .with_context(|| format!("failed to read projects list {:?}", list))?;
        Ok(parse_projects_list(&contents, &self.base_path, &self.base_path_suffix)
            .into_iter()
            .collect())
    }
}

/// `(name, path)` for each non-blank line of a projects list
pub fn parse_projects_list(contents: &str, base: &str, suffix: &str) -> Vec<(String, PathBuf)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            (
                line.trim_end_matches('/').to_string(),
                PathBuf::from(format!("{}{}{}", base, suffix, line)),
            )
        })
        .collect()
}
