use clap::Parser;
use std::path::PathBuf;

use repobrowse::config::Config;

#[derive(Parser, Debug)]
#[command(name = "repobrowse", about = "Browse git repositories read-only")]
pub struct Cli {
    /// Repository directories to browse
    #[arg(value_parser = valid_directory)]
    pub repos: Vec<PathBuf>,

    /// File listing one repository per line
    #[arg(long)]
    pub projects_list: Option<PathBuf>,

    /// Prefix prepended to repository paths
    #[arg(long)]
    pub base_path: Option<String>,

    /// Branch or commit to open when browsing a single repository
    #[arg(long = "ref")]
    pub ref_id: Option<String>,

    /// Path to open when browsing a single repository
    #[arg(long, default_value = "")]
    pub path: String,

    /// Log file (defaults to the cache directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Command-line arguments take precedence over file and environment
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(base) = &self.base_path {
            config.base_path = base.clone();
        }
        if let Some(list) = &self.projects_list {
            config.projects_list = Some(list.clone());
        }
        if !self.repos.is_empty() {
            config.repos = self
                .repos
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect();
        }
    }
}

fn valid_directory(arg: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(arg);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("{:?}: No such directory", arg))
    }
}
