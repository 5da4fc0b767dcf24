//! Configuration handling for the page content

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_MUNICIPALITY: &str = "Municipalidad de Cholchol";
const DEFAULT_WELCOME: &str = "Welcome to Cholchol";
const DEFAULT_TAGLINE: &str = "Committed to our community";
const DEFAULT_SERVICES: &[&str] = &[
    "Citizen Services",
    "Municipal Health",
    "Education",
    "Educational Programs",
];
const DEFAULT_NOTICE: &str = "Municipal notice: permits and certificates are issued at the \
Citizen Services office, Monday to Friday from 8:30 to 14:00. Bring your identity card.";
const DEFAULT_FOOTER_YEAR: u16 = 2025;

/// Project directories shared by the config file and the log file
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("cl", "cholchol", "municipal-tui")
}

/// Municipal content shown on the page. Unset fields fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PageConfig {
    /// Name shown in the header bar and footer
    pub municipality: Option<String>,
    /// Hero title
    pub welcome: Option<String>,
    /// Hero subtitle
    pub tagline: Option<String>,
    /// Entries of the services list
    pub services: Option<Vec<String>>,
    /// Text of the informational overlay
    pub notice: Option<String>,
    /// Copyright year in the footer
    pub footer_year: Option<u16>,
}

impl PageConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: PageConfig = serde_json::from_str(&content)?;
        tracing::info!(path = %path.display(), "loaded page config");
        Ok(config)
    }

    pub fn municipality(&self) -> &str {
        self.municipality.as_deref().unwrap_or(DEFAULT_MUNICIPALITY)
    }

    pub fn welcome(&self) -> &str {
        self.welcome.as_deref().unwrap_or(DEFAULT_WELCOME)
    }

    pub fn tagline(&self) -> &str {
        self.tagline.as_deref().unwrap_or(DEFAULT_TAGLINE)
    }

    pub fn services(&self) -> Vec<&str> {
        match &self.services {
            Some(services) => services.iter().map(String::as_str).collect(),
            None => DEFAULT_SERVICES.to_vec(),
        }
    }

    pub fn notice(&self) -> &str {
        self.notice.as_deref().unwrap_or(DEFAULT_NOTICE)
    }

    pub fn footer(&self) -> String {
        format!(
            "© {} {} - All rights reserved",
            self.footer_year.unwrap_or(DEFAULT_FOOTER_YEAR),
            self.municipality()
        )
    }
}
