use crate::error::{PhonebookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_EXT: &str = ".jcontact";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MIN_PAGE_SIZE: usize = 5;
pub const MAX_PAGE_SIZE: usize = 200;
const CONFIG_KEYS: [&str; 4] = ["page-size", "file-ext", "gender-tokens", "street-suffixes"];

/// An abbreviated street suffix and the spelling it expands to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreetSuffix {
    pub abbreviation: String,
    pub expansion: String,
}

impl StreetSuffix {
    pub fn new(abbreviation: &str, expansion: &str) -> Self {
        Self {
            abbreviation: abbreviation.to_string(),
            expansion: expansion.to_string(),
        }
    }
}

/// Configuration for the phonebook, stored in `<folder>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// Records per list page, kept within [MIN_PAGE_SIZE, MAX_PAGE_SIZE]
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// File extension for record files (e.g. ".jcontact")
    #[serde(default = "default_file_ext")]
    pub file_ext: String,

    /// Street suffixes expanded after a street is entered
    #[serde(default = "default_street_suffixes")]
    pub street_suffixes: Vec<StreetSuffix>,

    #[serde(default = "default_male_token")]
    pub male_token: String,

    #[serde(default = "default_female_token")]
    pub female_token: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_file_ext() -> String {
    DEFAULT_FILE_EXT.to_string()
}

fn default_street_suffixes() -> Vec<StreetSuffix> {
    vec![StreetSuffix::new("str.", "strasse")]
}

fn default_male_token() -> String {
    "m".to_string()
}

fn default_female_token() -> String {
    "f".to_string()
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            file_ext: default_file_ext(),
            street_suffixes: default_street_suffixes(),
            male_token: default_male_token(),
            female_token: default_female_token(),
        }
    }
}

impl PhonebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PhonebookError::Io)?;
        let mut config: PhonebookConfig =
            serde_json::from_str(&content).map_err(PhonebookError::Serialization)?;
        config.page_size = clamp_page_size(config.page_size);
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PhonebookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PhonebookError::Serialization)?;
        fs::write(config_path, content).map_err(PhonebookError::Io)?;
        Ok(())
    }

    pub fn get_file_ext(&self) -> &str {
        &self.file_ext
    }

    /// Set the file extension (normalizes to start with a dot)
    pub fn set_file_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
    }

    pub fn set_page_size(&mut self, size: usize) -> Result<()> {
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&size) {
            return Err(PhonebookError::Api(format!(
                "Page size must be between {} and {}",
                MIN_PAGE_SIZE, MAX_PAGE_SIZE
            )));
        }
        self.page_size = size;
        Ok(())
    }

    /// Expands a trailing abbreviated street suffix, keeping the rest as typed.
    pub fn normalize_street(&self, street: &str) -> String {
        let trimmed = street.trim();
        for suffix in &self.street_suffixes {
            let abbr = suffix.abbreviation.as_str();
            if abbr.is_empty() || trimmed.len() < abbr.len() {
                continue;
            }
            let split = trimmed.len() - abbr.len();
            if !trimmed.is_char_boundary(split) {
                continue;
            }
            let (head, tail) = trimmed.split_at(split);
            if tail.to_lowercase() == abbr.to_lowercase() {
                return format!("{}{}", head, suffix.expansion);
            }
        }
        trimmed.to_string()
    }

    /// Value of a user-facing config key, formatted for display.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" => Some(self.page_size.to_string()),
            "file-ext" => Some(self.file_ext.clone()),
            "gender-tokens" => Some(format!("{}/{}", self.male_token, self.female_token)),
            "street-suffixes" => Some(
                self.street_suffixes
                    .iter()
                    .map(|s| format!("{}={}", s.abbreviation, s.expansion))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            _ => None,
        }
    }

    /// Sets a user-facing config key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "page-size" => {
                let size = value
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid page size: {}", value))?;
                self.set_page_size(size).map_err(|_| {
                    format!(
                        "Page size must be between {} and {}",
                        MIN_PAGE_SIZE, MAX_PAGE_SIZE
                    )
                })
            }
            "file-ext" => {
                let ext = value.trim();
                if ext.is_empty() || ext == "." {
                    return Err("File extension cannot be empty".to_string());
                }
                if ext.trim_start_matches('.').eq_ignore_ascii_case("json") {
                    return Err(format!("File extension {} is reserved for {}", ext, CONFIG_FILENAME));
                }
                self.set_file_ext(ext);
                Ok(())
            }
            "gender-tokens" => {
                let (male, female) = value
                    .split_once('/')
                    .map(|(m, f)| (m.trim(), f.trim()))
                    .filter(|(m, f)| !m.is_empty() && !f.is_empty() && !m.eq_ignore_ascii_case(f))
                    .ok_or_else(|| format!("Expected two distinct tokens like m/f, got: {}", value))?;
                self.male_token = male.to_string();
                self.female_token = female.to_string();
                Ok(())
            }
            "street-suffixes" => Err("street-suffixes can only be changed in config.json".to_string()),
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|k| self.get(k).map(|v| (*k, v)))
            .collect()
    }
}

pub fn clamp_page_size(size: usize) -> usize {
    size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
}
