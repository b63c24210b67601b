use crate::errors::{AppError, AppResult};
use crate::utils::formatting::NOT_AVAILABLE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Colours used by the four charts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Palette {
    #[serde(default = "default_availability_color")]
    pub availability: String,
    #[serde(default = "default_mtbf_color")]
    pub mtbf: String,
    #[serde(default = "default_mttr_color")]
    pub mttr: String,
    #[serde(default = "default_correctivo_color")]
    pub correctivo: String,
    #[serde(default = "default_preventivo_color")]
    pub preventivo: String,
    #[serde(default = "default_predictivo_color")]
    pub predictivo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Theme {
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_font_color")]
    pub font_color: String,
    #[serde(default = "default_title_font_size")]
    pub title_font_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// `text` or `json` for the dashboard command.
    #[serde(default = "default_output_format")]
    pub output_format: String,
    /// Pre-select the table's own date bounds when no range is given.
    #[serde(default = "default_auto_range")]
    pub auto_range: bool,
    #[serde(default = "default_not_available")]
    pub not_available: String,
    #[serde(default)]
    pub colors: Palette,
    #[serde(default)]
    pub theme: Theme,
}

fn default_output_format() -> String {
    "text".to_string()
}
fn default_auto_range() -> bool {
    true
}
fn default_not_available() -> String {
    NOT_AVAILABLE.to_string()
}
fn default_availability_color() -> String {
    "#2ECC71".to_string()
}
fn default_mtbf_color() -> String {
    "#3498DB".to_string()
}
fn default_mttr_color() -> String {
    "#F39C12".to_string()
}
fn default_correctivo_color() -> String {
    "#E74C3C".to_string()
}
fn default_preventivo_color() -> String {
    "#3498DB".to_string()
}
fn default_predictivo_color() -> String {
    "#2ECC71".to_string()
}
fn default_background() -> String {
    "rgba(0,0,0,0)".to_string()
}
fn default_font_color() -> String {
    "white".to_string()
}
fn default_title_font_size() -> u32 {
    16
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            availability: default_availability_color(),
            mtbf: default_mtbf_color(),
            mttr: default_mttr_color(),
            correctivo: default_correctivo_color(),
            preventivo: default_preventivo_color(),
            predictivo: default_predictivo_color(),
        }
    }
}

impl Palette {
    /// Fixed colour of a maintenance category slice.
    pub fn for_type(&self, kind: &str) -> &str {
        match kind {
            "Correctivo" => &self.correctivo,
            "Preventivo" => &self.preventivo,
            "Predictivo" => &self.predictivo,
            _ => "#95A5A6",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: default_background(),
            font_color: default_font_color(),
            title_font_size: default_title_font_size(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            auto_range: default_auto_range(),
            not_available: default_not_available(),
            colors: Palette::default(),
            theme: Theme::default(),
        }
    }
}

/// Top-level keys a complete config file carries.
const EXPECTED_KEYS: [&str; 5] = [
    "output_format",
    "auto_range",
    "not_available",
    "colors",
    "theme",
];

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("."));
            appdata.join("rmaintkpi")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rmaintkpi")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rmaintkpi.conf")
    }

    /// Load configuration from `path` (or the standard file), or return defaults if not found
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write the default configuration to `path` (or the standard file).
    ///
    /// With `is_test` nothing is written and only the target path is returned.
    pub fn init_all(path: Option<&Path>, is_test: bool) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if is_test {
            return Ok(path);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }

    /// List top-level keys missing from the config file at `path`.
    pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            return Ok(EXPECTED_KEYS.iter().map(|k| k.to_string()).collect());
        }

        let content = fs::read_to_string(path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)?;

        let map = match value.as_mapping() {
            Some(m) => m,
            None if value.is_null() => return Ok(EXPECTED_KEYS.iter().map(|k| k.to_string()).collect()),
            None => {
                return Err(AppError::Config(format!(
                    "{} is not a YAML mapping",
                    path.display()
                )));
            }
        };

        Ok(EXPECTED_KEYS
            .iter()
            .filter(|k| !map.contains_key(serde_yaml::Value::String(k.to_string())))
            .map(|k| k.to_string())
            .collect())
    }
}
