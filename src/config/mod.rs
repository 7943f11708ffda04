use crate::errors::{AppError, AppResult};
use crate::export::chart::{AxisLabels, ChartStyle};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_input_file")]
    pub input_file: String,
    #[serde(default = "default_summary_file")]
    pub summary_file: String,
    #[serde(default = "default_chart_file")]
    pub chart_file: String,
    #[serde(default = "default_window_hours")]
    pub window_hours: i64,
    #[serde(default = "default_threshold")]
    pub threshold_mg_dl: f64,
    #[serde(default = "default_band")]
    pub band_mg_dl: f64,
    #[serde(default)]
    pub axis_labels: AxisLabels,
    #[serde(default)]
    pub chart_style: ChartStyle,
    #[serde(default = "default_show_chart")]
    pub show_chart: bool,
    #[serde(default = "default_chart_width")]
    pub chart_width: u32,
    #[serde(default = "default_chart_height")]
    pub chart_height: u32,
}

fn default_input_file() -> String {
    "glucose.csv".to_string()
}
fn default_summary_file() -> String {
    "latest_glucose_data.txt".to_string()
}
fn default_chart_file() -> String {
    "graph.png".to_string()
}
fn default_window_hours() -> i64 {
    24
}
fn default_threshold() -> f64 {
    120.0
}
fn default_band() -> f64 {
    5.0
}
fn default_show_chart() -> bool {
    true
}
fn default_chart_width() -> u32 {
    1024
}
fn default_chart_height() -> u32 {
    768
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            summary_file: default_summary_file(),
            chart_file: default_chart_file(),
            window_hours: default_window_hours(),
            threshold_mg_dl: default_threshold(),
            band_mg_dl: default_band(),
            axis_labels: AxisLabels::default(),
            chart_style: ChartStyle::default(),
            show_chart: default_show_chart(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("glucograph")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".glucograph")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("glucograph.conf")
    }

    /// Load configuration.
    ///
    /// - explicit `path` → must exist
    /// - no path → the standard config file, or defaults when it is missing
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let cfg = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(AppError::Config(format!(
                        "config file not found: {}",
                        p.display()
                    )));
                }
                Self::from_file(p)?
            }
            None => {
                let p = Self::config_file();
                if p.exists() {
                    Self::from_file(&p)?
                } else {
                    Config::default()
                }
            }
        };

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // un file vuoto equivale ai default
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.window_hours <= 0 {
            return Err(AppError::Config(format!(
                "window_hours must be positive (got {})",
                self.window_hours
            )));
        }
        if !self.threshold_mg_dl.is_finite() {
            return Err(AppError::Config("threshold_mg_dl must be a number".into()));
        }
        if !self.band_mg_dl.is_finite() || self.band_mg_dl < 0.0 {
            return Err(AppError::Config(
                "band_mg_dl must be zero or positive".into(),
            ));
        }
        if self.chart_width == 0 || self.chart_height == 0 {
            return Err(AppError::Config("chart size must be non-zero".into()));
        }
        Ok(())
    }

    pub fn input_path(&self) -> PathBuf {
        expand_tilde(&self.input_file)
    }

    pub fn summary_path(&self) -> PathBuf {
        expand_tilde(&self.summary_file)
    }

    pub fn chart_path(&self) -> PathBuf {
        expand_tilde(&self.chart_file)
    }

    /// Write the default configuration to `path` (the standard location
    /// when `None`). Returns the path written, or `None` if a file is
    /// already there.
    pub fn init_file(path: Option<&Path>) -> AppResult<Option<PathBuf>> {
        let target = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if target.exists() {
            return Ok(None);
        }

        if let Some(dir) = target.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        fs::write(&target, Config::default().to_yaml()?)?;
        Ok(Some(target))
    }
}
