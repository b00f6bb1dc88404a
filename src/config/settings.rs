use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, File};
use std::path::Path;

use crate::models::Filter;
use crate::scoring::ScoringOptions;
use crate::scoring::options::MIDI_WEEKDAY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub scoring: ScoringSettings,
    pub filter: FilterSettings,
    pub report: ReportSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringSettings {
    pub rating_scale: f64,
    pub decimal_places: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSettings {
    pub exclude_midis: bool,
    #[serde(default)]
    pub duration_days: Option<u32>,
    /// 0 = Sunday ... 6 = Saturday
    pub excluded_weekday: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default)]
    pub current_username: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "Leaderboard Scorer".to_string(),
                log_level: "info".to_string(),
            },
            scoring: ScoringSettings {
                rating_scale: 1000.0,
                decimal_places: 2,
            },
            filter: FilterSettings {
                exclude_midis: false,
                duration_days: None,
                excluded_weekday: MIDI_WEEKDAY,
            },
            report: ReportSettings::default(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("LEADERBOARD").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        s.try_deserialize()
    }

    pub fn scoring_options(&self) -> ScoringOptions {
        ScoringOptions {
            rating_scale: self.scoring.rating_scale,
            decimal_places: self.scoring.decimal_places,
            excluded_weekday: self.filter.excluded_weekday,
        }
    }

    pub fn default_filter(&self) -> Filter {
        Filter {
            exclude_midis: self.filter.exclude_midis,
            duration: self.filter.duration_days,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.scoring_options().validate()
    }
}
