pub mod settings;

pub use settings::{AppSettings, FilterSettings, ReportSettings, ScoringSettings, Settings};
