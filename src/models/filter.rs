use serde::{Deserialize, Serialize};

/// Optional predicates applied to placed entries before charting and ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    /// Drop the weekly special puzzle day.
    #[serde(default)]
    pub exclude_midis: bool,
    /// Keep only entries dated within the last `duration` days. 0 keeps everything.
    #[serde(default)]
    pub duration: Option<u32>,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        !self.exclude_midis && self.duration.map_or(true, |days| days == 0)
    }
}
