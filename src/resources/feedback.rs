use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryLevel {
    #[default]
    Info,
    Caution,
    Warning,
}

/// Advisory text shown next to the force diagram.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub level: AdvisoryLevel,
    pub message: String,
    pub tips: Vec<String>,
}

impl Default for Feedback {
    fn default() -> Self {
        Self {
            level: AdvisoryLevel::Info,
            message: "Adjust the sliders to see how the forces respond.".to_string(),
            tips: Vec::new(),
        }
    }
}
