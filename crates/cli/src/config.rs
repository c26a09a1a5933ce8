//! Demo configuration

use clap::ValueEnum;
use patterns_serializers::SerializationFormat;
use serde::{Deserialize, Serialize};

/// Which demos to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoSelection {
    All,
    Mediator,
    Visitor,
}

impl DemoSelection {
    pub fn runs_mediator(&self) -> bool {
        matches!(self, DemoSelection::All | DemoSelection::Mediator)
    }

    pub fn runs_visitor(&self) -> bool {
        matches!(self, DemoSelection::All | DemoSelection::Visitor)
    }
}

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    pub demo: DemoSelection,
    pub formats: Vec<SerializationFormat>,
    pub escape: bool,
    pub pause: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            demo: DemoSelection::All,
            formats: SerializationFormat::defaults(),
            escape: false,
            pause: true,
        }
    }
}
