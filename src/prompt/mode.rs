// Evaluation template selection

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which evaluation contract the model is asked to fulfil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateMode {
    /// Free-text feedback.
    #[default]
    Narrative,
    /// `overallScore` + `feedback`.
    Scored,
    /// Per-answer insights plus categorized mistakes, strengths and recommendations.
    Detailed,
}

impl TemplateMode {
    pub const ALL: [TemplateMode; 3] = [Self::Narrative, Self::Scored, Self::Detailed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Narrative => "narrative",
            Self::Scored => "scored",
            Self::Detailed => "detailed",
        }
    }
}

impl fmt::Display for TemplateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "narrative" => Ok(Self::Narrative),
            "scored" => Ok(Self::Scored),
            "detailed" => Ok(Self::Detailed),
            other => bail!(
                "Unknown evaluation mode '{}' (expected narrative, scored or detailed)",
                other
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes_case_insensitive() {
        assert_eq!("Scored".parse::<TemplateMode>().unwrap(), TemplateMode::Scored);
        assert_eq!(
            "DETAILED".parse::<TemplateMode>().unwrap(),
            TemplateMode::Detailed
        );
        assert_eq!(
            " narrative ".parse::<TemplateMode>().unwrap(),
            TemplateMode::Narrative
        );
    }

    #[test]
    fn test_parse_unknown_mode_fails() {
        let err = "verbose".parse::<TemplateMode>().unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn test_display_round_trips() {
        for mode in TemplateMode::ALL {
            assert_eq!(mode.to_string().parse::<TemplateMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&TemplateMode::Detailed).unwrap();
        assert_eq!(json, "\"detailed\"");
        let mode: TemplateMode = serde_json::from_str("\"scored\"").unwrap();
        assert_eq!(mode, TemplateMode::Scored);
    }
}
