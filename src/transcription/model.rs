//! Recognition model (topic) definitions.
//!
//! SpeechKit selects its language model through the `topic` query parameter.
//! Only one topic can be used per request.

use serde::{Deserialize, Serialize};

/// Represents a supported recognition topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RecognitionTopic {
    /// Current general-purpose model
    #[default]
    #[serde(rename = "general")]
    General,
    /// Release candidate of the next general model
    #[serde(rename = "general:rc")]
    GeneralRc,
    /// Previous general model
    #[serde(rename = "general:deprecated")]
    GeneralDeprecated,
}

impl RecognitionTopic {
    /// Returns the topic identifier sent to the API
    pub fn id(&self) -> &'static str {
        match self {
            RecognitionTopic::General => "general",
            RecognitionTopic::GeneralRc => "general:rc",
            RecognitionTopic::GeneralDeprecated => "general:deprecated",
        }
    }

    /// Returns a human-readable description of the topic
    pub fn description(&self) -> &'static str {
        match self {
            RecognitionTopic::General => "General (current model)",
            RecognitionTopic::GeneralRc => "General RC (release candidate)",
            RecognitionTopic::GeneralDeprecated => "General (previous model)",
        }
    }

    /// Returns all available topics
    pub fn all() -> &'static [Self] {
        &[
            RecognitionTopic::General,
            RecognitionTopic::GeneralRc,
            RecognitionTopic::GeneralDeprecated,
        ]
    }
}

impl std::fmt::Display for RecognitionTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
