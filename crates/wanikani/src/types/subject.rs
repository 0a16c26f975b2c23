//! Subject types: radicals, kanji and vocabulary.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The kind of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectType {
    /// A radical.
    Radical,
    /// A kanji.
    Kanji,
    /// A vocabulary item written with kanji.
    Vocabulary,
    /// A vocabulary item written only in kana.
    KanaVocabulary,
}

impl SubjectType {
    /// The wire name used by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectType::Radical => "radical",
            SubjectType::Kanji => "kanji",
            SubjectType::Vocabulary => "vocabulary",
            SubjectType::KanaVocabulary => "kana_vocabulary",
        }
    }
}

impl fmt::Display for SubjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "radical" => Ok(SubjectType::Radical),
            "kanji" => Ok(SubjectType::Kanji),
            "vocabulary" => Ok(SubjectType::Vocabulary),
            "kana_vocabulary" => Ok(SubjectType::KanaVocabulary),
            other => Err(format!("unknown subject type: {}", other)),
        }
    }
}

/// A meaning accepted for a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    /// The meaning text.
    pub meaning: String,
    /// Whether this is the primary meaning.
    pub primary: bool,
    /// Whether the meaning is accepted as a review answer.
    pub accepted_answer: bool,
}

/// An additional meaning that is either whitelisted or blacklisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxiliaryMeaning {
    /// `"whitelist"` or `"blacklist"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The meaning text.
    #[serde(alias = "text")]
    pub meaning: String,
}

/// A reading of a kanji or vocabulary subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// The reading in kana.
    pub reading: String,
    /// Whether this is the primary reading.
    pub primary: bool,
    /// Whether the reading is accepted as a review answer.
    #[serde(default = "default_true")]
    pub accepted_answer: bool,
    /// Reading kind for kanji (`onyomi`, `kunyomi`, `nanori`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

fn default_true() -> bool {
    true
}

/// A radical, kanji or vocabulary item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// When the subject was added.
    pub created_at: DateTime<Utc>,
    /// The level the subject belongs to.
    pub level: u8,
    /// URL-safe identifier.
    pub slug: String,
    /// When the subject was removed from the curriculum.
    #[serde(default)]
    pub hidden_at: Option<DateTime<Utc>>,
    /// Page on wanikani.com describing the subject.
    pub document_url: String,
    /// The written form. `None` for radicals that only exist as images.
    #[serde(default)]
    pub characters: Option<String>,
    /// Accepted meanings.
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    /// Extra whitelisted or blacklisted meanings.
    #[serde(default)]
    pub auxiliary_meanings: Vec<AuxiliaryMeaning>,
    /// Readings; empty for radicals.
    #[serde(default)]
    pub readings: Vec<Reading>,
    /// Parts of speech; vocabulary only.
    #[serde(default)]
    pub parts_of_speech: Vec<String>,
    /// Subjects this one is built from.
    #[serde(default)]
    pub component_subject_ids: Vec<u64>,
    /// Subjects that use this one as a component.
    #[serde(default)]
    pub amalgamation_subject_ids: Vec<u64>,
    /// Fields not modelled above: mnemonics, lesson position, character images.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Subject {
    /// The primary meaning, if one is marked.
    pub fn primary_meaning(&self) -> Option<&str> {
        self.meanings
            .iter()
            .find(|m| m.primary)
            .map(|m| m.meaning.as_str())
    }

    /// The primary reading, if one is marked.
    pub fn primary_reading(&self) -> Option<&str> {
        self.readings
            .iter()
            .find(|r| r.primary)
            .map(|r| r.reading.as_str())
    }
}
