use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::Timestamp;

pub type SuggestionId = i64;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SuggestionType {
    Livre,
    Manga,
    Bd,
    Jds,
    Jdr,
    Autre,
}

impl SuggestionType {
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionType::Livre => "LIVRE",
            SuggestionType::Manga => "MANGA",
            SuggestionType::Bd => "BD",
            SuggestionType::Jds => "JDS",
            SuggestionType::Jdr => "JDR",
            SuggestionType::Autre => "AUTRE",
        }
    }
}

impl fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuggestionType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "LIVRE" => Ok(SuggestionType::Livre),
            "MANGA" => Ok(SuggestionType::Manga),
            "BD" => Ok(SuggestionType::Bd),
            "JDS" => Ok(SuggestionType::Jds),
            "JDR" => Ok(SuggestionType::Jdr),
            "AUTRE" => Ok(SuggestionType::Autre),
            other => Err(format!("Unknown suggestion type {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// User submitted request or complaint about the catalog
pub struct Suggestion {
    pub id: SuggestionId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
/// Body of POST /api/public/suggestions, id and creation date are set by the backend
pub struct SuggestionDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
