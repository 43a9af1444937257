use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::{Contributor, Pagination, Publisher};

pub type Barcode = String;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameCategory {
    #[serde(rename = "CARTES")]
    Cartes,
    #[serde(rename = "PLATEAU")]
    Plateau,
    #[serde(rename = "BLUFF")]
    Bluff,
    #[serde(rename = "COOPERATIF")]
    Cooperatif,
    #[serde(rename = "JEUSOIREE")]
    JeuSoiree,
    #[serde(rename = "COMPETITIF")]
    Competitif,
    #[serde(rename = "GRANDJEU")]
    GrandJeu,
    #[serde(rename = "TRIVIA")]
    Trivia,
    #[serde(rename = "ADRESSE")]
    Adresse,
    #[serde(rename = "ASYMETRIQUE")]
    Asymetrique,
    #[serde(rename = "SE_JOUE_PARTOUT")]
    SeJouePartout,
}

impl GameCategory {
    pub const ALL: [GameCategory; 11] = [
        GameCategory::Cartes,
        GameCategory::Plateau,
        GameCategory::Bluff,
        GameCategory::Cooperatif,
        GameCategory::JeuSoiree,
        GameCategory::Competitif,
        GameCategory::GrandJeu,
        GameCategory::Trivia,
        GameCategory::Adresse,
        GameCategory::Asymetrique,
        GameCategory::SeJouePartout,
    ];

    /// Name used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            GameCategory::Cartes => "CARTES",
            GameCategory::Plateau => "PLATEAU",
            GameCategory::Bluff => "BLUFF",
            GameCategory::Cooperatif => "COOPERATIF",
            GameCategory::JeuSoiree => "JEUSOIREE",
            GameCategory::Competitif => "COMPETITIF",
            GameCategory::GrandJeu => "GRANDJEU",
            GameCategory::Trivia => "TRIVIA",
            GameCategory::Adresse => "ADRESSE",
            GameCategory::Asymetrique => "ASYMETRIQUE",
            GameCategory::SeJouePartout => "SE_JOUE_PARTOUT",
        }
    }
}

impl fmt::Display for GameCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        GameCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| format!("Unknown game category {value}"))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Board/card game, identified by its barcode
pub struct Game {
    pub barcode: Barcode,
    #[serde(default, alias = "title")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    #[serde(default, alias = "authors")]
    pub creators: Vec<Contributor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
    #[serde(default)]
    pub categories: Vec<GameCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_players: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_players: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_playtime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_count: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Filters of GET /api/public/games
pub struct GameSearch {
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_game: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_players: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_players: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_playtime: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_playtime: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<GameCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_match_wire_names() {
        for category in GameCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            assert_eq!(category.as_str().parse::<GameCategory>(), Ok(category));
        }
        assert!("ECHECS".parse::<GameCategory>().is_err());
    }

    #[test]
    fn reads_game_with_missing_counts() {
        let game: Game = serde_json::from_str(
            r#"{"barcode": "3760146", "name": "Dixit", "categories": ["JEUSOIREE", "CARTES"], "avgPlaytime": 30}"#,
        )
        .unwrap();
        assert_eq!(game.name, "Dixit");
        assert_eq!(game.categories, vec![GameCategory::JeuSoiree, GameCategory::Cartes]);
        assert_eq!(game.avg_playtime, Some(30));
        assert_eq!(game.min_players, None);
    }
}
