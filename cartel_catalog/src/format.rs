//! Display strings for catalog records, with the French fallbacks shown when a field is missing.

use itertools::Itertools;

use crate::api::{Book, Contributor, Game, Item, Publisher};

pub const UNKNOWN_AUTHOR: &str = "Auteur inconnu";
pub const UNKNOWN_ILLUSTRATOR: &str = "Illustrateur inconnu";
pub const UNKNOWN_PUBLISHER: &str = "Éditeur inconnu";
pub const UNKNOWN_GENRE: &str = "Genre inconnu";
pub const UNKNOWN_CREATOR: &str = "Créateur inconnu";
pub const UNKNOWN_CATEGORY: &str = "Catégorie inconnue";
pub const UNKNOWN_PLAYER_COUNT: &str = "Nombre de joueurs inconnu";
pub const UNKNOWN_PLAYTIME: &str = "Durée inconnue";
pub const UNKNOWN_ID: &str = "ID inconnu";
pub const UNKNOWN_NAME: &str = "Nom inconnu";
pub const NO_DESCRIPTION: &str = "Pas de description disponible";

fn join_names(contributors: &[Contributor], fallback: &str) -> String {
    if contributors.is_empty() {
        return fallback.to_string();
    }
    contributors.iter().map(Contributor::full_name).join(", ")
}

fn publisher_name(publisher: Option<&Publisher>) -> String {
    publisher
        .and_then(|publisher| publisher.name.as_deref())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_PUBLISHER)
        .to_string()
}

pub fn format_author(book: &Book) -> String {
    join_names(&book.authors, UNKNOWN_AUTHOR)
}

pub fn format_illustrator(book: &Book) -> String {
    join_names(&book.illustrators, UNKNOWN_ILLUSTRATOR)
}

pub fn format_publisher(book: &Book) -> String {
    publisher_name(book.publisher.as_ref())
}

pub fn format_genre(book: &Book) -> String {
    if book.genres.is_empty() {
        return UNKNOWN_GENRE.to_string();
    }
    book.genres.join(", ")
}

/// A book is available unless someone currently borrows it
pub fn is_book_available(book: &Book) -> bool {
    !book
        .statut
        .as_ref()
        .is_some_and(|statut| statut.borrower.is_some())
}

pub fn format_creator(game: &Game) -> String {
    join_names(&game.creators, UNKNOWN_CREATOR)
}

pub fn format_game_publisher(game: &Game) -> String {
    publisher_name(game.publisher.as_ref())
}

pub fn format_categories(game: &Game) -> String {
    if game.categories.is_empty() {
        return UNKNOWN_CATEGORY.to_string();
    }
    game.categories.iter().map(|category| category.as_str()).join(", ")
}

fn players(count: u32) -> String {
    format!("{} joueur{}", count, if count > 1 { "s" } else { "" })
}

/// "2 - 5 joueurs", or a single count when both bounds agree or only one is known.
/// Zero counts as unknown
pub fn format_player_count(game: &Game) -> String {
    let min_players = game.min_players.filter(|count| *count > 0);
    let max_players = game.max_players.filter(|count| *count > 0);
    match (min_players, max_players) {
        (None, None) => UNKNOWN_PLAYER_COUNT.to_string(),
        (Some(min), Some(max)) if min != max => format!("{min} - {max} joueurs"),
        (Some(count), _) | (None, Some(count)) => players(count),
    }
}

pub fn format_playtime(game: &Game) -> String {
    match game.avg_playtime.filter(|minutes| *minutes > 0) {
        None => UNKNOWN_PLAYTIME.to_string(),
        Some(minutes) => format!("{} minute{}", minutes, if minutes > 1 { "s" } else { "" }),
    }
}

pub fn is_game_available(game: &Game) -> bool {
    game.copy_count.unwrap_or_default() > 0
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetails {
    pub id: String,
    pub name: String,
    pub description: String,
}

fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

pub fn format_item_details(item: &Item) -> ItemDetails {
    ItemDetails {
        id: or_fallback(Some(item.barcode.as_str()), UNKNOWN_ID),
        name: or_fallback(Some(item.name.as_str()), UNKNOWN_NAME),
        description: or_fallback(item.description.as_deref(), NO_DESCRIPTION),
    }
}

/// Items are available unless the backend explicitly says otherwise
pub fn is_item_available(item: &Item) -> bool {
    item.available != Some(false)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::{ExchangeStatus, GameCategory};

    fn book(mut value: serde_json::Value) -> Book {
        value["isbn"] = json!("9782723428262");
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn author_joins_full_names() {
        assert_eq!(
            format_author(&book(json!({"authors": [{"firstname": "A", "surname": "B"}]}))),
            "A B"
        );
        assert_eq!(
            format_author(&book(json!({"author": [
                {"firstname": "René", "surname": "Goscinny"},
                {"surname": "Uderzo"}
            ]}))),
            "René Goscinny, Uderzo"
        );
    }

    #[test]
    fn author_fallback_when_missing_or_empty() {
        assert_eq!(format_author(&book(json!({"authors": []}))), UNKNOWN_AUTHOR);
        assert_eq!(format_author(&book(json!({}))), "Auteur inconnu");
        assert_eq!(format_illustrator(&book(json!({}))), "Illustrateur inconnu");
    }

    #[test]
    fn publisher_and_genre() {
        let full = book(json!({"publisher": {"name": "Dargaud"}, "genre": ["Aventure", "Humour"]}));
        assert_eq!(format_publisher(&full), "Dargaud");
        assert_eq!(format_genre(&full), "Aventure, Humour");

        let bare = book(json!({"publisher": {}}));
        assert_eq!(format_publisher(&bare), "Éditeur inconnu");
        assert_eq!(format_genre(&bare), "Genre inconnu");
    }

    #[test]
    fn book_availability_follows_borrower() {
        let mut book = Book::default();
        assert!(is_book_available(&book));
        book.statut = Some(ExchangeStatus { borrower: None });
        assert!(is_book_available(&book));
        book.statut = Some(ExchangeStatus {
            borrower: Some(json!({"id": 3})),
        });
        assert!(!is_book_available(&book));
    }

    #[test]
    fn game_strings() {
        let game = Game {
            creators: vec![Contributor::new("Jean-Louis", "Roubira")],
            categories: vec![GameCategory::JeuSoiree, GameCategory::Cartes],
            min_players: Some(3),
            max_players: Some(6),
            avg_playtime: Some(30),
            copy_count: Some(2),
            ..Game::default()
        };
        assert_eq!(format_creator(&game), "Jean-Louis Roubira");
        assert_eq!(format_game_publisher(&game), UNKNOWN_PUBLISHER);
        assert_eq!(format_categories(&game), "JEUSOIREE, CARTES");
        assert_eq!(format_player_count(&game), "3 - 6 joueurs");
        assert_eq!(format_playtime(&game), "30 minutes");
        assert!(is_game_available(&game));
    }

    #[test]
    fn game_fallbacks() {
        let game = Game::default();
        assert_eq!(format_creator(&game), "Créateur inconnu");
        assert_eq!(format_categories(&game), "Catégorie inconnue");
        assert_eq!(format_player_count(&game), "Nombre de joueurs inconnu");
        assert_eq!(format_playtime(&game), "Durée inconnue");
        assert!(!is_game_available(&game));
    }

    #[test]
    fn player_count_singular_and_single_bound() {
        let solo = Game {
            min_players: Some(1),
            max_players: Some(1),
            avg_playtime: Some(1),
            ..Game::default()
        };
        assert_eq!(format_player_count(&solo), "1 joueur");
        assert_eq!(format_playtime(&solo), "1 minute");

        let only_max = Game {
            min_players: Some(0),
            max_players: Some(4),
            ..Game::default()
        };
        assert_eq!(format_player_count(&only_max), "4 joueurs");
    }

    #[test]
    fn item_details_fallbacks() {
        let item = Item::default();
        assert_eq!(
            format_item_details(&item),
            ItemDetails {
                id: "ID inconnu".to_string(),
                name: "Nom inconnu".to_string(),
                description: "Pas de description disponible".to_string(),
            }
        );
        assert!(is_item_available(&item));

        let item = Item {
            barcode: "42".to_string(),
            name: "Carcassonne".to_string(),
            description: Some("Pose de tuiles".to_string()),
            available: Some(false),
            ..Item::default()
        };
        assert_eq!(format_item_details(&item).description, "Pose de tuiles");
        assert!(!is_item_available(&item));
    }
}
