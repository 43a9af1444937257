use serde::{Deserialize, Serialize};

use crate::api::{Contributor, Publisher};

pub type Isbn = String;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookFormat {
    Manga,
    Bd,
    Livre,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
/// Lending status attached to a catalog entry
pub struct ExchangeStatus {
    #[serde(default)]
    pub borrower: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Book as served by /api/public/books, identified by its ISBN
pub struct Book {
    pub isbn: Isbn,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "author", alias = "authors", default)]
    pub authors: Vec<Contributor>,
    #[serde(rename = "illustrator", alias = "illustrators", default)]
    pub illustrators: Vec<Contributor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
    #[serde(rename = "genre", alias = "genres", default)]
    pub genres: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<BookFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tome: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statut: Option<ExchangeStatus>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
/// Filters of GET /api/public/books/search
pub struct BookSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<BookFormat>,
}

impl BookSearch {
    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.category.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_backend_field_names() {
        let book: Book = serde_json::from_str(
            r#"{
                "isbn": "9782505000327",
                "title": "Akira",
                "author": [{"id": 3, "firstname": "Katsuhiro", "surname": "Otomo"}],
                "illustrator": [],
                "publisher": {"id": 1, "name": "Glénat"},
                "genre": ["SF"],
                "format": "MANGA",
                "tome": 1,
                "publicationYear": 1990,
                "coverImage": null
            }"#,
        )
        .unwrap();

        assert_eq!(book.authors[0].surname.as_deref(), Some("Otomo"));
        assert_eq!(book.publisher, Some(Publisher { id: Some(1), name: Some("Glénat".to_string()) }));
        assert_eq!(book.genres, vec!["SF".to_string()]);
        assert_eq!(book.format, Some(BookFormat::Manga));
        assert_eq!(book.publication_year, Some(1990));
        assert_eq!(book.cover_image, None);
    }

    #[test]
    fn accepts_plural_field_names() {
        let book: Book = serde_json::from_str(
            r#"{"isbn": "1", "authors": [{"firstname": "A", "surname": "B"}], "genres": ["X"]}"#,
        )
        .unwrap();
        assert_eq!(book.authors, vec![Contributor::new("A", "B")]);
        assert_eq!(book.genres, vec!["X".to_string()]);
    }

    #[test]
    fn search_without_filters_is_empty() {
        assert!(BookSearch::default().is_empty());
        assert!(!BookSearch::by_title("Akira").is_empty());
    }
}
