use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Paging and ordering accepted by the paginated list endpoints.
/// Fields left as None are not sent, the backend applies its own defaults
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asc: Option<bool>,
}

impl Pagination {
    pub fn page(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number: Some(page_number),
            page_size: Some(page_size),
            ..Self::default()
        }
    }

    pub fn sorted_by(self, sort_by: impl Into<String>, asc: bool) -> Self {
        Self {
            sort_by: Some(sort_by.into()),
            asc: Some(asc),
            ..self
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// One page of a Spring `Page` response
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub empty: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Book author, illustrator or game creator
pub struct Contributor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
}

impl Contributor {
    pub fn new(firstname: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            id: None,
            firstname: Some(firstname.into()),
            surname: Some(surname.into()),
        }
    }

    /// "firstname surname", with missing parts dropped
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.firstname.as_deref().unwrap_or_default(),
            self.surname.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Publisher {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Publisher {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
/// Date as emitted by the backend: epoch millis for `java.util.Date`,
/// ISO text or a `[year, month, day, ...]` array for `LocalDateTime`
pub enum Timestamp {
    Millis(i64),
    Text(String),
    Parts(Vec<i64>),
}
