use serde::{Deserialize, Serialize};

pub type PersonId = i64;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Borrower or lender known to the Cartel
pub struct Person {
    pub id: PersonId,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    /// Deposit left by the person
    #[serde(default)]
    pub caution: Option<i32>,
    #[serde(default)]
    pub loan_to_cartel_count: u32,
    #[serde(default)]
    pub loan_by_cartel_count: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
/// Body of the person create and update calls
pub struct PersonDraft {
    pub firstname: String,
    pub surname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caution: Option<i32>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Filters of GET /api/public/loans/persons/search
pub struct PersonSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PersonSearch {
    pub fn by_name(fullname: impl Into<String>) -> Self {
        Self {
            fullname: Some(fullname.into()),
            ..Self::default()
        }
    }
}

impl Default for PersonSearch {
    fn default() -> Self {
        Self {
            fullname: None,
            page_number: Some(0),
            page_size: Some(20),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_rejects_unknown_fields() {
        let draft: Result<PersonDraft, _> =
            serde_json::from_str(r#"{"firstname": "Ada", "surname": "L", "nickname": "al"}"#);
        assert!(draft.is_err());
    }

    #[test]
    fn draft_omits_unset_optionals() {
        let draft = PersonDraft {
            firstname: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            contact: None,
            caution: Some(20),
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            serde_json::json!({"firstname": "Ada", "surname": "Lovelace", "caution": 20})
        );
    }
}
