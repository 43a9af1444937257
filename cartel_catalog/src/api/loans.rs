use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::{CopyId, ItemCopy, Pagination, Person, PersonId, Timestamp};

pub type LoanId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Which way an inter-organisation loan goes: items lent to the Cartel by a person,
/// or items the Cartel lends to a person
pub enum LoanDirection {
    ToCartel,
    ByCartel,
}

impl LoanDirection {
    pub fn path_segment(self) -> &'static str {
        match self {
            LoanDirection::ToCartel => "toCartel",
            LoanDirection::ByCartel => "byCartel",
        }
    }

    /// Role of the external person, used as prefix of the person filters
    pub fn person_role(self) -> &'static str {
        match self {
            LoanDirection::ToCartel => "owner",
            LoanDirection::ByCartel => "borrower",
        }
    }
}

impl fmt::Display for LoanDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for LoanDirection {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "to" | "tocartel" => Ok(LoanDirection::ToCartel),
            "by" | "bycartel" => Ok(LoanDirection::ByCartel),
            other => Err(format!("Unknown loan direction {other}, expected to or by")),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", from = "LoanRecord")]
/// Loan in either direction. The person is the owner for loans to the Cartel
/// and the borrower for loans by the Cartel.
///
/// The flat fields are filled from `person` and `item_shared` when the backend
/// sends the entity instead of the DTO
pub struct Loan {
    pub id: LoanId,
    pub person_id: Option<PersonId>,
    pub person_name: Option<String>,
    pub person_contact: Option<String>,
    pub item_copy_id: Option<CopyId>,
    pub item_name: Option<String>,
    pub item_barcode: Option<String>,
    pub item_cover_image: Option<String>,
    pub loan_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_shared: Option<ItemCopy>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoanRecord {
    id: LoanId,
    #[serde(default, alias = "ownerId", alias = "borrowerId")]
    person_id: Option<PersonId>,
    #[serde(default, alias = "ownerName", alias = "borrowerName")]
    person_name: Option<String>,
    #[serde(default, alias = "ownerContact", alias = "borrowerContact")]
    person_contact: Option<String>,
    #[serde(default)]
    item_copy_id: Option<CopyId>,
    #[serde(default)]
    item_name: Option<String>,
    #[serde(default)]
    item_barcode: Option<String>,
    #[serde(default)]
    item_cover_image: Option<String>,
    #[serde(default)]
    loan_date: Option<Timestamp>,
    #[serde(default)]
    end_date: Option<Timestamp>,
    #[serde(default)]
    active: Option<bool>,
    #[serde(default, alias = "owner", alias = "borrower")]
    person: Option<Person>,
    #[serde(default)]
    item_shared: Option<ItemCopy>,
}

impl From<LoanRecord> for Loan {
    fn from(record: LoanRecord) -> Self {
        let person = record.person.as_ref();
        let copy = record.item_shared.as_ref();
        let item = copy.and_then(|copy| copy.objet.as_ref());

        let person_name = record.person_name.or_else(|| {
            person.and_then(|person| {
                let name = [person.firstname.as_deref(), person.surname.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" ");
                (!name.is_empty()).then_some(name)
            })
        });

        Self {
            id: record.id,
            person_id: record.person_id.or(person.map(|person| person.id)),
            person_name,
            person_contact: record
                .person_contact
                .or_else(|| person.and_then(|person| person.contact.clone())),
            item_copy_id: record.item_copy_id.or(copy.map(|copy| copy.id)),
            item_name: record.item_name.or_else(|| {
                copy.and_then(|copy| copy.item_name.clone())
                    .or_else(|| item.map(|item| item.name.clone()))
            }),
            item_barcode: record
                .item_barcode
                .or_else(|| copy.and_then(|copy| copy.parent_barcode().map(str::to_string))),
            item_cover_image: record
                .item_cover_image
                .or_else(|| item.and_then(|item| item.cover_image.clone())),
            loan_date: record.loan_date,
            end_date: record.end_date,
            active: record.active,
            person: record.person,
            item_shared: record.item_shared,
        }
    }
}

impl Loan {
    pub fn is_completed(&self) -> bool {
        match self.active {
            Some(active) => !active,
            None => self.end_date.is_some(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Filters of GET /api/public/loans/{toCartel,byCartel}.
/// `person*` filters are sent as `owner*` or `borrower*` depending on the direction
pub struct LoanSearch {
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl Default for LoanSearch {
    fn default() -> Self {
        Self {
            pagination: Pagination {
                page_number: Some(0),
                page_size: Some(20),
                sort_by: Some("loanDate".to_string()),
                asc: None,
            },
            item_name: None,
            person_first_name: None,
            person_surname: None,
            start_date_before: None,
            start_date_after: None,
            end_date_before: None,
            end_date_after: None,
            active: None,
        }
    }
}
