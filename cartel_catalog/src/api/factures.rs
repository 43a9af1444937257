use serde::{Deserialize, Serialize};

use crate::api::{CopyId, Item, Timestamp};

pub type FactureId = i64;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Copy reference as stored on a facture by the backend
pub struct FactureCopy {
    pub id: CopyId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objet: Option<Item>,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub borrowable: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Line of a facture as the catalog screens handle it: the copy id next to its parent item
pub struct FactureItem {
    pub copy_id: CopyId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub borrowable: bool,
}

impl From<FactureCopy> for FactureItem {
    fn from(copy: FactureCopy) -> Self {
        Self {
            copy_id: copy.id,
            item: copy.objet,
            available: copy.available,
            borrowable: copy.borrowable,
        }
    }
}

impl From<FactureItem> for FactureCopy {
    fn from(item: FactureItem) -> Self {
        Self {
            id: item.copy_id,
            objet: item.item,
            available: item.available,
            borrowable: item.borrowable,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Facture with its lines under `items`
pub struct Facture {
    pub id: FactureId,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub filepath: Option<String>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
    #[serde(default)]
    pub items: Vec<FactureItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
/// Facture to be created
pub struct FactureDraft {
    pub filename: String,
    pub items: Vec<FactureItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Facture as the backend reads and writes it, lines under `copies`
pub struct FactureRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FactureId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(default)]
    pub copies: Vec<FactureCopy>,
}

impl From<FactureDraft> for FactureRecord {
    fn from(draft: FactureDraft) -> Self {
        Self {
            filename: Some(draft.filename),
            copies: draft.items.into_iter().map(FactureCopy::from).collect(),
            ..Self::default()
        }
    }
}

impl From<FactureRecord> for Facture {
    fn from(record: FactureRecord) -> Self {
        Self {
            id: record.id.unwrap_or_default(),
            filename: record.filename,
            filepath: record.filepath,
            updated_at: record.updated_at,
            items: record.copies.into_iter().map(FactureItem::from).collect(),
        }
    }
}
