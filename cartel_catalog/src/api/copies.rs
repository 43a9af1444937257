use serde::{Deserialize, Serialize};

use crate::api::{Item, Pagination};

pub type CopyId = i64;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Physical copy of a catalog item
pub struct ItemCopy {
    #[serde(alias = "idcopy")]
    pub id: CopyId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_barcode: Option<String>,
    /// Parent item, only present on endpoints returning the full entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objet: Option<Item>,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub borrowable: bool,
}

impl ItemCopy {
    /// Barcode of the parent item, whichever representation the backend used
    pub fn parent_barcode(&self) -> Option<&str> {
        self.item_barcode
            .as_deref()
            .or_else(|| self.objet.as_ref().map(|item| item.barcode.as_str()))
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Filters of GET /api/public/copies/search
pub struct CopySearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}
