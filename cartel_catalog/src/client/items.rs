use crate::api::{Item, ItemCopy, ItemSearch, Page, Pagination};
use crate::client::{ApiRequest, Gateway, GatewayError};

pub struct ItemsService<'a> {
    gateway: &'a Gateway,
}

impl<'a> ItemsService<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Calls GET /api/public/items endpoint
    pub async fn list(&self, pagination: &Pagination) -> Result<Page<Item>, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/items").query(pagination)?)
            .await
    }

    /// Calls GET /api/public/items/search endpoint
    pub async fn search(&self, search: &ItemSearch) -> Result<Page<Item>, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/items/search").query(search)?)
            .await
    }

    /// Calls GET /api/public/items/{id} endpoint, `id` is the item barcode
    pub async fn get(&self, id: &str) -> Result<Item, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/items").segment(id))
            .await
    }

    /// Calls GET /api/public/items/{id}/copies endpoint
    pub async fn copies(&self, id: &str) -> Result<Vec<ItemCopy>, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/items").segment(id).segment("copies"))
            .await
    }
}
