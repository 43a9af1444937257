use crate::api::{CopyId, CopySearch, ItemCopy, Page};
use crate::client::{ApiRequest, Gateway, GatewayError};

pub struct CopiesService<'a> {
    gateway: &'a Gateway,
}

impl<'a> CopiesService<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Calls POST /api/public/copies/create endpoint, adds one copy of the item
    pub async fn create(&self, item_id: &str) -> Result<ItemCopy, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::post("/api/public/copies/create").param("itemId", item_id))
            .await
    }

    /// Calls GET /api/public/copies/{id} endpoint
    pub async fn get(&self, id: CopyId) -> Result<ItemCopy, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/copies").segment(id))
            .await
    }

    /// Calls DELETE /api/public/copies/{id} endpoint
    pub async fn delete(&self, id: CopyId) -> Result<bool, GatewayError> {
        self.gateway
            .execute(ApiRequest::delete("/api/public/copies").segment(id))
            .await
    }

    pub async fn all(&self) -> Result<Vec<ItemCopy>, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/copies/all"))
            .await
    }

    /// Calls GET /api/public/copies/search endpoint
    pub async fn search(&self, search: &CopySearch) -> Result<Page<ItemCopy>, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/copies/search").query(search)?)
            .await
    }

    /// Calls GET /api/public/copies/{id}/isAvailable endpoint
    pub async fn is_borrowable(&self, id: CopyId) -> Result<bool, GatewayError> {
        self.gateway
            .fetch_json(
                ApiRequest::get("/api/public/copies")
                    .segment(id)
                    .segment("isAvailable"),
            )
            .await
    }
}
