use crate::api::{Facture, FactureDraft, FactureId, FactureRecord};
use crate::client::{ApiRequest, Gateway, GatewayError};

const FACTURES: &str = "/api/public/factures";

/// Factures travel as [`FactureRecord`] with their lines under `copies`,
/// callers only see [`Facture`] with `items`
pub struct FacturesService<'a> {
    gateway: &'a Gateway,
}

impl<'a> FacturesService<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    async fn fetch_many(&self, request: ApiRequest) -> Result<Vec<Facture>, GatewayError> {
        let records: Vec<FactureRecord> = self.gateway.fetch_json(request).await?;
        Ok(records.into_iter().map(Facture::from).collect())
    }

    /// Calls POST /api/public/factures endpoint
    pub async fn create(&self, draft: FactureDraft) -> Result<Facture, GatewayError> {
        let record: FactureRecord = self
            .gateway
            .fetch_json(ApiRequest::post(FACTURES).json(&FactureRecord::from(draft))?)
            .await?;
        Ok(record.into())
    }

    /// Calls GET /api/public/factures endpoint
    pub async fn list(&self) -> Result<Vec<Facture>, GatewayError> {
        self.fetch_many(ApiRequest::get(FACTURES)).await
    }

    pub async fn get(&self, id: FactureId) -> Result<Facture, GatewayError> {
        let record: FactureRecord = self
            .gateway
            .fetch_json(ApiRequest::get(FACTURES).segment(id))
            .await?;
        Ok(record.into())
    }

    pub async fn delete(&self, id: FactureId) -> Result<bool, GatewayError> {
        self.gateway
            .execute(ApiRequest::delete(FACTURES).segment(id))
            .await
    }

    /// Calls GET /api/public/factures/search-by-item endpoint.
    /// Anonymous sessions get a 403 status error
    pub async fn search_by_item(&self, query: &str) -> Result<Vec<Facture>, GatewayError> {
        self.fetch_many(ApiRequest::get(format!("{FACTURES}/search-by-item")).param("query", query))
            .await
    }

    pub async fn search_by_filename(&self, filename: &str) -> Result<Vec<Facture>, GatewayError> {
        self.fetch_many(
            ApiRequest::get(format!("{FACTURES}/search/filename")).param("filename", filename),
        )
        .await
    }

    pub async fn search_by_item_name(&self, item_name: &str) -> Result<Vec<Facture>, GatewayError> {
        self.fetch_many(
            ApiRequest::get(format!("{FACTURES}/search/item-name")).param("itemName", item_name),
        )
        .await
    }

    pub async fn search_by_item_description(
        &self,
        description: &str,
    ) -> Result<Vec<Facture>, GatewayError> {
        self.fetch_many(
            ApiRequest::get(format!("{FACTURES}/search/item-description"))
                .param("itemDescription", description),
        )
        .await
    }
}
