use crate::api::{Contributor, Game, GameCategory, GameSearch};
use crate::client::{ApiRequest, Gateway, GatewayError};

pub struct GamesService<'a> {
    gateway: &'a Gateway,
}

impl<'a> GamesService<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Calls GET /api/public/games endpoint with the set filters
    pub async fn list(&self, search: &GameSearch) -> Result<Vec<Game>, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/games").query(search)?)
            .await
    }

    /// Calls GET /api/public/games/{barcode} endpoint
    pub async fn get(&self, barcode: &str) -> Result<Game, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/games").segment(barcode))
            .await
    }

    pub async fn creators(&self) -> Result<Vec<Contributor>, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/games/creators"))
            .await
    }

    pub async fn categories(&self) -> Result<Vec<GameCategory>, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/games/categories"))
            .await
    }
}
