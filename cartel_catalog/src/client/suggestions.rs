use crate::api::{Suggestion, SuggestionDraft, SuggestionId};
use crate::client::{ApiRequest, Gateway, GatewayError};

pub struct SuggestionsService<'a> {
    gateway: &'a Gateway,
}

impl<'a> SuggestionsService<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Calls POST /api/public/suggestions endpoint, the backend assigns id and creation date
    pub async fn create(&self, draft: &SuggestionDraft) -> Result<Suggestion, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::post("/api/public/suggestions").json(draft)?)
            .await
    }

    /// Calls GET /api/public/suggestions endpoint
    pub async fn list(&self) -> Result<Vec<Suggestion>, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/suggestions"))
            .await
    }

    /// Calls DELETE /api/public/suggestions/{id} endpoint
    pub async fn delete(&self, id: SuggestionId) -> Result<bool, GatewayError> {
        self.gateway
            .execute(ApiRequest::delete("/api/public/suggestions").segment(id))
            .await
    }
}

#[cfg(test)]
mod tests_suggestions {
    use serde_json::json;

    use crate::api::{SuggestionDraft, SuggestionType};
    use crate::client::mock_backend::{CannedResponse, MockBackend};
    use crate::client::CartelClient;

    /// Test scenario:
    /// - suggest a manga
    /// - list the suggestions
    /// - delete it, the backend answers 204
    #[actix_web::test]
    async fn suggestion_lifecycle() {
        let created = r#"{"id": 7, "name": "Berserk", "type": "MANGA", "createdAt": "2024-05-01T10:00:00"}"#;
        let backend = MockBackend::start(
            vec![("/api/public/suggestions", CannedResponse::json(201, created))],
            CannedResponse::no_content(),
        )
        .await;
        let client = CartelClient::new(backend.url()).unwrap();

        let suggestion = client
            .suggestions()
            .create(&SuggestionDraft {
                name: "Berserk".to_string(),
                kind: SuggestionType::Manga,
                description: None,
            })
            .await
            .expect("Failed to create suggestion");
        assert_eq!(suggestion.id, 7);
        assert_eq!(suggestion.kind, SuggestionType::Manga);
        assert_eq!(
            backend.last_request().json(),
            json!({"name": "Berserk", "type": "MANGA"})
        );

        assert!(client.suggestions().delete(7).await.unwrap());
        let request = backend.last_request();
        assert_eq!(request.method, "DELETE");
        assert_eq!(request.path, "/api/public/suggestions/7");
        assert!(request.body.is_empty());
    }
}
