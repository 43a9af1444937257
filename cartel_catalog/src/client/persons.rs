use crate::api::{Page, Person, PersonDraft, PersonId, PersonSearch};
use crate::client::{ApiRequest, Gateway, GatewayError};

pub struct PersonsService<'a> {
    gateway: &'a Gateway,
}

impl<'a> PersonsService<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Calls GET /api/public/loans/persons/search endpoint
    pub async fn search(&self, search: &PersonSearch) -> Result<Page<Person>, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/loans/persons/search").query(search)?)
            .await
    }

    /// Calls POST /api/public/loans/persons/add endpoint
    pub async fn add(&self, person: &PersonDraft) -> Result<Person, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::post("/api/public/loans/persons/add").json(person)?)
            .await
    }

    pub async fn get(&self, id: PersonId) -> Result<Person, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/persons").segment(id))
            .await
    }

    /// Calls PUT /api/public/persons/update/{id} endpoint
    pub async fn update(&self, id: PersonId, person: &PersonDraft) -> Result<Person, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::put("/api/public/persons/update").segment(id).json(person)?)
            .await
    }

    pub async fn delete(&self, id: PersonId) -> Result<bool, GatewayError> {
        self.gateway
            .execute(ApiRequest::delete("/api/public/persons/delete").segment(id))
            .await
    }
}

#[cfg(test)]
mod tests_persons {
    use serde_json::json;

    use crate::api::{PersonDraft, PersonSearch};
    use crate::client::mock_backend::{CannedResponse, MockBackend};
    use crate::client::CartelClient;

    #[actix_web::test]
    async fn search_sends_name_and_page() {
        let backend = MockBackend::start(
            vec![],
            CannedResponse::json(
                200,
                r#"{"content": [{"id": 2, "firstname": "Ada", "surname": "Lovelace", "loanByCartelCount": 3}], "totalElements": 1}"#,
            ),
        )
        .await;
        let client = CartelClient::new(backend.url()).unwrap();

        let page = client
            .persons()
            .search(&PersonSearch::by_name("ada"))
            .await
            .expect("Failed to search persons");
        assert_eq!(page.content[0].loan_by_cartel_count, 3);

        let mut query = backend.last_request().query;
        query.sort();
        assert_eq!(
            query,
            vec![
                ("fullname".to_string(), "ada".to_string()),
                ("pageNumber".to_string(), "0".to_string()),
                ("pageSize".to_string(), "20".to_string()),
            ]
        );
    }

    /// Test scenario:
    /// - add a person
    /// - update the contact
    /// - delete, the backend answers 200 with no body
    #[actix_web::test]
    async fn person_lifecycle() {
        let stored = r#"{"id": 9, "firstname": "Ada", "surname": "Lovelace", "contact": "ada@example.org"}"#;
        let backend = MockBackend::start(
            vec![
                ("/api/public/loans/persons/add", CannedResponse::json(200, stored)),
                ("/api/public/persons/update/9", CannedResponse::json(200, stored)),
            ],
            CannedResponse::json(200, ""),
        )
        .await;
        let client = CartelClient::new(backend.url()).unwrap();

        let mut draft = PersonDraft {
            firstname: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            ..PersonDraft::default()
        };
        let person = client.persons().add(&draft).await.unwrap();
        assert_eq!(person.id, 9);
        assert_eq!(
            backend.last_request().json(),
            json!({"firstname": "Ada", "surname": "Lovelace"})
        );

        draft.contact = Some("ada@example.org".to_string());
        client.persons().update(9, &draft).await.unwrap();
        let request = backend.last_request();
        assert_eq!(request.method, "PUT");
        assert_eq!(request.json()["contact"], json!("ada@example.org"));

        assert!(client.persons().delete(9).await.unwrap());
        assert_eq!(backend.last_request().path, "/api/public/persons/delete/9");
    }

    #[actix_web::test]
    async fn get_reads_loan_counters() {
        let backend = MockBackend::start(
            vec![],
            CannedResponse::json(200, r#"{"id": 4, "firstname": "Alan", "loanToCartelCount": 2}"#),
        )
        .await;
        let client = CartelClient::new(backend.url()).unwrap();

        let person = client.persons().get(4).await.unwrap();
        assert_eq!(person.loan_to_cartel_count, 2);
        assert_eq!(person.loan_by_cartel_count, 0);
        assert_eq!(backend.last_request().path, "/api/public/persons/4");
    }
}
