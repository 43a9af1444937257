use serde_json::Value;

use crate::api::{Book, BookSearch, Contributor, Publisher};
use crate::client::{ApiRequest, Gateway, GatewayError};

pub struct BooksService<'a> {
    gateway: &'a Gateway,
}

impl<'a> BooksService<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Calls GET /api/public/books endpoint
    pub async fn list(&self) -> Result<Vec<Book>, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/books"))
            .await
    }

    /// Calls GET /api/public/books/search endpoint, or lists every book when no filter is set
    pub async fn search(&self, search: &BookSearch) -> Result<Vec<Book>, GatewayError> {
        if search.is_empty() {
            return self.list().await;
        }
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/books/search").query(search)?)
            .await
    }

    /// Calls GET /api/public/books/{isbn} endpoint
    pub async fn get(&self, isbn: &str) -> Result<Book, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/books").segment(isbn))
            .await
    }

    pub async fn authors(&self) -> Result<Vec<Contributor>, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/books/authors"))
            .await
    }

    pub async fn illustrators(&self) -> Result<Vec<Contributor>, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/books/illustrators"))
            .await
    }

    /// Genre values are backend defined, kept as raw JSON
    pub async fn genres(&self) -> Result<Vec<Value>, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/books/genres"))
            .await
    }

    pub async fn publishers(&self) -> Result<Vec<Publisher>, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::get("/api/public/books/publishers"))
            .await
    }

    /// Calls POST /api/admin/books endpoint, needs an authenticated session
    pub async fn create(&self, book: &Book) -> Result<Book, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::post("/api/admin/books").json(book)?)
            .await
    }

    /// Calls PUT /api/admin/books/{isbn} endpoint
    pub async fn update(&self, isbn: &str, book: &Book) -> Result<Book, GatewayError> {
        self.gateway
            .fetch_json(ApiRequest::put("/api/admin/books").segment(isbn).json(book)?)
            .await
    }

    /// Calls DELETE /api/admin/books/{isbn} endpoint
    pub async fn delete(&self, isbn: &str) -> Result<bool, GatewayError> {
        self.gateway
            .execute(ApiRequest::delete("/api/admin/books").segment(isbn))
            .await
    }
}
