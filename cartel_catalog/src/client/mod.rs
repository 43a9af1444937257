//! Typed client of the Cartel backend.
//!
//! Every service borrows the same [`Gateway`], so a login through
//! [`CartelClient::auth`] authenticates the calls of all the other services.

use std::sync::Arc;

pub use auth::AuthService;
pub use books::BooksService;
pub use copies::CopiesService;
pub use factures::FacturesService;
pub use games::GamesService;
pub use gateway::{query_pairs, ApiRequest, Gateway, GatewayError, GatewayOptions, Reply};
pub use items::ItemsService;
pub use loans::LoansService;
pub use persons::PersonsService;
pub use session::Session;
pub use suggestions::SuggestionsService;

mod auth;
mod books;
mod copies;
mod factures;
mod games;
mod gateway;
mod items;
mod loans;
#[cfg(test)]
pub(crate) mod mock_backend;
mod persons;
mod session;
mod suggestions;

#[derive(Clone)]
pub struct CartelClient {
    gateway: Arc<Gateway>,
}

impl CartelClient {
    /// Anonymous client, single attempt per request and no timeout
    pub fn new(url: &str) -> anyhow::Result<Self> {
        Self::with_session(url, Session::default(), GatewayOptions::default())
    }

    pub fn with_session(
        url: &str,
        session: Session,
        options: GatewayOptions,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            gateway: Arc::new(Gateway::new(url, session, options)?),
        })
    }

    pub fn session(&self) -> &Session {
        self.gateway.session()
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.gateway)
    }

    pub fn books(&self) -> BooksService<'_> {
        BooksService::new(&self.gateway)
    }

    pub fn games(&self) -> GamesService<'_> {
        GamesService::new(&self.gateway)
    }

    pub fn items(&self) -> ItemsService<'_> {
        ItemsService::new(&self.gateway)
    }

    pub fn copies(&self) -> CopiesService<'_> {
        CopiesService::new(&self.gateway)
    }

    pub fn loans(&self) -> LoansService<'_> {
        LoansService::new(&self.gateway)
    }

    pub fn persons(&self) -> PersonsService<'_> {
        PersonsService::new(&self.gateway)
    }

    pub fn factures(&self) -> FacturesService<'_> {
        FacturesService::new(&self.gateway)
    }

    pub fn suggestions(&self) -> SuggestionsService<'_> {
        SuggestionsService::new(&self.gateway)
    }
}
