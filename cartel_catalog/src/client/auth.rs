use crate::api::{LoginRequest, LoginResponse};
use crate::client::{ApiRequest, Gateway, GatewayError};

pub struct AuthService<'a> {
    gateway: &'a Gateway,
}

impl<'a> AuthService<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Calls POST /api/auth/login endpoint, the returned token authenticates every later request
    pub async fn login(&self, password: &str) -> Result<(), GatewayError> {
        let response: LoginResponse = self
            .gateway
            .fetch_json(ApiRequest::post("/api/auth/login").json(&LoginRequest {
                password: password.to_string(),
            })?)
            .await?;
        self.gateway.session().set_token(response.token);
        tracing::info!("Logged in to {}", self.gateway.base_url());
        Ok(())
    }

    /// Forgets the token locally, the backend keeps no session to close
    pub fn logout(&self) {
        self.gateway.session().clear();
        tracing::info!("Logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.gateway.session().is_authenticated()
    }
}
