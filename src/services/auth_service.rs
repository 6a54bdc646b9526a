use crate::dto::auth_dto::{AuthResponse, LoginPayload, RegisterPayload, UpdateProfilePayload};
use crate::error::Result;
use crate::models::user::User;
use crate::transport::Transport;

/// Account and session endpoints. Payloads go out unchanged and responses
/// come back unchanged; storing the returned token in the `SessionStore` is
/// the caller's decision.
#[derive(Clone)]
pub struct AuthService {
    transport: Transport,
}

impl AuthService {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn register(&self, payload: &RegisterPayload) -> Result<AuthResponse> {
        self.transport.post("/users/register", payload).await
    }

    pub async fn login(&self, credentials: &LoginPayload) -> Result<AuthResponse> {
        self.transport.post("/users/login", credentials).await
    }

    pub async fn profile(&self) -> Result<User> {
        self.transport.get("/users/profile").await
    }

    pub async fn update_profile(&self, payload: &UpdateProfilePayload) -> Result<User> {
        self.transport.put("/users/profile", payload).await
    }
}
