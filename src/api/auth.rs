// src/api/auth.rs

use std::sync::Arc;

use crate::api::ApiClient;
use crate::common::error::AppError;
use crate::models::auth::{LoginPayload, SignupPayload, TokenResponse, User};

// Rotas públicas de autenticação + /auth/me. Fora da família ResourceApi:
// autenticação não é uma coleção.
#[derive(Clone)]
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, payload: &LoginPayload) -> Result<TokenResponse, AppError> {
        self.client.post_json("/auth/login", payload).await
    }

    pub async fn signup(&self, payload: &SignupPayload) -> Result<TokenResponse, AppError> {
        self.client.post_json("/auth/signup", payload).await
    }

    /// Perfil do usuário dono do token atual.
    pub async fn me(&self) -> Result<User, AppError> {
        self.client.get_json("/auth/me", &[]).await
    }
}
