// src/services/auth.rs

use std::sync::Arc;

use validator::Validate;

use crate::api::AuthApi;
use crate::common::error::AppError;
use crate::models::auth::{LoginPayload, SignupPayload, User, UserRole};
use crate::session::Session;

// Orquestra autenticação: valida o payload, chama a API e grava a sessão.
// O token é opaco para o cliente — quem valida é o servidor.
#[derive(Clone)]
pub struct AuthService {
    api: AuthApi,
    session: Arc<Session>,
}

impl AuthService {
    pub fn new(api: AuthApi, session: Arc<Session>) -> Self {
        Self { api, session }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let payload = LoginPayload {
            email: email.to_string(),
            password: password.to_string(),
        };
        payload.validate()?;

        let response = self.api.login(&payload).await?;
        self.session
            .store(response.access_token, response.user.clone())?;
        tracing::info!("✅ Login efetuado: {}", response.user.email);
        Ok(response.user)
    }

    pub async fn signup(&self, payload: SignupPayload) -> Result<User, AppError> {
        payload.validate()?;

        let response = self.api.signup(&payload).await?;
        self.session
            .store(response.access_token, response.user.clone())?;
        tracing::info!("✅ Cadastro efetuado: {}", response.user.email);
        Ok(response.user)
    }

    /// Revalida a sessão restaurada do disco contra /auth/me. Um 401 aqui
    /// já derruba a sessão no interceptador.
    pub async fn restore(&self) -> Result<Option<User>, AppError> {
        if !self.session.is_authenticated() {
            return Ok(None);
        }
        let user = self.api.me().await?;
        Ok(Some(user))
    }

    pub fn current_role(&self) -> Option<UserRole> {
        self.session.role()
    }

    pub fn logout(&self) {
        self.session.clear();
    }
}
