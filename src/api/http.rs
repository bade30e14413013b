// src/api/http.rs

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::common::error::AppError;
use crate::session::Session;

// Todo acesso à API passa por aqui: um único reqwest::Client com timeout
// limitado, anexação do bearer token e UM ponto de interceptação de
// respostas. O 401 encerra a sessão aqui dentro, antes de qualquer tela
// ver o erro; nenhuma requisição é repetida automaticamente.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        session: Arc<Session>,
    ) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            session,
        })
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url);
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, AppError> {
        let mut builder = self.request(Method::GET, path);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        self.execute(builder).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.execute(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.execute(self.request(Method::PUT, path).json(body)).await
    }

    /// PATCH sem corpo — as rotas de alternância de flag não recebem payload.
    pub async fn patch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.execute(self.request(Method::PATCH, path)).await
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    // O ponto único de interceptação
    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, AppError> {
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout
            } else {
                AppError::Network(e.to_string())
            }
        })?;

        let response = self.intercept(response).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Network(format!("resposta inválida: {}", e)))
    }

    async fn intercept(&self, response: Response) -> Result<Response, AppError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            // Encerra a sessão exatamente uma vez; chamadas 401 subsequentes
            // encontram a sessão já vazia e `clear` vira no-op.
            if self.session.clear() {
                tracing::warn!("🔒 401 recebido — sessão local encerrada");
            }
            return Err(AppError::Unauthorized);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound);
        }

        if status.is_client_error() {
            let message = Self::server_detail(response).await;
            return Err(AppError::Rejected(message));
        }

        tracing::error!("Erro {} do servidor", status.as_u16());
        Err(AppError::ServerError(status.as_u16()))
    }

    /// Extrai a mensagem de erro do corpo ({"detail": ...} ou {"error": ...}).
    async fn server_detail(response: Response) -> String {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
            for key in ["detail", "error", "message"] {
                if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                    return msg.to_string();
                }
            }
        }
        format!("requisição recusada ({})", status)
    }
}
