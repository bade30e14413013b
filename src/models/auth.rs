// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

// Papel do usuário: define quais telas ficam acessíveis
// (broker: imóveis/clientes/negócios; builder: empreendimentos).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Broker,
    Builder,
}

// Representa o usuário autenticado, como a API devolve em /auth/me
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

// Dados para login
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,
}

// Dados para cadastro de um novo usuário
#[derive(Debug, Clone, Serialize, Validate)]
#[validate(schema(function = "passwords_match"))]
pub struct SignupPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,
    pub confirm_password: String,
    #[validate(length(min = 1, message = "required"))]
    pub full_name: String,
    pub phone: Option<String>,
    pub role: UserRole,
}

fn passwords_match(payload: &SignupPayload) -> Result<(), ValidationError> {
    if payload.password != payload.confirm_password {
        let mut err = ValidationError::new("password_mismatch");
        err.message = Some("As senhas não conferem.".into());
        return Err(err);
    }
    Ok(())
}

// Resposta de autenticação: token opaco + perfil do usuário
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignupPayload {
        SignupPayload {
            email: "maria@email.com".to_string(),
            password: "segredo1".to_string(),
            confirm_password: "segredo1".to_string(),
            full_name: "Maria da Silva".to_string(),
            phone: None,
            role: UserRole::Broker,
        }
    }

    #[test]
    fn test_signup_valid() {
        assert!(signup().validate().is_ok());
    }

    #[test]
    fn test_signup_password_mismatch() {
        let mut payload = signup();
        payload.confirm_password = "outra-coisa".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&UserRole::Broker).unwrap(), "\"broker\"");
        assert_eq!(serde_json::to_string(&UserRole::Builder).unwrap(), "\"builder\"");
    }
}
