// src/session.rs

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::common::error::AppError;
use crate::models::auth::{User, UserRole};

// Conteúdo persistido em disco, sob as chaves fixas "token" e "user"
// (o equivalente durável do armazenamento do navegador).
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionData {
    token: Option<String>,
    user: Option<User>,
}

// Contexto de sessão explícito, compartilhado por injeção com o ApiClient —
// nada de estado ambiente espalhado pelos pontos de chamada. O encerramento
// tem um único método (`clear`), invocado pelo interceptador de 401.
pub struct Session {
    path: Option<PathBuf>,
    data: RwLock<SessionData>,
}

impl Session {
    /// Lê a sessão persistida no início do processo; ausência de arquivo é
    /// apenas "ninguém logado".
    pub fn load(path: PathBuf) -> Self {
        let data = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<SessionData>(&raw) {
                Ok(data) => {
                    if let Some(user) = &data.user {
                        tracing::info!("🔑 Sessão restaurada para {}", user.email);
                    }
                    data
                }
                Err(e) => {
                    tracing::warn!("Arquivo de sessão ilegível, descartando: {}", e);
                    SessionData::default()
                }
            },
            Err(_) => SessionData::default(),
        };

        Self {
            path: Some(path),
            data: RwLock::new(data),
        }
    }

    /// Sessão sem persistência (testes).
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: RwLock::new(SessionData::default()),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.data.read().expect("lock de sessão envenenado").token.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.data.read().expect("lock de sessão envenenado").user.clone()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Porteiro das telas: broker vê imóveis/clientes/negócios, builder vê
    /// empreendimentos.
    pub fn require_role(&self, role: UserRole) -> Result<User, AppError> {
        let user = self.user().ok_or(AppError::Unauthorized)?;
        if user.role != role {
            return Err(AppError::Forbidden);
        }
        Ok(user)
    }

    /// Grava token + usuário e persiste em disco.
    pub fn store(&self, token: String, user: User) -> Result<(), AppError> {
        {
            let mut data = self.data.write().expect("lock de sessão envenenado");
            data.token = Some(token);
            data.user = Some(user);
        }
        self.persist()
    }

    /// Ponto único de encerramento. Retorna `true` apenas quando havia algo
    /// para limpar — é assim que o interceptador garante "exatamente uma vez".
    pub fn clear(&self) -> bool {
        let had_session = {
            let mut data = self.data.write().expect("lock de sessão envenenado");
            let had = data.token.is_some() || data.user.is_some();
            *data = SessionData::default();
            had
        };

        if had_session {
            if let Some(path) = &self.path {
                if let Err(e) = std::fs::remove_file(path) {
                    if e.kind() != std::io::ErrorKind::NotFound {
                        tracing::warn!("Falha ao remover arquivo de sessão: {}", e);
                    }
                }
            }
            tracing::info!("🔒 Sessão encerrada");
        }
        had_session
    }

    fn persist(&self) -> Result<(), AppError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let data = self.data.read().expect("lock de sessão envenenado");
        let raw = serde_json::to_string_pretty(&*data)?;
        std::fs::write(path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn user(role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            email: "rajesh@realestate.in".to_string(),
            full_name: "Rajesh Kumar".to_string(),
            phone: None,
            role,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_clear_reports_first_call_only() {
        let session = Session::in_memory();
        session
            .store("token-abc".to_string(), user(UserRole::Broker))
            .unwrap();

        assert!(session.clear());
        assert!(!session.clear());
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_require_role_gates_screens() {
        let session = Session::in_memory();
        assert!(matches!(
            session.require_role(UserRole::Broker),
            Err(AppError::Unauthorized)
        ));

        session
            .store("token-abc".to_string(), user(UserRole::Builder))
            .unwrap();
        assert!(matches!(
            session.require_role(UserRole::Broker),
            Err(AppError::Forbidden)
        ));
        assert!(session.require_role(UserRole::Builder).is_ok());
    }
}
