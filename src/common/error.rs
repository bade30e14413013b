// src/common/error.rs

use thiserror::Error;
use uuid::Uuid;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// A taxonomia cobre todo o caminho cliente → API: validação local,
// rejeição do servidor, autenticação, rede e erros de lógica local.
#[derive(Debug, Error)]
pub enum AppError {
    // Validação local (formulários), antes de qualquer requisição
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // 4xx com mensagem do servidor (exibida junto ao formulário)
    #[error("Requisição rejeitada: {0}")]
    Rejected(String),

    // 401 — tratado no ponto único de interceptação (a sessão já foi
    // encerrada quando este erro chega a qualquer tela)
    #[error("Sessão expirada ou credenciais inválidas")]
    Unauthorized,

    // Tela exige um papel (broker/builder) que o usuário atual não tem
    #[error("Acesso negado para o papel atual")]
    Forbidden,

    // Entidade referenciada sumiu no servidor (estado local defasado)
    #[error("Registro não encontrado")]
    NotFound,

    // 5xx — mensagem genérica, sem expor detalhes internos
    #[error("Erro interno do servidor ({0})")]
    ServerError(u16),

    // A requisição nem chegou ao servidor
    #[error("Falha de rede: {0}")]
    Network(String),

    #[error("Tempo limite da requisição excedido")]
    Timeout,

    // Valor monetário que não segue o formato ₹ / Lakh / Cr
    #[error("Valor monetário inválido: '{0}'")]
    MoneyParse(String),

    // applyUpdate sobre um id ausente da coleção local: erro de lógica,
    // nunca ignorado em silêncio
    #[error("Entidade {0} ausente da coleção local")]
    MissingLocal(Uuid),

    #[error("Erro de E/S na sessão persistida")]
    SessionIo(#[from] std::io::Error),

    #[error("Arquivo de sessão corrompido")]
    SessionFormat(#[from] serde_json::Error),

    #[error("Erro ao gerar CSV")]
    CsvError(#[from] csv::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Falhas que a tela trata como "recarregue a lista" em vez de erro de formulário.
    pub fn is_stale_state(&self) -> bool {
        matches!(self, AppError::NotFound | AppError::MissingLocal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_state_classification() {
        assert!(AppError::NotFound.is_stale_state());
        assert!(AppError::MissingLocal(Uuid::new_v4()).is_stale_state());
        assert!(!AppError::Timeout.is_stale_state());
        assert!(!AppError::Unauthorized.is_stale_state());
    }
}
