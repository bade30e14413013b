// src/screens/state.rs

use crate::common::error::AppError;

// Máquina de estados de carregamento de uma tela:
// Loading → Loaded → (Loaded | Failed) a cada load().
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

impl LoadState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }
}

// Estado compartilhado de toda tela: carregamento, o sinal de redirecionar
// para o login e o aviso de falha de ação pontual (o "toast"). Um 401 nunca
// vira erro de tela — a sessão já foi encerrada no interceptador e aqui só
// resta acender `wants_login`.
#[derive(Debug, Default)]
pub struct Frame {
    pub load: LoadState,
    pub wants_login: bool,
    pub alert: Option<String>,
}

impl Frame {
    pub fn begin_load(&mut self) {
        self.load = LoadState::Loading;
    }

    pub fn finish_load(&mut self, result: Result<(), AppError>) {
        match result {
            Ok(()) => self.load = LoadState::Loaded,
            Err(AppError::Unauthorized) => self.wants_login = true,
            Err(e) => self.load = LoadState::Failed(e.to_string()),
        }
    }

    /// Falha de uma ação avulsa (excluir, alternar flag): vira aviso, sem
    /// regredir o estado de carregamento.
    pub fn note_action(&mut self, result: Result<(), AppError>) {
        match result {
            Ok(()) => self.alert = None,
            Err(AppError::Unauthorized) => self.wants_login = true,
            Err(e) => self.alert = Some(e.to_string()),
        }
    }
}

// FSM do diálogo de formulário, independente do estado da tela — a tela
// continua interativa com o diálogo aberto, e falha de submissão mantém o
// diálogo aberto com o erro inline (nunca volta para Loading).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
    Submitting,
    Rejected(String),
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }

    pub fn open(&mut self) {
        *self = DialogState::Open;
    }

    pub fn cancel(&mut self) {
        *self = DialogState::Closed;
    }

    pub fn submitting(&mut self) {
        *self = DialogState::Submitting;
    }

    /// Desfecho da submissão: fecha em sucesso, reabre com o erro em
    /// falha; 401 devolve o controle ao fluxo global de login.
    pub fn settle(&mut self, result: Result<(), AppError>, frame: &mut Frame) {
        match result {
            Ok(()) => *self = DialogState::Closed,
            Err(AppError::Unauthorized) => {
                frame.wants_login = true;
                *self = DialogState::Open;
            }
            Err(e) => *self = DialogState::Rejected(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_state_transitions() {
        let mut frame = Frame::default();
        assert_eq!(frame.load, LoadState::Loading);

        frame.finish_load(Ok(()));
        assert!(frame.load.is_loaded());

        frame.begin_load();
        frame.finish_load(Err(AppError::Timeout));
        assert!(frame.load.is_failed());
    }

    // Cenário: um 401 nunca aparece como erro de tela — só o sinal de login
    #[test]
    fn test_unauthorized_never_becomes_screen_error() {
        let mut frame = Frame::default();
        frame.begin_load();
        frame.finish_load(Err(AppError::Unauthorized));

        assert!(frame.wants_login);
        assert!(!frame.load.is_failed());
        assert!(frame.alert.is_none());
    }

    #[test]
    fn test_dialog_stays_open_on_rejection() {
        let mut frame = Frame::default();
        let mut dialog = DialogState::default();

        dialog.open();
        dialog.submitting();
        dialog.settle(Err(AppError::Rejected("título obrigatório".into())), &mut frame);

        assert!(dialog.is_open());
        assert!(matches!(dialog, DialogState::Rejected(_)));
        // A tela em si não regrediu
        assert!(!frame.load.is_failed());

        dialog.submitting();
        dialog.settle(Ok(()), &mut frame);
        assert_eq!(dialog, DialogState::Closed);
    }
}
