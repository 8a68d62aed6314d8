// ============================================================================
// SESSION STATE - Credenciales de federación y estado de autenticación
// ============================================================================
// Única fuente de verdad de la sesión. Toda mutación pasa por
// set_credentials() / reset_credentials(); ningún otro código escribe
// `authenticated`.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::login::LoginInfo;

/// Estado de sesión (una instancia por página, sin persistencia)
#[derive(Clone)]
pub struct SessionState {
    /// Nodo thalamus contra el que actúa el usuario
    server: Rc<RefCell<String>>,
    /// Cuenta de federación (vacía sin autenticar)
    fedacct: Rc<RefCell<String>>,
    /// Password (vacío sin autenticar, nunca se persiste)
    password: Rc<RefCell<String>>,
    authenticated: Rc<RefCell<bool>>,
    /// País por defecto para datos regionales; independiente del login
    country: Rc<RefCell<String>>,
}

/// Copia inmutable del estado para consumidores (views, servicios)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub server: String,
    pub fedacct: String,
    pub password: String,
    pub authenticated: bool,
    pub country: String,
}

impl SessionState {
    /// Crear estado inicial con los defaults de configuración
    pub fn new(default_server: &str, default_country: &str) -> Self {
        Self {
            server: Rc::new(RefCell::new(default_server.to_string())),
            fedacct: Rc::new(RefCell::new(String::new())),
            password: Rc::new(RefCell::new(String::new())),
            authenticated: Rc::new(RefCell::new(false)),
            country: Rc::new(RefCell::new(default_country.to_string())),
        }
    }

    /// Commit de login: reemplaza servidor y credenciales y marca la sesión
    /// como autenticada. El caller (login view) valida ANTES de llamar; un
    /// fallo de autenticación remota nunca debe llegar hasta acá.
    pub fn set_credentials(&self, login: LoginInfo) {
        *self.server.borrow_mut() = login.server;
        *self.fedacct.borrow_mut() = login.fedacct;
        *self.password.borrow_mut() = login.password;
        *self.authenticated.borrow_mut() = true;
    }

    /// Logout: limpia credenciales y baja `authenticated`. El servidor y el
    /// país quedan como última configuración usada. Idempotente.
    pub fn reset_credentials(&self) {
        self.fedacct.borrow_mut().clear();
        self.password.borrow_mut().clear();
        *self.authenticated.borrow_mut() = false;
    }

    pub fn is_authenticated(&self) -> bool {
        *self.authenticated.borrow()
    }

    pub fn server(&self) -> String {
        self.server.borrow().clone()
    }

    pub fn fedacct(&self) -> String {
        self.fedacct.borrow().clone()
    }

    pub fn country(&self) -> String {
        self.country.borrow().clone()
    }

    /// Snapshot inmutable del estado actual
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            server: self.server.borrow().clone(),
            fedacct: self.fedacct.borrow().clone(),
            password: self.password.borrow().clone(),
            authenticated: *self.authenticated.borrow(),
            country: self.country.borrow().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login() -> LoginInfo {
        LoginInfo {
            server: "https://node.example:8443".to_string(),
            fedacct: "fed123".to_string(),
            password: "pw".to_string(),
        }
    }

    #[test]
    fn starts_unauthenticated_with_config_defaults() {
        let state = SessionState::new("https://localhost:8443", "AR");
        let snap = state.snapshot();
        assert!(!snap.authenticated);
        assert_eq!(snap.server, "https://localhost:8443");
        assert_eq!(snap.fedacct, "");
        assert_eq!(snap.password, "");
        assert_eq!(snap.country, "AR");
    }

    #[test]
    fn set_credentials_replaces_server_and_authenticates() {
        let state = SessionState::new("https://localhost:8443", "AR");
        state.set_credentials(login());
        let snap = state.snapshot();
        assert!(snap.authenticated);
        assert_eq!(snap.server, "https://node.example:8443");
        assert_eq!(snap.fedacct, "fed123");
        assert_eq!(snap.password, "pw");
    }

    #[test]
    fn reset_keeps_server_and_country() {
        let state = SessionState::new("https://localhost:8443", "AR");
        state.set_credentials(login());
        state.reset_credentials();
        let snap = state.snapshot();
        assert!(!snap.authenticated);
        assert_eq!(snap.fedacct, "");
        assert_eq!(snap.password, "");
        // Configuración, no credenciales: sobreviven al logout
        assert_eq!(snap.server, "https://node.example:8443");
        assert_eq!(snap.country, "AR");
    }

    #[test]
    fn reset_is_idempotent() {
        let state = SessionState::new("https://localhost:8443", "AR");
        state.set_credentials(login());
        state.reset_credentials();
        let first = state.snapshot();
        state.reset_credentials();
        assert_eq!(first, state.snapshot());
    }

    #[test]
    fn invariant_holds_over_commit_clear_sequences() {
        // authenticated == true <=> fedacct y password no vacíos
        let state = SessionState::new("https://localhost:8443", "AR");
        let check = |s: &SessionState| {
            let snap = s.snapshot();
            assert_eq!(
                snap.authenticated,
                !snap.fedacct.is_empty() && !snap.password.is_empty()
            );
        };
        check(&state);
        state.set_credentials(login());
        check(&state);
        state.set_credentials(login());
        check(&state);
        state.reset_credentials();
        check(&state);
        state.reset_credentials();
        check(&state);
        state.set_credentials(login());
        check(&state);
    }
}
