// ============================================================================
// SESSION VIEWMODEL - Lógica del flujo de login/logout
// ============================================================================
// Valida el formulario, verifica contra el nodo remoto y recién ahí hace el
// commit en el Session Store. Un fallo remoto nunca commitea.
// ============================================================================

use crate::config::CONFIG;
use crate::models::LoginInfo;
use crate::services::ApiClient;
use crate::state::SessionState;

pub struct SessionViewModel {
    session: SessionState,
}

impl SessionViewModel {
    pub fn new(session: SessionState) -> Self {
        Self { session }
    }

    /// Validación de entrada del formulario (InputValidation). Se aplica
    /// antes de tocar la red; con la validación deshabilitada por config
    /// solo se chequea que los campos no estén vacíos.
    pub fn validate_login(login: &LoginInfo) -> Result<(), String> {
        if login.server.trim().is_empty()
            || login.fedacct.trim().is_empty()
            || login.password.is_empty()
        {
            return Err("Complete servidor, cuenta y password".to_string());
        }
        if CONFIG.enable_form_validation && !is_absolute_url(&login.server) {
            return Err(format!("'{}' no es una URL absoluta válida", login.server));
        }
        Ok(())
    }

    /// Login completo: validar → verificar contra el nodo → commit.
    pub async fn login(&self, login: LoginInfo) -> Result<(), String> {
        Self::validate_login(&login)?;

        let api = ApiClient::with_credentials(&login.server, &login.fedacct, &login.password);
        api.verify_credentials().await?;

        log::info!("✅ [SESSION] Autenticado como {} en {}", login.fedacct, login.server);
        self.session.set_credentials(login);
        Ok(())
    }

    /// Logout: limpiar credenciales. El próximo intento de navegar a una
    /// ruta protegida cae en el guard.
    pub fn logout(&self) {
        log::info!("👋 [SESSION] Logout, limpiando credenciales");
        self.session.reset_credentials();
    }
}

/// Chequeo sintáctico de URL absoluta http(s)://host[:puerto][/...].
/// Suficiente para el formulario; la validez real la decide el fetch.
fn is_absolute_url(value: &str) -> bool {
    let rest = if let Some(r) = value.strip_prefix("https://") {
        r
    } else if let Some(r) = value.strip_prefix("http://") {
        r
    } else {
        return false;
    };
    let host = rest.split('/').next().unwrap_or("");
    let host = host.split(':').next().unwrap_or("");
    !host.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(server: &str, fedacct: &str, password: &str) -> LoginInfo {
        LoginInfo {
            server: server.to_string(),
            fedacct: fedacct.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn accepts_well_formed_login() {
        let info = login("https://node.example:8443", "fed123", "pw");
        assert!(SessionViewModel::validate_login(&info).is_ok());
    }

    #[test]
    fn rejects_empty_fields() {
        assert!(SessionViewModel::validate_login(&login("", "fed123", "pw")).is_err());
        assert!(SessionViewModel::validate_login(&login("https://n:1", "", "pw")).is_err());
        assert!(SessionViewModel::validate_login(&login("https://n:1", "fed123", "")).is_err());
    }

    #[test]
    fn rejects_non_absolute_urls() {
        assert!(SessionViewModel::validate_login(&login("localhost:8443", "a", "b")).is_err());
        assert!(SessionViewModel::validate_login(&login("ftp://node", "a", "b")).is_err());
        assert!(SessionViewModel::validate_login(&login("https://", "a", "b")).is_err());
    }

    #[test]
    fn url_check_accepts_paths_and_ports() {
        assert!(is_absolute_url("https://localhost:8443"));
        assert!(is_absolute_url("http://10.0.0.1/api"));
        assert!(!is_absolute_url("https:///nohost"));
    }
}
