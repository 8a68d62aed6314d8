// ============================================================================
// API CLIENT - Comunicación con el nodo thalamus
// ============================================================================
// SOLO comunicación HTTP - Sin estado de aplicación, sin lógica de UI
// ============================================================================

use gloo_net::http::Request;

use crate::models::Person;
use crate::state::SessionState;

/// Cliente HTTP contra el nodo de federación registrado en la sesión
pub struct ApiClient {
    server: String,
    fedacct: String,
    password: String,
}

impl ApiClient {
    /// Capturar endpoint y credenciales del snapshot actual de la sesión
    pub fn from_session(session: &SessionState) -> Self {
        let snap = session.snapshot();
        Self {
            server: snap.server,
            fedacct: snap.fedacct,
            password: snap.password,
        }
    }

    /// Cliente para credenciales todavía no commiteadas (flujo de login)
    pub fn with_credentials(server: &str, fedacct: &str, password: &str) -> Self {
        Self {
            server: server.to_string(),
            fedacct: fedacct.to_string(),
            password: password.to_string(),
        }
    }

    /// Header Authorization: Basic (el nodo valida con bcrypt del lado
    /// del servidor). btoa vive en window, así que esto es wasm-only.
    fn basic_auth_header(&self) -> Result<String, String> {
        let raw = format!("{}:{}", self.fedacct, self.password);
        let window = web_sys::window().ok_or("No window available")?;
        let encoded = window
            .btoa(&raw)
            .map_err(|_| "Error codificando credenciales".to_string())?;
        Ok(format!("Basic {}", encoded))
    }

    /// Verificar credenciales contra el nodo: GET /people/<fedacct>.
    /// 2xx = OK; 401 = credenciales rechazadas. Nunca toca el Session Store.
    pub async fn verify_credentials(&self) -> Result<(), String> {
        let url = format!("{}/people/{}", self.server, self.fedacct);
        log::info!("🔐 [API] Verificando credenciales contra {}", self.server);

        let response = Request::get(&url)
            .header("Authorization", &self.basic_auth_header()?)
            .send()
            .await
            .map_err(|e| format!("Request error: {}", e))?;

        match response.status() {
            status if (200..300).contains(&status) => Ok(()),
            401 | 403 => Err("El nodo rechazó la cuenta o el password".to_string()),
            status => Err(format!("HTTP error: {}", status)),
        }
    }

    /// Traer la colección de personas del nodo (fuente de los agregados
    /// demográficos)
    pub async fn fetch_people(&self) -> Result<Vec<Person>, String> {
        let url = format!("{}/people", self.server);
        log::info!("📊 [API] Obteniendo personas de {}", url);

        let response = Request::get(&url)
            .header("Authorization", &self.basic_auth_header()?)
            .send()
            .await
            .map_err(|e| format!("Request error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        response
            .json::<Vec<Person>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}
