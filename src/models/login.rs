// ============================================================================
// LOGIN MODEL - Payload de login contra un nodo de federación
// ============================================================================

use serde::{Deserialize, Serialize};

/// Datos que el formulario de login entrega al Session Store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInfo {
    /// URL del nodo thalamus (ej: https://localhost:8443)
    pub server: String,
    /// Cuenta de federación
    pub fedacct: String,
    pub password: String,
}
