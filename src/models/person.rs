// ============================================================================
// PERSON MODEL - Documento de la colección `people` del nodo thalamus
// ============================================================================

use serde::{Deserialize, Serialize};

/// Registro demográfico mínimo. El nodo devuelve más campos (roles,
/// password hasheado del lado del servidor, etc.); acá solo interesa lo
/// que consumen las vistas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}
