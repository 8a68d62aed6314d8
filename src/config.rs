use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    pub thalamus_server_development: String,
    pub thalamus_server_production: String,
    pub environment: String,
    pub default_country: String,
    pub enable_logging: bool,
    pub enable_form_validation: bool,
    /// Rutas habilitadas, separadas por coma (nombres de ruta)
    pub enabled_routes: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            thalamus_server_development: "https://localhost:8443".to_string(),
            thalamus_server_production: "https://federation.gnuhealth.org:8443".to_string(),
            environment: "development".to_string(),
            default_country: "AR".to_string(),
            enable_logging: true,
            enable_form_validation: true,
            enabled_routes: "home,login,workplace,demographics,accounts,about".to_string(),
        }
    }
}

impl PortalConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            thalamus_server_development: option_env!("THALAMUS_SERVER_DEVELOPMENT")
                .unwrap_or("https://localhost:8443").to_string(),
            thalamus_server_production: option_env!("THALAMUS_SERVER_PRODUCTION")
                .unwrap_or("https://federation.gnuhealth.org:8443").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            default_country: option_env!("DEFAULT_COUNTRY")
                .unwrap_or("AR").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            enable_form_validation: option_env!("ENABLE_FORM_VALIDATION")
                .unwrap_or("true").parse().unwrap_or(true),
            enabled_routes: option_env!("ENABLED_ROUTES")
                .unwrap_or("home,login,workplace,demographics,accounts,about").to_string(),
        }
    }

    /// Obtiene la URL del nodo thalamus según el entorno actual
    pub fn thalamus_server(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.thalamus_server_production,
            _ => &self.thalamus_server_development,
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nombres de rutas habilitadas
    pub fn enabled_route_names(&self) -> Vec<&str> {
        self.enabled_routes
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: PortalConfig = PortalConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_server_is_local_node() {
        let config = PortalConfig::default();
        assert_eq!(config.thalamus_server(), "https://localhost:8443");
    }

    #[test]
    fn production_environment_switches_server() {
        let mut config = PortalConfig::default();
        config.environment = "production".to_string();
        assert_eq!(config.thalamus_server(), config.thalamus_server_production);
    }

    #[test]
    fn enabled_route_names_splits_and_trims() {
        let mut config = PortalConfig::default();
        config.enabled_routes = "home, login ,demographics,".to_string();
        assert_eq!(config.enabled_route_names(), vec!["home", "login", "demographics"]);
    }
}
