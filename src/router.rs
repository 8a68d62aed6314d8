// ============================================================================
// ROUTER - Tabla de rutas y guard de acceso
// ============================================================================
// El guard corre en resolve(), ANTES de montar cualquier vista: una vista
// protegida nueva queda cubierta automáticamente, sin checks por-vista.
// ============================================================================

use std::collections::HashSet;

use crate::config::PortalConfig;
use crate::state::SessionState;

/// Rutas nombradas de la aplicación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Workplace,
    Demographics,
    Accounts,
    About,
}

/// Clasificación de acceso de una ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Protected,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Login,
        Route::Workplace,
        Route::Demographics,
        Route::Accounts,
        Route::About,
    ];

    /// Nombre de ruta (igual a la tabla original del portal)
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Login => "login",
            Route::Workplace => "workplace",
            Route::Demographics => "demographics",
            Route::Accounts => "accounts",
            Route::About => "about",
        }
    }

    /// Path para navegación por fragmento (#/login, #/workplace, ...)
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Workplace => "/workplace",
            Route::Demographics => "/demographics",
            Route::Accounts => "/accounts",
            Route::About => "/about",
        }
    }

    pub fn from_name(name: &str) -> Option<Route> {
        Route::ALL.iter().copied().find(|r| r.name() == name)
    }

    /// Parsear un fragmento de URL ("#/login", "/login", "login")
    pub fn from_path(path: &str) -> Option<Route> {
        let p = path.trim_start_matches('#');
        if p == "/" || p.is_empty() {
            return Some(Route::Home);
        }
        let p = p.trim_matches('/');
        Route::from_name(p)
    }

    /// Workplace, demographics y accounts requieren sesión autenticada
    pub fn access(&self) -> RouteAccess {
        match self {
            Route::Home | Route::Login | Route::About => RouteAccess::Public,
            Route::Workplace | Route::Demographics | Route::Accounts => RouteAccess::Protected,
        }
    }
}

/// Router con guard de autenticación y set de rutas habilitadas
#[derive(Clone)]
pub struct Router {
    enabled: HashSet<Route>,
}

impl Router {
    pub fn new(enabled: HashSet<Route>) -> Self {
        Self { enabled }
    }

    /// Construir desde la lista de rutas habilitadas de la configuración.
    /// Nombres desconocidos se ignoran con un warning.
    pub fn from_config(config: &PortalConfig) -> Self {
        let mut enabled = HashSet::new();
        for name in config.enabled_route_names() {
            match Route::from_name(name) {
                Some(route) => {
                    enabled.insert(route);
                }
                None => {
                    log::warn!("⚠️ [ROUTER] Ruta desconocida en ENABLED_ROUTES: '{}'", name);
                }
            }
        }
        // Home y login siempre tienen que existir para que el guard
        // tenga a dónde redirigir
        enabled.insert(Route::Home);
        enabled.insert(Route::Login);
        Self::new(enabled)
    }

    pub fn is_enabled(&self, route: Route) -> bool {
        self.enabled.contains(&route)
    }

    /// Resolver una navegación. Una ruta protegida sin sesión autenticada
    /// redirige a login (control de flujo, no error); una ruta deshabilitada
    /// cae a home. El resto renderiza normalmente.
    pub fn resolve(&self, requested: Route, session: &SessionState) -> Route {
        if !self.is_enabled(requested) {
            log::warn!(
                "⚠️ [ROUTER] Ruta '{}' deshabilitada, redirigiendo a home",
                requested.name()
            );
            return Route::Home;
        }
        match requested.access() {
            RouteAccess::Public => requested,
            RouteAccess::Protected => {
                if session.is_authenticated() {
                    requested
                } else {
                    log::info!(
                        "🔒 [ROUTER] '{}' requiere autenticación, redirigiendo a login",
                        requested.name()
                    );
                    Route::Login
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoginInfo;

    fn full_router() -> Router {
        Router::new(Route::ALL.iter().copied().collect())
    }

    fn session() -> SessionState {
        SessionState::new("https://localhost:8443", "AR")
    }

    #[test]
    fn protected_routes_redirect_to_login_when_unauthenticated() {
        let router = full_router();
        let session = session();
        for route in [Route::Workplace, Route::Demographics, Route::Accounts] {
            assert_eq!(router.resolve(route, &session), Route::Login);
        }
    }

    #[test]
    fn public_routes_render_regardless_of_auth() {
        let router = full_router();
        let session = session();
        for route in [Route::Home, Route::Login, Route::About] {
            assert_eq!(router.resolve(route, &session), route);
        }
    }

    #[test]
    fn authenticated_session_reaches_protected_routes() {
        let router = full_router();
        let session = session();
        session.set_credentials(LoginInfo {
            server: "https://node.example:8443".to_string(),
            fedacct: "fed123".to_string(),
            password: "pw".to_string(),
        });
        for route in Route::ALL {
            assert_eq!(router.resolve(route, &session), route);
        }
    }

    #[test]
    fn logout_downgrades_next_navigation() {
        let router = full_router();
        let session = session();
        session.set_credentials(LoginInfo {
            server: "https://node.example:8443".to_string(),
            fedacct: "fed123".to_string(),
            password: "pw".to_string(),
        });
        assert_eq!(router.resolve(Route::Accounts, &session), Route::Accounts);
        session.reset_credentials();
        assert_eq!(router.resolve(Route::Accounts, &session), Route::Login);
    }

    #[test]
    fn disabled_route_falls_back_to_home() {
        let enabled = [Route::Home, Route::Login].into_iter().collect();
        let router = Router::new(enabled);
        let session = session();
        assert_eq!(router.resolve(Route::About, &session), Route::Home);
    }

    #[test]
    fn from_config_ignores_unknown_names_and_keeps_home_login() {
        let mut config = PortalConfig::default();
        config.enabled_routes = "demographics,nosuchroute".to_string();
        let router = Router::from_config(&config);
        assert!(router.is_enabled(Route::Demographics));
        assert!(router.is_enabled(Route::Home));
        assert!(router.is_enabled(Route::Login));
        assert!(!router.is_enabled(Route::Workplace));
    }

    #[test]
    fn path_round_trips() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("#/demographics"), Some(Route::Demographics));
        assert_eq!(Route::from_path("#/"), Some(Route::Home));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("#/nope"), None);
    }

    #[test]
    fn end_to_end_login_then_demographics() {
        // Sin autenticar: demographics redirige a login. Tras el commit,
        // demographics resuelve y la vista lee el endpoint del store.
        let router = full_router();
        let session = session();
        assert_eq!(router.resolve(Route::Demographics, &session), Route::Login);

        session.set_credentials(LoginInfo {
            server: "https://node.example:8443".to_string(),
            fedacct: "fed123".to_string(),
            password: "pw".to_string(),
        });
        assert_eq!(router.resolve(Route::Demographics, &session), Route::Demographics);
        assert_eq!(session.server(), "https://node.example:8443");
    }
}
