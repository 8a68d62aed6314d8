// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::router::{Route, Router};
use crate::state::SessionState;

/// Estado global: sesión + router + estado de UI
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub router: Router,
    pub current_route: Rc<RefCell<Route>>,

    // UI State
    pub login_error: Rc<RefCell<Option<String>>>,
    pub login_loading: Rc<RefCell<bool>>,
    /// About se carga en la primera visita (ver views/about.rs)
    pub about_loaded: Rc<RefCell<bool>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación con los defaults de configuración
    pub fn new() -> Self {
        Self {
            session: SessionState::new(CONFIG.thalamus_server(), &CONFIG.default_country),
            router: Router::from_config(&CONFIG),
            current_route: Rc::new(RefCell::new(Route::Home)),
            login_error: Rc::new(RefCell::new(None)),
            login_loading: Rc::new(RefCell::new(false)),
            about_loaded: Rc::new(RefCell::new(false)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn current_route(&self) -> Route {
        *self.current_route.borrow()
    }

    /// Navegar a una ruta. La petición pasa SIEMPRE por el guard del router;
    /// lo que queda en current_route es la ruta ya resuelta (posiblemente el
    /// redirect a login).
    pub fn navigate(&self, requested: Route) {
        let resolved = self.router.resolve(requested, &self.session);
        *self.current_route.borrow_mut() = resolved;
        self.sync_location_hash(resolved);
        self.notify_subscribers();
    }

    /// Registrar una ruta ya resuelta por el guard (corrección en render,
    /// ej. logout con una vista protegida montada): actualiza current_route
    /// y el fragmento, sin re-notificar a los subscribers.
    pub fn set_resolved_route(&self, route: Route) {
        *self.current_route.borrow_mut() = route;
        self.sync_location_hash(route);
    }

    /// Reflejar la ruta resuelta en el fragmento de la URL
    #[cfg(target_arch = "wasm32")]
    fn sync_location_hash(&self, route: Route) {
        if let Some(win) = web_sys::window() {
            let location = win.location();
            let target = format!("#{}", route.path());
            if location.hash().ok().as_deref() != Some(&target) {
                let _ = location.set_hash(route.path());
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn sync_location_hash(&self, _route: Route) {}

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers de cambios
    pub fn notify_subscribers(&self) {
        for callback in self.change_subscribers.borrow().iter() {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoginInfo;

    fn authenticate(state: &AppState) {
        state.session.set_credentials(LoginInfo {
            server: "https://node.example:8443".to_string(),
            fedacct: "fed123".to_string(),
            password: "pw".to_string(),
        });
    }

    #[test]
    fn navigate_goes_through_the_guard() {
        let state = AppState::new();
        state.navigate(Route::Accounts);
        assert_eq!(state.current_route(), Route::Login);

        authenticate(&state);
        state.navigate(Route::Accounts);
        assert_eq!(state.current_route(), Route::Accounts);
    }

    #[test]
    fn logout_on_mounted_protected_view_is_corrected_at_render() {
        // Logout con una vista protegida montada: el re-resolve del render
        // baja la ruta y la corrección pasa por set_resolved_route (que
        // también sincroniza el fragmento de la URL)
        let state = AppState::new();
        authenticate(&state);
        state.navigate(Route::Accounts);
        assert_eq!(state.current_route(), Route::Accounts);

        state.session.reset_credentials();
        let resolved = state.router.resolve(state.current_route(), &state.session);
        state.set_resolved_route(resolved);
        assert_eq!(state.current_route(), Route::Login);
    }
}
