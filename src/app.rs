// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::router::Route;
use crate::state::AppState;
use crate::views::render_app;

/// Aplicación principal: estado global + elemento raíz
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear la aplicación. La ruta inicial sale del fragmento de la URL y
    /// pasa por el guard como cualquier navegación.
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        let initial = crate::dom::window()
            .and_then(|win| win.location().hash().ok())
            .and_then(|hash| Route::from_path(&hash))
            .unwrap_or(Route::Home);
        state.navigate(initial);

        // Re-render automático al cambiar el estado. Timeout(0) batchea
        // múltiples notificaciones del mismo tick.
        state.subscribe_to_changes(move || {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    /// Renderizar aplicación completa dentro del elemento raíz
    pub fn render(&mut self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)?;
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
