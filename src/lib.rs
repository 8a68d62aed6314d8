// ============================================================================
// GNU HEALTH FEDERATION PORTAL - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: lógica de login y agregados demográficos
// - Services: SOLO comunicación con el nodo thalamus
// - State: Session Store + estado global con Rc<RefCell>
// - Router: tabla de rutas + guard de autenticación
// ============================================================================

pub mod app;
pub mod charts;
pub mod config;
pub mod dom;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::App;
use crate::router::Route;

// Instancia global de App (una por página)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Federation Portal - nodo por defecto: {}", config::CONFIG.thalamus_server());

    let mut app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // Listeners globales: se registran UNA sola vez acá.
    if let Some(win) = web_sys::window() {
        // Navegación por fragmento (#/login, #/demographics, ...)
        let on_hashchange = wasm_bindgen::closure::Closure::wrap(Box::new(
            move |_e: web_sys::HashChangeEvent| {
                let route = dom::window()
                    .and_then(|w| w.location().hash().ok())
                    .and_then(|hash| Route::from_path(&hash))
                    .unwrap_or(Route::Home);
                APP.with(|cell| {
                    if let Some(app) = cell.borrow().as_ref() {
                        app.state().navigate(route);
                    }
                });
            },
        )
            as Box<dyn FnMut(web_sys::HashChangeEvent)>);
        win.add_event_listener_with_callback(
            "hashchange",
            on_hashchange.as_ref().unchecked_ref(),
        )?;
        on_hashchange.forget();

        // Re-render en login/logout
        for event_name in ["loggedIn", "loggedOut"] {
            let closure = wasm_bindgen::closure::Closure::wrap(Box::new(
                move |_e: web_sys::Event| {
                    rerender_app();
                },
            ) as Box<dyn FnMut(web_sys::Event)>);
            win.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
    }

    Ok(())
}

/// Re-renderizar la aplicación completa
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ App no está inicializada");
        }
    });
}
