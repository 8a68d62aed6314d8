// ============================================================================
// ABOUT VIEW - Contenido estático, cargado en la primera visita
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;

pub fn render_about(state: &AppState) -> Result<Element, JsValue> {
    // Equivalente al chunk lazy del portal original: el contenido se arma
    // recién en la primera navegación
    if !*state.about_loaded.borrow() {
        log::info!("📄 [ABOUT] Primera visita, cargando contenido");
        *state.about_loaded.borrow_mut() = true;
    }

    let about = ElementBuilder::new("div")?.class("about").build();
    let title = ElementBuilder::new("h1")?.text("About").build();
    let body = ElementBuilder::new("p")?
        .text(
            "Portal de la federación de salud: cada nodo thalamus autentica \
             cuentas y sirve datos agregados locales a ese nodo.",
        )
        .build();

    append_child(&about, &title)?;
    append_child(&about, &body)?;
    Ok(about)
}
