// ============================================================================
// WORKPLACE VIEW - Landing después del login
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::Route;
use crate::state::AppState;

pub fn render_workplace(state: &AppState) -> Result<Element, JsValue> {
    let snap = state.session.snapshot();

    let workplace = ElementBuilder::new("div")?.class("workplace").build();

    let title = ElementBuilder::new("h1")?.text("Workplace").build();
    let greeting = ElementBuilder::new("p")?
        .text(&format!("Cuenta {} @ {}", snap.fedacct, snap.server))
        .build();
    append_child(&workplace, &title)?;
    append_child(&workplace, &greeting)?;

    // Accesos a las secciones protegidas habilitadas
    let shortcuts = ElementBuilder::new("div")?.class("workplace-shortcuts").build();
    for (route, label) in [
        (Route::Demographics, "📊 Demographics"),
        (Route::Accounts, "👤 Accounts"),
    ] {
        if !state.router.is_enabled(route) {
            continue;
        }
        let card = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("workplace-card")
            .text(label)
            .build();
        {
            let state = state.clone();
            on_click(&card, move |_| {
                state.navigate(route);
            })?;
        }
        append_child(&shortcuts, &card)?;
    }
    append_child(&workplace, &shortcuts)?;

    Ok(workplace)
}
