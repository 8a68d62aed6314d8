// ============================================================================
// ACCOUNTS VIEW - Resumen de la cuenta autenticada
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::Route;
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;

pub fn render_accounts(state: &AppState) -> Result<Element, JsValue> {
    let snap = state.session.snapshot();

    let view = ElementBuilder::new("div")?.class("accounts").build();

    let title = ElementBuilder::new("h1")?.text("Accounts").build();
    append_child(&view, &title)?;

    let details = ElementBuilder::new("dl")?.class("account-details").build();
    for (term, value) in [
        ("Federation account", snap.fedacct.as_str()),
        ("Thalamus server", snap.server.as_str()),
        ("Default country", snap.country.as_str()),
    ] {
        let dt = ElementBuilder::new("dt")?.text(term).build();
        let dd = ElementBuilder::new("dd")?.text(value).build();
        append_child(&details, &dt)?;
        append_child(&details, &dd)?;
    }
    append_child(&view, &details)?;

    let logout = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-logout")
        .text("Logout")
        .build();
    {
        let state = state.clone();
        on_click(&logout, move |_| {
            let vm = SessionViewModel::new(state.session.clone());
            vm.logout();
            // Notificar al entry point para el re-render global
            if let Some(win) = web_sys::window() {
                if let Ok(event) = web_sys::Event::new("loggedOut") {
                    let _ = win.dispatch_event(&event);
                }
            }
            state.navigate(Route::Home);
        })?;
    }
    append_child(&view, &logout)?;

    Ok(view)
}
