// ============================================================================
// APP VIEW - Componente principal: header de navegación + vista de la ruta
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::Route;
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;
use crate::views::{
    render_about, render_accounts, render_demographics, render_home, render_login,
    render_workplace,
};

/// Renderizar la aplicación completa. El guard corre acá de nuevo sobre la
/// ruta actual: ninguna vista protegida se monta sin pasar por resolve().
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let requested = state.current_route();
    let route = state.router.resolve(requested, &state.session);
    if route != requested {
        // La corrección también tiene que reflejarse en el fragmento de la
        // URL, no solo en current_route
        state.set_resolved_route(route);
    }

    let container = ElementBuilder::new("div")?.class("portal").build();

    append_child(&container, &render_nav(state, route)?)?;

    let view = match route {
        Route::Home => render_home()?,
        Route::Login => render_login(state)?,
        Route::Workplace => render_workplace(state)?,
        Route::Demographics => render_demographics(state)?,
        Route::Accounts => render_accounts(state)?,
        Route::About => render_about(state)?,
    };
    append_child(&container, &view)?;

    Ok(container)
}

/// Header con links a las rutas habilitadas y logout si hay sesión
fn render_nav(state: &AppState, active: Route) -> Result<Element, JsValue> {
    let nav = ElementBuilder::new("nav")?.class("portal-nav").build();

    let brand = ElementBuilder::new("span")?
        .class("nav-brand")
        .text("GNU Health Federation Portal")
        .build();
    append_child(&nav, &brand)?;

    for route in Route::ALL {
        if !state.router.is_enabled(route) {
            continue;
        }
        // Login se ofrece solo sin sesión; con sesión está el logout
        if route == Route::Login && state.session.is_authenticated() {
            continue;
        }
        let class = if route == active {
            "nav-link active"
        } else {
            "nav-link"
        };
        let link = ElementBuilder::new("a")?
            .class(class)
            .attr("href", &format!("#{}", route.path()))?
            .text(route.name())
            .build();
        {
            let state = state.clone();
            on_click(&link, move |e: web_sys::MouseEvent| {
                e.prevent_default();
                state.navigate(route);
            })?;
        }
        append_child(&nav, &link)?;
    }

    if state.session.is_authenticated() {
        let logout = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("nav-logout")
            .text("Logout")
            .build();
        {
            let state = state.clone();
            on_click(&logout, move |_| {
                let vm = SessionViewModel::new(state.session.clone());
                vm.logout();
                state.navigate(Route::Home);
            })?;
        }
        append_child(&nav, &logout)?;
    }

    Ok(nav)
}
