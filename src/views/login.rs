// ============================================================================
// LOGIN VIEW - Formulario de login contra un nodo de federación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    append_child, create_element, on_input, on_submit, set_attribute, set_class_name,
    ElementBuilder,
};
use crate::models::LoginInfo;
use crate::router::Route;
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    // Estado local del formulario (vive en los closures). El servidor viene
    // prellenado con la última configuración del Session Store.
    let server = Rc::new(RefCell::new(state.session.server()));
    let fedacct = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let screen = ElementBuilder::new("div")?.class("login-screen").build();

    let header = ElementBuilder::new("div")?.class("login-header").build();
    let title = ElementBuilder::new("h1")?.text("Login").build();
    let subtitle = ElementBuilder::new("p")?
        .text("Ingrese su cuenta de federación y el nodo de destino")
        .build();
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;

    let form = create_element("form")?;
    set_class_name(&form, "login-form");

    let server_group = create_form_group(
        "server",
        "Thalamus server",
        "https://localhost:8443",
        "text",
        server.clone(),
    )?;
    // Prellenar el input del servidor
    if let Some(input) = server_group.query_selector("input").ok().flatten() {
        if let Some(input) = input.dyn_ref::<HtmlInputElement>() {
            input.set_value(&server.borrow());
        }
    }

    let fedacct_group = create_form_group(
        "fedacct",
        "Federation account",
        "Ingrese su cuenta",
        "text",
        fedacct.clone(),
    )?;
    let password_group = create_form_group(
        "password",
        "Password",
        "Ingrese su password",
        "password",
        password.clone(),
    )?;

    // Slot de error inline (InputValidation / RemoteAuthFailure)
    let error_slot = ElementBuilder::new("div")?
        .attr("id", "login-error")?
        .class("login-error")
        .build();
    if let Some(msg) = state.login_error.borrow().as_ref() {
        error_slot.set_text_content(Some(msg));
    }

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-login")
        .text(if *state.login_loading.borrow() {
            "Conectando..."
        } else {
            "Login"
        })
        .build();

    // Submit: validar → verificar contra el nodo → commit → navegar.
    // Un fallo queda en login_error y la sesión sigue sin autenticar.
    {
        let server = server.clone();
        let fedacct = fedacct.clone();
        let password = password.clone();
        let state = state.clone();

        on_submit(&form, move |e: web_sys::Event| {
            e.prevent_default();

            if *state.login_loading.borrow() {
                return;
            }

            let login = LoginInfo {
                server: server.borrow().trim().to_string(),
                fedacct: fedacct.borrow().trim().to_string(),
                password: password.borrow().clone(),
            };

            // Validación de entrada antes de tocar la red
            if let Err(msg) = SessionViewModel::validate_login(&login) {
                *state.login_error.borrow_mut() = Some(msg);
                state.notify_subscribers();
                return;
            }

            *state.login_loading.borrow_mut() = true;
            *state.login_error.borrow_mut() = None;
            state.notify_subscribers();

            let state = state.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new(state.session.clone());
                match vm.login(login).await {
                    Ok(()) => {
                        log::info!("✅ [LOGIN] Sesión autenticada");
                        *state.login_loading.borrow_mut() = false;
                        // Notificar al entry point (listener de 'loggedIn')
                        if let Some(win) = web_sys::window() {
                            if let Ok(event) = web_sys::Event::new("loggedIn") {
                                let _ = win.dispatch_event(&event);
                            }
                        }
                        state.navigate(Route::Workplace);
                    }
                    Err(e) => {
                        log::error!("❌ [LOGIN] Error: {}", e);
                        *state.login_error.borrow_mut() = Some(e);
                        *state.login_loading.borrow_mut() = false;
                        state.notify_subscribers();
                    }
                }
            });
        })?;
    }

    append_child(&form, &server_group)?;
    append_child(&form, &fedacct_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &error_slot)?;
    append_child(&form, &submit_btn)?;

    append_child(&screen, &header)?;
    append_child(&screen, &form)?;

    Ok(screen)
}

/// Helper para crear form group (label + input enlazado al estado local)
fn create_form_group(
    id: &str,
    label_text: &str,
    placeholder: &str,
    input_type: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", input_type)?;
    set_attribute(&input, "id", id)?;
    set_attribute(&input, "name", id)?;
    set_attribute(&input, "placeholder", placeholder)?;
    set_class_name(&input, "form-input");

    {
        let value = value.clone();
        on_input(&input, move |e: web_sys::InputEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                *value.borrow_mut() = target.value();
            }
        })?;
    }

    append_child(&group, &label)?;
    append_child(&group, &input)?;

    Ok(group)
}
