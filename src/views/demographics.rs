// ============================================================================
// DEMOGRAPHICS VIEW - Estadísticas agregadas del nodo de la sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_text_content, ElementBuilder};
use crate::state::AppState;
use crate::utils::chartjs_ffi::render_chart_spec;
use crate::viewmodels::DemographicsViewModel;

const GENDER_CANVAS_ID: &str = "gender-chart";

pub fn render_demographics(state: &AppState) -> Result<Element, JsValue> {
    let snap = state.session.snapshot();

    let view = ElementBuilder::new("div")?.class("demographics").build();

    let title = ElementBuilder::new("h1")?.text("Demographics").build();
    let source = ElementBuilder::new("p")?
        .class("demographics-source")
        .text(&format!("Nodo: {} · País: {}", snap.server, snap.country))
        .build();
    append_child(&view, &title)?;
    append_child(&view, &source)?;

    let status = ElementBuilder::new("p")?
        .attr("id", "demographics-status")?
        .class("demographics-status")
        .text("⏳ Cargando agregados...")
        .build();
    append_child(&view, &status)?;

    let canvas = ElementBuilder::new("canvas")?
        .attr("id", GENDER_CANVAS_ID)?
        .class("gender-chart")
        .build();
    append_child(&view, &canvas)?;

    // Fetch + render del chart. Corre después de que el canvas ya está en el
    // DOM porque spawn_local se ejecuta recién al terminar el render actual.
    {
        let session = state.session.clone();
        spawn_local(async move {
            let vm = DemographicsViewModel::new(session);
            match vm.load_gender_chart().await {
                Ok(spec) => {
                    if let Some(status) = get_element_by_id("demographics-status") {
                        set_text_content(&status, "");
                    }
                    if let Err(e) = render_chart_spec(GENDER_CANVAS_ID, &spec) {
                        log::error!("❌ [DEMOGRAPHICS] Error renderizando chart: {}", e);
                    }
                }
                Err(e) => {
                    log::error!("❌ [DEMOGRAPHICS] Error obteniendo agregados: {}", e);
                    if let Some(status) = get_element_by_id("demographics-status") {
                        set_text_content(&status, &format!("Error: {}", e));
                    }
                }
            }
        });
    }

    Ok(view)
}
