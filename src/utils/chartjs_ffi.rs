// ============================================================================
// CHART.JS FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::charts::ChartSpec;

#[wasm_bindgen]
extern "C" {
    /// window.renderChart(canvasId, configJson) - crea el chart sobre el canvas
    #[wasm_bindgen(js_name = renderChart)]
    pub fn render_chart(canvas_id: &str, config_json: &str);

    /// window.destroyChart(canvasId) - libera la instancia anterior del canvas
    #[wasm_bindgen(js_name = destroyChart)]
    pub fn destroy_chart(canvas_id: &str);
}

/// Helper: serializar un ChartSpec y pasarlo al lado JS. Chart.js no admite
/// dos instancias sobre el mismo canvas: la anterior se destruye primero.
pub fn render_chart_spec(canvas_id: &str, spec: &ChartSpec) -> Result<(), String> {
    let config = serde_json::to_string(&spec.to_chartjs_value())
        .map_err(|e| format!("Error serializando chart: {}", e))?;
    destroy_chart(canvas_id);
    render_chart(canvas_id, &config);
    Ok(())
}
