// ============================================================================
// HOME VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};

pub fn render_home() -> Result<Element, JsValue> {
    let home = ElementBuilder::new("div")?.class("home").build();

    let title = ElementBuilder::new("h1")?
        .text("GNU Health Federation Portal")
        .build();
    let subtitle = ElementBuilder::new("p")?
        .text("Acceda con su cuenta de federación para consultar estadísticas de la red")
        .build();

    append_child(&home, &title)?;
    append_child(&home, &subtitle)?;
    Ok(home)
}
