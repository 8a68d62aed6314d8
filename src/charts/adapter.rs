// ============================================================================
// CHART ADAPTER - De conteos agregados a especificación renderizable
// ============================================================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::charts::templates::{ChartKind, ChartStyle, ChartTemplate};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// El data source mandó una categoría que la plantilla no define
    /// (query remota mal configurada)
    #[error("categoría '{0}' no existe en la plantilla")]
    InvalidCategory(String),
}

/// Especificación lista para renderizar; instancia fresca por cada build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub label: String,
    pub categories: Vec<String>,
    pub values: Vec<u64>,
    pub style: ChartStyle,
}

impl ChartSpec {
    /// Serializar a la forma de configuración de Chart.js que consume el
    /// lado JS (type / data.labels / data.datasets / options.responsive)
    pub fn to_chartjs_value(&self) -> serde_json::Value {
        serde_json::json!({
            "type": self.kind,
            "data": {
                "labels": self.categories,
                "datasets": [{
                    "data": self.values,
                    "label": self.label,
                    "backgroundColor": self.style.background_color,
                    "borderColor": self.style.border_color,
                    "borderWidth": self.style.border_width,
                }]
            },
            "options": {
                "responsive": self.style.responsive,
            }
        })
    }
}

/// Poblar una plantilla con conteos por categoría.
///
/// - `values` sale en el orden de `template.categories` (posicional)
/// - una categoría de la plantilla sin conteo queda en 0
/// - una key de `counts` fuera de la plantilla es `InvalidCategory`
/// - la plantilla no se muta; el resultado es una instancia nueva
pub fn build_chart(
    template: &ChartTemplate,
    counts: &HashMap<String, u64>,
) -> Result<ChartSpec, ChartError> {
    for key in counts.keys() {
        if !template.categories.iter().any(|c| c == key) {
            return Err(ChartError::InvalidCategory(key.clone()));
        }
    }

    let values = template
        .categories
        .iter()
        .map(|category| counts.get(category).copied().unwrap_or(0))
        .collect();

    Ok(ChartSpec {
        kind: template.kind,
        label: template.label.clone(),
        categories: template.categories.clone(),
        values,
        style: template.style.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::templates::gender_template;

    fn counts(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn values_follow_template_order_not_input_order() {
        let template = gender_template();
        let spec = build_chart(&template, &counts(&[("Female", 7), ("Male", 3)])).unwrap();
        assert_eq!(spec.values, vec![3, 7]);
        assert_eq!(spec.categories, vec!["Male", "Female"]);
    }

    #[test]
    fn missing_category_defaults_to_zero() {
        let template = gender_template();
        let spec = build_chart(&template, &counts(&[("Male", 5)])).unwrap();
        assert_eq!(spec.values, vec![5, 0]);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let template = gender_template();
        let err = build_chart(&template, &counts(&[("Other", 1)])).unwrap_err();
        assert_eq!(err, ChartError::InvalidCategory("Other".to_string()));
    }

    #[test]
    fn template_is_never_mutated_across_builds() {
        let template = gender_template();
        let before = template.clone();

        let first = build_chart(&template, &counts(&[("Male", 1), ("Female", 2)])).unwrap();
        let second = build_chart(&template, &counts(&[("Male", 10)])).unwrap();

        assert_eq!(first.values, vec![1, 2]);
        assert_eq!(second.values, vec![10, 0]);
        assert_eq!(template, before);
    }

    #[test]
    fn chartjs_value_matches_original_shape() {
        let template = gender_template();
        let spec = build_chart(&template, &counts(&[("Male", 3), ("Female", 7)])).unwrap();
        let value = spec.to_chartjs_value();
        assert_eq!(value["type"], "pie");
        assert_eq!(value["data"]["labels"][0], "Male");
        assert_eq!(value["data"]["datasets"][0]["data"][1], 7);
        assert_eq!(value["data"]["datasets"][0]["borderWidth"], 3);
        assert_eq!(value["options"]["responsive"], true);
    }
}
