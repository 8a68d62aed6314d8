// ============================================================================
// CHART TEMPLATES - Plantillas compartidas de gráficos
// ============================================================================
// Las plantillas son compartidas entre renders: el adaptador nunca las muta,
// cada build_chart() devuelve un ChartSpec nuevo.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Familia de gráfico
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
}

/// Estilo de relleno/borde, constante entre instancias de la misma plantilla
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub background_color: Vec<String>,
    pub border_color: Vec<String>,
    pub border_width: u32,
    pub responsive: bool,
}

/// Plantilla: define categorías (el orden manda) y estilo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTemplate {
    pub kind: ChartKind,
    pub label: String,
    pub categories: Vec<String>,
    pub style: ChartStyle,
}

/// Plantilla de distribución de población por género
pub fn gender_template() -> ChartTemplate {
    ChartTemplate {
        kind: ChartKind::Pie,
        label: "Population Gender Distribution".to_string(),
        categories: vec!["Male".to_string(), "Female".to_string()],
        style: ChartStyle {
            background_color: vec!["rgba(54,73,93,.5)".to_string()],
            border_color: vec!["#36495d".to_string()],
            border_width: 3,
            responsive: true,
        },
    }
}
