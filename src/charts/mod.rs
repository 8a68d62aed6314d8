pub mod adapter;
pub mod templates;

pub use adapter::{build_chart, ChartError, ChartSpec};
pub use templates::{gender_template, ChartKind, ChartStyle, ChartTemplate};
