// Layout support for the PDF exporter: fixed page geometry and
// font-metric-driven text measurement/wrapping. The exporter walks a
// top-down cursor through fixed slots; this module supplies the numbers.

pub mod font_metrics;
pub mod wrap;

// Re-export the public API consumed by the render module.
pub use font_metrics::{default_page_config, helvetica_metrics, FontMetricTable, PageConfig};
pub use wrap::wrap_to_width;
