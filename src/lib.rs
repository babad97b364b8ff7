//! duel-charts: side-by-side statistics charts for two compared subjects.
//!
//! Two CSV tables (per-factor totals and per-season assists/goals) are loaded
//! into typed records, turned into deterministic `RenderFrame`s by the chart
//! builders (grouped bars, connected scatter, radar) and replayed through a
//! `Renderer` backend. Hover tooltips and the scatter metric toggle are
//! driven through `api::ChartView` / `api::ScatterView`.

pub mod api;
pub mod charts;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartView, ChartsConfig, ScatterView};
pub use error::{ChartError, ChartResult};
