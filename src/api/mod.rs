//! Host-facing API: configuration, mounted chart views and file pipelines.

mod config;
mod json_contract;
mod pipeline;
mod view;

pub use config::ChartsConfig;
pub use json_contract::{CHARTS_CONFIG_JSON_SCHEMA_V1, ChartsConfigJsonContractV1};
pub use pipeline::{
    ChartKind, bar_scene_from_file, build_scenes, load_factor_records, load_yearly_records,
    radar_scene_from_file, scatter_scene_from_file, scene_or_placeholder,
};
pub use view::{ChartView, ScatterView};
