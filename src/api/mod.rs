mod axis_binder;
mod axis_registry;
mod chart;
mod chart_config;
mod chart_model;
mod chart_runtime;
mod invalidation;
mod json_contract;
mod listener_dispatch;
mod listener_registry;
mod series_controller;

pub use chart::Chart;
pub use chart_config::{ChartBootstrap, ChartConfig, ChartOptions};
pub use invalidation::{
    InvalidationLevel, InvalidationMask, InvalidationTopic, InvalidationTopics,
};
pub use json_contract::{CHART_CONFIG_JSON_SCHEMA_V1, ChartConfigJsonContractV1};

pub use crate::extensions::{ChartEvent, ChartListener, ChartListenerContext};
