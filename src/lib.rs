//! chart-axes: axis lifecycle and series-to-axis binding for cartesian charts.
//!
//! A [`Chart`] owns ordered X and Y axis collections plus the series plotted
//! against them. Axes are added and removed while positional indices stay
//! contiguous, and every cartesian series is bound to exactly one axis per
//! group by index, by id, or by default to the first axis.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod telemetry;

pub use api::{Chart, ChartConfig};
pub use error::{ChartError, ChartResult};
