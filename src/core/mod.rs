pub mod axis;
pub mod series;
pub mod types;

pub use axis::{Axis, AxisOptions};
pub use series::{Series, SeriesOptions};
pub use types::{AxisGroup, AxisKey, AxisSelector, SeriesId};
