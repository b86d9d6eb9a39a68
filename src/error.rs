use thiserror::Error;

use crate::core::{AxisGroup, AxisKey, SeriesId};

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("cannot remove {group} axis {index}: {series_count} series still connected")]
    AxisInUse {
        group: AxisGroup,
        index: usize,
        series_count: usize,
    },

    #[error("series {series} has no matching {group} axis")]
    MissingAxis { group: AxisGroup, series: SeriesId },

    #[error("unknown axis: {0}")]
    UnknownAxis(AxisKey),

    #[error("unknown series: {0}")]
    UnknownSeries(SeriesId),

    #[error("{group} axis id `{id}` is already in use")]
    DuplicateAxisId { group: AxisGroup, id: String },

    #[error("invalid axis options: {0}")]
    InvalidAxisOptions(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
