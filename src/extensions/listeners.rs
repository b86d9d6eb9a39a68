use serde::{Deserialize, Serialize};

use crate::api::{InvalidationLevel, InvalidationMask};
use crate::core::{AxisGroup, AxisKey, SeriesId};

/// Read-only state snapshot passed to listener hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartListenerContext {
    pub x_axis_count: usize,
    pub y_axis_count: usize,
    pub series_count: usize,
    pub pending_invalidation: InvalidationMask,
}

/// Event stream exposed to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartEvent {
    AxisAdded {
        axis: AxisKey,
        group: AxisGroup,
        index: usize,
    },
    /// `index` is the position the axis held before removal.
    AxisRemoved {
        axis: AxisKey,
        group: AxisGroup,
        index: usize,
    },
    SeriesBound {
        series: SeriesId,
        x_axis: AxisKey,
        y_axis: AxisKey,
    },
    SeriesUnbound {
        series: SeriesId,
    },
    RedrawRequested {
        level: InvalidationLevel,
    },
}

/// Observer hook for redraw schedulers and diagnostics.
///
/// Listeners see events after the chart has applied them and cannot mutate
/// the chart from inside the hook.
pub trait ChartListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ChartEvent, context: ChartListenerContext);
}
