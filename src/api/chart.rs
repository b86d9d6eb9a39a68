use std::fmt;

use tracing::debug;

use crate::core::AxisOptions;

use super::{
    ChartEvent, InvalidationLevel, chart_model::ChartModel, chart_runtime::ChartRuntimeState,
};

/// Main facade consumed by host applications.
///
/// `Chart` owns its axes and series and keeps the two sides of every
/// series/axis binding consistent. Axis lifecycle lives in
/// `axis_registry`, binding resolution in `axis_binder`.
pub struct Chart {
    pub(super) model: ChartModel,
    pub(super) runtime: ChartRuntimeState,
}

impl Chart {
    /// Creates an empty chart. New charts start fully invalidated.
    #[must_use]
    pub fn new() -> Self {
        Self::with_axis_defaults(AxisOptions::default(), AxisOptions::default())
    }

    /// Creates an empty chart whose new axes are merged over these defaults.
    #[must_use]
    pub fn with_axis_defaults(x_axis: AxisOptions, y_axis: AxisOptions) -> Self {
        Self {
            model: ChartModel::with_axis_defaults(x_axis, y_axis),
            runtime: ChartRuntimeState::with_full_invalidation(),
        }
    }

    /// Tears down every series and axis, keeping listeners and defaults.
    ///
    /// Series are dropped along with their axes, so listeners see one
    /// `AxisRemoved` per axis and a full redraw, never `SeriesUnbound`.
    pub fn clear(&mut self) {
        let series = self.model.series.len();
        self.model.series.clear();

        let removed: Vec<_> = self
            .model
            .axes
            .drain(..)
            .map(|(_, mut axis)| {
                axis.destroy();
                (axis.key(), axis.group(), axis.index())
            })
            .collect();
        self.model.x_axes.clear();
        self.model.y_axes.clear();
        self.model.options.x_axis.clear();
        self.model.options.y_axis.clear();
        debug!(axes = removed.len(), series, "chart cleared");

        for (axis, group, index) in removed {
            self.emit_chart_event(ChartEvent::AxisRemoved { axis, group, index });
        }
        self.mark_dirty_box();
        self.request_redraw(InvalidationLevel::Full);
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chart")
            .field("model", &self.model)
            .field("listeners", &self.runtime.listeners.len())
            .field("pending_invalidation", &self.runtime.pending_invalidation)
            .finish()
    }
}
