use crate::core::AxisGroup;
use crate::extensions::{ChartEvent, ChartListenerContext};

use super::Chart;

impl Chart {
    pub(super) fn listener_context(&self) -> ChartListenerContext {
        ChartListenerContext {
            x_axis_count: self.model.group(AxisGroup::X).len(),
            y_axis_count: self.model.group(AxisGroup::Y).len(),
            series_count: self.model.series.len(),
            pending_invalidation: self.runtime.pending_invalidation,
        }
    }

    pub(super) fn emit_chart_event(&mut self, event: ChartEvent) {
        if self.runtime.listeners.is_empty() {
            return;
        }
        let context = self.listener_context();
        for listener in &mut self.runtime.listeners {
            listener.on_event(event, context);
        }
    }
}
