use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::core::{AxisGroup, AxisKey, AxisSelector, SeriesId};
use crate::error::{ChartError, ChartResult};

use super::chart_model::ChartModel;
use super::{Chart, ChartEvent, InvalidationMask};

/// Finds the axis of `group` that `selector` points at.
///
/// Axes are scanned in index order and the first match wins. Ids are
/// unique per group and each selector variant tests a single condition, so
/// at most one axis can match.
pub(super) fn resolve_axis(
    model: &ChartModel,
    group: AxisGroup,
    selector: &AxisSelector,
) -> Option<AxisKey> {
    model.group(group).iter().copied().find(|key| {
        model
            .axes
            .get(key)
            .is_some_and(|axis| selector.matches(axis.index(), axis.id()))
    })
}

impl Chart {
    /// Resolves the X and Y axis of a series and records the binding on
    /// both sides.
    ///
    /// Non-cartesian series are left alone. Re-binding never duplicates a
    /// registration and moves the series off an axis it no longer matches.
    /// When a group has no matching axis the call fails with
    /// [`ChartError::MissingAxis`]; the series then has no reference for
    /// that group and later groups are not bound.
    pub fn bind_axes(&mut self, series_id: SeriesId) -> ChartResult<()> {
        let series = self
            .model
            .series
            .get(&series_id)
            .ok_or(ChartError::UnknownSeries(series_id))?;
        if !series.is_cartesian() {
            trace!(series = %series_id, "skipping axis binding for non-cartesian series");
            return Ok(());
        }
        let options = series.options().clone();

        let x_axis = self.bind_group(series_id, AxisGroup::X, &options.x_axis)?;
        let y_axis = self.bind_group(series_id, AxisGroup::Y, &options.y_axis)?;

        self.emit_chart_event(ChartEvent::SeriesBound {
            series: series_id,
            x_axis,
            y_axis,
        });
        Ok(())
    }

    /// Detaches a series from every axis it is bound to.
    pub fn unbind_axes(&mut self, series_id: SeriesId) -> ChartResult<()> {
        let series = self
            .model
            .series
            .get_mut(&series_id)
            .ok_or(ChartError::UnknownSeries(series_id))?;
        let bound: SmallVec<[AxisKey; 2]> = AxisGroup::ALL
            .into_iter()
            .filter_map(|group| series.axis(group))
            .collect();
        if bound.is_empty() {
            return Ok(());
        }
        for group in AxisGroup::ALL {
            series.set_axis(group, None);
        }
        for key in &bound {
            if let Some(axis) = self.model.axes.get_mut(key) {
                axis.release_series(series_id);
                axis.mark_dirty();
            }
        }
        trace!(series = %series_id, axes = bound.len(), "series unbound");

        self.invalidate(InvalidationMask::axis_binding());
        self.emit_chart_event(ChartEvent::SeriesUnbound { series: series_id });
        Ok(())
    }

    /// Re-resolves every series in insertion order, stopping at the first
    /// failure.
    pub fn rebind_all_series(&mut self) -> ChartResult<()> {
        let series_ids: Vec<SeriesId> = self.model.series.keys().copied().collect();
        for series_id in series_ids {
            self.bind_axes(series_id)?;
        }
        Ok(())
    }

    fn bind_group(
        &mut self,
        series_id: SeriesId,
        group: AxisGroup,
        selector: &AxisSelector,
    ) -> ChartResult<AxisKey> {
        let matched = resolve_axis(&self.model, group, selector);
        let previous = self
            .model
            .series
            .get(&series_id)
            .and_then(|series| series.axis(group));

        if let Some(stale) = previous.filter(|previous| Some(*previous) != matched) {
            if let Some(axis) = self.model.axes.get_mut(&stale) {
                axis.release_series(series_id);
                axis.mark_dirty();
            }
        }

        let series = self
            .model
            .series
            .get_mut(&series_id)
            .ok_or(ChartError::UnknownSeries(series_id))?;
        series.set_axis(group, matched);

        let Some(key) = matched else {
            if previous.is_some() {
                self.invalidate(InvalidationMask::axis_binding());
            }
            let err = ChartError::MissingAxis {
                group,
                series: series_id,
            };
            warn!(series = %series_id, ?selector, error = %err, "axis binding failed");
            return Err(err);
        };

        if let Some(axis) = self.model.axes.get_mut(&key) {
            axis.register_series(series_id);
            axis.mark_dirty();
        }
        trace!(series = %series_id, %group, axis = %key, "series bound to axis");
        self.invalidate(InvalidationMask::axis_binding());
        Ok(key)
    }
}
