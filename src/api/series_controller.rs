use tracing::debug;

use crate::core::{AxisSelector, Series, SeriesId, SeriesOptions};
use crate::error::{ChartError, ChartResult};

use super::{Chart, InvalidationLevel};

impl Chart {
    /// Registers a series and binds it to its axes.
    ///
    /// The series stays registered when binding fails; the returned
    /// [`ChartError::MissingAxis`] carries its id and the series reports
    /// `is_plot_ready() == false` until a later bind succeeds.
    pub fn add_series(&mut self, options: SeriesOptions) -> ChartResult<SeriesId> {
        let series_id = self.model.allocate_series_id();
        debug!(
            series = %series_id,
            cartesian = options.cartesian,
            "series added"
        );
        self.model
            .series
            .insert(series_id, Series::new(series_id, options));

        let bound = self.bind_axes(series_id);
        self.request_redraw(InvalidationLevel::Light);
        bound.map(|()| series_id)
    }

    /// Unbinds and drops a series.
    pub fn remove_series(&mut self, series_id: SeriesId) -> ChartResult<()> {
        self.unbind_axes(series_id)?;
        self.model.series.shift_remove(&series_id);
        debug!(series = %series_id, "series removed");
        self.request_redraw(InvalidationLevel::Light);
        Ok(())
    }

    /// Replaces the axis selectors of a series and binds it again.
    pub fn update_series_axes(
        &mut self,
        series_id: SeriesId,
        x_axis: impl Into<AxisSelector>,
        y_axis: impl Into<AxisSelector>,
    ) -> ChartResult<()> {
        let series = self
            .model
            .series
            .get_mut(&series_id)
            .ok_or(ChartError::UnknownSeries(series_id))?;
        series.set_axis_selectors(x_axis.into(), y_axis.into());

        let bound = self.bind_axes(series_id);
        self.request_redraw(InvalidationLevel::Light);
        bound
    }

    #[must_use]
    pub fn series(&self, series_id: SeriesId) -> Option<&Series> {
        self.model.series.get(&series_id)
    }

    /// Series in insertion order.
    pub fn series_iter(&self) -> impl Iterator<Item = &Series> {
        self.model.series.values()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.model.series.len()
    }

    #[must_use]
    pub fn is_plot_ready(&self, series_id: SeriesId) -> bool {
        self.series(series_id).is_some_and(Series::is_plot_ready)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::Chart;
    use crate::core::{AxisGroup, AxisOptions, AxisSelector, SeriesOptions};
    use crate::error::ChartError;

    #[test]
    fn failed_binding_keeps_series_registered_but_not_plot_ready() {
        let mut chart = Chart::new();
        chart
            .add_axis(AxisOptions::default(), AxisGroup::X)
            .expect("x axis");

        let err = chart
            .add_series(SeriesOptions::default())
            .expect_err("no y axis yet");
        let ChartError::MissingAxis { group, series } = err else {
            panic!("expected missing axis, got {err:?}");
        };
        assert_eq!(group, AxisGroup::Y);
        assert_eq!(chart.series_count(), 1);
        assert!(!chart.is_plot_ready(series));

        chart
            .add_axis(AxisOptions::default(), AxisGroup::Y)
            .expect("y axis");
        chart.bind_axes(series).expect("bind after adding y axis");
        assert!(chart.is_plot_ready(series));
    }

    #[test]
    fn updating_unknown_series_fails() {
        let mut chart = Chart::new();
        let series = chart
            .add_series(SeriesOptions::non_cartesian())
            .expect("pie series");
        chart.remove_series(series).expect("remove");
        let err = chart
            .update_series_axes(series, AxisSelector::Unset, AxisSelector::Unset)
            .expect_err("series is gone");
        assert_eq!(err, ChartError::UnknownSeries(series));
    }
}
