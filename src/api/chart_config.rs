use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisGroup, AxisOptions, SeriesOptions};
use crate::error::{ChartError, ChartResult};

use super::Chart;

/// Persisted axis options, one entry per live axis in index order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(default)]
    pub x_axis: Vec<AxisOptions>,
    #[serde(default)]
    pub y_axis: Vec<AxisOptions>,
}

impl ChartOptions {
    #[must_use]
    pub fn group(&self, group: AxisGroup) -> &[AxisOptions] {
        match group {
            AxisGroup::X => &self.x_axis,
            AxisGroup::Y => &self.y_axis,
        }
    }

    pub(crate) fn group_mut(&mut self, group: AxisGroup) -> &mut Vec<AxisOptions> {
        match group {
            AxisGroup::X => &mut self.x_axis,
            AxisGroup::Y => &mut self.y_axis,
        }
    }
}

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can persist/load a chart layout
/// without inventing their own format.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// Merged under every X axis the chart creates.
    #[serde(default)]
    pub x_axis_defaults: AxisOptions,
    #[serde(default)]
    pub y_axis_defaults: AxisOptions,
    #[serde(default)]
    pub x_axis: Vec<AxisOptions>,
    #[serde(default)]
    pub y_axis: Vec<AxisOptions>,
    #[serde(default)]
    pub series: Vec<SeriesOptions>,
}

impl ChartConfig {
    /// Config with one default axis in each group and no series.
    #[must_use]
    pub fn cartesian() -> Self {
        Self {
            x_axis: vec![AxisOptions::default()],
            y_axis: vec![AxisOptions::default()],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_x_axis(mut self, options: AxisOptions) -> Self {
        self.x_axis.push(options);
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, options: AxisOptions) -> Self {
        self.y_axis.push(options);
        self
    }

    #[must_use]
    pub fn with_series(mut self, options: SeriesOptions) -> Self {
        self.series.push(options);
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}

/// Chart rebuilt from a [`ChartConfig`], plus the series that came up
/// without a usable axis.
///
/// Series whose binding failed stay registered, the same way
/// [`Chart::add_series`] keeps them, so a snapshot of a chart that holds
/// unbound series still loads.
#[derive(Debug)]
pub struct ChartBootstrap {
    pub chart: Chart,
    pub binding_failures: Vec<ChartError>,
}

impl ChartBootstrap {
    #[must_use]
    pub fn is_fully_bound(&self) -> bool {
        self.binding_failures.is_empty()
    }

    /// Returns the chart only when every cartesian series got both axes.
    pub fn into_plot_ready(self) -> ChartResult<Chart> {
        match self.binding_failures.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.chart),
        }
    }
}

impl Chart {
    /// Builds a chart by adding the configured axes, then adding and
    /// binding the configured series.
    ///
    /// Invalid axis options abort construction. Binding failures do not:
    /// they are collected in [`ChartBootstrap::binding_failures`].
    pub fn from_config(config: ChartConfig) -> ChartResult<ChartBootstrap> {
        let ChartConfig {
            x_axis_defaults,
            y_axis_defaults,
            x_axis,
            y_axis,
            series,
        } = config;

        let mut chart = Self::with_axis_defaults(x_axis_defaults, y_axis_defaults);
        for (group, axes) in [(AxisGroup::X, x_axis), (AxisGroup::Y, y_axis)] {
            for options in axes {
                chart.add_axis(options, group)?;
            }
        }

        let mut binding_failures = Vec::new();
        for options in series {
            match chart.add_series(options) {
                Ok(_) => {}
                Err(err @ ChartError::MissingAxis { .. }) => binding_failures.push(err),
                Err(err) => return Err(err),
            }
        }
        debug!(
            x_axes = chart.axis_count(AxisGroup::X),
            y_axes = chart.axis_count(AxisGroup::Y),
            series = chart.series_count(),
            unbound = binding_failures.len(),
            "chart built from config"
        );
        Ok(ChartBootstrap {
            chart,
            binding_failures,
        })
    }

    /// Persisted axis options of both groups.
    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.model.options
    }

    /// Captures the persisted axis options and series selectors.
    ///
    /// [`Chart::from_config`] resolves series by their selectors, so the
    /// rebuilt chart matches this one once every series here is re-bound
    /// (see [`Chart::rebind_all_series`]). A series still holding an axis
    /// whose index shifted after a removal lands where its selector points.
    #[must_use]
    pub fn to_config(&self) -> ChartConfig {
        ChartConfig {
            x_axis_defaults: self.model.x_axis_defaults.clone(),
            y_axis_defaults: self.model.y_axis_defaults.clone(),
            x_axis: self.model.options.x_axis.clone(),
            y_axis: self.model.options.y_axis.clone(),
            series: self
                .model
                .series
                .values()
                .map(|series| series.options().clone())
                .collect(),
        }
    }
}
