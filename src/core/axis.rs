use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::{AxisGroup, AxisKey, SeriesId};

/// Declarative axis configuration persisted by the chart.
///
/// Only `index` and `id` take part in series binding; the remaining fields
/// are carried through untouched for layout/render collaborators.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opposite: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reversed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl AxisOptions {
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_opposite(mut self, opposite: bool) -> Self {
        self.opposite = Some(opposite);
        self
    }

    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Returns a copy of `self` where every field set in `overrides` wins.
    #[must_use]
    pub fn merge(&self, overrides: &Self) -> Self {
        Self {
            index: overrides.index.or(self.index),
            id: overrides.id.clone().or_else(|| self.id.clone()),
            title: overrides.title.clone().or_else(|| self.title.clone()),
            opposite: overrides.opposite.or(self.opposite),
            reversed: overrides.reversed.or(self.reversed),
            min: overrides.min.or(self.min),
            max: overrides.max.or(self.max),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some(id) = &self.id {
            if id.trim().is_empty() {
                return Err(ChartError::InvalidAxisOptions(
                    "axis id must not be empty".to_owned(),
                ));
            }
        }
        for (name, value) in [("min", self.min), ("max", self.max)] {
            if value.is_some_and(|value| !value.is_finite()) {
                return Err(ChartError::InvalidAxisOptions(format!(
                    "axis {name} must be finite"
                )));
            }
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(ChartError::InvalidAxisOptions(format!(
                    "axis min ({min}) must not exceed max ({max})"
                )));
            }
        }
        Ok(())
    }
}

/// Live axis owned by a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    key: AxisKey,
    group: AxisGroup,
    index: usize,
    options: AxisOptions,
    series: IndexSet<SeriesId>,
    dirty: bool,
}

impl Axis {
    /// Builds an axis at `index`; `options.index` is forced to match.
    #[must_use]
    pub(crate) fn new(
        key: AxisKey,
        group: AxisGroup,
        index: usize,
        mut options: AxisOptions,
    ) -> Self {
        options.index = Some(index);
        Self {
            key,
            group,
            index,
            options,
            series: IndexSet::new(),
            dirty: true,
        }
    }

    #[must_use]
    pub fn key(&self) -> AxisKey {
        self.key
    }

    #[must_use]
    pub fn group(&self) -> AxisGroup {
        self.group
    }

    #[must_use]
    pub fn is_x(&self) -> bool {
        self.group.is_x()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.options.id.as_deref()
    }

    #[must_use]
    pub fn options(&self) -> &AxisOptions {
        &self.options
    }

    /// Series currently bound to this axis, in binding order.
    #[must_use]
    pub fn series(&self) -> &IndexSet<SeriesId> {
        &self.series
    }

    #[must_use]
    pub fn has_series(&self) -> bool {
        !self.series.is_empty()
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
        self.options.index = Some(index);
    }

    /// Returns `true` when the series was not registered yet.
    pub(crate) fn register_series(&mut self, series: SeriesId) -> bool {
        self.series.insert(series)
    }

    pub(crate) fn release_series(&mut self, series: SeriesId) -> bool {
        self.series.shift_remove(&series)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Drops everything the axis still holds before it leaves the chart.
    pub(crate) fn destroy(&mut self) {
        self.series.clear();
        self.dirty = false;
    }
}
