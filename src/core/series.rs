use serde::{Deserialize, Serialize};

use super::{AxisGroup, AxisKey, AxisSelector, SeriesId};

fn default_cartesian() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Pie-like series set this to `false` and are never bound to axes.
    #[serde(default = "default_cartesian")]
    pub cartesian: bool,
    #[serde(default, skip_serializing_if = "AxisSelector::is_unset")]
    pub x_axis: AxisSelector,
    #[serde(default, skip_serializing_if = "AxisSelector::is_unset")]
    pub y_axis: AxisSelector,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            name: None,
            cartesian: true,
            x_axis: AxisSelector::Unset,
            y_axis: AxisSelector::Unset,
        }
    }
}

impl SeriesOptions {
    #[must_use]
    pub fn non_cartesian() -> Self {
        Self {
            cartesian: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, selector: impl Into<AxisSelector>) -> Self {
        self.x_axis = selector.into();
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, selector: impl Into<AxisSelector>) -> Self {
        self.y_axis = selector.into();
        self
    }

    #[must_use]
    pub fn selector(&self, group: AxisGroup) -> &AxisSelector {
        match group {
            AxisGroup::X => &self.x_axis,
            AxisGroup::Y => &self.y_axis,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    id: SeriesId,
    options: SeriesOptions,
    x_axis: Option<AxisKey>,
    y_axis: Option<AxisKey>,
}

impl Series {
    #[must_use]
    pub(crate) fn new(id: SeriesId, options: SeriesOptions) -> Self {
        Self {
            id,
            options,
            x_axis: None,
            y_axis: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> SeriesId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.options.name.as_deref()
    }

    #[must_use]
    pub fn options(&self) -> &SeriesOptions {
        &self.options
    }

    #[must_use]
    pub fn is_cartesian(&self) -> bool {
        self.options.cartesian
    }

    #[must_use]
    pub fn x_axis(&self) -> Option<AxisKey> {
        self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> Option<AxisKey> {
        self.y_axis
    }

    #[must_use]
    pub fn axis(&self, group: AxisGroup) -> Option<AxisKey> {
        match group {
            AxisGroup::X => self.x_axis,
            AxisGroup::Y => self.y_axis,
        }
    }

    /// A cartesian series needs both axes resolved before it can be drawn.
    #[must_use]
    pub fn is_plot_ready(&self) -> bool {
        self.is_cartesian() && self.x_axis.is_some() && self.y_axis.is_some()
    }

    pub(crate) fn set_axis(&mut self, group: AxisGroup, axis: Option<AxisKey>) {
        match group {
            AxisGroup::X => self.x_axis = axis,
            AxisGroup::Y => self.y_axis = axis,
        }
    }

    pub(crate) fn set_axis_selectors(&mut self, x_axis: AxisSelector, y_axis: AxisSelector) {
        self.options.x_axis = x_axis;
        self.options.y_axis = y_axis;
    }
}
