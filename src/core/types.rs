use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two orthogonal axis collections a chart maintains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AxisGroup {
    #[serde(rename = "xAxis")]
    X,
    #[serde(rename = "yAxis")]
    Y,
}

impl AxisGroup {
    /// Binding order used by the binder: X first, then Y.
    pub const ALL: [Self; 2] = [Self::X, Self::Y];

    #[must_use]
    pub const fn from_is_x(is_x: bool) -> Self {
        if is_x { Self::X } else { Self::Y }
    }

    #[must_use]
    pub const fn is_x(self) -> bool {
        matches!(self, Self::X)
    }

    /// Option key under which this group's axes are persisted.
    #[must_use]
    pub const fn option_key(self) -> &'static str {
        match self {
            Self::X => "xAxis",
            Self::Y => "yAxis",
        }
    }
}

impl fmt::Display for AxisGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.option_key())
    }
}

/// Stable handle of a live axis.
///
/// Unlike the positional `index`, a key never changes while the axis lives
/// and is never reused by the owning chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AxisKey(u32);

impl AxisKey {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AxisKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "axis#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId(u32);

impl SeriesId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "series#{}", self.0)
    }
}

/// Series-side reference to the axis it should be plotted against.
///
/// Serialized the way chart configs usually spell it: absent/`null` for
/// the default axis, a number for a positional match and a string for an
/// axis id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisSelector {
    ByIndex(usize),
    ById(String),
    #[default]
    Unset,
}

impl AxisSelector {
    #[must_use]
    pub fn by_id(id: impl Into<String>) -> Self {
        Self::ById(id.into())
    }

    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns `true` when an axis at `index` carrying `id` satisfies this
    /// selector.
    ///
    /// Each variant checks exactly one condition, so a selector can never
    /// match an axis for two different reasons.
    #[must_use]
    pub fn matches(&self, index: usize, id: Option<&str>) -> bool {
        match self {
            Self::ByIndex(wanted) => *wanted == index,
            Self::ById(wanted) => id == Some(wanted.as_str()),
            Self::Unset => index == 0,
        }
    }
}

impl From<usize> for AxisSelector {
    fn from(index: usize) -> Self {
        Self::ByIndex(index)
    }
}

impl From<&str> for AxisSelector {
    fn from(id: &str) -> Self {
        Self::ById(id.to_owned())
    }
}

impl From<String> for AxisSelector {
    fn from(id: String) -> Self {
        Self::ById(id)
    }
}
