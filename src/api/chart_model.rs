use indexmap::IndexMap;

use crate::core::{Axis, AxisGroup, AxisKey, AxisOptions, Series, SeriesId};

use super::ChartOptions;

/// Owned chart graph: axes, series and the persisted axis options.
///
/// Cross references between axes and series are plain keys into the maps
/// below; nothing here owns anything twice.
#[derive(Debug, Clone, Default)]
pub(super) struct ChartModel {
    /// Every live axis in creation order, used for flat iteration.
    pub(super) axes: IndexMap<AxisKey, Axis>,
    pub(super) x_axes: Vec<AxisKey>,
    pub(super) y_axes: Vec<AxisKey>,
    pub(super) options: ChartOptions,
    pub(super) x_axis_defaults: AxisOptions,
    pub(super) y_axis_defaults: AxisOptions,
    pub(super) series: IndexMap<SeriesId, Series>,
    next_axis_key: u32,
    next_series_id: u32,
}

impl ChartModel {
    #[must_use]
    pub(super) fn with_axis_defaults(x_axis: AxisOptions, y_axis: AxisOptions) -> Self {
        Self {
            x_axis_defaults: x_axis,
            y_axis_defaults: y_axis,
            ..Self::default()
        }
    }

    #[must_use]
    pub(super) fn group(&self, group: AxisGroup) -> &[AxisKey] {
        match group {
            AxisGroup::X => &self.x_axes,
            AxisGroup::Y => &self.y_axes,
        }
    }

    pub(super) fn group_mut(&mut self, group: AxisGroup) -> &mut Vec<AxisKey> {
        match group {
            AxisGroup::X => &mut self.x_axes,
            AxisGroup::Y => &mut self.y_axes,
        }
    }

    #[must_use]
    pub(super) fn axis_defaults(&self, group: AxisGroup) -> &AxisOptions {
        match group {
            AxisGroup::X => &self.x_axis_defaults,
            AxisGroup::Y => &self.y_axis_defaults,
        }
    }

    pub(super) fn allocate_axis_key(&mut self) -> AxisKey {
        let key = AxisKey::new(self.next_axis_key);
        self.next_axis_key = self.next_axis_key.saturating_add(1);
        key
    }

    pub(super) fn allocate_series_id(&mut self) -> SeriesId {
        let id = SeriesId::new(self.next_series_id);
        self.next_series_id = self.next_series_id.saturating_add(1);
        id
    }

    /// Rewrites `index` of every axis at or after `start` to its position,
    /// on the live axis and on its persisted options alike.
    pub(super) fn reindex_group_from(&mut self, group: AxisGroup, start: usize) {
        let sequence = match group {
            AxisGroup::X => &self.x_axes,
            AxisGroup::Y => &self.y_axes,
        };
        let persisted = self.options.group_mut(group);
        for (index, key) in sequence.iter().enumerate().skip(start) {
            if let Some(axis) = self.axes.get_mut(key) {
                axis.set_index(index);
            }
            if let Some(options) = persisted.get_mut(index) {
                options.index = Some(index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChartModel;
    use crate::core::{AxisGroup, AxisKey};

    #[test]
    fn allocated_keys_are_never_reused() {
        let mut model = ChartModel::default();
        let first = model.allocate_axis_key();
        let second = model.allocate_axis_key();
        assert_eq!(first, AxisKey::new(0));
        assert_eq!(second, AxisKey::new(1));
        assert!(model.group(AxisGroup::X).is_empty());
    }
}
