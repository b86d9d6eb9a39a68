use tracing::{debug, warn};

use crate::core::{Axis, AxisGroup, AxisKey, AxisOptions};
use crate::error::{ChartError, ChartResult};

use super::{Chart, ChartEvent, InvalidationLevel};

impl Chart {
    /// Appends a new axis to `group` and returns its key.
    ///
    /// The axis gets the next index of its group. Its options are the group
    /// defaults merged with `options`, and that merged copy is persisted.
    /// Existing series bindings are left alone; call
    /// [`Chart::rebind_all_series`] or [`Chart::bind_axes`] to pick the new
    /// axis up.
    pub fn add_axis(&mut self, options: AxisOptions, group: AxisGroup) -> ChartResult<AxisKey> {
        let index = self.model.group(group).len();
        let merged = self.model.axis_defaults(group).merge(&options).merge(&AxisOptions {
            index: Some(index),
            ..AxisOptions::default()
        });
        merged.validate()?;
        if let Some(id) = merged.id.as_deref() {
            if self.axis_by_id(group, id).is_some() {
                return Err(ChartError::DuplicateAxisId {
                    group,
                    id: id.to_owned(),
                });
            }
        }

        let key = self.model.allocate_axis_key();
        self.model.options.group_mut(group).push(merged.clone());
        self.model
            .axes
            .insert(key, Axis::new(key, group, index, merged));
        self.model.group_mut(group).push(key);
        debug!(%key, %group, index, "axis added");

        self.emit_chart_event(ChartEvent::AxisAdded { axis: key, group, index });
        Ok(key)
    }

    /// `isX`-flavored form of [`Chart::add_axis`].
    pub fn add_axis_is_x(&mut self, options: AxisOptions, is_x: bool) -> ChartResult<AxisKey> {
        self.add_axis(options, AxisGroup::from_is_x(is_x))
    }

    /// Removes an axis that no series is bound to.
    ///
    /// Fails with [`ChartError::AxisInUse`] and leaves the chart untouched
    /// while any series still references the axis. On success the axes
    /// after it shift down by one index, the layout is marked dirty and a
    /// redraw is requested.
    pub fn remove_axis(&mut self, key: AxisKey) -> ChartResult<()> {
        let axis = self.model.axes.get(&key).ok_or(ChartError::UnknownAxis(key))?;
        if axis.has_series() {
            let err = ChartError::AxisInUse {
                group: axis.group(),
                index: axis.index(),
                series_count: axis.series().len(),
            };
            warn!(%key, error = %err, "rejected axis removal");
            return Err(err);
        }
        let group = axis.group();
        let options_index = axis.options().index.unwrap_or(axis.index());

        let persisted = self.model.options.group_mut(group);
        debug_assert!(
            options_index < persisted.len(),
            "persisted {group} options out of sync with live axes"
        );
        if options_index < persisted.len() {
            persisted.remove(options_index);
        } else {
            warn!(
                %key,
                %group,
                options_index,
                persisted = persisted.len(),
                "persisted axis options out of sync with live axes"
            );
        }

        let removed = self.model.axes.shift_remove(&key);
        let sequence = self.model.group_mut(group);
        let position = sequence.iter().position(|candidate| *candidate == key);
        if let Some(position) = position {
            sequence.remove(position);
            self.model.reindex_group_from(group, position);
        }

        let index = removed.map_or(options_index, |mut axis| {
            axis.destroy();
            axis.index()
        });
        debug!(%key, %group, index, remaining = self.model.group(group).len(), "axis removed");

        self.emit_chart_event(ChartEvent::AxisRemoved { axis: key, group, index });
        self.mark_dirty_box();
        self.request_redraw(InvalidationLevel::Full);
        Ok(())
    }

    #[must_use]
    pub fn axis(&self, key: AxisKey) -> Option<&Axis> {
        self.model.axes.get(&key)
    }

    /// All live axes of both groups in creation order.
    pub fn axes(&self) -> impl Iterator<Item = &Axis> {
        self.model.axes.values()
    }

    /// Axes of `group` in index order.
    pub fn axes_in_group(&self, group: AxisGroup) -> impl Iterator<Item = &Axis> {
        self.model
            .group(group)
            .iter()
            .filter_map(|key| self.model.axes.get(key))
    }

    #[must_use]
    pub fn axis_keys(&self, group: AxisGroup) -> &[AxisKey] {
        self.model.group(group)
    }

    #[must_use]
    pub fn axis_at(&self, group: AxisGroup, index: usize) -> Option<&Axis> {
        self.model
            .group(group)
            .get(index)
            .and_then(|key| self.model.axes.get(key))
    }

    #[must_use]
    pub fn axis_by_id(&self, group: AxisGroup, id: &str) -> Option<&Axis> {
        self.axes_in_group(group).find(|axis| axis.id() == Some(id))
    }

    #[must_use]
    pub fn axis_count(&self, group: AxisGroup) -> usize {
        self.model.group(group).len()
    }

    /// Persisted options of `group`, 1:1 with its live axes.
    #[must_use]
    pub fn axis_options(&self, group: AxisGroup) -> &[AxisOptions] {
        self.model.options.group(group)
    }

    /// Axes whose dirty flag has not been consumed yet.
    pub fn dirty_axes(&self) -> impl Iterator<Item = &Axis> {
        self.axes().filter(|axis| axis.is_dirty())
    }

    /// Scheduler hook: the axis has been laid out again.
    pub fn clear_axis_dirty(&mut self, key: AxisKey) -> bool {
        match self.model.axes.get_mut(&key) {
            Some(axis) => {
                axis.clear_dirty();
                true
            }
            None => false,
        }
    }
}
