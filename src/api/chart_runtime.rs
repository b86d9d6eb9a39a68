use crate::extensions::ChartListener;

use super::InvalidationMask;

/// Runtime orchestration state grouped separately from the chart graph.
#[derive(Default)]
pub(super) struct ChartRuntimeState {
    pub(super) listeners: Vec<Box<dyn ChartListener>>,
    pub(super) pending_invalidation: InvalidationMask,
}

impl ChartRuntimeState {
    #[must_use]
    pub(super) fn with_full_invalidation() -> Self {
        Self {
            listeners: Vec::new(),
            pending_invalidation: InvalidationMask::full(),
        }
    }
}
