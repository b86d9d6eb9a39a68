use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{Chart, ChartEvent};

/// Ordered repaint classes requested from the external redraw scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    Light,
    Full,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }
}

/// What changed since the scheduler last consumed the pending mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    /// Axis set changed shape; layout boxes must be recomputed.
    AxisLayout,
    AxisBinding,
    Series,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::AxisLayout => 1 << 0,
            Self::AxisBinding => 1 << 1,
            Self::Series => 1 << 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationTopics {
    bits: u8,
}

impl InvalidationTopics {
    const ALL_BITS: u8 = InvalidationTopic::AxisLayout.bit()
        | InvalidationTopic::AxisBinding.bit()
        | InvalidationTopic::Series.bit();

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    #[must_use]
    pub const fn from_topic(topic: InvalidationTopic) -> Self {
        Self { bits: topic.bit() }
    }

    #[must_use]
    pub const fn with_topic(self, topic: InvalidationTopic) -> Self {
        Self {
            bits: self.bits | topic.bit(),
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains_topic(self, topic: InvalidationTopic) -> bool {
        (self.bits & topic.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }
}

/// Coalesced "needs work" signal handed to the redraw scheduler.
///
/// Masks only ever grow through [`InvalidationMask::merge`]; the scheduler
/// clears them by taking the pending mask from the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationMask {
    level: InvalidationLevel,
    #[serde(default)]
    topics: InvalidationTopics,
}

impl InvalidationMask {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            level: InvalidationLevel::None,
            topics: InvalidationTopics::none(),
        }
    }

    #[must_use]
    pub const fn full() -> Self {
        Self {
            level: InvalidationLevel::Full,
            topics: InvalidationTopics::all(),
        }
    }

    /// Axis state changed without an explicit redraw request.
    #[must_use]
    pub const fn axis_binding() -> Self {
        Self {
            level: InvalidationLevel::None,
            topics: InvalidationTopics::from_topic(InvalidationTopic::AxisBinding),
        }
    }

    #[must_use]
    pub const fn dirty_box() -> Self {
        Self {
            level: InvalidationLevel::None,
            topics: InvalidationTopics::from_topic(InvalidationTopic::AxisLayout),
        }
    }

    #[must_use]
    pub const fn with_level_and_topics(
        level: InvalidationLevel,
        topics: InvalidationTopics,
    ) -> Self {
        Self { level, topics }
    }

    #[must_use]
    pub const fn level(self) -> InvalidationLevel {
        self.level
    }

    #[must_use]
    pub const fn topics(self) -> InvalidationTopics {
        self.topics
    }

    #[must_use]
    pub const fn has_topic(self, topic: InvalidationTopic) -> bool {
        self.topics.contains_topic(topic)
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self.level, InvalidationLevel::None) && self.topics.is_none()
    }

    pub fn merge(&mut self, other: Self) {
        self.level = self.level.max(other.level);
        self.topics = self.topics.union(other.topics);
    }
}

impl Chart {
    /// Pending invalidation not yet consumed by the scheduler.
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationMask {
        self.runtime.pending_invalidation
    }

    /// Hands the pending mask to the scheduler and resets it.
    pub fn take_pending_invalidation(&mut self) -> InvalidationMask {
        std::mem::take(&mut self.runtime.pending_invalidation)
    }

    /// Layout of the axis boxes must be recomputed before the next paint.
    #[must_use]
    pub fn is_dirty_box(&self) -> bool {
        self.runtime
            .pending_invalidation
            .has_topic(InvalidationTopic::AxisLayout)
    }

    #[must_use]
    pub fn redraw_requested(&self) -> bool {
        self.runtime.pending_invalidation.level() != InvalidationLevel::None
    }

    pub fn mark_dirty_box(&mut self) {
        self.invalidate(InvalidationMask::dirty_box());
    }

    /// Requests a full redraw pass from the scheduler.
    pub fn redraw(&mut self) {
        self.request_redraw(InvalidationLevel::Full);
    }

    pub(super) fn invalidate(&mut self, mask: InvalidationMask) {
        self.runtime.pending_invalidation.merge(mask);
    }

    pub(super) fn request_redraw(&mut self, level: InvalidationLevel) {
        let topics = match level {
            InvalidationLevel::None => return,
            InvalidationLevel::Light => InvalidationTopics::from_topic(InvalidationTopic::Series),
            InvalidationLevel::Full => InvalidationTopics::all(),
        };
        self.invalidate(InvalidationMask::with_level_and_topics(level, topics));
        trace!(?level, "redraw requested");
        self.emit_chart_event(ChartEvent::RedrawRequested { level });
    }
}
