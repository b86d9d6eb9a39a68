//! Optional hooks that observe the chart without touching its internals.

pub mod listeners;

pub use listeners::{ChartEvent, ChartListener, ChartListenerContext};
