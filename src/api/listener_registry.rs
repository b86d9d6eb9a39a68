use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartListener;

use super::Chart;

impl Chart {
    /// Attaches a listener. Listener ids are unique per chart and events
    /// are delivered in registration order.
    pub fn register_listener(&mut self, listener: Box<dyn ChartListener>) -> ChartResult<()> {
        self.check_listener_id_available(listener.id())?;
        debug!(listener = listener.id(), "listener registered");
        self.runtime.listeners.push(listener);
        Ok(())
    }

    /// Detaches the listener with `listener_id`. Returns `true` when one was
    /// attached; the remaining listeners keep their delivery order.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        let Some(position) = self.listener_position(listener_id) else {
            return false;
        };
        self.runtime.listeners.remove(position);
        debug!(listener = listener_id, "listener unregistered");
        true
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.runtime.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.listener_position(listener_id).is_some()
    }

    fn listener_position(&self, listener_id: &str) -> Option<usize> {
        self.runtime
            .listeners
            .iter()
            .position(|listener| listener.id() == listener_id)
    }

    fn check_listener_id_available(&self, listener_id: &str) -> ChartResult<()> {
        if listener_id.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "chart listener id must not be blank".to_owned(),
            ));
        }
        if self.has_listener(listener_id) {
            return Err(ChartError::InvalidData(format!(
                "chart listener `{listener_id}` is already attached"
            )));
        }
        Ok(())
    }
}
