//! Runtime tuning knobs shared by every host.

use std::time::Duration;

/// Timeouts applied by an [`ActorHost`](crate::ActorHost) and its clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeOptions {
    /// An activation with an empty inbox for this long is deactivated. Its state is
    /// reloaded from the store on the next request.
    pub idle_timeout: Duration,
    /// How long a client waits for a reply. The request itself is not cancelled; it
    /// still runs to completion inside the actor.
    pub call_timeout: Duration,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(600),
            call_timeout: Duration::from_secs(30),
        }
    }
}

impl RuntimeOptions {
    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }
}
