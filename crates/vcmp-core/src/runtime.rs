//! The composed core handle (§9 "`Core::Get()`/`AreaManager::Get()`
//! process-wide singletons → a `Runtime` handle constructed once per
//! plugin load, passed through; lifetime is the plugin's load-unload
//! span").
//!
//! Grounded on `myq2-server`'s single `server_t` struct threaded through
//! every subsystem call rather than accessed via globals — generalized
//! here to own the registry, dispatcher, area manager and frame clock
//! that the teacher keeps as separate statics.

use crate::area::AreaManager;
use crate::entity::Registry;
use crate::event::Dispatcher;
use crate::frame::FrameClock;
use crate::host::HostAdapter;

/// Owns every piece of process-wide state the core needs, for exactly
/// the plugin's `init`-to-`shutdown` span. Never a global: the plugin
/// entry point constructs one and threads a reference through every
/// host callback.
pub struct Runtime<H: HostAdapter> {
    pub registry: Registry,
    pub dispatcher: Dispatcher,
    pub areas: AreaManager,
    pub clock: FrameClock,
    pub host: H,
}

impl<H: HostAdapter> Runtime<H> {
    pub fn new(host: H) -> Self {
        Self {
            registry: Registry::new(),
            dispatcher: Dispatcher::new(),
            areas: AreaManager::new(),
            clock: FrameClock::new(),
            host,
        }
    }

    /// The plugin's `OnServerFrame` callback (§4.I) forwards straight
    /// here.
    pub fn on_server_frame(&self, elapsed_ms: u32) {
        crate::frame::on_server_frame(&self.clock, &self.registry, &self.host, &self.dispatcher, &self.areas, elapsed_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::stub::StubHostAdapter;

    #[test]
    fn runtime_composes_its_parts_and_ticks_frames() {
        let runtime = Runtime::new(StubHostAdapter::new());
        runtime.on_server_frame(16);
        runtime.on_server_frame(16);
        assert_eq!(runtime.clock.elapsed_ms(), 32);
    }
}
