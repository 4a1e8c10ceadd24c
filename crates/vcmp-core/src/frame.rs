//! Frame scheduler (§4.I): `on_server_frame` is the host's single
//! `OnServerFrame(elapsed)` tick, fanned out to the tracking engine and
//! the area manager's queue.
//!
//! Grounded on `myq2-game`'s `G_RunFrame` (advance level time, run think
//! functions, then a housekeeping pass) — generalized to wall-clock plus
//! the tracking/area passes this core actually owns.

use crate::area::AreaManager;
use crate::entity::Registry;
use crate::event::{Dispatcher, Event, EventKind};
use crate::host::HostAdapter;
use crate::tracking;
use std::cell::Cell;

/// Monotonic wall-clock accumulated from successive `elapsed_ms` deltas
/// (§4.I "advance wall-clock counters"). The core never reads the host's
/// `GetTime` itself here — callers needing an absolute timestamp ask the
/// host directly (§4.A); this is purely the frame-to-frame accumulator
/// scripts can query for their own timers.
#[derive(Default)]
pub struct FrameClock {
    elapsed_ms: Cell<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms.get()
    }

    fn advance(&self, delta_ms: u32) {
        self.elapsed_ms.set(self.elapsed_ms.get() + delta_ms as u64);
    }
}

/// One `OnServerFrame` tick (§4.I): advances the clock, runs the
/// tracking pass, dispatches `server_frame` so scripts can drive their
/// own per-tick logic, then drains the area queue as a safety net —
/// ordinarily every queued entry already drained the moment its cell's
/// lock count reached zero (§4.G "Test under iteration"), but a cell
/// left locked across a re-entrant callback only gets cleared here.
pub fn on_server_frame(
    clock: &FrameClock,
    registry: &Registry,
    host: &dyn HostAdapter,
    dispatcher: &Dispatcher,
    areas: &AreaManager,
    elapsed_ms: u32,
) {
    clock.advance(elapsed_ms);
    tracking::run_tracking_pass(registry, host, dispatcher, areas);
    dispatcher.dispatch(&Event::Host { kind: EventKind::ServerFrame, args: vec![] });
    areas.drain_pending();
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcmp_common::PoolKind;

    #[test]
    fn clock_accumulates_across_frames() {
        let clock = FrameClock::new();
        let registry = Registry::new();
        let host = crate::host::stub::StubHostAdapter::new();
        let dispatcher = Dispatcher::new();
        let areas = AreaManager::new();
        on_server_frame(&clock, &registry, &host, &dispatcher, &areas, 16);
        on_server_frame(&clock, &registry, &host, &dispatcher, &areas, 17);
        assert_eq!(clock.elapsed_ms(), 33);
    }

    #[test]
    fn frame_runs_tracking_for_occupied_players() {
        let clock = FrameClock::new();
        let registry = Registry::new();
        let host = crate::host::stub::StubHostAdapter::new();
        let dispatcher = Dispatcher::new();
        let areas = AreaManager::new();
        let record = registry.allocate(PoolKind::Player, 0).unwrap();
        record.set_flags(crate::entity::EntityFlags::DIST_TRACK);
        host.set_position_for_test(0, vcmp_common::Vector3::new(0.0, 0.0, 0.0));
        on_server_frame(&clock, &registry, &host, &dispatcher, &areas, 16);
        host.set_position_for_test(0, vcmp_common::Vector3::new(3.0, 4.0, 0.0));
        on_server_frame(&clock, &registry, &host, &dispatcher, &areas, 16);
        assert_eq!(record.tracking.borrow().distance, 5.0);
    }
}
