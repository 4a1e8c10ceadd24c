//! Integration suite: drives a whole `Runtime<StubHostAdapter>` through
//! the dispatcher + area manager + tracking pipeline from outside the
//! crate, the way the real plugin's callback trampolines would, instead
//! of calling any single module's functions directly (SPEC_FULL.md
//! §10.E).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use vcmp_core::area::Area;
use vcmp_core::entity::EntityFlags;
use vcmp_core::event::{Event, EventKind, Verdict};
use vcmp_core::host::stub::StubHostAdapter;
use vcmp_core::host::HostAdapter;
use vcmp_core::lifecycle;
use vcmp_core::property;
use vcmp_core::runtime::Runtime;
use vcmp_common::{PoolKind, Vector2, Vector3};

/// A player connects, crosses into a managed area over two frames, and
/// disconnects — exercising lifecycle, the registry, the tracking
/// engine, and the area manager together, end to end.
#[test]
fn player_connects_crosses_an_area_and_disconnects() {
    let runtime = Runtime::new(StubHostAdapter::new());

    let area_id = runtime.areas.insert_area(Area::from_points(&[
        Vector2::new(0.0, -100.0),
        Vector2::new(100.0, -100.0),
        Vector2::new(100.0, 100.0),
        Vector2::new(0.0, 100.0),
    ]));
    runtime.areas.manage(area_id, 1);

    assert!(lifecycle::incoming_connection(&runtime.dispatcher, "Alice", "127.0.0.1", ""));
    lifecycle::player_connect(&runtime.registry, &runtime.dispatcher, 0).unwrap();

    let record = runtime.registry.get(PoolKind::Player, 0).unwrap();
    record.set_flags(EntityFlags::AREA_TRACK);

    let entered = Rc::new(Cell::new(0));
    let left = Rc::new(Cell::new(0));
    let e = entered.clone();
    let l = left.clone();
    runtime.dispatcher.on_entity(PoolKind::Player, 0, EventKind::EnterArea, 0, move |_| {
        e.set(e.get() + 1);
        Verdict::Continue
    });
    runtime.dispatcher.on_entity(PoolKind::Player, 0, EventKind::LeaveArea, 0, move |_| {
        l.set(l.get() + 1);
        Verdict::Continue
    });

    runtime.host.set_position_for_test(0, Vector3::new(-1.0, 0.0, 0.0));
    runtime.on_server_frame(16);
    assert_eq!(entered.get(), 0);

    runtime.host.set_position_for_test(0, Vector3::new(1.0, 0.0, 0.0));
    runtime.on_server_frame(16);
    assert_eq!(entered.get(), 1);
    assert_eq!(left.get(), 0);

    runtime.host.set_position_for_test(0, Vector3::new(-1.0, 0.0, 0.0));
    runtime.on_server_frame(16);
    assert_eq!(entered.get(), 1);
    assert_eq!(left.get(), 1);

    assert_eq!(runtime.clock.elapsed_ms(), 48);

    lifecycle::player_disconnect(&runtime.registry, &runtime.dispatcher, 0, 0).unwrap();
    assert!(runtime.registry.get(PoolKind::Player, 0).is_err());
}

/// A vehicle's full create/destroy round trip through the lifecycle
/// facade, observed via the dispatcher's pool-change notifications.
#[test]
fn vehicle_pool_change_round_trips_through_lifecycle() {
    let runtime = Runtime::new(StubHostAdapter::new());
    let created = Rc::new(RefCell::new(Vec::new()));
    let c = created.clone();
    runtime.dispatcher.on(EventKind::PoolChange, 0, move |event| {
        if let Event::PoolChange { pool, handle, created } = event {
            c.borrow_mut().push((*pool, *handle, *created));
        }
        Verdict::Continue
    });

    lifecycle::create_entity(&runtime.registry, &runtime.dispatcher, PoolKind::Vehicle, 0, EventKind::VehicleRespawn, "spawn", "").unwrap();
    assert!(runtime.registry.get(PoolKind::Vehicle, 0).is_ok());

    lifecycle::destroy_entity(&runtime.registry, &runtime.dispatcher, PoolKind::Vehicle, 0, EventKind::VehicleExplode, "boom", "", || Ok(())).unwrap();
    assert!(runtime.registry.get(PoolKind::Vehicle, 0).is_err());

    assert_eq!(*created.borrow(), vec![(PoolKind::Vehicle, 0, true), (PoolKind::Vehicle, 0, false)]);
}

/// §8 scenario 3, driven through the composed `Runtime`: a listener that
/// re-enters the same guarded setter while the outer call's bit is still
/// held gets its event deferred, not lost or emitted out of order.
#[test]
fn reentrant_property_setter_defers_through_the_full_runtime() {
    let runtime = Runtime::new(StubHostAdapter::new());
    runtime.registry.allocate(PoolKind::Player, 0).unwrap();
    runtime.host.set_player_world(0, 0).unwrap();

    let order = Rc::new(RefCell::new(Vec::new()));
    let o = order.clone();
    let registry_ref: *const vcmp_core::entity::Registry = &runtime.registry;
    let dispatcher_ref: *const vcmp_core::event::Dispatcher = &runtime.dispatcher;
    let host_ref: *const StubHostAdapter = &runtime.host;
    runtime.dispatcher.on_entity(PoolKind::Player, 0, EventKind::PlayerWorldChange, 0, move |e| {
        let Event::PlayerWorldChange(change) = e else { unreachable!() };
        o.borrow_mut().push(change.new);
        if change.new == 5 {
            // Safety: `runtime` outlives this closure for the whole test,
            // modeling a script callback re-entering the host on the same
            // single-threaded call stack the core itself runs on.
            unsafe {
                property::set_player_world(&*registry_ref, &*dispatcher_ref, &*host_ref, 0, 99).unwrap();
            }
        }
        Verdict::Continue
    });

    property::set_player_world(&runtime.registry, &runtime.dispatcher, &runtime.host, 0, 5).unwrap();
    assert_eq!(runtime.host.get_player_world(0).unwrap(), 99);
    assert_eq!(*order.borrow(), vec![5, 99]);
}
