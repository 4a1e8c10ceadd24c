//! Guarded property setters (§4.D, §4.H's "property setters" surface):
//! every setter that both mutates the host and emits a before/after
//! event goes through [`apply_guarded`], which ties a record's
//! [`BitGuard`] to its deferred queue exactly the way §8 scenario 3
//! requires — emit inline if the bit was free, otherwise queue, and
//! drain the queue once the inline emission's own guard has dropped.
//!
//! Grounded on `myq2-server`'s `Cvar_Set2` (mutate, then notify any
//! callback registered on the cvar, with a changing-flag guard against
//! re-entrant `Cvar_Set2` calls from inside that callback) — generalized
//! from "one global flag" to "one bit per property group, one record
//! per entity".

use crate::entity::{Handle, Record};
use crate::event::{Change, Dispatcher, Event};
use crate::guard::{BitGuard, CircularLocks};
use vcmp_common::PoolKind;

/// Builds the `(old, new)` event, then either emits it inline (and
/// drains whatever queued up behind it) or defers it, depending on
/// whether `bit` was already held — i.e. whether this call is nested
/// inside another setter's own emission for the same record.
pub fn apply_guarded<T: Copy>(
    record: &Record,
    bit: CircularLocks,
    old: T,
    new: T,
    make_event: impl FnOnce(Change<T>) -> Event,
    dispatcher: &Dispatcher,
    pool: PoolKind,
    handle: Handle,
) {
    let event = make_event(Change { old, new });
    match BitGuard::try_acquire(&record.locks, bit) {
        Some(guard) => {
            dispatcher.dispatch_entity(pool, handle, &event);
            drop(guard);
            let pending: Vec<Event> = record.deferred.borrow_mut().drain(..).collect();
            for deferred in pending {
                dispatcher.dispatch_entity(pool, handle, &deferred);
            }
        }
        None => record.deferred.borrow_mut().push(event),
    }
}

/// Generates one `set_*` free function per property: reads the old
/// value from the host, applies the new value, then calls
/// [`apply_guarded`] with the right bit and [`Event`] variant. Matches
/// the shape of every property in §4.C/§4.D — one `(get, set, bit,
/// Event variant)` tuple each.
macro_rules! guarded_setter {
    ($name:ident, $pool:expr, $get:ident, $set:ident, $ty:ty, $bit:expr, $event:expr) => {
        pub fn $name(
            registry: &crate::entity::Registry,
            dispatcher: &Dispatcher,
            host: &dyn crate::host::HostAdapter,
            handle: Handle,
            new: $ty,
        ) -> vcmp_common::HostResult<()> {
            let record = registry.get($pool, handle)?;
            let old = host.$get(handle)?;
            host.$set(handle, new)?;
            apply_guarded(record, $bit, old, new, $event, dispatcher, $pool, handle);
            Ok(())
        }
    };
}

guarded_setter!(
    set_player_world,
    PoolKind::Player,
    get_player_world,
    set_player_world,
    i32,
    CircularLocks::EMIT_PLAYER_WORLD,
    Event::PlayerWorldChange
);
guarded_setter!(
    set_player_secondary_world,
    PoolKind::Player,
    get_player_secondary_world,
    set_player_secondary_world,
    i32,
    CircularLocks::EMIT_PLAYER_WORLD,
    Event::PlayerSecondaryWorldChange
);
guarded_setter!(
    set_player_skin,
    PoolKind::Player,
    get_player_skin,
    set_player_skin,
    i32,
    CircularLocks::EMIT_PLAYER_SKIN,
    Event::PlayerSkinChange
);
guarded_setter!(
    set_player_team,
    PoolKind::Player,
    get_player_team,
    set_player_team,
    i32,
    CircularLocks::EMIT_PLAYER_TEAM,
    Event::PlayerTeamChange
);
guarded_setter!(
    set_player_score,
    PoolKind::Player,
    get_player_score,
    set_player_score,
    i32,
    CircularLocks::EMIT_PLAYER_SCORE,
    Event::PlayerScoreChange
);
guarded_setter!(
    set_player_money,
    PoolKind::Player,
    get_player_money,
    set_player_money,
    i32,
    CircularLocks::EMIT_PLAYER_MONEY,
    Event::PlayerMoneyChange
);
guarded_setter!(
    set_player_wanted_level,
    PoolKind::Player,
    get_player_wanted_level,
    set_player_wanted_level,
    i32,
    CircularLocks::EMIT_PLAYER_WANTED,
    Event::PlayerWantedLevelChange
);
guarded_setter!(
    set_player_immunity_flags,
    PoolKind::Player,
    get_player_immunity_flags,
    set_player_immunity_flags,
    u32,
    CircularLocks::EMIT_PLAYER_IMMUNITY,
    Event::PlayerImmunityChange
);
guarded_setter!(
    set_player_admin,
    PoolKind::Player,
    get_player_admin,
    set_player_admin,
    bool,
    CircularLocks::EMIT_PLAYER_ADMIN,
    Event::PlayerAdminChange
);
guarded_setter!(
    set_checkpoint_radius,
    PoolKind::Checkpoint,
    get_checkpoint_radius,
    set_checkpoint_radius,
    f32,
    CircularLocks::EMIT_CHECKPOINT_RADIUS,
    Event::CheckpointRadiusChange
);

/// `SetPlayerAlpha` takes a fade-time the host doesn't echo back, so it
/// doesn't fit the two-argument `guarded_setter!` shape above.
pub fn set_player_alpha(
    registry: &crate::entity::Registry,
    dispatcher: &Dispatcher,
    host: &dyn crate::host::HostAdapter,
    player: Handle,
    alpha: u8,
    fade_time: u32,
) -> vcmp_common::HostResult<()> {
    let record = registry.get(PoolKind::Player, player)?;
    let old = host.get_player_alpha(player)?;
    host.set_player_alpha(player, alpha, fade_time)?;
    apply_guarded(record, CircularLocks::EMIT_PLAYER_ALPHA, old, alpha, Event::PlayerAlphaChange, dispatcher, PoolKind::Player, player);
    Ok(())
}

/// `SetPickupAlpha` lives on a different pool than the player property
/// setters above but follows the identical shape.
pub fn set_pickup_alpha(
    registry: &crate::entity::Registry,
    dispatcher: &Dispatcher,
    host: &dyn crate::host::HostAdapter,
    pickup: Handle,
    alpha: u8,
) -> vcmp_common::HostResult<()> {
    let record = registry.get(PoolKind::Pickup, pickup)?;
    let old = host.get_pickup_alpha(pickup)?;
    host.set_pickup_alpha(pickup, alpha)?;
    apply_guarded(record, CircularLocks::EMIT_PICKUP_ALPHA, old, alpha, Event::PickupAlphaChange, dispatcher, PoolKind::Pickup, pickup);
    Ok(())
}

/// `SetPlayerOption`/`SetVehiclePartStatus`/`SetVehicleTyreStatus`/
/// `SetVehicleHandlingRule` carry an extra index (the option id, the
/// part/tyre id, the rule id) alongside the `(old, new)` pair, so they
/// get their own small wrappers rather than the two-argument macro.
pub fn set_player_option(
    registry: &crate::entity::Registry,
    dispatcher: &Dispatcher,
    host: &dyn crate::host::HostAdapter,
    player: Handle,
    option: i32,
    toggle: bool,
) -> vcmp_common::HostResult<()> {
    let record = registry.get(PoolKind::Player, player)?;
    let old = host.get_player_option(player, option)?;
    host.set_player_option(player, option, toggle)?;
    apply_guarded(
        record,
        CircularLocks::EMIT_PLAYER_OPTION,
        old,
        toggle,
        |change| Event::PlayerOptionChange { option, change },
        dispatcher,
        PoolKind::Player,
        player,
    );
    Ok(())
}

pub fn set_vehicle_part_status(
    registry: &crate::entity::Registry,
    dispatcher: &Dispatcher,
    host: &dyn crate::host::HostAdapter,
    vehicle: Handle,
    part: crate::host::PartId,
    status: i32,
) -> vcmp_common::HostResult<()> {
    let record = registry.get(PoolKind::Vehicle, vehicle)?;
    let old = host.get_vehicle_part_status(vehicle, part)?;
    host.set_vehicle_part_status(vehicle, part, status)?;
    apply_guarded(
        record,
        CircularLocks::EMIT_VEHICLE_PARTSTATUS,
        old,
        status,
        |change| Event::VehiclePartStatusChange { part, change },
        dispatcher,
        PoolKind::Vehicle,
        vehicle,
    );
    Ok(())
}

pub fn set_vehicle_tyre_status(
    registry: &crate::entity::Registry,
    dispatcher: &Dispatcher,
    host: &dyn crate::host::HostAdapter,
    vehicle: Handle,
    tyre: crate::host::PartId,
    status: i32,
) -> vcmp_common::HostResult<()> {
    let record = registry.get(PoolKind::Vehicle, vehicle)?;
    let old = host.get_vehicle_tyre_status(vehicle, tyre)?;
    host.set_vehicle_tyre_status(vehicle, tyre, status)?;
    apply_guarded(
        record,
        CircularLocks::EMIT_VEHICLE_TYRESTATUS,
        old,
        status,
        |change| Event::VehicleTyreStatusChange { tyre, change },
        dispatcher,
        PoolKind::Vehicle,
        vehicle,
    );
    Ok(())
}

pub fn set_vehicle_handling_rule(
    registry: &crate::entity::Registry,
    dispatcher: &Dispatcher,
    host: &dyn crate::host::HostAdapter,
    vehicle: Handle,
    rule: i32,
    value: f64,
) -> vcmp_common::HostResult<()> {
    let record = registry.get(PoolKind::Vehicle, vehicle)?;
    let old = host.get_vehicle_handling_rule(rule)?;
    host.set_vehicle_handling_rule(rule, value)?;
    apply_guarded(
        record,
        CircularLocks::EMIT_VEHICLE_HANDLING,
        old,
        value,
        |change| Event::VehicleHandlingChange { rule, change },
        dispatcher,
        PoolKind::Vehicle,
        vehicle,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Registry;
    use crate::event::{EventKind, Verdict};
    use crate::host::stub::StubHostAdapter;
    use crate::host::HostAdapter;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn setter_emits_before_after_pair() {
        let registry = Registry::new();
        let dispatcher = Dispatcher::new();
        let host = StubHostAdapter::new();
        registry.allocate(PoolKind::Player, 0).unwrap();
        host.set_player_world(0, 1).unwrap();

        let seen = Rc::new(RefCell::new(None));
        let s = seen.clone();
        dispatcher.on_entity(PoolKind::Player, 0, EventKind::PlayerWorldChange, 0, move |e| {
            if let Event::PlayerWorldChange(change) = e {
                *s.borrow_mut() = Some(*change);
            }
            Verdict::Continue
        });

        set_player_world(&registry, &dispatcher, &host, 0, 5).unwrap();
        let change = seen.borrow().unwrap();
        assert_eq!(change.old, 1);
        assert_eq!(change.new, 5);
        assert_eq!(host.get_player_world(0).unwrap(), 5);
    }

    /// §8 scenario 3: a `player_world_change` listener re-enters
    /// `set_player_world` on the same record while the outer call's own
    /// guard is still held. The inner call's host mutation applies right
    /// away, but its event can't emit inline — it is deferred and drained
    /// only once the outer guard drops.
    #[test]
    fn reentrant_same_bit_setter_call_is_deferred_then_drained_in_order() {
        let registry = Registry::new();
        let dispatcher = Dispatcher::new();
        let host = StubHostAdapter::new();
        registry.allocate(PoolKind::Player, 0).unwrap();
        host.set_player_world(0, 0).unwrap();

        let order = Rc::new(RefCell::new(Vec::new()));
        let o = order.clone();
        let registry_ref: *const Registry = &registry;
        let dispatcher_ref: *const Dispatcher = &dispatcher;
        let host_ref: *const StubHostAdapter = &host;
        dispatcher.on_entity(PoolKind::Player, 0, EventKind::PlayerWorldChange, 0, move |e| {
            let Event::PlayerWorldChange(change) = e else { unreachable!() };
            o.borrow_mut().push(change.new);
            if change.new == 5 {
                // Safety: all three live for the whole test; this models
                // a script callback re-entering the host through the
                // same single-threaded call stack the core itself runs
                // on.
                unsafe {
                    set_player_world(&*registry_ref, &*dispatcher_ref, &*host_ref, 0, 99).unwrap();
                }
            }
            Verdict::Continue
        });

        set_player_world(&registry, &dispatcher, &host, 0, 5).unwrap();
        // The re-entrant call's host mutation landed immediately...
        assert_eq!(host.get_player_world(0).unwrap(), 99);
        // ...but its event only surfaces after the outer call's guard drops.
        assert_eq!(*order.borrow(), vec![5, 99]);
    }
}
