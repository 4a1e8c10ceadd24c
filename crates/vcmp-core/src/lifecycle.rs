//! Lifecycle facade (§4.H): the connect/disconnect chain, create/destroy
//! for the other five pools, and kick/ban reason staging.
//!
//! Grounded on `myq2-server`'s client-connect/disconnect handlers
//! (`ClientConnect`/`ClientDisconnect` calling into `game_import`) —
//! generalized from "one entity class" to "whichever pool the caller
//! names", since every non-player pool in VCMP follows the same
//! create/destroy shape.

use crate::entity::{Handle, Registry};
use crate::event::{Arg, Dispatcher, Event, EventKind};
use vcmp_common::{EntityError, HostResult, PoolKind};

/// `OnIncomingConnection` (§4.H step 1): a veto point that runs before
/// any shadow record exists.
pub fn incoming_connection(dispatcher: &Dispatcher, name: &str, ip: &str, password: &str) -> bool {
    let event = Event::Host {
        kind: EventKind::IncomingConnection,
        args: vec![Arg::Str(name.to_string()), Arg::Str(ip.to_string()), Arg::Str(password.to_string())],
    };
    dispatcher.dispatch(&event)
}

/// `OnPlayerConnect` (§4.H step 2-3): allocates the record, then — only
/// once the record is live — dispatches `player_connect`.
pub fn player_connect(registry: &Registry, dispatcher: &Dispatcher, player: Handle) -> HostResult<()> {
    registry.allocate(PoolKind::Player, player)?;
    tracing::debug!(player, "player connected");
    dispatcher.dispatch_entity(PoolKind::Player, player, &Event::Host { kind: EventKind::PlayerConnect, args: vec![] });
    Ok(())
}

/// `OnPlayerDisconnect` (§4.H): the reason carried is whatever was
/// staged by `stage_kick`/`stage_ban`, or a plain disconnect reason
/// otherwise.
pub fn player_disconnect(registry: &Registry, dispatcher: &Dispatcher, player: Handle, reason: i32) -> HostResult<()> {
    let record = registry.get(PoolKind::Player, player)?;
    let staged = record.take_kick_ban();
    let mut args = vec![Arg::Int(reason as i64)];
    if let Some(staged) = staged {
        args.push(Arg::Str(staged.header));
        args.push(Arg::Str(staged.payload));
    }
    dispatcher.dispatch_entity(PoolKind::Player, player, &Event::Host { kind: EventKind::PlayerDisconnect, args });
    dispatcher.clear_entity(PoolKind::Player, player);
    registry.release(PoolKind::Player, player)?;
    tracing::debug!(player, "player disconnected");
    Ok(())
}

/// Stages a kick/ban reason ahead of the host call, since `KickPlayer`/
/// `BanPlayer` accepts no reason of its own (§4.H "Kick/Ban staging").
/// The subsequent `player_disconnect` call reads it back.
pub fn stage_kick_ban(registry: &Registry, player: Handle, header: impl Into<String>, payload: impl Into<String>) -> HostResult<()> {
    let record = registry.get(PoolKind::Player, player)?;
    record.stage_kick_ban(header, payload);
    Ok(())
}

/// Create path for vehicles/pickups/objects/checkpoints/blips (§4.H):
/// the host already returned `handle`; this claims the shadow slot and
/// emits pool-change(create) then the entity-specific create event.
pub fn create_entity(
    registry: &Registry,
    dispatcher: &Dispatcher,
    pool: PoolKind,
    handle: Handle,
    create_kind: EventKind,
    header: &str,
    payload: &str,
) -> HostResult<()> {
    registry.allocate(pool, handle)?;
    dispatcher.dispatch(&Event::PoolChange { pool, handle, created: true });
    dispatcher.dispatch_entity(
        pool,
        handle,
        &Event::Host { kind: create_kind, args: vec![Arg::Str(header.to_string()), Arg::Str(payload.to_string())] },
    );
    tracing::debug!(pool = pool.name(), handle, "entity created");
    Ok(())
}

/// Destroy path (§4.H): emit entity-specific destroy, then pool-change
/// (delete), free the shadow record, and only then ask the host to
/// delete it — `host_delete` is called last, matching the original
/// ordering.
pub fn destroy_entity(
    registry: &Registry,
    dispatcher: &Dispatcher,
    pool: PoolKind,
    handle: Handle,
    destroy_kind: EventKind,
    header: &str,
    payload: &str,
    host_delete: impl FnOnce() -> HostResult<()>,
) -> HostResult<()> {
    if !registry.get(pool, handle)?.is_occupied() {
        return Err(EntityError::NoSuchEntity);
    }
    dispatcher.dispatch_entity(
        pool,
        handle,
        &Event::Host { kind: destroy_kind, args: vec![Arg::Str(header.to_string()), Arg::Str(payload.to_string())] },
    );
    dispatcher.dispatch(&Event::PoolChange { pool, handle, created: false });
    dispatcher.clear_entity(pool, handle);
    registry.release(pool, handle)?;
    host_delete()?;
    tracing::debug!(pool = pool.name(), handle, "entity destroyed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Verdict;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn script_sees_connect_only_after_record_is_live() {
        let registry = Registry::new();
        let dispatcher = Dispatcher::new();
        let was_occupied = Rc::new(Cell::new(false));
        let w = was_occupied.clone();
        dispatcher.on(EventKind::PlayerConnect, 0, move |_| {
            w.set(true);
            Verdict::Continue
        });
        assert!(registry.get(PoolKind::Player, 0).is_err());
        player_connect(&registry, &dispatcher, 0).unwrap();
        assert!(was_occupied.get());
        assert!(registry.get(PoolKind::Player, 0).is_ok());
    }

    #[test]
    fn incoming_connection_veto_denies_on_first_cancel() {
        let dispatcher = Dispatcher::new();
        dispatcher.on(EventKind::IncomingConnection, 0, |_| Verdict::Cancel);
        assert!(!incoming_connection(&dispatcher, "Bob", "127.0.0.1", ""));
    }

    #[test]
    fn disconnect_reads_back_staged_kick_reason() {
        let registry = Registry::new();
        let dispatcher = Dispatcher::new();
        player_connect(&registry, &dispatcher, 0).unwrap();
        stage_kick_ban(&registry, 0, "cheating", "aimbot detected").unwrap();

        let seen_payload = Rc::new(std::cell::RefCell::new(String::new()));
        let s = seen_payload.clone();
        dispatcher.on_entity(PoolKind::Player, 0, EventKind::PlayerDisconnect, 0, move |e| {
            if let Event::Host { args, .. } = e {
                if let Some(Arg::Str(payload)) = args.get(2) {
                    *s.borrow_mut() = payload.clone();
                }
            }
            Verdict::Continue
        });
        player_disconnect(&registry, &dispatcher, 0, 0).unwrap();
        assert_eq!(*seen_payload.borrow(), "aimbot detected");
        assert!(registry.get(PoolKind::Player, 0).is_err());
    }

    #[test]
    fn create_then_destroy_round_trips_occupancy() {
        let registry = Registry::new();
        let dispatcher = Dispatcher::new();
        create_entity(&registry, &dispatcher, PoolKind::Vehicle, 0, EventKind::VehicleRespawn, "spawn", "").unwrap();
        assert!(registry.get(PoolKind::Vehicle, 0).is_ok());

        let deleted = Rc::new(Cell::new(false));
        let d = deleted.clone();
        destroy_entity(&registry, &dispatcher, PoolKind::Vehicle, 0, EventKind::VehicleExplode, "boom", "", || {
            d.set(true);
            Ok(())
        })
        .unwrap();
        assert!(deleted.get());
        assert!(registry.get(PoolKind::Vehicle, 0).is_err());
    }
}
