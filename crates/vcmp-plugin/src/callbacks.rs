//! Callback trampolines (§4.H/§4.I, §6.1): the `extern "C"` functions
//! the host calls directly. Each one is as thin as the real signature
//! allows — decode the C arguments, then forward straight into the
//! process's one [`Runtime`], exactly the shape `myq2-server`'s
//! `ClientConnect`/`ClientDisconnect`/`G_RunFrame` entry points forward
//! into `game_import`/`game_export` rather than doing real work inline.

use std::ffi::CStr;
use std::os::raw::c_char;
use std::sync::OnceLock;

use vcmp_common::PoolKind;
use vcmp_core::entity::Handle;
use vcmp_core::event::{Arg, Event, EventKind};
use vcmp_core::lifecycle;
use vcmp_core::runtime::Runtime;

use crate::abi::*;
use crate::adapter::RealHostAdapter;

/// The host drives every one of these trampolines from its own single
/// game thread (§5's single-threaded model) — `Registry`/`Dispatcher`
/// hold their state behind `Cell`/`RefCell` on that assumption, which
/// makes them sound to reach through a `'static` reference but not
/// provably `Sync` to the compiler.
struct RuntimeCell(Runtime<RealHostAdapter>);
unsafe impl Sync for RuntimeCell {}
unsafe impl Send for RuntimeCell {}

static RUNTIME: OnceLock<RuntimeCell> = OnceLock::new();

/// Installs the process-wide runtime. Called exactly once, from
/// `VcmpPluginInit`, before any callback below can fire.
pub(crate) fn install(runtime: Runtime<RealHostAdapter>) {
    RUNTIME
        .set(RuntimeCell(runtime))
        .unwrap_or_else(|_| panic!("VcmpPluginInit ran more than once"));
}

fn rt() -> &'static Runtime<RealHostAdapter> {
    &RUNTIME.get().expect("host callback fired before VcmpPluginInit").0
}

/// Reads a host-owned, NUL-terminated C string. The host only ever
/// passes null for genuinely optional fields (passwords); everything
/// else is non-null by contract.
unsafe fn read_str(ptr: *const c_char) -> String {
    if ptr.is_null() {
        String::new()
    } else {
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    }
}

fn allow(accepted: bool) -> u8 {
    accepted as u8
}

fn entity_pool(pool: vcmpEntityPool) -> Option<PoolKind> {
    match pool {
        vcmpEntityPool::Vehicle => Some(PoolKind::Vehicle),
        vcmpEntityPool::Object => Some(PoolKind::Object),
        vcmpEntityPool::Pickup => Some(PoolKind::Pickup),
        vcmpEntityPool::CheckPoint => Some(PoolKind::Checkpoint),
        vcmpEntityPool::Blip => Some(PoolKind::Blip),
        // Radio channels aren't one of the six tracked pools (§3); the
        // registry has nothing to allocate them into.
        vcmpEntityPool::Radio => None,
    }
}

pub unsafe extern "C" fn on_server_initialise() -> u8 {
    allow(rt().dispatcher.dispatch(&Event::Host { kind: EventKind::ServerInit, args: vec![] }))
}

pub unsafe extern "C" fn on_server_shutdown() {
    rt().dispatcher.dispatch(&Event::Host { kind: EventKind::ServerShutdown, args: vec![] });
}

pub unsafe extern "C" fn on_server_frame(elapsed_time: f32) {
    rt().on_server_frame((elapsed_time * 1000.0).max(0.0) as u32);
}

pub unsafe extern "C" fn on_plugin_command(command_identifier: u32, message: *const c_char) -> u8 {
    let message = read_str(message);
    allow(rt().dispatcher.dispatch(&Event::Host {
        kind: EventKind::PluginCommand,
        args: vec![Arg::Int(command_identifier as i64), Arg::Str(message)],
    }))
}

/// Leaves `player_name` untouched: renaming a connecting player ahead
/// of acceptance isn't wired into [`lifecycle::incoming_connection`]
/// (a documented scope decision — see DESIGN.md).
pub unsafe extern "C" fn on_incoming_connection(
    player_name: *mut c_char,
    _name_buffer_size: usize,
    user_password: *const c_char,
    ip_address: *const c_char,
) -> u8 {
    let name = read_str(player_name);
    let password = read_str(user_password);
    let ip = read_str(ip_address);
    allow(lifecycle::incoming_connection(&rt().dispatcher, &name, &ip, &password))
}

pub unsafe extern "C" fn on_client_script_data(player_id: i32, _data: *const u8, size: usize) {
    // No `Arg` variant carries a raw byte payload (§6.1's `Arg` only
    // covers the scalar shapes every other callback needs); the length
    // still reaches listeners so they know a payload arrived.
    rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host { kind: EventKind::ClientScriptData, args: vec![Arg::Int(size as i64)] },
    );
}

pub unsafe extern "C" fn on_player_connect(player_id: i32) {
    let r = rt();
    let _ = lifecycle::player_connect(&r.registry, &r.dispatcher, player_id as Handle);
}

pub unsafe extern "C" fn on_player_disconnect(player_id: i32, reason: vcmpDisconnectReason) {
    let r = rt();
    let _ = lifecycle::player_disconnect(&r.registry, &r.dispatcher, player_id as Handle, reason as i32);
}

pub unsafe extern "C" fn on_player_request_class(player_id: i32, offset: i32) -> u8 {
    allow(rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host { kind: EventKind::PlayerRequestClass, args: vec![Arg::Int(offset as i64)] },
    ))
}

pub unsafe extern "C" fn on_player_request_spawn(player_id: i32) -> u8 {
    allow(rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host { kind: EventKind::PlayerRequestSpawn, args: vec![] },
    ))
}

pub unsafe extern "C" fn on_player_spawn(player_id: i32) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host { kind: EventKind::PlayerSpawn, args: vec![] },
    );
}

pub unsafe extern "C" fn on_player_death(player_id: i32, killer_id: i32, reason: i32, body_part: vcmpBodyPart) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host {
            kind: EventKind::PlayerDeath,
            args: vec![Arg::Int(killer_id as i64), Arg::Int(reason as i64), Arg::Int(body_part as i64)],
        },
    );
}

pub unsafe extern "C" fn on_player_update(player_id: i32, update_type: vcmpPlayerUpdate) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host { kind: EventKind::PlayerUpdate, args: vec![Arg::Int(update_type as i64)] },
    );
}

pub unsafe extern "C" fn on_player_request_enter_vehicle(player_id: i32, vehicle_id: i32, slot_index: i32) -> u8 {
    allow(rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host {
            kind: EventKind::PlayerRequestEnterVehicle,
            args: vec![Arg::Int(vehicle_id as i64), Arg::Int(slot_index as i64)],
        },
    ))
}

pub unsafe extern "C" fn on_player_enter_vehicle(player_id: i32, vehicle_id: i32, slot_index: i32) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host {
            kind: EventKind::PlayerEnterVehicle,
            args: vec![Arg::Int(vehicle_id as i64), Arg::Int(slot_index as i64)],
        },
    );
}

pub unsafe extern "C" fn on_player_exit_vehicle(player_id: i32, vehicle_id: i32) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host { kind: EventKind::PlayerExitVehicle, args: vec![Arg::Int(vehicle_id as i64)] },
    );
}

pub unsafe extern "C" fn on_player_name_change(player_id: i32, old_name: *const c_char, new_name: *const c_char) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host {
            kind: EventKind::PlayerNameChange,
            args: vec![Arg::Str(read_str(old_name)), Arg::Str(read_str(new_name))],
        },
    );
}

pub unsafe extern "C" fn on_player_state_change(player_id: i32, old_state: vcmpPlayerState, new_state: vcmpPlayerState) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host {
            kind: EventKind::PlayerStateChange,
            args: vec![Arg::Int(old_state as i64), Arg::Int(new_state as i64)],
        },
    );
}

pub unsafe extern "C" fn on_player_action_change(player_id: i32, old_action: i32, new_action: i32) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host {
            kind: EventKind::PlayerActionChange,
            args: vec![Arg::Int(old_action as i64), Arg::Int(new_action as i64)],
        },
    );
}

pub unsafe extern "C" fn on_player_on_fire_change(player_id: i32, is_on_fire: u8) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host { kind: EventKind::PlayerOnFireChange, args: vec![Arg::Bool(is_on_fire != 0)] },
    );
}

pub unsafe extern "C" fn on_player_crouch_change(player_id: i32, is_crouching: u8) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host { kind: EventKind::PlayerCrouchChange, args: vec![Arg::Bool(is_crouching != 0)] },
    );
}

pub unsafe extern "C" fn on_player_game_keys_change(player_id: i32, old_keys: u32, new_keys: u32) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host {
            kind: EventKind::PlayerGameKeysChange,
            args: vec![Arg::Int(old_keys as i64), Arg::Int(new_keys as i64)],
        },
    );
}

pub unsafe extern "C" fn on_player_begin_typing(player_id: i32) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host { kind: EventKind::PlayerTypingBeginEnd, args: vec![Arg::Bool(true)] },
    );
}

pub unsafe extern "C" fn on_player_end_typing(player_id: i32) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host { kind: EventKind::PlayerTypingBeginEnd, args: vec![Arg::Bool(false)] },
    );
}

pub unsafe extern "C" fn on_player_away_change(player_id: i32, is_away: u8) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host { kind: EventKind::PlayerAwayChange, args: vec![Arg::Bool(is_away != 0)] },
    );
}

pub unsafe extern "C" fn on_player_message(player_id: i32, message: *const c_char) -> u8 {
    allow(rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host { kind: EventKind::PlayerMessage, args: vec![Arg::Str(read_str(message))] },
    ))
}

pub unsafe extern "C" fn on_player_command(player_id: i32, message: *const c_char) -> u8 {
    allow(rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host { kind: EventKind::PlayerCommand, args: vec![Arg::Str(read_str(message))] },
    ))
}

pub unsafe extern "C" fn on_player_private_message(player_id: i32, target_player_id: i32, message: *const c_char) -> u8 {
    allow(rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host {
            kind: EventKind::PlayerPrivateMessage,
            args: vec![Arg::Int(target_player_id as i64), Arg::Str(read_str(message))],
        },
    ))
}

pub unsafe extern "C" fn on_player_key_bind_down(player_id: i32, bind_id: i32) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host { kind: EventKind::PlayerKeyBindDownUp, args: vec![Arg::Int(bind_id as i64), Arg::Bool(true)] },
    );
}

pub unsafe extern "C" fn on_player_key_bind_up(player_id: i32, bind_id: i32) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host { kind: EventKind::PlayerKeyBindDownUp, args: vec![Arg::Int(bind_id as i64), Arg::Bool(false)] },
    );
}

pub unsafe extern "C" fn on_player_spectate(player_id: i32, target_player_id: i32) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host { kind: EventKind::PlayerSpectate, args: vec![Arg::Int(target_player_id as i64)] },
    );
}

pub unsafe extern "C" fn on_player_crash_report(player_id: i32, report: *const c_char) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Player,
        player_id as Handle,
        &Event::Host { kind: EventKind::PlayerCrashReport, args: vec![Arg::Str(read_str(report))] },
    );
}

pub unsafe extern "C" fn on_vehicle_update(vehicle_id: i32, update_type: vcmpVehicleUpdate) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Vehicle,
        vehicle_id as Handle,
        &Event::Host { kind: EventKind::VehicleUpdate, args: vec![Arg::Int(update_type as i64)] },
    );
}

pub unsafe extern "C" fn on_vehicle_explode(vehicle_id: i32) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Vehicle,
        vehicle_id as Handle,
        &Event::Host { kind: EventKind::VehicleExplode, args: vec![] },
    );
}

pub unsafe extern "C" fn on_vehicle_respawn(vehicle_id: i32) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Vehicle,
        vehicle_id as Handle,
        &Event::Host { kind: EventKind::VehicleRespawn, args: vec![] },
    );
}

pub unsafe extern "C" fn on_object_shot(object_id: i32, player_id: i32, weapon_id: i32) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Object,
        object_id as Handle,
        &Event::Host { kind: EventKind::ObjectShot, args: vec![Arg::Int(player_id as i64), Arg::Int(weapon_id as i64)] },
    );
}

pub unsafe extern "C" fn on_object_touched(object_id: i32, player_id: i32) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Object,
        object_id as Handle,
        &Event::Host { kind: EventKind::ObjectTouched, args: vec![Arg::Int(player_id as i64)] },
    );
}

pub unsafe extern "C" fn on_pickup_pick_attempt(pickup_id: i32, player_id: i32) -> u8 {
    allow(rt().dispatcher.dispatch_entity(
        PoolKind::Pickup,
        pickup_id as Handle,
        &Event::Host { kind: EventKind::PickupPickAttempt, args: vec![Arg::Int(player_id as i64)] },
    ))
}

pub unsafe extern "C" fn on_pickup_picked(pickup_id: i32, player_id: i32) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Pickup,
        pickup_id as Handle,
        &Event::Host { kind: EventKind::PickupPicked, args: vec![Arg::Int(player_id as i64)] },
    );
}

pub unsafe extern "C" fn on_pickup_respawn(pickup_id: i32) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Pickup,
        pickup_id as Handle,
        &Event::Host { kind: EventKind::PickupRespawn, args: vec![] },
    );
}

pub unsafe extern "C" fn on_checkpoint_entered(check_point_id: i32, player_id: i32) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Checkpoint,
        check_point_id as Handle,
        &Event::Host { kind: EventKind::CheckpointEnter, args: vec![Arg::Int(player_id as i64)] },
    );
}

pub unsafe extern "C" fn on_checkpoint_exited(check_point_id: i32, player_id: i32) {
    rt().dispatcher.dispatch_entity(
        PoolKind::Checkpoint,
        check_point_id as Handle,
        &Event::Host { kind: EventKind::CheckpointExit, args: vec![Arg::Int(player_id as i64)] },
    );
}

/// The registry's sole allocate/release trigger for the five non-player
/// pools (§4.C): nothing else in this plugin exposes a script-facing
/// `Create*` surface yet, so this notification — which the host raises
/// for every pool change regardless of who caused it — is the only
/// place a shadow record for these pools ever comes into existence.
pub unsafe extern "C" fn on_entity_pool_change(entity_type: vcmpEntityPool, entity_id: i32, is_deleted: u8) {
    let Some(pool) = entity_pool(entity_type) else { return };
    let r = rt();
    let handle = entity_id as Handle;
    if is_deleted != 0 {
        r.dispatcher.dispatch(&Event::PoolChange { pool, handle, created: false });
        r.dispatcher.clear_entity(pool, handle);
        let _ = r.registry.release(pool, handle);
    } else if r.registry.allocate(pool, handle).is_ok() {
        r.dispatcher.dispatch(&Event::PoolChange { pool, handle, created: true });
    }
}

/// Only the entry count crosses the boundary: `Arg` carries scalars,
/// not the parallel description/time arrays the real callback hands
/// over (the same simplification as [`on_client_script_data`]).
pub unsafe extern "C" fn on_server_performance_report(
    entry_count: usize,
    _descriptions: *const *const c_char,
    _times: *const u64,
) {
    rt().dispatcher.dispatch(&Event::Host {
        kind: EventKind::PerformanceReport,
        args: vec![Arg::Int(entry_count as i64)],
    });
}

/// Fills every field of the host's callback table with the trampolines
/// above (§6.1). Called once from `VcmpPluginInit`.
pub(crate) fn fill(callbacks: &mut PluginCallbacks) {
    callbacks.OnServerInitialise = Some(on_server_initialise);
    callbacks.OnServerShutdown = Some(on_server_shutdown);
    callbacks.OnServerFrame = Some(on_server_frame);
    callbacks.OnPluginCommand = Some(on_plugin_command);
    callbacks.OnIncomingConnection = Some(on_incoming_connection);
    callbacks.OnClientScriptData = Some(on_client_script_data);
    callbacks.OnPlayerConnect = Some(on_player_connect);
    callbacks.OnPlayerDisconnect = Some(on_player_disconnect);
    callbacks.OnPlayerRequestClass = Some(on_player_request_class);
    callbacks.OnPlayerRequestSpawn = Some(on_player_request_spawn);
    callbacks.OnPlayerSpawn = Some(on_player_spawn);
    callbacks.OnPlayerDeath = Some(on_player_death);
    callbacks.OnPlayerUpdate = Some(on_player_update);
    callbacks.OnPlayerRequestEnterVehicle = Some(on_player_request_enter_vehicle);
    callbacks.OnPlayerEnterVehicle = Some(on_player_enter_vehicle);
    callbacks.OnPlayerExitVehicle = Some(on_player_exit_vehicle);
    callbacks.OnPlayerNameChange = Some(on_player_name_change);
    callbacks.OnPlayerStateChange = Some(on_player_state_change);
    callbacks.OnPlayerActionChange = Some(on_player_action_change);
    callbacks.OnPlayerOnFireChange = Some(on_player_on_fire_change);
    callbacks.OnPlayerCrouchChange = Some(on_player_crouch_change);
    callbacks.OnPlayerGameKeysChange = Some(on_player_game_keys_change);
    callbacks.OnPlayerBeginTyping = Some(on_player_begin_typing);
    callbacks.OnPlayerEndTyping = Some(on_player_end_typing);
    callbacks.OnPlayerAwayChange = Some(on_player_away_change);
    callbacks.OnPlayerMessage = Some(on_player_message);
    callbacks.OnPlayerCommand = Some(on_player_command);
    callbacks.OnPlayerPrivateMessage = Some(on_player_private_message);
    callbacks.OnPlayerKeyBindDown = Some(on_player_key_bind_down);
    callbacks.OnPlayerKeyBindUp = Some(on_player_key_bind_up);
    callbacks.OnPlayerSpectate = Some(on_player_spectate);
    callbacks.OnPlayerCrashReport = Some(on_player_crash_report);
    callbacks.OnVehicleUpdate = Some(on_vehicle_update);
    callbacks.OnVehicleExplode = Some(on_vehicle_explode);
    callbacks.OnVehicleRespawn = Some(on_vehicle_respawn);
    callbacks.OnObjectShot = Some(on_object_shot);
    callbacks.OnObjectTouched = Some(on_object_touched);
    callbacks.OnPickupPickAttempt = Some(on_pickup_pick_attempt);
    callbacks.OnPickupPicked = Some(on_pickup_picked);
    callbacks.OnPickupRespawn = Some(on_pickup_respawn);
    callbacks.OnCheckpointEntered = Some(on_checkpoint_entered);
    callbacks.OnCheckpointExited = Some(on_checkpoint_exited);
    callbacks.OnEntityPoolChange = Some(on_entity_pool_change);
    callbacks.OnServerPerformanceReport = Some(on_server_performance_report);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_leaves_no_callback_slot_unset() {
        let mut callbacks = PluginCallbacks::default();
        assert!(callbacks.OnPlayerConnect.is_none());
        fill(&mut callbacks);
        assert!(callbacks.OnServerInitialise.is_some());
        assert!(callbacks.OnServerShutdown.is_some());
        assert!(callbacks.OnServerFrame.is_some());
        assert!(callbacks.OnPluginCommand.is_some());
        assert!(callbacks.OnIncomingConnection.is_some());
        assert!(callbacks.OnClientScriptData.is_some());
        assert!(callbacks.OnPlayerConnect.is_some());
        assert!(callbacks.OnPlayerDisconnect.is_some());
        assert!(callbacks.OnPlayerRequestClass.is_some());
        assert!(callbacks.OnPlayerRequestSpawn.is_some());
        assert!(callbacks.OnPlayerSpawn.is_some());
        assert!(callbacks.OnPlayerDeath.is_some());
        assert!(callbacks.OnPlayerUpdate.is_some());
        assert!(callbacks.OnPlayerRequestEnterVehicle.is_some());
        assert!(callbacks.OnPlayerEnterVehicle.is_some());
        assert!(callbacks.OnPlayerExitVehicle.is_some());
        assert!(callbacks.OnPlayerNameChange.is_some());
        assert!(callbacks.OnPlayerStateChange.is_some());
        assert!(callbacks.OnPlayerActionChange.is_some());
        assert!(callbacks.OnPlayerOnFireChange.is_some());
        assert!(callbacks.OnPlayerCrouchChange.is_some());
        assert!(callbacks.OnPlayerGameKeysChange.is_some());
        assert!(callbacks.OnPlayerBeginTyping.is_some());
        assert!(callbacks.OnPlayerEndTyping.is_some());
        assert!(callbacks.OnPlayerAwayChange.is_some());
        assert!(callbacks.OnPlayerMessage.is_some());
        assert!(callbacks.OnPlayerCommand.is_some());
        assert!(callbacks.OnPlayerPrivateMessage.is_some());
        assert!(callbacks.OnPlayerKeyBindDown.is_some());
        assert!(callbacks.OnPlayerKeyBindUp.is_some());
        assert!(callbacks.OnPlayerSpectate.is_some());
        assert!(callbacks.OnPlayerCrashReport.is_some());
        assert!(callbacks.OnVehicleUpdate.is_some());
        assert!(callbacks.OnVehicleExplode.is_some());
        assert!(callbacks.OnVehicleRespawn.is_some());
        assert!(callbacks.OnObjectShot.is_some());
        assert!(callbacks.OnObjectTouched.is_some());
        assert!(callbacks.OnPickupPickAttempt.is_some());
        assert!(callbacks.OnPickupPicked.is_some());
        assert!(callbacks.OnPickupRespawn.is_some());
        assert!(callbacks.OnCheckpointEntered.is_some());
        assert!(callbacks.OnCheckpointExited.is_some());
        assert!(callbacks.OnEntityPoolChange.is_some());
        assert!(callbacks.OnServerPerformanceReport.is_some());
    }

    #[test]
    fn entity_pool_maps_every_tracked_kind_and_skips_radio() {
        assert_eq!(entity_pool(vcmpEntityPool::Vehicle), Some(PoolKind::Vehicle));
        assert_eq!(entity_pool(vcmpEntityPool::Object), Some(PoolKind::Object));
        assert_eq!(entity_pool(vcmpEntityPool::Pickup), Some(PoolKind::Pickup));
        assert_eq!(entity_pool(vcmpEntityPool::CheckPoint), Some(PoolKind::Checkpoint));
        assert_eq!(entity_pool(vcmpEntityPool::Blip), Some(PoolKind::Blip));
        assert_eq!(entity_pool(vcmpEntityPool::Radio), None);
    }
}
