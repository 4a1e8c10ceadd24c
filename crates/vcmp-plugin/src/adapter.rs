//! The real [`HostAdapter`] (§4.A): calls down through the raw
//! [`crate::abi::PluginFuncs`] table the host handed in at
//! `VcmpPluginInit`, translating `vcmpError` codes into
//! [`EntityError`] and C buffers into owned Rust values.
//!
//! Grounded on `myq2-game-dll`'s `DllGameImport` (a safe trait impl
//! wrapping a raw C function-pointer table, §9 "friend `_Func->Thing(...)`
//! global dispatch table -> a host-adapter interface object"). Unlike the
//! DLL's table, `PluginFuncs` arrives once at init and is `Copy` (every
//! field is `Option<fn ptr>`), so `RealHostAdapter` owns a plain value
//! instead of a `Mutex<Option<_>>` behind a global.

use std::ffi::CString;
use std::os::raw::c_char;

use vcmp_common::{Color3, Color4, EntityError, HostResult, Quaternion, Vector3};
use vcmp_core::host::{HostAdapter, PartId, PluginInfo as CorePluginInfo, ServerSettings as CoreServerSettings};

use crate::abi::{vcmpError, PluginFuncs};

/// Longest buffer the adapter stages on the stack for a single
/// fixed-size host getter (player/server name, IP, password). Any
/// result that would not fit raises [`EntityError::BufferTooSmall`]
/// rather than silently truncating (§7 "Buffer-too-small on getters").
const NAME_BUF_LEN: usize = 128;

fn code_result(code: vcmpError) -> HostResult<()> {
    match code {
        vcmpError::None => Ok(()),
        other => Err(EntityError::from_code(other as i32).unwrap_or(EntityError::RequestDenied)),
    }
}

fn to_cstring(s: &str) -> HostResult<CString> {
    CString::new(s).map_err(|_| EntityError::NullArgument)
}

/// Reads a NUL-terminated buffer the host just wrote into, up to the
/// first NUL or `len`, lossily (host strings are already validated
/// against its own name policy; this adapter never rejects on decode).
unsafe fn buf_to_string(buf: &[c_char], len: usize) -> String {
    let bytes: &[u8] = std::slice::from_raw_parts(buf.as_ptr() as *const u8, len);
    let nul = bytes.iter().position(|&b| b == 0).unwrap_or(len);
    String::from_utf8_lossy(&bytes[..nul]).into_owned()
}

/// Calls the host's fixed-size `Get*(id, buffer, size)` family and
/// converts its `vcmpErrorBufferTooSmall` into the typed error (§7).
unsafe fn get_fixed_string(
    code: vcmpError,
    buf: &[c_char; NAME_BUF_LEN],
) -> HostResult<String> {
    match code {
        vcmpError::None => Ok(buf_to_string(buf, NAME_BUF_LEN)),
        other => Err(EntityError::from_code(other as i32).unwrap_or(EntityError::RequestDenied)),
    }
}

/// Wraps the host's function table (§4.A). All side effects on the game
/// world happen through this type; `vcmp-core` never touches raw FFI.
pub struct RealHostAdapter {
    funcs: PluginFuncs,
}

impl RealHostAdapter {
    /// # Safety
    /// `funcs` must be the table the host passed to `VcmpPluginInit` for
    /// the lifetime of this plugin load.
    pub unsafe fn new(funcs: PluginFuncs) -> Self {
        Self { funcs }
    }

    /// Reads the host's last-error slot. Called immediately after a
    /// boolean-returning host function that can also fail (§4.A), before
    /// any other adapter call gets a chance to clobber the slot.
    unsafe fn last_error(&self) -> vcmpError {
        match self.funcs.GetLastError {
            Some(f) => f(),
            None => vcmpError::None,
        }
    }
}

macro_rules! call {
    ($self:expr, $name:ident $(, $arg:expr)* $(,)?) => {
        match $self.funcs.$name {
            Some(f) => unsafe { f($($arg),*) },
            None => return Err(EntityError::RequestDenied),
        }
    };
}

impl HostAdapter for RealHostAdapter {
    fn log_message(&self, message: &str) {
        if let (Some(f), Ok(msg)) = (self.funcs.LogMessage, to_cstring(message)) {
            let fmt = c"%s";
            unsafe { f(fmt.as_ptr(), msg.as_ptr()) };
        }
    }

    fn send_plugin_command(&self, command_id: u32, message: &str) -> HostResult<()> {
        let msg = to_cstring(message)?;
        let fmt = c"%s";
        code_result(call!(self, SendPluginCommand, command_id, fmt.as_ptr(), msg.as_ptr()))
    }

    fn get_time(&self) -> u32 {
        match self.funcs.GetTime {
            Some(f) => (unsafe { f() }) as u32,
            None => 0,
        }
    }

    fn get_server_settings(&self) -> CoreServerSettings {
        let mut raw = crate::abi::ServerSettings {
            structSize: std::mem::size_of::<crate::abi::ServerSettings>() as u32,
            serverName: [0; 128],
            maxPlayers: 0,
            port: 0,
            flags: 0,
        };
        if let Some(f) = self.funcs.GetServerSettings {
            unsafe { f(&mut raw) };
        }
        CoreServerSettings {
            server_name: unsafe { buf_to_string(&raw.serverName, 128) },
            max_players: raw.maxPlayers,
            port: raw.port as u16,
            flags: raw.flags,
        }
    }

    fn send_client_message(&self, player: i32, color: Color4, message: &str) -> HostResult<()> {
        let msg = to_cstring(message)?;
        let fmt = c"%s";
        code_result(call!(self, SendClientMessage, player, color.to_packed(), fmt.as_ptr(), msg.as_ptr()))
    }

    fn send_game_message(&self, player: i32, kind: i32, message: &str) -> HostResult<()> {
        let msg = to_cstring(message)?;
        let fmt = c"%s";
        code_result(call!(self, SendGameMessage, player, kind, fmt.as_ptr(), msg.as_ptr()))
    }

    fn send_client_script_data(&self, player: i32, data: &[u8]) -> HostResult<()> {
        code_result(call!(
            self,
            SendClientScriptData,
            player,
            data.as_ptr() as *const (),
            data.len()
        ))
    }

    fn get_player_name(&self, player: i32) -> HostResult<String> {
        let mut buf = [0 as c_char; NAME_BUF_LEN];
        let code = call!(self, GetPlayerName, player, buf.as_mut_ptr(), NAME_BUF_LEN);
        unsafe { get_fixed_string(code, &buf) }
    }

    fn get_player_position(&self, player: i32) -> HostResult<Vector3> {
        let (mut x, mut y, mut z) = (0.0f32, 0.0f32, 0.0f32);
        code_result(call!(self, GetPlayerPosition, player, &mut x, &mut y, &mut z))?;
        Ok(Vector3::new(x, y, z))
    }

    fn set_player_position(&self, player: i32, position: Vector3) -> HostResult<()> {
        code_result(call!(self, SetPlayerPosition, player, position.x, position.y, position.z))
    }

    fn get_player_heading(&self, player: i32) -> HostResult<f32> {
        Ok(call!(self, GetPlayerHeading, player))
    }

    fn set_player_heading(&self, player: i32, degrees: f32) -> HostResult<()> {
        code_result(call!(self, SetPlayerHeading, player, degrees))
    }

    fn get_player_health(&self, player: i32) -> HostResult<f32> {
        Ok(call!(self, GetPlayerHealth, player))
    }

    fn set_player_health(&self, player: i32, health: f32) -> HostResult<()> {
        code_result(call!(self, SetPlayerHealth, player, health))
    }

    fn get_player_armour(&self, player: i32) -> HostResult<f32> {
        Ok(call!(self, GetPlayerArmour, player))
    }

    fn set_player_armour(&self, player: i32, armour: f32) -> HostResult<()> {
        code_result(call!(self, SetPlayerArmour, player, armour))
    }

    fn get_player_weapon(&self, player: i32) -> HostResult<i32> {
        Ok(call!(self, GetPlayerWeapon, player))
    }

    fn set_player_weapon(&self, player: i32, weapon: i32, ammo: i32) -> HostResult<()> {
        code_result(call!(self, SetPlayerWeapon, player, weapon, ammo))
    }

    fn get_player_world(&self, player: i32) -> HostResult<i32> {
        Ok(call!(self, GetPlayerWorld, player))
    }

    fn set_player_world(&self, player: i32, world: i32) -> HostResult<()> {
        code_result(call!(self, SetPlayerWorld, player, world))
    }

    fn get_player_secondary_world(&self, player: i32) -> HostResult<i32> {
        Ok(call!(self, GetPlayerSecondaryWorld, player))
    }

    fn set_player_secondary_world(&self, player: i32, world: i32) -> HostResult<()> {
        code_result(call!(self, SetPlayerSecondaryWorld, player, world))
    }

    fn get_player_skin(&self, player: i32) -> HostResult<i32> {
        Ok(call!(self, GetPlayerSkin, player))
    }

    fn set_player_skin(&self, player: i32, skin: i32) -> HostResult<()> {
        code_result(call!(self, SetPlayerSkin, player, skin))
    }

    fn get_player_team(&self, player: i32) -> HostResult<i32> {
        Ok(call!(self, GetPlayerTeam, player))
    }

    fn set_player_team(&self, player: i32, team: i32) -> HostResult<()> {
        code_result(call!(self, SetPlayerTeam, player, team))
    }

    fn get_player_score(&self, player: i32) -> HostResult<i32> {
        Ok(call!(self, GetPlayerScore, player))
    }

    fn set_player_score(&self, player: i32, score: i32) -> HostResult<()> {
        code_result(call!(self, SetPlayerScore, player, score))
    }

    fn get_player_money(&self, player: i32) -> HostResult<i32> {
        Ok(call!(self, GetPlayerMoney, player))
    }

    fn set_player_money(&self, player: i32, money: i32) -> HostResult<()> {
        code_result(call!(self, SetPlayerMoney, player, money))
    }

    fn get_player_wanted_level(&self, player: i32) -> HostResult<i32> {
        Ok(call!(self, GetPlayerWantedLevel, player))
    }

    fn set_player_wanted_level(&self, player: i32, level: i32) -> HostResult<()> {
        code_result(call!(self, SetPlayerWantedLevel, player, level))
    }

    fn get_player_immunity_flags(&self, player: i32) -> HostResult<u32> {
        Ok(call!(self, GetPlayerImmunityFlags, player))
    }

    fn set_player_immunity_flags(&self, player: i32, flags: u32) -> HostResult<()> {
        code_result(call!(self, SetPlayerImmunityFlags, player, flags))
    }

    fn get_player_alpha(&self, player: i32) -> HostResult<u8> {
        Ok(call!(self, GetPlayerAlpha, player) as u8)
    }

    fn set_player_alpha(&self, player: i32, alpha: u8, fade_time: u32) -> HostResult<()> {
        code_result(call!(self, SetPlayerAlpha, player, alpha as i32, fade_time))
    }

    fn get_player_admin(&self, player: i32) -> HostResult<bool> {
        let toggle = call!(self, IsPlayerAdmin, player);
        let code = unsafe { self.last_error() };
        match code {
            vcmpError::None => Ok(toggle != 0),
            other => Err(EntityError::from_code(other as i32).unwrap_or(EntityError::RequestDenied)),
        }
    }

    fn set_player_admin(&self, player: i32, admin: bool) -> HostResult<()> {
        code_result(call!(self, SetPlayerAdmin, player, admin as u8))
    }

    fn get_player_option(&self, player: i32, option: i32) -> HostResult<bool> {
        let opt = crate::abi::vcmpPlayerOption::try_from(option).map_err(|_| EntityError::ArgumentOutOfBounds)?;
        let toggle = call!(self, GetPlayerOption, player, opt);
        let code = unsafe { self.last_error() };
        match code {
            vcmpError::None => Ok(toggle != 0),
            other => Err(EntityError::from_code(other as i32).unwrap_or(EntityError::RequestDenied)),
        }
    }

    fn set_player_option(&self, player: i32, option: i32, toggle: bool) -> HostResult<()> {
        let opt = crate::abi::vcmpPlayerOption::try_from(option).map_err(|_| EntityError::ArgumentOutOfBounds)?;
        code_result(call!(self, SetPlayerOption, player, opt, toggle as u8))
    }

    fn kick_player(&self, player: i32) -> HostResult<()> {
        code_result(call!(self, KickPlayer, player))
    }

    fn ban_player(&self, player: i32) -> HostResult<()> {
        code_result(call!(self, BanPlayer, player))
    }

    fn is_player_streamed_for_player(&self, player: i32, viewer: i32) -> HostResult<bool> {
        let toggle = call!(self, IsPlayerStreamedForPlayer, player, viewer);
        let code = unsafe { self.last_error() };
        match code {
            vcmpError::None => Ok(toggle != 0),
            other => Err(EntityError::from_code(other as i32).unwrap_or(EntityError::RequestDenied)),
        }
    }

    fn create_vehicle(&self, model: i32, world: i32, position: Vector3, heading: f32) -> HostResult<i32> {
        let handle = call!(self, CreateVehicle, model, world, position.x, position.y, position.z, heading, -1, -1);
        if handle < 0 {
            Err(EntityError::PoolExhausted)
        } else {
            Ok(handle)
        }
    }

    fn delete_vehicle(&self, vehicle: i32) -> HostResult<()> {
        code_result(call!(self, DeleteVehicle, vehicle))
    }

    fn get_vehicle_position(&self, vehicle: i32) -> HostResult<Vector3> {
        let (mut x, mut y, mut z) = (0.0f32, 0.0f32, 0.0f32);
        code_result(call!(self, GetVehiclePosition, vehicle, &mut x, &mut y, &mut z))?;
        Ok(Vector3::new(x, y, z))
    }

    fn set_vehicle_position(&self, vehicle: i32, position: Vector3) -> HostResult<()> {
        code_result(call!(self, SetVehiclePosition, vehicle, position.x, position.y, position.z, 0))
    }

    fn get_vehicle_rotation(&self, vehicle: i32) -> HostResult<Quaternion> {
        let (mut x, mut y, mut z, mut w) = (0.0f32, 0.0f32, 0.0f32, 0.0f32);
        code_result(call!(self, GetVehicleRotation, vehicle, &mut x, &mut y, &mut z, &mut w))?;
        Ok(Quaternion::new(x, y, z, w))
    }

    fn set_vehicle_rotation(&self, vehicle: i32, rotation: Quaternion) -> HostResult<()> {
        code_result(call!(self, SetVehicleRotation, vehicle, rotation.x, rotation.y, rotation.z, rotation.w))
    }

    fn get_vehicle_health(&self, vehicle: i32) -> HostResult<f32> {
        Ok(call!(self, GetVehicleHealth, vehicle))
    }

    fn set_vehicle_health(&self, vehicle: i32, health: f32) -> HostResult<()> {
        code_result(call!(self, SetVehicleHealth, vehicle, health))
    }

    fn get_vehicle_colour(&self, vehicle: i32) -> HostResult<(Color3, Color3)> {
        let (mut primary, mut secondary) = (0i32, 0i32);
        code_result(call!(self, GetVehicleColour, vehicle, &mut primary, &mut secondary))?;
        Ok((Color3::from_packed(primary as u32), Color3::from_packed(secondary as u32)))
    }

    fn set_vehicle_colour(&self, vehicle: i32, primary: Color3, secondary: Color3) -> HostResult<()> {
        code_result(call!(
            self,
            SetVehicleColour,
            vehicle,
            primary.to_packed() as i32,
            secondary.to_packed() as i32
        ))
    }

    fn get_vehicle_part_status(&self, vehicle: i32, part: PartId) -> HostResult<i32> {
        Ok(call!(self, GetVehiclePartStatus, vehicle, part))
    }

    fn set_vehicle_part_status(&self, vehicle: i32, part: PartId, status: i32) -> HostResult<()> {
        code_result(call!(self, SetVehiclePartStatus, vehicle, part, status))
    }

    fn get_vehicle_tyre_status(&self, vehicle: i32, tyre: PartId) -> HostResult<i32> {
        Ok(call!(self, GetVehicleTyreStatus, vehicle, tyre))
    }

    fn set_vehicle_tyre_status(&self, vehicle: i32, tyre: PartId, status: i32) -> HostResult<()> {
        code_result(call!(self, SetVehicleTyreStatus, vehicle, tyre, status))
    }

    fn get_vehicle_handling_rule(&self, rule: i32) -> HostResult<f64> {
        // The host's handling-rule table is keyed by (model, rule); the
        // core's shape (§4.C) only threads a rule index through, so this
        // adapter targets the default/global model slot (0).
        Ok(call!(self, GetHandlingRule, 0, rule))
    }

    fn set_vehicle_handling_rule(&self, rule: i32, value: f64) -> HostResult<()> {
        code_result(call!(self, SetHandlingRule, 0, rule, value))
    }

    fn create_pickup(&self, model: i32, world: i32, quantity: i32, position: Vector3) -> HostResult<i32> {
        let handle = call!(self, CreatePickup, model, world, quantity, position.x, position.y, position.z, 255, 1);
        if handle < 0 {
            Err(EntityError::PoolExhausted)
        } else {
            Ok(handle)
        }
    }

    fn delete_pickup(&self, pickup: i32) -> HostResult<()> {
        code_result(call!(self, DeletePickup, pickup))
    }

    fn get_pickup_position(&self, pickup: i32) -> HostResult<Vector3> {
        let (mut x, mut y, mut z) = (0.0f32, 0.0f32, 0.0f32);
        code_result(call!(self, GetPickupPosition, pickup, &mut x, &mut y, &mut z))?;
        Ok(Vector3::new(x, y, z))
    }

    fn set_pickup_position(&self, pickup: i32, position: Vector3) -> HostResult<()> {
        code_result(call!(self, SetPickupPosition, pickup, position.x, position.y, position.z))
    }

    fn get_pickup_alpha(&self, pickup: i32) -> HostResult<u8> {
        Ok(call!(self, GetPickupAlpha, pickup) as u8)
    }

    fn set_pickup_alpha(&self, pickup: i32, alpha: u8) -> HostResult<()> {
        code_result(call!(self, SetPickupAlpha, pickup, alpha as i32))
    }

    fn create_checkpoint(&self, player: i32, world: i32, position: Vector3, radius: f32, color: Color4) -> HostResult<i32> {
        let handle = call!(
            self,
            CreateCheckPoint,
            player,
            world,
            0,
            position.x,
            position.y,
            position.z,
            color.r as i32,
            color.g as i32,
            color.b as i32,
            color.a as i32,
            radius,
        );
        if handle < 0 {
            Err(EntityError::PoolExhausted)
        } else {
            Ok(handle)
        }
    }

    fn delete_checkpoint(&self, checkpoint: i32) -> HostResult<()> {
        code_result(call!(self, DeleteCheckPoint, checkpoint))
    }

    fn get_checkpoint_position(&self, checkpoint: i32) -> HostResult<Vector3> {
        let (mut x, mut y, mut z) = (0.0f32, 0.0f32, 0.0f32);
        code_result(call!(self, GetCheckPointPosition, checkpoint, &mut x, &mut y, &mut z))?;
        Ok(Vector3::new(x, y, z))
    }

    fn set_checkpoint_position(&self, checkpoint: i32, position: Vector3) -> HostResult<()> {
        code_result(call!(self, SetCheckPointPosition, checkpoint, position.x, position.y, position.z))
    }

    fn get_checkpoint_radius(&self, checkpoint: i32) -> HostResult<f32> {
        Ok(call!(self, GetCheckPointRadius, checkpoint))
    }

    fn set_checkpoint_radius(&self, checkpoint: i32, radius: f32) -> HostResult<()> {
        code_result(call!(self, SetCheckPointRadius, checkpoint, radius))
    }

    fn create_object(&self, model: i32, world: i32, position: Vector3) -> HostResult<i32> {
        let handle = call!(self, CreateObject, model, world, position.x, position.y, position.z, 255);
        if handle < 0 {
            Err(EntityError::PoolExhausted)
        } else {
            Ok(handle)
        }
    }

    fn delete_object(&self, object: i32) -> HostResult<()> {
        code_result(call!(self, DeleteObject, object))
    }

    fn get_object_position(&self, object: i32) -> HostResult<Vector3> {
        let (mut x, mut y, mut z) = (0.0f32, 0.0f32, 0.0f32);
        code_result(call!(self, GetObjectPosition, object, &mut x, &mut y, &mut z))?;
        Ok(Vector3::new(x, y, z))
    }

    fn set_object_position(&self, object: i32, position: Vector3) -> HostResult<()> {
        code_result(call!(self, SetObjectPosition, object, position.x, position.y, position.z))
    }

    fn create_coord_blip(&self, world: i32, position: Vector3, scale: i32, color: Color4, sprite: i32) -> HostResult<i32> {
        let handle = call!(
            self,
            CreateCoordBlip,
            -1,
            world,
            position.x,
            position.y,
            position.z,
            scale,
            color.to_packed(),
            sprite
        );
        if handle < 0 {
            Err(EntityError::PoolExhausted)
        } else {
            Ok(handle)
        }
    }

    fn destroy_coord_blip(&self, blip: i32) -> HostResult<()> {
        code_result(call!(self, DestroyCoordBlip, blip))
    }
}

/// Builds the [`CorePluginInfo`] a `VcmpPluginInit` call reports back to
/// the host (§2 "info fields ... API major/minor = 2/0").
pub fn plugin_info(name: &str, version: u32) -> CorePluginInfo {
    CorePluginInfo {
        name: name.to_owned(),
        version,
        api_major: crate::abi::PLUGIN_API_MAJOR,
        api_minor: crate::abi::PLUGIN_API_MINOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_result_maps_none_to_ok_and_codes_to_entity_error() {
        assert!(code_result(vcmpError::None).is_ok());
        assert_eq!(code_result(vcmpError::NoSuchEntity).unwrap_err(), EntityError::NoSuchEntity);
        assert_eq!(code_result(vcmpError::PoolExhausted).unwrap_err(), EntityError::PoolExhausted);
    }

    #[test]
    fn to_cstring_rejects_embedded_nul() {
        assert!(to_cstring("fine").is_ok());
        assert_eq!(to_cstring("bad\0string").unwrap_err(), EntityError::NullArgument);
    }

    #[test]
    fn unconfigured_function_table_fails_closed() {
        // A `PluginFuncs` straight off `Default` has every slot `None`
        // (§4.A) — every adapter call must report `RequestDenied`
        // rather than dereference a null pointer.
        let host = unsafe { RealHostAdapter::new(PluginFuncs::default()) };
        assert_eq!(host.send_plugin_command(0, "x").unwrap_err(), EntityError::RequestDenied);
        assert_eq!(host.get_time(), 0);
    }

    #[test]
    fn plugin_info_reports_the_wire_api_version() {
        let info = plugin_info("vcmp-core-plugin", 7);
        assert_eq!(info.api_major, 2);
        assert_eq!(info.api_minor, 0);
        assert_eq!(info.version, 7);
    }
}
