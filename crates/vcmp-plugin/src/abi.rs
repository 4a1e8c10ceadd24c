//! Raw C ABI mirror of the host's `vcmp.h` (§6.1): the `PluginFuncs`
//! function table handed in at load, the `PluginCallbacks` table handed
//! back, and the plain-old-data structs and enums that cross the
//! boundary. Field order and names match the header exactly — this is
//! the one place in the workspace where layout matters more than
//! idiom, mirroring `myq2-common::game_api`'s `game_import_t`/
//! `game_export_t` raw mirror of the Quake 2 DLL ABI.
//!
//! Nothing here is safe to call directly; [`crate::adapter::RealHostAdapter`]
//! is the safe boundary the rest of the workspace sees.

#![allow(non_snake_case, non_camel_case_types, dead_code)]

use std::os::raw::c_char;

pub const PLUGIN_API_MAJOR: u16 = 2;
pub const PLUGIN_API_MINOR: u16 = 0;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum vcmpError {
    None = 0,
    NoSuchEntity = 1,
    BufferTooSmall = 2,
    TooLargeInput = 3,
    ArgumentOutOfBounds = 4,
    NullArgument = 5,
    PoolExhausted = 6,
    InvalidName = 7,
    RequestDenied = 8,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum vcmpEntityPool {
    Vehicle = 1,
    Object = 2,
    Pickup = 3,
    Radio = 4,
    Blip = 7,
    CheckPoint = 8,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum vcmpDisconnectReason {
    Timeout = 0,
    Quit = 1,
    Kick = 2,
    Crash = 3,
    AntiCheat = 4,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum vcmpBodyPart {
    Body = 0,
    Torso = 1,
    LeftArm = 2,
    RightArm = 3,
    LeftLeg = 4,
    RightLeg = 5,
    Head = 6,
    InVehicle = 7,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum vcmpPlayerState {
    None = 0,
    Normal = 1,
    Aim = 2,
    Driver = 3,
    Passenger = 4,
    EnterDriver = 5,
    EnterPassenger = 6,
    Exit = 7,
    Unspawned = 8,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum vcmpPlayerUpdate {
    Normal = 0,
    Aiming = 1,
    Driver = 2,
    Passenger = 3,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum vcmpPlayerVehicle {
    Out = 0,
    Entering = 1,
    Exiting = 2,
    In = 3,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum vcmpVehicleSync {
    None = 0,
    Driver = 1,
    Passenger = 3,
    Near = 4,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum vcmpVehicleUpdate {
    DriverSync = 0,
    OtherSync = 1,
    Position = 2,
    Health = 4,
    Colour = 5,
    Rotation = 6,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum vcmpServerOption {
    SyncFrameLimiter = 0,
    FrameLimiter = 1,
    TaxiBoostJump = 2,
    DriveOnWater = 3,
    FastSwitch = 4,
    FriendlyFire = 5,
    DisableDriveBy = 6,
    PerfectHandling = 7,
    FlyingCars = 8,
    JumpSwitch = 9,
    ShowMarkers = 10,
    OnlyShowTeamMarkers = 11,
    StuntBike = 12,
    ShootInAir = 13,
    ShowNameTags = 14,
    JoinMessages = 15,
    DeathMessages = 16,
    ChatTagsEnabled = 17,
    UseClasses = 18,
    WallGlitch = 19,
    DisableBackfaceCulling = 20,
    DisableHeliBladeDamage = 21,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum vcmpPlayerOption {
    Controllable = 0,
    DriveBy = 1,
    WhiteScanlines = 2,
    GreenScanlines = 3,
    Widescreen = 4,
    ShowMarkers = 5,
    CanAttack = 6,
    HasMarker = 7,
    ChatTagsEnabled = 8,
    DrunkEffects = 9,
}

impl TryFrom<i32> for vcmpPlayerOption {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, ()> {
        use vcmpPlayerOption::*;
        Ok(match v {
            0 => Controllable,
            1 => DriveBy,
            2 => WhiteScanlines,
            3 => GreenScanlines,
            4 => Widescreen,
            5 => ShowMarkers,
            6 => CanAttack,
            7 => HasMarker,
            8 => ChatTagsEnabled,
            9 => DrunkEffects,
            _ => return Err(()),
        })
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum vcmpVehicleOption {
    DoorsLocked = 0,
    Alarm = 1,
    Lights = 2,
    RadioLocked = 3,
    Ghost = 4,
    Siren = 5,
}

/// `ServerSettings` (§6.1): `structSize` lets the host fill only the
/// fields it was built against, forward-compatibly.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ServerSettings {
    pub structSize: u32,
    pub serverName: [c_char; 128],
    pub maxPlayers: u32,
    pub port: u32,
    pub flags: u32,
}

/// `PluginInfo` (§2 "info fields are filled in with plugin name,
/// version, API major/minor = 2/0").
#[repr(C)]
#[derive(Clone, Copy)]
pub struct PluginInfo {
    pub structSize: u32,
    pub pluginId: u32,
    pub name: [c_char; 32],
    pub pluginVersion: u32,
    pub apiMajorVersion: u16,
    pub apiMinorVersion: u16,
}

impl Default for PluginInfo {
    fn default() -> Self {
        // SAFETY: every field is a primitive or an array of them; the
        // all-zero pattern is a valid `PluginInfo`.
        unsafe { std::mem::zeroed() }
    }
}

/// The host's inbound function table (§6.1 "Function table (inbound)").
/// ~250 functions; every entry is `Option` because `structSize` is the
/// only contractually-populated field for a plugin built against an
/// older API than the host's.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct PluginFuncs {
    pub structSize: u32,
    pub GetServerVersion: Option<unsafe extern "C" fn() -> u32>,
    pub GetServerSettings: Option<unsafe extern "C" fn(settings: *mut ServerSettings) -> vcmpError>,
    pub ExportFunctions: Option<unsafe extern "C" fn(pluginId: i32, functionList: *const *const (), size: usize) -> vcmpError>,
    pub GetNumberOfPlugins: Option<unsafe extern "C" fn() -> u32>,
    pub GetPluginInfo: Option<unsafe extern "C" fn(pluginId: i32, pluginInfo: *mut PluginInfo) -> vcmpError>,
    pub FindPlugin: Option<unsafe extern "C" fn(pluginName: *const c_char) -> i32>,
    pub GetPluginExports: Option<unsafe extern "C" fn(pluginId: i32, exportCount: *mut usize) -> *const *const ()>,
    pub SendPluginCommand: Option<unsafe extern "C" fn(commandIdentifier: u32, format: *const c_char, ...) -> vcmpError>,
    pub GetTime: Option<unsafe extern "C" fn() -> u64>,
    pub LogMessage: Option<unsafe extern "C" fn(format: *const c_char, ...) -> vcmpError>,
    pub GetLastError: Option<unsafe extern "C" fn() -> vcmpError>,
    pub SendClientScriptData: Option<unsafe extern "C" fn(playerId: i32, data: *const (), size: usize) -> vcmpError>,
    pub SendClientMessage: Option<unsafe extern "C" fn(playerId: i32, colour: u32, format: *const c_char, ...) -> vcmpError>,
    pub SendGameMessage: Option<unsafe extern "C" fn(playerId: i32, type_: i32, format: *const c_char, ...) -> vcmpError>,
    pub SetServerName: Option<unsafe extern "C" fn(text: *const c_char) -> vcmpError>,
    pub GetServerName: Option<unsafe extern "C" fn(buffer: *mut c_char, size: usize) -> vcmpError>,
    pub SetMaxPlayers: Option<unsafe extern "C" fn(maxPlayers: u32) -> vcmpError>,
    pub GetMaxPlayers: Option<unsafe extern "C" fn() -> u32>,
    pub SetServerPassword: Option<unsafe extern "C" fn(password: *const c_char) -> vcmpError>,
    pub GetServerPassword: Option<unsafe extern "C" fn(buffer: *mut c_char, size: usize) -> vcmpError>,
    pub SetGameModeText: Option<unsafe extern "C" fn(gameMode: *const c_char) -> vcmpError>,
    pub GetGameModeText: Option<unsafe extern "C" fn(buffer: *mut c_char, size: usize) -> vcmpError>,
    pub ShutdownServer: Option<unsafe extern "C" fn()>,
    pub SetServerOption: Option<unsafe extern "C" fn(option: vcmpServerOption, toggle: u8) -> vcmpError>,
    pub GetServerOption: Option<unsafe extern "C" fn(option: vcmpServerOption) -> u8>,
    pub SetWorldBounds: Option<unsafe extern "C" fn(maxX: f32, minX: f32, maxY: f32, minY: f32)>,
    pub GetWorldBounds: Option<unsafe extern "C" fn(maxXOut: *mut f32, minXOut: *mut f32, maxYOut: *mut f32, minYOut: *mut f32)>,
    pub SetWastedSettings: Option<unsafe extern "C" fn(deathTimer: u32, fadeTimer: u32, fadeInSpeed: f32, fadeOutSpeed: f32, fadeColour: u32, corpseFadeStart: u32, corpseFadeTime: u32)>,
    pub GetWastedSettings: Option<unsafe extern "C" fn(deathTimerOut: *mut u32, fadeTimerOut: *mut u32, fadeInSpeedOut: *mut f32, fadeOutSpeedOut: *mut f32, fadeColourOut: *mut u32, corpseFadeStartOut: *mut u32, corpseFadeTimeOut: *mut u32)>,
    pub SetTimeRate: Option<unsafe extern "C" fn(timeRate: i32)>,
    pub GetTimeRate: Option<unsafe extern "C" fn() -> i32>,
    pub SetHour: Option<unsafe extern "C" fn(hour: i32)>,
    pub GetHour: Option<unsafe extern "C" fn() -> i32>,
    pub SetMinute: Option<unsafe extern "C" fn(minute: i32)>,
    pub GetMinute: Option<unsafe extern "C" fn() -> i32>,
    pub SetWeather: Option<unsafe extern "C" fn(weather: i32)>,
    pub GetWeather: Option<unsafe extern "C" fn() -> i32>,
    pub SetGravity: Option<unsafe extern "C" fn(gravity: f32)>,
    pub GetGravity: Option<unsafe extern "C" fn() -> f32>,
    pub SetGameSpeed: Option<unsafe extern "C" fn(gameSpeed: f32)>,
    pub GetGameSpeed: Option<unsafe extern "C" fn() -> f32>,
    pub SetWaterLevel: Option<unsafe extern "C" fn(waterLevel: f32)>,
    pub GetWaterLevel: Option<unsafe extern "C" fn() -> f32>,
    pub SetMaximumFlightAltitude: Option<unsafe extern "C" fn(height: f32)>,
    pub GetMaximumFlightAltitude: Option<unsafe extern "C" fn() -> f32>,
    pub SetKillCommandDelay: Option<unsafe extern "C" fn(delay: i32)>,
    pub GetKillCommandDelay: Option<unsafe extern "C" fn() -> i32>,
    pub SetVehiclesForcedRespawnHeight: Option<unsafe extern "C" fn(height: f32)>,
    pub GetVehiclesForcedRespawnHeight: Option<unsafe extern "C" fn() -> f32>,
    pub CreateExplosion: Option<unsafe extern "C" fn(worldId: i32, type_: i32, x: f32, y: f32, z: f32, responsiblePlayerId: i32, atGroundLevel: u8) -> vcmpError>,
    pub PlaySound: Option<unsafe extern "C" fn(worldId: i32, soundId: i32, x: f32, y: f32, z: f32) -> vcmpError>,
    pub HideMapObject: Option<unsafe extern "C" fn(modelId: i32, tenthX: i16, tenthY: i16, tenthZ: i16)>,
    pub ShowMapObject: Option<unsafe extern "C" fn(modelId: i32, tenthX: i16, tenthY: i16, tenthZ: i16)>,
    pub ShowAllMapObjects: Option<unsafe extern "C" fn()>,
    pub SetWeaponDataValue: Option<unsafe extern "C" fn(weaponId: i32, fieldId: i32, value: f64) -> vcmpError>,
    pub GetWeaponDataValue: Option<unsafe extern "C" fn(weaponId: i32, fieldId: i32) -> f64>,
    pub ResetWeaponDataValue: Option<unsafe extern "C" fn(weaponId: i32, fieldId: i32) -> vcmpError>,
    pub IsWeaponDataValueModified: Option<unsafe extern "C" fn(weaponId: i32, fieldId: i32) -> u8>,
    pub ResetWeaponData: Option<unsafe extern "C" fn(weaponId: i32) -> vcmpError>,
    pub ResetAllWeaponData: Option<unsafe extern "C" fn()>,
    pub GetKeyBindUnusedSlot: Option<unsafe extern "C" fn() -> i32>,
    pub GetKeyBindData: Option<unsafe extern "C" fn(bindId: i32, isCalledOnReleaseOut: *mut u8, keyOneOut: *mut i32, keyTwoOut: *mut i32, keyThreeOut: *mut i32) -> vcmpError>,
    pub RegisterKeyBind: Option<unsafe extern "C" fn(bindId: i32, isCalledOnRelease: u8, keyOne: i32, keyTwo: i32, keyThree: i32) -> vcmpError>,
    pub RemoveKeyBind: Option<unsafe extern "C" fn(bindId: i32) -> vcmpError>,
    pub RemoveAllKeyBinds: Option<unsafe extern "C" fn()>,
    pub CreateCoordBlip: Option<unsafe extern "C" fn(index: i32, world: i32, x: f32, y: f32, z: f32, scale: i32, colour: u32, sprite: i32) -> i32>,
    pub DestroyCoordBlip: Option<unsafe extern "C" fn(index: i32) -> vcmpError>,
    pub GetCoordBlipInfo: Option<unsafe extern "C" fn(index: i32, worldOut: *mut i32, xOut: *mut f32, yOUt: *mut f32, zOut: *mut f32, scaleOut: *mut i32, colourOut: *mut u32, spriteOut: *mut i32) -> vcmpError>,
    pub AddRadioStream: Option<unsafe extern "C" fn(radioId: i32, radioName: *const c_char, radioUrl: *const c_char, isListed: u8) -> vcmpError>,
    pub RemoveRadioStream: Option<unsafe extern "C" fn(radioId: i32) -> vcmpError>,
    pub AddPlayerClass: Option<unsafe extern "C" fn(teamId: i32, colour: u32, modelIndex: i32, x: f32, y: f32, z: f32, angle: f32, weaponOne: i32, weaponOneAmmo: i32, weaponTwo: i32, weaponTwoAmmo: i32, weaponThree: i32, weaponThreeAmmo: i32) -> i32>,
    pub SetSpawnPlayerPosition: Option<unsafe extern "C" fn(x: f32, y: f32, z: f32)>,
    pub SetSpawnCameraPosition: Option<unsafe extern "C" fn(x: f32, y: f32, z: f32)>,
    pub SetSpawnCameraLookAt: Option<unsafe extern "C" fn(x: f32, y: f32, z: f32)>,
    pub IsPlayerAdmin: Option<unsafe extern "C" fn(playerId: i32) -> u8>,
    pub SetPlayerAdmin: Option<unsafe extern "C" fn(playerId: i32, toggle: u8) -> vcmpError>,
    pub GetPlayerIP: Option<unsafe extern "C" fn(playerId: i32, buffer: *mut c_char, size: usize) -> vcmpError>,
    pub GetPlayerUID: Option<unsafe extern "C" fn(playerId: i32, buffer: *mut c_char, size: usize) -> vcmpError>,
    pub GetPlayerUID2: Option<unsafe extern "C" fn(playerId: i32, buffer: *mut c_char, size: usize) -> vcmpError>,
    pub KickPlayer: Option<unsafe extern "C" fn(playerId: i32) -> vcmpError>,
    pub BanPlayer: Option<unsafe extern "C" fn(playerId: i32) -> vcmpError>,
    pub BanIP: Option<unsafe extern "C" fn(ipAddress: *mut c_char)>,
    pub UnbanIP: Option<unsafe extern "C" fn(ipAddress: *mut c_char) -> u8>,
    pub IsIPBanned: Option<unsafe extern "C" fn(ipAddress: *mut c_char) -> u8>,
    pub GetPlayerIdFromName: Option<unsafe extern "C" fn(name: *const c_char) -> i32>,
    pub IsPlayerConnected: Option<unsafe extern "C" fn(playerId: i32) -> u8>,
    pub IsPlayerStreamedForPlayer: Option<unsafe extern "C" fn(checkedPlayerId: i32, playerId: i32) -> u8>,
    pub GetPlayerKey: Option<unsafe extern "C" fn(playerId: i32) -> u32>,
    pub GetPlayerName: Option<unsafe extern "C" fn(playerId: i32, buffer: *mut c_char, size: usize) -> vcmpError>,
    pub SetPlayerName: Option<unsafe extern "C" fn(playerId: i32, name: *const c_char) -> vcmpError>,
    pub GetPlayerState: Option<unsafe extern "C" fn(playerId: i32) -> vcmpPlayerState>,
    pub SetPlayerOption: Option<unsafe extern "C" fn(playerId: i32, option: vcmpPlayerOption, toggle: u8) -> vcmpError>,
    pub GetPlayerOption: Option<unsafe extern "C" fn(playerId: i32, option: vcmpPlayerOption) -> u8>,
    pub SetPlayerWorld: Option<unsafe extern "C" fn(playerId: i32, world: i32) -> vcmpError>,
    pub GetPlayerWorld: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub SetPlayerSecondaryWorld: Option<unsafe extern "C" fn(playerId: i32, secondaryWorld: i32) -> vcmpError>,
    pub GetPlayerSecondaryWorld: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub GetPlayerUniqueWorld: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub IsPlayerWorldCompatible: Option<unsafe extern "C" fn(playerId: i32, world: i32) -> u8>,
    pub GetPlayerClass: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub SetPlayerTeam: Option<unsafe extern "C" fn(playerId: i32, teamId: i32) -> vcmpError>,
    pub GetPlayerTeam: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub SetPlayerSkin: Option<unsafe extern "C" fn(playerId: i32, skinId: i32) -> vcmpError>,
    pub GetPlayerSkin: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub SetPlayerColour: Option<unsafe extern "C" fn(playerId: i32, colour: u32) -> vcmpError>,
    pub GetPlayerColour: Option<unsafe extern "C" fn(playerId: i32) -> u32>,
    pub IsPlayerSpawned: Option<unsafe extern "C" fn(playerId: i32) -> u8>,
    pub ForcePlayerSpawn: Option<unsafe extern "C" fn(playerId: i32) -> vcmpError>,
    pub ForcePlayerSelect: Option<unsafe extern "C" fn(playerId: i32) -> vcmpError>,
    pub ForceAllSelect: Option<unsafe extern "C" fn()>,
    pub IsPlayerTyping: Option<unsafe extern "C" fn(playerId: i32) -> u8>,
    pub GivePlayerMoney: Option<unsafe extern "C" fn(playerId: i32, amount: i32) -> vcmpError>,
    pub SetPlayerMoney: Option<unsafe extern "C" fn(playerId: i32, amount: i32) -> vcmpError>,
    pub GetPlayerMoney: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub SetPlayerScore: Option<unsafe extern "C" fn(playerId: i32, score: i32) -> vcmpError>,
    pub GetPlayerScore: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub SetPlayerWantedLevel: Option<unsafe extern "C" fn(playerId: i32, level: i32) -> vcmpError>,
    pub GetPlayerWantedLevel: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub GetPlayerPing: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub GetPlayerFPS: Option<unsafe extern "C" fn(playerId: i32) -> f64>,
    pub SetPlayerHealth: Option<unsafe extern "C" fn(playerId: i32, health: f32) -> vcmpError>,
    pub GetPlayerHealth: Option<unsafe extern "C" fn(playerId: i32) -> f32>,
    pub SetPlayerArmour: Option<unsafe extern "C" fn(playerId: i32, armour: f32) -> vcmpError>,
    pub GetPlayerArmour: Option<unsafe extern "C" fn(playerId: i32) -> f32>,
    pub SetPlayerImmunityFlags: Option<unsafe extern "C" fn(playerId: i32, flags: u32) -> vcmpError>,
    pub GetPlayerImmunityFlags: Option<unsafe extern "C" fn(playerId: i32) -> u32>,
    pub SetPlayerPosition: Option<unsafe extern "C" fn(playerId: i32, x: f32, y: f32, z: f32) -> vcmpError>,
    pub GetPlayerPosition: Option<unsafe extern "C" fn(playerId: i32, xOut: *mut f32, yOut: *mut f32, zOut: *mut f32) -> vcmpError>,
    pub SetPlayerSpeed: Option<unsafe extern "C" fn(playerId: i32, x: f32, y: f32, z: f32) -> vcmpError>,
    pub GetPlayerSpeed: Option<unsafe extern "C" fn(playerId: i32, xOut: *mut f32, yOut: *mut f32, zOut: *mut f32) -> vcmpError>,
    pub AddPlayerSpeed: Option<unsafe extern "C" fn(playerId: i32, x: f32, y: f32, z: f32) -> vcmpError>,
    pub SetPlayerHeading: Option<unsafe extern "C" fn(playerId: i32, angle: f32) -> vcmpError>,
    pub GetPlayerHeading: Option<unsafe extern "C" fn(playerId: i32) -> f32>,
    pub SetPlayerAlpha: Option<unsafe extern "C" fn(playerId: i32, alpha: i32, fadeTime: u32) -> vcmpError>,
    pub GetPlayerAlpha: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub GetPlayerAimPosition: Option<unsafe extern "C" fn(playerId: i32, xOut: *mut f32, yOut: *mut f32, zOut: *mut f32) -> vcmpError>,
    pub GetPlayerAimDirection: Option<unsafe extern "C" fn(playerId: i32, xOut: *mut f32, yOut: *mut f32, zOut: *mut f32) -> vcmpError>,
    pub IsPlayerOnFire: Option<unsafe extern "C" fn(playerId: i32) -> u8>,
    pub IsPlayerCrouching: Option<unsafe extern "C" fn(playerId: i32) -> u8>,
    pub GetPlayerAction: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub GetPlayerGameKeys: Option<unsafe extern "C" fn(playerId: i32) -> u32>,
    pub PutPlayerInVehicle: Option<unsafe extern "C" fn(playerId: i32, vehicleId: i32, slotIndex: i32, makeRoom: u8, warp: u8) -> vcmpError>,
    pub RemovePlayerFromVehicle: Option<unsafe extern "C" fn(playerId: i32) -> vcmpError>,
    pub GetPlayerInVehicleStatus: Option<unsafe extern "C" fn(playerId: i32) -> vcmpPlayerVehicle>,
    pub GetPlayerInVehicleSlot: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub GetPlayerVehicleId: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub GivePlayerWeapon: Option<unsafe extern "C" fn(playerId: i32, weaponId: i32, ammo: i32) -> vcmpError>,
    pub SetPlayerWeapon: Option<unsafe extern "C" fn(playerId: i32, weaponId: i32, ammo: i32) -> vcmpError>,
    pub GetPlayerWeapon: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub GetPlayerWeaponAmmo: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub SetPlayerWeaponSlot: Option<unsafe extern "C" fn(playerId: i32, slot: i32) -> vcmpError>,
    pub GetPlayerWeaponSlot: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub GetPlayerWeaponAtSlot: Option<unsafe extern "C" fn(playerId: i32, slot: i32) -> i32>,
    pub GetPlayerAmmoAtSlot: Option<unsafe extern "C" fn(playerId: i32, slot: i32) -> i32>,
    pub RemovePlayerWeapon: Option<unsafe extern "C" fn(playerId: i32, weaponId: i32) -> vcmpError>,
    pub RemoveAllWeapons: Option<unsafe extern "C" fn(playerId: i32) -> vcmpError>,
    pub SetCameraPosition: Option<unsafe extern "C" fn(playerId: i32, posX: f32, posY: f32, posZ: f32, lookX: f32, lookY: f32, lookZ: f32) -> vcmpError>,
    pub RestoreCamera: Option<unsafe extern "C" fn(playerId: i32) -> vcmpError>,
    pub IsCameraLocked: Option<unsafe extern "C" fn(playerId: i32) -> u8>,
    pub SetPlayerAnimation: Option<unsafe extern "C" fn(playerId: i32, groupId: i32, animationId: i32) -> vcmpError>,
    pub GetPlayerStandingOnVehicle: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub GetPlayerStandingOnObject: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub IsPlayerAway: Option<unsafe extern "C" fn(playerId: i32) -> u8>,
    pub GetPlayerSpectateTarget: Option<unsafe extern "C" fn(playerId: i32) -> i32>,
    pub SetPlayerSpectateTarget: Option<unsafe extern "C" fn(playerId: i32, targetId: i32) -> vcmpError>,
    pub RedirectPlayerToServer: Option<unsafe extern "C" fn(playerId: i32, ip: *const c_char, port: u32, nick: *const c_char, serverPassword: *const c_char, userPassword: *const c_char) -> vcmpError>,
    pub CheckEntityExists: Option<unsafe extern "C" fn(entityPool: vcmpEntityPool, index: i32) -> u8>,
    pub CreateVehicle: Option<unsafe extern "C" fn(modelIndex: i32, world: i32, x: f32, y: f32, z: f32, angle: f32, primaryColour: i32, secondaryColour: i32) -> i32>,
    pub DeleteVehicle: Option<unsafe extern "C" fn(vehicleId: i32) -> vcmpError>,
    pub SetVehicleOption: Option<unsafe extern "C" fn(vehicleId: i32, option: vcmpVehicleOption, toggle: u8) -> vcmpError>,
    pub GetVehicleOption: Option<unsafe extern "C" fn(vehicleId: i32, option: vcmpVehicleOption) -> u8>,
    pub GetVehicleSyncSource: Option<unsafe extern "C" fn(vehicleId: i32) -> i32>,
    pub GetVehicleSyncType: Option<unsafe extern "C" fn(vehicleId: i32) -> vcmpVehicleSync>,
    pub IsVehicleStreamedForPlayer: Option<unsafe extern "C" fn(vehicleId: i32, playerId: i32) -> u8>,
    pub SetVehicleWorld: Option<unsafe extern "C" fn(vehicleId: i32, world: i32) -> vcmpError>,
    pub GetVehicleWorld: Option<unsafe extern "C" fn(vehicleId: i32) -> i32>,
    pub GetVehicleModel: Option<unsafe extern "C" fn(vehicleId: i32) -> i32>,
    pub GetVehicleOccupant: Option<unsafe extern "C" fn(vehicleId: i32, slotIndex: i32) -> i32>,
    pub RespawnVehicle: Option<unsafe extern "C" fn(vehicleId: i32) -> vcmpError>,
    pub SetVehicleImmunityFlags: Option<unsafe extern "C" fn(vehicleId: i32, immunityFlags: u32) -> vcmpError>,
    pub GetVehicleImmunityFlags: Option<unsafe extern "C" fn(vehicleId: i32) -> u32>,
    pub ExplodeVehicle: Option<unsafe extern "C" fn(vehicleId: i32) -> vcmpError>,
    pub IsVehicleWrecked: Option<unsafe extern "C" fn(vehicleId: i32) -> u8>,
    pub SetVehiclePosition: Option<unsafe extern "C" fn(vehicleId: i32, x: f32, y: f32, z: f32, removeOccupants: u8) -> vcmpError>,
    pub GetVehiclePosition: Option<unsafe extern "C" fn(vehicleId: i32, xOut: *mut f32, yOut: *mut f32, zOut: *mut f32) -> vcmpError>,
    pub SetVehicleRotation: Option<unsafe extern "C" fn(vehicleId: i32, x: f32, y: f32, z: f32, w: f32) -> vcmpError>,
    pub SetVehicleRotationEuler: Option<unsafe extern "C" fn(vehicleId: i32, x: f32, y: f32, z: f32) -> vcmpError>,
    pub GetVehicleRotation: Option<unsafe extern "C" fn(vehicleId: i32, xOut: *mut f32, yOut: *mut f32, zOut: *mut f32, wOut: *mut f32) -> vcmpError>,
    pub GetVehicleRotationEuler: Option<unsafe extern "C" fn(vehicleId: i32, xOut: *mut f32, yOut: *mut f32, zOut: *mut f32) -> vcmpError>,
    pub SetVehicleSpeed: Option<unsafe extern "C" fn(vehicleId: i32, x: f32, y: f32, z: f32, add: u8, relative: u8) -> vcmpError>,
    pub GetVehicleSpeed: Option<unsafe extern "C" fn(vehicleId: i32, xOut: *mut f32, yOut: *mut f32, zOut: *mut f32, relative: u8) -> vcmpError>,
    pub SetVehicleTurnSpeed: Option<unsafe extern "C" fn(vehicleId: i32, x: f32, y: f32, z: f32, add: u8, relative: u8) -> vcmpError>,
    pub GetVehicleTurnSpeed: Option<unsafe extern "C" fn(vehicleId: i32, xOut: *mut f32, yOut: *mut f32, zOut: *mut f32, relative: u8) -> vcmpError>,
    pub SetVehicleSpawnPosition: Option<unsafe extern "C" fn(vehicleId: i32, x: f32, y: f32, z: f32) -> vcmpError>,
    pub GetVehicleSpawnPosition: Option<unsafe extern "C" fn(vehicleId: i32, xOut: *mut f32, yOut: *mut f32, zOut: *mut f32) -> vcmpError>,
    pub SetVehicleSpawnRotation: Option<unsafe extern "C" fn(vehicleId: i32, x: f32, y: f32, z: f32, w: f32) -> vcmpError>,
    pub SetVehicleSpawnRotationEuler: Option<unsafe extern "C" fn(vehicleId: i32, x: f32, y: f32, z: f32) -> vcmpError>,
    pub GetVehicleSpawnRotation: Option<unsafe extern "C" fn(vehicleId: i32, xOut: *mut f32, yOut: *mut f32, zOut: *mut f32, wOut: *mut f32) -> vcmpError>,
    pub GetVehicleSpawnRotationEuler: Option<unsafe extern "C" fn(vehicleId: i32, xOut: *mut f32, yOut: *mut f32, zOut: *mut f32) -> vcmpError>,
    pub SetVehicleIdleRespawnTimer: Option<unsafe extern "C" fn(vehicleId: i32, millis: u32) -> vcmpError>,
    pub GetVehicleIdleRespawnTimer: Option<unsafe extern "C" fn(vehicleId: i32) -> u32>,
    pub SetVehicleHealth: Option<unsafe extern "C" fn(vehicleId: i32, health: f32) -> vcmpError>,
    pub GetVehicleHealth: Option<unsafe extern "C" fn(vehicleId: i32) -> f32>,
    pub SetVehicleColour: Option<unsafe extern "C" fn(vehicleId: i32, primaryColour: i32, secondaryColour: i32) -> vcmpError>,
    pub GetVehicleColour: Option<unsafe extern "C" fn(vehicleId: i32, primaryColourOut: *mut i32, secondaryColourOut: *mut i32) -> vcmpError>,
    pub SetVehiclePartStatus: Option<unsafe extern "C" fn(vehicleId: i32, partId: i32, status: i32) -> vcmpError>,
    pub GetVehiclePartStatus: Option<unsafe extern "C" fn(vehicleId: i32, partId: i32) -> i32>,
    pub SetVehicleTyreStatus: Option<unsafe extern "C" fn(vehicleId: i32, tyreId: i32, status: i32) -> vcmpError>,
    pub GetVehicleTyreStatus: Option<unsafe extern "C" fn(vehicleId: i32, tyreId: i32) -> i32>,
    pub SetVehicleDamageData: Option<unsafe extern "C" fn(vehicleId: i32, damageData: u32) -> vcmpError>,
    pub GetVehicleDamageData: Option<unsafe extern "C" fn(vehicleId: i32) -> u32>,
    pub SetVehicleRadio: Option<unsafe extern "C" fn(vehicleId: i32, radioId: i32) -> vcmpError>,
    pub GetVehicleRadio: Option<unsafe extern "C" fn(vehicleId: i32) -> i32>,
    pub GetVehicleTurretRotation: Option<unsafe extern "C" fn(vehicleId: i32, horizontalOut: *mut f32, verticalOut: *mut f32) -> vcmpError>,
    pub ResetAllVehicleHandlings: Option<unsafe extern "C" fn()>,
    pub ExistsHandlingRule: Option<unsafe extern "C" fn(modelIndex: i32, ruleIndex: i32) -> u8>,
    pub SetHandlingRule: Option<unsafe extern "C" fn(modelIndex: i32, ruleIndex: i32, value: f64) -> vcmpError>,
    pub GetHandlingRule: Option<unsafe extern "C" fn(modelIndex: i32, ruleIndex: i32) -> f64>,
    pub ResetHandlingRule: Option<unsafe extern "C" fn(modelIndex: i32, ruleIndex: i32) -> vcmpError>,
    pub ResetHandling: Option<unsafe extern "C" fn(modelIndex: i32) -> vcmpError>,
    pub ExistsInstHandlingRule: Option<unsafe extern "C" fn(vehicleId: i32, ruleIndex: i32) -> u8>,
    pub SetInstHandlingRule: Option<unsafe extern "C" fn(vehicleId: i32, ruleIndex: i32, value: f64) -> vcmpError>,
    pub GetInstHandlingRule: Option<unsafe extern "C" fn(vehicleId: i32, ruleIndex: i32) -> f64>,
    pub ResetInstHandlingRule: Option<unsafe extern "C" fn(vehicleId: i32, ruleIndex: i32) -> vcmpError>,
    pub ResetInstHandling: Option<unsafe extern "C" fn(vehicleId: i32) -> vcmpError>,
    pub CreatePickup: Option<unsafe extern "C" fn(modelIndex: i32, world: i32, quantity: i32, x: f32, y: f32, z: f32, alpha: i32, isAutomatic: u8) -> i32>,
    pub DeletePickup: Option<unsafe extern "C" fn(pickupId: i32) -> vcmpError>,
    pub IsPickupStreamedForPlayer: Option<unsafe extern "C" fn(pickupId: i32, playerId: i32) -> u8>,
    pub SetPickupWorld: Option<unsafe extern "C" fn(pickupId: i32, world: i32) -> vcmpError>,
    pub GetPickupWorld: Option<unsafe extern "C" fn(pickupId: i32) -> i32>,
    pub SetPickupAlpha: Option<unsafe extern "C" fn(pickupId: i32, alpha: i32) -> vcmpError>,
    pub GetPickupAlpha: Option<unsafe extern "C" fn(pickupId: i32) -> i32>,
    pub SetPickupIsAutomatic: Option<unsafe extern "C" fn(pickupId: i32, toggle: u8) -> vcmpError>,
    pub IsPickupAutomatic: Option<unsafe extern "C" fn(pickupId: i32) -> u8>,
    pub SetPickupAutoTimer: Option<unsafe extern "C" fn(pickupId: i32, durationMillis: u32) -> vcmpError>,
    pub GetPickupAutoTimer: Option<unsafe extern "C" fn(pickupId: i32) -> u32>,
    pub RefreshPickup: Option<unsafe extern "C" fn(pickupId: i32) -> vcmpError>,
    pub SetPickupPosition: Option<unsafe extern "C" fn(pickupId: i32, x: f32, y: f32, z: f32) -> vcmpError>,
    pub GetPickupPosition: Option<unsafe extern "C" fn(pickupId: i32, xOut: *mut f32, yOut: *mut f32, zOut: *mut f32) -> vcmpError>,
    pub GetPickupModel: Option<unsafe extern "C" fn(pickupId: i32) -> i32>,
    pub GetPickupQuantity: Option<unsafe extern "C" fn(pickupId: i32) -> i32>,
    pub CreateCheckPoint: Option<unsafe extern "C" fn(playerId: i32, world: i32, isSphere: u8, x: f32, y: f32, z: f32, red: i32, green: i32, blue: i32, alpha: i32, radius: f32) -> i32>,
    pub DeleteCheckPoint: Option<unsafe extern "C" fn(checkPointId: i32) -> vcmpError>,
    pub IsCheckPointStreamedForPlayer: Option<unsafe extern "C" fn(checkPointId: i32, playerId: i32) -> u8>,
    pub IsCheckPointSphere: Option<unsafe extern "C" fn(checkPointId: i32) -> u8>,
    pub SetCheckPointWorld: Option<unsafe extern "C" fn(checkPointId: i32, world: i32) -> vcmpError>,
    pub GetCheckPointWorld: Option<unsafe extern "C" fn(checkPointId: i32) -> i32>,
    pub SetCheckPointColour: Option<unsafe extern "C" fn(checkPointId: i32, red: i32, green: i32, blue: i32, alpha: i32) -> vcmpError>,
    pub GetCheckPointColour: Option<unsafe extern "C" fn(checkPointId: i32, redOut: *mut i32, greenOut: *mut i32, blueOut: *mut i32, alphaOut: *mut i32) -> vcmpError>,
    pub SetCheckPointPosition: Option<unsafe extern "C" fn(checkPointId: i32, x: f32, y: f32, z: f32) -> vcmpError>,
    pub GetCheckPointPosition: Option<unsafe extern "C" fn(checkPointId: i32, xOut: *mut f32, yOut: *mut f32, zOut: *mut f32) -> vcmpError>,
    pub SetCheckPointRadius: Option<unsafe extern "C" fn(checkPointId: i32, radius: f32) -> vcmpError>,
    pub GetCheckPointRadius: Option<unsafe extern "C" fn(checkPointId: i32) -> f32>,
    pub GetCheckPointOwner: Option<unsafe extern "C" fn(checkPointId: i32) -> i32>,
    pub CreateObject: Option<unsafe extern "C" fn(modelIndex: i32, world: i32, x: f32, y: f32, z: f32, alpha: i32) -> i32>,
    pub DeleteObject: Option<unsafe extern "C" fn(objectId: i32) -> vcmpError>,
    pub IsObjectStreamedForPlayer: Option<unsafe extern "C" fn(objectId: i32, playerId: i32) -> u8>,
    pub GetObjectModel: Option<unsafe extern "C" fn(objectId: i32) -> i32>,
    pub SetObjectWorld: Option<unsafe extern "C" fn(objectId: i32, world: i32) -> vcmpError>,
    pub GetObjectWorld: Option<unsafe extern "C" fn(objectId: i32) -> i32>,
    pub SetObjectAlpha: Option<unsafe extern "C" fn(objectId: i32, alpha: i32, duration: u32) -> vcmpError>,
    pub GetObjectAlpha: Option<unsafe extern "C" fn(objectId: i32) -> i32>,
    pub MoveObjectTo: Option<unsafe extern "C" fn(objectId: i32, x: f32, y: f32, z: f32, duration: u32) -> vcmpError>,
    pub MoveObjectBy: Option<unsafe extern "C" fn(objectId: i32, x: f32, y: f32, z: f32, duration: u32) -> vcmpError>,
    pub SetObjectPosition: Option<unsafe extern "C" fn(objectId: i32, x: f32, y: f32, z: f32) -> vcmpError>,
    pub GetObjectPosition: Option<unsafe extern "C" fn(objectId: i32, xOut: *mut f32, yOut: *mut f32, zOut: *mut f32) -> vcmpError>,
    pub RotateObjectTo: Option<unsafe extern "C" fn(objectId: i32, x: f32, y: f32, z: f32, w: f32, duration: u32) -> vcmpError>,
    pub RotateObjectToEuler: Option<unsafe extern "C" fn(objectId: i32, x: f32, y: f32, z: f32, duration: u32) -> vcmpError>,
    pub RotateObjectBy: Option<unsafe extern "C" fn(objectId: i32, x: f32, y: f32, z: f32, w: f32, duration: u32) -> vcmpError>,
    pub RotateObjectByEuler: Option<unsafe extern "C" fn(objectId: i32, x: f32, y: f32, z: f32, duration: u32) -> vcmpError>,
    pub GetObjectRotation: Option<unsafe extern "C" fn(objectId: i32, xOut: *mut f32, yOut: *mut f32, zOut: *mut f32, wOut: *mut f32) -> vcmpError>,
    pub GetObjectRotationEuler: Option<unsafe extern "C" fn(objectId: i32, xOut: *mut f32, yOut: *mut f32, zOut: *mut f32) -> vcmpError>,
    pub SetObjectShotReportEnabled: Option<unsafe extern "C" fn(objectId: i32, toggle: u8) -> vcmpError>,
    pub IsObjectShotReportEnabled: Option<unsafe extern "C" fn(objectId: i32) -> u8>,
    pub SetObjectTouchedReportEnabled: Option<unsafe extern "C" fn(objectId: i32, toggle: u8) -> vcmpError>,
    pub IsObjectTouchedReportEnabled: Option<unsafe extern "C" fn(objectId: i32) -> u8>,
}

/// The host's outbound callback table (§6.1 "Callback table (outbound)").
/// `VcmpPluginInit` fills every field with a trampoline that forwards
/// into the process's single [`crate::RUNTIME`].
#[repr(C)]
#[derive(Clone, Copy)]
pub struct PluginCallbacks {
    pub structSize: u32,

    pub OnServerInitialise: Option<unsafe extern "C" fn() -> u8>,
    pub OnServerShutdown: Option<unsafe extern "C" fn()>,
    pub OnServerFrame: Option<unsafe extern "C" fn(elapsedTime: f32)>,

    pub OnPluginCommand: Option<unsafe extern "C" fn(commandIdentifier: u32, message: *const c_char) -> u8>,
    pub OnIncomingConnection: Option<
        unsafe extern "C" fn(playerName: *mut c_char, nameBufferSize: usize, userPassword: *const c_char, ipAddress: *const c_char) -> u8,
    >,
    pub OnClientScriptData: Option<unsafe extern "C" fn(playerId: i32, data: *const u8, size: usize)>,

    pub OnPlayerConnect: Option<unsafe extern "C" fn(playerId: i32)>,
    pub OnPlayerDisconnect: Option<unsafe extern "C" fn(playerId: i32, reason: vcmpDisconnectReason)>,

    pub OnPlayerRequestClass: Option<unsafe extern "C" fn(playerId: i32, offset: i32) -> u8>,
    pub OnPlayerRequestSpawn: Option<unsafe extern "C" fn(playerId: i32) -> u8>,
    pub OnPlayerSpawn: Option<unsafe extern "C" fn(playerId: i32)>,
    pub OnPlayerDeath: Option<unsafe extern "C" fn(playerId: i32, killerId: i32, reason: i32, bodyPart: vcmpBodyPart)>,
    pub OnPlayerUpdate: Option<unsafe extern "C" fn(playerId: i32, updateType: vcmpPlayerUpdate)>,

    pub OnPlayerRequestEnterVehicle: Option<unsafe extern "C" fn(playerId: i32, vehicleId: i32, slotIndex: i32) -> u8>,
    pub OnPlayerEnterVehicle: Option<unsafe extern "C" fn(playerId: i32, vehicleId: i32, slotIndex: i32)>,
    pub OnPlayerExitVehicle: Option<unsafe extern "C" fn(playerId: i32, vehicleId: i32)>,

    pub OnPlayerNameChange: Option<unsafe extern "C" fn(playerId: i32, oldName: *const c_char, newName: *const c_char)>,
    pub OnPlayerStateChange: Option<unsafe extern "C" fn(playerId: i32, oldState: vcmpPlayerState, newState: vcmpPlayerState)>,
    pub OnPlayerActionChange: Option<unsafe extern "C" fn(playerId: i32, oldAction: i32, newAction: i32)>,
    pub OnPlayerOnFireChange: Option<unsafe extern "C" fn(playerId: i32, isOnFire: u8)>,
    pub OnPlayerCrouchChange: Option<unsafe extern "C" fn(playerId: i32, isCrouching: u8)>,
    pub OnPlayerGameKeysChange: Option<unsafe extern "C" fn(playerId: i32, oldKeys: u32, newKeys: u32)>,
    pub OnPlayerBeginTyping: Option<unsafe extern "C" fn(playerId: i32)>,
    pub OnPlayerEndTyping: Option<unsafe extern "C" fn(playerId: i32)>,
    pub OnPlayerAwayChange: Option<unsafe extern "C" fn(playerId: i32, isAway: u8)>,

    pub OnPlayerMessage: Option<unsafe extern "C" fn(playerId: i32, message: *const c_char) -> u8>,
    pub OnPlayerCommand: Option<unsafe extern "C" fn(playerId: i32, message: *const c_char) -> u8>,
    pub OnPlayerPrivateMessage: Option<unsafe extern "C" fn(playerId: i32, targetPlayerId: i32, message: *const c_char) -> u8>,

    pub OnPlayerKeyBindDown: Option<unsafe extern "C" fn(playerId: i32, bindId: i32)>,
    pub OnPlayerKeyBindUp: Option<unsafe extern "C" fn(playerId: i32, bindId: i32)>,
    pub OnPlayerSpectate: Option<unsafe extern "C" fn(playerId: i32, targetPlayerId: i32)>,
    pub OnPlayerCrashReport: Option<unsafe extern "C" fn(playerId: i32, report: *const c_char)>,

    pub OnVehicleUpdate: Option<unsafe extern "C" fn(vehicleId: i32, updateType: vcmpVehicleUpdate)>,
    pub OnVehicleExplode: Option<unsafe extern "C" fn(vehicleId: i32)>,
    pub OnVehicleRespawn: Option<unsafe extern "C" fn(vehicleId: i32)>,

    pub OnObjectShot: Option<unsafe extern "C" fn(objectId: i32, playerId: i32, weaponId: i32)>,
    pub OnObjectTouched: Option<unsafe extern "C" fn(objectId: i32, playerId: i32)>,

    pub OnPickupPickAttempt: Option<unsafe extern "C" fn(pickupId: i32, playerId: i32) -> u8>,
    pub OnPickupPicked: Option<unsafe extern "C" fn(pickupId: i32, playerId: i32)>,
    pub OnPickupRespawn: Option<unsafe extern "C" fn(pickupId: i32)>,

    pub OnCheckpointEntered: Option<unsafe extern "C" fn(checkPointId: i32, playerId: i32)>,
    pub OnCheckpointExited: Option<unsafe extern "C" fn(checkPointId: i32, playerId: i32)>,

    pub OnEntityPoolChange: Option<unsafe extern "C" fn(entityType: vcmpEntityPool, entityId: i32, isDeleted: u8)>,
    pub OnServerPerformanceReport: Option<unsafe extern "C" fn(entryCount: usize, descriptions: *const *const c_char, times: *const u64)>,
}

impl Default for PluginFuncs {
    fn default() -> Self {
        // SAFETY: every field is `Option<fn ptr>`; the all-zero bit
        // pattern is `None` for every one of them.
        unsafe { std::mem::zeroed() }
    }
}

impl Default for PluginCallbacks {
    fn default() -> Self {
        Self {
            structSize: std::mem::size_of::<PluginCallbacks>() as u32,
            OnServerInitialise: None,
            OnServerShutdown: None,
            OnServerFrame: None,
            OnPluginCommand: None,
            OnIncomingConnection: None,
            OnClientScriptData: None,
            OnPlayerConnect: None,
            OnPlayerDisconnect: None,
            OnPlayerRequestClass: None,
            OnPlayerRequestSpawn: None,
            OnPlayerSpawn: None,
            OnPlayerDeath: None,
            OnPlayerUpdate: None,
            OnPlayerRequestEnterVehicle: None,
            OnPlayerEnterVehicle: None,
            OnPlayerExitVehicle: None,
            OnPlayerNameChange: None,
            OnPlayerStateChange: None,
            OnPlayerActionChange: None,
            OnPlayerOnFireChange: None,
            OnPlayerCrouchChange: None,
            OnPlayerGameKeysChange: None,
            OnPlayerBeginTyping: None,
            OnPlayerEndTyping: None,
            OnPlayerAwayChange: None,
            OnPlayerMessage: None,
            OnPlayerCommand: None,
            OnPlayerPrivateMessage: None,
            OnPlayerKeyBindDown: None,
            OnPlayerKeyBindUp: None,
            OnPlayerSpectate: None,
            OnPlayerCrashReport: None,
            OnVehicleUpdate: None,
            OnVehicleExplode: None,
            OnVehicleRespawn: None,
            OnObjectShot: None,
            OnObjectTouched: None,
            OnPickupPickAttempt: None,
            OnPickupPicked: None,
            OnPickupRespawn: None,
            OnCheckpointEntered: None,
            OnCheckpointExited: None,
            OnEntityPoolChange: None,
            OnServerPerformanceReport: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_function_table_is_every_field_none() {
        let funcs = PluginFuncs::default();
        assert!(funcs.LogMessage.is_none());
        assert!(funcs.GetPluginExports.is_none());
        assert!(funcs.DestroyCoordBlip.is_none());
    }

    #[test]
    fn player_option_try_from_accepts_the_ten_real_values_and_rejects_the_rest() {
        assert_eq!(vcmpPlayerOption::try_from(0), Ok(vcmpPlayerOption::Controllable));
        assert_eq!(vcmpPlayerOption::try_from(9), Ok(vcmpPlayerOption::DrunkEffects));
        assert!(vcmpPlayerOption::try_from(10).is_err());
        assert!(vcmpPlayerOption::try_from(-1).is_err());
    }

    #[test]
    fn default_callbacks_struct_size_matches_the_real_layout() {
        let callbacks = PluginCallbacks::default();
        assert_eq!(callbacks.structSize as usize, std::mem::size_of::<PluginCallbacks>());
    }
}
