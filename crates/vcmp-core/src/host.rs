//! Host ABI adapter (§4.A): the boundary between the core and the game
//! server's `PluginFuncs` function table / `PluginCallbacks` vtable.
//!
//! Converted from `myq2-game/src/game_import.rs`'s `GameImport` trait: a
//! plain trait standing in for the C function-pointer table, called
//! through a reference rather than a mutable global (per
//! SPEC_FULL.md's resolution of the "`Core::Get()` singleton" design
//! note — the real plugin crate constructs one `HostAdapter` impl at
//! `plugin_init` and threads it through a `Runtime`, there is no
//! process-wide static in this crate).
//!
//! All side effects on the game world happen through this trait. Every
//! fallible host call returns `HostResult<T>` (`Result<T, EntityError>`,
//! §7); a boolean-returning call that can also fail (the `GetPlayerOption`
//! family) is modeled as `HostResult<bool>`, not `bool`, so the adapter
//! implementation can surface the host's last-error slot without losing
//! information (§4.A).

use vcmp_common::{Color3, Color4, EntityError, HostResult, Quaternion, Vector3};

/// `PluginInfo` as handed to the host at `plugin_init` (§2 Host ABI adapter).
#[derive(Debug, Clone)]
pub struct PluginInfo {
    pub name: String,
    pub version: u32,
    pub api_major: u16,
    pub api_minor: u16,
}

impl Default for PluginInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: 0,
            api_major: 2,
            api_minor: 0,
        }
    }
}

/// A subset of the host's `ServerSettings` struct.
#[derive(Debug, Clone, Default)]
pub struct ServerSettings {
    pub server_name: String,
    pub max_players: u32,
    pub port: u16,
    pub flags: u32,
}

/// Part-status / tyre-status style key-value pair used by vehicle
/// mutators (§4.E vehicle part-status/tyre-status events).
pub type PartId = i32;

/// The host's function table, modeled as a trait so the core never holds
/// a mutable global and the test suite can supply a deterministic mock
/// (§9 design notes: "a host-adapter interface object passed by
/// reference/handle to each component").
pub trait HostAdapter {
    // ---- Plugin system ----
    /// The single user-visible logging channel (§7): routes to the host's
    /// `LogMessage`. Never used for the core's own internal diagnostics —
    /// those go through `tracing` (SPEC_FULL.md §10.B).
    fn log_message(&self, message: &str);
    fn send_plugin_command(&self, command_id: u32, message: &str) -> HostResult<()>;
    /// Monotonic server time in milliseconds, from the host's `GetTime`.
    fn get_time(&self) -> u32;
    fn get_server_settings(&self) -> ServerSettings;

    // ---- Client messaging ----
    fn send_client_message(&self, player: i32, color: Color4, message: &str) -> HostResult<()>;
    fn send_game_message(&self, player: i32, kind: i32, message: &str) -> HostResult<()>;
    fn send_client_script_data(&self, player: i32, data: &[u8]) -> HostResult<()>;

    // ---- Player properties ----
    fn get_player_name(&self, player: i32) -> HostResult<String>;
    fn get_player_position(&self, player: i32) -> HostResult<Vector3>;
    fn set_player_position(&self, player: i32, position: Vector3) -> HostResult<()>;
    fn get_player_heading(&self, player: i32) -> HostResult<f32>;
    fn set_player_heading(&self, player: i32, degrees: f32) -> HostResult<()>;
    fn get_player_health(&self, player: i32) -> HostResult<f32>;
    fn set_player_health(&self, player: i32, health: f32) -> HostResult<()>;
    fn get_player_armour(&self, player: i32) -> HostResult<f32>;
    fn set_player_armour(&self, player: i32, armour: f32) -> HostResult<()>;
    fn get_player_weapon(&self, player: i32) -> HostResult<i32>;
    fn set_player_weapon(&self, player: i32, weapon: i32, ammo: i32) -> HostResult<()>;
    fn get_player_world(&self, player: i32) -> HostResult<i32>;
    fn set_player_world(&self, player: i32, world: i32) -> HostResult<()>;
    fn get_player_secondary_world(&self, player: i32) -> HostResult<i32>;
    fn set_player_secondary_world(&self, player: i32, world: i32) -> HostResult<()>;
    fn get_player_skin(&self, player: i32) -> HostResult<i32>;
    fn set_player_skin(&self, player: i32, skin: i32) -> HostResult<()>;
    fn get_player_team(&self, player: i32) -> HostResult<i32>;
    fn set_player_team(&self, player: i32, team: i32) -> HostResult<()>;
    fn get_player_score(&self, player: i32) -> HostResult<i32>;
    fn set_player_score(&self, player: i32, score: i32) -> HostResult<()>;
    fn get_player_money(&self, player: i32) -> HostResult<i32>;
    fn set_player_money(&self, player: i32, money: i32) -> HostResult<()>;
    fn get_player_wanted_level(&self, player: i32) -> HostResult<i32>;
    fn set_player_wanted_level(&self, player: i32, level: i32) -> HostResult<()>;
    fn get_player_immunity_flags(&self, player: i32) -> HostResult<u32>;
    fn set_player_immunity_flags(&self, player: i32, flags: u32) -> HostResult<()>;
    fn get_player_alpha(&self, player: i32) -> HostResult<u8>;
    fn set_player_alpha(&self, player: i32, alpha: u8, fade_time: u32) -> HostResult<()>;
    fn get_player_admin(&self, player: i32) -> HostResult<bool>;
    fn set_player_admin(&self, player: i32, admin: bool) -> HostResult<()>;
    /// `GetPlayerOption` family (§4.A): boolean result, but the host can
    /// still reject an out-of-range `option` id, hence `HostResult<bool>`.
    fn get_player_option(&self, player: i32, option: i32) -> HostResult<bool>;
    fn set_player_option(&self, player: i32, option: i32, toggle: bool) -> HostResult<()>;
    fn kick_player(&self, player: i32) -> HostResult<()>;
    fn ban_player(&self, player: i32) -> HostResult<()>;
    fn is_player_streamed_for_player(&self, player: i32, viewer: i32) -> HostResult<bool>;

    // ---- Vehicle properties ----
    fn create_vehicle(&self, model: i32, world: i32, position: Vector3, heading: f32) -> HostResult<i32>;
    fn delete_vehicle(&self, vehicle: i32) -> HostResult<()>;
    fn get_vehicle_position(&self, vehicle: i32) -> HostResult<Vector3>;
    fn set_vehicle_position(&self, vehicle: i32, position: Vector3) -> HostResult<()>;
    fn get_vehicle_rotation(&self, vehicle: i32) -> HostResult<Quaternion>;
    fn set_vehicle_rotation(&self, vehicle: i32, rotation: Quaternion) -> HostResult<()>;
    fn get_vehicle_health(&self, vehicle: i32) -> HostResult<f32>;
    fn set_vehicle_health(&self, vehicle: i32, health: f32) -> HostResult<()>;
    fn get_vehicle_colour(&self, vehicle: i32) -> HostResult<(Color3, Color3)>;
    fn set_vehicle_colour(&self, vehicle: i32, primary: Color3, secondary: Color3) -> HostResult<()>;
    fn get_vehicle_part_status(&self, vehicle: i32, part: PartId) -> HostResult<i32>;
    fn set_vehicle_part_status(&self, vehicle: i32, part: PartId, status: i32) -> HostResult<()>;
    fn get_vehicle_tyre_status(&self, vehicle: i32, tyre: PartId) -> HostResult<i32>;
    fn set_vehicle_tyre_status(&self, vehicle: i32, tyre: PartId, status: i32) -> HostResult<()>;
    fn get_vehicle_handling_rule(&self, rule: i32) -> HostResult<f64>;
    fn set_vehicle_handling_rule(&self, rule: i32, value: f64) -> HostResult<()>;

    // ---- Pickup properties ----
    fn create_pickup(&self, model: i32, world: i32, quantity: i32, position: Vector3) -> HostResult<i32>;
    fn delete_pickup(&self, pickup: i32) -> HostResult<()>;
    fn get_pickup_position(&self, pickup: i32) -> HostResult<Vector3>;
    fn set_pickup_position(&self, pickup: i32, position: Vector3) -> HostResult<()>;
    fn get_pickup_alpha(&self, pickup: i32) -> HostResult<u8>;
    fn set_pickup_alpha(&self, pickup: i32, alpha: u8) -> HostResult<()>;

    // ---- Checkpoint properties ----
    fn create_checkpoint(&self, player: i32, world: i32, position: Vector3, radius: f32, color: Color4) -> HostResult<i32>;
    fn delete_checkpoint(&self, checkpoint: i32) -> HostResult<()>;
    fn get_checkpoint_position(&self, checkpoint: i32) -> HostResult<Vector3>;
    fn set_checkpoint_position(&self, checkpoint: i32, position: Vector3) -> HostResult<()>;
    fn get_checkpoint_radius(&self, checkpoint: i32) -> HostResult<f32>;
    fn set_checkpoint_radius(&self, checkpoint: i32, radius: f32) -> HostResult<()>;

    // ---- Object properties ----
    fn create_object(&self, model: i32, world: i32, position: Vector3) -> HostResult<i32>;
    fn delete_object(&self, object: i32) -> HostResult<()>;
    fn get_object_position(&self, object: i32) -> HostResult<Vector3>;
    /// Passes `(x, y, z)` through unmodified — see SPEC_FULL.md's
    /// resolution of the `SetPositionZ(z, y, z)` open question: every
    /// entity's z-only setter here composes the *current* x/y with the
    /// new z, rather than repeating `z` for `x`.
    fn set_object_position(&self, object: i32, position: Vector3) -> HostResult<()>;

    // ---- Blips ----
    fn create_coord_blip(&self, world: i32, position: Vector3, scale: i32, color: Color4, sprite: i32) -> HostResult<i32>;
    fn destroy_coord_blip(&self, blip: i32) -> HostResult<()>;
}

/// In-memory `HostAdapter` used by the test suite and by `cargo test`'s
/// integration tests. Mirrors `myq2-game/src/game_import.rs`'s
/// `StubGameImport`: every property is backed by a plain `HashMap` rather
/// than any real network/game state.
pub mod stub {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct State {
        positions: HashMap<i32, Vector3>,
        headings: HashMap<i32, f32>,
        health: HashMap<i32, f32>,
        armour: HashMap<i32, f32>,
        weapon: HashMap<i32, (i32, i32)>,
        world: HashMap<i32, i32>,
        secondary_world: HashMap<i32, i32>,
        skin: HashMap<i32, i32>,
        team: HashMap<i32, i32>,
        score: HashMap<i32, i32>,
        money: HashMap<i32, i32>,
        wanted: HashMap<i32, i32>,
        immunity: HashMap<i32, u32>,
        alpha: HashMap<i32, u8>,
        admin: HashMap<i32, bool>,
        options: HashMap<(i32, i32), bool>,
        vehicle_rotation: HashMap<i32, Quaternion>,
        vehicle_health: HashMap<i32, f32>,
        vehicle_colour: HashMap<i32, (Color3, Color3)>,
        vehicle_part_status: HashMap<(i32, PartId), i32>,
        vehicle_tyre_status: HashMap<(i32, PartId), i32>,
        handling_rules: HashMap<i32, f64>,
        pickup_alpha: HashMap<i32, u8>,
        checkpoint_radius: HashMap<i32, f32>,
        next_handle: i32,
        log: Vec<String>,
        time_ms: u32,
    }

    /// A stub host: holds every property in memory, never rejects a
    /// handle (the entity registry's occupancy check is the only
    /// `NoSuchEntity` authority in tests — see `entity.rs`), and records
    /// every `log_message` call for assertions.
    #[derive(Default)]
    pub struct StubHostAdapter {
        state: RefCell<State>,
    }

    impl StubHostAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn logged_messages(&self) -> Vec<String> {
            self.state.borrow().log.clone()
        }

        pub fn advance_time(&self, delta_ms: u32) {
            self.state.borrow_mut().time_ms += delta_ms;
        }

        pub fn set_position_for_test(&self, entity: i32, position: Vector3) {
            self.state.borrow_mut().positions.insert(entity, position);
        }

        fn next_handle(&self) -> i32 {
            let mut s = self.state.borrow_mut();
            let h = s.next_handle;
            s.next_handle += 1;
            h
        }
    }

    macro_rules! get_prop {
        ($self:ident, $field:ident, $entity:ident, $default:expr) => {
            Ok(*$self.state.borrow().$field.get(&$entity).unwrap_or(&$default))
        };
    }

    macro_rules! set_prop {
        ($self:ident, $field:ident, $entity:ident, $value:ident) => {{
            $self.state.borrow_mut().$field.insert($entity, $value);
            Ok(())
        }};
    }

    impl HostAdapter for StubHostAdapter {
        fn log_message(&self, message: &str) {
            self.state.borrow_mut().log.push(message.to_string());
        }

        fn send_plugin_command(&self, _command_id: u32, _message: &str) -> HostResult<()> {
            Ok(())
        }

        fn get_time(&self) -> u32 {
            self.state.borrow().time_ms
        }

        fn get_server_settings(&self) -> ServerSettings {
            ServerSettings::default()
        }

        fn send_client_message(&self, _player: i32, _color: Color4, _message: &str) -> HostResult<()> {
            Ok(())
        }

        fn send_game_message(&self, _player: i32, _kind: i32, _message: &str) -> HostResult<()> {
            Ok(())
        }

        fn send_client_script_data(&self, _player: i32, data: &[u8]) -> HostResult<()> {
            if data.len() > 4096 {
                return Err(EntityError::TooLargeInput);
            }
            Ok(())
        }

        fn get_player_name(&self, player: i32) -> HostResult<String> {
            Ok(format!("Player{player}"))
        }

        fn get_player_position(&self, player: i32) -> HostResult<Vector3> {
            get_prop!(self, positions, player, Vector3::NIL)
        }

        fn set_player_position(&self, player: i32, position: Vector3) -> HostResult<()> {
            set_prop!(self, positions, player, position)
        }

        fn get_player_heading(&self, player: i32) -> HostResult<f32> {
            get_prop!(self, headings, player, 0.0)
        }

        fn set_player_heading(&self, player: i32, degrees: f32) -> HostResult<()> {
            set_prop!(self, headings, player, degrees)
        }

        fn get_player_health(&self, player: i32) -> HostResult<f32> {
            get_prop!(self, health, player, 100.0)
        }

        fn set_player_health(&self, player: i32, health: f32) -> HostResult<()> {
            set_prop!(self, health, player, health)
        }

        fn get_player_armour(&self, player: i32) -> HostResult<f32> {
            get_prop!(self, armour, player, 0.0)
        }

        fn set_player_armour(&self, player: i32, armour: f32) -> HostResult<()> {
            set_prop!(self, armour, player, armour)
        }

        fn get_player_weapon(&self, player: i32) -> HostResult<i32> {
            Ok(self.state.borrow().weapon.get(&player).map(|w| w.0).unwrap_or(0))
        }

        fn set_player_weapon(&self, player: i32, weapon: i32, ammo: i32) -> HostResult<()> {
            self.state.borrow_mut().weapon.insert(player, (weapon, ammo));
            Ok(())
        }

        fn get_player_world(&self, player: i32) -> HostResult<i32> {
            get_prop!(self, world, player, 0)
        }

        fn set_player_world(&self, player: i32, world: i32) -> HostResult<()> {
            set_prop!(self, world, player, world)
        }

        fn get_player_secondary_world(&self, player: i32) -> HostResult<i32> {
            get_prop!(self, secondary_world, player, 0)
        }

        fn set_player_secondary_world(&self, player: i32, world: i32) -> HostResult<()> {
            set_prop!(self, secondary_world, player, world)
        }

        fn get_player_skin(&self, player: i32) -> HostResult<i32> {
            get_prop!(self, skin, player, 0)
        }

        fn set_player_skin(&self, player: i32, skin: i32) -> HostResult<()> {
            set_prop!(self, skin, player, skin)
        }

        fn get_player_team(&self, player: i32) -> HostResult<i32> {
            get_prop!(self, team, player, 0)
        }

        fn set_player_team(&self, player: i32, team: i32) -> HostResult<()> {
            set_prop!(self, team, player, team)
        }

        fn get_player_score(&self, player: i32) -> HostResult<i32> {
            get_prop!(self, score, player, 0)
        }

        fn set_player_score(&self, player: i32, score: i32) -> HostResult<()> {
            set_prop!(self, score, player, score)
        }

        fn get_player_money(&self, player: i32) -> HostResult<i32> {
            get_prop!(self, money, player, 0)
        }

        fn set_player_money(&self, player: i32, money: i32) -> HostResult<()> {
            set_prop!(self, money, player, money)
        }

        fn get_player_wanted_level(&self, player: i32) -> HostResult<i32> {
            get_prop!(self, wanted, player, 0)
        }

        fn set_player_wanted_level(&self, player: i32, level: i32) -> HostResult<()> {
            if !(0..=6).contains(&level) {
                return Err(EntityError::ArgumentOutOfBounds);
            }
            set_prop!(self, wanted, player, level)
        }

        fn get_player_immunity_flags(&self, player: i32) -> HostResult<u32> {
            get_prop!(self, immunity, player, 0)
        }

        fn set_player_immunity_flags(&self, player: i32, flags: u32) -> HostResult<()> {
            set_prop!(self, immunity, player, flags)
        }

        fn get_player_alpha(&self, player: i32) -> HostResult<u8> {
            get_prop!(self, alpha, player, 255)
        }

        fn set_player_alpha(&self, player: i32, alpha: u8, _fade_time: u32) -> HostResult<()> {
            set_prop!(self, alpha, player, alpha)
        }

        fn get_player_admin(&self, player: i32) -> HostResult<bool> {
            get_prop!(self, admin, player, false)
        }

        fn set_player_admin(&self, player: i32, admin: bool) -> HostResult<()> {
            set_prop!(self, admin, player, admin)
        }

        fn get_player_option(&self, player: i32, option: i32) -> HostResult<bool> {
            if !(0..32).contains(&option) {
                return Err(EntityError::ArgumentOutOfBounds);
            }
            Ok(*self.state.borrow().options.get(&(player, option)).unwrap_or(&false))
        }

        fn set_player_option(&self, player: i32, option: i32, toggle: bool) -> HostResult<()> {
            if !(0..32).contains(&option) {
                return Err(EntityError::ArgumentOutOfBounds);
            }
            self.state.borrow_mut().options.insert((player, option), toggle);
            Ok(())
        }

        fn kick_player(&self, _player: i32) -> HostResult<()> {
            Ok(())
        }

        fn ban_player(&self, _player: i32) -> HostResult<()> {
            Ok(())
        }

        fn is_player_streamed_for_player(&self, _player: i32, _viewer: i32) -> HostResult<bool> {
            Ok(true)
        }

        fn create_vehicle(&self, _model: i32, world: i32, position: Vector3, heading: f32) -> HostResult<i32> {
            let handle = self.next_handle();
            self.state.borrow_mut().positions.insert(handle, position);
            self.state.borrow_mut().headings.insert(handle, heading);
            self.state.borrow_mut().world.insert(handle, world);
            Ok(handle)
        }

        fn delete_vehicle(&self, _vehicle: i32) -> HostResult<()> {
            Ok(())
        }

        fn get_vehicle_position(&self, vehicle: i32) -> HostResult<Vector3> {
            get_prop!(self, positions, vehicle, Vector3::NIL)
        }

        fn set_vehicle_position(&self, vehicle: i32, position: Vector3) -> HostResult<()> {
            set_prop!(self, positions, vehicle, position)
        }

        fn get_vehicle_rotation(&self, vehicle: i32) -> HostResult<Quaternion> {
            get_prop!(self, vehicle_rotation, vehicle, Quaternion::IDENTITY)
        }

        fn set_vehicle_rotation(&self, vehicle: i32, rotation: Quaternion) -> HostResult<()> {
            set_prop!(self, vehicle_rotation, vehicle, rotation)
        }

        fn get_vehicle_health(&self, vehicle: i32) -> HostResult<f32> {
            get_prop!(self, vehicle_health, vehicle, 1000.0)
        }

        fn set_vehicle_health(&self, vehicle: i32, health: f32) -> HostResult<()> {
            set_prop!(self, vehicle_health, vehicle, health)
        }

        fn get_vehicle_colour(&self, vehicle: i32) -> HostResult<(Color3, Color3)> {
            get_prop!(self, vehicle_colour, vehicle, (Color3::default(), Color3::default()))
        }

        fn set_vehicle_colour(&self, vehicle: i32, primary: Color3, secondary: Color3) -> HostResult<()> {
            self.state.borrow_mut().vehicle_colour.insert(vehicle, (primary, secondary));
            Ok(())
        }

        fn get_vehicle_part_status(&self, vehicle: i32, part: PartId) -> HostResult<i32> {
            Ok(*self.state.borrow().vehicle_part_status.get(&(vehicle, part)).unwrap_or(&0))
        }

        fn set_vehicle_part_status(&self, vehicle: i32, part: PartId, status: i32) -> HostResult<()> {
            self.state.borrow_mut().vehicle_part_status.insert((vehicle, part), status);
            Ok(())
        }

        fn get_vehicle_tyre_status(&self, vehicle: i32, tyre: PartId) -> HostResult<i32> {
            Ok(*self.state.borrow().vehicle_tyre_status.get(&(vehicle, tyre)).unwrap_or(&0))
        }

        fn set_vehicle_tyre_status(&self, vehicle: i32, tyre: PartId, status: i32) -> HostResult<()> {
            self.state.borrow_mut().vehicle_tyre_status.insert((vehicle, tyre), status);
            Ok(())
        }

        fn get_vehicle_handling_rule(&self, rule: i32) -> HostResult<f64> {
            get_prop!(self, handling_rules, rule, 0.0)
        }

        fn set_vehicle_handling_rule(&self, rule: i32, value: f64) -> HostResult<()> {
            set_prop!(self, handling_rules, rule, value)
        }

        fn create_pickup(&self, _model: i32, world: i32, _quantity: i32, position: Vector3) -> HostResult<i32> {
            let handle = self.next_handle();
            self.state.borrow_mut().positions.insert(handle, position);
            self.state.borrow_mut().world.insert(handle, world);
            Ok(handle)
        }

        fn delete_pickup(&self, _pickup: i32) -> HostResult<()> {
            Ok(())
        }

        fn get_pickup_position(&self, pickup: i32) -> HostResult<Vector3> {
            get_prop!(self, positions, pickup, Vector3::NIL)
        }

        fn set_pickup_position(&self, pickup: i32, position: Vector3) -> HostResult<()> {
            set_prop!(self, positions, pickup, position)
        }

        fn get_pickup_alpha(&self, pickup: i32) -> HostResult<u8> {
            get_prop!(self, pickup_alpha, pickup, 255)
        }

        fn set_pickup_alpha(&self, pickup: i32, alpha: u8) -> HostResult<()> {
            set_prop!(self, pickup_alpha, pickup, alpha)
        }

        fn create_checkpoint(&self, _player: i32, world: i32, position: Vector3, radius: f32, _color: Color4) -> HostResult<i32> {
            let handle = self.next_handle();
            self.state.borrow_mut().positions.insert(handle, position);
            self.state.borrow_mut().world.insert(handle, world);
            self.state.borrow_mut().checkpoint_radius.insert(handle, radius);
            Ok(handle)
        }

        fn delete_checkpoint(&self, _checkpoint: i32) -> HostResult<()> {
            Ok(())
        }

        fn get_checkpoint_position(&self, checkpoint: i32) -> HostResult<Vector3> {
            get_prop!(self, positions, checkpoint, Vector3::NIL)
        }

        fn set_checkpoint_position(&self, checkpoint: i32, position: Vector3) -> HostResult<()> {
            set_prop!(self, positions, checkpoint, position)
        }

        fn get_checkpoint_radius(&self, checkpoint: i32) -> HostResult<f32> {
            get_prop!(self, checkpoint_radius, checkpoint, 1.0)
        }

        fn set_checkpoint_radius(&self, checkpoint: i32, radius: f32) -> HostResult<()> {
            set_prop!(self, checkpoint_radius, checkpoint, radius)
        }

        fn create_object(&self, _model: i32, world: i32, position: Vector3) -> HostResult<i32> {
            let handle = self.next_handle();
            self.state.borrow_mut().positions.insert(handle, position);
            self.state.borrow_mut().world.insert(handle, world);
            Ok(handle)
        }

        fn delete_object(&self, _object: i32) -> HostResult<()> {
            Ok(())
        }

        fn get_object_position(&self, object: i32) -> HostResult<Vector3> {
            get_prop!(self, positions, object, Vector3::NIL)
        }

        fn set_object_position(&self, object: i32, position: Vector3) -> HostResult<()> {
            set_prop!(self, positions, object, position)
        }

        fn create_coord_blip(&self, world: i32, position: Vector3, _scale: i32, _color: Color4, _sprite: i32) -> HostResult<i32> {
            let handle = self.next_handle();
            self.state.borrow_mut().positions.insert(handle, position);
            self.state.borrow_mut().world.insert(handle, world);
            Ok(handle)
        }

        fn destroy_coord_blip(&self, _blip: i32) -> HostResult<()> {
            Ok(())
        }
    }
}
