//! Fixed entity pool capacities. These must match the host server's own
//! pool sizes exactly (§3) — they are compile-time constants rather than
//! runtime configuration precisely so the shadow pools can never drift out
//! of sync with the host's arrays (see SPEC_FULL.md §10.D).

/// Identifies one of the six fixed-capacity entity pools (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PoolKind {
    Player,
    Vehicle,
    Pickup,
    Object,
    Checkpoint,
    Blip,
}

impl PoolKind {
    pub const ALL: [PoolKind; 6] = [
        PoolKind::Player,
        PoolKind::Vehicle,
        PoolKind::Pickup,
        PoolKind::Object,
        PoolKind::Checkpoint,
        PoolKind::Blip,
    ];

    pub const fn capacity(self) -> usize {
        match self {
            PoolKind::Player => MAX_PLAYERS,
            PoolKind::Vehicle => MAX_VEHICLES,
            PoolKind::Pickup => MAX_PICKUPS,
            PoolKind::Object => MAX_OBJECTS,
            PoolKind::Checkpoint => MAX_CHECKPOINTS,
            PoolKind::Blip => MAX_BLIPS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PoolKind::Player => "player",
            PoolKind::Vehicle => "vehicle",
            PoolKind::Pickup => "pickup",
            PoolKind::Object => "object",
            PoolKind::Checkpoint => "checkpoint",
            PoolKind::Blip => "blip",
        }
    }
}

pub const MAX_PLAYERS: usize = 100;
pub const MAX_VEHICLES: usize = 1000;
pub const MAX_PICKUPS: usize = 1000;
pub const MAX_OBJECTS: usize = 1000;
pub const MAX_CHECKPOINTS: usize = 1000;
pub const MAX_BLIPS: usize = 100;

/// Sentinel for an invalid handle (§3: "Invalid handles are represented by
/// a sentinel (−1)").
pub const INVALID_HANDLE: i32 = -1;
