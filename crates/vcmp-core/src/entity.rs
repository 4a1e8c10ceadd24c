//! Entity registry (§4.C): six fixed-capacity pools of shadow records,
//! one per `PoolKind`. Grounded on `myq2-game`'s edict array (`g_edicts:
//! [edict_t; MAX_EDICTS]`, validity = occupancy rather than value) —
//! generalized here to six differently-sized pools instead of one.

use crate::guard::CircularLocks;
use crate::tracking::TrackingState;
use bitflags::bitflags;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use vcmp_common::{EntityError, HostResult, PoolKind};

/// A pool index. Validity is a function of occupancy, not of value (§3).
pub type Handle = i32;

bitflags! {
    /// Per-record tracking opt-in flags (§4.F).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct EntityFlags: u8 {
        const AREA_TRACK = 1 << 0;
        const DIST_TRACK = 1 << 1;
    }
}

/// Reason header/payload staged on a player record ahead of a
/// `KickPlayer`/`BanPlayer` call, since the host accepts no reason
/// parameter (§4.H "Kick/Ban staging").
#[derive(Debug, Clone, Default)]
pub struct ReasonStaging {
    pub header: String,
    pub payload: String,
}

/// One entity's shadow state (§3 "Per-pool record"). Every field is
/// behind `Cell`/`RefCell` so the registry can hand out shared
/// references — the single-threaded model (§5) makes that sound, and it
/// matches the way `BitGuard`/`CellGuard` already need interior
/// mutability through a shared reference.
pub struct Record {
    occupied: Cell<bool>,
    tag: RefCell<String>,
    data: RefCell<Option<Box<dyn Any>>>,
    flags: Cell<EntityFlags>,
    pub(crate) locks: Cell<CircularLocks>,
    pub(crate) deferred: RefCell<Vec<crate::event::Event>>,
    areas: RefCell<HashSet<u64>>,
    pub(crate) tracking: RefCell<TrackingState>,
    authority: Cell<i32>,
    kick_ban: RefCell<Option<ReasonStaging>>,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            occupied: Cell::new(false),
            tag: RefCell::new(String::new()),
            data: RefCell::new(None),
            flags: Cell::new(EntityFlags::empty()),
            locks: Cell::new(CircularLocks::empty()),
            deferred: RefCell::new(Vec::new()),
            areas: RefCell::new(HashSet::new()),
            tracking: RefCell::new(TrackingState::default()),
            authority: Cell::new(0),
            kick_ban: RefCell::new(None),
        }
    }
}

impl Record {
    pub fn is_occupied(&self) -> bool {
        self.occupied.get()
    }

    pub fn tag(&self) -> String {
        self.tag.borrow().clone()
    }

    pub fn set_tag(&self, tag: impl Into<String>) {
        *self.tag.borrow_mut() = tag.into();
    }

    pub fn data(&self) -> std::cell::Ref<'_, Option<Box<dyn Any>>> {
        self.data.borrow()
    }

    pub fn set_data(&self, data: Option<Box<dyn Any>>) {
        *self.data.borrow_mut() = data;
    }

    pub fn flags(&self) -> EntityFlags {
        self.flags.get()
    }

    pub fn set_flags(&self, flags: EntityFlags) {
        self.flags.set(flags);
    }

    pub fn authority(&self) -> i32 {
        self.authority.get()
    }

    pub fn set_authority(&self, level: i32) {
        self.authority.set(level);
    }

    pub fn stage_kick_ban(&self, header: impl Into<String>, payload: impl Into<String>) {
        *self.kick_ban.borrow_mut() = Some(ReasonStaging {
            header: header.into(),
            payload: payload.into(),
        });
    }

    pub fn take_kick_ban(&self) -> Option<ReasonStaging> {
        self.kick_ban.borrow_mut().take()
    }

    pub fn areas(&self) -> Vec<u64> {
        self.areas.borrow().iter().copied().collect()
    }

    pub fn area_insert(&self, area: u64) {
        self.areas.borrow_mut().insert(area);
    }

    pub fn area_remove(&self, area: u64) {
        self.areas.borrow_mut().remove(&area);
    }

    /// Resets every field to its unoccupied default (§4.C `release`).
    fn reset(&self) {
        self.occupied.set(false);
        self.tag.borrow_mut().clear();
        self.data.borrow_mut().take();
        self.flags.set(EntityFlags::empty());
        self.locks.set(CircularLocks::empty());
        self.deferred.borrow_mut().clear();
        self.areas.borrow_mut().clear();
        *self.tracking.borrow_mut() = TrackingState::default();
        self.authority.set(0);
        self.kick_ban.borrow_mut().take();
    }
}

struct Pool {
    records: Vec<Record>,
}

impl Pool {
    fn with_capacity(capacity: usize) -> Self {
        let mut records = Vec::with_capacity(capacity);
        records.resize_with(capacity, Record::default);
        Self { records }
    }
}

/// The six fixed-capacity pools (§3), indexed by `PoolKind`.
pub struct Registry {
    pools: [Pool; 6],
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        let pools = PoolKind::ALL.map(|kind| Pool::with_capacity(kind.capacity()));
        Self { pools }
    }

    fn pool(&self, kind: PoolKind) -> &Pool {
        &self.pools[kind as usize]
    }

    fn record_at(&self, kind: PoolKind, handle: Handle) -> HostResult<&Record> {
        let pool = self.pool(kind);
        usize::try_from(handle)
            .ok()
            .and_then(|i| pool.records.get(i))
            .ok_or(EntityError::NoSuchEntity)
    }

    /// Marks `handle` in `pool` occupied and resets its shadow state.
    /// The host already chose `handle` (players on connect, other
    /// classes via its `Create*` return value) — this never allocates a
    /// *new* handle itself, it just claims the shadow slot.
    pub fn allocate(&self, pool: PoolKind, handle: Handle) -> HostResult<&Record> {
        let record = self.record_at(pool, handle)?;
        if record.is_occupied() {
            return Err(EntityError::PoolExhausted);
        }
        record.occupied.set(true);
        tracing::debug!(pool = pool.name(), handle, "entity allocated");
        Ok(record)
    }

    pub fn get(&self, pool: PoolKind, handle: Handle) -> HostResult<&Record> {
        let record = self.record_at(pool, handle)?;
        if !record.is_occupied() {
            return Err(EntityError::NoSuchEntity);
        }
        Ok(record)
    }

    /// Clears a record back to its unoccupied default. Dispatching the
    /// destroy event and dropping dispatcher listeners is the lifecycle
    /// facade's job (§4.H) — by the time it calls this, both are done.
    pub fn release(&self, pool: PoolKind, handle: Handle) -> HostResult<()> {
        let record = self.get(pool, handle)?;
        record.reset();
        tracing::debug!(pool = pool.name(), handle, "entity released");
        Ok(())
    }

    /// Occupied records only, ascending handle (§4.F "within a pool,
    /// ascending handle").
    pub fn iterate(&self, pool: PoolKind) -> impl Iterator<Item = (Handle, &Record)> {
        self.pool(pool)
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_occupied())
            .map(|(i, r)| (i as Handle, r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_then_get_then_release_round_trips() {
        let registry = Registry::new();
        registry.allocate(PoolKind::Player, 3).unwrap();
        assert!(registry.get(PoolKind::Player, 3).is_ok());
        registry.get(PoolKind::Player, 3).unwrap().set_tag("hello");
        registry.release(PoolKind::Player, 3).unwrap();
        assert_eq!(registry.get(PoolKind::Player, 3).err(), Some(EntityError::NoSuchEntity));
    }

    #[test]
    fn get_on_unoccupied_handle_is_no_such_entity() {
        let registry = Registry::new();
        assert_eq!(registry.get(PoolKind::Vehicle, 0).err(), Some(EntityError::NoSuchEntity));
    }

    #[test]
    fn get_out_of_range_handle_is_no_such_entity() {
        let registry = Registry::new();
        assert_eq!(registry.get(PoolKind::Blip, 9999).err(), Some(EntityError::NoSuchEntity));
        assert_eq!(registry.get(PoolKind::Blip, -1).err(), Some(EntityError::NoSuchEntity));
    }

    #[test]
    fn double_allocate_is_pool_exhausted() {
        let registry = Registry::new();
        registry.allocate(PoolKind::Player, 1).unwrap();
        assert_eq!(registry.allocate(PoolKind::Player, 1).err(), Some(EntityError::PoolExhausted));
    }

    #[test]
    fn iterate_yields_only_occupied_handles_in_ascending_order() {
        let registry = Registry::new();
        registry.allocate(PoolKind::Player, 5).unwrap();
        registry.allocate(PoolKind::Player, 1).unwrap();
        registry.allocate(PoolKind::Player, 9).unwrap();
        let handles: Vec<Handle> = registry.iterate(PoolKind::Player).map(|(h, _)| h).collect();
        assert_eq!(handles, vec![1, 5, 9]);
    }

    #[test]
    fn release_resets_tag_and_areas() {
        let registry = Registry::new();
        let record = registry.allocate(PoolKind::Checkpoint, 0).unwrap();
        record.set_tag("zone");
        record.area_insert(42);
        registry.release(PoolKind::Checkpoint, 0).unwrap();
        registry.allocate(PoolKind::Checkpoint, 0).unwrap();
        let record = registry.get(PoolKind::Checkpoint, 0).unwrap();
        assert_eq!(record.tag(), "");
        assert!(record.areas().is_empty());
    }
}
