//! Re-entrancy guard (§4.D) and cell lock (§4.G) scoped-acquisition helpers.
//!
//! Converted from the C++ `BitGuardU32`/`CellGuard` RAII idiom: acquire on
//! construction, release on every exit path (including an unwinding panic)
//! via `Drop`.

use bitflags::bitflags;

bitflags! {
    /// Per-record re-entrancy bits (§4.D). One bit per property group that
    /// is both a mutator and an event source. Named after the entity class
    /// + property group the spec's examples call out.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct CircularLocks: u32 {
        const EMIT_PLAYER_WORLD       = 1 << 0;
        const EMIT_PLAYER_SKIN        = 1 << 1;
        const EMIT_PLAYER_TEAM        = 1 << 2;
        const EMIT_PLAYER_SCORE       = 1 << 3;
        const EMIT_PLAYER_MONEY       = 1 << 4;
        const EMIT_PLAYER_WANTED      = 1 << 5;
        const EMIT_PLAYER_IMMUNITY    = 1 << 6;
        const EMIT_PLAYER_ALPHA       = 1 << 7;
        const EMIT_PLAYER_ADMIN       = 1 << 8;
        const EMIT_PLAYER_OPTION      = 1 << 9;
        const EMIT_VEHICLE_PARTSTATUS = 1 << 10;
        const EMIT_VEHICLE_TYRESTATUS = 1 << 11;
        const EMIT_VEHICLE_HANDLING   = 1 << 12;
        const EMIT_CHECKPOINT_RADIUS  = 1 << 13;
        const EMIT_PICKUP_ALPHA       = 1 << 14;
        const EMIT_OBJECT_SHOT        = 1 << 15;
    }
}

/// RAII acquisition of one re-entrancy bit on a record's `CircularLocks`.
/// Holds a shared reference to a `Cell<CircularLocks>` (not `&mut`) so a
/// setter can still read the other bits — or attempt another
/// `try_acquire` against the same record — while a guard from an earlier,
/// still-running call is alive, exactly the re-entrant-call shape §4.D
/// guards against.
pub struct BitGuard<'a> {
    locks: &'a std::cell::Cell<CircularLocks>,
    bit: CircularLocks,
}

impl<'a> BitGuard<'a> {
    /// Returns `None` if `bit` is already held — the caller must not emit
    /// and should instead defer.
    pub fn try_acquire(locks: &'a std::cell::Cell<CircularLocks>, bit: CircularLocks) -> Option<Self> {
        if locks.get().contains(bit) {
            return None;
        }
        locks.set(locks.get() | bit);
        Some(Self { locks, bit })
    }

    pub fn bit(&self) -> CircularLocks {
        self.bit
    }
}

impl Drop for BitGuard<'_> {
    fn drop(&mut self) {
        self.locks.set(self.locks.get() & !self.bit);
    }
}

/// A cell's lock depth (§3 Cell, §4.G): a counter, not a boolean, so nested
/// `test_point` calls on the same cell compose correctly. `Cell<u32>`
/// rather than a plain `u32` so a `CellGuard` can hold a shared reference
/// to the lock while callers still read `is_locked()`/`depth()` through
/// the owning `AreaCell`.
#[derive(Debug, Default)]
pub struct CellLock {
    depth: std::cell::Cell<u32>,
}

impl CellLock {
    pub fn is_locked(&self) -> bool {
        self.depth.get() > 0
    }

    pub fn depth(&self) -> u32 {
        self.depth.get()
    }
}

/// RAII acquisition of a cell lock. The caller is responsible for draining
/// the cell's deferred queue on drop (done by `AreaManager::test_point`,
/// which owns both the cell and the queue).
pub struct CellGuard<'a> {
    lock: &'a CellLock,
}

impl<'a> CellGuard<'a> {
    pub fn acquire(lock: &'a CellLock) -> Self {
        lock.depth.set(lock.depth.get() + 1);
        Self { lock }
    }
}

impl Drop for CellGuard<'_> {
    fn drop(&mut self) {
        self.lock.depth.set(self.lock.depth.get() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_guard_clears_bit_on_every_exit_path() {
        let locks = std::cell::Cell::new(CircularLocks::empty());
        {
            let g = BitGuard::try_acquire(&locks, CircularLocks::EMIT_PLAYER_WORLD).unwrap();
            assert_eq!(g.bit(), CircularLocks::EMIT_PLAYER_WORLD);
        }
        assert!(locks.get().is_empty());
    }

    #[test]
    fn bit_guard_refuses_reentrant_acquire() {
        let locks = std::cell::Cell::new(CircularLocks::empty());
        let _outer = BitGuard::try_acquire(&locks, CircularLocks::EMIT_PLAYER_WORLD).unwrap();
        assert!(BitGuard::try_acquire(&locks, CircularLocks::EMIT_PLAYER_WORLD).is_none());
    }

    #[test]
    fn cell_lock_is_a_depth_counter() {
        let lock = CellLock::default();
        let g1 = CellGuard::acquire(&lock);
        assert_eq!(lock.depth(), 1);
        {
            let _g2 = CellGuard::acquire(&lock);
            assert_eq!(lock.depth(), 2);
        }
        assert_eq!(lock.depth(), 1);
        drop(g1);
        assert_eq!(lock.depth(), 0);
    }
}
