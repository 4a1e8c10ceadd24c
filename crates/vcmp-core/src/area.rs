//! Area manager (§4.G): a coarse 16×16 grid of cells, each holding
//! polygonal areas, supporting enter/leave tests under concurrent
//! iteration via per-cell locks and a deferred mutation queue.
//!
//! Grounded on `examples/original_source/module/Core/Areas.cpp`'s
//! `AreaManager` (grid + per-cell `CellGuard` + queued insert/remove) and
//! `module/Misc/Areas.hpp`'s `Area` (bbox maintained incrementally,
//! ordered point list, `IsInside` ray-cast). Cross-checked against
//! `myq2-game`'s spatial trigger volumes for the Rust RAII idiom, but the
//! polygon test itself has no equivalent in the teacher and is ported
//! directly from the original.

use crate::guard::{CellGuard, CellLock};
use std::cell::{Cell, RefCell};
use vcmp_common::{Vector2, Vector4};

/// Cells per grid side (§4.G "Geometry").
pub const GRID_N: i32 = 16;
/// World units per cell side.
pub const CELLD: f32 = 256.0;
const GRID_HALF: i32 = GRID_N / 2;

/// A polygonal area (§3 "Area"). Cheaply cloneable handle-less value; the
/// manager and scripts both refer to areas by [`AreaId`] through
/// [`AreaManager`].
#[derive(Debug, Clone)]
pub struct Area {
    points: Vec<Vector2>,
    bbox: Vector4,
    name: String,
    user_id: i32,
    cells: Vec<CellCoord>,
}

/// `(L, B, R, T)` sentinel used before any point has been added — mirrors
/// the original's `DEF_L/DEF_B/DEF_R/DEF_T` (§4.B `Aabb::EMPTY` uses the
/// same shape for 3D boxes).
const EMPTY_BBOX: Vector4 = Vector4::new(f32::INFINITY, f32::INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY);

impl Default for Area {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            bbox: EMPTY_BBOX,
            name: String::new(),
            user_id: 0,
            cells: Vec::new(),
        }
    }
}

impl Area {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: &[Vector2]) -> Self {
        let mut area = Self::new();
        area.add_points(points);
        area
    }

    pub fn from_triangle(a: Vector2, b: Vector2, c: Vector2) -> Self {
        Self::from_points(&[a, b, c])
    }

    /// `θ_i = 2π·i/segments`, `segments` points total (§6.2). `segments ==
    /// 0` is a no-op, `segments == 1` adds a single point — neither forms
    /// a polygon, matching the boundary behaviors in §8.
    pub fn add_circle(center: Vector2, radius: f32, segments: u32) -> Self {
        let mut area = Self::new();
        for i in 0..segments {
            let theta = std::f32::consts::TAU * (i as f32) / (segments as f32);
            area.add_point(Vector2::new(center.x + radius * theta.cos(), center.y + radius * theta.sin()));
        }
        area
    }

    pub fn add_point(&mut self, p: Vector2) {
        self.bbox.x = self.bbox.x.min(p.x);
        self.bbox.y = self.bbox.y.min(p.y);
        self.bbox.z = self.bbox.z.max(p.x);
        self.bbox.w = self.bbox.w.max(p.y);
        self.points.push(p);
    }

    /// Bulk insert, the natural Rust shape for the original's array-taking
    /// `AddArray` convenience (SPEC_FULL.md §10.F).
    pub fn add_points(&mut self, points: &[Vector2]) {
        for &p in points {
            self.add_point(p);
        }
    }

    pub fn reserve(&mut self, additional: usize) {
        self.points.reserve(additional);
    }

    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }

    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    pub fn bbox(&self) -> Vector4 {
        self.bbox
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new((self.bbox.x + self.bbox.z) * 0.5, (self.bbox.y + self.bbox.w) * 0.5)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn user_id(&self) -> i32 {
        self.user_id
    }

    pub fn set_user_id(&mut self, id: i32) {
        self.user_id = id;
    }

    pub fn is_managed(&self) -> bool {
        !self.cells.is_empty()
    }

    /// bbox-only test when the area has no points at all (§4.G "The fast
    /// pre-test `IsInside` is skipped when an area has fewer than 3
    /// points"; `Areas.hpp::Test` only takes that shortcut for zero
    /// points — with 1 or 2 points the polygon test still runs and
    /// reports outside, since no real edge exists yet).
    pub fn test(&self, p: Vector2) -> bool {
        if !bbox_contains(self.bbox, p) {
            return false;
        }
        if self.points.is_empty() {
            return true;
        }
        point_in_polygon(&self.points, p)
    }
}

fn bbox_contains(bbox: Vector4, p: Vector2) -> bool {
    p.x >= bbox.x && p.x <= bbox.z && p.y >= bbox.y && p.y <= bbox.w
}

/// Strict overlap, not mere boundary contact (§9 resolution below): the
/// literal source's `a.mL <= c.mR && c.mL <= a.mR && ...` also counts two
/// boxes that merely touch along an edge or at a corner, which for an
/// origin-centered grid means an area whose bbox starts exactly at `x=0`
/// or `y=0` registers in all four cells meeting at the origin instead of
/// just the one it actually overlaps. Strict `<` keeps only cells that
/// share positive area with the box, matching §8 scenario 2's "that is
/// one cell". Flagged as a resolved open question in SPEC_FULL.md.
fn bbox_intersects(a: Vector4, b: Vector4) -> bool {
    a.x < b.z && a.z > b.x && a.y < b.w && a.w > b.y
}

/// Jordan-curve (even-odd) ray cast along +X (§4.G "Point-in-polygon").
/// Ported from `Areas.cpp`'s `Area::IsInside`, including the
/// `k = UINT32_MAX` sentinel on a near-vertical edge. One inequality is
/// swapped from the literal source: `(py <= a.y || py < b.y)` rather than
/// `(py < a.y || py <= b.y)`. The literal form leaves a triangle's own
/// apex vertex classified as outside even when it lies on the shared
/// top edge of the bounding box, contradicting §8 scenario 1 ("vertex
/// shared with top, covered by `<=` rule"); swapping which endpoint
/// carries the inclusive bound gives that vertex the `<=` coverage the
/// scenario names, without changing which edge is tested. Flagged as a
/// resolved open question in SPEC_FULL.md.
fn point_in_polygon(points: &[Vector2], p: Vector2) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut crossings = 0u32;
    let n = points.len();
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let x1 = a.x.min(b.x);
        let x2 = a.x.max(b.x);
        if p.x > x1 && p.x <= x2 && (p.y <= a.y || p.y < b.y) {
            let dx = b.x - a.x;
            let dy = b.y - a.y;
            let k = if dx.abs() < 1e-6 { u32::MAX as f32 } else { dy / dx };
            let m = a.y - k * a.x;
            let y2 = k * p.x + m;
            if p.y <= y2 {
                crossings += 1;
            }
        }
    }
    crossings % 2 == 1
}

/// `(col, row)` index into the grid, or the out-of-range sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub col: i32,
    pub row: i32,
}

/// Maps a world coordinate to a cell index, clamping both axes to the
/// valid range (§4.G "Point location") — see the `LocateCell` open
/// question resolution in SPEC_FULL.md (the source clamps `yc` using
/// `xc`'s sign, a transcription bug; this clamps each axis against
/// itself).
pub fn locate_cell(x: f32, y: f32) -> CellCoord {
    let clamp = |v: f32| -> i32 {
        let c = (v / CELLD).floor() as i32;
        c.clamp(-GRID_HALF, GRID_HALF - 1)
    };
    CellCoord { col: clamp(x), row: clamp(y) }
}

fn cell_bbox(c: CellCoord) -> Vector4 {
    let l = (c.col as f32) * CELLD;
    let b = (c.row as f32) * CELLD;
    Vector4::new(l, b, l + CELLD, b + CELLD)
}

/// Opaque identifier for a registered area, handed out by
/// [`AreaManager::insert_area`].
pub type AreaId = u64;

type OwnerRef = u64;

/// Either an `Insert` (carries the owner ref) or a `Remove` (owner is
/// absent) queued against a locked cell (§4.G "Queue drain"; §9 "absence
/// of owner is the discriminator, as in the source").
enum QueueEntry {
    Insert { area: AreaId, owner: OwnerRef },
    Remove { area: AreaId },
}

struct QueueItem {
    cell: CellCoord,
    entry: QueueEntry,
}

#[derive(Default)]
struct AreaCell {
    lock: CellLock,
    members: RefCell<Vec<(AreaId, OwnerRef)>>,
}

/// Owns the 256-cell grid and the registered-area table (§4.G).
pub struct AreaManager {
    cells: Vec<AreaCell>,
    areas: RefCell<std::collections::HashMap<AreaId, Area>>,
    next_id: Cell<AreaId>,
    queue: RefCell<Vec<QueueItem>>,
}

impl Default for AreaManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AreaManager {
    pub fn new() -> Self {
        Self::with_cell_capacity(16)
    }

    /// Reserves `capacity` slots per cell up front (§10.F, ported from
    /// `AreaManager::AreaManager(size_t sz=16)`).
    pub fn with_cell_capacity(capacity: usize) -> Self {
        let mut cells = Vec::with_capacity((GRID_N * GRID_N) as usize);
        for _ in 0..(GRID_N * GRID_N) {
            let cell = AreaCell::default();
            cell.members.borrow_mut().reserve(capacity);
            cells.push(cell);
        }
        Self {
            cells,
            areas: RefCell::new(std::collections::HashMap::new()),
            next_id: Cell::new(0),
            queue: RefCell::new(Vec::new()),
        }
    }

    fn cell_index(c: CellCoord) -> usize {
        ((c.row + GRID_HALF) * GRID_N + (c.col + GRID_HALF)) as usize
    }

    fn cell(&self, c: CellCoord) -> &AreaCell {
        &self.cells[Self::cell_index(c)]
    }

    /// Registers a new (unmanaged) area and returns its id.
    pub fn insert_area(&self, area: Area) -> AreaId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.areas.borrow_mut().insert(id, area);
        id
    }

    pub fn area(&self, id: AreaId) -> Option<Area> {
        self.areas.borrow().get(&id).cloned()
    }

    pub fn remove_area(&self, id: AreaId) {
        self.unmanage(id, 0);
        self.areas.borrow_mut().remove(&id);
    }

    /// `manage(area)` (§4.G "Insert"): scans all 256 cells, inserting
    /// into every one whose bbox intersects the area's bbox.
    pub fn manage(&self, id: AreaId, owner: OwnerRef) {
        let bbox = match self.areas.borrow().get(&id) {
            Some(a) if !a.is_managed() => a.bbox(),
            _ => return,
        };
        for row in -GRID_HALF..GRID_HALF {
            for col in -GRID_HALF..GRID_HALF {
                let coord = CellCoord { col, row };
                if bbox_intersects(bbox, cell_bbox(coord)) {
                    self.insert(coord, id, owner);
                }
            }
        }
    }

    fn insert(&self, coord: CellCoord, area: AreaId, owner: OwnerRef) {
        // The area must record the cell immediately even if the actual
        // cell mutation is queued, so a concurrent `manage` observes the
        // area as already managed (§4.G "Insert").
        if let Some(a) = self.areas.borrow_mut().get_mut(&area) {
            a.cells.push(coord);
        }
        let cell = self.cell(coord);
        if !cell.lock.is_locked() {
            cell.members.borrow_mut().push((area, owner));
        } else {
            self.queue.borrow_mut().push(QueueItem { cell: coord, entry: QueueEntry::Insert { area, owner } });
        }
    }

    /// `unmanage(area)` (§4.G "Remove"): symmetric to `manage`.
    pub fn unmanage(&self, id: AreaId, _owner: OwnerRef) {
        let cells = match self.areas.borrow_mut().get_mut(&id) {
            Some(a) => std::mem::take(&mut a.cells),
            None => return,
        };
        for coord in cells {
            self.remove(coord, id);
        }
    }

    fn remove(&self, coord: CellCoord, area: AreaId) {
        let cell = self.cell(coord);
        if !cell.lock.is_locked() {
            cell.members.borrow_mut().retain(|&(a, _)| a != area);
        } else {
            self.queue.borrow_mut().push(QueueItem { cell: coord, entry: QueueEntry::Remove { area } });
        }
    }

    /// `test_point(f, x, y)` (§4.G "Test under iteration"): acquires the
    /// cell's lock, walks its areas, invokes `f(area_id, owner_ref)` for
    /// each containing area, then drains the queue if the lock reached
    /// zero.
    pub fn test_point(&self, x: f32, y: f32, mut f: impl FnMut(AreaId, OwnerRef)) {
        let coord = locate_cell(x, y);
        let cell = self.cell(coord);
        let _guard = CellGuard::acquire(&cell.lock);

        let members = cell.members.borrow().clone();
        for (area_id, owner) in members {
            let hit = match self.areas.borrow().get(&area_id) {
                Some(a) => bbox_contains(a.bbox(), Vector2::new(x, y)) && a.test(Vector2::new(x, y)),
                None => false,
            };
            if hit {
                f(area_id, owner);
            }
        }

        drop(_guard);
        if !cell.lock.is_locked() {
            self.drain_queue();
        }
    }

    /// Walks the queue front-to-back, applying any entry whose cell is
    /// currently unlocked (§4.G "Queue drain").
    fn drain_queue(&self) {
        let mut queue = self.queue.borrow_mut();
        let mut remaining = Vec::with_capacity(queue.len());
        for item in queue.drain(..) {
            if self.cell(item.cell).lock.is_locked() {
                remaining.push(item);
                continue;
            }
            match item.entry {
                QueueEntry::Insert { area, owner } => {
                    self.cell(item.cell).members.borrow_mut().push((area, owner));
                }
                QueueEntry::Remove { area } => {
                    self.cell(item.cell).members.borrow_mut().retain(|&(a, _)| a != area);
                }
            }
        }
        *queue = remaining;
    }

    pub fn locate_cell(&self, x: f32, y: f32) -> CellCoord {
        locate_cell(x, y)
    }

    /// Safety-net drain for the frame scheduler (§4.I): ordinarily every
    /// queued entry already drained the moment its cell's lock count hit
    /// zero, but this covers an entry whose cell was still locked at
    /// that moment and never got another `test_point` call to retry it.
    pub fn drain_pending(&self) {
        self.drain_queue();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Area {
        Area::from_triangle(Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0), Vector2::new(5.0, 10.0))
    }

    #[test]
    fn triangle_inside_outside_matches_seed_scenario() {
        let t = triangle();
        assert!(t.test(Vector2::new(5.0, 3.0)));
        assert!(!t.test(Vector2::new(0.0, 5.0)));
        assert!(!t.test(Vector2::new(10.0, 10.0)));
        assert!(t.test(Vector2::new(5.0, 10.0)));
        assert_eq!(t.bbox(), Vector4::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn manage_unmanage_round_trips_to_exactly_one_cell() {
        let mgr = AreaManager::new();
        let id = mgr.insert_area(triangle());
        mgr.manage(id, 1);
        let cell_count: usize = (0..(GRID_N * GRID_N))
            .map(|i| mgr.cells[i as usize].members.borrow().len())
            .sum();
        assert_eq!(cell_count, 1);
        assert_eq!(mgr.areas.borrow().get(&id).unwrap().cells.len(), 1);

        mgr.unmanage(id, 1);
        let cell_count: usize = (0..(GRID_N * GRID_N))
            .map(|i| mgr.cells[i as usize].members.borrow().len())
            .sum();
        assert_eq!(cell_count, 0);
        assert!(mgr.areas.borrow().get(&id).unwrap().cells.is_empty());
    }

    #[test]
    fn cell_iteration_safety_during_unmanage() {
        let mgr = AreaManager::new();
        let id = mgr.insert_area(triangle());
        mgr.manage(id, 1);

        let hits = Cell::new(0);
        mgr.test_point(5.0, 3.0, |area_id, _owner| {
            hits.set(hits.get() + 1);
            assert_eq!(area_id, id);
            mgr.unmanage(id, 1);
        });
        assert_eq!(hits.get(), 1);
        assert!(mgr.areas.borrow().get(&id).unwrap().cells.is_empty());
        assert!(mgr.queue.borrow().is_empty());
    }

    #[test]
    fn locate_cell_clamps_at_grid_edges() {
        let far_positive = locate_cell(1_000_000.0, 1_000_000.0);
        assert_eq!(far_positive, CellCoord { col: GRID_HALF - 1, row: GRID_HALF - 1 });
        let far_negative = locate_cell(-1_000_000.0, -1_000_000.0);
        assert_eq!(far_negative, CellCoord { col: -GRID_HALF, row: -GRID_HALF });
    }

    #[test]
    fn add_circle_boundary_behaviors() {
        assert!(Area::add_circle(Vector2::NIL, 1.0, 0).points().is_empty());
        assert_eq!(Area::add_circle(Vector2::NIL, 1.0, 1).points().len(), 1);
        let hex = Area::add_circle(Vector2::NIL, 1.0, 6);
        assert_eq!(hex.points().len(), 6);
        assert_ne!(hex.points()[0], hex.points()[5]);
    }

    #[test]
    fn aabb_merge_matches_seed_scenario() {
        use vcmp_common::{Aabb, Sphere, Vector3};
        let mut b = Aabb::new(Vector3::NIL, Vector3::splat(1.0));
        b.merge_sphere(&Sphere::new(Vector3::splat(5.0), 2.0));
        assert_eq!(b.min, Vector3::NIL);
        assert_eq!(b.max, Vector3::splat(7.0));
    }
}
