//! Grid classification storage.

use sweep_core::Cell;

/// Classification of one grid cell.
///
/// The discriminants match the numeric codes used in exported layouts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CellKind {
    #[default]
    Wall     = 0,
    Corridor = 1,
    Room     = 2,
    Exit     = 3,
}

impl CellKind {
    /// Agents may stand on corridor, room, and exit cells.
    #[inline]
    pub fn is_walkable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// A fixed `height × width` grid of [`CellKind`]s, stored row-major.
///
/// Only [`LayoutBuilder`][crate::LayoutBuilder] writes cells; once a
/// `Layout` leaves the builder it is read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    height: usize,
    width:  usize,
    cells:  Vec<CellKind>,
}

impl Layout {
    /// An all-wall grid.
    pub(crate) fn walled(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![CellKind::Wall; height * width],
        }
    }

    /// Write `kind` at `cell`.  Out-of-bounds writes are dropped.
    pub(crate) fn set(&mut self, cell: Cell, kind: CellKind) {
        if let Some(i) = self.offset(cell) {
            self.cells[i] = kind;
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.offset(cell).is_some()
    }

    /// Classification at `cell`, or `None` outside the grid.
    #[inline]
    pub fn kind(&self, cell: Cell) -> Option<CellKind> {
        self.offset(cell).map(|i| self.cells[i])
    }

    /// In bounds and not a wall.
    #[inline]
    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.kind(cell).is_some_and(CellKind::is_walkable)
    }

    /// Number of cells classified as `kind`.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Iterator over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    #[inline]
    fn offset(&self, cell: Cell) -> Option<usize> {
        let (row, col) = (usize::try_from(cell.row).ok()?, usize::try_from(cell.col).ok()?);
        (row < self.height && col < self.width).then_some(row * self.width + col)
    }
}
