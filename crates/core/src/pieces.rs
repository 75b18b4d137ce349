//! Pieces module - tetromino catalog and template rotation
//!
//! Every piece is a 4x4 occupancy template. Rotation is a pure matrix
//! transform (transpose then column reverse); keeping the piece visually in
//! place afterwards is the movement engine's job, see [`crate::movement`].

use crate::types::{Cell, PieceKind, BLOCK, FIELD_WIDTH};

/// 4x4 occupancy template, `shape[row][col]`, 1 = occupied
pub type Shape = [[u8; BLOCK]; BLOCK];

/// Spawn column: the template is centered horizontally
pub const SPAWN_X: i8 = (FIELD_WIDTH / 2 - BLOCK / 2) as i8;

/// Spawn row: the top of the field
pub const SPAWN_Y: i8 = 0;

/// Canonical templates, indexed by type id
const CATALOG: [Shape; 7] = [
    // I
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
    // O
    [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    // T
    [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    // J
    [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    // L
    [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    // S
    [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    // Z
    [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
];

/// Spawn template for a piece kind
pub fn template(kind: PieceKind) -> Shape {
    CATALOG[kind.index()]
}

/// Rotate a template 90° clockwise: `out[j][N-1-i] = in[i][j]`
pub fn rotate_cw(shape: &Shape) -> Shape {
    let mut out = [[0u8; BLOCK]; BLOCK];
    for (i, row) in shape.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            out[j][BLOCK - 1 - i] = cell;
        }
    }
    out
}

/// Bounding-box anchor: `(min_col, min_row)` over occupied cells.
///
/// An empty template yields `(BLOCK, BLOCK)`.
pub fn anchor(shape: &Shape) -> (i8, i8) {
    let mut min_x = BLOCK;
    let mut min_y = BLOCK;
    for (dx, dy) in occupied(shape) {
        min_x = min_x.min(dx as usize);
        min_y = min_y.min(dy as usize);
    }
    (min_x as i8, min_y as i8)
}

/// Occupied cells of a template as `(col, row)` offsets
pub fn occupied(shape: &Shape) -> impl Iterator<Item = (i8, i8)> + '_ {
    shape.iter().enumerate().flat_map(|(row, cells)| {
        cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell != 0)
            .map(move |(col, _)| (col as i8, row as i8))
    })
}

/// A piece on (or destined for) the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub kind: PieceKind,
    /// Clockwise quarter turns applied since spawn, mod 4
    pub rotation: u8,
    /// Column of the template's left edge
    pub x: i8,
    /// Row of the template's top edge
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn position in its spawn orientation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            shape: template(kind),
            kind,
            rotation: 0,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Same piece moved to another template origin
    pub fn at(self, x: i8, y: i8) -> Self {
        Self { x, y, ..self }
    }

    /// Absolute field coordinates `(x, y)` of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        occupied(&self.shape).map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Value written into field cells this piece occupies
    pub fn cell_value(&self) -> Cell {
        self.kind.cell_value()
    }

    /// Template rendered with this piece's cell value (preview grids)
    pub fn colored_shape(&self) -> [[Cell; BLOCK]; BLOCK] {
        let value = self.cell_value();
        self.shape
            .map(|row| row.map(|cell| if cell != 0 { value } else { 0 }))
    }
}
