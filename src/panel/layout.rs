use rand::Rng;

use crate::foundation::core::{Canvas, Point, Rect, Size};
use crate::panel::control::{Control, ControlKind, generate_states};
use crate::panel::model::Panel;

/// Smallest supported number of controls on a panel.
pub const MIN_CONTROLS: usize = 2;
/// Largest supported number of controls on a panel.
pub const MAX_CONTROLS: usize = 5;
/// Outer margin between the canvas edge and the layout area.
pub const LAYOUT_MARGIN_PX: u32 = 40;
/// Space reserved inside each cell before the size clamp is applied.
const CELL_INSET_PX: u32 = 40;
/// Minimum gap kept between a control's bounds and its cell edges.
const CELL_PADDING_PX: u32 = 4;

const CONTROL_W_RANGE: (u32, u32) = (80, 120);
const CONTROL_H_RANGE: (u32, u32) = (60, 80);

/// How cells are arranged on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Row-major grid with a fixed column count.
    Grid {
        /// Number of columns.
        columns: u32,
    },
    /// One control per row.
    Column,
}

impl LayoutMode {
    /// Grid (2 columns) for four or more controls, a single column otherwise.
    pub fn for_count(count: usize) -> Self {
        if count >= 4 {
            Self::Grid { columns: 2 }
        } else {
            Self::Column
        }
    }

    /// Column count of this mode.
    pub fn columns(self) -> u32 {
        match self {
            Self::Grid { columns } => columns.max(1),
            Self::Column => 1,
        }
    }
}

/// One layout slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutCell {
    /// Cell rectangle in canvas coordinates.
    pub rect: Rect,
    /// Control center (cell center, integer pixels).
    pub center: Point,
    /// Control bounding size fitted to the cell.
    pub control_size: Size,
}

/// Clamp a requested control count into `[MIN_CONTROLS, MAX_CONTROLS]`.
pub fn clamp_control_count(requested: usize) -> usize {
    requested.clamp(MIN_CONTROLS, MAX_CONTROLS)
}

/// Partition the canvas interior into one equal cell per control.
///
/// `count` is clamped first. Cells never overlap, and each control size is capped so its
/// bounds stay inside its cell.
pub fn plan_cells(count: usize, canvas: Canvas) -> (LayoutMode, Vec<LayoutCell>) {
    let count = clamp_control_count(count);
    let mode = LayoutMode::for_count(count);
    let cols = mode.columns();
    let rows = (count as u32).div_ceil(cols);

    let usable_w = canvas.width.saturating_sub(2 * LAYOUT_MARGIN_PX).max(cols);
    let usable_h = canvas.height.saturating_sub(2 * LAYOUT_MARGIN_PX).max(rows);
    let cell_w = usable_w / cols;
    let cell_h = usable_h / rows;

    let control_w = fit_edge(cell_w, CONTROL_W_RANGE);
    let control_h = fit_edge(cell_h, CONTROL_H_RANGE);

    let cells = (0..count as u32)
        .map(|i| {
            let (col, row) = (i % cols, i / cols);
            let x0 = LAYOUT_MARGIN_PX + col * cell_w;
            let y0 = LAYOUT_MARGIN_PX + row * cell_h;
            LayoutCell {
                rect: Rect::new(
                    f64::from(x0),
                    f64::from(y0),
                    f64::from(x0 + cell_w),
                    f64::from(y0 + cell_h),
                ),
                center: Point::new(f64::from(x0 + cell_w / 2), f64::from(y0 + cell_h / 2)),
                control_size: Size::new(f64::from(control_w), f64::from(control_h)),
            }
        })
        .collect();

    tracing::debug!(count, ?mode, cell_w, cell_h, control_w, control_h, "planned panel cells");
    (mode, cells)
}

fn fit_edge(cell: u32, (lo, hi): (u32, u32)) -> u32 {
    let preferred = cell.saturating_sub(CELL_INSET_PX).clamp(lo, hi);
    // Centers sit at `cell / 2` (floored), so the usable extent is twice that half.
    let cap = ((cell / 2) * 2).saturating_sub(2 * CELL_PADDING_PX);
    preferred.min(cap)
}

/// Draws control kinds without replacement, refilling from the palette once exhausted.
#[derive(Clone, Debug)]
pub struct PalettePool {
    palette: Vec<ControlKind>,
    remaining: Vec<ControlKind>,
}

impl PalettePool {
    /// Create a pool; an empty palette falls back to every archetype.
    pub fn new(palette: &[ControlKind]) -> Self {
        let palette = if palette.is_empty() {
            ControlKind::ALL.to_vec()
        } else {
            palette.to_vec()
        };
        Self {
            remaining: palette.clone(),
            palette,
        }
    }

    /// Take the next kind.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ControlKind {
        if self.remaining.is_empty() {
            self.remaining.clone_from(&self.palette);
        }
        let idx = rng.random_range(0..self.remaining.len());
        self.remaining.remove(idx)
    }
}

/// Lay out `count` controls (clamped) on `canvas`, drawing kinds from `palette` and a fresh
/// initial/target state pair for each.
#[tracing::instrument(skip(palette, rng))]
pub fn generate_panel<R: Rng + ?Sized>(
    canvas: Canvas,
    count: usize,
    palette: &[ControlKind],
    rng: &mut R,
) -> Panel {
    let (mode, cells) = plan_cells(count, canvas);
    let mut pool = PalettePool::new(palette);

    let controls = cells
        .into_iter()
        .map(|cell| {
            let kind = pool.draw(rng);
            let states = generate_states(kind, rng);
            Control {
                kind,
                position: cell.center,
                size: cell.control_size,
                initial_state: states.initial,
                target_state: states.target,
                label: states.label.to_string(),
            }
        })
        .collect();

    Panel::new(canvas, mode, controls)
}

#[cfg(test)]
#[path = "../../tests/unit/panel/layout.rs"]
mod tests;
