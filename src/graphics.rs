use crate::framebuffer::FrameBuffer;
use crate::math::Vec2;

/// How a triangle is filled, decided from its vertices sorted by row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriangleShape {
    /// Zero height or non-finite coordinates; nothing is drawn
    Degenerate,
    /// Single vertex on top, horizontal edge at the bottom
    FlatBottom { apex: Vec2, base: [Vec2; 2] },
    /// Horizontal edge on top, single vertex at the bottom
    FlatTop { base: [Vec2; 2], apex: Vec2 },
    /// General triangle, cut horizontally at the middle vertex into a
    /// flat-bottom half (top, mid, split) and a flat-top half (mid, split, bottom)
    Split {
        top: Vec2,
        mid: Vec2,
        split: Vec2,
        bottom: Vec2,
    },
}

/// Sorts the vertices by ascending y and classifies the triangle
pub fn classify(p0: Vec2, p1: Vec2, p2: Vec2) -> TriangleShape {
    if !(p0.is_finite() && p1.is_finite() && p2.is_finite()) {
        return TriangleShape::Degenerate;
    }

    let mut points = [p0, p1, p2];
    points.sort_by(|a, b| a.y.total_cmp(&b.y));
    let [top, mid, bottom] = points;

    if top.y == bottom.y {
        TriangleShape::Degenerate
    } else if mid.y == bottom.y {
        TriangleShape::FlatBottom {
            apex: top,
            base: [mid, bottom],
        }
    } else if top.y == mid.y {
        TriangleShape::FlatTop {
            base: [top, mid],
            apex: bottom,
        }
    } else {
        // top.y != bottom.y here, the division is safe
        let split = Vec2::new(
            top.x + (bottom.x - top.x) * (mid.y - top.y) / (bottom.y - top.y),
            mid.y,
        );
        TriangleShape::Split {
            top,
            mid,
            split,
            bottom,
        }
    }
}

/// Fills a triangle with `symbol` using scanline conversion
pub fn draw_triangle(fb: &mut FrameBuffer, p0: Vec2, p1: Vec2, p2: Vec2, symbol: char) {
    match classify(p0, p1, p2) {
        TriangleShape::Degenerate => {
            log::trace!("skipping degenerate triangle {:?} {:?} {:?}", p0, p1, p2);
        }
        TriangleShape::FlatBottom { apex, base } => draw_flat_bottom(fb, apex, base, symbol),
        TriangleShape::FlatTop { base, apex } => draw_flat_top(fb, base, apex, symbol),
        TriangleShape::Split {
            top,
            mid,
            split,
            bottom,
        } => {
            draw_flat_bottom(fb, top, [mid, split], symbol);
            draw_flat_top(fb, [mid, split], bottom, symbol);
        }
    }
}

/// One side of a flat triangle, walked a row at a time
#[derive(Debug, Clone, Copy)]
struct Edge {
    x: f64,
    y: f64,
    /// Columns moved per row
    step: f64,
}

impl Edge {
    fn new(from: Vec2, step: f64) -> Self {
        Self {
            x: from.x,
            y: from.y,
            step,
        }
    }

    fn x_at(&self, row: i64) -> f64 {
        self.x + self.step * (row as f64 - self.y)
    }
}

fn draw_flat_bottom(fb: &mut FrameBuffer, apex: Vec2, base: [Vec2; 2], symbol: char) {
    let height = base[0].y - apex.y;
    if height == 0.0 {
        return;
    }
    let a = Edge::new(apex, (base[0].x - apex.x) / height);
    let b = Edge::new(apex, (base[1].x - apex.x) / height);
    fill_rows(fb, apex.y, base[0].y, a, b, symbol);
}

fn draw_flat_top(fb: &mut FrameBuffer, base: [Vec2; 2], apex: Vec2, symbol: char) {
    let height = apex.y - base[0].y;
    if height == 0.0 {
        return;
    }
    let a = Edge::new(base[0], (apex.x - base[0].x) / height);
    let b = Edge::new(base[1], (apex.x - base[1].x) / height);
    fill_rows(fb, base[0].y, apex.y, a, b, symbol);
}

/// Fills the rows between `from_y` and `to_y` (inclusive) bounded by two
/// edges. Rows outside the buffer are never visited.
fn fill_rows(fb: &mut FrameBuffer, from_y: f64, to_y: f64, a: Edge, b: Edge, symbol: char) {
    let first = (from_y.round() as i64).max(0);
    let last = (to_y.round() as i64).min(fb.rows() as i64 - 1);
    for row in first..=last {
        draw_scan_line(fb, row, a.x_at(row) as i64, b.x_at(row) as i64, symbol);
    }
}

/// Fills the inclusive span between two columns on one row
pub fn draw_scan_line(fb: &mut FrameBuffer, row: i64, x0: i64, x1: i64, symbol: char) {
    if row < 0 || row >= fb.rows() as i64 {
        return;
    }
    let left = x0.min(x1).max(0);
    let right = x0.max(x1).min(fb.columns() as i64 - 1);
    for col in left..=right {
        fb.set(row, col, symbol);
    }
}

/// Draws a line between two points using Bresenham's algorithm
pub fn draw_line(fb: &mut FrameBuffer, from: Vec2, to: Vec2, symbol: char) {
    if !(from.is_finite() && to.is_finite()) {
        return;
    }
    let Some((from, to)) = clip_line(from, to, fb.columns() as f64, fb.rows() as f64) else {
        return;
    };

    let (mut x0, mut y0, x1, y1) = (
        from.x.round() as i64,
        from.y.round() as i64,
        to.x.round() as i64,
        to.y.round() as i64,
    );
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy; // error value e_xy

    loop {
        fb.set(y0, x0, symbol);

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Liang-Barsky clip of a segment against the grid rectangle
fn clip_line(from: Vec2, to: Vec2, columns: f64, rows: f64) -> Option<(Vec2, Vec2)> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    let bounds = [
        (-dx, from.x),
        (dx, columns - 1.0 - from.x),
        (-dy, from.y),
        (dy, rows - 1.0 - from.y),
    ];
    for (p, q) in bounds {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        Vec2::new(from.x + t0 * dx, from.y + t0 * dy),
        Vec2::new(from.x + t1 * dx, from.y + t1 * dy),
    ))
}
