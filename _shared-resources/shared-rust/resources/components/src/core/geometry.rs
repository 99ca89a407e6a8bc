// Segment Geometry
// Point-space rectangles produced by the layout engine
//
// Usage:
//   let rect = SegmentRect::new(90.0, 0.0, 60.0, 44.0);
//   if rect.contains(100.0, 10.0) { ... }
//   let cells = rect.to_cells(area, Size::new(360.0, 44.0));

use ratatui::layout::Rect;

/// Width/height pair in layout points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Rectangle in layout points (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SegmentRect {
    /// Top-left X coordinate
    pub x: f64,
    /// Top-left Y coordinate
    pub y: f64,
    /// Width of the rectangle
    pub width: f64,
    /// Height of the rectangle
    pub height: f64,
}

impl SegmentRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if a point (x, y) is within this rectangle
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Linear interpolation towards `other`; `t` is not clamped so springs may overshoot
    pub fn lerp(&self, other: &SegmentRect, t: f64) -> SegmentRect {
        SegmentRect {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            width: self.width + (other.width - self.width) * t,
            height: self.height + (other.height - self.height) * t,
        }
    }

    /// Map this rectangle from a point space of `bounds` onto the terminal cells of `area`
    /// Edges are rounded independently so adjacent slots never overlap or leave gaps
    pub fn to_cells(&self, area: Rect, bounds: Size) -> Rect {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Rect { x: area.x, y: area.y, width: 0, height: 0 };
        }
        let sx = area.width as f64 / bounds.width;
        let sy = area.height as f64 / bounds.height;

        let clamp_x = |v: f64| (v * sx).round().clamp(0.0, area.width as f64) as u16;
        let clamp_y = |v: f64| (v * sy).round().clamp(0.0, area.height as f64) as u16;

        let x1 = clamp_x(self.x);
        let x2 = clamp_x(self.right());
        let mut y1 = clamp_y(self.y);
        let mut y2 = clamp_y(self.bottom());
        // Thin edges (a few points tall) still need one visible row
        if y2 == y1 && self.height > 0.0 && area.height > 0 {
            if y1 < area.height {
                y2 = y1 + 1;
            } else {
                y1 = area.height - 1;
            }
        }

        Rect {
            x: area.x + x1,
            y: area.y + y1,
            width: x2.saturating_sub(x1),
            height: y2.saturating_sub(y1),
        }
    }
}

impl From<Rect> for SegmentRect {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x as f64,
            y: rect.y as f64,
            width: rect.width as f64,
            height: rect.height as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let rect = SegmentRect::new(90.0, 0.0, 60.0, 44.0);
        assert!(rect.contains(90.0, 0.0));
        assert!(rect.contains(149.9, 43.9));
        assert!(!rect.contains(150.0, 10.0));
        assert!(!rect.contains(89.9, 10.0));
        assert!(!rect.contains(100.0, 44.0));
    }

    #[test]
    fn test_to_cells_identity_scale() {
        let area = Rect { x: 2, y: 3, width: 60, height: 3 };
        let rect = SegmentRect::new(20.0, 0.0, 20.0, 3.0);
        let cells = rect.to_cells(area, Size::new(60.0, 3.0));
        assert_eq!(cells, Rect { x: 22, y: 3, width: 20, height: 3 });
    }

    #[test]
    fn test_to_cells_adjacent_slots_tile() {
        let area = Rect { x: 0, y: 0, width: 10, height: 1 };
        let bounds = Size::new(360.0, 44.0);
        let w = 360.0 / 3.0;
        let cells: Vec<Rect> = (0..3)
            .map(|i| SegmentRect::new(i as f64 * w, 0.0, w, 44.0).to_cells(area, bounds))
            .collect();
        assert_eq!(cells[0].x, 0);
        assert_eq!(cells[0].x + cells[0].width, cells[1].x);
        assert_eq!(cells[1].x + cells[1].width, cells[2].x);
        assert_eq!(cells[2].x + cells[2].width, 10);
    }

    #[test]
    fn test_to_cells_thin_edge_gets_one_row() {
        let area = Rect { x: 0, y: 0, width: 36, height: 3 };
        let edge = SegmentRect::new(0.0, 39.0, 120.0, 5.0);
        let cells = edge.to_cells(area, Size::new(360.0, 44.0));
        assert_eq!(cells.height, 1);
        assert_eq!(cells.y, 2);

        let top = SegmentRect::new(0.0, 0.0, 120.0, 5.0);
        let cells = top.to_cells(area, Size::new(360.0, 44.0));
        assert_eq!(cells.y, 0);
        assert_eq!(cells.height, 1);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = SegmentRect::new(0.0, 0.0, 60.0, 44.0);
        let b = SegmentRect::new(120.0, 0.0, 60.0, 44.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5).x, 60.0);
    }
}
