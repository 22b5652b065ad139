//! Pointer tracking: terminal mouse events -> window-space pointer motion.
//!
//! Terminals report the mouse as a `(column, row)` cell with row 0 at the
//! top. The camera expects window pixels with y growing upwards, so each
//! cell is mapped to the pixel at its center and the row axis is flipped.

use crossterm::event::{MouseEvent, MouseEventKind};

use crate::types::{CellScale, Point, PointerMotion};

#[derive(Debug, Clone)]
pub struct PointerTracker {
    scale: CellScale,
    last: Option<Point>,
}

impl PointerTracker {
    pub fn new(scale: CellScale) -> Self {
        Self { scale, last: None }
    }

    pub fn scale(&self) -> CellScale {
        self.scale
    }

    /// Last reported pointer position, if any.
    pub fn position(&self) -> Option<Point> {
        self.last
    }

    /// Forget the last position (e.g. after a resize changes the mapping).
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Convert a mouse event in a terminal `term_rows` lines tall.
    ///
    /// Only motion (with or without a held button) produces an event;
    /// clicks and scrolls are ignored.
    pub fn handle_mouse(&mut self, event: MouseEvent, term_rows: u16) -> Option<PointerMotion> {
        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {}
            _ => return None,
        }
        Some(self.motion_to(event.column, event.row, term_rows))
    }

    /// Record the pointer at cell `(col, row)` and return the motion.
    pub fn motion_to(&mut self, col: u16, row: u16, term_rows: u16) -> PointerMotion {
        let p = self.scale.cell_center(col, row, term_rows);
        let (dx, dy) = match self.last {
            Some(prev) => (p.x - prev.x, p.y - prev.y),
            None => (0, 0),
        };
        self.last = Some(p);
        PointerMotion {
            x: p.x,
            y: p.y,
            dx,
            dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn flips_rows_and_centers_cells() {
        let mut t = PointerTracker::new(CellScale::new(8, 16));
        let m = t.handle_mouse(mouse(MouseEventKind::Moved, 0, 0), 24).unwrap();
        // Top-left cell of a 24-row terminal.
        assert_eq!((m.x, m.y), (4, 23 * 16 + 8));

        let m = t.handle_mouse(mouse(MouseEventKind::Moved, 0, 23), 24).unwrap();
        assert_eq!((m.x, m.y), (4, 8));
    }

    #[test]
    fn reports_deltas_between_events() {
        let mut t = PointerTracker::new(CellScale::new(8, 16));
        let first = t.motion_to(10, 10, 24);
        assert_eq!((first.dx, first.dy), (0, 0));
        let second = t.motion_to(12, 9, 24);
        assert_eq!((second.dx, second.dy), (16, 16));
        assert_eq!(t.position(), Some(Point::new(100, 14 * 16 + 8)));

        t.reset();
        assert_eq!(t.motion_to(0, 0, 24).dx, 0);
    }

    #[test]
    fn drag_counts_as_motion() {
        let mut t = PointerTracker::new(CellScale::default());
        assert!(t
            .handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 1, 1), 10)
            .is_some());
    }

    #[test]
    fn clicks_and_scrolls_are_ignored() {
        let mut t = PointerTracker::new(CellScale::default());
        assert!(t
            .handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 1, 1), 10)
            .is_none());
        assert!(t
            .handle_mouse(mouse(MouseEventKind::ScrollUp, 1, 1), 10)
            .is_none());
        assert_eq!(t.position(), None);
    }
}
