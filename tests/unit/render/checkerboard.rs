use super::*;
use crate::render::recording::RecordingSurface;

/// Surface that keeps the default (rasterising) checkerboard.
#[derive(Default)]
struct RawSurface {
    fills: Vec<(Rgba8, Rect)>,
    current: Option<Rgba8>,
}

impl DrawSurface for RawSurface {
    fn set_fill(&mut self, color: Rgba8) {
        self.current = Some(color);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.fills.push((self.current.unwrap(), rect));
    }
}

fn checkers(
    height: f64,
    start: f64,
    end: f64,
    left: f64,
    right: f64,
) -> Vec<(f64, f64)> {
    let mut s = RecordingSurface::new();
    checkerboard_except(&mut s, height, start, end, left, right);
    s.checkerboards()
}

#[test]
fn disjoint_coverage_checkers_whole_range() {
    assert_eq!(checkers(40.0, 0.0, 100.0, 150.0, 200.0), vec![(0.0, 100.0)]);
    assert_eq!(checkers(40.0, 0.0, 100.0, -50.0, 0.0), vec![(0.0, 100.0)]);
}

#[test]
fn partial_coverage_checkers_uncovered_sides() {
    assert_eq!(checkers(40.0, 0.0, 100.0, 20.0, 100.0), vec![(0.0, 20.0)]);
    assert_eq!(checkers(40.0, 0.0, 100.0, 0.0, 70.0), vec![(70.0, 100.0)]);
    assert_eq!(
        checkers(40.0, 0.0, 100.0, 20.0, 70.0),
        vec![(0.0, 20.0), (70.0, 100.0)]
    );
}

#[test]
fn full_coverage_checkers_nothing() {
    assert!(checkers(40.0, 0.0, 100.0, 0.0, 100.0).is_empty());
    assert!(checkers(40.0, 10.0, 90.0, -5.0, 120.0).is_empty());
}

#[test]
fn rasterised_checkerboard_stays_inside_bounds() {
    let mut s = RawSurface::default();
    paint_checkerboard(&mut s, 3.0, 21.0, 10.0);

    let (base_color, base) = s.fills[0];
    assert_eq!(base_color, CHECKER_LIGHT);
    assert_eq!(base, Rect::new(3.0, 0.0, 21.0, 10.0));

    let squares = &s.fills[1..];
    assert!(!squares.is_empty());
    for (color, r) in squares {
        assert_eq!(*color, CHECKER_DARK);
        assert!(r.x0 >= 3.0 && r.x1 <= 21.0, "{r:?}");
        assert!(r.y0 >= 0.0 && r.y1 <= 10.0, "{r:?}");
        assert!(r.x1 > r.x0);
    }
    // Row 0 paints even columns: [0,8) clipped to [3,8) and [16,24) clipped to [16,21).
    assert!(squares.iter().any(|(_, r)| *r == Rect::new(3.0, 0.0, 8.0, 8.0)));
    assert!(squares.iter().any(|(_, r)| *r == Rect::new(16.0, 0.0, 21.0, 8.0)));
    // Row 1 paints the odd column [8,16) with the partial height [8,10).
    assert!(squares.iter().any(|(_, r)| *r == Rect::new(8.0, 8.0, 16.0, 10.0)));
}

#[test]
fn empty_checkerboard_paints_nothing() {
    let mut s = RawSurface::default();
    paint_checkerboard(&mut s, 10.0, 10.0, 40.0);
    paint_checkerboard(&mut s, 10.0, 5.0, 40.0);
    paint_checkerboard(&mut s, 0.0, 5.0, 0.0);
    assert!(s.fills.is_empty());
}
