use super::{GRADIENT_END_ANGLE, GRADIENT_START_ANGLE, renderer::DialGeometry};
use dialgeom::{Degrees, Point, point_on_circle_border};
use palette::{Mix, Srgba};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    pub start: Srgba<f64>,
    pub end: Srgba<f64>,
}

impl ColorPair {
    pub fn new(start: Srgba<f64>, end: Srgba<f64>) -> Self {
        Self { start, end }
    }
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            start: Srgba::<u8>::new(0x00, 0x80, 0xff, 0xff).into_format(),
            end: Srgba::<u8>::new(0x53, 0xff, 0xff, 0xff).into_format(),
        }
    }
}

/// Two-stop gradient along a straight axis. Points beyond either end take the end color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub colors: ColorPair,
}

impl LinearGradient {
    pub fn new(start: Point, end: Point, colors: ColorPair) -> Self {
        Self { start, end, colors }
    }

    /// Spans the dial horizontally, from its west edge to its east edge.
    pub fn across_dial(geometry: DialGeometry, colors: ColorPair) -> Self {
        let start = point_on_circle_border(
            geometry.center,
            geometry.radius,
            Degrees::new(GRADIENT_START_ANGLE),
        );
        let end = point_on_circle_border(
            geometry.center,
            geometry.radius,
            Degrees::new(GRADIENT_END_ANGLE),
        );
        Self::new(start, end, colors)
    }

    /// Position of `point` projected onto the axis, clamped to `[0, 1]`.
    pub fn offset_of(&self, point: Point) -> f64 {
        let (ax, ay) = (self.end.x - self.start.x, self.end.y - self.start.y);
        let len_sq = ax * ax + ay * ay;
        if len_sq == 0.0 {
            return 0.0;
        }
        let t = ((point.x - self.start.x) * ax + (point.y - self.start.y) * ay) / len_sq;
        t.clamp(0.0, 1.0)
    }

    pub fn color_at(&self, point: Point) -> Srgba<f64> {
        self.colors
            .start
            .mix(self.colors.end, self.offset_of(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> ColorPair {
        ColorPair::new(
            Srgba::new(0.0, 0.0, 1.0, 1.0),
            Srgba::new(1.0, 0.5, 0.0, 1.0),
        )
    }

    #[test]
    fn test_default_colors() {
        let colors = ColorPair::default();
        assert_eq!(colors.start.blue, 1.0);
        assert_eq!(colors.start.red, 0.0);
        assert_eq!(colors.end.green, 1.0);
        assert!((colors.end.red - 83.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_across_dial_uses_west_and_east_border_points() {
        let geometry = DialGeometry::new(Point::new(100.0, 80.0), 20.0);
        let g = LinearGradient::across_dial(geometry, pair());
        assert!((g.start.x - 80.0).abs() < 1e-9);
        assert!((g.start.y - 80.0).abs() < 1e-9);
        assert!((g.end.x - 120.0).abs() < 1e-9);
        assert!((g.end.y - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_color_at_interpolates_between_stops() {
        let g = LinearGradient::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), pair());
        assert_eq!(g.color_at(Point::new(0.0, 5.0)), pair().start);
        assert_eq!(g.color_at(Point::new(10.0, -3.0)), pair().end);

        let mid = g.color_at(Point::new(5.0, 0.0));
        assert!((mid.red - 0.5).abs() < 1e-9);
        assert!((mid.green - 0.25).abs() < 1e-9);
        assert!((mid.blue - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_color_at_clamps_outside_axis() {
        let g = LinearGradient::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), pair());
        assert_eq!(g.offset_of(Point::new(-40.0, 0.0)), 0.0);
        assert_eq!(g.offset_of(Point::new(400.0, 0.0)), 1.0);
    }

    #[test]
    fn test_degenerate_axis_uses_start_color() {
        let p = Point::new(3.0, 3.0);
        let g = LinearGradient::new(p, p, pair());
        assert_eq!(g.color_at(Point::new(9.0, 9.0)), pair().start);
    }
}
