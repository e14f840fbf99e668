use super::gradient::LinearGradient;
use super::renderer::{DialGeometry, PickerRenderer};
use super::surface::{Surface, SurfaceError};
use super::{TRIANGLE_GAP, TRIANGLE_HALF_WIDTH, TRIANGLE_HEIGHT};
use dialgeom::{Degrees, Point, point_on_circle_border};
use palette::Srgba;

#[derive(Debug, Clone)]
pub struct TriangleRenderer {
    geometry: Option<DialGeometry>,
    gradient: Option<LinearGradient>,
    locked: bool,
    angle: Degrees,
    pull: f64,
    vertices: Option<[Point; 3]>,
}

impl Default for TriangleRenderer {
    fn default() -> Self {
        Self {
            geometry: None,
            gradient: None,
            locked: true,
            angle: Degrees::ZERO,
            pull: 0.0,
            vertices: None,
        }
    }
}

impl TriangleRenderer {
    pub fn angle(&self) -> Degrees {
        self.angle
    }

    pub fn pull(&self) -> f64 {
        self.pull
    }

    /// Tip first, then the two base corners.
    pub fn vertices(&self) -> Option<[Point; 3]> {
        self.vertices
    }

    fn fill_color(&self, tip: Point) -> Srgba<f64> {
        self.gradient
            .map(|g| g.color_at(tip))
            .unwrap_or_else(|| Srgba::new(1.0, 1.0, 1.0, 1.0))
    }
}

impl PickerRenderer for TriangleRenderer {
    fn on_draw(&self, surface: &mut dyn Surface) -> Result<(), SurfaceError> {
        let Some(vertices) = self.vertices else {
            return Ok(());
        };
        surface.save()?;
        surface.set_source_color(self.fill_color(vertices[0]));
        surface.polygon(&vertices);
        surface.fill()?;
        surface.restore()
    }

    fn geometry(&self) -> Option<DialGeometry> {
        self.geometry
    }

    fn set_geometry(&mut self, geometry: DialGeometry) {
        self.geometry = Some(geometry);
    }

    fn is_locked(&self) -> bool {
        self.locked
    }

    fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    fn create_path(&mut self) {
        self.vertices = self.geometry.map(|geometry| {
            let base_distance = geometry.radius + TRIANGLE_GAP + self.pull;
            let base = point_on_circle_border(geometry.center, base_distance, self.angle);
            let tip = point_on_circle_border(
                geometry.center,
                base_distance + TRIANGLE_HEIGHT,
                self.angle,
            );
            [
                tip,
                point_on_circle_border(base, TRIANGLE_HALF_WIDTH, self.angle.rotated(90.0)),
                point_on_circle_border(base, TRIANGLE_HALF_WIDTH, self.angle.rotated(-90.0)),
            ]
        });
    }

    fn on_action_move(&mut self, angle: Degrees, pull: f64) {
        if self.locked {
            return;
        }
        self.angle = angle;
        self.pull = pull;
        self.create_path();
    }

    fn on_action_up(&mut self) {
        self.pull = 0.0;
        self.create_path();
    }

    fn set_gradient(&mut self, gradient: LinearGradient) {
        self.gradient = Some(gradient);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::gradient::ColorPair;
    use crate::picker::surface::recording::{Op, RecordingSurface};
    use dialgeom::{angle_between, distance};

    fn ready_triangle() -> TriangleRenderer {
        let mut triangle = TriangleRenderer::default();
        triangle.set_geometry(DialGeometry::new(Point::new(0.0, 0.0), 40.0));
        triangle.create_path();
        triangle
    }

    #[test]
    fn test_tip_points_outward_past_the_border() {
        let mut triangle = ready_triangle();
        triangle.set_locked(false);
        triangle.on_action_move(Degrees::new(90.0), 5.0);

        let [tip, left, right] = triangle.vertices().unwrap();
        let center = Point::new(0.0, 0.0);
        assert!((angle_between(tip, center).value() - 90.0).abs() < 1e-9);
        let expected = 40.0 + TRIANGLE_GAP + 5.0 + TRIANGLE_HEIGHT;
        assert!((distance(tip, center) - expected).abs() < 1e-9);
        assert!((distance(left, right) - 2.0 * TRIANGLE_HALF_WIDTH).abs() < 1e-9);
    }

    #[test]
    fn test_locked_triangle_ignores_moves() {
        let mut triangle = ready_triangle();
        triangle.on_action_move(Degrees::new(200.0), 9.0);
        assert_eq!(triangle.angle(), Degrees::ZERO);
        assert_eq!(triangle.pull(), 0.0);
    }

    #[test]
    fn test_action_up_keeps_angle_and_drops_pull() {
        let mut triangle = ready_triangle();
        triangle.set_locked(false);
        triangle.on_action_move(Degrees::new(200.0), 9.0);
        triangle.on_action_up();
        assert_eq!(triangle.angle(), Degrees::new(200.0));
        assert_eq!(triangle.pull(), 0.0);
    }

    #[test]
    fn test_fill_samples_gradient_at_tip() {
        let mut triangle = ready_triangle();
        let geometry = triangle.geometry().unwrap();
        let colors = ColorPair::default();
        triangle.set_gradient(LinearGradient::across_dial(geometry, colors));
        triangle.create_path();

        let mut surface = RecordingSurface::default();
        triangle.on_draw(&mut surface).unwrap();
        // the resting tip sits east of the dial, beyond the gradient end
        let Op::Color(fill) = surface.ops[1] else {
            panic!("expected a solid fill, got {:?}", surface.ops[1]);
        };
        assert!((fill.red - colors.end.red).abs() < 1e-9);
        assert!((fill.green - colors.end.green).abs() < 1e-9);
        assert!((fill.blue - colors.end.blue).abs() < 1e-9);
        assert!(matches!(&surface.ops[2], Op::Polygon(p) if p.len() == 3));
        assert_eq!(surface.ops[3], Op::Fill);
    }

    #[test]
    fn test_draw_without_geometry_is_noop() {
        let triangle = TriangleRenderer::default();
        let mut surface = RecordingSurface::default();
        triangle.on_draw(&mut surface).unwrap();
        assert!(surface.ops.is_empty());
    }
}
