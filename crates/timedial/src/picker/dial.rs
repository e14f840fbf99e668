use super::gradient::LinearGradient;
use super::renderer::{DialGeometry, PickerRenderer};
use super::surface::{Surface, SurfaceError};
use super::{BULGE_SPREAD, DEFAULT_LINE_WIDTH, DIAL_SEGMENTS};
use dialgeom::{Degrees, Point, point_on_circle_border};

/// Gradient-stroked circle whose border stretches toward the finger while pulled.
#[derive(Debug, Clone)]
pub struct DialRenderer {
    geometry: Option<DialGeometry>,
    gradient: Option<LinearGradient>,
    line_width: f64,
    locked: bool,
    angle: Degrees,
    pull: f64,
    path: Vec<Point>,
}

impl Default for DialRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_WIDTH)
    }
}

impl DialRenderer {
    pub fn new(line_width: f64) -> Self {
        Self {
            geometry: None,
            gradient: None,
            line_width,
            locked: true,
            angle: Degrees::ZERO,
            pull: 0.0,
            path: Vec::new(),
        }
    }

    pub fn set_line_width(&mut self, line_width: f64) {
        self.line_width = line_width;
    }

    pub fn angle(&self) -> Degrees {
        self.angle
    }

    pub fn pull(&self) -> f64 {
        self.pull
    }

    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn gradient(&self) -> Option<&LinearGradient> {
        self.gradient.as_ref()
    }

    /// How much of the pull reaches the border at `theta`: 1 under the pointer, fading
    /// linearly to 0 at `BULGE_SPREAD` degrees away.
    fn falloff(&self, theta: Degrees) -> f64 {
        (1.0 - theta.distance_to(self.angle) / BULGE_SPREAD).max(0.0)
    }
}

impl PickerRenderer for DialRenderer {
    fn on_draw(&self, surface: &mut dyn Surface) -> Result<(), SurfaceError> {
        let Some(gradient) = &self.gradient else {
            return Ok(());
        };
        if self.path.is_empty() {
            return Ok(());
        }
        surface.save()?;
        surface.set_line_width(self.line_width);
        surface.set_source_gradient(gradient)?;
        surface.polygon(&self.path);
        surface.stroke()?;
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
        let Some(geometry) = self.geometry else {
            self.path.clear();
            return;
        };
        let step = 360.0 / DIAL_SEGMENTS as f64;
        self.path = (0..DIAL_SEGMENTS)
            .map(|i| {
                let theta = Degrees::new(i as f64 * step);
                let r = geometry.radius + self.pull * self.falloff(theta);
                point_on_circle_border(geometry.center, r, theta)
            })
            .collect();
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
