use super::gradient::LinearGradient;
use super::surface::{Surface, SurfaceError};
use dialgeom::{Degrees, Point};

/// Center and radius of the dial, handed to each renderer by copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialGeometry {
    pub center: Point,
    pub radius: f64,
}

impl DialGeometry {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// One layer of the picker: the dial outline or the pointer.
///
/// A renderer keeps its own copy of the geometry and the last drag state, and rebuilds its
/// shape in [`PickerRenderer::create_path`]. While locked it ignores drag input.
pub trait PickerRenderer {
    fn on_draw(&self, surface: &mut dyn Surface) -> Result<(), SurfaceError>;

    fn geometry(&self) -> Option<DialGeometry>;
    fn set_geometry(&mut self, geometry: DialGeometry);

    fn is_locked(&self) -> bool;
    fn set_locked(&mut self, locked: bool);

    fn create_path(&mut self);

    fn on_action_move(&mut self, angle: Degrees, pull: f64);
    fn on_action_up(&mut self);

    fn set_gradient(&mut self, _gradient: LinearGradient) {}
}
