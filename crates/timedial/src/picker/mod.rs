pub mod behavior;
pub mod dial;
pub mod gradient;
pub mod renderer;
pub mod surface;
pub mod triangle;
pub mod value;

pub use behavior::{Behavior, PickerError, TouchEvent, TouchPhase, ValueListener};
pub use dial::DialRenderer;
pub use gradient::{ColorPair, LinearGradient};
pub use renderer::{DialGeometry, PickerRenderer};
pub use surface::{Surface, SurfaceError};
pub use triangle::TriangleRenderer;
pub use value::{PickerMode, ValueMapper};

pub const MAX_PULL_UP: f64 = 65.0;
pub const RADIUS_DIVISOR: f64 = 4.0;
pub const GRADIENT_START_ANGLE: f64 = 180.0;
pub const GRADIENT_END_ANGLE: f64 = 0.0;
pub const DEFAULT_LINE_WIDTH: f64 = 6.0;

// Dial outline
pub const DIAL_SEGMENTS: usize = 120;
pub const BULGE_SPREAD: f64 = 60.0; // degrees either side of the pointer that stretch with the pull

// Pointer triangle
pub const TRIANGLE_GAP: f64 = 12.0; // clearance between dial border and triangle base
pub const TRIANGLE_HEIGHT: f64 = 18.0;
pub const TRIANGLE_HALF_WIDTH: f64 = 10.0;
