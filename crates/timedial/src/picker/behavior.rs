use super::dial::DialRenderer;
use super::gradient::{ColorPair, LinearGradient};
use super::renderer::{DialGeometry, PickerRenderer};
use super::surface::{Surface, SurfaceError};
use super::triangle::TriangleRenderer;
use super::value::ValueMapper;
use super::{MAX_PULL_UP, RADIUS_DIVISOR};
use dialgeom::{Degrees, Point, angle_between, distance, point_in_circle};
use strum::Display as StrumDisplay;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PickerError {
    #[error("Invalid picker geometry: {width}x{height}")]
    InvalidGeometry { width: i32, height: i32 },
    #[error("Picker used before its size was known")]
    UninitializedState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum TouchPhase {
    Press,
    Move,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub position: Point,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, position: Point) -> Self {
        Self { phase, position }
    }

    pub fn press(x: f64, y: f64) -> Self {
        Self::new(TouchPhase::Press, Point::new(x, y))
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(TouchPhase::Move, Point::new(x, y))
    }

    pub fn release(x: f64, y: f64) -> Self {
        Self::new(TouchPhase::Release, Point::new(x, y))
    }
}

pub trait ValueListener {
    fn on_value(&mut self, value: i32);
}

impl<F> ValueListener for F
where
    F: FnMut(i32),
{
    fn on_value(&mut self, value: i32) {
        self(value)
    }
}

/// Touch-driven controller for a circular picker.
///
/// Owns the dial and pointer renderers, turns touch positions into an angle and a pull
/// distance, and reports `mapper.value(angle)` to the listener while the picker is active.
pub struct Behavior<M, D = DialRenderer, T = TriangleRenderer> {
    dial: D,
    triangle: T,
    colors: ColorPair,
    mapper: M,
    geometry: Option<DialGeometry>,
    gradient: Option<LinearGradient>,
    previous_touch: Point,
    angle: Degrees,
    picker_active: bool,
    listener: Option<Box<dyn ValueListener>>,
}

impl<M: ValueMapper> Behavior<M> {
    pub fn standard(mapper: M, colors: ColorPair, line_width: f64) -> Self {
        Self::new(
            DialRenderer::new(line_width),
            TriangleRenderer::default(),
            colors,
            mapper,
        )
    }
}

impl<M, D, T> Behavior<M, D, T>
where
    M: ValueMapper,
    D: PickerRenderer,
    T: PickerRenderer,
{
    pub fn new(dial: D, triangle: T, colors: ColorPair, mapper: M) -> Self {
        Self {
            dial,
            triangle,
            colors,
            mapper,
            geometry: None,
            gradient: None,
            previous_touch: Point::default(),
            angle: Degrees::ZERO,
            picker_active: false,
            listener: None,
        }
    }

    pub fn dial(&self) -> &D {
        &self.dial
    }

    pub fn dial_mut(&mut self) -> &mut D {
        &mut self.dial
    }

    pub fn triangle(&self) -> &T {
        &self.triangle
    }

    pub fn angle(&self) -> Degrees {
        self.angle
    }

    pub fn previous_touch(&self) -> Point {
        self.previous_touch
    }

    pub fn gradient(&self) -> Option<&LinearGradient> {
        self.gradient.as_ref()
    }

    pub fn colors(&self) -> ColorPair {
        self.colors
    }

    pub fn geometry(&self) -> Result<DialGeometry, PickerError> {
        self.geometry.ok_or(PickerError::UninitializedState)
    }

    pub fn is_picker_active(&self) -> bool {
        self.picker_active
    }

    pub fn set_picker_active(&mut self, active: bool) {
        self.picker_active = active;
    }

    pub fn set_mapper(&mut self, mapper: M) {
        self.mapper = mapper;
    }

    /// Swaps the gradient colors, repainting immediately when the size is already known.
    pub fn set_colors(&mut self, colors: ColorPair) {
        self.colors = colors;
        if let Some(geometry) = self.geometry {
            self.update_paint(geometry);
        }
    }

    pub fn set_value_listener(&mut self, listener: impl ValueListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_value_listener(&mut self) {
        self.listener = None;
    }

    /// Current value for the last computed angle.
    pub fn value(&self) -> i32 {
        self.mapper.value(self.angle.truncated())
    }

    pub fn on_draw(&self, surface: &mut dyn Surface) -> Result<(), SurfaceError> {
        if self.geometry.is_none() {
            log::trace!("Skipping draw, picker has no size yet");
            return Ok(());
        }
        self.dial.on_draw(surface)?;
        self.triangle.on_draw(surface)
    }

    pub fn on_size_changed(&mut self, width: i32, height: i32) -> Result<(), PickerError> {
        if width <= 0 || height <= 0 {
            return Err(PickerError::InvalidGeometry { width, height });
        }
        let center = Point::new(width as f64 / 2.0, height as f64 / 2.0);
        let radius = width.min(height) as f64 / RADIUS_DIVISOR;
        let geometry = DialGeometry::new(center, radius);

        log::debug!("Picker resized to {width}x{height}, radius {radius}");

        self.geometry = Some(geometry);
        self.update_paint(geometry);
        self.draw_shapes(geometry);
        Ok(())
    }

    /// Always reports the event as handled.
    pub fn on_touch_event(&mut self, event: TouchEvent) -> bool {
        log::trace!("{} at ({}, {})", event.phase, event.position.x, event.position.y);
        match event.phase {
            TouchPhase::Press => self.on_action_down(event.position),
            TouchPhase::Move => self.on_action_move(event.position),
            TouchPhase::Release => self.on_action_up(),
        }
        true
    }

    fn renderers_mut(&mut self) -> [&mut dyn PickerRenderer; 2] {
        let renderers: [&mut dyn PickerRenderer; 2] = [&mut self.dial, &mut self.triangle];
        renderers
    }

    fn update_paint(&mut self, geometry: DialGeometry) {
        let gradient = LinearGradient::across_dial(geometry, self.colors);
        self.gradient = Some(gradient);
        for renderer in self.renderers_mut() {
            renderer.set_gradient(gradient);
        }
    }

    fn draw_shapes(&mut self, geometry: DialGeometry) {
        self.previous_touch = geometry.center;
        for renderer in self.renderers_mut() {
            renderer.set_geometry(geometry);
            renderer.create_path();
        }
    }

    fn on_action_down(&mut self, point: Point) {
        self.previous_touch = point;
        let Ok(geometry) = self.geometry() else {
            log::debug!("Press before the picker was sized, leaving locks untouched");
            return;
        };
        let inside = point_in_circle(point, geometry.center, geometry.radius);
        for renderer in self.renderers_mut() {
            renderer.set_locked(!inside);
        }
    }

    fn on_action_move(&mut self, point: Point) {
        self.previous_touch = point;
        if !self.picker_active {
            return;
        }
        let Ok(geometry) = self.geometry() else {
            log::debug!("Ignoring move before the picker was sized");
            return;
        };

        self.angle = angle_between(point, geometry.center);
        let pull = (distance(point, geometry.center) - geometry.radius).clamp(0.0, MAX_PULL_UP);

        self.dial.on_action_move(self.angle, pull);
        if pull > 0.0 {
            self.triangle.on_action_move(self.angle, pull);
        }

        let value = self.value();
        if let Some(listener) = self.listener.as_mut() {
            listener.on_value(value);
        }
    }

    fn on_action_up(&mut self) {
        for renderer in self.renderers_mut() {
            renderer.set_locked(true);
            renderer.on_action_up();
        }
    }
}
