use crate::point::{Degrees, Point};

/// Direction from `center` to `point`, normalized to `[0, 360)`.
pub fn angle_between(point: Point, center: Point) -> Degrees {
    let (dx, dy) = (point.x - center.x, point.y - center.y);
    Degrees::new(dy.atan2(dx).to_degrees()).normalized()
}

pub fn distance(p1: Point, p2: Point) -> f64 {
    (p1.x - p2.x).hypot(p1.y - p2.y)
}

pub fn point_on_circle_border(center: Point, radius: f64, angle: Degrees) -> Point {
    let rad = angle.to_radians();
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// The border counts as inside.
pub fn point_in_circle(point: Point, center: Point, radius: f64) -> bool {
    let (dx, dy) = (point.x - center.x, point.y - center.y);
    dx * dx + dy * dy <= radius * radius
}
