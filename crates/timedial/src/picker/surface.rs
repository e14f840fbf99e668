use super::gradient::LinearGradient;
use cairo::Context;
use dialgeom::Point;
use palette::Srgba;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error(transparent)]
    Cairo(#[from] cairo::Error),
}

/// The drawing capabilities the picker renderers need from a host canvas.
pub trait Surface {
    fn save(&mut self) -> Result<(), SurfaceError>;
    fn restore(&mut self) -> Result<(), SurfaceError>;
    fn set_line_width(&mut self, width: f64);
    fn set_source_color(&mut self, color: Srgba<f64>);
    fn set_source_gradient(&mut self, gradient: &LinearGradient) -> Result<(), SurfaceError>;
    /// Replaces the current path with a closed polygon through `points`.
    fn polygon(&mut self, points: &[Point]);
    fn stroke(&mut self) -> Result<(), SurfaceError>;
    fn fill(&mut self) -> Result<(), SurfaceError>;
}

impl Surface for Context {
    fn save(&mut self) -> Result<(), SurfaceError> {
        Ok(Context::save(self)?)
    }

    fn restore(&mut self) -> Result<(), SurfaceError> {
        Ok(Context::restore(self)?)
    }

    fn set_line_width(&mut self, width: f64) {
        Context::set_line_width(self, width);
    }

    fn set_source_color(&mut self, color: Srgba<f64>) {
        let (r, g, b, a) = color.into_components();
        self.set_source_rgba(r, g, b, a);
    }

    fn set_source_gradient(&mut self, gradient: &LinearGradient) -> Result<(), SurfaceError> {
        let pattern = cairo::LinearGradient::new(
            gradient.start.x,
            gradient.start.y,
            gradient.end.x,
            gradient.end.y,
        );
        for (offset, color) in [(0.0, gradient.colors.start), (1.0, gradient.colors.end)] {
            let (r, g, b, a) = color.into_components();
            pattern.add_color_stop_rgba(offset, r, g, b, a);
        }
        self.set_source(&pattern)?;
        Ok(())
    }

    fn polygon(&mut self, points: &[Point]) {
        self.new_path();
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.move_to(first.x, first.y);
        for p in rest {
            self.line_to(p.x, p.y);
        }
        self.close_path();
    }

    fn stroke(&mut self) -> Result<(), SurfaceError> {
        Ok(Context::stroke(self)?)
    }

    fn fill(&mut self) -> Result<(), SurfaceError> {
        Ok(Context::fill(self)?)
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Save,
        Restore,
        LineWidth(f64),
        Color(Srgba<f64>),
        Gradient(LinearGradient),
        Polygon(Vec<Point>),
        Stroke,
        Fill,
    }

    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub ops: Vec<Op>,
    }

    impl Surface for RecordingSurface {
        fn save(&mut self) -> Result<(), SurfaceError> {
            self.ops.push(Op::Save);
            Ok(())
        }

        fn restore(&mut self) -> Result<(), SurfaceError> {
            self.ops.push(Op::Restore);
            Ok(())
        }

        fn set_line_width(&mut self, width: f64) {
            self.ops.push(Op::LineWidth(width));
        }

        fn set_source_color(&mut self, color: Srgba<f64>) {
            self.ops.push(Op::Color(color));
        }

        fn set_source_gradient(&mut self, gradient: &LinearGradient) -> Result<(), SurfaceError> {
            self.ops.push(Op::Gradient(*gradient));
            Ok(())
        }

        fn polygon(&mut self, points: &[Point]) {
            self.ops.push(Op::Polygon(points.to_vec()));
        }

        fn stroke(&mut self) -> Result<(), SurfaceError> {
            self.ops.push(Op::Stroke);
            Ok(())
        }

        fn fill(&mut self) -> Result<(), SurfaceError> {
            self.ops.push(Op::Fill);
            Ok(())
        }
    }
}
