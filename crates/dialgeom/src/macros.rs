#[macro_export]
macro_rules! impl_scalar_newtype {
    ($name:ty) => {
        impl $name {
            pub fn new(v: impl Into<f64>) -> Self {
                Self(v.into())
            }

            pub fn value(&self) -> f64 {
                self.0
            }
        }
    };
}
