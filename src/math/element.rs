use std::fmt::{Debug, Display};

use num_traits::{AsPrimitive, Float};

use crate::config::ElementKind;

/// Floating-point kinds an [`NDArray`](crate::math::NDArray) can store.
///
/// Every element kind converts to every other with `as` semantics, which is
/// what the mixed-precision fill and arithmetic paths rely on.
pub trait Element:
    Float + Debug + Display + Default + Send + Sync + AsPrimitive<f32> + AsPrimitive<f64> + 'static
{
    const KIND: ElementKind;
}

impl Element for f32 {
    const KIND: ElementKind = ElementKind::F32;
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::F64;
}
