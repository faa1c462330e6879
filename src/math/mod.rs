//! The N-dimensional array and its supporting pieces.
//!
//! `NDArray<T>` owns a shape and a flat row-major buffer. Elementwise
//! arithmetic lives in `ops`, shape arithmetic in `shape`, and `DynArray`
//! wraps arrays whose element kind is picked at runtime.
pub mod array;
pub mod dyn_array;
pub mod element;
pub mod ops;
pub mod shape;

pub use array::NDArray;
pub use dyn_array::DynArray;
pub use element::Element;
pub use shape::MultiIndexIter;
