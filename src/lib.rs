//! redeem-ndarray: a small owned N-dimensional array.
//!
//! `NDArray<T>` stores `f32` or `f64` elements in a flat row-major buffer and
//! supports fill construction, deep copies, multi-index access and
//! elementwise addition/subtraction, including between arrays of different
//! precisions. `ArrayConfig` builds arrays whose element kind is chosen at
//! runtime.
//!
//! Everything runs eagerly on the calling thread.
pub mod config;
pub mod error;
pub mod math;

pub use config::{ArrayConfig, ElementKind};
pub use error::{NDArrayError, Result};
pub use math::{DynArray, Element, NDArray};
