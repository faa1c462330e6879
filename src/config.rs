use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NDArrayError;
use crate::math::{DynArray, NDArray};

/// Floating-point precision of the elements stored in an array.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    #[default]
    F32,
    F64,
}

impl ElementKind {
    /// Bytes per element.
    pub fn size_of(&self) -> usize {
        match self {
            ElementKind::F32 => std::mem::size_of::<f32>(),
            ElementKind::F64 => std::mem::size_of::<f64>(),
        }
    }
}

impl FromStr for ElementKind {
    type Err = NDArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "f32" | "float" | "single" => Ok(ElementKind::F32),
            "f64" | "double" => Ok(ElementKind::F64),
            _ => Err(NDArrayError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::F32 => write!(f, "f32"),
            ElementKind::F64 => write!(f, "f64"),
        }
    }
}

/// Describes an array to allocate: its shape, element kind and optional fill.
///
/// Without a fill value the array is zero-initialized.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ArrayConfig {
    pub shape: Vec<usize>,

    #[serde(default)]
    pub kind: ElementKind,

    #[serde(default)]
    pub fill: Option<f64>,
}

impl ArrayConfig {
    pub fn new(shape: Vec<usize>, kind: ElementKind) -> Self {
        Self {
            shape,
            kind,
            fill: None,
        }
    }

    pub fn with_fill(mut self, value: f64) -> Self {
        self.fill = Some(value);
        self
    }

    pub fn build(&self) -> DynArray {
        log::debug!(
            "building {} array of shape {:?} (fill: {:?})",
            self.kind,
            self.shape,
            self.fill
        );
        match (self.kind, self.fill) {
            (ElementKind::F32, Some(value)) => NDArray::<f32>::from_elem(&self.shape, value).into(),
            (ElementKind::F32, None) => NDArray::<f32>::from_shape(&self.shape).into(),
            (ElementKind::F64, Some(value)) => NDArray::<f64>::from_elem(&self.shape, value).into(),
            (ElementKind::F64, None) => NDArray::<f64>::from_shape(&self.shape).into(),
        }
    }
}
