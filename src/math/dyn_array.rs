use num_traits::AsPrimitive;

use crate::config::ElementKind;
use crate::error::Result;
use crate::math::array::NDArray;

/// An [`NDArray`] whose element kind is only known at runtime.
///
/// Arithmetic follows the same contract as the typed array: results keep the
/// left operand's kind, whatever the right operand holds.
#[derive(Debug, Clone, PartialEq)]
pub enum DynArray {
    F32(NDArray<f32>),
    F64(NDArray<f64>),
}

/// Run `$body` once for the typed array inside a `DynArray`.
macro_rules! with_array {
    ($value:expr, |$a:ident| $body:expr) => {
        match $value {
            DynArray::F32($a) => $body,
            DynArray::F64($a) => $body,
        }
    };
}

/// Run `$body` for every pairing of element kinds.
macro_rules! with_pair {
    ($lhs:expr, $rhs:expr, |$l:ident, $r:ident| $body:expr) => {
        match ($lhs, $rhs) {
            (DynArray::F32($l), DynArray::F32($r)) => $body,
            (DynArray::F32($l), DynArray::F64($r)) => $body,
            (DynArray::F64($l), DynArray::F32($r)) => $body,
            (DynArray::F64($l), DynArray::F64($r)) => $body,
        }
    };
}

impl DynArray {
    pub fn kind(&self) -> ElementKind {
        match self {
            DynArray::F32(_) => ElementKind::F32,
            DynArray::F64(_) => ElementKind::F64,
        }
    }

    pub fn shape(&self) -> &[usize] {
        with_array!(self, |a| a.shape())
    }

    pub fn rank(&self) -> usize {
        with_array!(self, |a| a.rank())
    }

    pub fn size(&self) -> usize {
        with_array!(self, |a| a.size())
    }

    pub fn is_allocated(&self) -> bool {
        with_array!(self, |a| a.is_allocated())
    }

    pub fn check_sizes(&self, other: &DynArray) -> bool {
        with_pair!(self, other, |l, r| l.check_sizes(r))
    }

    /// Checked read of one element, widened to `f64`.
    pub fn get(&self, index: &[usize]) -> Result<f64> {
        with_array!(self, |a| a.get(index).map(|v| AsPrimitive::<f64>::as_(*v)))
    }

    pub fn as_f32(&self) -> Option<&NDArray<f32>> {
        match self {
            DynArray::F32(a) => Some(a),
            DynArray::F64(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<&NDArray<f64>> {
        match self {
            DynArray::F64(a) => Some(a),
            DynArray::F32(_) => None,
        }
    }

    pub fn try_add_assign(&mut self, rhs: &DynArray) -> Result<&mut Self> {
        with_pair!(&mut *self, rhs, |l, r| {
            l.try_add_assign(r)?;
        });
        Ok(self)
    }

    pub fn try_sub_assign(&mut self, rhs: &DynArray) -> Result<&mut Self> {
        with_pair!(&mut *self, rhs, |l, r| {
            l.try_sub_assign(r)?;
        });
        Ok(self)
    }

    pub fn try_add(&self, rhs: &DynArray) -> Result<DynArray> {
        let mut out = self.clone();
        out.try_add_assign(rhs)?;
        Ok(out)
    }

    pub fn try_sub(&self, rhs: &DynArray) -> Result<DynArray> {
        let mut out = self.clone();
        out.try_sub_assign(rhs)?;
        Ok(out)
    }
}

impl From<NDArray<f32>> for DynArray {
    fn from(value: NDArray<f32>) -> Self {
        DynArray::F32(value)
    }
}

impl From<NDArray<f64>> for DynArray {
    fn from(value: NDArray<f64>) -> Self {
        DynArray::F64(value)
    }
}
