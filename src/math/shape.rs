//! Shape and offset arithmetic for row-major buffers.
//!
//! These helpers work on plain `&[usize]` extents so that they can be shared
//! by every element kind without monomorphising the arithmetic.

use crate::error::{NDArrayError, Result};

/// Number of elements described by `shape`. The empty product is 1, so a
/// rank-0 shape describes a single scalar.
///
/// Fails with `ShapeOverflow` when the product does not fit in `usize`.
pub fn try_size_of_shape(shape: &[usize]) -> Result<usize> {
    if shape.contains(&0) {
        return Ok(0);
    }
    shape
        .iter()
        .try_fold(1usize, |acc, &extent| acc.checked_mul(extent))
        .ok_or_else(|| NDArrayError::ShapeOverflow {
            shape: shape.to_vec(),
        })
}

/// Infallible form of [`try_size_of_shape`].
///
/// Panics when the product overflows `usize`.
#[inline]
pub fn size_of_shape(shape: &[usize]) -> usize {
    match try_size_of_shape(shape) {
        Ok(len) => len,
        Err(err) => panic!("{}", err),
    }
}

/// Row-major strides, in elements. The last axis has stride 1.
pub fn row_major_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = shape
        .iter()
        .rev()
        .scan(1, |acc, &extent| {
            let current = *acc;
            *acc *= extent;
            Some(current)
        })
        .collect::<Vec<_>>();
    strides.reverse();
    strides
}

/// Linear offset of `index` in a row-major buffer of the given shape.
///
/// No validation is done here: `index` is expected to hold exactly one entry
/// per axis, each below its extent.
#[inline]
pub fn ravel(shape: &[usize], index: &[usize]) -> usize {
    let mut offset = 0;
    let mut stride = 1;
    for (&i, &extent) in index.iter().zip(shape.iter()).rev() {
        offset += i * stride;
        stride *= extent;
    }
    offset
}

/// Inverse of [`ravel`]: the multi-index addressed by a linear offset.
pub fn unravel(shape: &[usize], mut offset: usize) -> Vec<usize> {
    let mut index = vec![0; shape.len()];
    for (axis, &extent) in shape.iter().enumerate().rev() {
        if extent == 0 {
            continue;
        }
        index[axis] = offset % extent;
        offset /= extent;
    }
    index
}

/// Validate a multi-index against a shape.
pub fn check_index(shape: &[usize], index: &[usize]) -> Result<()> {
    if index.len() != shape.len() {
        return Err(NDArrayError::RankMismatch {
            expected: shape.len(),
            got: index.len(),
        });
    }
    for (axis, (&i, &extent)) in index.iter().zip(shape.iter()).enumerate() {
        if i >= extent {
            return Err(NDArrayError::IndexOutOfRange {
                axis,
                index: i,
                extent,
            });
        }
    }
    Ok(())
}

/// Iterator over every multi-index of a shape, last axis fastest.
#[derive(Debug, Clone)]
pub struct MultiIndexIter {
    shape: Vec<usize>,
    current: Vec<usize>,
    remaining: usize,
}

impl MultiIndexIter {
    pub fn new(shape: &[usize]) -> Self {
        Self::with_len(shape, size_of_shape(shape))
    }

    /// Iterator that yields nothing, used for arrays that were never allocated.
    pub(crate) fn empty(shape: &[usize]) -> Self {
        Self::with_len(shape, 0)
    }

    fn with_len(shape: &[usize], remaining: usize) -> Self {
        Self {
            shape: shape.to_vec(),
            current: vec![0; shape.len()],
            remaining,
        }
    }

    fn advance(&mut self) {
        for axis in (0..self.shape.len()).rev() {
            self.current[axis] += 1;
            if self.current[axis] < self.shape[axis] {
                return;
            }
            self.current[axis] = 0;
        }
    }
}

impl Iterator for MultiIndexIter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.current.clone();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for MultiIndexIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_of_shape() {
        assert_eq!(size_of_shape(&[2, 3, 4]), 24);
        assert_eq!(size_of_shape(&[5, 0, 2]), 0);
        // rank 0 is a scalar
        assert_eq!(size_of_shape(&[]), 1);
    }

    #[test]
    fn test_size_of_shape_overflow() {
        let huge = [1usize << (usize::BITS - 1), 2];
        assert_eq!(
            try_size_of_shape(&huge),
            Err(NDArrayError::ShapeOverflow {
                shape: huge.to_vec()
            })
        );
        // a zero extent anywhere makes the product zero
        assert_eq!(try_size_of_shape(&[usize::MAX, usize::MAX, 0]), Ok(0));
    }

    #[test]
    #[should_panic(expected = "more elements than fit in usize")]
    fn test_size_of_shape_panics_on_overflow() {
        size_of_shape(&[usize::MAX, 2]);
    }

    #[test]
    fn test_row_major_strides() {
        assert_eq!(row_major_strides(&[2, 3, 4]), vec![12, 4, 1]);
        assert_eq!(row_major_strides(&[7]), vec![1]);
        assert!(row_major_strides(&[]).is_empty());
    }

    #[test]
    fn test_ravel_matches_strides() {
        let shape = [3, 4, 5];
        let strides = row_major_strides(&shape);
        for index in MultiIndexIter::new(&shape) {
            let expected: usize = index.iter().zip(&strides).map(|(i, s)| i * s).sum();
            assert_eq!(ravel(&shape, &index), expected);
        }
    }

    #[test]
    fn test_unravel_inverts_ravel() {
        let shape = [2, 3, 2];
        for offset in 0..size_of_shape(&shape) {
            let index = unravel(&shape, offset);
            assert_eq!(ravel(&shape, &index), offset);
        }
    }

    #[test]
    fn test_multi_index_iter_order() {
        let indices: Vec<Vec<usize>> = MultiIndexIter::new(&[2, 2]).collect();
        assert_eq!(indices, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
    }

    #[test]
    fn test_multi_index_iter_edge_cases() {
        assert_eq!(MultiIndexIter::new(&[]).collect::<Vec<_>>(), vec![Vec::<usize>::new()]);
        assert_eq!(MultiIndexIter::new(&[3, 0]).count(), 0);
        assert_eq!(MultiIndexIter::empty(&[]).count(), 0);
        assert_eq!(MultiIndexIter::new(&[2, 3, 4]).len(), 24);
    }

    #[test]
    fn test_check_index() {
        let shape = [2, 3];
        assert!(check_index(&shape, &[1, 2]).is_ok());
        assert_eq!(
            check_index(&shape, &[1]),
            Err(NDArrayError::RankMismatch { expected: 2, got: 1 })
        );
        assert_eq!(
            check_index(&shape, &[1, 3]),
            Err(NDArrayError::IndexOutOfRange {
                axis: 1,
                index: 3,
                extent: 3
            })
        );
    }
}
