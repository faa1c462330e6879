use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use num_traits::AsPrimitive;

use crate::config::ElementKind;
use crate::error::{NDArrayError, Result};
use crate::math::element::Element;
use crate::math::shape::{self, MultiIndexIter};

/// Owned N-dimensional array stored as a flat row-major buffer.
///
/// The shape and the data are owned exclusively by the array. `Clone` makes a
/// deep copy, and moving out with [`NDArray::take`] leaves an empty array
/// behind.
///
/// An array is not internally synchronized. Sharing one between threads
/// follows the usual `&`/`&mut` rules.
#[derive(Debug, PartialEq)]
pub struct NDArray<T> {
    shape: Vec<usize>,
    data: Vec<T>,
}

impl<T> Default for NDArray<T> {
    fn default() -> Self {
        Self {
            shape: Vec::new(),
            data: Vec::new(),
        }
    }
}

impl<T: Clone> Clone for NDArray<T> {
    fn clone(&self) -> Self {
        Self {
            shape: self.shape.clone(),
            data: self.data.clone(),
        }
    }

    /// Copy-assignment. Existing buffers are reused when they are large enough.
    fn clone_from(&mut self, source: &Self) {
        self.shape.clone_from(&source.shape);
        self.data.clone_from(&source.data);
    }
}

impl<T: Element> NDArray<T> {
    /// Empty array: rank 0, no shape and no data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an array of the given shape.
    ///
    /// Elements are zero-initialized. Panics when the element count of
    /// `shape` overflows `usize`.
    pub fn from_shape(shape: &[usize]) -> Self {
        let len = shape::size_of_shape(shape);
        log::trace!("allocating {} array of shape {:?} ({} elements)", T::KIND, shape, len);
        Self {
            shape: shape.to_vec(),
            data: vec![T::zero(); len],
        }
    }

    /// Allocate an array of the given shape with every element set to `value`.
    ///
    /// `value` may be of another element kind; it is converted to `T` first.
    /// Panics when the element count of `shape` overflows `usize`.
    pub fn from_elem<U>(shape: &[usize], value: U) -> Self
    where
        U: Element + AsPrimitive<T>,
    {
        let len = shape::size_of_shape(shape);
        log::trace!(
            "allocating {} array of shape {:?} filled with {} {}",
            T::KIND,
            shape,
            U::KIND,
            value
        );
        Self {
            shape: shape.to_vec(),
            data: vec![<U as AsPrimitive<T>>::as_(value); len],
        }
    }

    /// Wrap an existing row-major buffer.
    pub fn from_shape_vec(shape: &[usize], data: Vec<T>) -> Result<Self> {
        if data.len() != shape::try_size_of_shape(shape)? {
            return Err(NDArrayError::BufferLength {
                shape: shape.to_vec(),
                len: data.len(),
            });
        }
        Ok(Self {
            shape: shape.to_vec(),
            data,
        })
    }

    /// Move the contents out, leaving `self` as an empty array.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Product of the shape entries.
    ///
    /// A rank-0 array reports 1, including a default array that holds no
    /// data. Use [`NDArray::is_allocated`] to tell the two apart.
    pub fn size(&self) -> usize {
        shape::size_of_shape(&self.shape)
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn strides(&self) -> Vec<usize> {
        shape::row_major_strides(&self.shape)
    }

    pub fn kind(&self) -> ElementKind {
        T::KIND
    }

    /// False for a default or moved-from array.
    pub fn is_allocated(&self) -> bool {
        !self.data.is_empty() || !self.shape.is_empty()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the flat buffer. Its length cannot be changed.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Every valid multi-index, in storage order.
    pub fn indices(&self) -> MultiIndexIter {
        if self.is_allocated() {
            MultiIndexIter::new(&self.shape)
        } else {
            MultiIndexIter::empty(&self.shape)
        }
    }

    pub fn fill<U>(&mut self, value: U)
    where
        U: Element + AsPrimitive<T>,
    {
        let value = <U as AsPrimitive<T>>::as_(value);
        self.data.iter_mut().for_each(|v| *v = value);
    }

    /// Row-major offset of `index`. The index is not validated.
    #[inline]
    pub fn offset_of(&self, index: &[usize]) -> usize {
        shape::ravel(&self.shape, index)
    }

    /// Checked element access.
    pub fn get(&self, index: &[usize]) -> Result<&T> {
        let offset = self.checked_offset(index)?;
        Ok(&self.data[offset])
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, index: &[usize]) -> Result<&mut T> {
        let offset = self.checked_offset(index)?;
        Ok(&mut self.data[offset])
    }

    fn checked_offset(&self, index: &[usize]) -> Result<usize> {
        shape::check_index(&self.shape, index)?;
        let offset = self.offset_of(index);
        // an unallocated array passes the rank-0 shape check but has no data
        if offset >= self.data.len() {
            return Err(NDArrayError::IndexOutOfRange {
                axis: 0,
                index: offset,
                extent: self.data.len(),
            });
        }
        Ok(offset)
    }

    /// True when both arrays have the same rank and extents, whatever their
    /// element kinds.
    pub fn check_sizes<U: Element>(&self, other: &NDArray<U>) -> bool {
        self.shape == other.shape
    }

    /// Size check used before any elementwise operation touches the data.
    ///
    /// Besides the shape, the buffer lengths have to agree, which rejects
    /// pairing an unallocated array with an allocated rank-0 one.
    pub(crate) fn ensure_same_size<U: Element>(&self, other: &NDArray<U>) -> Result<()> {
        if self.check_sizes(other) && self.data.len() == other.data.len() {
            return Ok(());
        }
        log::debug!(
            "rejecting elementwise op between {} {:?} and {} {:?}",
            T::KIND,
            self.shape,
            U::KIND,
            other.shape
        );
        Err(NDArrayError::SizeMismatch {
            left: self.shape.clone(),
            right: other.shape.clone(),
        })
    }

    #[inline]
    fn debug_check_index(&self, index: &[usize]) {
        if cfg!(debug_assertions) {
            if let Err(err) = shape::check_index(&self.shape, index) {
                panic!("{}", err);
            }
        }
    }
}

/// Unchecked fast path. A wrong number of indices or an index past its
/// extent is a caller error: debug builds panic, release builds only panic
/// when the computed offset leaves the buffer.
impl<'a, T: Element> Index<&'a [usize]> for NDArray<T> {
    type Output = T;

    fn index(&self, index: &'a [usize]) -> &Self::Output {
        self.debug_check_index(index);
        &self.data[self.offset_of(index)]
    }
}

impl<'a, T: Element> IndexMut<&'a [usize]> for NDArray<T> {
    fn index_mut(&mut self, index: &'a [usize]) -> &mut Self::Output {
        self.debug_check_index(index);
        let offset = self.offset_of(index);
        &mut self.data[offset]
    }
}

impl<T: Element, const N: usize> Index<[usize; N]> for NDArray<T> {
    type Output = T;

    fn index(&self, index: [usize; N]) -> &Self::Output {
        &self[&index[..]]
    }
}

impl<T: Element, const N: usize> IndexMut<[usize; N]> for NDArray<T> {
    fn index_mut(&mut self, index: [usize; N]) -> &mut Self::Output {
        &mut self[&index[..]]
    }
}
