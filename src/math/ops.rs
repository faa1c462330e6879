//! Elementwise addition and subtraction.
//!
//! The right operand may hold a different element kind than the left one.
//! Its elements are converted to the left kind before combining, and results
//! always carry the left operand's kind. Shapes must match exactly; there is
//! no broadcasting.
//!
//! The `try_*` methods report a size mismatch as an error. The `std::ops`
//! operators panic on it instead, since their signatures cannot fail.

use std::ops::{Add, AddAssign, Sub, SubAssign};

use num_traits::AsPrimitive;

use crate::error::Result;
use crate::math::array::NDArray;
use crate::math::element::Element;

impl<T: Element> NDArray<T> {
    /// `self += rhs`, elementwise. On a size mismatch `self` is left untouched.
    pub fn try_add_assign<U>(&mut self, rhs: &NDArray<U>) -> Result<&mut Self>
    where
        U: Element + AsPrimitive<T>,
    {
        self.zip_apply(rhs, |l, r| l + r)
    }

    /// `self -= rhs`, elementwise. On a size mismatch `self` is left untouched.
    pub fn try_sub_assign<U>(&mut self, rhs: &NDArray<U>) -> Result<&mut Self>
    where
        U: Element + AsPrimitive<T>,
    {
        self.zip_apply(rhs, |l, r| l - r)
    }

    /// New array holding `self + rhs`.
    pub fn try_add<U>(&self, rhs: &NDArray<U>) -> Result<NDArray<T>>
    where
        U: Element + AsPrimitive<T>,
    {
        let mut out = self.clone();
        out.try_add_assign(rhs)?;
        Ok(out)
    }

    /// New array holding `self - rhs`.
    pub fn try_sub<U>(&self, rhs: &NDArray<U>) -> Result<NDArray<T>>
    where
        U: Element + AsPrimitive<T>,
    {
        let mut out = self.clone();
        out.try_sub_assign(rhs)?;
        Ok(out)
    }

    fn zip_apply<U, F>(&mut self, rhs: &NDArray<U>, op: F) -> Result<&mut Self>
    where
        U: Element + AsPrimitive<T>,
        F: Fn(T, T) -> T,
    {
        self.ensure_same_size(rhs)?;
        for (l, &r) in self.data_mut().iter_mut().zip(rhs.data()) {
            *l = op(*l, <U as AsPrimitive<T>>::as_(r));
        }
        Ok(self)
    }
}

impl<'b, T, U> AddAssign<&'b NDArray<U>> for NDArray<T>
where
    T: Element,
    U: Element + AsPrimitive<T>,
{
    fn add_assign(&mut self, rhs: &'b NDArray<U>) {
        if let Err(err) = self.try_add_assign(rhs) {
            panic!("{}", err);
        }
    }
}

impl<'b, T, U> SubAssign<&'b NDArray<U>> for NDArray<T>
where
    T: Element,
    U: Element + AsPrimitive<T>,
{
    fn sub_assign(&mut self, rhs: &'b NDArray<U>) {
        if let Err(err) = self.try_sub_assign(rhs) {
            panic!("{}", err);
        }
    }
}

impl<'a, 'b, T, U> Add<&'b NDArray<U>> for &'a NDArray<T>
where
    T: Element,
    U: Element + AsPrimitive<T>,
{
    type Output = NDArray<T>;

    fn add(self, rhs: &'b NDArray<U>) -> Self::Output {
        match self.try_add(rhs) {
            Ok(out) => out,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<'b, T, U> Add<&'b NDArray<U>> for NDArray<T>
where
    T: Element,
    U: Element + AsPrimitive<T>,
{
    type Output = NDArray<T>;

    fn add(mut self, rhs: &'b NDArray<U>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a, 'b, T, U> Sub<&'b NDArray<U>> for &'a NDArray<T>
where
    T: Element,
    U: Element + AsPrimitive<T>,
{
    type Output = NDArray<T>;

    fn sub(self, rhs: &'b NDArray<U>) -> Self::Output {
        match self.try_sub(rhs) {
            Ok(out) => out,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<'b, T, U> Sub<&'b NDArray<U>> for NDArray<T>
where
    T: Element,
    U: Element + AsPrimitive<T>,
{
    type Output = NDArray<T>;

    fn sub(mut self, rhs: &'b NDArray<U>) -> Self::Output {
        self -= rhs;
        self
    }
}
