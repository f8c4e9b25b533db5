//! Iteration over the success value of a [`Rail`].
//!
//! A rail behaves like a container of at most one value: a successful rail
//! yields its value once, a failed rail yields nothing.

use crate::types::rail::Rail;

/// Borrowing iterator over the success value, created by [`Rail::iter`].
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

/// Owning iterator over the success value, created by consuming a [`Rail`].
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> Rail<T> {
    /// Returns an iterator yielding the success value zero or one time.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Rail;
    ///
    /// let rail = Rail::success(3);
    /// assert_eq!(rail.iter().copied().sum::<i32>(), 3);
    ///
    /// let rail = Rail::<i32>::failure("nope");
    /// assert_eq!(rail.iter().count(), 0);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.value() }
    }
}

impl<T> IntoIterator for Rail<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_value() }
    }
}

impl<'a, T> IntoIterator for &'a Rail<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
