use crate::list::cursor::{Cursor, CursorIter, CursorIterMut, CursorMut};
use crate::list::{List, Node};
use std::fmt;
use std::iter::FusedIterator;

/// An iterator over the elements of a `List`.
///
/// It walks the chain from the first node, and counts down the number of
/// remaining elements so that its size is exact.
///
/// # Examples
///
/// ```compile_fail
/// use forward_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_front(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    next: Option<&'a Node<T>>,
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            next: list.head.as_deref(),
            len: list.len,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            len: self.len,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        self.clone().for_each(|element| {
            f.field(element);
        });
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return the element of the next node and step to the node after it, or
    /// return `None` if the chain is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next.as_deref();
        self.len -= 1;
        Some(&current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// # Examples
///
/// `List` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use forward_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.front());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    next: Option<&'a mut Node<T>>,
    len: usize,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self {
            next: list.head.as_deref_mut(),
            len: list.len,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("IterMut");
        let mut next = self.next.as_deref();
        while let Some(node) = next {
            f.field(&node.element);
            next = node.next.as_deref();
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.next.as_deref_mut();
        self.len -= 1;
        Some(&mut current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the list into an iterator yielding elements by value, front
    /// to back.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

/// Appends the elements to the back of the list, keeping their order.
impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cursor = self.before_begin_mut();
        cursor.move_to_last();
        iter.into_iter().for_each(|item| cursor.insert_after(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

/// Builds a list holding the elements of the array, front to back.
///
/// # Examples
///
/// ```
/// use forward_list::List;
///
/// let list = List::from([1, 2, 3]);
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(array: [T; N]) -> Self {
        Self::from_iter(array)
    }
}

impl<'a, T: 'a> Iterator for CursorIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_before_begin() {
            self.cursor.move_next().ok()?;
        }
        let current = self.cursor.current()?;
        self.cursor.move_next().ok()?;
        Some(current)
    }
}

impl<'a, T: 'a> FusedIterator for CursorIter<'a, T> {}

impl<'a, T: 'a> Iterator for CursorIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_element()
    }
}

impl<'a, T: 'a> FusedIterator for CursorIterMut<'a, T> {}

/// Convert the cursor to an iterator, which stops at the end of the list.
impl<'a, T: 'a> IntoIterator for Cursor<'a, T> {
    type Item = &'a T;
    type IntoIter = CursorIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        CursorIter { cursor: self }
    }
}

/// Convert the cursor to a mutable iterator, which stops at the end of the
/// list.
impl<'a, T: 'a> IntoIterator for CursorMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = CursorIterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        CursorIterMut { cursor: self }
    }
}

#[cfg(test)]
mod tests {
    use crate::list::tests::DropChecker;
    use crate::List;
    use std::cell::RefCell;
    use std::fmt::Debug;

    #[test]
    fn test_iter() {
        macro_rules! test_iter {
            ($FN:ident, $ITER:ident) => {
                fn $FN<T, I>(input: I)
                where
                    T: Eq + Debug + Clone,
                    I: IntoIterator<Item = T>,
                {
                    #[allow(unused_mut)]
                    let mut vec = Vec::from_iter(input);
                    #[allow(unused_mut)]
                    let mut list = List::from_iter(vec.clone());
                    let len = vec.len();
                    let mut iter = list.$ITER();
                    assert_eq!(iter.len(), len);
                    for (i, item) in vec.$ITER().enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        assert_eq!(iter.len(), len - i - 1);
                    }
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.len(), 0);
                }
            };
        }
        test_iter!(test_iter, iter);
        test_iter!(test_iter_mut, iter_mut);

        fn test_case<T, I>(input: I)
        where
            T: Eq + Debug + Clone,
            I: IntoIterator<Item = T> + Clone,
        {
            test_iter(input.clone());
            test_iter_mut(input);
        }
        test_case(0..10);
        test_case(0..2);
        test_case(0..1);
        test_case(0..0);
        test_case(["a", "b", "c"]);
    }

    #[test]
    fn test_into_iter() {
        let list = List::from_iter(0..5);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3, 4]);

        // Unconsumed elements are dropped with the iterator, front to back.
        let dropped = RefCell::new(Vec::new());
        let list = List::from_iter((0..4).map(|i| DropChecker::new(i, &dropped)));
        let mut iter = list.into_iter();
        drop(iter.next());
        drop(iter);
        assert_eq!(dropped.borrow().as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_for_loops() {
        let mut list = List::from([1, 2, 3]);
        for x in &mut list {
            *x *= 2;
        }
        let mut sum = 0;
        for x in &list {
            sum += x;
        }
        assert_eq!(sum, 12);
    }

    #[test]
    fn test_extend() {
        let mut list = List::new();
        list.extend([1, 2]);
        list.extend(&[3, 4]);
        list.extend(Vec::<i32>::new());
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(list.len(), 4);

        let list: List<char> = "abc".chars().collect();
        assert_eq!(list, List::from(['a', 'b', 'c']));
    }

    #[test]
    fn test_iter_debug() {
        let mut list = List::from([1, 2]);
        let mut iter = list.iter();
        assert_eq!(format!("{:?}", iter), "Iter(1, 2)");
        iter.next();
        assert_eq!(format!("{:?}", iter), "Iter(2)");
        assert_eq!(format!("{:?}", list.iter_mut()), "IterMut(1, 2)");
        assert_eq!(format!("{:?}", list.into_iter()), "IntoIter([1, 2])");
    }

    #[test]
    fn test_cursor_iter_fused() {
        let list = List::from([1, 2]);
        let mut iter = list.before_begin().into_iter();
        assert_eq!(iter.peek(), Some(&1));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.peek(), None);
        for _ in 0..3 {
            assert_eq!(iter.next(), None);
        }

        let mut list = List::<i32>::new();
        let mut iter = list.before_begin_mut().into_iter();
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
