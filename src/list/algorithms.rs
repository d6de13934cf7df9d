use crate::error::AllocError;
use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

/// Lists are ordered lexicographically, and a strict prefix is less than the
/// longer list.
///
/// # Examples
///
/// ```
/// use forward_list::List;
///
/// assert!(List::from([1, 2, 3]) < List::from([1, 2, 4]));
/// assert!(List::from([1, 2]) < List::from([1, 2, 3]));
/// assert!(List::from([2]) > List::from([1, 9, 9]));
/// assert!(List::<i32>::new() <= List::new());
/// ```
impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    /// Copies the list in one pass, inserting every element after the last
    /// inserted one.
    ///
    /// If cloning an element panics, the elements copied so far are dropped
    /// and `self` is left untouched.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Copies `source` into a fresh list, then swaps it in. The old elements
    /// of `self` are dropped afterwards; if cloning panics, `self` is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let source = List::from([1, 2, 3]);
    /// let mut list = List::from([9]);
    /// list.clone_from(&source);
    /// assert_eq!(list, source);
    /// ```
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.iter().for_each(|elt| elt.hash(state));
        self.len.hash(state);
    }
}

impl<T: Clone> List<T> {
    /// Copies the list like [`Clone::clone`], but returns an error if a node
    /// cannot be allocated. The partial copy is dropped on error.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from(["a", "b"]);
    /// let copy = list.try_clone().unwrap();
    /// assert_eq!(copy, list);
    /// ```
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        let mut copy = List::new();
        copy.try_extend(self.iter().cloned())?;
        Ok(copy)
    }

    /// Copies `source` into the list like [`Clone::clone_from`], but returns
    /// an error if a node cannot be allocated. On error, the list is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let source = List::from([1, 2]);
    /// let mut list = List::new();
    /// assert!(list.try_clone_from(&source).is_ok());
    /// assert_eq!(list, source);
    /// ```
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), AllocError> {
        let mut copy = source.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// list.push_front(0);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}

/// Swaps the contents of two lists, like [`List::swap`].
///
/// # Examples
///
/// ```
/// use forward_list::List;
///
/// let mut a = List::from([1]);
/// let mut b = List::from([2, 3]);
/// forward_list::swap(&mut a, &mut b);
/// assert_eq!(a, List::from([2, 3]));
/// assert_eq!(b, List::from([1]));
/// ```
pub fn swap<T>(lhs: &mut List<T>, rhs: &mut List<T>) {
    lhs.swap(rhs);
}
