use std::alloc::{self, Layout};
use std::fmt::{Debug, Formatter};
use std::ptr::NonNull;

use crate::error::AllocError;
use crate::list::cursor::{Cursor, CursorMut, Position};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

pub(crate) mod algorithms;

/// The `List` is a singly-linked list with owned nodes. It allows inserting and
/// removing elements after any given position in constant time. In compromise,
/// reaching a position takes *O*(*n*) time, and the list can only be walked
/// forward.
///
/// The `List` contains:
/// - the sentinel link `head`, stored by value, that links to the first node
///   (or nothing if the list is empty). It never holds an element, and it is
///   what the "before-begin" position of a cursor refers to;
/// - a length field `len` indicating the number of nodes linked from `head`.
///
/// Each node owns the next one, so the chain is released front to back when
/// the list is dropped.
///
/// # Positions
///
/// In a list with length *n*, a cursor has *n* + 2 valid positions: the
/// before-begin position, the *n* elements, and the end (one past the last
/// element). Mutations are addressed *after* a position, which is why the
/// before-begin position exists: inserting after it is pushing to the front.
pub struct List<T> {
    /// the sentinel link to the first node
    pub(crate) head: Link<T>,
    /// the length of the list
    pub(crate) len: usize,
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) next: Link<T>,
}

// private methods
impl<T> List<T> {
    /// Return the link right after the node `prev`, or the sentinel if `prev`
    /// is `None`.
    ///
    /// It is unsafe because it does not check whether `prev` is a node of the
    /// list.
    unsafe fn link_after(&mut self, prev: Option<NonNull<Node<T>>>) -> &mut Link<T> {
        match prev {
            Some(node) => &mut (*node.as_ptr()).next,
            None => &mut self.head,
        }
    }

    /// Attach a detached node `node` to the list, right after the node `prev`
    /// (or first in the list if `prev` is `None`), and return the attached
    /// node.
    ///
    /// It is unsafe because it does not check whether `prev` is in the list.
    ///
    /// If `prev` does not belong to the list, this function call will make
    /// the list ill-formed.
    pub(crate) unsafe fn attach_after(
        &mut self,
        prev: Option<NonNull<Node<T>>>,
        mut node: Box<Node<T>>,
    ) -> NonNull<Node<T>> {
        debug_assert!(node.next.is_none(), "Cannot attach a linked node");
        let link = self.link_after(prev);
        node.next = link.take();
        let attached = NonNull::from(&mut **link.insert(node));
        self.len += 1;
        attached
    }

    /// Detach the node right after the node `prev` (or the first node if
    /// `prev` is `None`) from the list, and return it as a box, or return
    /// `None` if `prev` is the last node.
    ///
    /// It is unsafe because it does not check whether `prev` is in the list.
    ///
    /// If `prev` does not belong to the list, this function call will make
    /// the list ill-formed.
    pub(crate) unsafe fn detach_after(
        &mut self,
        prev: Option<NonNull<Node<T>>>,
    ) -> Option<Box<Node<T>>> {
        let link = self.link_after(prev);
        let mut node = link.take()?;
        *link = node.next.take();
        debug_assert!(self.len > 0, "Detached a node from an empty list");
        self.len -= 1;
        Some(node)
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use forward_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`, front to back.
    ///
    /// Clearing an empty list does nothing.
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
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.begin().current()
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.element)
    }

    /// Adds an element first in the list.
    ///
    /// Aborts the process if the node cannot be allocated, like
    /// [`Box::new`] does. See [`List::try_push_front`] for a fallible
    /// version.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.before_begin_mut().insert_after(elt);
    }

    /// Adds an element first in the list, or returns an error if the node
    /// cannot be allocated. On error, the list is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.try_push_front(1).is_ok());
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn try_push_front(&mut self, elt: T) -> Result<(), AllocError> {
        self.before_begin_mut().try_insert_after(elt)
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.before_begin_mut().erase_after()
    }

    /// Appends all elements of `iter` to the back of the list, or returns an
    /// error as soon as a node cannot be allocated.
    ///
    /// Elements appended before the failure stay in the list; the rest of
    /// `iter` is dropped.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m*) time, where *m* is the
    /// number of appended elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// assert!(list.try_extend(3..5).is_ok());
    /// assert_eq!(list, List::from([1, 2, 3, 4]));
    /// ```
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), AllocError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut cursor = self.before_begin_mut();
        cursor.move_to_last();
        iter.into_iter().try_for_each(|item| cursor.try_insert_after(item))
    }

    /// Swaps the contents of two lists.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and never allocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut a = List::from([1, 2, 3]);
    /// let mut b = List::from([4]);
    /// a.swap(&mut b);
    /// assert_eq!(a, List::from([4]));
    /// assert_eq!(b, List::from([1, 2, 3]));
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.head, &mut other.head);
        std::mem::swap(&mut self.len, &mut other.len);
    }

    /// Provides a cursor at the before-begin position.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let mut cursor = list.before_begin();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.peek_next(), Some(&1));
    ///
    /// assert!(cursor.move_next().is_ok());
    /// assert_eq!(cursor, list.begin());
    /// ```
    pub fn before_begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::BeforeBegin(NonNull::from(&self.head)))
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is at the end if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.begin().current(), Some(&1));
    ///
    /// let empty = List::<i32>::new();
    /// assert_eq!(empty.begin(), empty.end());
    /// ```
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::of_link(&self.head))
    }

    /// Provides a cursor at the end, one past the last element.
    ///
    /// It is equal to a default-constructed cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    /// use forward_list::list::cursor::Cursor;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.end().current(), None);
    /// assert_eq!(list.end(), Cursor::default());
    /// ```
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::End)
    }

    /// Provides a cursor with editing operations at the before-begin
    /// position.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([2, 3]);
    /// let mut cursor = list.before_begin_mut();
    /// cursor.insert_after(1);
    /// assert_eq!(cursor.current(), Some(&1));
    /// assert_eq!(list, List::from([1, 2, 3]));
    /// ```
    pub fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::before_begin(self)
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// The cursor is at the end if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.begin_mut();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&5));
    /// ```
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let mut cursor = CursorMut::before_begin(self);
        cursor.move_to_begin();
        cursor
    }

    /// Provides a forward iterator.
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
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element.
    pub(crate) fn new_detached(element: T) -> Box<Self> {
        Box::new(Node {
            element,
            next: None,
        })
    }

    /// Create a detached node with given element, or return an error if the
    /// global allocator fails. The element is dropped on error.
    pub(crate) fn try_new_detached(element: T) -> Result<Box<Self>, AllocError> {
        let layout = Layout::new::<Self>();
        // SAFETY: `layout` has a non-zero size, since a node always holds its
        // `next` link.
        let ptr = unsafe { alloc::alloc(layout) }.cast::<Self>();
        let ptr = NonNull::new(ptr).ok_or_else(|| AllocError::new(layout))?;
        // SAFETY:
        // - `ptr` is allocated by the global allocator with the layout of
        //   `Node<T>`, which is exactly what `Box<Node<T>>` owns;
        // - the node is fully initialized by `ptr::write` before the box is
        //   created.
        unsafe {
            ptr.as_ptr().write(Node {
                element,
                next: None,
            });
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::list::List;
    use std::cell::RefCell;

    /// Walk the chain from the sentinel and check the length field against it.
    pub(crate) fn assert_len<T>(list: &List<T>, expected: usize) {
        let mut count = 0;
        let mut link = &list.head;
        while let Some(node) = link {
            count += 1;
            link = &node.next;
        }
        assert_eq!(count, expected, "nodes reachable from the sentinel");
        assert_eq!(list.len(), expected, "length field");
        assert_eq!(list.is_empty(), expected == 0);
    }

    #[derive(Debug)]
    pub(crate) struct DropChecker<'a, T: Copy> {
        value: T,
        dropped: &'a RefCell<Vec<T>>,
    }

    impl<'a, T: Copy> DropChecker<'a, T> {
        pub(crate) fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
            Self { value, dropped }
        }

        pub(crate) fn dropped(&self) -> &'a RefCell<Vec<T>> {
            self.dropped
        }
    }

    impl<'a, T: Copy> Drop for DropChecker<'a, T> {
        fn drop(&mut self) {
            self.dropped.borrow_mut().push(self.value);
        }
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_front(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_front(), Some(1));
        assert!(list.is_empty());
        assert_len(&list, 0);
    }

    #[test]
    fn list_drop() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_front(DropChecker::new(3, &dropped));
        list.push_front(DropChecker::new(2, &dropped));
        list.push_front(DropChecker::new(1, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_drop_long_chain() {
        // Dropping must not recurse once per node.
        let mut list = List::new();
        for i in 0..200_000 {
            list.push_front(i);
        }
        assert_len(&list, 200_000);
        drop(list);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.pop_front(), None);
        assert_len(&list, 0);

        list.push_front(1);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), None);
        assert_len(&list, 0);

        list.push_front(1);
        list.push_front(2);
        list.push_front(3);
        assert_eq!(list.front(), Some(&3));
        assert_len(&list, 3);
        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert_len(&list, 0);
    }

    #[test]
    fn list_push_front_reverses() {
        let mut list = List::new();
        let (mut pushes, mut pops) = (0, 0);
        for i in 0..10 {
            list.push_front(i);
            pushes += 1;
            if i % 3 == 2 {
                list.pop_front();
                pops += 1;
            }
        }
        assert_len(&list, pushes - pops);
        assert_eq!(
            list.iter().copied().collect::<Vec<_>>(),
            vec![9, 7, 6, 4, 3, 1, 0]
        );
    }

    #[test]
    fn list_clear() {
        let mut list = List::<i32>::new();
        list.clear();
        assert_len(&list, 0);

        let dropped = RefCell::new(Vec::new());
        let mut list = List::from_iter((0..4).map(|i| DropChecker::new(i, &dropped)));
        list.clear();
        assert_len(&list, 0);
        assert_eq!(dropped.borrow().as_slice(), &[0, 1, 2, 3]);

        list.clear();
        assert_len(&list, 0);
        list.push_front(DropChecker::new(4, &dropped));
        assert_len(&list, 1);
    }

    #[test]
    fn list_front_mut() {
        let mut list = List::<i32>::new();
        assert_eq!(list.front_mut(), None);
        list.push_front(1);
        list.push_front(2);
        *list.front_mut().unwrap() += 10;
        assert_eq!(list, List::from([12, 1]));
    }

    #[test]
    fn list_try_push_front() {
        let mut list = List::new();
        list.try_push_front(3).unwrap();
        list.try_push_front(2).unwrap();
        list.push_front(1);
        assert_eq!(list, List::from([1, 2, 3]));
        assert_len(&list, 3);
    }

    #[test]
    fn list_try_extend() {
        let mut list = List::new();
        list.try_extend(0..3).unwrap();
        list.try_extend(None).unwrap();
        list.try_extend(vec![3, 4]).unwrap();
        assert_eq!(list, List::from_iter(0..5));
        assert_len(&list, 5);
    }

    #[test]
    fn list_swap() {
        let mut a = List::from([1, 2, 3]);
        let mut b = List::new();
        a.swap(&mut b);
        assert_len(&a, 0);
        assert_len(&b, 3);
        assert_eq!(b, List::from([1, 2, 3]));

        b.swap(&mut a);
        assert_eq!(a, List::from([1, 2, 3]));
        assert!(b.is_empty());
    }

    #[test]
    fn list_debug() {
        let list = List::from([1, 2, 3]);
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
        assert_eq!(format!("{:?}", List::<i32>::new()), "[]");
    }
}

// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use crate::list::tests::assert_len;
    use crate::List;
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        PushFront(u32),
        PopFront,
        InsertAfter(usize, u32),
        EraseAfter(usize),
        Clear,
        CloneAndSwap,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => any::<u32>().prop_map(Op::PushFront),
            2 => Just(Op::PopFront),
            3 => (0..16_usize, any::<u32>()).prop_map(|(at, v)| Op::InsertAfter(at, v)),
            2 => (0..16_usize).prop_map(Op::EraseAfter),
            1 => Just(Op::Clear),
            1 => Just(Op::CloneAndSwap),
        ]
    }

    /// Apply `op` to both the list and the `Vec` model. Positions are taken
    /// modulo `len + 1`, where 0 is the before-begin position.
    fn apply(list: &mut List<u32>, model: &mut Vec<u32>, op: Op) {
        match op {
            Op::PushFront(v) => {
                list.push_front(v);
                model.insert(0, v);
            }
            Op::PopFront => {
                let expected = if model.is_empty() {
                    None
                } else {
                    Some(model.remove(0))
                };
                assert_eq!(list.pop_front(), expected);
            }
            Op::InsertAfter(at, v) => {
                let at = at % (model.len() + 1);
                let mut cursor = list.before_begin_mut();
                cursor.seek_forward(at).unwrap();
                cursor.insert_after(v);
                assert_eq!(cursor.current(), Some(&v));
                model.insert(at, v);
            }
            Op::EraseAfter(at) => {
                let at = at % (model.len() + 1);
                let mut cursor = list.before_begin_mut();
                cursor.seek_forward(at).unwrap();
                let expected = if at < model.len() {
                    Some(model.remove(at))
                } else {
                    None
                };
                assert_eq!(cursor.erase_after(), expected);
            }
            Op::Clear => {
                list.clear();
                model.clear();
            }
            Op::CloneAndSwap => {
                let mut copy = list.clone();
                assert_eq!(&copy, &*list);
                list.swap(&mut copy);
            }
        }
    }

    proptest! {
        #[test]
        fn list_matches_vec_model(ops in proptest::collection::vec(op(), 0..200)) {
            let mut list = List::new();
            let mut model = Vec::new();
            for op in ops {
                apply(&mut list, &mut model, op);
                assert_len(&list, model.len());
                prop_assert!(list.iter().eq(model.iter()));
            }
        }
    }
}
