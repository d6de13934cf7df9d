use crate::error::AllocError;
use crate::list::{Link, List, Node};
use std::fmt;
use std::fmt::Formatter;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

/// The position of a cursor in a list, shared by [`Cursor`] and [`CursorMut`].
///
/// `BeforeBegin` holds the address of the sentinel link of the list, which
/// is only read by read-only cursors. `End` refers to no node, so all `End`
/// positions compare equal, whichever list they come from.
pub(crate) enum Position<T> {
    BeforeBegin(NonNull<Link<T>>),
    At(NonNull<Node<T>>),
    End,
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Position::BeforeBegin(a), Position::BeforeBegin(b)) => a == b,
            (Position::At(a), Position::At(b)) => a == b,
            (Position::End, Position::End) => true,
            _ => false,
        }
    }
}

impl<T> Eq for Position<T> {}

impl<T> Position<T> {
    /// The position of the node linked by `link`, or the end if `link` is the
    /// last link of a list.
    pub(crate) fn of_link(link: &Link<T>) -> Self {
        match link.as_deref() {
            Some(node) => Position::At(NonNull::from(node)),
            None => Position::End,
        }
    }

    /// Like [`Position::of_link`], but the position may be used to mutate the
    /// node.
    pub(crate) fn of_link_mut(link: &mut Link<T>) -> Self {
        match link.as_deref_mut() {
            Some(node) => Position::At(NonNull::from(node)),
            None => Position::End,
        }
    }

    /// Return the link right after the position, i.e. the sentinel for the
    /// before-begin position or the `next` link of a node, or `None` for the
    /// end.
    fn next_link(self) -> Option<NonNull<Link<T>>> {
        match self {
            Position::BeforeBegin(head) => Some(head),
            // SAFETY: `node` is a live node of the list borrowed by the cursor.
            // `addr_of_mut!` does not create an intermediate reference.
            Position::At(node) => unsafe {
                Some(NonNull::new_unchecked(ptr::addr_of_mut!(
                    (*node.as_ptr()).next
                )))
            },
            Position::End => None,
        }
    }
}

/// A read-only cursor over a `List`.
///
/// A `Cursor` is like an iterator that can stop anywhere, including at the
/// before-begin position. It moves forward only.
///
/// In a list with length *n*, there are *n* + 2 valid locations for the
/// cursor: before-begin, the *n* elements, and the end.
///
/// Though the `Cursor` does not hold a reference to the list, it actually
/// *borrows* (immutably) from the list, so a phantom marker of `&'a List<T>`
/// protects the list from being written while the cursor is alive. Copying a
/// cursor only copies its position.
///
/// # Examples
///
/// ```
/// use forward_list::List;
///
/// let list = List::from(['A', 'B', 'C']);
///
/// // Create a cursor before the first element: [| A B C #]
/// let mut cursor = list.before_begin();
/// assert_eq!(cursor.current(), None);
///
/// // Move cursor forward: [ A|B C #]
/// assert!(cursor.seek_forward(2).is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Move to the end and further: [ A B C|#]
/// assert!(cursor.seek_forward(2).is_ok());
/// assert!(cursor.is_end());
/// assert!(cursor.move_next().is_err());
/// ```
pub struct Cursor<'a, T: 'a> {
    pub(crate) position: Position<T>,
    _marker: PhantomData<&'a List<T>>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a> Copy for Cursor<'a, T> {}

/// A default cursor refers to no node, like the end of any list.
///
/// # Examples
///
/// ```
/// use forward_list::List;
/// use forward_list::list::cursor::Cursor;
///
/// let cursor = Cursor::<i32>::default();
/// assert!(cursor.is_end());
/// assert_eq!(cursor, List::from([1, 2]).end());
/// ```
impl<'a, T: 'a> Default for Cursor<'a, T> {
    fn default() -> Self {
        Self {
            position: Position::End,
            _marker: PhantomData,
        }
    }
}

/// A cursor over a `List` with editing operations.
///
/// The list is edited with the insert-after/erase-after protocol: every
/// mutation happens right after the cursor position, in constant time. Its
/// yielded references are tied to the cursor itself rather than to the list,
/// since the cursor may remove the nodes they point to later.
///
/// For convenience, [`CursorMut::view`] temporarily borrows the list
/// immutably, and [`CursorMut::as_cursor`] provides a read-only cursor at
/// the same position.
///
/// # Examples
///
/// ```compile_fail
/// use forward_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut cursor = list.begin_mut();
/// println!("{:?}", list.front());
/// cursor.insert_after(4);
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) position: Position<T>,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Returns `true` if the cursor is at the before-begin position.
            pub fn is_before_begin(&self) -> bool {
                matches!(self.position, Position::BeforeBegin(_))
            }

            /// Returns `true` if the cursor is at the end, one past the last
            /// element.
            pub fn is_end(&self) -> bool {
                matches!(self.position, Position::End)
            }

            /// Move forward the cursor by given steps, or return an error
            /// with the number of steps actually taken when the end is
            /// reached too early.
            ///
            /// If an error occurs, the cursor will stay at the end.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use forward_list::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.before_begin();
            ///
            /// assert!(cursor.seek_forward(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&2));
            ///
            /// assert_eq!(cursor.seek_forward(5), Err(2));
            /// assert!(cursor.is_end());
            /// ```
            pub fn seek_forward(&mut self, steps: usize) -> Result<(), usize> {
                (0..steps).try_for_each(|i| self.move_next().map_err(|_| i))
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("before_begin", &self.is_before_begin())
                    .field("current", &self.current())
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(_list: &'a List<T>, position: Position<T>) -> Self {
        Self {
            position,
            _marker: PhantomData,
        }
    }

    /// Move the cursor to the next position, or return an error if it is
    /// already at the end.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1]);
    /// let mut cursor = list.before_begin();
    ///
    /// assert!(cursor.move_next().is_ok());
    /// assert_eq!(cursor.current(), Some(&1));
    /// assert!(cursor.move_next().is_ok());
    /// assert_eq!(cursor, list.end());
    ///
    /// // Forbid to move past the end
    /// assert!(cursor.move_next().is_err());
    /// assert!(cursor.is_end());
    /// ```
    pub fn move_next(&mut self) -> Result<(), &'static str> {
        let link = self
            .position
            .next_link()
            .ok_or("`move_next` past the end of the list")?;
        // SAFETY: `link` belongs to the list borrowed by the cursor.
        self.position = Position::of_link(unsafe { link.as_ref() });
        Ok(())
    }

    /// Return an immutable reference of the element at the cursor, or return
    /// `None` if the cursor is at the before-begin position or at the end.
    ///
    /// This is the checked accessor. [`Cursor::get_unchecked`] is the
    /// unchecked one.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1, 2]);
    /// assert_eq!(list.before_begin().current(), None);
    /// assert_eq!(list.begin().current(), Some(&1));
    /// assert_eq!(list.end().current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        match self.position {
            // SAFETY: `node` is a live node of the list borrowed for `'a`.
            Position::At(node) => Some(unsafe { &node.as_ref().element }),
            _ => None,
        }
    }

    /// Return an immutable reference of the element at the cursor, without
    /// checking the position.
    ///
    /// # Safety
    ///
    /// The cursor must be at an element, i.e. neither at the before-begin
    /// position nor at the end. Otherwise the behavior is undefined.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1, 2]);
    /// let cursor = list.begin();
    /// assert_eq!(unsafe { cursor.get_unchecked() }, &1);
    /// ```
    pub unsafe fn get_unchecked(&self) -> &'a T {
        match self.position {
            Position::At(node) => &node.as_ref().element,
            _ => {
                debug_assert!(false, "Cannot dereference a cursor without element");
                std::hint::unreachable_unchecked()
            }
        }
    }

    /// Return an immutable reference of the element right after the cursor,
    /// or `None` if there is no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1, 2]);
    /// assert_eq!(list.before_begin().peek_next(), Some(&1));
    /// assert_eq!(list.begin().peek_next(), Some(&2));
    /// assert_eq!(list.end().peek_next(), None);
    /// ```
    pub fn peek_next(&self) -> Option<&'a T> {
        let link = self.position.next_link()?;
        // SAFETY: `link` belongs to the list borrowed for `'a`.
        let link: &'a Link<T> = unsafe { link.as_ref() };
        link.as_deref().map(|node| &node.element)
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn before_begin(list: &'a mut List<T>) -> Self {
        let position = Position::BeforeBegin(NonNull::from(&list.head));
        Self { position, list }
    }

    /// Return the node after which the list is edited, i.e. `Some(None)` for
    /// the sentinel, `Some(Some(node))` at a node, or `None` at the end.
    fn edit_point(&self) -> Option<Option<NonNull<Node<T>>>> {
        match self.position {
            Position::BeforeBegin(_) => Some(None),
            Position::At(node) => Some(Some(node)),
            Position::End => None,
        }
    }

    /// The position of the cursor, as seen by a read-only cursor.
    fn shared_position(&self) -> Position<T> {
        match self.position {
            Position::BeforeBegin(_) => Position::BeforeBegin(NonNull::from(&self.list.head)),
            position => position,
        }
    }

    /// Move the cursor to the next position, or return an error if it is
    /// already at the end.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1]);
    /// let mut cursor = list.before_begin_mut();
    ///
    /// assert!(cursor.move_next().is_ok());
    /// assert_eq!(cursor.current(), Some(&1));
    /// assert!(cursor.move_next().is_ok());
    /// assert!(cursor.is_end());
    /// assert!(cursor.move_next().is_err());
    /// ```
    pub fn move_next(&mut self) -> Result<(), &'static str> {
        let link = match self.position {
            Position::BeforeBegin(_) => &mut self.list.head,
            // SAFETY: `node` is a live node of the list mutably borrowed by
            // the cursor.
            Position::At(node) => unsafe { &mut (*node.as_ptr()).next },
            Position::End => return Err("`move_next` past the end of the list"),
        };
        self.position = Position::of_link_mut(link);
        Ok(())
    }

    /// Set the cursor to the before-begin position.
    ///
    /// This operation should compute in *O*(*1*) time.
    pub fn move_to_before_begin(&mut self) {
        self.position = Position::BeforeBegin(NonNull::from(&self.list.head));
    }

    /// Set the cursor to the first element, or to the end if the list is
    /// empty.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.before_begin_mut();
    /// assert!(cursor.seek_forward(3).is_ok());
    /// assert_eq!(cursor.current(), Some(&3));
    ///
    /// cursor.move_to_begin();
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn move_to_begin(&mut self) {
        self.position = Position::of_link_mut(&mut self.list.head);
    }

    /// Set the cursor to the last element, or to the before-begin position if
    /// the list is empty. Inserting after it then appends to the list.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// let mut cursor = list.begin_mut();
    /// cursor.move_to_last();
    /// cursor.insert_after(3);
    /// assert_eq!(list, List::from([1, 2, 3]));
    /// ```
    pub fn move_to_last(&mut self) {
        self.move_to_before_begin();
        while self.peek_next().is_some() && self.move_next().is_ok() {}
    }

    /// Return an immutable reference of the element at the cursor, or return
    /// `None` if the cursor is at the before-begin position or at the end.
    pub fn current(&self) -> Option<&T> {
        match self.position {
            // SAFETY: `node` is a live node of the list borrowed by the cursor.
            Position::At(node) => Some(unsafe { &node.as_ref().element }),
            _ => None,
        }
    }

    /// Return a mutable reference of the element at the cursor, or return
    /// `None` if the cursor is at the before-begin position or at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// let mut cursor = list.begin_mut();
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // Cannot mutate the before-begin position.
    /// cursor.move_to_before_begin();
    /// assert!(cursor.current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        match self.position {
            // SAFETY: `node` is a live node of the list mutably borrowed by
            // the cursor, and the returned reference borrows the cursor.
            Position::At(mut node) => Some(unsafe { &mut node.as_mut().element }),
            _ => None,
        }
    }

    /// Return a mutable reference of the element at the cursor, without
    /// checking the position.
    ///
    /// # Safety
    ///
    /// The cursor must be at an element, i.e. neither at the before-begin
    /// position nor at the end. Otherwise the behavior is undefined.
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        match self.position {
            Position::At(mut node) => &mut node.as_mut().element,
            _ => {
                debug_assert!(false, "Cannot dereference a cursor without element");
                std::hint::unreachable_unchecked()
            }
        }
    }

    /// Return an immutable reference of the element right after the cursor,
    /// or `None` if there is no such element.
    pub fn peek_next(&self) -> Option<&T> {
        let link = match self.position {
            Position::BeforeBegin(_) => &self.list.head,
            // SAFETY: `node` is a live node of the list borrowed by the cursor.
            Position::At(node) => unsafe { &node.as_ref().next },
            Position::End => return None,
        };
        link.as_deref().map(|node| &node.element)
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.shared_position())
    }

    /// Convert the mutable cursor to an immutable one.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        let position = self.shared_position();
        Cursor::new(self.list, position)
    }

    /// Temporarily view the list via an immutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.begin_mut();
    ///
    /// // Temporarily view the list
    /// assert_eq!(cursor.view().len(), 3);
    ///
    /// cursor.insert_after(4);
    /// assert_eq!(cursor.view(), &List::from([1, 4, 2, 3]));
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Insert an element right after the cursor, and move the cursor to the
    /// inserted element.
    ///
    /// Inserting after the before-begin position is pushing to the front.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.begin_mut();
    ///
    /// cursor.insert_after(99); // becomes [1, 99, 2, 3]
    /// assert_eq!(cursor.current(), Some(&99));
    ///
    /// cursor.move_to_before_begin();
    /// cursor.insert_after(0); // becomes [0, 1, 99, 2, 3]
    /// assert_eq!(cursor.current(), Some(&0));
    ///
    /// assert_eq!(list, List::from([0, 1, 99, 2, 3]));
    /// ```
    pub fn insert_after(&mut self, item: T) {
        let prev = self
            .edit_point()
            .expect("Cannot insert after the end of the list");
        let node = Node::new_detached(item);
        // SAFETY: `prev` is the cursor position, which belongs to `self.list`.
        self.position = Position::At(unsafe { self.list.attach_after(prev, node) });
    }

    /// Like [`CursorMut::insert_after`], but returns an error if the node
    /// cannot be allocated. On error, the list and the cursor are left
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1, 3]);
    /// let mut cursor = list.begin_mut();
    /// assert!(cursor.try_insert_after(2).is_ok());
    /// assert_eq!(cursor.current(), Some(&2));
    /// assert_eq!(list, List::from([1, 2, 3]));
    /// ```
    pub fn try_insert_after(&mut self, item: T) -> Result<(), AllocError> {
        let prev = self
            .edit_point()
            .expect("Cannot insert after the end of the list");
        let node = Node::try_new_detached(item)?;
        // SAFETY: `prev` is the cursor position, which belongs to `self.list`.
        self.position = Position::At(unsafe { self.list.attach_after(prev, node) });
        Ok(())
    }

    /// Remove the element right after the cursor and return it, or return
    /// `None` if there is no element after the cursor (the cursor is at the
    /// last element or at the end).
    ///
    /// The cursor stays put, so the element now following it is the one
    /// that followed the removed element. Erasing after the before-begin
    /// position is popping from the front.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from_iter(0..5);
    /// let mut cursor = list.begin_mut();
    ///
    /// assert_eq!(cursor.erase_after(), Some(1)); // becomes [0, 2, 3, 4]
    /// assert_eq!(cursor.current(), Some(&0));
    /// assert_eq!(cursor.peek_next(), Some(&2));
    ///
    /// cursor.move_to_before_begin();
    /// assert_eq!(cursor.erase_after(), Some(0)); // becomes [2, 3, 4]
    ///
    /// cursor.move_to_last();
    /// assert_eq!(cursor.erase_after(), None);
    ///
    /// assert_eq!(list, List::from([2, 3, 4]));
    /// ```
    pub fn erase_after(&mut self) -> Option<T> {
        let prev = self.edit_point()?;
        // SAFETY: `prev` is the cursor position, which belongs to `self.list`.
        unsafe { self.list.detach_after(prev) }.map(Node::into_element)
    }
}

/// Compare cursors by position.
///
/// Cursors are equal if they refer to the same node, or both refer to the
/// before-begin position of the same list, or both are at an end (of any
/// list). Read-only and mutable cursors compare with each other.
///
/// # Examples
///
/// ```
/// use forward_list::List;
///
/// let list = List::from([1, 2, 3]);
/// let cursor1 = list.begin();
/// let mut cursor2 = cursor1;
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next().unwrap();
/// assert_ne!(cursor1, cursor2);
///
/// let another_list = list.clone();
/// assert_ne!(list.begin(), another_list.begin());
/// assert_ne!(list.before_begin(), another_list.before_begin());
/// assert_eq!(list.end(), another_list.end());
/// ```
impl<'a, 'b, T> PartialEq<Cursor<'b, T>> for Cursor<'a, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.position == other.position
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, 'b, T> PartialEq<CursorMut<'b, T>> for CursorMut<'a, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.position == other.position
    }
}

impl<'a, T> Eq for CursorMut<'a, T> {}

/// # Examples
///
/// ```
/// use forward_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut cursor = list.before_begin_mut();
/// assert!(cursor == cursor.as_cursor());
///
/// cursor.move_next().unwrap();
/// let read_only = cursor.as_cursor();
/// assert!(cursor == read_only);
/// assert!(read_only == cursor);
/// ```
impl<'a, 'b, T> PartialEq<Cursor<'b, T>> for CursorMut<'a, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.position == other.position
    }
}

impl<'a, 'b, T> PartialEq<CursorMut<'b, T>> for Cursor<'a, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.position == other.position
    }
}

/// A read-only iterator from the position of a [`Cursor`] to the end of the
/// list. The before-begin position is skipped.
///
/// # Examples
///
/// ```
/// use forward_list::List;
///
/// let list = List::from([1, 2, 3]);
/// let mut cursor = list.begin();
/// cursor.move_next().unwrap();
///
/// let mut cursor_iter = cursor.into_iter();
/// assert_eq!(cursor_iter.next(), Some(&2));
/// assert_eq!(cursor_iter.peek(), Some(&3));
/// assert_eq!(cursor_iter.next(), Some(&3));
/// assert_eq!(cursor_iter.next(), None);
/// assert_eq!(cursor_iter.next(), None); // Fused
///
/// // Convert back to a cursor
/// assert!(cursor_iter.into_cursor().is_end());
/// ```
pub struct CursorIter<'a, T: 'a> {
    pub(crate) cursor: Cursor<'a, T>,
}

/// A mutable iterator from the position of a [`CursorMut`] to the end of
/// the list. The before-begin position is skipped.
///
/// The cursor cannot be taken back out, since the yielded references live
/// as long as the list borrow.
///
/// # Examples
///
/// ```
/// use forward_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// list.before_begin_mut().into_iter().for_each(|x| *x *= 5);
/// assert_eq!(list, List::from([5, 10, 15]));
/// ```
pub struct CursorIterMut<'a, T: 'a> {
    pub(crate) cursor: CursorMut<'a, T>,
}

impl<'a, T: 'a> CursorIter<'a, T> {
    /// Convert the iterator back to a cursor at its current position.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.cursor
    }

    /// Return the element the next call to `next` yields, without moving.
    pub fn peek(&self) -> Option<&'a T> {
        if self.cursor.is_before_begin() {
            return self.cursor.peek_next();
        }
        self.cursor.current()
    }
}

impl<'a, T: 'a> CursorIterMut<'a, T> {
    /// Return the element at the cursor with the lifetime of the list borrow,
    /// and move the cursor past it.
    pub(crate) fn next_element(&mut self) -> Option<&'a mut T> {
        if self.cursor.is_before_begin() {
            self.cursor.move_next().ok()?;
        }
        let node = match self.cursor.position {
            Position::At(node) => node,
            _ => return None,
        };
        self.cursor.move_next().ok()?;
        // SAFETY: the cursor has moved past `node`, never moves backward, and
        // is never handed out again, so this is the only reference to the
        // element.
        Some(unsafe { &mut *ptr::addr_of_mut!((*node.as_ptr()).element) })
    }
}

impl<'a, T: 'a> From<CursorIter<'a, T>> for Cursor<'a, T> {
    fn from(cursor_iter: CursorIter<'a, T>) -> Self {
        cursor_iter.into_cursor()
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::list::cursor::Cursor;
    use crate::list::tests::{assert_len, DropChecker};
    use crate::List;
    use std::cell::RefCell;

    fn to_vec<T: Clone>(list: &List<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn cursor_insert_and_erase_after() {
        let mut list = List::new();
        list.push_front(3);
        list.push_front(2);
        list.push_front(1);
        assert_eq!(to_vec(&list), vec![1, 2, 3]);
        assert_len(&list, 3);

        let mut cursor = list.begin_mut();
        cursor.insert_after(99);
        assert_eq!(cursor.current(), Some(&99));
        assert_eq!(to_vec(&list), vec![1, 99, 2, 3]);
        assert_len(&list, 4);

        let mut cursor = list.begin_mut();
        assert_eq!(cursor.erase_after(), Some(99));
        assert_eq!(cursor.current(), Some(&1));
        assert_eq!(cursor.peek_next(), Some(&2));
        assert_eq!(to_vec(&list), vec![1, 2, 3]);
        assert_len(&list, 3);
    }

    #[test]
    fn cursor_before_begin_is_front() {
        let mut pushed = List::from([2, 3]);
        let mut inserted = pushed.clone();
        pushed.push_front(1);
        inserted.before_begin_mut().insert_after(1);
        assert_eq!(pushed, inserted);
        assert_len(&inserted, 3);

        assert_eq!(pushed.pop_front(), inserted.before_begin_mut().erase_after());
        assert_eq!(pushed, inserted);
        assert_len(&inserted, 2);

        let mut empty = List::<i32>::new();
        assert_eq!(empty.before_begin_mut().erase_after(), None);
        assert_len(&empty, 0);
    }

    #[test]
    fn cursor_erase_after_last() {
        let mut list = List::from([1, 2]);
        let mut cursor = list.begin_mut();
        cursor.move_to_last();
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(cursor.erase_after(), None);
        assert!(cursor.move_next().is_ok());
        assert!(cursor.is_end());
        assert_eq!(cursor.erase_after(), None);
        assert_len(&list, 2);
    }

    #[test]
    #[should_panic(expected = "Cannot insert after the end of the list")]
    fn cursor_insert_after_end() {
        let mut list = List::from([1]);
        let mut cursor = list.begin_mut();
        cursor.move_next().unwrap();
        cursor.insert_after(2);
    }

    #[test]
    fn cursor_build_in_order() {
        let mut list = List::new();
        let mut cursor = list.before_begin_mut();
        for i in 0..5 {
            cursor.insert_after(i);
        }
        assert_eq!(to_vec(&list), vec![0, 1, 2, 3, 4]);
        assert_len(&list, 5);
    }

    #[test]
    fn cursor_erase_all_after() {
        let dropped = RefCell::new(Vec::new());
        let mut list = List::from_iter((0..5).map(|i| DropChecker::new(i, &dropped)));
        let mut cursor = list.begin_mut();
        while cursor.erase_after().is_some() {}
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3, 4]);
        assert_len(&list, 1);
    }

    #[test]
    fn cursor_state_machine() {
        let list = List::from([1, 2]);
        let mut cursor = list.before_begin();
        assert!(cursor.is_before_begin());
        assert!(!cursor.is_end());
        assert_eq!(cursor.current(), None);

        cursor.move_next().unwrap();
        assert_eq!(cursor, list.begin());
        assert_eq!(cursor.current(), Some(&1));

        cursor.move_next().unwrap();
        assert_eq!(cursor.current(), Some(&2));

        cursor.move_next().unwrap();
        assert!(cursor.is_end());
        assert_eq!(cursor, list.end());
        assert!(cursor.move_next().is_err());
        assert_eq!(cursor, list.end());

        let empty = List::<i32>::new();
        assert_eq!(empty.begin(), empty.end());
        assert_ne!(empty.before_begin(), empty.end());
    }

    #[test]
    fn cursor_equality() {
        let list = List::from([1, 2, 3]);
        let other = List::from([1, 2, 3]);

        // Copies refer to the same node.
        let a = list.begin();
        let mut b = a;
        assert_eq!(a, b);
        b.move_next().unwrap();
        assert_ne!(a, b);

        // Equal values in different lists are different nodes.
        assert_ne!(list.begin(), other.begin());
        assert_ne!(list.before_begin(), other.before_begin());
        assert_eq!(list.before_begin(), list.before_begin());

        // All ends are the same.
        assert_eq!(list.end(), other.end());
        assert_eq!(Cursor::<i32>::default(), list.end());
        assert_ne!(Cursor::<i32>::default(), list.begin());
    }

    #[test]
    fn cursor_equality_across_mutability() {
        let mut list = List::from([1, 2, 3]);
        let mut cursor = list.before_begin_mut();
        assert!(cursor == cursor.as_cursor());
        assert!(cursor.as_cursor() == cursor);
        assert!(cursor.as_cursor().is_before_begin());

        cursor.insert_after(0);
        let snapshot = cursor.as_cursor();
        assert_eq!(snapshot.current(), Some(&0));
        assert!(cursor == snapshot);

        // Different positions, in the same list or across lists.
        let other = List::from([0, 1, 2, 3]);
        assert!(cursor != Cursor::<i32>::default());
        assert!(Cursor::<i32>::default() != cursor);
        assert!(cursor != other.begin());
        assert!(other.before_begin() != cursor);
        cursor.move_to_before_begin();
        assert!(cursor != other.before_begin());
        assert!(cursor != Cursor::<i32>::default());

        let read_only = cursor.into_cursor();
        assert!(read_only.is_before_begin());
        assert_eq!(read_only.peek_next(), Some(&0));
        assert_eq!(read_only.into_iter().count(), 4);
        assert_eq!(list.before_begin().peek_next(), Some(&0));
    }

    #[test]
    fn cursor_get_unchecked() {
        let mut list = List::from([1, 2]);
        assert_eq!(unsafe { list.begin().get_unchecked() }, &1);
        let mut cursor = list.begin_mut();
        cursor.move_next().unwrap();
        unsafe { *cursor.get_unchecked_mut() = 20 };
        assert_eq!(list, List::from([1, 20]));
    }

    #[test]
    fn cursor_seek_forward() {
        let mut list = List::from_iter(0..5);
        let mut cursor = list.before_begin_mut();
        assert_eq!(cursor.seek_forward(0), Ok(()));
        assert!(cursor.is_before_begin());
        assert_eq!(cursor.seek_forward(3), Ok(()));
        assert_eq!(cursor.current(), Some(&2));
        assert_eq!(cursor.seek_forward(10), Err(3));
        assert!(cursor.is_end());
        cursor.move_to_begin();
        assert_eq!(cursor.current(), Some(&0));
    }

    #[test]
    fn cursor_iter() {
        let list = List::from([1, 2, 3]);
        assert_eq!(list.before_begin().into_iter().count(), 3);
        assert_eq!(list.end().into_iter().next(), None);

        let mut cursor = list.begin();
        cursor.move_next().unwrap();
        assert_eq!(cursor.into_iter().copied().collect::<Vec<_>>(), vec![2, 3]);

        let mut list = List::from([1, 2, 3]);
        let mut cursor = list.begin_mut();
        cursor.move_next().unwrap();
        cursor.into_iter().for_each(|x| *x *= 10);
        assert_eq!(list, List::from([1, 20, 30]));
    }

    #[test]
    fn cursor_debug() {
        let list = List::from([1]);
        assert_eq!(
            format!("{:?}", list.begin()),
            "Cursor { before_begin: false, current: Some(1) }"
        );
        assert_eq!(
            format!("{:?}", list.before_begin()),
            "Cursor { before_begin: true, current: None }"
        );
    }
}
