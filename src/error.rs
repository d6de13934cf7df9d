use std::alloc::Layout;
use thiserror::Error;

/// The global allocator could not provide memory for a new list node.
///
/// Returned by the fallible operations such as [`List::try_push_front`],
/// [`CursorMut::try_insert_after`] and [`List::try_clone`]. The list those
/// operations were called on is left exactly as it was before the call.
///
/// [`List::try_push_front`]: crate::List::try_push_front
/// [`List::try_clone`]: crate::List::try_clone
/// [`CursorMut::try_insert_after`]: crate::list::cursor::CursorMut::try_insert_after
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("memory allocation of {} bytes for a list node failed", .layout.size())]
pub struct AllocError {
    layout: Layout,
}

impl AllocError {
    pub(crate) fn new(layout: Layout) -> Self {
        Self { layout }
    }

    /// The layout of the node that failed to allocate.
    pub fn layout(&self) -> Layout {
        self.layout
    }
}
