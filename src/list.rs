//! Doubly-linked list with slab-backed node storage.
//!
//! Nodes live in a growable [`slab::Slab`] owned by the list; `prev`/`next`
//! links and the list's `head`/`tail` are slab keys with a sentinel value
//! for "no node". Removed slots go on the slab's free list and are reused
//! by later insertions, so long-lived lists don't leak capacity.
//!
//! # Index addressing
//!
//! Positional operations take an `isize` and accept negative positions
//! counted from the tail: `0` is the head, `-1` is the tail, `-2` the node
//! before it, and so on. A position in the nearer half of the list is
//! reached from that end, halving the average traversal cost.
//!
//! ```
//! use slablist::List;
//!
//! let mut list = List::new();
//! list.push_back("a");
//! list.push_back("b");
//! list.push_front("z");
//!
//! // [z, a, b]
//! assert_eq!(list.get(1), Ok(&"a"));
//! assert_eq!(list.get(-1), Ok(&"b"));
//!
//! // Remove the tail by negative position
//! assert_eq!(list.remove(-1), Ok("b"));
//! assert_eq!(list.len(), 2);
//! ```
//!
//! # Checked vs unchecked access
//!
//! The checked methods return [`OutOfRange`] for an empty list or a
//! position outside `[0, len)` after normalization. Callers that have
//! already validated a position against [`len`](List::len) can use the
//! `unsafe` [`get_unchecked`](List::get_unchecked) /
//! [`remove_unchecked`](List::remove_unchecked) fast path, which skips
//! validation entirely.

use std::fmt;

use slab::Slab;

/// Sentinel slab key meaning "no node".
///
/// Slab keys are dense indices starting at 0, so `usize::MAX` can never
/// collide with a real key.
const NONE: usize = usize::MAX;

/// Error returned when a position does not address a node.
///
/// Carries the position as given by the caller (before negative-index
/// normalization) and the list length at the time of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// The requested position, as passed in.
    pub index: isize,
    /// The list length when the lookup failed.
    pub len: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position {} out of range for list of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfRange {}

/// A node in the list: payload plus links to both neighbors.
#[derive(Debug)]
struct Node<T> {
    data: T,
    prev: usize,
    next: usize,
}

/// A doubly-linked list that owns its nodes in a slab arena.
///
/// O(1) insertion and removal at both ends, O(min(i, n - i)) access by
/// position, O(n) search. The list exclusively owns every node on its
/// chain; dropping the list drops all remaining payloads.
///
/// # Example
///
/// ```
/// use slablist::List;
///
/// let mut list = List::new();
/// list.push_back(1);
/// list.push_back(2);
/// list.push_back(3);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.front(), Some(&1));
/// assert_eq!(list.back(), Some(&3));
///
/// assert_eq!(list.remove(1), Ok(2));
/// assert_eq!(list.len(), 2);
/// ```
pub struct List<T> {
    nodes: Slab<Node<T>>,
    head: usize,
    tail: usize,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: NONE,
            tail: NONE,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before the
    /// arena reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: NONE,
            tail: NONE,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of nodes the arena can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    // ========================================================================
    // End insertion
    // ========================================================================

    /// Inserts a value as the new head; O(1).
    ///
    /// Allocation failure while growing the arena aborts the process;
    /// there is no recoverable out-of-memory path.
    pub fn push_front(&mut self, data: T) {
        let key = self.nodes.insert(Node {
            data,
            prev: NONE,
            next: self.head,
        });

        if self.head != NONE {
            self.nodes[self.head].prev = key;
        } else {
            self.tail = key;
        }

        self.head = key;
    }

    /// Inserts a value as the new tail; O(1).
    ///
    /// Allocation failure while growing the arena aborts the process;
    /// there is no recoverable out-of-memory path.
    pub fn push_back(&mut self, data: T) {
        let key = self.nodes.insert(Node {
            data,
            prev: self.tail,
            next: NONE,
        });

        if self.tail != NONE {
            self.nodes[self.tail].next = key;
        } else {
            self.head = key;
        }

        self.tail = key;
    }

    // ========================================================================
    // End access / removal
    // ========================================================================

    /// Returns a reference to the head element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.head == NONE {
            return None;
        }
        Some(&self.nodes[self.head].data)
    }

    /// Returns a mutable reference to the head element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.head == NONE {
            return None;
        }
        Some(&mut self.nodes[self.head].data)
    }

    /// Returns a reference to the tail element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.tail == NONE {
            return None;
        }
        Some(&self.nodes[self.tail].data)
    }

    /// Returns a mutable reference to the tail element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.tail == NONE {
            return None;
        }
        Some(&mut self.nodes[self.tail].data)
    }

    /// Removes and returns the head element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head == NONE {
            return None;
        }

        let key = self.head;
        self.unlink(key);
        Some(self.nodes.remove(key).data)
    }

    /// Removes and returns the tail element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail == NONE {
            return None;
        }

        let key = self.tail;
        self.unlink(key);
        Some(self.nodes.remove(key).data)
    }

    // ========================================================================
    // Positional access
    // ========================================================================

    /// Returns a reference to the element at `index`.
    ///
    /// Negative positions count from the tail (`-1` is the tail). The list
    /// retains ownership of the payload; this is a peek, not a transfer.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if the list is empty or the resolved
    /// position is outside `[0, len)`.
    pub fn get(&self, index: isize) -> Result<&T, OutOfRange> {
        let pos = self.resolve(index)?;
        // Safety: resolve guarantees pos < len
        let key = unsafe { self.seek(pos) };
        Ok(&self.nodes[key].data)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if the list is empty or the resolved
    /// position is outside `[0, len)`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, OutOfRange> {
        let pos = self.resolve(index)?;
        // Safety: resolve guarantees pos < len
        let key = unsafe { self.seek(pos) };
        Ok(&mut self.nodes[key].data)
    }

    /// Removes the element at `index`, returning its payload.
    ///
    /// The payload is transferred to the caller; the node's slot is
    /// recycled by the arena's free list.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if the list is empty or the resolved
    /// position is outside `[0, len)`.
    pub fn remove(&mut self, index: isize) -> Result<T, OutOfRange> {
        let pos = self.resolve(index)?;
        // Safety: resolve guarantees pos < len
        let key = unsafe { self.seek(pos) };
        self.unlink(key);
        Ok(self.nodes.remove(key).data)
    }

    /// Removes the element at `index`, dropping its payload in place.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if the list is empty or the resolved
    /// position is outside `[0, len)`.
    #[inline]
    pub fn discard(&mut self, index: isize) -> Result<(), OutOfRange> {
        self.remove(index).map(drop)
    }

    /// Returns a reference to the element at an already validated
    /// non-negative position, skipping all checks.
    ///
    /// # Safety
    ///
    /// `pos` must be less than [`len`](Self::len). Violations are caught by
    /// a debug assertion in debug builds and are undefined behavior in
    /// release builds.
    #[inline]
    pub unsafe fn get_unchecked(&self, pos: usize) -> &T {
        debug_assert!(pos < self.len(), "position {pos} out of range");
        // Safety: caller guarantees pos < len
        let key = unsafe { self.seek(pos) };
        // Safety: seek returns a key on the chain, which is occupied
        unsafe { &self.nodes.get_unchecked(key).data }
    }

    /// Removes the element at an already validated non-negative position,
    /// skipping all checks, and returns its payload.
    ///
    /// # Safety
    ///
    /// `pos` must be less than [`len`](Self::len). Violations are caught by
    /// a debug assertion in debug builds and are undefined behavior in
    /// release builds.
    #[inline]
    pub unsafe fn remove_unchecked(&mut self, pos: usize) -> T {
        debug_assert!(pos < self.len(), "position {pos} out of range");
        // Safety: caller guarantees pos < len
        let key = unsafe { self.seek(pos) };
        self.unlink(key);
        self.nodes.remove(key).data
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Returns `true` if any element equals `needle`.
    ///
    /// Linear scan from the head; stops at the first match. Always `false`
    /// for an empty list.
    ///
    /// # Example
    ///
    /// ```
    /// use slablist::{List, Tag};
    ///
    /// let mut list = List::new();
    /// list.push_back(Tag::borrowed("z"));
    ///
    /// assert!(list.contains("z"));
    /// assert!(!list.contains("q"));
    /// ```
    pub fn contains<Q: ?Sized>(&self, needle: &Q) -> bool
    where
        T: PartialEq<Q>,
    {
        let mut key = self.head;
        while key != NONE {
            let node = &self.nodes[key];
            if node.data == *needle {
                return true;
            }
            key = node.next;
        }
        false
    }

    // ========================================================================
    // Bulk teardown
    // ========================================================================

    /// Removes all elements, dropping every payload.
    ///
    /// The arena's capacity is retained for reuse.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = NONE;
        self.tail = NONE;
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Normalizes a possibly negative position against the current length.
    #[inline]
    fn resolve(&self, index: isize) -> Result<usize, OutOfRange> {
        let len = self.len();
        let resolved = if index < 0 {
            index + len as isize
        } else {
            index
        };

        if resolved < 0 || resolved as usize >= len {
            return Err(OutOfRange { index, len });
        }
        Ok(resolved as usize)
    }

    /// Walks to the node at resolved position `pos`, from the nearer end.
    ///
    /// Positions in the first half are reached forward from the head,
    /// the rest backward from the tail.
    ///
    /// # Safety
    ///
    /// `pos` must be less than `len`.
    unsafe fn seek(&self, pos: usize) -> usize {
        let len = self.len();

        if pos < (len - 1) / 2 {
            let mut key = self.head;
            for _ in 0..pos {
                // Safety: chain invariant; next is occupied for pos < len - 1
                key = unsafe { self.nodes.get_unchecked(key) }.next;
            }
            key
        } else {
            let mut key = self.tail;
            for _ in 0..(len - 1 - pos) {
                // Safety: chain invariant; prev is occupied for pos > 0
                key = unsafe { self.nodes.get_unchecked(key) }.prev;
            }
            key
        }
    }

    /// Splices a node out of the chain, fixing up head/tail.
    ///
    /// The node stays in the arena; callers remove it afterwards.
    fn unlink(&mut self, key: usize) {
        let (prev, next) = {
            let node = &self.nodes[key];
            (node.prev, node.next)
        };

        if prev != NONE {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }

        if next != NONE {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_list();
        let mut key = self.head;
        while key != NONE {
            let node = &self.nodes[key];
            out.entry(&node.data);
            key = node.next;
        }
        out.finish()
    }
}
