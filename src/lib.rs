//! Index-addressable doubly-linked list over a slab arena.
//!
//! A pointer-chained list in safe Rust, built the only way that stays
//! O(1) at the splice points without aliasing trouble: nodes live in a
//! growable slab and link to each other by index.
//!
//! ```text
//! Box/Rc node chains  - ownership cycles, RefCell overhead
//! Vec<T>              - O(n) insert/remove at the front
//! slab::Slab + links  - stable keys, O(1) splices, one owner
//! ```
//!
//! The [`List`] owns a `slab::Slab` of nodes; `prev`/`next` links are slab
//! keys with a sentinel for "none". Removed slots land on the slab's free
//! list and are reused by later insertions.
//!
//! # Quick start
//!
//! ```
//! use slablist::{List, Tag};
//!
//! let mut list: List<Tag> = List::new();
//! list.push_back(Tag::borrowed("a"));
//! list.push_back(Tag::borrowed("b"));
//! list.push_front(Tag::borrowed("z"));
//!
//! // [z, a, b] - positions may be negative (counted from the tail)
//! assert_eq!(list.get(1).unwrap().as_str(), "a");
//! assert_eq!(list.get(-1).unwrap().as_str(), "b");
//!
//! list.discard(-1).unwrap();
//! assert_eq!(list.len(), 2);
//! assert!(list.contains("z"));
//! assert!(!list.contains("q"));
//! ```
//!
//! # Operations
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | `push_front` / `push_back` | O(1) | allocation failure is fatal |
//! | `pop_front` / `pop_back` | O(1) | |
//! | `get` / `get_mut` / `remove` / `discard` | O(min(i, n - i)) | seeks from the nearer end |
//! | `contains` | O(n) | scan from the head |
//! | `clear` / drop | O(n) | uniform for any length |
//!
//! # Error model
//!
//! Positional operations validate and return [`OutOfRange`]; callers that
//! have already checked [`List::len`] can take the `unsafe` unchecked
//! path instead. Out-of-memory is not recoverable: growing the arena
//! aborts the process if allocation fails.
//!
//! # Payload ownership
//!
//! [`Tag`] wraps a string as either owned or borrowed, so whether teardown
//! releases the string is decided per value by the type system rather
//! than by a list-wide flag.
//!
//! # Concurrency
//!
//! Single-threaded by design. The list is `Send` when `T` is, but offers
//! no internal synchronization; wrap it in a mutex for shared mutation.

#![warn(missing_docs)]

pub mod list;
pub mod tag;

pub use list::{List, OutOfRange};
pub use tag::Tag;
