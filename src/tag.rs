//! String-wrapping payload record.
//!
//! [`Tag`] is the element type the list was built to carry: a record
//! wrapping a single string. Whether the string is released when the tag
//! is dropped is a property of the value itself, not of the containing
//! list: an owned tag frees its string, a borrowed one never does. This
//! replaces a per-list "owns payload" flag and makes double-free
//! unrepresentable.

use std::borrow::Cow;
use std::fmt;

/// A record wrapping one string, owned or borrowed.
///
/// # Example
///
/// ```
/// use slablist::{List, Tag};
///
/// let mut tags: List<Tag> = List::new();
/// tags.push_back(Tag::owned(String::from("alpha")));
/// tags.push_back(Tag::borrowed("beta"));
///
/// assert!(tags.contains("alpha"));
/// assert_eq!(tags.get(-1).unwrap().as_str(), "beta");
/// // Dropping the list releases "alpha"; "beta" belongs to the caller.
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag<'a> {
    text: Cow<'a, str>,
}

impl<'a> Tag<'a> {
    /// Creates a tag that owns its string.
    ///
    /// The string is released when the tag is dropped.
    #[inline]
    pub fn owned(text: String) -> Tag<'static> {
        Tag {
            text: Cow::Owned(text),
        }
    }

    /// Creates a tag borrowing a string owned elsewhere.
    ///
    /// Dropping the tag leaves the string untouched.
    #[inline]
    pub const fn borrowed(text: &'a str) -> Tag<'a> {
        Tag {
            text: Cow::Borrowed(text),
        }
    }

    /// Returns the wrapped string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if this tag owns its string.
    #[inline]
    pub const fn is_owned(&self) -> bool {
        matches!(self.text, Cow::Owned(_))
    }

    /// Consumes the tag, returning the string.
    ///
    /// Clones only if the tag was borrowed.
    #[inline]
    pub fn into_string(self) -> String {
        self.text.into_owned()
    }
}

impl PartialEq<str> for Tag<'_> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Tag<'_> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl AsRef<str> for Tag<'_> {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for Tag<'static> {
    #[inline]
    fn from(text: String) -> Self {
        Tag::owned(text)
    }
}

impl<'a> From<&'a str> for Tag<'a> {
    #[inline]
    fn from(text: &'a str) -> Self {
        Tag::borrowed(text)
    }
}

impl fmt::Display for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_and_borrowed() {
        let owned = Tag::owned(String::from("alpha"));
        assert!(owned.is_owned());
        assert_eq!(owned.as_str(), "alpha");

        let text = String::from("beta");
        let borrowed = Tag::borrowed(&text);
        assert!(!borrowed.is_owned());
        assert_eq!(borrowed.as_str(), "beta");
    }

    #[test]
    fn equality_against_str() {
        let tag = Tag::borrowed("gamma");
        assert_eq!(tag, *"gamma");
        assert_eq!(tag, "gamma");
        assert_ne!(tag, "delta");
    }

    #[test]
    fn owned_equals_borrowed() {
        // Equality is by string content, not ownership
        assert_eq!(Tag::owned(String::from("x")), Tag::borrowed("x"));
    }

    #[test]
    fn into_string() {
        assert_eq!(Tag::owned(String::from("a")).into_string(), "a");
        assert_eq!(Tag::borrowed("b").into_string(), "b");
    }

    #[test]
    fn conversions() {
        let from_string: Tag = String::from("s").into();
        assert!(from_string.is_owned());

        let from_str: Tag = "s".into();
        assert!(!from_str.is_owned());
        assert_eq!(from_string, from_str);
    }

    #[test]
    fn display() {
        assert_eq!(Tag::borrowed("hello").to_string(), "hello");
    }
}
