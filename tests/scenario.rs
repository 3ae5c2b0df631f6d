//! End-to-end exercises of the list with tag payloads.

use slablist::{List, OutOfRange, Tag};

#[test]
fn tag_list_workflow() {
    let mut list: List<Tag> = List::new();
    list.push_back(Tag::borrowed("a"));
    list.push_back(Tag::borrowed("b"));
    list.push_front(Tag::borrowed("z"));

    // Order is [z, a, b]
    assert_eq!(list.len(), 3);
    assert_eq!(list.front().unwrap().as_str(), "z");
    assert_eq!(list.back().unwrap().as_str(), "b");

    // Peek at the middle without disturbing anything
    assert_eq!(list.get(1).unwrap().as_str(), "a");
    assert_eq!(list.len(), 3);

    // Drop the tail in place, leaving [z, a]
    list.discard(-1).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.back().unwrap().as_str(), "a");

    assert!(list.contains("z"));
    assert!(!list.contains("q"));
}

#[test]
fn single_element_boundary() {
    let mut list: List<Tag> = List::new();
    list.push_back(Tag::borrowed("x"));

    let tag = list.remove(0).unwrap();
    assert_eq!(tag.as_str(), "x");

    assert_eq!(list.len(), 0);
    assert!(list.front().is_none());
    assert!(list.back().is_none());
}

#[test]
fn mixed_ownership_teardown() {
    let outside = String::from("borrowed-from-caller");

    let mut list: List<Tag> = List::new();
    list.push_back(Tag::owned(String::from("owned-by-list")));
    list.push_back(Tag::borrowed(&outside));
    drop(list);

    // Borrowed payload survives the list
    assert_eq!(outside, "borrowed-from-caller");
}

#[test]
fn negative_and_positive_positions_agree() {
    let mut list: List<Tag> = List::new();
    for name in ["one", "two", "three", "four"] {
        list.push_back(Tag::borrowed(name));
    }

    let len = list.len() as isize;
    for i in 0..len {
        assert_eq!(list.get(i), list.get(i - len));
    }

    assert_eq!(
        list.get(len),
        Err(OutOfRange {
            index: len,
            len: len as usize
        })
    );
}

#[test]
fn interleaved_mutation() {
    let mut list: List<Tag> = List::new();

    for round in 0..3 {
        for name in ["red", "green", "blue"] {
            list.push_back(Tag::owned(format!("{name}-{round}")));
        }
        // Trim from the front each round
        list.remove(0).unwrap();
    }

    assert_eq!(list.len(), 6);
    assert!(list.contains("blue-2"));
    assert!(!list.contains("red-0"));

    list.clear();
    assert!(list.is_empty());
    assert!(!list.contains("green-1"));
}
