use super::*;

#[test]
fn test_add_and_lookup() {
    let mut dict = Dictionary::new();
    let id = dict.add("Cat").unwrap();

    let entry = dict.lookup("cat").unwrap();
    assert_eq!(entry.id(), id);
    assert_eq!(entry.word(), "cat");
    assert!(entry.derivatives().is_empty());
    assert!(!entry.is_visited());
    assert!(entry.predecessor().is_none());
}

#[test]
fn test_lookup_normalizes_input() {
    let mut dict = Dictionary::new();
    dict.add("dog");

    assert!(dict.lookup("DOG").is_some());
    assert!(dict.lookup("d.o.g").is_some());
    assert!(dict.lookup("  Dog7 ").is_some());
    assert!(dict.lookup("dig").is_none());
}

#[test]
fn test_add_is_idempotent() {
    let mut dict = Dictionary::new();
    let first = dict.add("hello").unwrap();
    let second = dict.add("HELLO").unwrap();
    let third = dict.add("he-llo!").unwrap();

    assert_eq!(first, second);
    assert_eq!(first, third);
    assert_eq!(dict.len(), 1);
}

#[test]
fn test_add_skips_empty_words() {
    let mut dict = Dictionary::new();
    assert!(dict.add("").is_none());
    assert!(dict.add("1234").is_none());
    assert!(dict.add("?!").is_none());
    assert!(dict.is_empty());

    // The empty word never matches
    assert!(dict.lookup("").is_none());
    assert!(dict.lookup("42").is_none());
}

#[test]
fn test_find_is_exact() {
    let mut dict = Dictionary::new();
    dict.add("cot");

    assert!(dict.find("cot").is_some());
    assert!(dict.find("COT").is_none());
}

#[test]
fn test_ids_follow_insertion_order() {
    let mut dict = Dictionary::new();
    for word in ["b", "a", "c", "a"] {
        dict.add(word);
    }

    let words: Vec<&str> = dict.iter().map(|e| e.word().as_str()).collect();
    assert_eq!(words, vec!["b", "a", "c"]);

    let ids: Vec<usize> = dict.ids().map(EntryId::index).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn test_reset_search_state_clears_every_entry() {
    let mut dict = Dictionary::new();
    let a = dict.add("a").unwrap();
    let b = dict.add("b").unwrap();
    dict.add("c");

    dict.get_mut(a).mark_visited(None);
    dict.get_mut(b).mark_visited(Some(a));
    assert!(!dict.is_search_state_clear());

    dict.reset_search_state();
    assert!(dict.is_search_state_clear());
    assert!(dict.iter().all(|e| !e.is_visited()));
}

#[test]
fn test_reset_keeps_derivatives() {
    let mut dict = Dictionary::new();
    let a = dict.add("a").unwrap();
    let b = dict.add("b").unwrap();
    dict.get_mut(a).set_derivatives(vec![b]);

    dict.reset_search_state();
    assert_eq!(dict.get(a).derivatives(), &[b]);
    assert_eq!(dict.edge_count(), 1);
}
