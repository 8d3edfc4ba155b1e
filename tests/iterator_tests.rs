use dynvec::{dyn_vec, DynVec};

#[test]
fn test_iterator_empty_vector() {
    let vec = DynVec::<i32>::new();

    let mut iter = vec.iter();
    assert_eq!(iter.size_hint(), (0, Some(0)));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_populated_vector() {
    let vec = dyn_vec!["hello", "world", "test"];

    let mut iter = vec.iter();
    assert_eq!(iter.size_hint(), (3, Some(3)));

    assert_eq!(iter.next(), Some(&"hello"));
    assert_eq!(iter.len(), 2);

    assert_eq!(iter.next(), Some(&"world"));
    assert_eq!(iter.next(), Some(&"test"));
    assert_eq!(iter.size_hint(), (0, Some(0)));

    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_skips_retired_slots() {
    let mut vec = dyn_vec![1, 2, 3, 4];
    vec.pop_back().unwrap();
    vec.erase(vec.begin()).unwrap();

    let collected: Vec<_> = vec.iter().copied().collect();
    assert_eq!(collected, vec![2, 3]);
}

#[test]
fn test_iterator_after_clear() {
    let mut vec = dyn_vec![1, 2, 3];
    vec.clear();
    assert_eq!(vec.iter().count(), 0);
}

#[test]
fn test_iterator_clone_is_independent() {
    let vec = dyn_vec![1, 2, 3];

    let mut iter = vec.iter();
    iter.next();
    let snapshot = iter.clone();
    iter.next();

    assert_eq!(snapshot.copied().collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(iter.copied().collect::<Vec<_>>(), vec![3]);
}

#[test]
fn test_for_loop_by_reference() {
    let vec = dyn_vec![1, 2, 3];

    let mut sum = 0;
    for item in &vec {
        sum += item;
    }
    assert_eq!(sum, 6);
}

#[test]
fn test_iter_mut_modifies_in_place() {
    let mut vec = dyn_vec![String::from("a"), String::from("b")];

    for item in vec.iter_mut() {
        item.push('!');
    }
    for item in &mut vec {
        item.insert(0, '>');
    }

    assert_eq!(vec.to_string(), "[>a!, >b!]");
    assert_eq!(vec.iter_mut().len(), 2);
}

#[test]
fn test_iterator_matches_indexed_reads() {
    let vec: DynVec<u32> = (0..50).map(|i| i * i).collect();

    for (i, item) in vec.iter().enumerate() {
        assert_eq!(vec.get(i), Ok(item));
    }
}
