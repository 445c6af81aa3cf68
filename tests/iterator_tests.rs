use dvec::DVec;

/// A container whose logical region wraps the physical storage edge:
/// ten elements in a baseline-capacity buffer, rotated halfway.
fn wrapped() -> DVec<i32> {
    let mut v = DVec::new();
    for i in 5..=14 {
        v.push_back(i).unwrap();
    }
    for _ in 0..5 {
        v.pop_front();
    }
    for i in 15..=19 {
        v.push_back(i).unwrap();
    }
    assert_eq!(v.capacity(), 10);
    v
}

#[test]
fn test_forward_iteration_matches_indexing() {
    let v = wrapped();
    let mut iter = v.iter();
    for i in 0..v.len() {
        assert_eq!(iter.next(), Some(&v[i]));
    }
    assert_eq!(iter.next(), None);
}

#[test]
fn test_backward_iteration_matches_indexing() {
    let v = wrapped();
    let mut iter = v.iter().rev();
    for i in (0..v.len()).rev() {
        assert_eq!(iter.next(), Some(&v[i]));
    }
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iteration_order_over_wrapped_region() {
    let v = wrapped();
    let forward: Vec<i32> = v.iter().copied().collect();
    assert_eq!(forward, (10..=19).collect::<Vec<_>>());
}

#[test]
fn test_double_ended_iteration_meets_in_the_middle() {
    let v = DVec::from([1, 2, 3, 4, 5]);
    let mut iter = v.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_exact_size_hint() {
    let v = wrapped();
    let mut iter = v.iter();
    assert_eq!(iter.len(), 10);
    iter.next();
    iter.next_back();
    assert_eq!(iter.len(), 8);
    assert_eq!(iter.size_hint(), (8, Some(8)));
}

#[test]
fn test_iter_mut_mutations_are_visible() {
    let mut v = wrapped();
    for value in v.iter_mut() {
        *value *= 2;
    }
    let doubled: Vec<i32> = v.iter().copied().collect();
    assert_eq!(doubled, (10..=19).map(|x| x * 2).collect::<Vec<_>>());
}

#[test]
fn test_into_iter_drains_front_to_back() {
    let v = wrapped();
    let drained: Vec<i32> = v.into_iter().collect();
    assert_eq!(drained, (10..=19).collect::<Vec<_>>());
}

#[test]
fn test_into_iter_reversed() {
    let v = DVec::from([1, 2, 3]);
    let drained: Vec<i32> = v.into_iter().rev().collect();
    assert_eq!(drained, vec![3, 2, 1]);
}

#[test]
fn test_for_loop_over_references() {
    let mut v = wrapped();
    let mut expected = 10;
    for value in &v {
        assert_eq!(*value, expected);
        expected += 1;
    }
    for value in &mut v {
        *value += 1;
    }
    assert_eq!(v[0], 11);
}

#[test]
fn test_iteration_over_empty_container() {
    let v: DVec<i32> = DVec::new();
    assert_eq!(v.iter().next(), None);
    assert_eq!(v.iter().next_back(), None);
    assert_eq!(v.iter().len(), 0);
}

#[test]
fn test_partially_consumed_into_iter_drops_remainder() {
    use std::cell::Cell;
    use std::rc::Rc;

    struct Tracked(Rc<Cell<usize>>);
    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    let drops = Rc::new(Cell::new(0));
    let mut v = DVec::new();
    for _ in 0..5 {
        v.push_back(Tracked(Rc::clone(&drops))).unwrap();
    }

    let mut iter = v.into_iter();
    drop(iter.next());
    drop(iter.next());
    assert_eq!(drops.get(), 2);
    drop(iter);
    assert_eq!(drops.get(), 5);
}
