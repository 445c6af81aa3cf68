use dvec::DVec;

#[test]
fn test_first_growth_installs_baseline_capacity() {
    let mut v = DVec::new();
    v.push_back(1).unwrap();
    assert_eq!(v.capacity(), 10);

    let mut w = DVec::new();
    w.push_front(1).unwrap();
    assert_eq!(w.capacity(), 10);
}

#[test]
fn test_growth_doubles_capacity() {
    let mut v = DVec::new();
    for i in 0..10 {
        v.push_back(i).unwrap();
    }
    assert_eq!(v.capacity(), 10);

    v.push_back(10).unwrap();
    assert_eq!(v.capacity(), 20);

    for i in 11..=20 {
        v.push_back(i).unwrap();
    }
    assert_eq!(v.capacity(), 40);
    for i in 0..=20 {
        assert_eq!(v[i as usize], i);
    }
}

#[test]
fn test_capacity_never_decreases() {
    let mut v = DVec::new();
    let mut high_water = 0;
    for i in 0..100 {
        v.push_back(i).unwrap();
        assert!(v.capacity() >= high_water);
        high_water = v.capacity();
    }
    for _ in 0..100 {
        v.pop_front();
        assert_eq!(v.capacity(), high_water);
    }
    v.clear();
    assert_eq!(v.capacity(), high_water);
}

#[test]
fn test_reserve_grows_and_never_shrinks() {
    let mut v: DVec<i32> = DVec::new();
    v.reserve(25).unwrap();
    assert_eq!(v.capacity(), 25);
    assert_eq!(v.len(), 0);

    v.reserve(5).unwrap();
    assert_eq!(v.capacity(), 25);

    for i in 0..25 {
        v.push_back(i).unwrap();
    }
    assert_eq!(v.capacity(), 25);
    v.push_back(25).unwrap();
    assert_eq!(v.capacity(), 50);
}

#[test]
fn test_reserve_preserves_contents() {
    let mut v = DVec::from([1, 2, 3]);
    v.push_front(0).unwrap();
    v.reserve(100).unwrap();
    assert_eq!(v, [0, 1, 2, 3]);
}

#[test]
fn test_array_construction_reserves_exact_size() {
    let v = DVec::from([1, 2, 3, 4, 5]);
    assert_eq!(v.capacity(), 5);
    assert_eq!(v.len(), 5);
}

#[test]
fn test_iterator_construction_reserves_baseline() {
    let v: DVec<i32> = (0..6).collect();
    assert_eq!(v.capacity(), 10);

    let w: DVec<i32> = (0..25).collect();
    assert_eq!(w.capacity(), 40);
    assert_eq!(w.len(), 25);
}

#[test]
fn test_resize_grows_capacity_exactly_when_needed() {
    let mut v: DVec<i32> = DVec::new();
    v.resize(15).unwrap();
    assert_eq!(v.capacity(), 15);
    assert_eq!(v.len(), 15);

    v.resize(3).unwrap();
    assert_eq!(v.capacity(), 15);
    assert_eq!(v.len(), 3);
}

#[test]
fn test_growth_relocates_wrapped_region_in_order() {
    let mut v = DVec::new();
    for i in 3..=10 {
        v.push_back(i).unwrap();
    }
    v.push_front(2).unwrap();
    v.push_front(1).unwrap();
    assert_eq!(v.len(), 10);
    assert_eq!(v.capacity(), 10);

    // The next push reallocates while the region wraps the storage edge.
    v.push_back(11).unwrap();
    assert_eq!(v.capacity(), 20);
    for i in 0..11 {
        assert_eq!(v[i], i as i32 + 1);
    }
}
