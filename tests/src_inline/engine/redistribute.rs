use super::*;

fn three_bucket() -> SliderGroup {
    SliderGroup::new([("stable", 40), ("mid", 30), ("risky", 30)]).unwrap()
}

fn assert_max_invariant(group: &SliderGroup) {
    let sum = group.sum();
    for s in group.sliders() {
        assert_eq!(s.max, BUDGET - (sum - s.current), "max of {}", s.key);
    }
}

#[test]
fn test_initial_max_is_remaining_budget() {
    let group = three_bucket();
    assert!(group.is_complete());
    assert_eq!(group.get("risky").unwrap().max, 30);
    assert_eq!(group.get("stable").unwrap().max, 40);
    assert_max_invariant(&group);
}

#[test]
fn test_adjust_above_max_rejected_without_change() {
    let mut group = three_bucket();
    let before = group.clone();
    let err = group.adjust("risky", 50).unwrap_err();
    assert_eq!(
        err,
        AllocationError::ExceedsBudget {
            key: "risky".to_string(),
            value: 50,
            max: 30,
        }
    );
    assert_eq!(group, before);
}

#[test]
fn test_reduce_then_raise() {
    let mut group = three_bucket();
    group.adjust("mid", 10).unwrap();
    assert_eq!(group.get("risky").unwrap().max, 50);
    assert_eq!(group.get("stable").unwrap().max, 60);
    assert!(!group.is_complete());
    assert_eq!(group.remaining(), 20);
    assert_max_invariant(&group);

    group.adjust("risky", 50).unwrap();
    assert!(group.is_complete());
    assert_eq!(group.get("mid").unwrap().max, 10);
    assert_max_invariant(&group);
}

#[test]
fn test_sum_never_exceeds_budget_over_move_sequence() {
    let mut group = three_bucket();
    let moves = [
        ("stable", 100),
        ("stable", 0),
        ("risky", 100),
        ("risky", 70),
        ("mid", 35),
        ("mid", 30),
        ("stable", 5),
        ("unknown", 5),
        ("mid", 0),
        ("stable", 70),
        ("stable", 30),
    ];
    for (key, value) in moves {
        let _ = group.adjust(key, value);
        assert!(group.sum() <= BUDGET);
        assert_max_invariant(&group);
    }
    assert_eq!(group.get("risky").unwrap().current, 70);
    assert_eq!(group.get("stable").unwrap().current, 30);
    assert_eq!(group.get("mid").unwrap().current, 0);
    assert!(group.is_complete());
}

#[test]
fn test_assets_omit_zero_sliders() {
    let mut group = three_bucket();
    group.adjust("mid", 0).unwrap();
    let assets = group.assets();
    assert_eq!(assets.len(), 2);
    assert!(!assets.contains_key("mid"));
    assert!(assets.values().all(|&v| v != 0));
}

#[test]
fn test_reset_restores_defaults() {
    let mut group = three_bucket();
    group.adjust("stable", 0).unwrap();
    group.adjust("risky", 70).unwrap();
    group.reset();
    assert_eq!(group, three_bucket());
}

#[test]
fn test_new_rejects_bad_groups() {
    assert_eq!(
        SliderGroup::new([("a", 60), ("b", 50)]).unwrap_err(),
        AllocationError::SumExceeds(110)
    );
    assert_eq!(
        SliderGroup::new([("a", 10), ("a", 20)]).unwrap_err(),
        AllocationError::DuplicateKey("a".to_string())
    );
    assert!(SliderGroup::new([("a", 101)]).is_err());
}

#[test]
fn test_unknown_slider() {
    let mut group = three_bucket();
    assert_eq!(
        group.adjust("gold", 0).unwrap_err(),
        AllocationError::UnknownSlider("gold".to_string())
    );
}
