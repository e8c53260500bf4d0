use crate::offers::domain::{WeightKey, WeightSet};
use crate::offers::weights::{rebalance, STEP};

fn assert_balanced(weights: &WeightSet) {
    assert_eq!(weights.total(), 100, "weights {weights:?} do not sum to 100");
    for (key, value) in weights.iter() {
        assert!(value <= 100, "{key} out of bounds");
        assert_eq!(value % STEP, 0, "{key} is not a multiple of {STEP}");
    }
}

#[test]
fn moving_one_slider_scales_the_others_proportionally() {
    let start = WeightSet::new([30, 30, 10, 10, 10, 10]);

    let result = rebalance(&start, WeightKey::Salary, 60.0);

    assert_eq!(result, WeightSet::new([60, 20, 5, 5, 5, 5]));
    assert_balanced(&result);
}

#[test]
fn unchanged_value_is_a_no_op() {
    let start = WeightSet::new([40, 0, 15, 20, 10, 15]);
    assert_eq!(rebalance(&start, WeightKey::Prospects, 20.0), start);
    // 21 snaps back to the current 20
    assert_eq!(rebalance(&start, WeightKey::Prospects, 21.0), start);
}

#[test]
fn requested_value_is_snapped_and_clamped() {
    let start = WeightSet::new([40, 0, 15, 20, 10, 15]);

    let result = rebalance(&start, WeightKey::Balance, 27.6);
    assert_eq!(result.balance, 30);
    assert_balanced(&result);

    let result = rebalance(&start, WeightKey::Balance, 150.0);
    assert_eq!(result, WeightSet::new([0, 0, 0, 0, 0, 100]));

    let result = rebalance(&start, WeightKey::Salary, -10.0);
    assert_eq!(result.salary, 0);
    assert_balanced(&result);
}

#[test]
fn pinned_zero_fields_are_left_alone_during_scaling() {
    let start = WeightSet::new([40, 0, 15, 20, 10, 15]);

    let result = rebalance(&start, WeightKey::Development, 35.0);

    assert_eq!(result.development, 35);
    assert_eq!(result.long_term, 0);
    assert_balanced(&result);
}

#[test]
fn residual_goes_to_the_field_closest_to_the_midpoint() {
    let start = WeightSet::new([40, 0, 15, 20, 10, 15]);

    let result = rebalance(&start, WeightKey::LongTerm, 20.0);

    // scaling by 0.8 leaves 95; salary (30) is nearest to 50 and absorbs the last 5
    assert_eq!(result, WeightSet::new([35, 20, 10, 15, 10, 10]));
}

#[test]
fn equal_distances_resolve_in_declaration_order() {
    let start = WeightSet::new([0, 0, 0, 0, 0, 0]);

    let result = rebalance(&start, WeightKey::Salary, 30.0);

    // even split gives 10 each; long-term is first among the ties and takes the remainder
    assert_eq!(result, WeightSet::new([30, 30, 10, 10, 10, 10]));
}

#[test]
fn empty_others_receive_an_even_split() {
    let start = WeightSet::new([100, 0, 0, 0, 0, 0]);

    let result = rebalance(&start, WeightKey::Salary, 40.0);

    assert_eq!(result, WeightSet::new([40, 20, 10, 10, 10, 10]));
}

#[test]
fn a_single_pinned_field_absorbs_the_shift_directly() {
    // the only non-zero other field sits at its upper bound, so nothing is eligible for scaling
    let start = WeightSet::new([0, 100, 0, 0, 0, 0]);

    let result = rebalance(&start, WeightKey::Salary, 25.0);

    assert_eq!(result, WeightSet::new([25, 75, 0, 0, 0, 0]));
}

#[test]
fn changed_field_keeps_requested_value_when_others_have_room() {
    let start = WeightSet::new([5, 5, 5, 5, 5, 75]);

    let result = rebalance(&start, WeightKey::Balance, 0.0);

    assert_eq!(result.balance, 0);
    assert_balanced(&result);
}

#[test]
fn unbalanced_input_is_repaired() {
    let start = WeightSet::new([10, 10, 10, 10, 10, 10]);

    let result = rebalance(&start, WeightKey::Environment, 50.0);

    assert_eq!(result.environment, 50);
    assert_balanced(&result);
}
