//! Interdependent percentage sliders that always sum to 100.
//!
//! Moving one slider pins it to the requested value (snapped to [`STEP`]) and spreads
//! the difference over the remaining sliders in proportion to their current values.
//! A final correction pass absorbs rounding remainders, preferring sliders closest to
//! the midpoint so extreme settings move least.

use super::domain::{WeightKey, WeightSet};
use tracing::trace;

/// Slider granularity in percentage points.
pub const STEP: u32 = 5;
pub const TOTAL: u32 = 100;

const STEP_I: i32 = STEP as i32;
const TOTAL_I: i32 = TOTAL as i32;

/// Round to the nearest multiple of [`STEP`] and clamp to [0, 100].
pub fn snap(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    let snapped = (value / f64::from(STEP)).round() * f64::from(STEP);
    snapped.clamp(0.0, f64::from(TOTAL)) as u32
}

fn snap_to_step(value: f64) -> i32 {
    (value / f64::from(STEP)).round() as i32 * STEP_I
}

fn clamp_percent(value: i32) -> i32 {
    value.clamp(0, TOTAL_I)
}

/// Move `key` to `requested` and redistribute the remainder across the other weights.
///
/// Incoming values above 100 are treated as 100. Callers holding untrusted weights should
/// run [`validate_weights`](super::validation::validate_weights) first.
pub fn rebalance(current: &WeightSet, key: WeightKey, requested: f64) -> WeightSet {
    let new_value = snap(requested);
    if current.get(key) == new_value {
        return *current;
    }

    let mut values: [i32; 6] = current.to_array().map(|value| value.min(TOTAL) as i32);
    let index = |field: WeightKey| WeightKey::ALL.iter().position(|k| *k == field).unwrap_or(0);
    values[index(key)] = new_value as i32;

    let others: Vec<WeightKey> = WeightKey::ALL.into_iter().filter(|k| *k != key).collect();
    let current_sum_of_others: i32 = others.iter().map(|k| values[index(*k)]).sum();
    let eligible: Vec<WeightKey> = others
        .iter()
        .copied()
        .filter(|k| values[index(*k)] > 0 && values[index(*k)] < TOTAL_I)
        .collect();
    let desired_sum_of_others = (TOTAL_I - new_value as i32).max(0);

    if current_sum_of_others == 0 && desired_sum_of_others > 0 {
        let per_field = desired_sum_of_others / others.len() as i32 / STEP_I * STEP_I;
        for field in &others {
            values[index(*field)] = clamp_percent(per_field);
        }
    } else if current_sum_of_others > 0 && !eligible.is_empty() {
        let scale = f64::from(desired_sum_of_others) / f64::from(current_sum_of_others);
        for field in &eligible {
            let slot = &mut values[index(*field)];
            *slot = clamp_percent(snap_to_step(f64::from(*slot) * scale));
        }
    } else {
        let growing = desired_sum_of_others > current_sum_of_others;
        let shrinking = desired_sum_of_others < current_sum_of_others;
        let movable = others.iter().copied().find(|k| {
            let value = values[index(*k)];
            (growing && value < TOTAL_I) || (shrinking && value > 0)
        });
        if let Some(field) = movable {
            let delta = snap_to_step(f64::from(desired_sum_of_others - current_sum_of_others));
            let slot = &mut values[index(field)];
            *slot = clamp_percent(*slot + delta);
        }
    }

    absorb_residual(&mut values, &others, key, &index);

    let rebalanced = WeightSet::new(values.map(|value| value as u32));
    trace!(%key, requested, new_value, ?rebalanced, "rebalanced weights");
    rebalanced
}

/// Nudge fields until the total is 100 or no field has room left. The changed field is
/// only touched after every other field.
fn absorb_residual(
    values: &mut [i32; 6],
    others: &[WeightKey],
    changed: WeightKey,
    index: &impl Fn(WeightKey) -> usize,
) {
    let mut remaining = TOTAL_I - values.iter().sum::<i32>();
    if remaining == 0 {
        return;
    }

    let mut order = others.to_vec();
    // sort_by_key is stable, so equal distances keep declaration order
    order.sort_by_key(|k| (values[index(*k)] - 50).abs());
    order.push(changed);

    for field in order {
        if remaining == 0 {
            break;
        }
        let slot = &mut values[index(field)];
        let adjustment = if remaining > 0 {
            remaining.min(TOTAL_I - *slot).div_euclid(STEP_I) * STEP_I
        } else {
            -((-remaining).min(*slot).div_euclid(STEP_I) * STEP_I)
        };
        if adjustment != 0 {
            *slot += adjustment;
            remaining -= adjustment;
        }
    }
}

/// One interactive session's weights.
#[derive(Debug, Clone, Default)]
pub struct WeightRebalancer {
    weights: WeightSet,
}

impl WeightRebalancer {
    pub fn new(weights: WeightSet) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &WeightSet {
        &self.weights
    }

    /// Apply a slider move and return the resulting weights.
    pub fn set(&mut self, key: WeightKey, requested: f64) -> &WeightSet {
        self.weights = rebalance(&self.weights, key, requested);
        &self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_rounds_to_nearest_step_and_clamps() {
        assert_eq!(snap(42.0), 40);
        assert_eq!(snap(43.0), 45);
        assert_eq!(snap(-12.0), 0);
        assert_eq!(snap(180.0), 100);
        assert_eq!(snap(f64::NAN), 0);
    }

    #[test]
    fn session_tracks_successive_moves() {
        let mut session = WeightRebalancer::new(WeightSet::default());
        session.set(WeightKey::Salary, 50.0);
        session.set(WeightKey::Balance, 30.0);
        assert_eq!(session.weights().total(), 100);
        assert_eq!(session.weights().balance, 30);
    }

    #[test]
    fn oversized_inputs_are_capped_before_redistribution() {
        let oversized = WeightSet::new([0, 2_000_000_000, 2_000_000_000, 0, 0, 0]);

        let rebalanced = rebalance(&oversized, WeightKey::Salary, 50.0);

        assert_eq!(rebalanced.salary, 50);
        assert_eq!(rebalanced.total(), 100);
        assert!(rebalanced.iter().all(|(_, value)| value <= TOTAL));
    }
}
