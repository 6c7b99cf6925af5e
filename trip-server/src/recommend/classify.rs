//! Relative route classification.
//!
//! Badges are computed over the full candidate set of one response, never
//! from a single route in isolation. Ties resolve first-by-list-order, so
//! each badge lands on at most one route.

use chrono::Duration;

use crate::domain::{Badges, Cost};

/// Compute badges for a set of route totals, given as
/// `(total duration, total cost)` pairs in response order.
///
/// - Minimum duration → `Quickest`, minimum cost → `Cheapest`.
/// - Maximum duration → `Slowest`, maximum cost → `MostExpensive`, but
///   only when the set has more than one route and the maximum strictly
///   exceeds the minimum (a lone route is not its own "slowest").
/// - Ties resolve to the earliest route in list order.
pub fn classify_totals(totals: &[(Duration, Cost)]) -> Vec<Badges> {
    let mut badges = vec![Badges::none(); totals.len()];
    if totals.is_empty() {
        return badges;
    }

    let min_duration_idx = extreme_idx(totals, |t| t.0, false);
    let min_cost_idx = extreme_idx(totals, |t| t.1, false);
    badges[min_duration_idx].quickest = true;
    badges[min_cost_idx].cheapest = true;

    if totals.len() > 1 {
        let max_duration_idx = extreme_idx(totals, |t| t.0, true);
        if totals[max_duration_idx].0 > totals[min_duration_idx].0 {
            badges[max_duration_idx].slowest = true;
        }

        let max_cost_idx = extreme_idx(totals, |t| t.1, true);
        if totals[max_cost_idx].1 > totals[min_cost_idx].1 {
            badges[max_cost_idx].most_expensive = true;
        }
    }

    badges
}

/// Index of the minimum (or maximum) key, first occurrence winning ties.
fn extreme_idx<K: Ord>(
    totals: &[(Duration, Cost)],
    key: impl Fn(&(Duration, Cost)) -> K,
    max: bool,
) -> usize {
    let mut best = 0;
    for (i, total) in totals.iter().enumerate().skip(1) {
        let better = if max {
            key(total) > key(&totals[best])
        } else {
            key(total) < key(&totals[best])
        };
        if better {
            best = i;
        }
    }
    best
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn totals_strategy() -> impl Strategy<Value = Vec<(Duration, Cost)>> {
        prop::collection::vec((1i64..600, 0i64..10_000), 0..12).prop_map(|entries| {
            entries
                .into_iter()
                .map(|(mins, cents)| (Duration::minutes(mins), Cost::from_cents(cents)))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn exactly_one_quickest_when_nonempty(totals in totals_strategy()) {
            let badges = classify_totals(&totals);

            let quickest: Vec<usize> = badges
                .iter()
                .enumerate()
                .filter_map(|(i, b)| b.quickest.then_some(i))
                .collect();

            if totals.is_empty() {
                prop_assert!(quickest.is_empty());
            } else {
                prop_assert_eq!(quickest.len(), 1);
                let idx = quickest[0];
                let min = totals.iter().map(|t| t.0).min().unwrap();
                prop_assert_eq!(totals[idx].0, min);
            }
        }

        #[test]
        fn each_badge_at_most_once(totals in totals_strategy()) {
            let badges = classify_totals(&totals);

            prop_assert!(badges.iter().filter(|b| b.quickest).count() <= 1);
            prop_assert!(badges.iter().filter(|b| b.cheapest).count() <= 1);
            prop_assert!(badges.iter().filter(|b| b.slowest).count() <= 1);
            prop_assert!(badges.iter().filter(|b| b.most_expensive).count() <= 1);
        }

        #[test]
        fn cheapest_is_the_minimum_cost(totals in totals_strategy()) {
            let badges = classify_totals(&totals);

            for (i, badge) in badges.iter().enumerate() {
                if badge.cheapest {
                    let min = totals.iter().map(|t| t.1).min().unwrap();
                    prop_assert_eq!(totals[i].1, min);
                }
            }
        }

        #[test]
        fn quickest_and_slowest_never_coincide(totals in totals_strategy()) {
            let badges = classify_totals(&totals);

            for badge in &badges {
                prop_assert!(!(badge.quickest && badge.slowest));
                prop_assert!(!(badge.cheapest && badge.most_expensive));
            }
        }
    }
}
