//! Grouped aggregation over a ledger.
//!
//! Ordering rule (canonical across the app): `GroupKey::Date` results are
//! sorted by ascending date; categorical keys (company, operator, seal type)
//! keep first-seen insertion order. `top_n` re-sorts by descending value with
//! a stable sort, so ties keep first-seen order.

use serde::{Deserialize, Serialize};

use crate::record::{Ledger, ProductionRecord};

/// Field to group records by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    Date,
    Company,
    Operator,
    SealType,
}

impl GroupKey {
    fn of(self, record: &ProductionRecord) -> String {
        match self {
            GroupKey::Date => record.date.format("%Y-%m-%d").to_string(),
            GroupKey::Company => record.company.clone(),
            GroupKey::Operator => record.operator.clone(),
            GroupKey::SealType => record.seal_type.clone(),
        }
    }
}

/// Numeric field reduced within each group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    #[default]
    SealCount,
    ProductionTimeMinutes,
    DowntimeMinutes,
}

impl Measure {
    fn of(self, record: &ProductionRecord) -> f64 {
        match self {
            Measure::SealCount => record.seal_count as f64,
            Measure::ProductionTimeMinutes => record.production_time_minutes,
            Measure::DowntimeMinutes => record.downtime_minutes,
        }
    }
}

/// Reduction applied within each group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reducer {
    #[default]
    Sum,
    Mean,
}

/// Group the ledger by `key` and reduce `measure` within each group.
///
/// Returns `(group key, reduced value)` pairs in the canonical ordering
/// described at the module level.
pub fn aggregate(
    ledger: &Ledger,
    key: GroupKey,
    measure: Measure,
    reducer: Reducer,
) -> Vec<(String, f64)> {
    // First-seen order; group counts are small enough that a linear key
    // lookup beats carrying a map alongside.
    let mut groups: Vec<(String, f64, u64)> = Vec::new();

    for record in ledger {
        let group_key = key.of(record);
        let value = measure.of(record);
        match groups.iter_mut().find(|(k, _, _)| *k == group_key) {
            Some((_, total, count)) => {
                *total += value;
                *count += 1;
            }
            None => groups.push((group_key, value, 1)),
        }
    }

    if key == GroupKey::Date {
        // ISO dates sort chronologically as strings.
        groups.sort_by(|a, b| a.0.cmp(&b.0));
    }

    groups
        .into_iter()
        .map(|(k, total, count)| match reducer {
            Reducer::Sum => (k, total),
            Reducer::Mean => (k, total / count as f64),
        })
        .collect()
}

/// Top `n` groups by summed `measure`, descending. Ties keep first-seen order.
pub fn top_n(ledger: &Ledger, key: GroupKey, n: usize, measure: Measure) -> Vec<(String, f64)> {
    let mut totals = aggregate(ledger, key, measure, Reducer::Sum);
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    totals.truncate(n);
    totals
}

/// Mean of the per-date seal count sums ("average daily production").
///
/// `None` for an empty ledger.
pub fn daily_average(ledger: &Ledger) -> Option<f64> {
    let per_day = aggregate(ledger, GroupKey::Date, Measure::SealCount, Reducer::Sum);
    if per_day.is_empty() {
        return None;
    }
    let total: f64 = per_day.iter().map(|(_, v)| v).sum();
    Some(total / per_day.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::test_support::record;

    fn sample() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.push(record("2024-03-02", "A", "alice", 10));
        ledger.push(record("2024-03-01", "B", "bob", 5));
        ledger.push(record("2024-03-01", "A", "carol", 3));
        ledger
    }

    #[test]
    fn sum_by_company() {
        let totals = aggregate(&sample(), GroupKey::Company, Measure::SealCount, Reducer::Sum);
        assert_eq!(
            totals,
            vec![("A".to_string(), 13.0), ("B".to_string(), 5.0)]
        );
    }

    #[test]
    fn mean_by_company() {
        let means = aggregate(&sample(), GroupKey::Company, Measure::SealCount, Reducer::Mean);
        assert_eq!(means[0], ("A".to_string(), 6.5));
        assert_eq!(means[1], ("B".to_string(), 5.0));
    }

    #[test]
    fn categorical_groups_keep_first_seen_order() {
        let totals = aggregate(&sample(), GroupKey::Operator, Measure::SealCount, Reducer::Sum);
        let keys: Vec<&str> = totals.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["alice", "bob", "carol"]);
    }

    #[test]
    fn date_groups_sort_chronologically() {
        let totals = aggregate(&sample(), GroupKey::Date, Measure::SealCount, Reducer::Sum);
        assert_eq!(
            totals,
            vec![
                ("2024-03-01".to_string(), 8.0),
                ("2024-03-02".to_string(), 10.0)
            ]
        );
    }

    #[test]
    fn top_n_truncates_and_sorts_descending() {
        let mut ledger = sample();
        ledger.push(record("2024-03-03", "C", "dave", 7));
        let top = top_n(&ledger, GroupKey::Company, 2, Measure::SealCount);
        assert_eq!(
            top,
            vec![("A".to_string(), 13.0), ("C".to_string(), 7.0)]
        );
    }

    #[test]
    fn top_n_breaks_ties_by_first_seen() {
        let mut ledger = Ledger::new();
        ledger.push(record("2024-03-01", "X", "alice", 5));
        ledger.push(record("2024-03-01", "Y", "bob", 5));
        ledger.push(record("2024-03-01", "Z", "carol", 9));
        let top = top_n(&ledger, GroupKey::Company, 3, Measure::SealCount);
        let keys: Vec<&str> = top.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["Z", "X", "Y"]);
    }

    #[test]
    fn daily_average_matches_hand_computation() {
        // 2024-03-01 totals 8, 2024-03-02 totals 10 => mean 9.
        assert_eq!(daily_average(&sample()), Some(9.0));
        assert_eq!(daily_average(&Ledger::new()), None);
    }

    mod properties {
        use super::*;
        use crate::filter::RecordFilter;
        use proptest::prelude::*;

        fn arb_record() -> impl Strategy<Value = crate::ProductionRecord> {
            (
                0u32..28,
                prop::sample::select(vec!["A", "B", "C"]),
                0i64..1000,
                prop::sample::select(vec!["alice", "bob"]),
            )
                .prop_map(|(day, company, seal_count, operator)| {
                    let mut r = record("2024-03-01", company, operator, seal_count);
                    r.date = r.date + chrono::Days::new(u64::from(day));
                    r
                })
        }

        fn arb_ledger() -> impl Strategy<Value = Ledger> {
            prop::collection::vec(arb_record(), 0..40).prop_map(Ledger::from_records)
        }

        proptest! {
            #[test]
            fn empty_filter_is_identity(ledger in arb_ledger()) {
                prop_assert_eq!(RecordFilter::new().apply(&ledger), ledger);
            }

            #[test]
            fn group_sums_conserve_the_total(ledger in arb_ledger()) {
                let total: f64 = ledger.iter().map(|r| r.seal_count as f64).sum();
                let grouped: f64 =
                    aggregate(&ledger, GroupKey::Company, Measure::SealCount, Reducer::Sum)
                        .iter()
                        .map(|(_, v)| v)
                        .sum();
                prop_assert!((total - grouped).abs() < 1e-6);
            }

            #[test]
            fn top_n_is_non_increasing_and_bounded(ledger in arb_ledger(), n in 0usize..5) {
                let top = top_n(&ledger, GroupKey::Operator, n, Measure::SealCount);
                prop_assert!(top.len() <= n);
                for pair in top.windows(2) {
                    prop_assert!(pair[0].1 >= pair[1].1);
                }
            }
        }
    }
}
