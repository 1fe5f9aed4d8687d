//! Grouping helpers for the survival pivots.

use oxitanic_charts::{count_plot::CategoryCounts, stacked_bar::StackedGroup};
use oxitanic_dataset::record::{PassengerRecord, Sex};

/// Counts survivors and non-survivors per category of `key`.
///
/// The output follows `categories` order, so a pivot keeps its fixed
/// display order even when a category has no members. Records where
/// `key` yields `None` or the survival flag is absent are skipped.
pub fn survival_counts<F>(
    records: &[PassengerRecord],
    categories: &[&str],
    key: F,
) -> Vec<CategoryCounts>
where
    F: Fn(&PassengerRecord) -> Option<&str>,
{
    categories
        .iter()
        .map(|&label| {
            let mut counts = CategoryCounts {
                label: label.to_owned(),
                not_survived: 0,
                survived: 0,
            };
            for record in records {
                if key(record) != Some(label) {
                    continue;
                }
                match record.survived {
                    Some(true) => counts.survived += 1,
                    Some(false) => counts.not_survived += 1,
                    None => {}
                }
            }
            counts
        })
        .collect()
}

/// Mean survival rate as a percentage for every (class, sex) group.
///
/// One group per passenger class, each holding the female rate first
/// and the male rate second to fix the stacking order. A (class, sex)
/// pair with no members yields an absent rate, not zero.
#[must_use]
pub fn survival_rates_by_class_and_sex(records: &[PassengerRecord]) -> Vec<StackedGroup> {
    (1..=3u8)
        .map(|class| StackedGroup {
            label: class.to_string(),
            rates: [Sex::Female, Sex::Male].map(|sex| survival_rate(records, class, sex)),
        })
        .collect()
}

#[expect(clippy::cast_precision_loss)]
fn survival_rate(records: &[PassengerRecord], class: u8, sex: Sex) -> Option<f64> {
    let survivals = records
        .iter()
        .filter(|record| record.pclass == Some(class) && record.sex == Some(sex))
        .filter_map(|record| record.survived)
        .map(|survived| f64::from(u8::from(survived)))
        .collect::<Vec<_>>();
    if survivals.is_empty() {
        return None;
    }
    Some(100.0 * survivals.iter().sum::<f64>() / survivals.len() as f64)
}
