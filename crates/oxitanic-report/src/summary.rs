//! The statistical summary text artifact.
//!
//! Builds `statistical_summary.txt`: a fixed-width describe table over
//! the numeric report columns followed by Welch's t-test on age split
//! by survival. The builder is pure, so the artifact is byte-identical
//! across runs on the same table.

use std::fmt::Write as _;

use anyhow::{Context, bail};
use oxitanic_dataset::table::PassengerTable;
use oxitanic_stats::{descriptive::DescriptiveStats, ttest::welch_ttest};

const ROW_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Builds the full text of `statistical_summary.txt`.
///
/// Fails when a report column has no present values or the t-test is
/// undefined, so a truncated artifact is never written.
pub fn statistical_summary(table: &PassengerTable) -> anyhow::Result<String> {
    let mut columns = Vec::new();
    for column in crate::REPORT_COLUMNS {
        let stats = DescriptiveStats::new(table.numeric_present(column))
            .with_context(|| format!("column {} has no present values", column.name()))?;
        columns.push((column.name(), stats));
    }

    let (survivor_ages, other_ages) = ages_by_survival(table);
    let Some(test) = welch_ttest(&survivor_ages, &other_ages) else {
        bail!("age t-test by survival is undefined on this table");
    };

    let mut text = String::from("Summary Statistics:\n\n");
    text.push_str(&describe_table(&columns));
    write!(
        text,
        "\n\nT-test for Age (Survivors vs Non-Survivors):\n\
         T-statistic: {:.4}\n\
         P-value: {:.4}\n\
         Note: P-value < 0.05 suggests significant age difference.",
        test.t, test.p_value
    )?;
    Ok(text)
}

/// Present ages split by survival outcome, survivors first.
///
/// Rows with an absent age or survival flag are dropped from both
/// groups.
fn ages_by_survival(table: &PassengerTable) -> (Vec<f64>, Vec<f64>) {
    let mut survivors = Vec::new();
    let mut others = Vec::new();
    for record in table.records() {
        let (Some(survived), Some(age)) = (record.survived, record.age) else {
            continue;
        };
        if survived {
            survivors.push(age);
        } else {
            others.push(age);
        }
    }
    (survivors, others)
}

/// Formats the describe table the way dataframe libraries print it:
/// row labels left-aligned, values to six decimal places right-aligned
/// per column, two spaces between columns.
fn describe_table(columns: &[(&str, DescriptiveStats)]) -> String {
    let label_width = ROW_LABELS.iter().map(|label| label.len()).max().unwrap_or(0);
    let formatted = columns
        .iter()
        .map(|(name, stats)| {
            let rows = describe_rows(stats);
            let width = rows
                .iter()
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max(name.len());
            (*name, width, rows)
        })
        .collect::<Vec<_>>();

    let mut text = " ".repeat(label_width);
    for (name, width, _) in &formatted {
        text.push_str("  ");
        text.push_str(&format!("{name:>width$}", width = *width));
    }
    for (row, label) in ROW_LABELS.iter().enumerate() {
        text.push('\n');
        text.push_str(&format!("{label:<label_width$}"));
        for (_, width, rows) in &formatted {
            text.push_str("  ");
            text.push_str(&format!("{:>width$}", rows[row], width = *width));
        }
    }
    text
}

#[expect(clippy::cast_precision_loss)]
fn describe_rows(stats: &DescriptiveStats) -> [String; 8] {
    [
        format!("{:.6}", stats.count as f64),
        format!("{:.6}", stats.mean),
        stats
            .std
            .map_or_else(|| "NaN".to_owned(), |value| format!("{value:.6}")),
        format!("{:.6}", stats.min),
        format!("{:.6}", stats.q1),
        format!("{:.6}", stats.median),
        format!("{:.6}", stats.q3),
        format!("{:.6}", stats.max),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "survived,pclass,sex,age,sibsp,parch,fare,embarked,class,who,\
                          adult_male,deck,embark_town,alive,alone";

    fn reference_table() -> PassengerTable {
        let mut table = PassengerTable::load_reference().unwrap();
        table.derive_family_size();
        table
    }

    #[test]
    fn test_summary_matches_reference_table() {
        let text = statistical_summary(&reference_table()).unwrap();
        let expected = "Summary Statistics:\n\
                        \n\
                        \x20             age        fare  family_size\n\
                        count  714.000000  891.000000   891.000000\n\
                        mean    29.331359   31.840852     1.904602\n\
                        std     14.088038   48.472627     1.644498\n\
                        min      0.420000    0.000000     1.000000\n\
                        25%     19.000000    7.895800     1.000000\n\
                        50%     28.000000   13.500000     1.000000\n\
                        75%     38.000000   34.375000     2.000000\n\
                        max     80.000000  512.329200    11.000000\n\
                        \n\
                        T-test for Age (Survivors vs Non-Survivors):\n\
                        T-statistic: -2.1753\n\
                        P-value: 0.0300\n\
                        Note: P-value < 0.05 suggests significant age difference.";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_summary_is_deterministic() {
        let table = reference_table();
        assert_eq!(
            statistical_summary(&table).unwrap(),
            statistical_summary(&table).unwrap()
        );
    }

    #[test]
    fn test_ages_by_survival_drops_absent_ages() {
        let text = format!(
            "{HEADER}\n\
             1,1,female,38.0,0,0,71.2833,C,First,woman,False,,Cherbourg,yes,True\n\
             1,3,male,,0,0,8.05,S,Third,man,True,,Southampton,yes,True\n\
             0,3,male,22.0,1,0,7.25,S,Third,man,True,,Southampton,no,False\n\
             0,1,male,,0,0,50.0,S,First,man,True,A,Southampton,no,True\n"
        );
        let table = PassengerTable::from_csv(&text).unwrap();
        let (survivors, others) = ages_by_survival(&table);
        assert_eq!(survivors, vec![38.0]);
        assert_eq!(others, vec![22.0]);
    }

    #[test]
    fn test_ttest_p_value_is_a_finite_probability() {
        let (survivors, others) = ages_by_survival(&reference_table());
        assert_eq!(survivors.len(), 289);
        assert_eq!(others.len(), 425);
        let test = welch_ttest(&survivors, &others).unwrap();
        assert!(test.p_value.is_finite());
        assert!((0.0..=1.0).contains(&test.p_value));
        assert!(test.t < 0.0);
    }

    #[test]
    fn test_describe_handles_single_value_column() {
        let stats = DescriptiveStats::new([4.0]).unwrap();
        let rows = describe_rows(&stats);
        assert_eq!(rows[0], "1.000000");
        assert_eq!(rows[2], "NaN");
    }
}
