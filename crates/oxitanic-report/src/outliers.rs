//! The IQR outlier report artifact.

use std::fmt::Write as _;

use anyhow::Context;
use oxitanic_dataset::table::PassengerTable;
use oxitanic_stats::outlier::{count_outliers, iqr_bounds};

/// Builds the full text of `outlier_summary.txt`.
///
/// One block per report column: the count of values strictly outside
/// the IQR fences and both fences to two decimal places, each block
/// followed by a blank line. Absent values join neither the quartiles
/// nor the count.
pub fn outlier_summary(table: &PassengerTable) -> anyhow::Result<String> {
    let mut text = String::new();
    for column in crate::REPORT_COLUMNS {
        let mut values = table.numeric_present(column);
        values.sort_by(f64::total_cmp);
        let bounds = iqr_bounds(&values)
            .with_context(|| format!("column {} has no present values", column.name()))?;
        let count = count_outliers(values, &bounds);
        writeln!(text, "{} Outliers:", column.title())?;
        writeln!(text, "Count: {count}")?;
        writeln!(
            text,
            "Lower Bound: {:.2}, Upper Bound: {:.2}",
            bounds.lower, bounds.upper
        )?;
        writeln!(text)?;
    }
    Ok(text)
}
