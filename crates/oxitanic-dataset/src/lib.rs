//! Loading and typed access for the bundled Titanic passenger dataset
//!
//! The crate embeds the reference 891-row passenger file and parses it into a
//! [`table::PassengerTable`] of strongly typed records. Every cell is
//! optional, so missing values survive parsing as `None` and are never
//! imputed. The derived `family_size` column is computed on request by
//! [`table::PassengerTable::derive_family_size`].
//!
//! # Examples
//!
//! ```
//! use oxitanic_dataset::{column::NumericColumn, table::PassengerTable};
//!
//! # fn main() -> Result<(), oxitanic_dataset::DatasetError> {
//! let mut table = PassengerTable::load_reference()?;
//! table.derive_family_size();
//!
//! assert_eq!(table.len(), 891);
//! let ages = table.numeric_present(NumericColumn::Age);
//! assert_eq!(ages.len(), 714);
//! # Ok(())
//! # }
//! ```

pub mod column;
pub mod record;
pub mod table;

/// Errors raised while parsing the passenger file.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DatasetError {
    #[display("dataset has no data rows")]
    Empty,
    #[display("header has {found} columns, expected {expected}")]
    HeaderFieldCount { expected: usize, found: usize },
    #[display("header column {index} is {found:?}, expected {expected:?}")]
    HeaderMismatch {
        index: usize,
        expected: &'static str,
        found: String,
    },
    #[display("row {row} has {found} fields, expected {expected}")]
    FieldCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[display("row {row} has invalid {column} value {value:?}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}
