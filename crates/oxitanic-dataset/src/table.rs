use crate::{
    DatasetError,
    column::{Column, NumericColumn},
    record::PassengerRecord,
};

/// The parsed passenger table.
#[derive(Debug, Clone, PartialEq)]
pub struct PassengerTable {
    records: Vec<PassengerRecord>,
}

impl PassengerTable {
    /// Loads the bundled reference dataset.
    ///
    /// The file ships inside the crate, so loading never touches the
    /// filesystem and always yields the same 891 records.
    pub fn load_reference() -> Result<Self, DatasetError> {
        Self::from_csv(include_str!("../data/titanic.csv"))
    }

    /// Parses a passenger table from CSV text.
    ///
    /// The header must match the reference column names exactly. This
    /// catches schema drift before any statistic is computed from the
    /// wrong column.
    pub fn from_csv(text: &str) -> Result<Self, DatasetError> {
        let mut lines = text.lines();
        let header = lines.next().ok_or(DatasetError::Empty)?;
        validate_header(header)?;

        let records = lines
            .enumerate()
            .map(|(row, line)| PassengerRecord::parse_line(line, row))
            .collect::<Result<Vec<_>, _>>()?;
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(Self { records })
    }

    /// The number of passenger records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in file order.
    #[must_use]
    pub fn records(&self) -> &[PassengerRecord] {
        &self.records
    }

    /// Recomputes the derived `family_size` column for every record.
    ///
    /// `family_size` is `sibsp + parch + 1` (the passenger plus their
    /// siblings, spouses, parents, and children aboard). If either input
    /// is absent the result is absent, never a partial sum.
    pub fn derive_family_size(&mut self) {
        for record in &mut self.records {
            record.family_size = match (record.sibsp, record.parch) {
                (Some(sibsp), Some(parch)) => Some(sibsp + parch + 1),
                _ => None,
            };
        }
    }

    /// A numeric column as one optional value per record.
    ///
    /// Integer columns are widened to `f64`; `survived` maps to 0.0 and
    /// 1.0.
    #[must_use]
    pub fn numeric(&self, column: NumericColumn) -> Vec<Option<f64>> {
        self.records
            .iter()
            .map(|record| match column {
                NumericColumn::Survived => {
                    record.survived.map(|survived| f64::from(u8::from(survived)))
                }
                NumericColumn::Age => record.age,
                NumericColumn::SibSp => record.sibsp.map(f64::from),
                NumericColumn::Parch => record.parch.map(f64::from),
                NumericColumn::Fare => record.fare,
                NumericColumn::FamilySize => record.family_size.map(f64::from),
            })
            .collect()
    }

    /// The present values of a numeric column, in file order.
    #[must_use]
    pub fn numeric_present(&self, column: NumericColumn) -> Vec<f64> {
        self.numeric(column).into_iter().flatten().collect()
    }

    /// The absence matrix, one `bool` per cell over [`Column::ALL`].
    ///
    /// Row-major: `matrix[row][column]` is `true` when that cell is
    /// absent. `family_size` cells are all absent until
    /// [`derive_family_size`](Self::derive_family_size) has run.
    #[must_use]
    pub fn missing_matrix(&self) -> Vec<Vec<bool>> {
        self.records
            .iter()
            .map(|record| {
                Column::ALL
                    .iter()
                    .map(|&column| record.is_missing(column))
                    .collect()
            })
            .collect()
    }

    /// Counts the absent cells per column of the missing-value matrix.
    #[must_use]
    pub fn missing_counts(&self) -> Vec<(Column, usize)> {
        let matrix = self.missing_matrix();
        Column::ALL
            .iter()
            .enumerate()
            .map(|(index, &column)| {
                let count = matrix.iter().filter(|row| row[index]).count();
                (column, count)
            })
            .collect()
    }
}

fn validate_header(header: &str) -> Result<(), DatasetError> {
    let fields = header.split(',').collect::<Vec<_>>();
    if fields.len() != Column::SOURCE.len() {
        return Err(DatasetError::HeaderFieldCount {
            expected: Column::SOURCE.len(),
            found: fields.len(),
        });
    }
    for (index, (&found, column)) in fields.iter().zip(Column::SOURCE).enumerate() {
        if found != column.name() {
            return Err(DatasetError::HeaderMismatch {
                index,
                expected: column.name(),
                found: found.to_owned(),
            });
        }
    }
    Ok(())
}
