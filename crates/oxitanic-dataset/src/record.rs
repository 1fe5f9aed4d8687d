use crate::{DatasetError, column::Column};

/// A passenger's sex.
///
/// The variant order fixes the grouping order used by pivots, so female
/// groups always come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// The lowercase label used in the source file.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

/// One row of the passenger table.
///
/// Every field is optional: an empty cell in the source file parses as
/// `None` and stays absent through every downstream computation.
/// `family_size` starts out `None` and is filled in by
/// [`PassengerTable::derive_family_size`](crate::table::PassengerTable::derive_family_size).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PassengerRecord {
    pub survived: Option<bool>,
    pub pclass: Option<u8>,
    pub sex: Option<Sex>,
    pub age: Option<f64>,
    pub sibsp: Option<u32>,
    pub parch: Option<u32>,
    pub fare: Option<f64>,
    pub embarked: Option<char>,
    pub class: Option<String>,
    pub who: Option<String>,
    pub adult_male: Option<bool>,
    pub deck: Option<char>,
    pub embark_town: Option<String>,
    pub alive: Option<String>,
    pub alone: Option<bool>,
    pub family_size: Option<u32>,
}

impl PassengerRecord {
    /// Parses one data line of the source file.
    ///
    /// `row` is the zero-based data row index, used only for error
    /// reporting. The file never quotes fields, so a plain comma split
    /// is exact.
    pub fn parse_line(line: &str, row: usize) -> Result<Self, DatasetError> {
        let fields = line.split(',').collect::<Vec<_>>();
        if fields.len() != Column::SOURCE.len() {
            return Err(DatasetError::FieldCount {
                row,
                expected: Column::SOURCE.len(),
                found: fields.len(),
            });
        }

        Ok(Self {
            survived: parse_binary(fields[0], row, Column::Survived)?,
            pclass: parse_pclass(fields[1], row)?,
            sex: parse_sex(fields[2], row)?,
            age: parse_float(fields[3], row, Column::Age)?,
            sibsp: parse_count(fields[4], row, Column::SibSp)?,
            parch: parse_count(fields[5], row, Column::Parch)?,
            fare: parse_float(fields[6], row, Column::Fare)?,
            embarked: parse_letter(fields[7], row, Column::Embarked, &['C', 'Q', 'S'])?,
            class: parse_word(fields[8], row, Column::Class, &["First", "Second", "Third"])?,
            who: parse_word(fields[9], row, Column::Who, &["man", "woman", "child"])?,
            adult_male: parse_bool(fields[10], row, Column::AdultMale)?,
            deck: parse_letter(
                fields[11],
                row,
                Column::Deck,
                &['A', 'B', 'C', 'D', 'E', 'F', 'G'],
            )?,
            embark_town: parse_word(
                fields[12],
                row,
                Column::EmbarkTown,
                &["Cherbourg", "Queenstown", "Southampton"],
            )?,
            alive: parse_word(fields[13], row, Column::Alive, &["yes", "no"])?,
            alone: parse_bool(fields[14], row, Column::Alone)?,
            family_size: None,
        })
    }

    /// Whether the given column is absent in this record.
    #[must_use]
    pub fn is_missing(&self, column: Column) -> bool {
        match column {
            Column::Survived => self.survived.is_none(),
            Column::Pclass => self.pclass.is_none(),
            Column::Sex => self.sex.is_none(),
            Column::Age => self.age.is_none(),
            Column::SibSp => self.sibsp.is_none(),
            Column::Parch => self.parch.is_none(),
            Column::Fare => self.fare.is_none(),
            Column::Embarked => self.embarked.is_none(),
            Column::Class => self.class.is_none(),
            Column::Who => self.who.is_none(),
            Column::AdultMale => self.adult_male.is_none(),
            Column::Deck => self.deck.is_none(),
            Column::EmbarkTown => self.embark_town.is_none(),
            Column::Alive => self.alive.is_none(),
            Column::Alone => self.alone.is_none(),
            Column::FamilySize => self.family_size.is_none(),
        }
    }
}

fn invalid(row: usize, column: Column, value: &str) -> DatasetError {
    DatasetError::InvalidValue {
        row,
        column: column.name(),
        value: value.to_owned(),
    }
}

fn parse_binary(field: &str, row: usize, column: Column) -> Result<Option<bool>, DatasetError> {
    match field {
        "" => Ok(None),
        "0" => Ok(Some(false)),
        "1" => Ok(Some(true)),
        _ => Err(invalid(row, column, field)),
    }
}

fn parse_bool(field: &str, row: usize, column: Column) -> Result<Option<bool>, DatasetError> {
    match field {
        "" => Ok(None),
        "False" => Ok(Some(false)),
        "True" => Ok(Some(true)),
        _ => Err(invalid(row, column, field)),
    }
}

fn parse_pclass(field: &str, row: usize) -> Result<Option<u8>, DatasetError> {
    match field {
        "" => Ok(None),
        "1" => Ok(Some(1)),
        "2" => Ok(Some(2)),
        "3" => Ok(Some(3)),
        _ => Err(invalid(row, Column::Pclass, field)),
    }
}

fn parse_sex(field: &str, row: usize) -> Result<Option<Sex>, DatasetError> {
    match field {
        "" => Ok(None),
        "female" => Ok(Some(Sex::Female)),
        "male" => Ok(Some(Sex::Male)),
        _ => Err(invalid(row, Column::Sex, field)),
    }
}

fn parse_float(field: &str, row: usize, column: Column) -> Result<Option<f64>, DatasetError> {
    if field.is_empty() {
        return Ok(None);
    }
    let value = field
        .parse::<f64>()
        .map_err(|_| invalid(row, column, field))?;
    if value.is_finite() && value >= 0.0 {
        Ok(Some(value))
    } else {
        Err(invalid(row, column, field))
    }
}

fn parse_count(field: &str, row: usize, column: Column) -> Result<Option<u32>, DatasetError> {
    if field.is_empty() {
        return Ok(None);
    }
    field
        .parse::<u32>()
        .map(Some)
        .map_err(|_| invalid(row, column, field))
}

fn parse_letter(
    field: &str,
    row: usize,
    column: Column,
    allowed: &[char],
) -> Result<Option<char>, DatasetError> {
    if field.is_empty() {
        return Ok(None);
    }
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if allowed.contains(&c) => Ok(Some(c)),
        _ => Err(invalid(row, column, field)),
    }
}

fn parse_word(
    field: &str,
    row: usize,
    column: Column,
    allowed: &[&str],
) -> Result<Option<String>, DatasetError> {
    if field.is_empty() {
        return Ok(None);
    }
    if allowed.contains(&field) {
        Ok(Some(field.to_owned()))
    } else {
        Err(invalid(row, column, field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_complete_row() {
        let line = "0,3,male,22.0,1,0,7.25,S,Third,man,True,,Southampton,no,False";
        let record = PassengerRecord::parse_line(line, 0).unwrap();
        assert_eq!(record.survived, Some(false));
        assert_eq!(record.pclass, Some(3));
        assert_eq!(record.sex, Some(Sex::Male));
        assert_eq!(record.age, Some(22.0));
        assert_eq!(record.sibsp, Some(1));
        assert_eq!(record.parch, Some(0));
        assert_eq!(record.fare, Some(7.25));
        assert_eq!(record.embarked, Some('S'));
        assert_eq!(record.class.as_deref(), Some("Third"));
        assert_eq!(record.who.as_deref(), Some("man"));
        assert_eq!(record.adult_male, Some(true));
        assert_eq!(record.deck, None);
        assert_eq!(record.embark_town.as_deref(), Some("Southampton"));
        assert_eq!(record.alive.as_deref(), Some("no"));
        assert_eq!(record.alone, Some(false));
        assert_eq!(record.family_size, None);
    }

    #[test]
    fn test_parse_missing_cells() {
        let line = "1,1,female,,0,0,80.0,,First,woman,False,B,,yes,True";
        let record = PassengerRecord::parse_line(line, 829).unwrap();
        assert_eq!(record.age, None);
        assert_eq!(record.embarked, None);
        assert_eq!(record.embark_town, None);
        assert_eq!(record.deck, Some('B'));
        assert!(record.is_missing(Column::Age));
        assert!(record.is_missing(Column::EmbarkTown));
        assert!(!record.is_missing(Column::Fare));
    }

    #[test]
    fn test_parse_rejects_short_row() {
        let err = PassengerRecord::parse_line("0,3,male", 7).unwrap_err();
        assert_eq!(
            err,
            DatasetError::FieldCount {
                row: 7,
                expected: 15,
                found: 3,
            }
        );
        assert_eq!(err.to_string(), "row 7 has 3 fields, expected 15");
    }

    #[test]
    fn test_parse_rejects_bad_value() {
        let line = "0,3,male,twenty,1,0,7.25,S,Third,man,True,,Southampton,no,False";
        let err = PassengerRecord::parse_line(line, 4).unwrap_err();
        assert_eq!(
            err,
            DatasetError::InvalidValue {
                row: 4,
                column: "age",
                value: "twenty".to_owned(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_port() {
        let line = "0,3,male,22.0,1,0,7.25,X,Third,man,True,,Southampton,no,False";
        let err = PassengerRecord::parse_line(line, 12).unwrap_err();
        assert_eq!(
            err,
            DatasetError::InvalidValue {
                row: 12,
                column: "embarked",
                value: "X".to_owned(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_negative_fare() {
        let line = "0,3,male,22.0,1,0,-7.25,S,Third,man,True,,Southampton,no,False";
        assert!(PassengerRecord::parse_line(line, 0).is_err());
    }
}
