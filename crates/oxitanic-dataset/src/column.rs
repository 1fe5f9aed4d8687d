/// A column of the passenger table, including the derived one.
///
/// The first fifteen variants mirror the reference file's header order;
/// [`Column::FamilySize`] is appended by the feature derivation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Column {
    Survived,
    Pclass,
    Sex,
    Age,
    SibSp,
    Parch,
    Fare,
    Embarked,
    Class,
    Who,
    AdultMale,
    Deck,
    EmbarkTown,
    Alive,
    Alone,
    FamilySize,
}

impl Column {
    /// Every column of the table, source columns first, in display order.
    pub const ALL: [Self; 16] = [
        Self::Survived,
        Self::Pclass,
        Self::Sex,
        Self::Age,
        Self::SibSp,
        Self::Parch,
        Self::Fare,
        Self::Embarked,
        Self::Class,
        Self::Who,
        Self::AdultMale,
        Self::Deck,
        Self::EmbarkTown,
        Self::Alive,
        Self::Alone,
        Self::FamilySize,
    ];

    /// The columns present in the source file, in header order.
    pub const SOURCE: [Self; 15] = [
        Self::Survived,
        Self::Pclass,
        Self::Sex,
        Self::Age,
        Self::SibSp,
        Self::Parch,
        Self::Fare,
        Self::Embarked,
        Self::Class,
        Self::Who,
        Self::AdultMale,
        Self::Deck,
        Self::EmbarkTown,
        Self::Alive,
        Self::Alone,
    ];

    /// The column's machine name as it appears in the file header.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Survived => "survived",
            Self::Pclass => "pclass",
            Self::Sex => "sex",
            Self::Age => "age",
            Self::SibSp => "sibsp",
            Self::Parch => "parch",
            Self::Fare => "fare",
            Self::Embarked => "embarked",
            Self::Class => "class",
            Self::Who => "who",
            Self::AdultMale => "adult_male",
            Self::Deck => "deck",
            Self::EmbarkTown => "embark_town",
            Self::Alive => "alive",
            Self::Alone => "alone",
            Self::FamilySize => "family_size",
        }
    }

    /// The human-readable form of the column name.
    #[must_use]
    pub fn title(self) -> String {
        title_case(self.name())
    }
}

/// The numeric columns statistics are computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NumericColumn {
    Survived,
    Age,
    SibSp,
    Parch,
    Fare,
    FamilySize,
}

impl NumericColumn {
    /// The column's machine name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Survived => "survived",
            Self::Age => "age",
            Self::SibSp => "sibsp",
            Self::Parch => "parch",
            Self::Fare => "fare",
            Self::FamilySize => "family_size",
        }
    }

    /// The human-readable form of the column name.
    #[must_use]
    pub fn title(self) -> String {
        title_case(self.name())
    }
}

/// Turns a machine column name into a human-readable title.
///
/// Underscores become spaces and each word is capitalized.
///
/// # Examples
///
/// ```
/// use oxitanic_dataset::column::title_case;
///
/// assert_eq!(title_case("age"), "Age");
/// assert_eq!(title_case("family_size"), "Family Size");
/// ```
#[must_use]
pub fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_columns_match_header_order() {
        let names = Column::SOURCE.iter().map(|c| c.name()).collect::<Vec<_>>();
        assert_eq!(
            names.join(","),
            "survived,pclass,sex,age,sibsp,parch,fare,embarked,class,who,\
             adult_male,deck,embark_town,alive,alone"
        );
    }

    #[test]
    fn test_all_appends_the_derived_column() {
        assert_eq!(Column::ALL.len(), Column::SOURCE.len() + 1);
        assert_eq!(Column::ALL.last(), Some(&Column::FamilySize));
    }

    #[test]
    fn test_title_case_transform() {
        assert_eq!(title_case("fare"), "Fare");
        assert_eq!(title_case("family_size"), "Family Size");
        assert_eq!(title_case("embark_town"), "Embark Town");
        assert_eq!(Column::AdultMale.title(), "Adult Male");
    }
}
