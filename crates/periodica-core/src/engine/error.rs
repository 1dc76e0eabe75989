use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No {what} supplied")]
    EmptyInput { what: &'static str },

    #[error("Got {atoms} atom records but {counts} counts")]
    LengthMismatch { atoms: usize, counts: usize },

    #[error("Count at position {index} must be at least 1")]
    InvalidCount { index: usize },

    #[error("Record '{record}' is missing required field '{field}'")]
    MissingField { record: String, field: &'static str },

    #[error("An atom needs at least one proton")]
    NoProtons,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = ResolveError::MissingField {
            record: "Up Quark".to_string(),
            field: "Mass_MeVc2",
        };
        assert_eq!(
            err.to_string(),
            "Record 'Up Quark' is missing required field 'Mass_MeVc2'"
        );
        assert_eq!(
            ResolveError::LengthMismatch { atoms: 2, counts: 3 }.to_string(),
            "Got 2 atom records but 3 counts"
        );
    }
}
