use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A single-record lookup by id matched zero rows.
    #[error("{entity} not found.")]
    NotFound { entity: &'static str, id: DbId },

    /// A filtered listing that the caller treats as a lookup matched nothing.
    #[error("{entity} doesn't exist.")]
    NoMatches { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity() {
        let err = CoreError::NotFound {
            entity: "Teacher",
            id: 7,
        };
        assert_eq!(err.to_string(), "Teacher not found.");
    }

    #[test]
    fn no_matches_message_names_entity() {
        let err = CoreError::NoMatches { entity: "Teacher" };
        assert_eq!(err.to_string(), "Teacher doesn't exist.");
    }
}
