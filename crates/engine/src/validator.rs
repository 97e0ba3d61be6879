use quiz_core::model::QuizId;

use crate::error::CommandError;

/// Parse a raw `<id>` argument into a `QuizId`.
///
/// Accepts any integer; whether a quiz with that id exists is the
/// repository's concern, not the validator's. No side effects.
///
/// # Errors
///
/// Returns `CommandError::MissingParameter` when the argument is absent and
/// `CommandError::NotANumber` when it does not parse as an integer.
pub fn validate_id(raw: Option<&str>) -> Result<QuizId, CommandError> {
    let raw = raw.ok_or(CommandError::MissingParameter)?;
    raw.parse::<QuizId>()
        .map_err(|e| CommandError::NotANumber {
            raw: e.raw().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fails_when_parameter_missing() {
        let err = validate_id(None).unwrap_err();
        assert!(matches!(err, CommandError::MissingParameter));
    }

    #[test]
    fn fails_when_not_a_number() {
        let err = validate_id(Some("abc")).unwrap_err();
        assert!(matches!(err, CommandError::NotANumber { raw } if raw == "abc"));
    }

    #[test]
    fn parses_positive_zero_and_negative() {
        assert_eq!(validate_id(Some("7")).unwrap(), QuizId::new(7));
        assert_eq!(validate_id(Some("0")).unwrap(), QuizId::new(0));
        assert_eq!(validate_id(Some("-3")).unwrap(), QuizId::new(-3));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_id(Some(" 12 ")).unwrap(), QuizId::new(12));
    }
}
