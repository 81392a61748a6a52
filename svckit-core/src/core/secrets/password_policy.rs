use crate::shared::constants::MIN_CLASSIFIED_CHARS;
use crate::shared::error::{UtilsError, UtilsResult};

/// Verify a password against the strength policy.
///
/// The password is accepted when it contains at least one number, one
/// uppercase letter, one lowercase letter (a space counts as lowercase)
/// and one special character, and more than [`MIN_CLASSIFIED_CHARS`]
/// characters fall into those classes in total. Characters outside the
/// recognized classes do not count towards the length requirement.
///
/// Returns [`UtilsError::InvalidPassword`] on any violation; the error
/// does not report which rule failed.
pub fn verify_password(password: &str) -> UtilsResult<()> {
    let mut classified = 0;
    let (mut number, mut upper, mut lower, mut special) = (false, false, false, false);

    for c in password.chars() {
        if c.is_numeric() {
            number = true;
            classified += 1;
        } else if c.is_ascii_punctuation() {
            special = true;
            classified += 1;
        } else if c.is_uppercase() {
            upper = true;
            classified += 1;
        } else if c.is_lowercase() || c == ' ' {
            lower = true;
            classified += 1;
        }
    }

    if classified > MIN_CLASSIFIED_CHARS && number && upper && lower && special {
        Ok(())
    } else {
        Err(UtilsError::InvalidPassword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_number() {
        assert_eq!(
            verify_password("@Password"),
            Err(UtilsError::InvalidPassword)
        );
    }

    #[test]
    fn test_missing_uppercase() {
        assert_eq!(
            verify_password("@password123"),
            Err(UtilsError::InvalidPassword)
        );
    }

    #[test]
    fn test_missing_lowercase() {
        assert_eq!(
            verify_password("@PASSWORD123"),
            Err(UtilsError::InvalidPassword)
        );
    }

    #[test]
    fn test_missing_special() {
        assert_eq!(
            verify_password("PASSWORD123"),
            Err(UtilsError::InvalidPassword)
        );
    }

    #[test]
    fn test_too_short() {
        assert_eq!(verify_password("@123"), Err(UtilsError::InvalidPassword));
    }

    #[test]
    fn test_valid_password() {
        assert!(verify_password("somePass@123").is_ok());
    }

    #[test]
    fn test_length_boundary() {
        // All four classes present; exactly 8 classified characters is
        // still rejected, 9 passes.
        assert_eq!(
            verify_password("aB3@efgh"),
            Err(UtilsError::InvalidPassword)
        );
        assert!(verify_password("aB3@efghi").is_ok());
    }

    #[test]
    fn test_space_counts_as_lowercase() {
        assert!(verify_password("SOME PASS@123").is_ok());
    }

    #[test]
    fn test_unclassified_chars_do_not_count() {
        // Control characters fall outside every class and must not
        // contribute to the length requirement.
        assert_eq!(
            verify_password("aB3@\u{1}\u{2}\u{3}\u{4}\u{5}"),
            Err(UtilsError::InvalidPassword)
        );
    }

    #[test]
    fn test_empty_password() {
        assert_eq!(verify_password(""), Err(UtilsError::InvalidPassword));
    }
}
