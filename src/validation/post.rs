//! Post form predicates
//!
//! Shared by the single-step create form and the wizard's steps. All
//! lengths are measured in characters after trimming.

use crate::error::{RestdeskError, RestdeskResult};
use crate::models::UserId;

/// Minimum trimmed title length
pub const MIN_TITLE_LEN: usize = 3;

/// Minimum trimmed body length
pub const MIN_BODY_LEN: usize = 10;

pub const TITLE_TOO_SHORT: &str = "Title must be at least 3 characters";
pub const BODY_TOO_SHORT: &str = "Body must be at least 10 characters";
pub const INVALID_USER_ID: &str = "User ID must be a valid positive number";

/// Title must have at least three non-blank characters
pub fn validate_title(title: &str) -> Result<(), &'static str> {
    if title.trim().chars().count() < MIN_TITLE_LEN {
        return Err(TITLE_TOO_SHORT);
    }
    Ok(())
}

/// Body must have at least ten non-blank characters
pub fn validate_body(body: &str) -> Result<(), &'static str> {
    if body.trim().chars().count() < MIN_BODY_LEN {
        return Err(BODY_TOO_SHORT);
    }
    Ok(())
}

/// Parse a raw user id field into a positive id
pub fn parse_user_id(raw: &str) -> Result<UserId, &'static str> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id >= 1 => Ok(UserId::new(id)),
        _ => Err(INVALID_USER_ID),
    }
}

/// Validate the create form in display order; the first failure wins
pub fn validate_new_post(title: &str, body: &str, user_id: &str) -> RestdeskResult<UserId> {
    validate_title(title).map_err(|m| RestdeskError::Validation(m.into()))?;
    validate_body(body).map_err(|m| RestdeskError::Validation(m.into()))?;
    parse_user_id(user_id).map_err(|m| RestdeskError::Validation(m.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_boundary() {
        assert_eq!(validate_title("Hi"), Err(TITLE_TOO_SHORT));
        assert_eq!(validate_title("  Hi   "), Err(TITLE_TOO_SHORT));
        assert!(validate_title("Hey").is_ok());
    }

    #[test]
    fn test_body_boundary() {
        assert_eq!(validate_body("123456789"), Err(BODY_TOO_SHORT));
        assert!(validate_body("1234567890").is_ok());
        assert_eq!(validate_body("   123456789   "), Err(BODY_TOO_SHORT));
    }

    #[test]
    fn test_user_id() {
        assert_eq!(parse_user_id("7"), Ok(UserId::new(7)));
        assert_eq!(parse_user_id(" 2 "), Ok(UserId::new(2)));
        assert_eq!(parse_user_id("0"), Err(INVALID_USER_ID));
        assert_eq!(parse_user_id("-3"), Err(INVALID_USER_ID));
        assert_eq!(parse_user_id("seven"), Err(INVALID_USER_ID));
        assert_eq!(parse_user_id(""), Err(INVALID_USER_ID));
    }

    #[test]
    fn test_user_id_rejects_trailing_text() {
        assert_eq!(parse_user_id("7abc"), Err(INVALID_USER_ID));
        assert_eq!(parse_user_id("3.5"), Err(INVALID_USER_ID));
        assert_eq!(parse_user_id("1e2"), Err(INVALID_USER_ID));
    }

    #[test]
    fn test_first_failure_wins() {
        let err = validate_new_post("Hi", "short", "x").unwrap_err();
        assert_eq!(err.to_string(), format!("Validation error: {}", TITLE_TOO_SHORT));

        let err = validate_new_post("Hello", "short", "x").unwrap_err();
        assert_eq!(err.to_string(), format!("Validation error: {}", BODY_TOO_SHORT));

        let err = validate_new_post("Hello", "long enough body", "x").unwrap_err();
        assert_eq!(err.to_string(), format!("Validation error: {}", INVALID_USER_ID));

        assert_eq!(
            validate_new_post("Hello", "long enough body", "3").unwrap(),
            UserId::new(3)
        );
    }
}
