//! Friendly messages for HTTP status codes
//!
//! The create form shows these instead of raw status lines.

/// Map a status code to the message shown to the user
///
/// Codes without a dedicated message fall back to `HTTP <code>: <reason>`.
pub fn user_message(status: u16, reason: &str) -> String {
    match status {
        400 => "Invalid data format. Check your input.".to_string(),
        401 => "Authentication required.".to_string(),
        403 => "You don't have permission to create posts.".to_string(),
        404 => "API endpoint not found.".to_string(),
        500 => "Server error. Try again later.".to_string(),
        _ => format!("HTTP {}: {}", status, reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        assert_eq!(user_message(400, "Bad Request"), "Invalid data format. Check your input.");
        assert_eq!(user_message(401, "Unauthorized"), "Authentication required.");
        assert_eq!(user_message(404, "Not Found"), "API endpoint not found.");
        assert_eq!(user_message(500, "Internal Server Error"), "Server error. Try again later.");
    }

    #[test]
    fn test_unknown_status_falls_back_to_status_line() {
        assert_eq!(user_message(503, "Service Unavailable"), "HTTP 503: Service Unavailable");
    }
}
