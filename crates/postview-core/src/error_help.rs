//! Human-readable error output with a hint on what to try next.

use crate::core::error::PostviewError;

/// Suggest a next step for an error, if there is a useful one.
pub trait ErrorHelp {
    fn help(&self) -> Option<String>;
}

impl ErrorHelp for PostviewError {
    fn help(&self) -> Option<String> {
        match self {
            PostviewError::Http(_) => Some(
                "Check your network connection, or point Postview elsewhere with `postview config set-url <url>`"
                    .to_string(),
            ),
            PostviewError::Fetch(_) => Some(
                "The server rejected the request. Verify the URL with `postview config get-url`"
                    .to_string(),
            ),
            PostviewError::Json(_) => Some(
                "Expected a JSON array of {userId, id, title, body} records".to_string(),
            ),
            PostviewError::Yaml(_) | PostviewError::Config(_) => Some(
                "Fix or delete config.yaml in the Postview config directory to restore defaults"
                    .to_string(),
            ),
            PostviewError::Io(_) | PostviewError::Path(_) => None,
        }
    }
}

/// Format an error for stderr, followed by its help line when available
pub fn format_error_with_help(error: &PostviewError) -> String {
    match error.help() {
        Some(help) => format!("Error: {}\n\n  help: {}", error, help),
        None => format!("Error: {}", error),
    }
}
