//! Greeting handler.

use crate::config::GREETING;

/// `GET /` - returns the greeting as `text/plain`.
pub async fn index() -> &'static str {
    GREETING
}
