//! # Notification Module
//!
//! ## Registered Routes:
//!
//! *   **`POST /api/slack`**:
//!     - **Handler**: `send::process`
//!     - **Description**: Formats a new-lead message and forwards it to the
//!       configured Slack webhook. Answers `{"success": true}`, `500` when no
//!       webhook is configured, or the webhook's own status when it rejects
//!       the message.

mod send;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/slack";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(send::process))
}
