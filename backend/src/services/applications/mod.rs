//! # Application Submission Module
//!
//! Receives leads from the public consultation form.
//!
//! ## Registered Routes:
//!
//! *   **`POST /api/applications`**:
//!     - **Handler**: `submit::process`
//!     - **Description**: Validates a `NewApplication` and inserts exactly one
//!       row. Answers `201` with the new id, `400` with the validation message,
//!       or `500` with the datastore's message.

mod submit;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/applications";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(submit::process))
}
