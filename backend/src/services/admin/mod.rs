//! # Admin Service Module
//!
//! Lead management for signed-in staff on the allow-list. Every handler
//! first calls `access::require_admin`, which answers `401` without a
//! session and `403` for accounts off the allow-list.
//!
//! ## Registered Routes:
//!
//! *   **`GET /applications`**:
//!     - **Handler**: `list::process`
//!     - **Description**: Every lead, newest first. No paging or filtering.
//!
//! *   **`DELETE /applications/{id}`**:
//!     - **Handler**: `delete::process`
//!     - **Description**: Removes the lead. Deleting an id that no longer
//!       exists is not an error.
//!
//! *   **`PATCH /applications/{id}/delivered`**:
//!     - **Handler**: `delivered::process`
//!     - **Description**: `{"delivered": true}` stamps `delivered_at` with the
//!       current time, `false` clears it. No version check: concurrent
//!       mutations resolve as last write wins.

mod delete;
mod delivered;
mod list;

use actix_web::web::{delete, get, patch, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/admin";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/applications", get().to(list::process))
        .route("/applications/{id}", delete().to(delete::process))
        .route("/applications/{id}/delivered", patch().to(delivered::process))
}
