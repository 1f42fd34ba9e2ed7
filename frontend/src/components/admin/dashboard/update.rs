//! Update function for the admin dashboard.
//!
//! Every mutation reloads the whole list afterwards; there is no local
//! patching of rows, so the table always mirrors the datastore. A row with a
//! request in flight ignores further toggles and deletes until it settles.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiFailure};
use crate::components::helpers::{confirm, copy_to_clipboard, hard_navigate, show_toast, TOAST_MS};

use super::messages::Msg;
use super::state::AdminDashboard;

const LOAD_FAILED: &str = "데이터를 불러오는데 실패했습니다.";
const DELETE_FAILED: &str = "삭제에 실패했습니다.";
const DELIVERY_FAILED: &str = "전달 처리 실패";

/// Sends the browser to the login page when the failure is an auth failure.
/// Returns `true` when it did.
pub fn redirect_on_auth_failure(failure: &ApiFailure) -> bool {
    if failure.is_unauthenticated() {
        hard_navigate("/admin/login");
        true
    } else if failure.is_forbidden() {
        hard_navigate("/admin/login?error=unauthorized");
        true
    } else {
        false
    }
}

fn or_default(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

pub fn update(component: &mut AdminDashboard, ctx: &Context<AdminDashboard>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            component.loading = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::list_applications().await {
                    Ok(rows) => link.send_message(Msg::Loaded(rows)),
                    Err(failure) => link.send_message(Msg::LoadFailed(failure)),
                }
            });
            true
        }
        Msg::Loaded(rows) => {
            component.pending.retain_listed(&rows);
            component.applications = rows;
            component.loading = false;
            true
        }
        Msg::LoadFailed(failure) => {
            component.loading = false;
            if !redirect_on_auth_failure(&failure) {
                component.error = Some(or_default(failure.message, LOAD_FAILED));
            }
            true
        }
        Msg::ToggleDelivered { id, delivered } => {
            if !component.pending.begin(&id) {
                return false;
            }
            component.error = None;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::set_delivered(&id, delivered).await {
                    Ok(()) => link.send_message(Msg::DeliveryUpdated { id, delivered }),
                    Err(failure) => {
                        if !redirect_on_auth_failure(&failure) {
                            link.send_message(Msg::DeliveryFailed {
                                id,
                                message: failure.message,
                            });
                        }
                    }
                }
            });
            true
        }
        Msg::DeliveryUpdated { id, delivered } => {
            component.pending.finish(&id);
            ctx.link().send_message(Msg::Load);
            let toast = if delivered {
                "전달처리되었습니다"
            } else {
                "전달처리 취소되었습니다"
            };
            show_toast(toast, TOAST_MS);
            true
        }
        Msg::DeliveryFailed { id, message } => {
            component.pending.finish(&id);
            gloo_console::error!("Delivery failed:", message.clone());
            component.error = Some(or_default(message, DELIVERY_FAILED));
            show_toast(DELIVERY_FAILED, TOAST_MS);
            // The checkbox already flipped in the DOM; reload to put it back.
            ctx.link().send_message(Msg::Load);
            true
        }
        Msg::Delete { id, name } => {
            if component.pending.contains(&id) {
                return false;
            }
            if !confirm(&format!("\"{name}\"님의 신청 내역을 삭제하시겠습니까?")) {
                return false;
            }
            component.pending.begin(&id);
            component.error = None;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::delete_application(&id).await {
                    Ok(()) => link.send_message(Msg::Deleted(id)),
                    Err(failure) => {
                        if !redirect_on_auth_failure(&failure) {
                            link.send_message(Msg::DeleteFailed {
                                id,
                                message: failure.message,
                            });
                        }
                    }
                }
            });
            true
        }
        Msg::Deleted(id) => {
            component.pending.finish(&id);
            ctx.link().send_message(Msg::Load);
            false
        }
        Msg::DeleteFailed { id, message } => {
            component.pending.finish(&id);
            gloo_console::error!("Delete failed:", message.clone());
            component.error = Some(or_default(message, DELETE_FAILED));
            true
        }
        Msg::Copy(summary) => {
            spawn_local(async move {
                if copy_to_clipboard(&summary).await {
                    show_toast("복사 완료", TOAST_MS);
                } else {
                    show_toast("복사 실패", TOAST_MS);
                }
            });
            false
        }
        Msg::Logout => {
            spawn_local(async move {
                if let Err(failure) = api::logout().await {
                    gloo_console::error!("Logout failed:", failure.message);
                }
                hard_navigate("/admin/login");
            });
            false
        }
    }
}
