use crate::api::ApiFailure;
use common::model::application::Application;

pub enum Msg {
    Load,
    Loaded(Vec<Application>),
    LoadFailed(ApiFailure),
    ToggleDelivered { id: String, delivered: bool },
    DeliveryUpdated { id: String, delivered: bool },
    DeliveryFailed { id: String, message: String },
    Delete { id: String, name: String },
    Deleted(String),
    DeleteFailed { id: String, message: String },
    Copy(String),
    Logout,
}
