pub mod admin;
pub mod consultation_form;
pub mod footer;
pub mod helpers;
pub mod landing;
