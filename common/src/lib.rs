//! Types and pure logic shared by the browser app and the server.

pub mod attribution;
pub mod display;
pub mod form;
pub mod model;
pub mod phone;
pub mod requests;
