// Entry form, submission flow and page/JSON handlers for applications.

pub mod form;
pub mod handlers;
pub mod submit;
pub mod views;
