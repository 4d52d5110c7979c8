//! Platform-free core of the student records application.
//!
//! Everything here compiles both natively and for `wasm32`: the record
//! model, validation, the `RecordStore` seam, and the list and form
//! view-models together with the host capabilities they are driven through.
//! The browser specifics (HTTP transport, toasts, dialogs, routing) live in
//! the `frontend` crate.

pub mod config;
pub mod form;
pub mod host;
pub mod list;
pub mod model;
pub mod navigation;
pub mod requests;
pub mod status;
pub mod store;
pub mod validation;

#[cfg(test)]
mod testing;
