//! HTTP access to the student collection.
//!
//! `HttpStudentStore` implements `common::store::RecordStore` on top of
//! `gloo-net`, so the view-models never see a request or a status code.

mod http_store;

pub use http_store::HttpStudentStore;
