//! Common utilities for swagger-validation
//!
//! This crate provides the HTTP error taxonomy and the request/response
//! accessor traits shared by the validation core and its collaborators.

pub mod error;
pub mod http;

pub use error::{HttpError, Result};
pub use http::{HttpStatus, MessageLike, RequestLike, ResponseLike};
