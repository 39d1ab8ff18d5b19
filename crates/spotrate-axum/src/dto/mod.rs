//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! Domain types already serialize with their wire names; these wrap them in
//! the `{success, ...}` envelopes clients expect.

pub mod envelope;
pub mod schema;

pub use envelope::{DataResponse, ListResponse, MessageResponse};
pub use schema::{Bounds, CategoryDto, SchemaDto};
