//! Data Transfer Objects for the API layer.
//!
//! DTOs are kept separate from the domain [`Task`](crate::domain::Task)
//! even where the shapes coincide, so the wire format can evolve without
//! touching the persisted representation.

pub mod requests;
pub mod responses;

pub use requests::{CreateTaskRequest, UpdateTaskRequest};
pub use responses::{CreateTaskResponse, DeleteTaskResponse, TaskResponse, UpdateTaskResponse};
