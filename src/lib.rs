//! # Task Tracker
//!
//! A minimal task-tracking HTTP service: CRUD over a list of tasks
//! persisted as a single JSON file, with task creation optionally
//! forwarding the new title to a hosted language-model endpoint for an
//! explanation of how to solve it.
//!
//! ## Module Structure
//!
//! - `domain`: the `Task` record and the id-assignment rule
//! - `infrastructure`: configuration, the file-backed task store, and the
//!   completion endpoint client
//! - `api`: HTTP handlers, DTOs, error handling, and routing
//!
//! ## Design
//!
//! Handlers are stateless; every request loads the full task list,
//! mutates it in memory, and writes it back wholesale. The storage and
//! completion collaborators are injected behind traits so handlers are
//! testable without disk IO or a live inference endpoint.

#![forbid(unsafe_code)]

pub mod api;
pub mod domain;
pub mod infrastructure;
