//! Test data factories for integration tests.

use super::client::{CreateTaskDto, UpdateTaskDto};

pub struct TaskFactory;

impl TaskFactory {
    pub fn create_request(title: &str) -> CreateTaskDto {
        CreateTaskDto {
            title: title.to_string(),
        }
    }

    pub fn update_request(title: &str) -> UpdateTaskDto {
        UpdateTaskDto {
            title: title.to_string(),
        }
    }
}
