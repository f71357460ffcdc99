//! User-facing notification texts.

pub const LOAD_TRANSPORT_FAILED: &str = "Failed to load data";
pub const LOAD_FAILED: &str = "Failed to load students.";

pub const ADD_SUCCEEDED: &str = "Student added successfully!";
pub const ADD_FAILED: &str = "Failed to add student.";

pub const UPDATE_SUCCEEDED: &str = "Student updated successfully!";
pub const UPDATE_FAILED: &str = "Failed to update student.";

pub const DELETE_SUCCEEDED: &str = "Student deleted successfully.";
pub const DELETE_FAILED: &str = "Failed to delete student.";

/// Shared by create, update, and delete when the request itself fails.
pub const TRANSPORT_FAILED: &str = "Error occurred.";

pub const NO_SELECTION: &str = "No student selected.";
pub const NOT_FOUND: &str = "Student not found.";
