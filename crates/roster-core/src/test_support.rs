//! In-memory `StudentApi` for tests.
//!
//! Behaves like the remote collection (ids assigned on create, full-record
//! updates) and records every call so tests can assert that no request was
//! sent.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::api::{ApiError, StudentApi};
use crate::model::{Student, StudentId, StudentPayload};

/// Which collection operation a call or injected failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

/// A recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(StudentPayload),
    Update(StudentId, StudentPayload),
    Delete(StudentId),
}

/// Failure to inject for an operation until cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Status(u16),
    Transport,
}

#[derive(Debug, Default)]
struct Inner {
    students: Vec<Student>,
    next_id: u64,
    calls: Vec<Call>,
    failures: HashMap<Operation, Failure>,
    stalled: HashSet<Operation>,
}

#[derive(Debug, Default)]
pub struct FakeStudentApi {
    inner: Mutex<Inner>,
}

impl FakeStudentApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the collection. New ids continue after the largest numeric id.
    pub fn with_students(students: Vec<Student>) -> Self {
        let next_id = students
            .iter()
            .filter_map(|s| s.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            inner: Mutex::new(Inner {
                students,
                next_id,
                ..Inner::default()
            }),
        }
    }

    pub fn fail(&self, operation: Operation, failure: Failure) {
        self.lock().failures.insert(operation, failure);
    }

    pub fn clear_failure(&self, operation: Operation) {
        self.lock().failures.remove(&operation);
    }

    /// Leave `operation` unanswered, as if the server never replied. Calls
    /// are still recorded, so a caller can be observed mid-request.
    pub fn stall(&self, operation: Operation) {
        self.lock().stalled.insert(operation);
    }

    pub fn resume(&self, operation: Operation) {
        self.lock().stalled.remove(&operation);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    /// Calls other than `List`.
    pub fn write_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| *c != Call::List)
            .collect()
    }

    pub fn stored(&self) -> Vec<Student> {
        self.lock().students.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A panicking test thread must not hide the original failure.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Record `call`, then wait forever if its operation is stalled.
    async fn answer_after(&self, call: Call, operation: Operation) {
        let stalled = {
            let mut inner = self.lock();
            inner.calls.push(call);
            inner.stalled.contains(&operation)
        };
        if stalled {
            std::future::pending::<()>().await;
        }
    }

    fn check(inner: &Inner, operation: Operation, method: &'static str) -> Result<(), ApiError> {
        match inner.failures.get(&operation) {
            None => Ok(()),
            Some(Failure::Status(status)) => Err(ApiError::UnexpectedStatus {
                method,
                url: "fake://students".to_string(),
                status: *status,
            }),
            Some(Failure::Transport) => Err(ApiError::Transport {
                method,
                url: "fake://students".to_string(),
                message: "connection refused".to_string(),
            }),
        }
    }
}

fn to_student(id: StudentId, payload: &StudentPayload) -> Student {
    Student {
        id,
        name: payload.name.clone(),
        age: Some(payload.age),
        email: payload.email.clone(),
        city: payload.city.clone(),
    }
}

impl StudentApi for FakeStudentApi {
    async fn list(&self) -> Result<Vec<Student>, ApiError> {
        self.answer_after(Call::List, Operation::List).await;
        let inner = self.lock();
        Self::check(&inner, Operation::List, "GET")?;
        Ok(inner.students.clone())
    }

    async fn create(&self, payload: &StudentPayload) -> Result<(), ApiError> {
        self.answer_after(Call::Create(payload.clone()), Operation::Create)
            .await;
        let mut inner = self.lock();
        Self::check(&inner, Operation::Create, "POST")?;
        inner.next_id += 1;
        let id = StudentId::new(inner.next_id.to_string());
        inner.students.push(to_student(id, payload));
        Ok(())
    }

    async fn update(&self, id: &StudentId, payload: &StudentPayload) -> Result<(), ApiError> {
        self.answer_after(Call::Update(id.clone(), payload.clone()), Operation::Update)
            .await;
        let mut inner = self.lock();
        Self::check(&inner, Operation::Update, "PUT")?;
        match inner.students.iter_mut().find(|s| &s.id == id) {
            Some(existing) => {
                *existing = to_student(id.clone(), payload);
                Ok(())
            }
            None => Err(ApiError::UnexpectedStatus {
                method: "PUT",
                url: format!("fake://students/{id}"),
                status: 404,
            }),
        }
    }

    async fn delete(&self, id: &StudentId) -> Result<(), ApiError> {
        self.answer_after(Call::Delete(id.clone()), Operation::Delete)
            .await;
        let mut inner = self.lock();
        Self::check(&inner, Operation::Delete, "DELETE")?;
        let before = inner.students.len();
        inner.students.retain(|s| &s.id != id);
        if inner.students.len() == before {
            return Err(ApiError::UnexpectedStatus {
                method: "DELETE",
                url: format!("fake://students/{id}"),
                status: 404,
            });
        }
        Ok(())
    }
}
