//! Employee payload validation.
//!
//! Each field has its own check function returning the native value or a
//! `ValidationError`. `validate` walks those checks in either `Full` mode
//! (every field required) or `Partial` mode (absent fields skipped) and collects
//! per-field failures into `ValidationErrors`. Unknown fields are ignored.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_json::{Map, Value};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::employee::{EmployeeChanges, NewEmployee};

const MISSING: &str = "Missing data for required field.";
const NULL: &str = "Field may not be null.";
const NOT_STRING: &str = "Not a valid string.";
const NOT_INTEGER: &str = "Not a valid integer.";
const NOT_NUMBER: &str = "Not a valid number.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Create: all fields must be present.
    Full,
    /// Update: only present fields are checked.
    Partial,
}

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), ValidationErrors> {
    payload.validate()
}

/// Validates a JSON object against the employee schema.
pub fn validate(input: &Map<String, Value>, mode: Mode) -> Result<EmployeeChanges, ValidationErrors> {
    let mut checker = Checker {
        input,
        mode,
        errors: ValidationErrors::new(),
    };

    let changes = EmployeeChanges {
        name: checker.field("name", string),
        department: checker.field("department", string),
        age: checker.field("age", integer),
        position: checker.field("position", string),
        salary: checker.field("salary", number),
    };

    if checker.errors.is_empty() {
        Ok(changes)
    } else {
        Err(checker.errors)
    }
}

/// Flattens validation errors to `{"field": ["message", ...]}`.
pub fn error_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|err| match &err.message {
                    Some(message) => message.to_string(),
                    None => err.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

impl TryFrom<EmployeeChanges> for NewEmployee {
    type Error = ValidationErrors;

    fn try_from(changes: EmployeeChanges) -> Result<Self, Self::Error> {
        match changes {
            EmployeeChanges {
                name: Some(name),
                department: Some(department),
                age: Some(age),
                position: Some(position),
                salary: Some(salary),
            } => Ok(NewEmployee {
                name,
                department,
                age,
                position,
                salary,
            }),
            changes => {
                let mut errors = ValidationErrors::new();
                let missing = [
                    ("name", changes.name.is_none()),
                    ("department", changes.department.is_none()),
                    ("age", changes.age.is_none()),
                    ("position", changes.position.is_none()),
                    ("salary", changes.salary.is_none()),
                ];
                for (field, absent) in missing {
                    if absent {
                        errors.add(field, error("required", MISSING));
                    }
                }
                Err(errors)
            }
        }
    }
}

struct Checker<'a> {
    input: &'a Map<String, Value>,
    mode: Mode,
    errors: ValidationErrors,
}

impl Checker<'_> {
    fn field<T>(
        &mut self,
        name: &'static str,
        check: fn(&Value) -> Result<T, ValidationError>,
    ) -> Option<T> {
        let value = match self.input.get(name) {
            Some(value) => value,
            None => {
                if self.mode == Mode::Full {
                    self.errors.add(name, error("required", MISSING));
                }
                return None;
            }
        };

        if value.is_null() {
            self.errors.add(name, error("null", NULL));
            return None;
        }

        match check(value) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                self.errors.add(name, err);
                None
            }
        }
    }
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn string(value: &Value) -> Result<String, ValidationError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| error("type", NOT_STRING))
}

// Integral floats such as `31.0` are accepted.
fn integer(value: &Value) -> Result<i64, ValidationError> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        _ => Err(error("type", NOT_INTEGER)),
    }
}

fn number(value: &Value) -> Result<f64, ValidationError> {
    value.as_f64().ok_or_else(|| error("type", NOT_NUMBER))
}
