use serde::Serialize;

#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub age: i64,
    pub position: String,
    pub salary: f64,
}

/// Fields required to create an employee. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub department: String,
    pub age: i64,
    pub position: String,
    pub salary: f64,
}

/// Partial update: only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub department: Option<String>,
    pub age: Option<i64>,
    pub position: Option<String>,
    pub salary: Option<f64>,
}

impl EmployeeChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.department.is_none()
            && self.age.is_none()
            && self.position.is_none()
            && self.salary.is_none()
    }
}
