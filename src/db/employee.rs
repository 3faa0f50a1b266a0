use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::error::Error;
use std::fmt;

use crate::models::employee::{Employee, EmployeeChanges, NewEmployee};

const EMPLOYEE_COLUMNS: &str = "id, name, department, age, position, salary";

#[derive(Debug)]
pub enum StoreError {
    /// No row exists for the id.
    NotFound(i64),
    Database(sqlx::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "employee not found: {}", id),
            StoreError::Database(err) => write!(f, "{}", err),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::NotFound(_) => None,
            StoreError::Database(err) => Some(err),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

/// Data access for the `employees` table. Every write is a single
/// autocommitted statement.
#[derive(Clone)]
pub struct EmployeeStore {
    pool: SqlitePool,
}

impl EmployeeStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, employee: &NewEmployee) -> Result<Employee, StoreError> {
        let sql = format!(
            "INSERT INTO employees (name, department, age, position, salary) \
             VALUES (?, ?, ?, ?, ?) RETURNING {}",
            EMPLOYEE_COLUMNS
        );

        let created = sqlx::query_as::<_, Employee>(&sql)
            .bind(&employee.name)
            .bind(&employee.department)
            .bind(employee.age)
            .bind(&employee.position)
            .bind(employee.salary)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Employee>, StoreError> {
        let sql = format!("SELECT {} FROM employees WHERE id = ?", EMPLOYEE_COLUMNS);

        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(employee)
    }

    /// Writes only the fields present in `changes`.
    pub async fn update(&self, id: i64, changes: &EmployeeChanges) -> Result<(), StoreError> {
        if changes.is_empty() {
            return match self.get(id).await? {
                Some(_) => Ok(()),
                None => Err(StoreError::NotFound(id)),
            };
        }

        let mut builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new("UPDATE employees SET ");
        {
            let mut set = builder.separated(", ");
            if let Some(name) = &changes.name {
                set.push("name = ").push_bind_unseparated(name.clone());
            }
            if let Some(department) = &changes.department {
                set.push("department = ").push_bind_unseparated(department.clone());
            }
            if let Some(age) = changes.age {
                set.push("age = ").push_bind_unseparated(age);
            }
            if let Some(position) = &changes.position {
                set.push("position = ").push_bind_unseparated(position.clone());
            }
            if let Some(salary) = changes.salary {
                set.push("salary = ").push_bind_unseparated(salary);
            }
        }
        builder.push(" WHERE id = ").push_bind(id);

        let result = builder.build().execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
