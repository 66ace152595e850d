use crate::domain::employee::Employee;
use crate::domain::model::EmployeeId;
use crate::domain::ports::{Directory, StaffRecord, StaffRecordMut};
use crate::utils::error::{RosterError, Result};
use serde::Serialize;
use std::fmt;
use std::io::Write;

const CLEARED_NAME: &str = "- -";

/// An employee who manages an ordered list of other employees.
///
/// Reports are held by id, so the same employee may be referenced from
/// elsewhere. Names are resolved through a [`Directory`] at the time they are
/// listed, which keeps them in step with later renames.
#[derive(Debug, Clone, Serialize)]
pub struct Manager {
    #[serde(flatten)]
    base: Employee,
    employees: Vec<EmployeeId>,
}

impl Manager {
    pub(crate) fn new(base: Employee, employees: Option<Vec<EmployeeId>>) -> Self {
        Self {
            base,
            employees: employees.unwrap_or_default(),
        }
    }

    pub fn employee_ids(&self) -> &[EmployeeId] {
        &self.employees
    }

    pub fn manages(&self, employee: &impl StaffRecord) -> bool {
        self.employees.contains(&employee.id())
    }

    /// Appends the employee unless already managed.
    pub fn add_employee(&mut self, employee: &impl StaffRecord) {
        let id = employee.id();
        if !self.employees.contains(&id) {
            tracing::debug!(manager = %self.base.id(), employee = %id, "Added report");
            self.employees.push(id);
        }
    }

    /// Removes the employee if managed; otherwise a no-op.
    pub fn remove_employee(&mut self, employee: &impl StaffRecord) {
        let id = employee.id();
        if let Some(pos) = self.employees.iter().position(|e| *e == id) {
            tracing::debug!(manager = %self.base.id(), employee = %id, "Removed report");
            self.employees.remove(pos);
        }
    }

    /// Full names of the managed employees in insertion order, one entry per
    /// id. `None` marks an employee whose name has been cleared. An id the
    /// directory cannot resolve is an error.
    pub fn employee_names(&self, directory: &impl Directory) -> Result<Vec<Option<String>>> {
        self.employees
            .iter()
            .map(|id| {
                directory
                    .find(*id)
                    .map(Employee::full_name)
                    .ok_or(RosterError::UnknownEmployee { id: id.get() })
            })
            .collect()
    }

    /// Writes one `---> <full name>` line per managed employee; a cleared name
    /// is shown as `- -`, matching `Display`.
    pub fn print_employees(&self, directory: &impl Directory, mut out: impl Write) -> Result<()> {
        for name in self.employee_names(directory)? {
            writeln!(out, "---> {}", name.as_deref().unwrap_or(CLEARED_NAME))?;
        }
        Ok(())
    }

    pub fn snapshot(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl PartialEq for Manager {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl Eq for Manager {}

impl fmt::Display for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

impl StaffRecord for Manager {
    fn base(&self) -> &Employee {
        &self.base
    }
}

impl StaffRecordMut for Manager {
    fn base_mut(&mut self) -> &mut Employee {
        &mut self.base
    }
}
