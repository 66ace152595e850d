use crate::domain::developer::Developer;
use crate::domain::employee::Employee;
use crate::domain::manager::Manager;
use crate::domain::ports::{StaffRecord, StaffRecordMut};
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt;

/// Any kind of staff member, for storing them side by side.
///
/// Equality follows the employee id, whatever the variant holds.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum StaffMember {
    Employee(Employee),
    Developer(Developer),
    Manager(Manager),
}

impl StaffMember {
    pub fn as_developer(&self) -> Option<&Developer> {
        match self {
            Self::Developer(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_manager(&self) -> Option<&Manager> {
        match self {
            Self::Manager(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_manager_mut(&mut self) -> Option<&mut Manager> {
        match self {
            Self::Manager(m) => Some(m),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl StaffRecord for StaffMember {
    fn base(&self) -> &Employee {
        match self {
            Self::Employee(e) => e,
            Self::Developer(d) => d.base(),
            Self::Manager(m) => m.base(),
        }
    }
}

impl StaffRecordMut for StaffMember {
    fn base_mut(&mut self) -> &mut Employee {
        match self {
            Self::Employee(e) => e,
            Self::Developer(d) => d.base_mut(),
            Self::Manager(m) => m.base_mut(),
        }
    }
}

impl PartialEq for StaffMember {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for StaffMember {}

impl fmt::Display for StaffMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.base(), f)
    }
}

impl From<Employee> for StaffMember {
    fn from(value: Employee) -> Self {
        Self::Employee(value)
    }
}

impl From<Developer> for StaffMember {
    fn from(value: Developer) -> Self {
        Self::Developer(value)
    }
}

impl From<Manager> for StaffMember {
    fn from(value: Manager) -> Self {
        Self::Manager(value)
    }
}
