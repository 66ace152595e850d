use crate::utils::error::{RosterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_EMPLOYEE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity handed out by the payroll registry, one per constructed employee.
///
/// Ids are drawn from a process-wide sequence, so records built by different
/// registries never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(u64);

impl EmployeeId {
    pub(crate) fn next() -> Self {
        Self(NEXT_EMPLOYEE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeKind {
    Employee,
    Developer,
    Manager,
}

impl EmployeeKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Developer => "Developer",
            Self::Manager => "Manager",
        }
    }

    /// Every kind is an employee; the specialisations are disjoint.
    pub fn is_a(self, other: EmployeeKind) -> bool {
        self == other || other == Self::Employee
    }
}

impl fmt::Display for EmployeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed `first,last,salary` record, before it is turned into an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub first_name: String,
    pub last_name: String,
    pub salary: i64,
}

impl EmployeeRecord {
    pub fn parse(text: &str) -> Result<Self> {
        let fields: Vec<&str> = text.split(',').collect();
        if fields.len() != 3 {
            return Err(RosterError::invalid_argument(
                "employee_record",
                text,
                format!("expected 3 comma-separated fields, found {}", fields.len()),
            ));
        }
        Self::from_fields(fields[0], fields[1], fields[2])
    }

    pub(crate) fn from_fields(first: &str, last: &str, salary: &str) -> Result<Self> {
        let first_name = parse_name_part("first_name", first)?;
        let last_name = parse_name_part("last_name", last)?;
        let salary = parse_salary(salary)?;
        Ok(Self {
            first_name,
            last_name,
            salary,
        })
    }
}

/// A parsed `first,last,salary,language` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeveloperRecord {
    pub employee: EmployeeRecord,
    pub language: String,
}

impl DeveloperRecord {
    pub fn parse(text: &str) -> Result<Self> {
        let fields: Vec<&str> = text.split(',').collect();
        if fields.len() != 4 {
            return Err(RosterError::invalid_argument(
                "developer_record",
                text,
                format!("expected 4 comma-separated fields, found {}", fields.len()),
            ));
        }
        let employee = EmployeeRecord::from_fields(fields[0], fields[1], fields[2])?;
        let language = parse_name_part("language", fields[3])?;
        Ok(Self { employee, language })
    }
}

fn parse_name_part(field: &str, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    crate::utils::validation::validate_non_empty_string(field, trimmed)?;
    Ok(trimmed.to_string())
}

fn parse_salary(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    trimmed.parse::<i64>().map_err(|e| {
        RosterError::invalid_argument("salary", trimmed, format!("not an integer: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_employee_record() {
        let record = EmployeeRecord::parse("Mary,Ross,86000").unwrap();
        assert_eq!(record.first_name, "Mary");
        assert_eq!(record.last_name, "Ross");
        assert_eq!(record.salary, 86000);
    }

    #[test]
    fn test_parse_employee_record_trims_fields() {
        let record = EmployeeRecord::parse(" Mary , Ross , 86000 ").unwrap();
        assert_eq!(record.first_name, "Mary");
        assert_eq!(record.salary, 86000);
    }

    #[test]
    fn test_parse_employee_record_field_count() {
        assert!(matches!(
            EmployeeRecord::parse("Mary,Ross"),
            Err(RosterError::InvalidArgument { .. })
        ));
        assert!(matches!(
            EmployeeRecord::parse("Mary,Ross,86000,extra"),
            Err(RosterError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_parse_employee_record_bad_salary() {
        let err = EmployeeRecord::parse("Mary,Ross,lots").unwrap_err();
        match err {
            RosterError::InvalidArgument { field, value, .. } => {
                assert_eq!(field, "salary");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_employee_record_empty_name() {
        assert!(EmployeeRecord::parse(",Ross,86000").is_err());
    }

    #[test]
    fn test_parse_developer_record() {
        let record = DeveloperRecord::parse("John,Doe,60000,Python").unwrap();
        assert_eq!(record.employee.last_name, "Doe");
        assert_eq!(record.language, "Python");
        assert!(DeveloperRecord::parse("John,Doe,60000").is_err());
    }

    #[test]
    fn test_ids_are_never_reused() {
        let first = EmployeeId::next();
        let second = EmployeeId::next();
        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn test_kind_hierarchy() {
        assert!(EmployeeKind::Manager.is_a(EmployeeKind::Manager));
        assert!(EmployeeKind::Manager.is_a(EmployeeKind::Employee));
        assert!(!EmployeeKind::Manager.is_a(EmployeeKind::Developer));
        assert!(!EmployeeKind::Employee.is_a(EmployeeKind::Developer));
    }
}
