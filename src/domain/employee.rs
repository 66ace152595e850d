use crate::core::calendar;
use crate::domain::model::{EmployeeId, EmployeeKind, EmployeeRecord};
use crate::domain::ports::{RaiseSource, StaffRecord, StaffRecordMut};
use crate::utils::error::{RosterError, Result};
use crate::utils::validation::validate_raise_amount;
use chrono::Datelike;
use serde::Serialize;
use std::fmt;

pub const DEFAULT_EMAIL_DOMAIN: &str = "email.com";

/// Base employee record shared by every kind of staff member.
///
/// Instances are created through [`crate::core::payroll::Payroll`], which
/// assigns the id and counts the construction. Equality is identity: two
/// records are equal when they carry the same id.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    id: EmployeeId,
    kind: EmployeeKind,
    first_name: Option<String>,
    last_name: Option<String>,
    salary: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    raise_amount: Option<f64>,
    #[serde(skip)]
    email_domain: String,
}

impl Employee {
    pub(crate) fn new(
        id: EmployeeId,
        kind: EmployeeKind,
        record: EmployeeRecord,
        email_domain: &str,
    ) -> Self {
        Self {
            id,
            kind,
            first_name: Some(record.first_name),
            last_name: Some(record.last_name),
            salary: record.salary,
            raise_amount: None,
            email_domain: email_domain.to_string(),
        }
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn kind(&self) -> EmployeeKind {
        self.kind
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn salary(&self) -> i64 {
        self.salary
    }

    /// `first.last@domain`, or `None` once the name has been cleared.
    pub fn email(&self) -> Option<String> {
        let (first, last) = self.name_parts()?;
        Some(format!("{}.{}@{}", first, last, self.email_domain))
    }

    pub fn full_name(&self) -> Option<String> {
        let (first, last) = self.name_parts()?;
        Some(format!("{} {}", first, last))
    }

    /// Replaces both name parts from a `"First Last"` string.
    ///
    /// The input must split on a single whitespace character into exactly two
    /// non-empty tokens, so runs of whitespace and leading or trailing
    /// whitespace are rejected. On failure the record is left untouched.
    pub fn set_full_name(&mut self, name: &str) -> Result<()> {
        let parts: Vec<&str> = name.split(char::is_whitespace).collect();
        match parts.as_slice() {
            [first, last] if !first.is_empty() && !last.is_empty() => {
                self.first_name = Some((*first).to_string());
                self.last_name = Some((*last).to_string());
                Ok(())
            }
            _ => Err(RosterError::invalid_argument(
                "full_name",
                name,
                format!(
                    "expected exactly two whitespace-separated names, found {} part(s)",
                    parts.iter().filter(|p| !p.is_empty()).count()
                ),
            )),
        }
    }

    pub fn clear_full_name(&mut self) {
        tracing::info!(employee = %self.id, "Delete name.");
        self.first_name = None;
        self.last_name = None;
    }

    /// Local multiplier that takes precedence over every shared setting.
    pub fn raise_amount_override(&self) -> Option<f64> {
        self.raise_amount
    }

    pub fn set_raise_amount(&mut self, amount: f64) -> Result<()> {
        validate_raise_amount("raise_amount", amount)?;
        self.raise_amount = Some(amount);
        Ok(())
    }

    pub fn clear_raise_amount(&mut self) {
        self.raise_amount = None;
    }

    pub fn effective_raise_amount(&self, source: &impl RaiseSource) -> f64 {
        self.raise_amount
            .unwrap_or_else(|| source.raise_amount_for(self.kind))
    }

    /// Multiplies the salary by the effective raise, truncating toward zero.
    pub fn apply_raise(&mut self, source: &impl RaiseSource) {
        let amount = self.effective_raise_amount(source);
        let raised = (self.salary as f64 * amount).trunc() as i64;
        tracing::debug!(
            employee = %self.id,
            old_salary = self.salary,
            new_salary = raised,
            raise_amount = amount,
            "Applied raise"
        );
        self.salary = raised;
    }

    pub fn is_workday<D: Datelike>(day: &D) -> bool {
        calendar::is_workday(day)
    }

    /// JSON view of the stored attributes.
    pub fn snapshot(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn name_parts(&self) -> Option<(&str, &str)> {
        Some((self.first_name.as_deref()?, self.last_name.as_deref()?))
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Employee {}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {}, {})",
            self.kind,
            self.first_name.as_deref().unwrap_or("-"),
            self.last_name.as_deref().unwrap_or("-"),
            self.salary
        )
    }
}

impl StaffRecord for Employee {
    fn base(&self) -> &Employee {
        self
    }
}

impl StaffRecordMut for Employee {
    fn base_mut(&mut self) -> &mut Employee {
        self
    }
}
