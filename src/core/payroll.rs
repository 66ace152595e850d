use crate::config::toml_config::RosterConfig;
use crate::domain::model::{DeveloperRecord, EmployeeId, EmployeeKind, EmployeeRecord};
use crate::domain::ports::RaiseSource;
use crate::domain::{Developer, Employee, Manager, DEFAULT_EMAIL_DOMAIN};
use crate::utils::error::{RosterError, Result};
use crate::utils::validation::{validate_email_domain, validate_raise_amount, Validate};
use std::collections::HashMap;
use std::io::Read;

pub const DEFAULT_RAISE_AMOUNT: f64 = 1.07;

/// Shared raise multiplier with optional per-kind overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct RaisePolicy {
    shared: f64,
    overrides: HashMap<EmployeeKind, f64>,
}

impl RaisePolicy {
    pub fn new(shared: f64) -> Result<Self> {
        validate_raise_amount("raise_amount", shared)?;
        Ok(Self {
            shared,
            overrides: HashMap::new(),
        })
    }

    pub fn shared(&self) -> f64 {
        self.shared
    }

    pub fn set_shared(&mut self, amount: f64) -> Result<()> {
        validate_raise_amount("raise_amount", amount)?;
        self.shared = amount;
        Ok(())
    }

    pub fn kind_override(&self, kind: EmployeeKind) -> Option<f64> {
        self.overrides.get(&kind).copied()
    }

    pub fn set_kind_override(&mut self, kind: EmployeeKind, amount: f64) -> Result<()> {
        validate_raise_amount(&format!("kind_raise.{}", kind.name().to_lowercase()), amount)?;
        self.overrides.insert(kind, amount);
        Ok(())
    }

    pub fn clear_kind_override(&mut self, kind: EmployeeKind) {
        self.overrides.remove(&kind);
    }
}

impl Default for RaisePolicy {
    fn default() -> Self {
        Self {
            shared: DEFAULT_RAISE_AMOUNT,
            overrides: HashMap::new(),
        }
    }
}

impl RaiseSource for RaisePolicy {
    fn raise_amount_for(&self, kind: EmployeeKind) -> f64 {
        self.kind_override(kind).unwrap_or(self.shared)
    }
}

/// Registry that constructs every staff member and owns the state they share:
/// the headcount, the raise policy and the email domain.
///
/// Single owner: callers mutate it through `&mut self`. Only the id sequence
/// is process-wide; the headcount is per registry.
#[derive(Debug)]
pub struct Payroll {
    headcount: u64,
    raise_policy: RaisePolicy,
    email_domain: String,
}

impl Payroll {
    pub fn new() -> Self {
        Self {
            headcount: 0,
            raise_policy: RaisePolicy::default(),
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
        }
    }

    pub fn from_config(config: &RosterConfig) -> Result<Self> {
        config.validate()?;

        let mut raise_policy = RaisePolicy::new(config.raise_amount())?;
        for (kind, amount) in config.kind_raise_amounts() {
            raise_policy.set_kind_override(kind, amount)?;
        }

        Ok(Self {
            headcount: 0,
            raise_policy,
            email_domain: config.email_domain().to_string(),
        })
    }

    pub fn with_email_domain(mut self, domain: &str) -> Result<Self> {
        validate_email_domain("email_domain", domain)?;
        self.email_domain = domain.to_string();
        Ok(self)
    }

    /// Number of staff members constructed so far. Never decreases.
    pub fn headcount(&self) -> u64 {
        self.headcount
    }

    pub fn email_domain(&self) -> &str {
        &self.email_domain
    }

    pub fn raise_policy(&self) -> &RaisePolicy {
        &self.raise_policy
    }

    pub fn raise_amount(&self) -> f64 {
        self.raise_policy.shared()
    }

    /// Changes the shared multiplier for every kind without its own override.
    pub fn set_raise_amount(&mut self, amount: f64) -> Result<()> {
        self.raise_policy.set_shared(amount)?;
        tracing::info!(raise_amount = amount, "Shared raise amount updated");
        Ok(())
    }

    pub fn set_kind_raise_amount(&mut self, kind: EmployeeKind, amount: f64) -> Result<()> {
        self.raise_policy.set_kind_override(kind, amount)?;
        tracing::info!(kind = %kind, raise_amount = amount, "Raise amount override set");
        Ok(())
    }

    pub fn clear_kind_raise_amount(&mut self, kind: EmployeeKind) {
        self.raise_policy.clear_kind_override(kind);
    }

    pub fn employee(&mut self, first_name: &str, last_name: &str, salary: i64) -> Employee {
        let record = EmployeeRecord {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            salary,
        };
        self.construct(EmployeeKind::Employee, record)
    }

    pub fn developer(
        &mut self,
        first_name: &str,
        last_name: &str,
        salary: i64,
        language: &str,
    ) -> Developer {
        let record = EmployeeRecord {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            salary,
        };
        Developer::new(self.construct(EmployeeKind::Developer, record), language)
    }

    /// Builds a manager that adopts `employees`, or starts with an empty list.
    pub fn manager(
        &mut self,
        first_name: &str,
        last_name: &str,
        salary: i64,
        employees: Option<Vec<EmployeeId>>,
    ) -> Manager {
        let record = EmployeeRecord {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            salary,
        };
        Manager::new(self.construct(EmployeeKind::Manager, record), employees)
    }

    /// Parses a `first,last,salary` record into an employee.
    pub fn from_delimited_string(&mut self, text: &str) -> Result<Employee> {
        let record = EmployeeRecord::parse(text)?;
        Ok(self.construct(EmployeeKind::Employee, record))
    }

    /// Parses a `first,last,salary,language` record into a developer.
    pub fn developer_from_delimited_string(&mut self, text: &str) -> Result<Developer> {
        let DeveloperRecord { employee, language } = DeveloperRecord::parse(text)?;
        Ok(Developer::new(
            self.construct(EmployeeKind::Developer, employee),
            language,
        ))
    }

    /// Reads header-less `first,last,salary` lines into employees.
    ///
    /// The whole batch is validated before anything is constructed, so a bad
    /// line leaves the headcount untouched.
    pub fn import_records<R: Read>(&mut self, reader: R) -> Result<Vec<Employee>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = row?;
            if row.len() != 3 {
                let line = row.position().map(|p| p.line()).unwrap_or_default();
                return Err(RosterError::invalid_argument(
                    "employee_record",
                    row.iter().collect::<Vec<_>>().join(","),
                    format!(
                        "line {}: expected 3 comma-separated fields, found {}",
                        line,
                        row.len()
                    ),
                ));
            }
            records.push(EmployeeRecord::from_fields(&row[0], &row[1], &row[2])?);
        }

        tracing::info!(count = records.len(), "Imported employee records");
        Ok(records
            .into_iter()
            .map(|record| self.construct(EmployeeKind::Employee, record))
            .collect())
    }

    fn construct(&mut self, kind: EmployeeKind, record: EmployeeRecord) -> Employee {
        self.headcount += 1;
        let id = EmployeeId::next();
        tracing::debug!(employee = %id, kind = %kind, "Constructed staff member");
        Employee::new(id, kind, record, &self.email_domain)
    }
}

impl Default for Payroll {
    fn default() -> Self {
        Self::new()
    }
}

impl RaiseSource for Payroll {
    fn raise_amount_for(&self, kind: EmployeeKind) -> f64 {
        self.raise_policy.raise_amount_for(kind)
    }
}
