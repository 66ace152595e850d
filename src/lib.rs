pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::RosterConfig;

pub use crate::core::{calendar::is_workday, Payroll, RaisePolicy, Roster};
pub use domain::{
    Developer, Directory, Employee, EmployeeId, EmployeeKind, Manager, RaiseSource, StaffMember,
    StaffRecord, StaffRecordMut,
};
pub use utils::error::{Result, RosterError};
