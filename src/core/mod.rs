pub mod calendar;
pub mod payroll;
pub mod roster;

pub use crate::domain::ports::{Directory, RaiseSource, StaffRecord, StaffRecordMut};
pub use crate::utils::error::Result;
pub use payroll::{Payroll, RaisePolicy, DEFAULT_RAISE_AMOUNT};
pub use roster::Roster;
