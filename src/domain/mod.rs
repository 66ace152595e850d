pub mod developer;
pub mod employee;
pub mod manager;
pub mod model;
pub mod ports;
pub mod staff;

pub use developer::Developer;
pub use employee::{Employee, DEFAULT_EMAIL_DOMAIN};
pub use manager::Manager;
pub use model::{DeveloperRecord, EmployeeId, EmployeeKind, EmployeeRecord};
pub use ports::{Directory, RaiseSource, StaffRecord, StaffRecordMut};
pub use staff::StaffMember;
