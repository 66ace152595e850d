use crate::domain::employee::Employee;
use crate::domain::model::{EmployeeId, EmployeeKind};
use crate::utils::error::Result;

/// Anything built on the shared employee base record.
///
/// The provided methods give every specialisation the base behaviour without
/// re-implementing it.
pub trait StaffRecord {
    fn base(&self) -> &Employee;

    fn id(&self) -> EmployeeId {
        self.base().id()
    }

    fn kind(&self) -> EmployeeKind {
        self.base().kind()
    }

    fn salary(&self) -> i64 {
        self.base().salary()
    }

    fn email(&self) -> Option<String> {
        self.base().email()
    }

    fn full_name(&self) -> Option<String> {
        self.base().full_name()
    }
}

pub trait StaffRecordMut: StaffRecord {
    fn base_mut(&mut self) -> &mut Employee;

    fn apply_raise(&mut self, source: &impl RaiseSource) {
        self.base_mut().apply_raise(source)
    }

    fn set_full_name(&mut self, name: &str) -> Result<()> {
        self.base_mut().set_full_name(name)
    }

    fn clear_full_name(&mut self) {
        self.base_mut().clear_full_name()
    }
}

/// Source of raise multipliers for a kind of employee.
pub trait RaiseSource {
    fn raise_amount_for(&self, kind: EmployeeKind) -> f64;
}

/// Resolves employee ids to their base records.
pub trait Directory {
    fn find(&self, id: EmployeeId) -> Option<&Employee>;
}

impl<T: StaffRecord + ?Sized> StaffRecord for &T {
    fn base(&self) -> &Employee {
        (**self).base()
    }
}

impl<T: StaffRecord + ?Sized> StaffRecord for &mut T {
    fn base(&self) -> &Employee {
        (**self).base()
    }
}

impl<T: StaffRecordMut + ?Sized> StaffRecordMut for &mut T {
    fn base_mut(&mut self) -> &mut Employee {
        (**self).base_mut()
    }
}

impl<T: Directory + ?Sized> Directory for &T {
    fn find(&self, id: EmployeeId) -> Option<&Employee> {
        (**self).find(id)
    }
}

impl<T: StaffRecord> Directory for [T] {
    fn find(&self, id: EmployeeId) -> Option<&Employee> {
        self.iter().map(StaffRecord::base).find(|e| e.id() == id)
    }
}

impl<T: StaffRecord> Directory for Vec<T> {
    fn find(&self, id: EmployeeId) -> Option<&Employee> {
        self.as_slice().find(id)
    }
}
