use crate::domain::model::{EmployeeId, EmployeeKind};
use crate::domain::ports::{Directory, StaffRecord};
use crate::domain::{Employee, StaffMember};
use std::collections::BTreeMap;

/// In-memory store of staff members, iterated in construction order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    members: BTreeMap<EmployeeId, StaffMember>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the member, replacing any previous entry with the same id.
    pub fn insert(&mut self, member: impl Into<StaffMember>) -> EmployeeId {
        let member = member.into();
        let id = member.id();
        if self.members.insert(id, member).is_some() {
            tracing::debug!(employee = %id, "Replaced roster entry");
        }
        id
    }

    pub fn get(&self, id: EmployeeId) -> Option<&StaffMember> {
        self.members.get(&id)
    }

    pub fn get_mut(&mut self, id: EmployeeId) -> Option<&mut StaffMember> {
        self.members.get_mut(&id)
    }

    pub fn remove(&mut self, id: EmployeeId) -> Option<StaffMember> {
        self.members.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StaffMember> {
        self.members.values()
    }

    /// Members that are a `kind`; asking for `Employee` yields everyone.
    pub fn of_kind(&self, kind: EmployeeKind) -> impl Iterator<Item = &StaffMember> {
        self.iter().filter(move |m| m.kind().is_a(kind))
    }
}

impl Directory for Roster {
    fn find(&self, id: EmployeeId) -> Option<&Employee> {
        self.members.get(&id).map(StaffRecord::base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::payroll::Payroll;
    use crate::domain::ports::StaffRecordMut;

    #[test]
    fn test_insert_and_lookup() {
        let mut payroll = Payroll::new();
        let mut roster = Roster::new();
        let dev = roster.insert(payroll.developer("John", "Doe", 60000, "Python"));
        let emp = roster.insert(payroll.employee("Ann", "Smith", 70000));

        assert_eq!(roster.len(), 2);
        assert_eq!(
            roster.get(dev).and_then(StaffMember::as_developer).map(|d| d.language()),
            Some("Python")
        );
        assert_eq!(
            roster.find(emp).and_then(Employee::full_name).as_deref(),
            Some("Ann Smith")
        );
    }

    #[test]
    fn test_of_kind() {
        let mut payroll = Payroll::new();
        let mut roster = Roster::new();
        roster.insert(payroll.developer("John", "Doe", 60000, "Python"));
        roster.insert(payroll.developer("Ann", "Smith", 70000, "Java"));
        roster.insert(payroll.manager("Joe", "Williams", 100000, None));

        assert_eq!(roster.of_kind(EmployeeKind::Developer).count(), 2);
        assert_eq!(roster.of_kind(EmployeeKind::Manager).count(), 1);
        assert_eq!(roster.of_kind(EmployeeKind::Employee).count(), 3);
    }

    #[test]
    fn test_mutation_through_roster_is_visible() {
        let mut payroll = Payroll::new();
        let mut roster = Roster::new();
        let id = roster.insert(payroll.employee("John", "Doe", 60000));

        roster.get_mut(id).unwrap().set_full_name("Jane Roe").unwrap();
        assert_eq!(roster.get(id).unwrap().email().as_deref(), Some("Jane.Roe@email.com"));

        assert!(roster.remove(id).is_some());
        assert!(roster.is_empty());
        assert_eq!(payroll.headcount(), 1);
    }
}
