use chrono::{Datelike, NaiveDate, Weekday};
use staff_roster::{Employee, EmployeeKind, Payroll, RosterError, StaffRecord, StaffRecordMut};

#[test]
fn test_headcount_across_kinds() {
    let mut payroll = Payroll::new();
    payroll.employee("Seed", "Person", 1);
    let before = payroll.headcount();

    payroll.employee("John", "Doe", 60000);
    payroll.developer("Ann", "Smith", 70000, "Java");
    payroll.manager("Joe", "Williams", 100000, None);
    payroll.from_delimited_string("Mary,Ross,86000").unwrap();
    payroll
        .developer_from_delimited_string("Lee,Park,65000,Rust")
        .unwrap();

    assert_eq!(payroll.headcount(), before + 5);
}

#[test]
fn test_apply_raise_compounds_with_truncation() {
    let mut payroll = Payroll::new();
    let mut emp = payroll.employee("Ann", "Smith", 70001);

    emp.apply_raise(&payroll);
    let once = (70001.0_f64 * 1.07).trunc() as i64;
    assert_eq!(emp.salary(), once);

    emp.apply_raise(&payroll);
    assert_eq!(emp.salary(), (once as f64 * 1.07).trunc() as i64);
}

#[test]
fn test_developer_inherits_raise() {
    let mut payroll = Payroll::new();
    let mut dev = payroll.developer("John", "Doe", 60000, "Python");
    dev.apply_raise(&payroll);
    assert_eq!(dev.salary(), 64200);
    assert_eq!(dev.email().as_deref(), Some("John.Doe@email.com"));
    assert_eq!(dev.language(), "Python");
}

#[test]
fn test_email_follows_full_name() {
    let mut payroll = Payroll::new();
    let mut emp = payroll.employee("John", "Doe", 60000);
    emp.set_full_name("Jane Roe").unwrap();

    assert_eq!(emp.full_name().as_deref(), Some("Jane Roe"));
    assert_eq!(emp.first_name(), Some("Jane"));
    assert_eq!(emp.last_name(), Some("Roe"));
    assert_eq!(emp.email().as_deref(), Some("Jane.Roe@email.com"));
}

#[test]
fn test_full_name_requires_exactly_two_tokens() {
    let mut payroll = Payroll::new();
    let mut dev = payroll.developer("John", "Doe", 60000, "Python");

    assert!(matches!(
        dev.set_full_name("Madonna"),
        Err(RosterError::InvalidArgument { .. })
    ));
    assert!(matches!(
        dev.set_full_name("Jean Luc Picard"),
        Err(RosterError::InvalidArgument { .. })
    ));
    assert_eq!(dev.full_name().as_deref(), Some("John Doe"));
}

#[test]
fn test_clear_full_name() {
    let mut payroll = Payroll::new();
    let mut dev = payroll.developer("John", "Doe", 60000, "Python");
    dev.clear_full_name();
    assert_eq!(dev.full_name(), None);
    assert_eq!(dev.base().first_name(), None);
}

#[test]
fn test_from_delimited_string() {
    let mut payroll = Payroll::new();
    let emp = payroll.from_delimited_string("Mary,Ross,86000").unwrap();
    assert_eq!(emp.first_name(), Some("Mary"));
    assert_eq!(emp.last_name(), Some("Ross"));
    assert_eq!(emp.salary(), 86000);
    assert_eq!(emp.kind(), EmployeeKind::Employee);

    for bad in ["Mary,Ross", "Mary,Ross,86000,1", "Mary,Ross,86k", ""] {
        assert!(
            matches!(
                payroll.from_delimited_string(bad),
                Err(RosterError::InvalidArgument { .. })
            ),
            "{bad:?}"
        );
    }
}

#[test]
fn test_shared_raise_change_respects_local_override() {
    let mut payroll = Payroll::new();
    let mut shared = payroll.employee("John", "Doe", 60000);
    let mut local = payroll.employee("Ann", "Smith", 60000);
    local.set_raise_amount(1.09).unwrap();

    payroll.set_raise_amount(1.02).unwrap();
    shared.apply_raise(&payroll);
    local.apply_raise(&payroll);

    assert_eq!(shared.salary(), 61200);
    assert_eq!(local.salary(), 65400);
    assert_eq!(local.effective_raise_amount(&payroll), 1.09);
}

#[test]
fn test_shared_raise_change_reaches_specialisations() {
    let mut payroll = Payroll::new();
    let mut dev = payroll.developer("John", "Doe", 50000, "Python");
    let mut mgr = payroll.manager("Joe", "Williams", 100000, None);

    payroll.set_raise_amount(1.02).unwrap();
    dev.apply_raise(&payroll);
    mgr.apply_raise(&payroll);

    assert_eq!(dev.salary(), 51000);
    assert_eq!(mgr.salary(), 102000);
}

#[test]
fn test_is_workday_covers_both_weekend_days() {
    let start = NaiveDate::from_ymd_opt(2023, 1, 23).unwrap();
    for day in start.iter_days().take(14) {
        let weekend = matches!(day.weekday(), Weekday::Sat | Weekday::Sun);
        assert_eq!(Employee::is_workday(&day), !weekend, "{day}");
    }

    let sunday = NaiveDate::from_ymd_opt(2023, 1, 29).unwrap();
    assert!(!staff_roster::is_workday(&sunday));
}

#[test]
fn test_display_shows_kind() {
    let mut payroll = Payroll::new();
    let emp = payroll.employee("John", "Doe", 60000);
    let dev = payroll.developer("Ann", "Smith", 70000, "Java");
    assert_eq!(emp.to_string(), "Employee (John Doe, 60000)");
    assert_eq!(dev.to_string(), "Developer (Ann Smith, 70000)");
}
