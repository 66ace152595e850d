use anyhow::Context;
use clap::Parser;
use staff_roster::utils::{logger, validation::Validate};
use staff_roster::{
    CliConfig, Employee, Payroll, Roster, RosterConfig, RosterError, StaffRecord,
    StaffRecordMut,
};
use std::io::Write;

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting staff-roster");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        match e.downcast_ref::<RosterError>() {
            Some(roster_error) => {
                tracing::error!("❌ {}", roster_error);
                eprintln!("❌ {}", roster_error.user_friendly_message());
                eprintln!("💡 {}", roster_error.recovery_suggestion());
            }
            None => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {:#}", e);
            }
        }
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    config.validate()?;

    let roster_config = match &config.config {
        Some(path) => RosterConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None => RosterConfig::default(),
    };
    let mut payroll = Payroll::from_config(&roster_config)?;
    if let Some(amount) = config.raise_amount {
        payroll.set_raise_amount(amount)?;
    }

    let mut roster = Roster::new();
    let dev_1 = payroll.developer("John", "Doe", 60000, "Python");
    let dev_2 = payroll.developer("Ann", "Smith", 70000, "Java");
    let mut mgr_1 = payroll.manager("Joe", "Williams", 100000, Some(vec![dev_1.id()]));
    mgr_1.add_employee(&dev_2);

    for text in &config.records {
        let employee = payroll.from_delimited_string(text)?;
        roster.insert(employee);
    }
    if let Some(path) = &config.records_file {
        let file = std::fs::File::open(path).map_err(RosterError::IoError)?;
        for employee in payroll.import_records(file)? {
            roster.insert(employee);
        }
    }
    roster.insert(dev_1);
    roster.insert(dev_2);
    let mgr_id = roster.insert(mgr_1);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Headcount: {}", payroll.headcount())?;
    writeln!(out, "Shared raise amount: {}", payroll.raise_amount())?;
    for member in roster.iter() {
        writeln!(
            out,
            "{} <{}>",
            member,
            member.email().unwrap_or_default()
        )?;
        writeln!(out, "  {}", member.snapshot()?)?;
    }

    let ids: Vec<_> = roster.iter().map(StaffRecord::id).collect();
    for id in ids {
        if let Some(member) = roster.get_mut(id) {
            member.apply_raise(&payroll);
        }
    }
    writeln!(out, "After raises:")?;
    for member in roster.iter() {
        writeln!(out, "  {}", member)?;
    }

    if let Some(manager) = roster.get(mgr_id).and_then(|m| m.as_manager()) {
        writeln!(out, "{} manages:", manager)?;
        manager.print_employees(&roster, &mut out)?;
    }

    if let Some(date) = config.date {
        let answer = if Employee::is_workday(&date) {
            "a workday"
        } else {
            "not a workday"
        };
        writeln!(out, "{} is {}", date, answer)?;
    }

    Ok(())
}
