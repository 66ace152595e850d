use crate::utils::error::Result;
use crate::utils::validation::{validate_raise_amount, Validate};
use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "staff-roster")]
#[command(about = "Build a small staff roster, apply raises and check workdays")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Employee given as `first,last,salary` (repeatable)
    #[arg(long = "record")]
    pub records: Vec<String>,

    /// File of header-less `first,last,salary` lines
    #[arg(long)]
    pub records_file: Option<String>,

    /// Date to check against the workday calendar (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Override the shared raise amount
    #[arg(long)]
    pub raise_amount: Option<f64>,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(amount) = self.raise_amount {
            validate_raise_amount("--raise-amount", amount)?;
        }
        if let Some(path) = &self.records_file {
            crate::utils::validation::validate_non_empty_string("--records-file", path)?;
        }
        Ok(())
    }
}
