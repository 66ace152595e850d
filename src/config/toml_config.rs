use crate::core::payroll::DEFAULT_RAISE_AMOUNT;
use crate::domain::{EmployeeKind, DEFAULT_EMAIL_DOMAIN};
use crate::utils::error::{RosterError, Result};
use crate::utils::validation::{validate_email_domain, validate_raise_amount, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub payroll: PayrollConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayrollConfig {
    pub raise_amount: Option<f64>,
    pub email_domain: Option<String>,
    pub kind_raise: Option<KindRaiseConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KindRaiseConfig {
    pub employee: Option<f64>,
    pub developer: Option<f64>,
    pub manager: Option<f64>,
}

impl RosterConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RosterError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${EMAIL_DOMAIN})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RosterError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn raise_amount(&self) -> f64 {
        self.payroll.raise_amount.unwrap_or(DEFAULT_RAISE_AMOUNT)
    }

    pub fn email_domain(&self) -> &str {
        self.payroll
            .email_domain
            .as_deref()
            .unwrap_or(DEFAULT_EMAIL_DOMAIN)
    }

    /// Per-kind overrides that are actually set.
    pub fn kind_raise_amounts(&self) -> Vec<(EmployeeKind, f64)> {
        let Some(kinds) = &self.payroll.kind_raise else {
            return Vec::new();
        };
        [
            (EmployeeKind::Employee, kinds.employee),
            (EmployeeKind::Developer, kinds.developer),
            (EmployeeKind::Manager, kinds.manager),
        ]
        .into_iter()
        .filter_map(|(kind, amount)| amount.map(|a| (kind, a)))
        .collect()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        check_raise("payroll.raise_amount", self.raise_amount())?;
        validate_email_domain("payroll.email_domain", self.email_domain())?;

        for (kind, amount) in self.kind_raise_amounts() {
            check_raise(
                &format!("payroll.kind_raise.{}", kind.name().to_lowercase()),
                amount,
            )?;
        }

        Ok(())
    }
}

fn check_raise(field: &str, amount: f64) -> Result<()> {
    validate_raise_amount(field, amount).map_err(|e| match e {
        RosterError::InvalidArgument {
            field,
            value,
            reason,
        } => RosterError::InvalidConfigValueError {
            field,
            value,
            reason,
        },
        other => other,
    })
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
