use crate::domain::employee::Employee;
use crate::domain::ports::{StaffRecord, StaffRecordMut};
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct Developer {
    #[serde(flatten)]
    base: Employee,
    language: String,
}

impl Developer {
    pub(crate) fn new(base: Employee, language: impl Into<String>) -> Self {
        Self {
            base,
            language: language.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn snapshot(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl PartialEq for Developer {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl Eq for Developer {}

impl fmt::Display for Developer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

impl StaffRecord for Developer {
    fn base(&self) -> &Employee {
        &self.base
    }
}

impl StaffRecordMut for Developer {
    fn base_mut(&mut self) -> &mut Employee {
        &mut self.base
    }
}
