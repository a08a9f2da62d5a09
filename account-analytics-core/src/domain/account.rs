//! Account domain model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// Sex of the account holder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub fn is_male(&self) -> bool {
        matches!(self, Sex::Male)
    }
}

/// A person's account record
///
/// Records are plain values built by the caller. Query operations only
/// borrow them, so ids are never checked for uniqueness here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Expected shape is `local@domain`; not validated on construction
    pub email: String,
    pub birthday: NaiveDate,
    pub sex: Sex,
    pub creation_date: NaiveDate,
    /// May be negative, zero or positive
    pub balance: Decimal,
}

impl Account {
    /// Create a new account with required fields
    ///
    /// Dates default to 1970-01-01, the balance to zero and the sex to
    /// `Male`; set them with the `with_*` builders.
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_birthday(mut self, birthday: NaiveDate) -> Self {
        self.birthday = birthday;
        self
    }

    pub fn with_creation_date(mut self, creation_date: NaiveDate) -> Self {
        self.creation_date = creation_date;
        self
    }

    /// Everything after the first `@` of the email, if there is one
    pub fn email_domain(&self) -> Option<&str> {
        self.email.split_once('@').map(|(_, domain)| domain)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Validate account data
    pub fn validate(&self) -> Result<()> {
        if self.first_name.trim().is_empty() {
            return Err(Error::validation("first name cannot be empty"));
        }
        if self.last_name.trim().is_empty() {
            return Err(Error::validation("last name cannot be empty"));
        }
        match self.email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(Error::validation(format!(
                "email '{}' is not of the form local@domain",
                self.email
            ))),
        }
    }
}
