//! Customer domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use backoffice_core::{CustomerId, CustomerSegment, Email};

use super::{Record, ValidationError, required};

/// A customer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique customer ID.
    pub id: CustomerId,
    /// Company or person name.
    pub name: String,
    /// Contact email.
    pub email: Email,
    /// Classification tier.
    pub segment: CustomerSegment,
    /// Creation date.
    pub created_at: NaiveDate,
}

impl Customer {
    /// Shallow-merge the fields present in `patch`.
    pub fn apply(&mut self, patch: CustomerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(segment) = patch.segment {
            self.segment = segment;
        }
    }
}

impl Record for Customer {
    type Id = CustomerId;
    const KIND: &'static str = "Customer";

    fn id(&self) -> &CustomerId {
        &self.id
    }
}

/// Input for creating a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCustomer {
    pub name: String,
    pub email: Email,
    pub segment: CustomerSegment,
}

impl CreateCustomer {
    /// Build a create request from raw form input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name is blank or the email lacks an `@`.
    pub fn parse(
        name: &str,
        email: &str,
        segment: CustomerSegment,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required(name, "name")?,
            email: Email::parse(email)?,
            segment,
        })
    }
}

/// Partial update for a customer; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<Email>,
    pub segment: Option<CustomerSegment>,
}

impl CustomerPatch {
    /// Build a patch from raw form input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a present name is blank or a present
    /// email lacks an `@`.
    pub fn parse(
        name: Option<&str>,
        email: Option<&str>,
        segment: Option<CustomerSegment>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: name.map(|n| required(n, "name")).transpose()?,
            email: email.map(Email::parse).transpose()?,
            segment,
        })
    }
}
