//! The `Customer` sample entity.
//!
//! A minimal immutable record used to show `map`/`flat_map` over nested
//! collections. Two customers are equal when both name and addresses match;
//! ordering is by name first.

use crate::error::SeqError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// A named customer with an ordered list of addresses.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    addresses: Vec<String>,
}

impl Customer {
    /// Create a customer from a name and its addresses.
    pub fn new<S: Into<String>>(name: impl Into<String>, addresses: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            addresses: addresses.into_iter().map(Into::into).collect(),
        }
    }

    /// Start building a customer field by field.
    pub fn builder() -> CustomerBuilder {
        CustomerBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }
}

impl PartialOrd for Customer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic by name; addresses only break ties between equal names.
impl Ord for Customer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.addresses.cmp(&other.addresses))
    }
}

impl Display for Customer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.name, self.addresses)
    }
}

/// Field-by-field construction of a [`Customer`].
///
/// Both the name and the address list must be provided; an explicitly empty
/// address list counts as provided.
#[derive(Clone, Debug, Default)]
pub struct CustomerBuilder {
    name: Option<String>,
    addresses: Option<Vec<String>>,
}

impl CustomerBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append one address.
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.addresses.get_or_insert_with(Vec::new).push(address.into());
        self
    }

    /// Set the whole address list.
    #[must_use]
    pub fn addresses<S: Into<String>>(mut self, addresses: impl IntoIterator<Item = S>) -> Self {
        self.addresses = Some(addresses.into_iter().map(Into::into).collect());
        self
    }

    /// Finish the customer.
    ///
    /// # Errors
    /// Returns [`SeqError::InvalidArgument`] when the name or the addresses were
    /// never set.
    pub fn build(self) -> Result<Customer> {
        let name = self
            .name
            .ok_or_else(|| SeqError::invalid_argument("name", "customer name is required"))?;
        let addresses = self
            .addresses
            .ok_or_else(|| SeqError::invalid_argument("addresses", "customer addresses are required"))?;
        Ok(Customer { name, addresses })
    }
}
