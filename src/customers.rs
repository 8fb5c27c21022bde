//! Customers

/// Contact details entered at checkout.
///
/// An empty string means the field was not filled in; only the name is
/// required before an order can be confirmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    /// Full name, required for checkout confirmation
    pub name: String,

    /// Delivery address, optional free text
    pub address: String,
}

impl Customer {
    /// Whether the required name field has been filled in.
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}
