//! # Customer Roster
//!
//! An insertion-ordered list of [`Customer`]s.
//!
//! Ids are lookup keys but are not required to be unique: removal drops every
//! customer sharing the id, while a name update touches only the first match.

use crate::model::{Customer, CustomerId};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct CustomerRoster {
    customers: Vec<Customer>,
}

impl CustomerRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `customer` without checking for an existing id.
    pub fn add(&mut self, customer: Customer) {
        debug!(customer_id = %customer.id, "Added customer");
        self.customers.push(customer);
    }

    /// Every customer, in the order they were added.
    pub fn find_all(&self) -> &[Customer] {
        &self.customers
    }

    /// Removes all customers with `id`. Returns whether any were removed.
    pub fn remove_by_id(&mut self, id: CustomerId) -> bool {
        let before = self.customers.len();
        self.customers.retain(|customer| customer.id != id);
        let removed = before - self.customers.len();
        debug!(customer_id = %id, removed, "Removed customers");
        removed > 0
    }

    /// Case-insensitive substring search on the name, in roster order.
    pub fn find_by_name_substring(&self, text: &str) -> Vec<&Customer> {
        let needle = text.to_lowercase();
        self.customers
            .iter()
            .filter(|customer| customer.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Renames the first customer with `id`; later matches are left alone.
    pub fn update_name_by_id(&mut self, id: CustomerId, new_name: impl Into<String>) -> bool {
        match self.customers.iter_mut().find(|customer| customer.id == id) {
            Some(customer) => {
                customer.name = new_name.into();
                debug!(customer_id = %id, "Renamed customer");
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: CustomerId) -> bool {
        self.customers.iter().any(|customer| customer.id == id)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl FromIterator<Customer> for CustomerRoster {
    fn from_iter<I: IntoIterator<Item = Customer>>(iter: I) -> Self {
        Self {
            customers: iter.into_iter().collect(),
        }
    }
}

impl Extend<Customer> for CustomerRoster {
    fn extend<I: IntoIterator<Item = Customer>>(&mut self, iter: I) {
        for customer in iter {
            self.add(customer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> CustomerRoster {
        [
            Customer::new(1, "Asha Rao"),
            Customer::new(2, "Ravi"),
            Customer::new(1, "Asha Duplicate"),
            Customer::new(3, "RAVINDRA"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn remove_drops_every_customer_with_the_id() {
        let mut roster = roster();
        assert!(roster.remove_by_id(CustomerId(1)));
        let ids: Vec<i32> = roster.find_all().iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(!roster.remove_by_id(CustomerId(1)));
    }

    #[test]
    fn update_touches_first_match_only() {
        let mut roster = roster();
        assert!(roster.update_name_by_id(CustomerId(1), "Asha R."));
        assert_eq!(roster.find_all()[0].name, "Asha R.");
        assert_eq!(roster.find_all()[2].name, "Asha Duplicate");
        assert!(!roster.update_name_by_id(CustomerId(9), "Nobody"));
    }

    #[test]
    fn name_search_ignores_case_and_keeps_order() {
        let roster = roster();
        let found: Vec<&str> = roster
            .find_by_name_substring("ravi")
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(found, vec!["Ravi", "RAVINDRA"]);
        assert!(roster.find_by_name_substring("zz").is_empty());
    }
}
