//! # Seed Data
//!
//! Initial contents of the collections. The API tests and the load
//! generator both rely on these exact records (user ids 1-2, product
//! ids 1-3).

use devops_core::{Product, User};

/// Seed users as `(name, email)`; ids are assigned from 1 in order.
const USERS: &[(&str, &str)] = &[
    ("John Doe", "john@example.com"),
    ("Jane Smith", "jane@example.com"),
];

/// Seed products as `(name, price, stock)`; ids are assigned from 1 in order.
const PRODUCTS: &[(&str, f64, i64)] = &[
    ("Laptop", 999.99, 10),
    ("Mouse", 29.99, 50),
    ("Keyboard", 79.99, 25),
];

/// Returns the seed users.
pub fn users() -> Vec<User> {
    USERS
        .iter()
        .zip(1u64..)
        .map(|(&(name, email), id)| User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        })
        .collect()
}

/// Returns the seed products.
pub fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .zip(1u64..)
        .map(|(&(name, price, stock), id)| Product {
            id,
            name: name.to_string(),
            price,
            stock,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_users() {
        let users = users();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].name, "John Doe");
        assert_eq!(users[1].email, "jane@example.com");
        assert!(users.iter().all(|u| u.email.contains('@') && u.email.contains('.')));
    }

    #[test]
    fn test_seed_products() {
        let products = products();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name, "Laptop");
        assert_eq!(products[0].price, 999.99);
        assert_eq!(products[0].stock, 10);
        assert_eq!(products[2].id, 3);
        assert!(products.iter().all(|p| p.price >= 0.0));
    }
}
