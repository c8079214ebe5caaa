//! # User Profiles
//!
//! A profile is the behaviour of one simulated user: which requests it makes,
//! how often relative to each other, and how long it pauses between them.
//!
//! ```text
//! ┌──────────────┬───────────────────────────────────────────┬───────────┬──────────┐
//! │ Profile      │ Task weights                              │ Wait (s)  │ On start │
//! ├──────────────┼───────────────────────────────────────────┼───────────┼──────────┤
//! │ website      │ users 3, user 2, products 3, product 2,   │ 1 – 3     │ GET /    │
//! │              │ health 1, +user 1, +product 1, ~product 1 │           │          │
//! │ read-only    │ users 4, user 3, products 4, product 3,   │ 0.5 – 2   │ -        │
//! │              │ health 2, homepage 1                      │           │          │
//! │ write-heavy  │ users 1, products 1, +user 3, +product 3, │ 2 – 5     │ GET /    │
//! │              │ ~product 2, health 1                      │           │          │
//! └──────────────┴───────────────────────────────────────────┴───────────┴──────────┘
//! ```

use std::fmt;
use std::time::Duration;

use clap::ValueEnum;
use rand::Rng;
use reqwest::Method;
use serde_json::{json, Value};

/// Seeded user ids every target starts with.
const USER_IDS: [u64; 2] = [1, 2];

/// Seeded product ids every target starts with.
const PRODUCT_IDS: [u64; 3] = [1, 2, 3];

// =============================================================================
// Tasks
// =============================================================================

/// One kind of request a simulated user can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    Homepage,
    Health,
    ListUsers,
    GetUser,
    CreateUser,
    ListProducts,
    GetProduct,
    CreateProduct,
    UpdateProduct,
}

/// A concrete request ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPlan {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    /// Grouping key for statistics; ids are folded into `{id}`.
    pub label: &'static str,
}

impl Task {
    /// Statistics label.
    pub const fn label(self) -> &'static str {
        match self {
            Task::Homepage => "GET /",
            Task::Health => "GET /health",
            Task::ListUsers => "GET /api/users/",
            Task::GetUser => "GET /api/users/{id}",
            Task::CreateUser => "POST /api/users/",
            Task::ListProducts => "GET /api/products/",
            Task::GetProduct => "GET /api/products/{id}",
            Task::CreateProduct => "POST /api/products/",
            Task::UpdateProduct => "PUT /api/products/{id}",
        }
    }

    /// Builds the request, drawing ids and payload values from `rng`.
    ///
    /// `prefix` is the capitalised word used in generated names
    /// (`"Test"` gives `"Test User 1234"` and `"test5678@example.com"`).
    pub fn plan<R: Rng + ?Sized>(self, rng: &mut R, prefix: &str) -> RequestPlan {
        let (method, path, body) = match self {
            Task::Homepage => (Method::GET, "/".to_string(), None),
            Task::Health => (Method::GET, "/health".to_string(), None),
            Task::ListUsers => (Method::GET, "/api/users/".to_string(), None),
            Task::GetUser => {
                let id = pick(rng, &USER_IDS);
                (Method::GET, format!("/api/users/{id}"), None)
            }
            Task::CreateUser => (
                Method::POST,
                "/api/users/".to_string(),
                Some(user_payload(rng, prefix)),
            ),
            Task::ListProducts => (Method::GET, "/api/products/".to_string(), None),
            Task::GetProduct => {
                let id = pick(rng, &PRODUCT_IDS);
                (Method::GET, format!("/api/products/{id}"), None)
            }
            Task::CreateProduct => (
                Method::POST,
                "/api/products/".to_string(),
                Some(product_payload(rng, prefix)),
            ),
            Task::UpdateProduct => {
                let id = pick(rng, &PRODUCT_IDS);
                (
                    Method::PUT,
                    format!("/api/products/{id}"),
                    Some(json!({ "price": price(rng), "stock": stock(rng) })),
                )
            }
        };

        RequestPlan {
            method,
            path,
            body,
            label: self.label(),
        }
    }
}

// =============================================================================
// Profiles
// =============================================================================

/// Simulated user behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    /// Mixed browsing with occasional writes
    Website,
    /// Reads only
    ReadOnly,
    /// Mostly creates and updates
    WriteHeavy,
}

impl Profile {
    /// Weighted task table.
    pub const fn tasks(self) -> &'static [(Task, u32)] {
        match self {
            Profile::Website => &[
                (Task::ListUsers, 3),
                (Task::GetUser, 2),
                (Task::ListProducts, 3),
                (Task::GetProduct, 2),
                (Task::Health, 1),
                (Task::CreateUser, 1),
                (Task::CreateProduct, 1),
                (Task::UpdateProduct, 1),
            ],
            Profile::ReadOnly => &[
                (Task::ListUsers, 4),
                (Task::GetUser, 3),
                (Task::ListProducts, 4),
                (Task::GetProduct, 3),
                (Task::Health, 2),
                (Task::Homepage, 1),
            ],
            Profile::WriteHeavy => &[
                (Task::ListUsers, 1),
                (Task::ListProducts, 1),
                (Task::CreateUser, 3),
                (Task::CreateProduct, 3),
                (Task::UpdateProduct, 2),
                (Task::Health, 1),
            ],
        }
    }

    /// Think time bounds between two tasks, inclusive.
    pub const fn wait_bounds(self) -> (Duration, Duration) {
        match self {
            Profile::Website => (Duration::from_secs(1), Duration::from_secs(3)),
            Profile::ReadOnly => (Duration::from_millis(500), Duration::from_secs(2)),
            Profile::WriteHeavy => (Duration::from_secs(2), Duration::from_secs(5)),
        }
    }

    /// Request made once when a simulated user starts.
    pub const fn on_start(self) -> Option<Task> {
        match self {
            Profile::Website | Profile::WriteHeavy => Some(Task::Homepage),
            Profile::ReadOnly => None,
        }
    }

    /// Word used in generated user and product names.
    pub const fn name_prefix(self) -> &'static str {
        match self {
            Profile::WriteHeavy => "Write",
            Profile::Website | Profile::ReadOnly => "Test",
        }
    }

    /// Picks the next task according to the weights.
    pub fn next_task<R: Rng + ?Sized>(self, rng: &mut R) -> Task {
        weighted_choice(self.tasks(), rng)
    }

    /// Draws a think time within [`Profile::wait_bounds`].
    pub fn think_time<R: Rng + ?Sized>(self, rng: &mut R) -> Duration {
        let (min, max) = self.wait_bounds();
        let millis = rng.random_range(min.as_millis() as u64..=max.as_millis() as u64);
        Duration::from_millis(millis)
    }

    /// CLI spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Profile::Website => "website",
            Profile::ReadOnly => "read-only",
            Profile::WriteHeavy => "write-heavy",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Picks an entry with probability proportional to its weight.
///
/// Tables are non-empty with a positive total weight.
fn weighted_choice<R: Rng + ?Sized>(table: &[(Task, u32)], rng: &mut R) -> Task {
    let total: u32 = table.iter().map(|(_, weight)| weight).sum();
    let mut roll = rng.random_range(0..total);

    for &(task, weight) in table {
        if roll < weight {
            return task;
        }
        roll -= weight;
    }

    table[table.len() - 1].0
}

fn pick<R: Rng + ?Sized>(rng: &mut R, ids: &[u64]) -> u64 {
    ids[rng.random_range(0..ids.len())]
}

fn tag<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(1000..=9999)
}

/// Price in [10, 100] rounded to cents.
fn price<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let raw: f64 = rng.random_range(10.0..=100.0);
    (raw * 100.0).round() / 100.0
}

fn stock<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.random_range(1..=100)
}

fn user_payload<R: Rng + ?Sized>(rng: &mut R, prefix: &str) -> Value {
    json!({
        "name": format!("{prefix} User {}", tag(rng)),
        "email": format!("{}{}@example.com", prefix.to_lowercase(), tag(rng)),
    })
}

fn product_payload<R: Rng + ?Sized>(rng: &mut R, prefix: &str) -> Value {
    json!({
        "name": format!("{prefix} Product {}", tag(rng)),
        "price": price(rng),
        "stock": stock(rng),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_weights_follow_table() {
        let mut rng = rng();
        let mut counts: HashMap<Task, u32> = HashMap::new();
        for _ in 0..16_000 {
            *counts.entry(Profile::Website.next_task(&mut rng)).or_default() += 1;
        }

        // Website weights total 14; ListUsers has 3/14, Health 1/14.
        let list_users = counts[&Task::ListUsers] as f64 / 16_000.0;
        let health = counts[&Task::Health] as f64 / 16_000.0;
        assert!((list_users - 3.0 / 14.0).abs() < 0.02, "{list_users}");
        assert!((health - 1.0 / 14.0).abs() < 0.02, "{health}");
        assert!(!counts.contains_key(&Task::Homepage));
    }

    #[test]
    fn test_read_only_never_writes() {
        let mut rng = rng();
        for _ in 0..2_000 {
            let plan = Profile::ReadOnly.next_task(&mut rng).plan(&mut rng, "Test");
            assert_eq!(plan.method, Method::GET);
            assert!(plan.body.is_none());
        }
    }

    #[test]
    fn test_on_start() {
        assert_eq!(Profile::Website.on_start(), Some(Task::Homepage));
        assert_eq!(Profile::WriteHeavy.on_start(), Some(Task::Homepage));
        assert_eq!(Profile::ReadOnly.on_start(), None);
    }

    #[test]
    fn test_think_time_within_bounds() {
        let mut rng = rng();
        for profile in [Profile::Website, Profile::ReadOnly, Profile::WriteHeavy] {
            let (min, max) = profile.wait_bounds();
            for _ in 0..500 {
                let wait = profile.think_time(&mut rng);
                assert!(wait >= min && wait <= max, "{profile}: {wait:?}");
            }
        }
    }

    #[test]
    fn test_user_payload_shape() {
        let mut rng = rng();
        let plan = Task::CreateUser.plan(&mut rng, "Write");
        let body = plan.body.unwrap();

        let name = body["name"].as_str().unwrap();
        let email = body["email"].as_str().unwrap();
        assert!(name.starts_with("Write User "));
        let tag: u32 = name["Write User ".len()..].parse().unwrap();
        assert!((1000..=9999).contains(&tag));
        assert!(email.starts_with("write") && email.ends_with("@example.com"));
        assert_eq!(plan.path, "/api/users/");
    }

    #[test]
    fn test_product_payload_ranges() {
        let mut rng = rng();
        for _ in 0..500 {
            let body = Task::CreateProduct.plan(&mut rng, "Test").body.unwrap();
            let price = body["price"].as_f64().unwrap();
            let stock = body["stock"].as_i64().unwrap();

            assert!((10.0..=100.0).contains(&price));
            assert_eq!((price * 100.0).round() / 100.0, price);
            assert!((1..=100).contains(&stock));
        }
    }

    #[test]
    fn test_ids_come_from_seeded_rows() {
        let mut rng = rng();
        for _ in 0..200 {
            let user = Task::GetUser.plan(&mut rng, "Test");
            assert!(["/api/users/1", "/api/users/2"].contains(&user.path.as_str()));

            let update = Task::UpdateProduct.plan(&mut rng, "Test");
            assert_eq!(update.method, Method::PUT);
            assert_eq!(update.label, "PUT /api/products/{id}");
            let id: u64 = update.path.rsplit('/').next().unwrap().parse().unwrap();
            assert!(PRODUCT_IDS.contains(&id));
        }
    }

    #[test]
    fn test_cli_names() {
        assert_eq!(Profile::from_str("read-only", false), Ok(Profile::ReadOnly));
        assert_eq!(Profile::from_str("write-heavy", false), Ok(Profile::WriteHeavy));
        assert_eq!(Profile::Website.to_string(), "website");
    }
}
