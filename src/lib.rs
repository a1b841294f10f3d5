//! # User Factory
//!
//! > **Validated construction of [`User`](domain::User) values.**
//!
//! A username is accepted when it is at least
//! [`MIN_USERNAME_LENGTH`](user_factory::MIN_USERNAME_LENGTH) characters long.
//! [`UserFactory::create`](user_factory::UserFactory::create) runs that check and
//! either hands back a [`User`](domain::User) or a
//! [`UserError::ValidationError`](user_factory::UserError::ValidationError).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`domain`])
//! - **Role**: The immutable [`User`](domain::User) value and its creation payload.
//!
//! ### 2. The Rules ([`user_factory`])
//! - **Role**: The length predicate and the factory that enforces it.
//! - **Key items**: [`UsernameValidator`](user_factory::UsernameValidator),
//!   [`UserFactory`](user_factory::UserFactory), [`UserError`](user_factory::UserError).
//!
//! ### 3. Settings ([`config`])
//! - **Role**: Serde-friendly policy settings such as the minimum username length.
//!
//! ### 4. Observability ([`telemetry`])
//! - **Role**: `tracing` subscriber setup for binaries.
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use user_factory::user_factory::{UserError, UserFactory};
//!
//! let factory = UserFactory::default();
//!
//! let alice = factory.create("alice").unwrap();
//! assert_eq!(alice.username(), "alice");
//!
//! let err = factory.create("ab").unwrap_err();
//! assert_eq!(err, UserError::ValidationError("Username too short".to_string()));
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! ```

pub mod config;
pub mod domain;
pub mod telemetry;
pub mod user_factory;
