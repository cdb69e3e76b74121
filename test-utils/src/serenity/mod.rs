//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating what
//! Discord's API would return inside an interaction payload.
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Create Serenity Member objects with roles and permissions

pub mod member;

pub use member::create_test_member;
