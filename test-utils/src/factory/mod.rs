//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let academic = factory::academic::create_academic(&db).await?;
//!     let petition = factory::petition::create_petition(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Using builder pattern for customization
//! let academic = factory::academic::AcademicFactory::new(&db)
//!     .name("Software Engineering")
//!     .build()
//!     .await?;
//!
//! // Using convenience functions with custom values
//! let subject = factory::subject::create_subject_with_name(&db, "Calculus").await?;
//! ```
//!
//! # Available Factories
//!
//! - `academic` - Create academic entities
//! - `petition` - Create petition entities
//! - `request` - Create request entities
//! - `subject` - Create subject entities

pub mod academic;
pub mod helpers;
pub mod petition;
pub mod request;
pub mod subject;

// Re-export commonly used factory functions for concise usage
pub use academic::{create_academic, create_academics};
pub use petition::{create_petition, create_petitions};
pub use request::{create_request, create_requests};
pub use subject::{create_subject, create_subjects};
