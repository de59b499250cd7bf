//! Roster Core
//!
//! Platform-agnostic user directory types and the read-only query service
//! used by the Roster server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `UserId`
//! - **Directory Store**: an immutable, pre-seeded collection of users
//! - **Query Service**: listing, lookup by id, search by email or role
//! - **Error Handling**: `DirectoryError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use roster_core::{DirectoryQueryService, DirectoryStore, UserDirectory, UserId};
//!
//! let service = DirectoryQueryService::new(DirectoryStore::seeded());
//!
//! let ana = service.get_by_id(UserId::new(1)).unwrap();
//! assert_eq!(ana.name, "Ana Silva");
//!
//! let testers = service.find_by_role("TESTER");
//! assert_eq!(testers.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod directory;
pub mod error;
pub mod query;
pub mod types;

pub use directory::DirectoryStore;
pub use error::{DirectoryError, Result};
pub use query::{DirectoryQueryService, UserDirectory};
pub use types::{User, UserId};
