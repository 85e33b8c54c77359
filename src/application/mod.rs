// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`gallery`]: The paginated gallery state machine and the async calls
//!   that feed it
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use reel_play::application::gallery::Gallery;
//! use reel_play::domain::library::AccessStatus;
//!
//! let mut gallery = Gallery::new();
//! if let Some(ticket) = gallery.resolve_access(AccessStatus::Granted) {
//!     // run `ticket.request()` against a MediaLibrary, then:
//!     // gallery.finish_load(ticket, result);
//! }
//! ```

pub mod gallery;
pub mod port;
