//! # Blog Core
//!
//! The domain layer of the blog backend.
//! This crate contains entities, ports and services with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
