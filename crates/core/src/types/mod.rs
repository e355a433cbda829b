//! Core types for Mercadito.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod rating;
pub mod username;

pub use id::*;
pub use price::{Price, PriceError};
pub use rating::{Rating, RatingError};
pub use username::{Username, UsernameError};
