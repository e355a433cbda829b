//! Business services layered over the repositories.

pub mod auth;
pub mod cart;

pub use auth::{AuthError, AuthService};
pub use cart::{CartError, CartReceipt, CartService};
