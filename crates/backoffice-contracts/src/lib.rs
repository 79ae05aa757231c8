// Wire contracts for the backoffice API
// Canonical schema is snake_case; every screen maps its form state through
// the payload types here so form shape and wire shape cannot drift apart.

pub mod category;
pub mod event;
pub mod user;

pub use category::*;
pub use event::*;
pub use user::*;
