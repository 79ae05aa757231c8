// Per-resource screen controllers
//
// A screen composes the three pieces of the pattern: a resource cache, a
// filter query, and a modal state machine. The rendering layer (CLI,
// browser, tests) reads `visible()` and the modal, and drives transitions
// through the methods here.

mod category;
mod event;
mod user;

pub use category::CategoryScreen;
pub use event::EventScreen;
pub use user::UserScreen;

use async_trait::async_trait;
use backoffice_contracts::{Event, User};

use crate::error::Result;

/// Single-item user lookup, used by the events screen to warn about
/// assigned users before a delete and to populate the detail view.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn user(&self, user_id: i64) -> Result<User>;
}

/// Single-item event lookup, the counterpart for the users screen.
#[async_trait]
pub trait EventDirectory: Send + Sync {
    async fn event(&self, event_id: i64) -> Result<Event>;
}
