// Client-side core for the backoffice
//
// The backend owns all persistence and business rules; this crate holds the
// one reusable pattern every screen is built from:
//
// - a per-screen mirror of one remote collection, reloaded wholesale after
//   every mutation (`cache`),
// - a pure filter engine narrowing the mirror to the visible subset
//   (`filter`),
// - the modal-driven CRUD state machine tying the two together (`modal`,
//   `screens`) and its restricted guest-approval variant (`guests`).
//
// Key design decisions:
// - No optimistic updates: every successful mutation triggers a full reload,
//   so the mirror can never drift from the server.
// - Caches are single-owner; a screen dropped mid-request drops its
//   continuation and a late response is never applied.
// - Remote failures are contained to the triggering action: the modal stays
//   open, the mirror keeps its last good value, the error is logged.

pub mod cache;
pub mod error;
pub mod filter;
pub mod form;
pub mod guests;
pub mod modal;
pub mod remote;
pub mod screens;
pub mod session;
pub mod validate;

// In-memory backend for tests and demos
pub mod memory;

pub use error::{CoreError, Result};
pub use filter::{visible, Filter, NumericRange, TextSearch};
pub use modal::ModalState;
