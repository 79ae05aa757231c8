// Guest approval screen
//
// A restricted two-action variant of the CRUD screens: guests (users
// pending approval) can only be accepted or declined. Accept fires
// immediately; decline goes through a confirmation step first. No edit or
// view states exist.

use async_trait::async_trait;
use backoffice_contracts::Guest;

use crate::error::{CoreError, Result};
use crate::filter::{visible, GuestQuery};

/// Remote operations for the guest workflow.
#[async_trait]
pub trait GuestApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Guest>>;
    async fn accept(&self, user_id: i64) -> Result<()>;
    async fn decline(&self, user_id: i64) -> Result<()>;
}

/// Modal state for the guests screen. `ConfirmingDecline` is the same
/// shape as the CRUD screens' `ConfirmingDelete`; approval needs no
/// confirmation.
#[derive(Debug, Clone, PartialEq)]
pub enum GuestModal {
    Closed,
    ConfirmingDecline { guest: Guest },
}

/// List + accept/decline orchestration over the guest view of users.
pub struct GuestScreen<A: GuestApi> {
    api: A,
    guests: Vec<Guest>,
    pub query: GuestQuery,
    modal: GuestModal,
}

impl<A: GuestApi> GuestScreen<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            guests: Vec::new(),
            query: GuestQuery::default(),
            modal: GuestModal::Closed,
        }
    }

    /// Reload the pending-guest list; stale list kept on failure.
    pub async fn refresh(&mut self) -> Result<()> {
        self.guests = self.api.list().await?;
        Ok(())
    }

    pub fn all(&self) -> &[Guest] {
        &self.guests
    }

    pub fn visible(&self) -> Vec<Guest> {
        visible(&self.guests, &self.query)
    }

    pub fn modal(&self) -> &GuestModal {
        &self.modal
    }

    /// Approve a guest and reload. No confirmation step.
    pub async fn accept(&mut self, guest: &Guest) -> Result<()> {
        match self.api.accept(guest.user_id).await {
            Ok(()) => self.refresh().await,
            Err(err) => {
                tracing::warn!(error = %err, user_id = guest.user_id, "guest accept failed");
                Err(err)
            }
        }
    }

    /// "Decline" action: ask for confirmation first. No mutation yet.
    pub fn request_decline(&mut self, guest: Guest) {
        if matches!(self.modal, GuestModal::Closed) {
            self.modal = GuestModal::ConfirmingDecline { guest };
        }
    }

    /// Confirm the pending decline, then reload. Closes only on success.
    pub async fn confirm_decline(&mut self) -> Result<()> {
        let GuestModal::ConfirmingDecline { guest } = &self.modal else {
            return Err(CoreError::validation("no decline pending"));
        };
        let user_id = guest.user_id;
        match self.api.decline(user_id).await {
            Ok(()) => {
                self.modal = GuestModal::Closed;
                self.refresh().await
            }
            Err(err) => {
                tracing::warn!(error = %err, user_id, "guest decline failed");
                Err(err)
            }
        }
    }

    /// Cancel the pending decline; no mutation is performed.
    pub fn cancel(&mut self) {
        self.modal = GuestModal::Closed;
    }
}
