// Events screen

use backoffice_contracts::{Event, EventPayload, User};

use crate::cache::{ResourceApi, ResourceCache};
use crate::error::{CoreError, Result};
use crate::filter::{visible, EventQuery};
use crate::form::EventForm;
use crate::modal::ModalState;
use crate::screens::UserDirectory;

/// List + CRUD orchestration for events.
///
/// Delete and view first resolve the event's assigned users so the operator
/// sees who is affected. The backend has no batch lookup, so this is the
/// documented one-request-per-id fan-out, bounded by the id list of the one
/// entity in question.
pub struct EventScreen<A>
where
    A: ResourceApi<Event, Payload = EventPayload> + UserDirectory,
{
    cache: ResourceCache<Event, A>,
    pub query: EventQuery,
    modal: ModalState<Event, EventForm>,
    /// Users assigned to the entity in `ConfirmingDelete`/`Viewing`;
    /// cleared when the modal closes.
    related_users: Vec<User>,
}

impl<A> EventScreen<A>
where
    A: ResourceApi<Event, Payload = EventPayload> + UserDirectory,
{
    pub fn new(api: A) -> Self {
        Self {
            cache: ResourceCache::new(api),
            query: EventQuery::default(),
            modal: ModalState::Closed,
            related_users: Vec::new(),
        }
    }

    pub async fn refresh(&mut self) -> Result<()> {
        self.cache.load().await?;
        Ok(())
    }

    pub fn all(&self) -> &[Event] {
        self.cache.items()
    }

    pub fn visible(&self) -> Vec<Event> {
        visible(self.cache.items(), &self.query)
    }

    pub fn modal(&self) -> &ModalState<Event, EventForm> {
        &self.modal
    }

    pub fn form_mut(&mut self) -> Option<&mut EventForm> {
        self.modal.form_mut()
    }

    /// Users resolved for the open delete confirmation or detail view.
    pub fn related_users(&self) -> &[User] {
        &self.related_users
    }

    pub fn open_add(&mut self) {
        if self.modal.is_closed() {
            self.modal = ModalState::Editing {
                existing: None,
                form: EventForm::default(),
            };
        }
    }

    pub fn open_edit(&mut self, event: Event) {
        if self.modal.is_closed() {
            let form = EventForm::from_event(&event);
            self.modal = ModalState::Editing {
                existing: Some(event),
                form,
            };
        }
    }

    /// Submit the open editor; stays open with the form retained on failure.
    pub async fn submit(&mut self) -> Result<()> {
        let ModalState::Editing { existing, form } = &self.modal else {
            return Err(CoreError::validation("no editor open"));
        };
        let payload = form.to_payload()?;
        let result = match existing {
            Some(event) => self.cache.update(event.event_id, &payload).await,
            None => self.cache.create(&payload).await,
        };
        match result {
            Ok(()) => {
                self.modal = ModalState::Closed;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "event submit failed; editor stays open");
                Err(err)
            }
        }
    }

    /// "Delete" action: resolve assigned users, then ask for confirmation.
    pub async fn request_delete(&mut self, event: Event) {
        if !self.modal.is_closed() {
            return;
        }
        self.related_users = self.fetch_users(&event.user_ids).await;
        self.modal = ModalState::ConfirmingDelete { entity: event };
    }

    pub async fn confirm_delete(&mut self) -> Result<()> {
        let ModalState::ConfirmingDelete { entity } = &self.modal else {
            return Err(CoreError::validation("no delete pending"));
        };
        let event_id = entity.event_id;
        match self.cache.remove(event_id).await {
            Ok(()) => {
                self.close();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, event_id, "event delete failed");
                Err(err)
            }
        }
    }

    /// "View" action: read-only detail with the assigned users resolved.
    pub async fn open_view(&mut self, event: Event) {
        if !self.modal.is_closed() {
            return;
        }
        self.related_users = self.fetch_users(&event.user_ids).await;
        self.modal = ModalState::Viewing { entity: event };
    }

    pub fn cancel(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.modal = ModalState::Closed;
        self.related_users.clear();
    }

    /// One lookup per assigned id. Individual failures are logged and
    /// skipped; the warning list is best-effort.
    async fn fetch_users(&self, user_ids: &[i64]) -> Vec<User> {
        let mut users = Vec::with_capacity(user_ids.len());
        for &user_id in user_ids {
            match self.cache.api().user(user_id).await {
                Ok(user) => users.push(user),
                Err(err) => {
                    tracing::warn!(error = %err, user_id, "failed to resolve assigned user");
                }
            }
        }
        users
    }
}
