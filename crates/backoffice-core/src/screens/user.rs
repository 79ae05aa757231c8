// Users screen

use backoffice_contracts::{Event, User, UserPayload};

use crate::cache::{ResourceApi, ResourceCache};
use crate::error::{CoreError, Result};
use crate::filter::{visible, UserQuery};
use crate::form::UserForm;
use crate::modal::ModalState;
use crate::screens::EventDirectory;

/// List + CRUD orchestration for users. Mirror of the events screen with
/// the cross-reference direction reversed: delete and view resolve the
/// user's assigned events.
pub struct UserScreen<A>
where
    A: ResourceApi<User, Payload = UserPayload> + EventDirectory,
{
    cache: ResourceCache<User, A>,
    pub query: UserQuery,
    modal: ModalState<User, UserForm>,
    related_events: Vec<Event>,
}

impl<A> UserScreen<A>
where
    A: ResourceApi<User, Payload = UserPayload> + EventDirectory,
{
    pub fn new(api: A) -> Self {
        Self {
            cache: ResourceCache::new(api),
            query: UserQuery::default(),
            modal: ModalState::Closed,
            related_events: Vec::new(),
        }
    }

    pub async fn refresh(&mut self) -> Result<()> {
        self.cache.load().await?;
        Ok(())
    }

    pub fn all(&self) -> &[User] {
        self.cache.items()
    }

    pub fn visible(&self) -> Vec<User> {
        visible(self.cache.items(), &self.query)
    }

    pub fn modal(&self) -> &ModalState<User, UserForm> {
        &self.modal
    }

    pub fn form_mut(&mut self) -> Option<&mut UserForm> {
        self.modal.form_mut()
    }

    /// Events resolved for the open delete confirmation or detail view.
    pub fn related_events(&self) -> &[Event] {
        &self.related_events
    }

    pub fn open_add(&mut self) {
        if self.modal.is_closed() {
            self.modal = ModalState::Editing {
                existing: None,
                form: UserForm::default(),
            };
        }
    }

    pub fn open_edit(&mut self, user: User) {
        if self.modal.is_closed() {
            let form = UserForm::from_user(&user);
            self.modal = ModalState::Editing {
                existing: Some(user),
                form,
            };
        }
    }

    pub async fn submit(&mut self) -> Result<()> {
        let ModalState::Editing { existing, form } = &self.modal else {
            return Err(CoreError::validation("no editor open"));
        };
        let payload = form.to_payload()?;
        let result = match existing {
            Some(user) => self.cache.update(user.user_id, &payload).await,
            None => self.cache.create(&payload).await,
        };
        match result {
            Ok(()) => {
                self.modal = ModalState::Closed;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "user submit failed; editor stays open");
                Err(err)
            }
        }
    }

    pub async fn request_delete(&mut self, user: User) {
        if !self.modal.is_closed() {
            return;
        }
        self.related_events = self.fetch_events(&user.event_ids).await;
        self.modal = ModalState::ConfirmingDelete { entity: user };
    }

    pub async fn confirm_delete(&mut self) -> Result<()> {
        let ModalState::ConfirmingDelete { entity } = &self.modal else {
            return Err(CoreError::validation("no delete pending"));
        };
        let user_id = entity.user_id;
        match self.cache.remove(user_id).await {
            Ok(()) => {
                self.close();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, user_id, "user delete failed");
                Err(err)
            }
        }
    }

    pub async fn open_view(&mut self, user: User) {
        if !self.modal.is_closed() {
            return;
        }
        self.related_events = self.fetch_events(&user.event_ids).await;
        self.modal = ModalState::Viewing { entity: user };
    }

    pub fn cancel(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.modal = ModalState::Closed;
        self.related_events.clear();
    }

    async fn fetch_events(&self, event_ids: &[i64]) -> Vec<Event> {
        let mut events = Vec::with_capacity(event_ids.len());
        for &event_id in event_ids {
            match self.cache.api().event(event_id).await {
                Ok(event) => events.push(event),
                Err(err) => {
                    tracing::warn!(error = %err, event_id, "failed to resolve assigned event");
                }
            }
        }
        events
    }
}
