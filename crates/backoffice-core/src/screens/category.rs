// Categories screen

use backoffice_contracts::{Category, CategoryPayload};

use crate::cache::{ResourceApi, ResourceCache};
use crate::error::{CoreError, Result};
use crate::filter::{visible, CategoryQuery};
use crate::form::CategoryForm;
use crate::modal::ModalState;

/// List + CRUD orchestration for categories.
///
/// Deleting a category referenced by events is allowed here; the backend is
/// the only place that could enforce referential integrity, and it does not.
pub struct CategoryScreen<A>
where
    A: ResourceApi<Category, Payload = CategoryPayload>,
{
    cache: ResourceCache<Category, A>,
    pub query: CategoryQuery,
    modal: ModalState<Category, CategoryForm>,
}

impl<A> CategoryScreen<A>
where
    A: ResourceApi<Category, Payload = CategoryPayload>,
{
    pub fn new(api: A) -> Self {
        Self {
            cache: ResourceCache::new(api),
            query: CategoryQuery::default(),
            modal: ModalState::Closed,
        }
    }

    /// Fetch the collection; called on screen entry and after mutations.
    pub async fn refresh(&mut self) -> Result<()> {
        self.cache.load().await?;
        Ok(())
    }

    pub fn all(&self) -> &[Category] {
        self.cache.items()
    }

    /// The filtered list the table renders.
    pub fn visible(&self) -> Vec<Category> {
        visible(self.cache.items(), &self.query)
    }

    pub fn modal(&self) -> &ModalState<Category, CategoryForm> {
        &self.modal
    }

    pub fn form_mut(&mut self) -> Option<&mut CategoryForm> {
        self.modal.form_mut()
    }

    /// "Add" action: open an empty editor. Ignored unless the modal is
    /// closed (one modal per screen).
    pub fn open_add(&mut self) {
        if self.modal.is_closed() {
            self.modal = ModalState::Editing {
                existing: None,
                form: CategoryForm::default(),
            };
        }
    }

    /// "Edit" action: open the editor initialized from the entity.
    pub fn open_edit(&mut self, category: Category) {
        if self.modal.is_closed() {
            let form = CategoryForm::from_category(&category);
            self.modal = ModalState::Editing {
                existing: Some(category),
                form,
            };
        }
    }

    /// Submit the open editor. Closes only after the mutation (and the
    /// reload it triggers) succeeds; on failure the editor stays open with
    /// the form retained so the operator can retry.
    pub async fn submit(&mut self) -> Result<()> {
        let ModalState::Editing { existing, form } = &self.modal else {
            return Err(CoreError::validation("no editor open"));
        };
        let payload = form.to_payload()?;
        let result = match existing {
            Some(category) => self.cache.update(category.category_id, &payload).await,
            None => self.cache.create(&payload).await,
        };
        match result {
            Ok(()) => {
                self.modal = ModalState::Closed;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "category submit failed; editor stays open");
                Err(err)
            }
        }
    }

    /// "Delete" action: ask for confirmation first.
    pub fn request_delete(&mut self, category: Category) {
        if self.modal.is_closed() {
            self.modal = ModalState::ConfirmingDelete { entity: category };
        }
    }

    /// Confirm the pending delete. No referential check against events.
    pub async fn confirm_delete(&mut self) -> Result<()> {
        let ModalState::ConfirmingDelete { entity } = &self.modal else {
            return Err(CoreError::validation("no delete pending"));
        };
        let category_id = entity.category_id;
        match self.cache.remove(category_id).await {
            Ok(()) => {
                self.modal = ModalState::Closed;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, category_id, "category delete failed");
                Err(err)
            }
        }
    }

    /// Cancel/close whichever modal is open, discarding its state.
    pub fn cancel(&mut self) {
        self.modal = ModalState::Closed;
    }
}
