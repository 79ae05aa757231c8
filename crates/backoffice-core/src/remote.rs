// HTTP adapters binding the screen traits to the API client
//
// One thin handle per resource so each screen owns exactly the remote
// surface it needs. `ApiClient` clones share the underlying connection
// pool.

use async_trait::async_trait;
use backoffice_client::ApiClient;
use backoffice_contracts::{
    Category, CategoryPayload, Event, EventPayload, Guest, User, UserPayload,
};

use crate::cache::ResourceApi;
use crate::error::Result;
use crate::guests::GuestApi;
use crate::screens::{EventDirectory, UserDirectory};

/// Category endpoints as seen by [`crate::screens::CategoryScreen`].
#[derive(Clone)]
pub struct RemoteCategories {
    client: ApiClient,
}

impl RemoteCategories {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceApi<Category> for RemoteCategories {
    type Payload = CategoryPayload;

    async fn list(&self) -> Result<Vec<Category>> {
        Ok(self.client.list_categories().await?)
    }

    async fn create(&self, payload: &CategoryPayload) -> Result<()> {
        Ok(self.client.add_category(payload).await?)
    }

    async fn update(&self, id: i64, payload: &CategoryPayload) -> Result<()> {
        Ok(self.client.update_category(id, payload).await?)
    }

    async fn remove(&self, id: i64) -> Result<()> {
        Ok(self.client.delete_category(id).await?)
    }
}

/// Event endpoints plus the user lookup the events screen fans out to.
#[derive(Clone)]
pub struct RemoteEvents {
    client: ApiClient,
}

impl RemoteEvents {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceApi<Event> for RemoteEvents {
    type Payload = EventPayload;

    async fn list(&self) -> Result<Vec<Event>> {
        Ok(self.client.list_events().await?)
    }

    async fn create(&self, payload: &EventPayload) -> Result<()> {
        Ok(self.client.add_event(payload).await?)
    }

    async fn update(&self, id: i64, payload: &EventPayload) -> Result<()> {
        Ok(self.client.update_event(id, payload).await?)
    }

    async fn remove(&self, id: i64) -> Result<()> {
        Ok(self.client.delete_event(id).await?)
    }
}

#[async_trait]
impl UserDirectory for RemoteEvents {
    async fn user(&self, user_id: i64) -> Result<User> {
        Ok(self.client.get_user(user_id).await?)
    }
}

/// User endpoints plus the event lookup the users screen fans out to.
#[derive(Clone)]
pub struct RemoteUsers {
    client: ApiClient,
}

impl RemoteUsers {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceApi<User> for RemoteUsers {
    type Payload = UserPayload;

    async fn list(&self) -> Result<Vec<User>> {
        Ok(self.client.list_users().await?)
    }

    async fn create(&self, payload: &UserPayload) -> Result<()> {
        Ok(self.client.add_user(payload).await?)
    }

    async fn update(&self, id: i64, payload: &UserPayload) -> Result<()> {
        Ok(self.client.update_user(id, payload).await?)
    }

    async fn remove(&self, id: i64) -> Result<()> {
        Ok(self.client.delete_user(id).await?)
    }
}

#[async_trait]
impl EventDirectory for RemoteUsers {
    async fn event(&self, event_id: i64) -> Result<Event> {
        Ok(self.client.get_event(event_id).await?)
    }
}

/// Guest action endpoints.
#[derive(Clone)]
pub struct RemoteGuests {
    client: ApiClient,
}

impl RemoteGuests {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GuestApi for RemoteGuests {
    async fn list(&self) -> Result<Vec<Guest>> {
        Ok(self.client.list_guests().await?)
    }

    async fn accept(&self, user_id: i64) -> Result<()> {
        Ok(self.client.accept_guest(user_id).await?)
    }

    async fn decline(&self, user_id: i64) -> Result<()> {
        Ok(self.client.decline_guest(user_id).await?)
    }
}
