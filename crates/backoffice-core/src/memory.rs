// In-memory backend for tests and demos
//
// Implements the same traits as the HTTP adapters, keeping all data in
// memory. Clones share state, so a test can hold one handle while a screen
// owns another.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use backoffice_client::ClientError;
use backoffice_contracts::{
    Category, CategoryPayload, Event, EventPayload, Guest, User, UserPayload,
};
use tokio::sync::RwLock;

use crate::cache::ResourceApi;
use crate::error::{CoreError, Result};
use crate::guests::GuestApi;
use crate::screens::{EventDirectory, UserDirectory};

/// Shared in-memory stand-in for the remote backend.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    categories: Arc<RwLock<Vec<Category>>>,
    events: Arc<RwLock<Vec<Event>>>,
    users: Arc<RwLock<Vec<User>>>,
    guests: Arc<RwLock<Vec<Guest>>>,
    next_id: Arc<AtomicI64>,
    fail_mutations: Arc<AtomicBool>,
    fail_lists: Arc<AtomicBool>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            next_id: Arc::new(AtomicI64::new(1)),
            ..Self::default()
        }
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Make every subsequent mutation fail with a 500 until reset.
    /// Reads still succeed, mirroring a backend that rejects writes.
    pub fn fail_mutations(&self, fail: bool) {
        self.fail_mutations.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent collection read fail with a 500 until reset.
    pub fn fail_lists(&self, fail: bool) {
        self.fail_lists.store(fail, Ordering::SeqCst);
    }

    fn check_mutation(&self) -> Result<()> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(CoreError::Api(ClientError::Api {
                status: 500,
                message: "injected failure".to_string(),
            }));
        }
        Ok(())
    }

    fn check_list(&self) -> Result<()> {
        if self.fail_lists.load(Ordering::SeqCst) {
            return Err(CoreError::Api(ClientError::Api {
                status: 500,
                message: "injected failure".to_string(),
            }));
        }
        Ok(())
    }

    // Seed helpers

    pub async fn seed_category(&self, name: &str) -> Category {
        let category = Category {
            category_id: self.allocate_id(),
            name: name.to_string(),
        };
        self.categories.write().await.push(category.clone());
        category
    }

    pub async fn seed_event(&self, payload: EventPayload) -> Event {
        let event = Event {
            event_id: self.allocate_id(),
            title: payload.title,
            start_date: payload.start_date,
            end_date: payload.end_date,
            location: payload.location,
            category_id: payload.category_id,
            image: payload.image,
            price: payload.price,
            min_capacity: payload.min_capacity,
            max_capacity: payload.max_capacity,
            user_ids: payload.user_ids,
        };
        self.events.write().await.push(event.clone());
        event
    }

    pub async fn seed_user(&self, payload: UserPayload) -> User {
        let user = self.user_from_payload(&payload);
        self.users.write().await.push(user.clone());
        user
    }

    pub async fn seed_guest(&self, payload: UserPayload) -> Guest {
        let guest = self.user_from_payload(&payload);
        self.guests.write().await.push(guest.clone());
        guest
    }

    /// Accepted users as seen through `get_users`.
    pub async fn users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    pub async fn pending_guests(&self) -> Vec<Guest> {
        self.guests.read().await.clone()
    }

    fn user_from_payload(&self, payload: &UserPayload) -> User {
        User {
            user_id: self.allocate_id(),
            email: payload.email.clone(),
            name: payload.name.clone(),
            password: payload.password.clone(),
            balance: payload.balance,
            event_ids: payload.event_ids.clone(),
        }
    }
}

#[async_trait]
impl ResourceApi<Category> for InMemoryBackend {
    type Payload = CategoryPayload;

    async fn list(&self) -> Result<Vec<Category>> {
        self.check_list()?;
        Ok(self.categories.read().await.clone())
    }

    async fn create(&self, payload: &CategoryPayload) -> Result<()> {
        self.check_mutation()?;
        let category = Category {
            category_id: self.allocate_id(),
            name: payload.name.clone(),
        };
        self.categories.write().await.push(category);
        Ok(())
    }

    async fn update(&self, id: i64, payload: &CategoryPayload) -> Result<()> {
        self.check_mutation()?;
        let mut categories = self.categories.write().await;
        let category = categories
            .iter_mut()
            .find(|c| c.category_id == id)
            .ok_or(CoreError::Api(ClientError::NotFound))?;
        category.name = payload.name.clone();
        Ok(())
    }

    async fn remove(&self, id: i64) -> Result<()> {
        self.check_mutation()?;
        // No referential check: events keep dangling category ids, exactly
        // like the real backend.
        self.categories.write().await.retain(|c| c.category_id != id);
        Ok(())
    }
}

#[async_trait]
impl ResourceApi<Event> for InMemoryBackend {
    type Payload = EventPayload;

    async fn list(&self) -> Result<Vec<Event>> {
        self.check_list()?;
        Ok(self.events.read().await.clone())
    }

    async fn create(&self, payload: &EventPayload) -> Result<()> {
        self.check_mutation()?;
        let event = Event {
            event_id: self.allocate_id(),
            title: payload.title.clone(),
            start_date: payload.start_date,
            end_date: payload.end_date,
            location: payload.location.clone(),
            category_id: payload.category_id,
            image: payload.image.clone(),
            price: payload.price,
            min_capacity: payload.min_capacity,
            max_capacity: payload.max_capacity,
            user_ids: payload.user_ids.clone(),
        };
        self.events.write().await.push(event);
        Ok(())
    }

    async fn update(&self, id: i64, payload: &EventPayload) -> Result<()> {
        self.check_mutation()?;
        let mut events = self.events.write().await;
        let event = events
            .iter_mut()
            .find(|e| e.event_id == id)
            .ok_or(CoreError::Api(ClientError::NotFound))?;
        event.title = payload.title.clone();
        event.start_date = payload.start_date;
        event.end_date = payload.end_date;
        event.location = payload.location.clone();
        event.category_id = payload.category_id;
        event.image = payload.image.clone();
        event.price = payload.price;
        event.min_capacity = payload.min_capacity;
        event.max_capacity = payload.max_capacity;
        event.user_ids = payload.user_ids.clone();
        Ok(())
    }

    async fn remove(&self, id: i64) -> Result<()> {
        self.check_mutation()?;
        self.events.write().await.retain(|e| e.event_id != id);
        Ok(())
    }
}

#[async_trait]
impl ResourceApi<User> for InMemoryBackend {
    type Payload = UserPayload;

    async fn list(&self) -> Result<Vec<User>> {
        self.check_list()?;
        Ok(self.users.read().await.clone())
    }

    async fn create(&self, payload: &UserPayload) -> Result<()> {
        self.check_mutation()?;
        let user = self.user_from_payload(payload);
        self.users.write().await.push(user);
        Ok(())
    }

    async fn update(&self, id: i64, payload: &UserPayload) -> Result<()> {
        self.check_mutation()?;
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.user_id == id)
            .ok_or(CoreError::Api(ClientError::NotFound))?;
        user.email = payload.email.clone();
        user.name = payload.name.clone();
        user.password = payload.password.clone();
        user.balance = payload.balance;
        user.event_ids = payload.event_ids.clone();
        Ok(())
    }

    async fn remove(&self, id: i64) -> Result<()> {
        self.check_mutation()?;
        self.users.write().await.retain(|u| u.user_id != id);
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for InMemoryBackend {
    async fn user(&self, user_id: i64) -> Result<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.user_id == user_id)
            .cloned()
            .ok_or(CoreError::Api(ClientError::NotFound))
    }
}

#[async_trait]
impl EventDirectory for InMemoryBackend {
    async fn event(&self, event_id: i64) -> Result<Event> {
        self.events
            .read()
            .await
            .iter()
            .find(|e| e.event_id == event_id)
            .cloned()
            .ok_or(CoreError::Api(ClientError::NotFound))
    }
}

#[async_trait]
impl GuestApi for InMemoryBackend {
    async fn list(&self) -> Result<Vec<Guest>> {
        self.check_list()?;
        Ok(self.guests.read().await.clone())
    }

    /// Approval moves the guest into the accepted-user list.
    async fn accept(&self, user_id: i64) -> Result<()> {
        self.check_mutation()?;
        let mut guests = self.guests.write().await;
        let position = guests
            .iter()
            .position(|g| g.user_id == user_id)
            .ok_or(CoreError::Api(ClientError::NotFound))?;
        let guest = guests.remove(position);
        self.users.write().await.push(guest);
        Ok(())
    }

    async fn decline(&self, user_id: i64) -> Result<()> {
        self.check_mutation()?;
        let mut guests = self.guests.write().await;
        let position = guests
            .iter()
            .position(|g| g.user_id == user_id)
            .ok_or(CoreError::Api(ClientError::NotFound))?;
        guests.remove(position);
        Ok(())
    }
}
