// Typed methods for the backoffice REST surface
//
// Endpoint naming follows the backend verbatim: `get_<plural>`,
// `add_<singular>`, `update_<singular>/{id}`, `delete_<singular>/{id}`,
// plus the two guest action endpoints. Single-item reads reuse the
// collection endpoint via a query filter.

use backoffice_contracts::{
    Category, CategoryPayload, Event, EventPayload, Guest, User, UserPayload,
};

use crate::client::{ApiClient, ClientError};

impl ApiClient {
    // Categories

    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.get("/get_categories").await
    }

    pub async fn add_category(&self, payload: &CategoryPayload) -> Result<(), ClientError> {
        self.post("/add_category", payload).await
    }

    pub async fn update_category(
        &self,
        category_id: i64,
        payload: &CategoryPayload,
    ) -> Result<(), ClientError> {
        self.put(&format!("/update_category/{category_id}"), payload)
            .await
    }

    pub async fn delete_category(&self, category_id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/delete_category/{category_id}")).await
    }

    // Events

    pub async fn list_events(&self) -> Result<Vec<Event>, ClientError> {
        self.get("/get_events").await
    }

    /// Single-item fetch through the collection endpoint.
    pub async fn get_event(&self, event_id: i64) -> Result<Event, ClientError> {
        self.get(&format!("/get_events?event_id={event_id}")).await
    }

    pub async fn add_event(&self, payload: &EventPayload) -> Result<(), ClientError> {
        self.post("/add_event", payload).await
    }

    pub async fn update_event(
        &self,
        event_id: i64,
        payload: &EventPayload,
    ) -> Result<(), ClientError> {
        self.put(&format!("/update_event/{event_id}"), payload).await
    }

    pub async fn delete_event(&self, event_id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/delete_event/{event_id}")).await
    }

    // Users

    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.get("/get_users").await
    }

    pub async fn get_user(&self, user_id: i64) -> Result<User, ClientError> {
        self.get(&format!("/get_users?user_id={user_id}")).await
    }

    pub async fn add_user(&self, payload: &UserPayload) -> Result<(), ClientError> {
        self.post("/add_user", payload).await
    }

    pub async fn update_user(&self, user_id: i64, payload: &UserPayload) -> Result<(), ClientError> {
        self.put(&format!("/update_user/{user_id}"), payload).await
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/delete_user/{user_id}")).await
    }

    // Guests

    pub async fn list_guests(&self) -> Result<Vec<Guest>, ClientError> {
        self.get("/get_guests").await
    }

    pub async fn accept_guest(&self, user_id: i64) -> Result<(), ClientError> {
        self.post_action(&format!("/accept_guest/{user_id}")).await
    }

    pub async fn decline_guest(&self, user_id: i64) -> Result<(), ClientError> {
        self.post_action(&format!("/decline_guest/{user_id}")).await
    }
}
