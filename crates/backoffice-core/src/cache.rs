// Resource list cache
//
// Each screen owns one `ResourceCache`: the most recently fetched full
// collection for one resource type. Mutations never patch the mirror; every
// successful create/update/remove is followed by a full reload, trading
// request volume for the guarantee that the mirror matches the server.
//
// Failure leaves the mirror at its previous value (stale but available) and
// propagates the error to the caller.

use async_trait::async_trait;

use crate::error::Result;

/// The remote operations a cache needs for one resource type.
///
/// Implemented by the HTTP adapters in [`crate::remote`] and by the
/// in-memory backend in [`crate::memory`] for tests.
#[async_trait]
pub trait ResourceApi<T>: Send + Sync {
    /// Create/update payload shape for this resource.
    type Payload: Send + Sync;

    async fn list(&self) -> Result<Vec<T>>;
    async fn create(&self, payload: &Self::Payload) -> Result<()>;
    async fn update(&self, id: i64, payload: &Self::Payload) -> Result<()>;
    async fn remove(&self, id: i64) -> Result<()>;
}

/// In-process mirror of one remote collection.
///
/// Single-owner by construction: `&mut self` is held across every await, so
/// loads cannot interleave within a screen, and dropping the owning screen
/// mid-request drops the continuation before a late response can be applied.
pub struct ResourceCache<T, A> {
    api: A,
    items: Vec<T>,
}

impl<T, A> ResourceCache<T, A>
where
    T: Clone + Send + Sync,
    A: ResourceApi<T>,
{
    /// Create an empty cache; call [`load`](Self::load) to populate it.
    pub fn new(api: A) -> Self {
        Self {
            api,
            items: Vec::new(),
        }
    }

    /// The mirrored collection as of the last successful load.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the entire collection and replace the mirror wholesale.
    ///
    /// On failure the previous items remain untouched.
    pub async fn load(&mut self) -> Result<&[T]> {
        let fresh = self.api.list().await?;
        self.items = fresh;
        Ok(&self.items)
    }

    /// Create a new item remotely, then resynchronize with a full reload.
    pub async fn create(&mut self, payload: &A::Payload) -> Result<()> {
        self.api.create(payload).await?;
        self.load().await?;
        Ok(())
    }

    /// Update an existing item remotely, then resynchronize.
    pub async fn update(&mut self, id: i64, payload: &A::Payload) -> Result<()> {
        self.api.update(id, payload).await?;
        self.load().await?;
        Ok(())
    }

    /// Delete an item remotely, then resynchronize.
    pub async fn remove(&mut self, id: i64) -> Result<()> {
        self.api.remove(id).await?;
        self.load().await?;
        Ok(())
    }
}
