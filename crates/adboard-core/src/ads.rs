use crate::error::AppError;
use crate::models::{Ad, NewAd};
use crate::traits::AdStore;

/// Lists and creates ads over an [`AdStore`].
pub struct AdService<S>
where
    S: AdStore,
{
    store: S,
}

impl<S> AdService<S>
where
    S: AdStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All ads, oldest first.
    pub async fn list(&self) -> Result<Vec<Ad>, AppError> {
        self.store.list().await
    }

    /// Presence-check `ad` and persist it.
    ///
    /// A blank title or description returns [`AppError::Validation`] without
    /// touching the store.
    pub async fn create(&self, ad: &NewAd) -> Result<Ad, AppError> {
        ad.validate()?;
        let created = self.store.create(ad).await?;
        tracing::debug!(ad_id = %created.id, "Ad stored");
        Ok(created)
    }
}
