use std::collections::HashMap;

use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Page, PageRequest, Product, ProductId, ProductParams, ProductSearch, ProductSnapshot};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_get_method!(ProductClient, Product, ProductError, get_product);

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, page: PageRequest) -> Result<Page<Product>, ProductError> {
        self.search_products(ProductSearch::default(), page).await
    }

    #[instrument(skip(self))]
    pub async fn search_products(
        &self,
        search: ProductSearch,
        page: PageRequest,
    ) -> Result<Page<Product>, ProductError> {
        debug!("Sending request");
        let page = page.validated().map_err(ProductError::ValidationError)?;
        let matches = self.inner.query(move |product| search.matches(product)).await?;
        Ok(Page::slice(matches, page))
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductParams) -> Result<Product, ProductError> {
        debug!("Sending request");
        let id = self.inner.create(params).await?;
        info!(product_id = %id, "Product created");
        self.get_product(id).await
    }

    #[instrument(skip(self))]
    pub async fn update_product(&self, id: ProductId, params: ProductParams) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.update(id, params).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ProductError> {
        debug!("Sending request");
        self.inner.delete(id).await?;
        info!(product_id = %id, "Product deleted");
        Ok(())
    }

    /// Loads every listed product in one round trip. Ids with no product are
    /// absent from the map.
    #[instrument(skip(self))]
    pub async fn products_by_id(&self, ids: Vec<ProductId>) -> Result<HashMap<ProductId, Product>, ProductError> {
        debug!("Sending request");
        let products = self.inner.query(move |product| ids.contains(&product.id)).await?;
        Ok(products.into_iter().map(|product| (product.id, product)).collect())
    }

    /// Decrements stock for every line, all or nothing. Snapshots come back in
    /// line order.
    ///
    /// # Errors
    /// `InsufficientStock` for the first line that cannot be served, or
    /// `NotFound` for a product that no longer exists. Either way no stock moved.
    #[instrument(skip(self))]
    pub async fn reserve_all(&self, lines: Vec<(ProductId, u32)>) -> Result<Vec<ProductSnapshot>, ProductError> {
        debug!("Sending request");
        let ops = lines
            .into_iter()
            .map(|(id, quantity)| (id, ProductAction::Reserve(quantity)))
            .collect();
        self.inner
            .transact(ops)
            .await?
            .into_iter()
            .map(|result| match result {
                ProductActionResult::Reserve(snapshot) => Ok(snapshot),
                other => Err(unexpected(other)),
            })
            .collect()
    }

    /// Returns stock taken by [`reserve_all`](Self::reserve_all).
    #[instrument(skip(self))]
    pub async fn release_all(&self, lines: Vec<(ProductId, u32)>) -> Result<(), ProductError> {
        debug!("Sending request");
        let ops = lines
            .into_iter()
            .map(|(id, quantity)| (id, ProductAction::Release(quantity)))
            .collect();
        self.inner.transact(ops).await?;
        Ok(())
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("Unexpected result: {:?}", result))
}
