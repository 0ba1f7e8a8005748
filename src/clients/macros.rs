/// Generates a `get_*` method for clients whose entities are looked up by id
/// alone. A missing entity becomes the client error's `NotFound` variant.
macro_rules! impl_get_method {
    ($client:ident, $entity:ty, $error:ty, $method:ident) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(
                &self,
                id: <$entity as $crate::actor_framework::Entity>::Id,
            ) -> Result<$entity, $error> {
                tracing::debug!("Sending request");
                self.inner.get(id).await?.ok_or_else(|| <$error>::NotFound(id.to_string()))
            }
        }
    };
}
