use tokio_util::sync::CancellationToken;

use flowhome_core::{Categoria, CategoriaCreate, CategoriaUpdate, Result};

use crate::http::ApiClient;

/// Resource client for the `/categoria` family, scoped by owning user.
#[derive(Debug, Clone)]
pub struct CategoriaApi {
    client: ApiClient,
}

impl CategoriaApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List a user's categories. Never resolves to null.
    pub async fn por_usuario(
        &self,
        id_usuario: i64,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<Categoria>> {
        self.client
            .get_list(&format!("/categoria/usuario/{}", id_usuario), cancel)
            .await
    }

    /// Create a category.
    pub async fn create(
        &self,
        data: &CategoriaCreate,
        cancel: Option<&CancellationToken>,
    ) -> Result<Categoria> {
        self.client.post_json("/categoria", data, cancel).await
    }

    /// Update a category.
    pub async fn update(
        &self,
        id: i64,
        data: &CategoriaUpdate,
        cancel: Option<&CancellationToken>,
    ) -> Result<Categoria> {
        self.client
            .put_json(&format!("/categoria/{}", id), data, cancel)
            .await
    }

    /// Delete a category. Deleting one still referenced by tasks is not
    /// validated here; that rule belongs to the backend.
    pub async fn delete(&self, id: i64, cancel: Option<&CancellationToken>) -> Result<()> {
        self.client
            .delete_empty(&format!("/categoria/{}", id), cancel)
            .await
    }
}
