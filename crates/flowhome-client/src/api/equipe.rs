use tokio_util::sync::CancellationToken;

use flowhome_core::{Equipe, EquipeCreate, EquipeUpdate, Result};

use crate::http::ApiClient;

/// Resource client for the `/equipes` family: team CRUD and invite-code
/// lookup.
#[derive(Debug, Clone)]
pub struct EquipeApi {
    client: ApiClient,
}

impl EquipeApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Create a team. The given gestor becomes its manager and the backend
    /// assigns the unique invite code.
    pub async fn create(
        &self,
        data: &EquipeCreate,
        cancel: Option<&CancellationToken>,
    ) -> Result<Equipe> {
        self.client.post_json("/equipes", data, cancel).await
    }

    /// List the teams managed by a gestor. Never resolves to null.
    pub async fn por_gestor(
        &self,
        id_gestor: i64,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<Equipe>> {
        self.client
            .get_list(&format!("/equipes/gestor/{}", id_gestor), cancel)
            .await
    }

    /// Resolve an invite code to its team.
    pub async fn por_codigo(
        &self,
        codigo: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Equipe> {
        self.client
            .get_json(&format!("/equipes/buscar/{}", codigo), cancel)
            .await
    }

    /// Fetch a team by id.
    pub async fn por_id(&self, id: i64, cancel: Option<&CancellationToken>) -> Result<Equipe> {
        self.client.get_json(&format!("/equipes/{}", id), cancel).await
    }

    /// Rename a team.
    pub async fn update(
        &self,
        id: i64,
        data: &EquipeUpdate,
        cancel: Option<&CancellationToken>,
    ) -> Result<Equipe> {
        self.client
            .put_json(&format!("/equipes/{}", id), data, cancel)
            .await
    }

    /// Delete a team.
    pub async fn delete(&self, id: i64, cancel: Option<&CancellationToken>) -> Result<()> {
        self.client
            .delete_empty(&format!("/equipes/{}", id), cancel)
            .await
    }
}
