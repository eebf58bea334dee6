use tokio_util::sync::CancellationToken;

use flowhome_core::{MembroStats, Result, Tarefa, TarefaCreate, TarefaUpdate, UsuarioStats};

use crate::http::ApiClient;

/// Resource client for the `/tarefas` family: task CRUD plus the
/// backend-computed stats endpoints.
#[derive(Debug, Clone)]
pub struct TarefaApi {
    client: ApiClient,
}

impl TarefaApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List a user's tasks. Never resolves to null.
    pub async fn por_usuario(
        &self,
        id_usuario: i64,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<Tarefa>> {
        self.client
            .get_list(&format!("/tarefas/usuario/{}", id_usuario), cancel)
            .await
    }

    /// Create a task. New tasks come back with status Pendente.
    pub async fn create(
        &self,
        data: &TarefaCreate,
        cancel: Option<&CancellationToken>,
    ) -> Result<Tarefa> {
        self.client.post_json("/tarefas", data, cancel).await
    }

    /// Update a task, status included.
    pub async fn update(
        &self,
        id: i64,
        data: &TarefaUpdate,
        cancel: Option<&CancellationToken>,
    ) -> Result<Tarefa> {
        self.client
            .put_json(&format!("/tarefas/{}", id), data, cancel)
            .await
    }

    /// Delete a task.
    pub async fn delete(&self, id: i64, cancel: Option<&CancellationToken>) -> Result<()> {
        self.client
            .delete_empty(&format!("/tarefas/{}", id), cancel)
            .await
    }

    /// Per-member aggregates for a whole team. Never resolves to null.
    pub async fn stats_da_equipe(
        &self,
        id_equipe: i64,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<MembroStats>> {
        self.client
            .get_list(&format!("/tarefas/equipe/{}/stats", id_equipe), cancel)
            .await
    }

    /// A single user's aggregate.
    pub async fn stats_do_usuario(
        &self,
        id_usuario: i64,
        cancel: Option<&CancellationToken>,
    ) -> Result<UsuarioStats> {
        self.client
            .get_json(&format!("/tarefas/{}/stats", id_usuario), cancel)
            .await
    }
}
