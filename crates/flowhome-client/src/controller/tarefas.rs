use flowhome_core::{
    ApiError, Categoria, Result, Tarefa, TarefaCreate, TarefaUpdate,
};

use crate::api::{CategoriaApi, TarefaApi};
use crate::fetch::{FetchHandle, FetchSlot, FetchState};

/// Data backing the tasks page: the user's tasks plus their categories,
/// loaded together because the task forms need the category list.
#[derive(Debug, Clone, PartialEq)]
pub struct TarefasData {
    pub tarefas: Vec<Tarefa>,
    pub categorias: Vec<Categoria>,
}

/// Controller for the tasks page.
pub struct TarefasController {
    tarefas_api: TarefaApi,
    categorias_api: CategoriaApi,
    slot: FetchSlot<TarefasData>,
}

impl TarefasController {
    pub fn new(tarefas_api: TarefaApi, categorias_api: CategoriaApi) -> Self {
        Self {
            tarefas_api,
            categorias_api,
            slot: FetchSlot::new(),
        }
    }

    pub fn state(&self) -> &FetchState<TarefasData> {
        self.slot.state()
    }

    /// Start a fetch sequence, superseding any in-flight one.
    pub fn begin_load(&mut self) -> FetchHandle {
        self.slot.begin()
    }

    /// Run the fetch for a sequence. Tasks and categories are independent,
    /// so they load in parallel under the sequence's token.
    pub async fn run_load(&self, id_usuario: i64, handle: &FetchHandle) -> Result<TarefasData> {
        let (tarefas, categorias) = tokio::join!(
            self.tarefas_api.por_usuario(id_usuario, Some(handle.token())),
            self.categorias_api.por_usuario(id_usuario, Some(handle.token())),
        );

        Ok(TarefasData {
            tarefas: tarefas?,
            categorias: categorias?,
        })
    }

    /// Apply a sequence's result. Stale sequences are discarded.
    pub fn finish_load(&mut self, handle: &FetchHandle, result: Result<TarefasData>) -> bool {
        self.slot.settle(handle, result)
    }

    /// Load the page's data end to end.
    pub async fn load(&mut self, id_usuario: i64) {
        let handle = self.begin_load();
        let result = self.run_load(id_usuario, &handle).await;
        self.finish_load(&handle, result);
    }

    /// Cancel any in-flight load; the page is going away.
    pub fn unload(&mut self) {
        self.slot.cancel();
    }

    /// Create a task and prepend it to the cached list on success.
    pub async fn criar(&mut self, payload: TarefaCreate) -> Result<Tarefa> {
        if payload.titulo.trim().is_empty() {
            return Err(ApiError::Validation(
                "O título da tarefa é obrigatório.".to_string(),
            ));
        }

        let nova = self.tarefas_api.create(&payload, None).await?;
        if let Some(data) = self.slot.data_mut() {
            data.tarefas.insert(0, nova.clone());
        }
        Ok(nova)
    }

    /// Update a task and replace it in the cached list by id on success.
    pub async fn atualizar(&mut self, id_tarefa: i64, payload: TarefaUpdate) -> Result<Tarefa> {
        let atualizada = self.tarefas_api.update(id_tarefa, &payload, None).await?;
        if let Some(data) = self.slot.data_mut() {
            for tarefa in data.tarefas.iter_mut() {
                if tarefa.id_tarefa == id_tarefa {
                    *tarefa = atualizada.clone();
                }
            }
        }
        Ok(atualizada)
    }

    /// Delete a task and remove it from the cached list on success. On
    /// failure the cached list is untouched.
    pub async fn excluir(&mut self, id_tarefa: i64) -> Result<()> {
        self.tarefas_api.delete(id_tarefa, None).await?;
        if let Some(data) = self.slot.data_mut() {
            data.tarefas.retain(|t| t.id_tarefa != id_tarefa);
        }
        Ok(())
    }
}
