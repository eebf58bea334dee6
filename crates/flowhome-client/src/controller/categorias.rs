use flowhome_core::{ApiError, Categoria, CategoriaCreate, CategoriaUpdate, Result};

use crate::api::CategoriaApi;
use crate::fetch::{FetchSlot, FetchState};

/// Controller for the categories page.
pub struct CategoriasController {
    api: CategoriaApi,
    slot: FetchSlot<Vec<Categoria>>,
}

impl CategoriasController {
    pub fn new(api: CategoriaApi) -> Self {
        Self {
            api,
            slot: FetchSlot::new(),
        }
    }

    pub fn state(&self) -> &FetchState<Vec<Categoria>> {
        self.slot.state()
    }

    /// Load the user's categories.
    pub async fn load(&mut self, id_usuario: i64) {
        let handle = self.slot.begin();
        let result = self.api.por_usuario(id_usuario, Some(handle.token())).await;
        self.slot.settle(&handle, result);
    }

    /// Cancel any in-flight load.
    pub fn unload(&mut self) {
        self.slot.cancel();
    }

    /// Create a category and append it to the cached list on success.
    pub async fn criar(&mut self, payload: CategoriaCreate) -> Result<Categoria> {
        if payload.nome.trim().is_empty() {
            return Err(ApiError::Validation(
                "O nome da categoria é obrigatório.".to_string(),
            ));
        }

        let nova = self.api.create(&payload, None).await?;
        if let Some(categorias) = self.slot.data_mut() {
            categorias.push(nova.clone());
        }
        Ok(nova)
    }

    /// Update a category and replace it in the cached list by id.
    pub async fn atualizar(
        &mut self,
        id_categoria: i64,
        payload: CategoriaUpdate,
    ) -> Result<Categoria> {
        let atualizada = self.api.update(id_categoria, &payload, None).await?;
        if let Some(categorias) = self.slot.data_mut() {
            for categoria in categorias.iter_mut() {
                if categoria.id_categoria == id_categoria {
                    *categoria = atualizada.clone();
                }
            }
        }
        Ok(atualizada)
    }

    /// Delete a category and remove it from the cached list on success. A
    /// backend error (e.g. unknown id) is surfaced and the list is left
    /// unchanged.
    pub async fn excluir(&mut self, id_categoria: i64) -> Result<()> {
        self.api.delete(id_categoria, None).await?;
        if let Some(categorias) = self.slot.data_mut() {
            categorias.retain(|c| c.id_categoria != id_categoria);
        }
        Ok(())
    }
}
