use serde::{Deserialize, Serialize};

/// A user-scoped task label with a display color. Never shared across
/// users or teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Categoria {
    pub id_categoria: i64,
    pub nome: String,
    /// Display color as a hex string, e.g. "#3b82f6".
    pub cor_hex: String,
    pub id_usuario: i64,
}

/// Payload for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriaCreate {
    pub nome: String,
    pub cor_hex: String,
    pub id_usuario: i64,
}

/// Payload for updating a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriaUpdate {
    pub nome: String,
    pub cor_hex: String,
    pub id_usuario: i64,
}
