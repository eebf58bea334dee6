use serde::{Deserialize, Serialize};

/// Per-user productivity aggregate, computed by the backend. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioStats {
    pub total_tarefas_concluidas: u64,
    pub total_horas_produtivas: f64,
    pub tarefas_pendentes: u64,
}

/// Per-member aggregate for the team dashboard, with identity fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembroStats {
    pub id_usuario: i64,
    pub nome_usuario: String,
    pub total_tarefas_concluidas: u64,
    pub total_horas_produtivas: f64,
    pub tarefas_pendentes: u64,
}
