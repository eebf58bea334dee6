use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A team: a named group with exactly one manager and a unique invite code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipe {
    pub id_equipe: i64,
    pub nome_equipe: String,
    /// Short alphanumeric invite code, unique across all teams. The sole
    /// mechanism for joining.
    pub codigo_equipe: String,
    pub id_gestor: i64,
    pub dt_criacao: DateTime<Utc>,
}

impl Equipe {
    /// Whether the given user manages this team.
    pub fn is_gestor(&self, id_usuario: i64) -> bool {
        self.id_gestor == id_usuario
    }
}

/// Payload for creating a team. The caller becomes the manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipeCreate {
    pub nome_equipe: String,
    pub id_gestor: i64,
}

/// Payload for renaming a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipeUpdate {
    pub nome_equipe: String,
}
