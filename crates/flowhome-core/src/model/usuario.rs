use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An authenticated identity as returned by the backend.
///
/// The team linkage is the flat `idEquipe` foreign key; the resolved team
/// entity is session state, not part of the user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id_usuario: i64,
    pub nome: String,
    pub email: String,
    /// Team the user belongs to, if any.
    pub id_equipe: Option<i64>,
    /// Whether the user manages a team.
    pub is_gestor: bool,
}

impl Usuario {
    /// Whether the user currently belongs to a team.
    pub fn has_equipe(&self) -> bool {
        self.id_equipe.is_some()
    }
}

/// Login credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub senha: String,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CadastroRequest {
    pub nome: String,
    pub cpf: String,
    pub email: String,
    pub telefone: String,
    pub dt_nascimento: NaiveDate,
    pub senha: String,
}
