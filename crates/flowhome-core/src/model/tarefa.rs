use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task status. Transitions are free-form; no state machine is enforced
/// client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTarefa {
    #[serde(rename = "Pendente")]
    Pendente,
    #[serde(rename = "Em Andamento")]
    EmAndamento,
    #[serde(rename = "Concluída")]
    Concluida,
}

impl StatusTarefa {
    /// Convert to the wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendente => "Pendente",
            Self::EmAndamento => "Em Andamento",
            Self::Concluida => "Concluída",
        }
    }
}

impl FromStr for StatusTarefa {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Pendente" => Ok(Self::Pendente),
            "Em Andamento" => Ok(Self::EmAndamento),
            "Concluída" => Ok(Self::Concluida),
            other => Err(format!("unknown task status: {}", other)),
        }
    }
}

/// A unit of work belonging to one user and one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tarefa {
    pub id_tarefa: i64,
    pub titulo: String,
    #[serde(default)]
    pub descricao: Option<String>,
    pub id_categoria: i64,
    #[serde(default)]
    pub dt_vencimento: Option<NaiveDate>,
    /// Estimated effort in hours.
    #[serde(default)]
    pub tempo_estimado_h: Option<f64>,
    pub status: StatusTarefa,
    pub id_usuario: i64,
    pub dt_criacao: DateTime<Utc>,
    #[serde(default)]
    pub dt_conclusao: Option<DateTime<Utc>>,
}

/// Payload for creating a task. Status is omitted; the backend defaults new
/// tasks to Pendente.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TarefaCreate {
    pub titulo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    pub id_categoria: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dt_vencimento: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo_estimado_h: Option<f64>,
    pub id_usuario: i64,
}

/// Payload for updating a task, status included.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TarefaUpdate {
    pub titulo: String,
    #[serde(default)]
    pub descricao: Option<String>,
    pub id_categoria: i64,
    #[serde(default)]
    pub dt_vencimento: Option<NaiveDate>,
    #[serde(default)]
    pub tempo_estimado_h: Option<f64>,
    pub status: StatusTarefa,
}
