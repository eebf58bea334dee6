//! Typed wrappers over the remote REST API, one per resource family.
//!
//! Each client is stateless: a method call is exactly one HTTP request with
//! the shared normalization contract from [`crate::http`].

mod auth;
mod categoria;
mod equipe;
mod tarefa;

pub use crate::http::ApiClient;
pub use auth::AuthApi;
pub use categoria::CategoriaApi;
pub use equipe::EquipeApi;
pub use tarefa::TarefaApi;
