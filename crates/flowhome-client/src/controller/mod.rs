//! Page data controllers.
//!
//! One controller per page that loads remote data. Each owns a
//! [`crate::fetch::FetchSlot`] and follows the same discipline: loads run as
//! cancellable fetch sequences, mutations await confirmation and then edit
//! the cached collections by id instead of re-fetching.

mod categorias;
mod dashboard;
mod equipe;
mod perfil;
mod tarefas;

pub use categorias::CategoriasController;
pub use dashboard::{
    DashboardController, DashboardData, TotaisEquipe, MSG_ACESSO_RESTRITO, MSG_SEM_EQUIPE,
};
pub use equipe::{EquipeController, EquipeData};
pub use perfil::PerfilController;
pub use tarefas::{TarefasController, TarefasData};
