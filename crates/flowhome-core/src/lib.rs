pub mod config;
pub mod error;
pub mod model;

pub use config::{ApiConfig, ClientConfig};
pub use error::{ApiError, Result};
pub use model::{
    CadastroRequest, Categoria, CategoriaCreate, CategoriaUpdate, Equipe, EquipeCreate,
    EquipeUpdate, LoginRequest, MembroStats, StatusTarefa, Tarefa, TarefaCreate, TarefaUpdate,
    Usuario, UsuarioStats,
};
