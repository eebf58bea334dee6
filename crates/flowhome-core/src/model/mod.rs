mod categoria;
mod equipe;
mod stats;
mod tarefa;
mod usuario;

pub use categoria::{Categoria, CategoriaCreate, CategoriaUpdate};
pub use equipe::{Equipe, EquipeCreate, EquipeUpdate};
pub use stats::{MembroStats, UsuarioStats};
pub use tarefa::{StatusTarefa, Tarefa, TarefaCreate, TarefaUpdate};
pub use usuario::{CadastroRequest, LoginRequest, Usuario};
