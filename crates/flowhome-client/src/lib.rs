//! Headless client for the flowhome team/task-management backend.
//!
//! Provides:
//! - Typed resource clients over the REST API with uniform error
//!   normalization and cooperative cancellation
//! - A session manager with durable persistence and serialized mutations
//! - Per-page data controllers with an explicit fetch state machine
//! - A route guard decision derived from session state

pub mod api;
pub mod controller;
pub mod fetch;
pub mod guard;
pub mod http;
pub mod session;
pub mod theme;

pub use api::{ApiClient, AuthApi, CategoriaApi, EquipeApi, TarefaApi};
pub use fetch::{FetchHandle, FetchSlot, FetchState};
pub use guard::RouteDecision;
pub use session::{
    FileStorage, KeyValueStorage, MemoryStorage, SessionManager, SessionSnapshot, SESSION_KEY,
    THEME_KEY,
};
pub use theme::{Theme, ThemeStore};
