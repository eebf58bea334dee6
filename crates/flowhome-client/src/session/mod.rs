//! Session management: the single source of truth for who is logged in and
//! which team they belong to.
//!
//! The manager is an explicitly constructed instance injected into whatever
//! serves pages; there is no process-wide global. Mutating operations
//! (bootstrap, login, logout, reload) are serialized by an internal async
//! mutex so an overlapping reload and logout cannot interleave identity and
//! team updates. Reads are cheap cloned snapshots.

mod storage;

use std::sync::{Arc, RwLock};

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, SESSION_KEY, THEME_KEY};

use flowhome_core::{Equipe, LoginRequest, Result, Usuario};

use crate::api::{AuthApi, EquipeApi};

/// Point-in-time view of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// The authenticated identity, if any.
    pub user: Option<Usuario>,
    /// The resolved team entity. Present only when the user has a team id
    /// and resolution succeeded; a user can be authenticated with this
    /// unset (degraded team context).
    pub minha_equipe: Option<Equipe>,
    /// True until bootstrap completes. Dependent views must not render or
    /// fetch while this is set.
    pub is_loading: bool,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Owner of the session state.
pub struct SessionManager {
    auth: AuthApi,
    equipes: EquipeApi,
    storage: Arc<dyn KeyValueStorage>,
    state: RwLock<SessionSnapshot>,
    // Serializes bootstrap/login/logout/reload end to end, team resolution
    // included.
    mutation: tokio::sync::Mutex<()>,
}

impl SessionManager {
    pub fn new(auth: AuthApi, equipes: EquipeApi, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            auth,
            equipes,
            storage,
            state: RwLock::new(SessionSnapshot {
                user: None,
                minha_equipe: None,
                is_loading: true,
            }),
            mutation: tokio::sync::Mutex::new(()),
        }
    }

    /// Current session state as a cloned snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.read().unwrap_or_else(|p| p.into_inner()).clone()
    }

    /// Whether bootstrap is still in progress.
    pub fn is_loading(&self) -> bool {
        self.snapshot().is_loading
    }

    /// Restore the session from durable storage. Runs once at startup.
    ///
    /// A malformed persisted record is discarded and the app starts
    /// unauthenticated; a team-resolution failure leaves the user logged in
    /// with the team entity unset. Neither is fatal. The loading flag flips
    /// to false exactly once, at the end.
    pub async fn bootstrap(&self) {
        let _guard = self.mutation.lock().await;

        let mut user = None;
        let mut equipe = None;

        match self.storage.get(SESSION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Usuario>(&raw) {
                Ok(stored) => {
                    equipe = self.resolve_equipe(&stored).await;
                    user = Some(stored);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "discarding corrupted persisted session");
                    if let Err(e) = self.storage.remove(SESSION_KEY) {
                        tracing::warn!(error = %e, "failed to clear corrupted session record");
                    }
                }
            },
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted session");
            }
        }

        let mut state = self.state.write().unwrap_or_else(|p| p.into_inner());
        state.user = user;
        state.minha_equipe = equipe;
        state.is_loading = false;
    }

    /// Authenticate and establish a session. On failure the error is
    /// propagated to the caller and existing session state is untouched.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Usuario> {
        let _guard = self.mutation.lock().await;

        let user = self.auth.login(credentials, None).await?;
        let equipe = self.resolve_equipe(&user).await;
        self.persist(&user);

        let mut state = self.state.write().unwrap_or_else(|p| p.into_inner());
        state.user = Some(user.clone());
        state.minha_equipe = equipe;

        Ok(user)
    }

    /// Clear the session, in memory and on disk. Idempotent.
    pub async fn logout(&self) {
        let _guard = self.mutation.lock().await;
        self.clear_locked();
    }

    /// Re-fetch the identity by id and re-resolve the team, e.g. after a
    /// profile edit or team join. A stale, unverifiable identity is unsafe
    /// to keep, so any failure here forces a logout before the error is
    /// returned.
    pub async fn reload_user(&self, id: i64) -> Result<Usuario> {
        let _guard = self.mutation.lock().await;

        match self.auth.get_usuario(id, None).await {
            Ok(user) => {
                let equipe = self.resolve_equipe(&user).await;
                self.persist(&user);

                let mut state = self.state.write().unwrap_or_else(|p| p.into_inner());
                state.user = Some(user.clone());
                state.minha_equipe = equipe;

                Ok(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, id_usuario = id, "reload failed, forcing logout");
                self.clear_locked();
                Err(e)
            }
        }
    }

    /// Resolve the full team entity for a user. Managers list their teams
    /// and pick the one matching the stored id; members fetch by id.
    /// Failures are logged and absorbed: the session stays authenticated
    /// with the team entity unset.
    async fn resolve_equipe(&self, user: &Usuario) -> Option<Equipe> {
        let id_equipe = user.id_equipe?;

        let resolved = if user.is_gestor {
            self.equipes
                .por_gestor(user.id_usuario, None)
                .await
                .map(|equipes| equipes.into_iter().find(|e| e.id_equipe == id_equipe))
        } else {
            self.equipes.por_id(id_equipe, None).await.map(Some)
        };

        match resolved {
            Ok(equipe) => equipe,
            Err(e) => {
                tracing::warn!(error = %e, id_equipe, "failed to resolve team, continuing without it");
                None
            }
        }
    }

    fn persist(&self, user: &Usuario) {
        match serde_json::to_string(user) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(SESSION_KEY, &raw) {
                    tracing::warn!(error = %e, "failed to persist session record");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize session record");
            }
        }
    }

    // Caller must hold the mutation lock.
    fn clear_locked(&self) {
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            tracing::warn!(error = %e, "failed to remove persisted session record");
        }

        let mut state = self.state.write().unwrap_or_else(|p| p.into_inner());
        state.user = None;
        state.minha_equipe = None;
    }
}
