use flowhome_core::{ApiError, CadastroRequest, Result, Usuario};

use crate::api::AuthApi;
use crate::session::SessionManager;

/// Controller for the profile page. Holds no page data of its own; every
/// operation mutates the identity and hands the session the job of keeping
/// itself consistent.
pub struct PerfilController {
    auth: AuthApi,
}

impl PerfilController {
    pub fn new(auth: AuthApi) -> Self {
        Self { auth }
    }

    fn current_user(session: &SessionManager) -> Result<Usuario> {
        session
            .snapshot()
            .user
            .ok_or_else(|| ApiError::Unauthorized("Sessão expirada".to_string()))
    }

    /// Update the profile, then reload the session so the fresh identity is
    /// re-resolved and re-persisted.
    pub async fn atualizar_perfil(
        &self,
        session: &SessionManager,
        payload: CadastroRequest,
    ) -> Result<Usuario> {
        let user = Self::current_user(session)?;
        self.auth
            .update_usuario(user.id_usuario, &payload, None)
            .await?;
        session.reload_user(user.id_usuario).await
    }

    /// Delete the account and end the session.
    pub async fn excluir_conta(&self, session: &SessionManager) -> Result<()> {
        let user = Self::current_user(session)?;
        self.auth.delete_usuario(user.id_usuario, None).await?;
        session.logout().await;
        Ok(())
    }

    /// Leave the current team, then reload the session; the user stays
    /// logged in with `idEquipe` cleared.
    pub async fn sair_da_equipe(&self, session: &SessionManager) -> Result<Usuario> {
        let user = Self::current_user(session)?;
        if !user.has_equipe() {
            return Err(ApiError::Validation(
                "Você não está em uma equipe.".to_string(),
            ));
        }
        self.auth.sair_da_equipe(user.id_usuario, None).await?;
        session.reload_user(user.id_usuario).await
    }
}
