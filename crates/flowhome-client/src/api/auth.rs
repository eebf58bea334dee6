use tokio_util::sync::CancellationToken;

use flowhome_core::{ApiError, CadastroRequest, LoginRequest, Result, Usuario};

use crate::http::ApiClient;

/// Resource client for the `/usuarios` family: authentication, identity,
/// and team membership links.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Authenticate with login + password. A 401 is mapped to a
    /// credentials message rather than the raw backend text.
    pub async fn login(
        &self,
        data: &LoginRequest,
        cancel: Option<&CancellationToken>,
    ) -> Result<Usuario> {
        self.client
            .post_json("/usuarios/login", data, cancel)
            .await
            .map_err(|e| match e {
                ApiError::Unauthorized(_) => {
                    ApiError::Unauthorized("Credenciais inválidas".to_string())
                }
                other => other,
            })
    }

    /// Register a new user.
    pub async fn cadastrar(
        &self,
        data: &CadastroRequest,
        cancel: Option<&CancellationToken>,
    ) -> Result<Usuario> {
        self.client.post_json("/usuarios", data, cancel).await
    }

    /// Fetch a user by id.
    pub async fn get_usuario(
        &self,
        id: i64,
        cancel: Option<&CancellationToken>,
    ) -> Result<Usuario> {
        self.client
            .get_json(&format!("/usuarios/{}", id), cancel)
            .await
    }

    /// Update a user's profile.
    pub async fn update_usuario(
        &self,
        id: i64,
        data: &CadastroRequest,
        cancel: Option<&CancellationToken>,
    ) -> Result<Usuario> {
        self.client
            .put_json(&format!("/usuarios/{}", id), data, cancel)
            .await
    }

    /// Delete a user account.
    pub async fn delete_usuario(&self, id: i64, cancel: Option<&CancellationToken>) -> Result<()> {
        self.client
            .delete_empty(&format!("/usuarios/{}", id), cancel)
            .await
    }

    /// List the members of a team. Never resolves to null.
    pub async fn membros_da_equipe(
        &self,
        id_equipe: i64,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<Usuario>> {
        self.client
            .get_list(&format!("/usuarios/equipe/{}", id_equipe), cancel)
            .await
    }

    /// Link a user to a team, returning the updated user.
    pub async fn entrar_na_equipe(
        &self,
        id_usuario: i64,
        id_equipe: i64,
        cancel: Option<&CancellationToken>,
    ) -> Result<Usuario> {
        self.client
            .put_empty(
                &format!("/usuarios/{}/equipe/{}", id_usuario, id_equipe),
                cancel,
            )
            .await
    }

    /// Unlink a user from their team, returning the updated user.
    pub async fn sair_da_equipe(
        &self,
        id_usuario: i64,
        cancel: Option<&CancellationToken>,
    ) -> Result<Usuario> {
        self.client
            .delete_json(&format!("/usuarios/{}/equipe", id_usuario), cancel)
            .await
    }
}
