use flowhome_core::{ApiError, Equipe, EquipeCreate, Result, Usuario};

use crate::api::{AuthApi, EquipeApi};
use crate::fetch::{FetchSlot, FetchState};
use crate::session::SessionManager;

/// Data backing the team page: the user's team (if resolvable) and its
/// member list.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipeData {
    pub minha_equipe: Option<Equipe>,
    pub membros: Vec<Usuario>,
}

/// Controller for the team page: shows the current team or offers the
/// create/join-by-code forms.
pub struct EquipeController {
    auth: AuthApi,
    equipes: EquipeApi,
    slot: FetchSlot<EquipeData>,
}

impl EquipeController {
    pub fn new(auth: AuthApi, equipes: EquipeApi) -> Self {
        Self {
            auth,
            equipes,
            slot: FetchSlot::new(),
        }
    }

    pub fn state(&self) -> &FetchState<EquipeData> {
        self.slot.state()
    }

    /// Load the user's team and its members. A user without a team settles
    /// on empty data; the page then offers the create/join forms.
    pub async fn load(&mut self, user: &Usuario) {
        let handle = self.slot.begin();

        let id_equipe = match user.id_equipe {
            Some(id) => id,
            None => {
                self.slot.settle(
                    &handle,
                    Ok(EquipeData {
                        minha_equipe: None,
                        membros: Vec::new(),
                    }),
                );
                return;
            }
        };

        let result = async {
            let minha_equipe = if user.is_gestor {
                self.equipes
                    .por_gestor(user.id_usuario, Some(handle.token()))
                    .await?
                    .into_iter()
                    .find(|e| e.id_equipe == id_equipe)
            } else {
                Some(self.equipes.por_id(id_equipe, Some(handle.token())).await?)
            };
            let membros = self
                .auth
                .membros_da_equipe(id_equipe, Some(handle.token()))
                .await?;

            Ok(EquipeData {
                minha_equipe,
                membros,
            })
        }
        .await;

        self.slot.settle(&handle, result);
    }

    /// Cancel any in-flight load.
    pub fn unload(&mut self) {
        self.slot.cancel();
    }

    /// Create a team with the session user as manager, then reload the
    /// session so the new `idEquipe` and resolved team land everywhere.
    pub async fn criar_equipe(&mut self, session: &SessionManager, nome: &str) -> Result<Equipe> {
        let nome = nome.trim();
        if nome.is_empty() {
            return Err(ApiError::Validation(
                "O nome da equipe é obrigatório.".to_string(),
            ));
        }
        let user = session
            .snapshot()
            .user
            .ok_or_else(|| ApiError::Unauthorized("Sessão expirada".to_string()))?;

        let nova = self
            .equipes
            .create(
                &EquipeCreate {
                    nome_equipe: nome.to_string(),
                    id_gestor: user.id_usuario,
                },
                None,
            )
            .await?;

        let user = session.reload_user(user.id_usuario).await?;
        self.load(&user).await;

        Ok(nova)
    }

    /// Join a team by invite code: resolve the code to a team, link the
    /// user to it, then reload the session. The three calls are sequential
    /// because each depends on the previous result.
    pub async fn entrar_com_codigo(
        &mut self,
        session: &SessionManager,
        codigo: &str,
    ) -> Result<Equipe> {
        let codigo = codigo.trim();
        if codigo.is_empty() {
            return Err(ApiError::Validation("O código é obrigatório.".to_string()));
        }
        let user = session
            .snapshot()
            .user
            .ok_or_else(|| ApiError::Unauthorized("Sessão expirada".to_string()))?;

        let equipe = self.equipes.por_codigo(codigo, None).await.map_err(|e| {
            match e {
                ApiError::NotFound(_) => {
                    ApiError::NotFound("Código inválido ou equipe não encontrada.".to_string())
                }
                other => other,
            }
        })?;

        self.auth
            .entrar_na_equipe(user.id_usuario, equipe.id_equipe, None)
            .await?;

        let user = session.reload_user(user.id_usuario).await?;
        self.load(&user).await;

        Ok(equipe)
    }
}
