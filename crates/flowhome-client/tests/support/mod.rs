//! In-process stub backend for integration tests.
//!
//! Implements the subset of the remote REST contract the client exercises,
//! with per-route hit counters and failure toggles.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::json;

use flowhome_core::{
    CadastroRequest, Categoria, CategoriaCreate, CategoriaUpdate, Equipe, EquipeCreate,
    EquipeUpdate, LoginRequest, MembroStats, StatusTarefa, Tarefa, TarefaCreate, TarefaUpdate,
    Usuario,
};

use flowhome_client::api::{ApiClient, AuthApi, CategoriaApi, EquipeApi, TarefaApi};
use flowhome_core::ClientConfig;

/// How the stub fails team lookups, for error-shape tests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EquipeFailure {
    #[default]
    None,
    /// 500 with a `{"message": ...}` body.
    MessageBody,
    /// 500 with a `{"error": ...}` body.
    ErrorBody,
    /// 500 with a non-JSON body.
    PlainText,
}

pub struct StoredUser {
    pub user: Usuario,
    pub senha: String,
}

#[derive(Default)]
pub struct StubState {
    pub users: Vec<StoredUser>,
    pub equipes: Vec<Equipe>,
    pub categorias: Vec<Categoria>,
    pub tarefas: Vec<Tarefa>,
    pub stats: Vec<MembroStats>,
    pub next_id: i64,
    pub hits: HashMap<&'static str, usize>,
    /// When set, list endpoints respond 200 with a literal `null` body.
    pub null_lists: bool,
    pub equipe_failure: EquipeFailure,
}

impl StubState {
    pub fn add_user(&mut self, id: i64, nome: &str, email: &str, senha: &str) -> Usuario {
        let user = Usuario {
            id_usuario: id,
            nome: nome.into(),
            email: email.into(),
            id_equipe: None,
            is_gestor: false,
        };
        self.users.push(StoredUser {
            user: user.clone(),
            senha: senha.into(),
        });
        user
    }

    fn take_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn hit(&mut self, route: &'static str) {
        *self.hits.entry(route).or_insert(0) += 1;
    }
}

type Shared = Arc<Mutex<StubState>>;

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub struct TestBackend {
    pub base_url: String,
    pub state: Shared,
}

impl TestBackend {
    pub async fn spawn(state: StubState) -> Self {
        init_tracing();
        let shared = Arc::new(Mutex::new(state));
        let app = router(shared.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state: shared,
        }
    }

    pub fn api_client(&self) -> ApiClient {
        let config = ClientConfig::with_base_url(&self.base_url);
        ApiClient::new(&config.api).unwrap()
    }

    pub fn auth_api(&self) -> AuthApi {
        AuthApi::new(self.api_client())
    }

    pub fn equipe_api(&self) -> EquipeApi {
        EquipeApi::new(self.api_client())
    }

    pub fn categoria_api(&self) -> CategoriaApi {
        CategoriaApi::new(self.api_client())
    }

    pub fn tarefa_api(&self) -> TarefaApi {
        TarefaApi::new(self.api_client())
    }

    pub fn hits(&self, route: &'static str) -> usize {
        self.state
            .lock()
            .unwrap()
            .hits
            .get(route)
            .copied()
            .unwrap_or(0)
    }

    pub fn user(&self, id: i64) -> Option<Usuario> {
        self.state
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|s| s.user.id_usuario == id)
            .map(|s| s.user.clone())
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/usuarios/login", post(login))
        .route("/usuarios", post(cadastrar))
        .route(
            "/usuarios/{id}",
            get(get_usuario).put(update_usuario).delete(delete_usuario),
        )
        .route("/usuarios/{id}/equipe/{id_equipe}", put(entrar_na_equipe))
        .route("/usuarios/{id}/equipe", axum::routing::delete(sair_da_equipe))
        .route("/usuarios/equipe/{id_equipe}", get(membros_da_equipe))
        .route("/equipes", post(create_equipe))
        .route("/equipes/gestor/{id}", get(equipes_por_gestor))
        .route("/equipes/buscar/{codigo}", get(equipe_por_codigo))
        .route(
            "/equipes/{id}",
            get(equipe_por_id).put(update_equipe).delete(delete_equipe),
        )
        .route("/categoria/usuario/{id}", get(categorias_por_usuario))
        .route("/categoria", post(create_categoria))
        .route(
            "/categoria/{id}",
            put(update_categoria).delete(delete_categoria),
        )
        .route("/tarefas/usuario/{id}", get(tarefas_por_usuario))
        .route("/tarefas", post(create_tarefa))
        .route("/tarefas/{id}", put(update_tarefa).delete(delete_tarefa))
        .route("/tarefas/{id}/stats", get(stats_do_usuario))
        .route("/tarefas/equipe/{id}/stats", get(stats_da_equipe))
        .with_state(state)
}

fn not_found(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": message })),
    )
        .into_response()
}

fn equipe_failure_response(mode: EquipeFailure) -> Option<Response> {
    match mode {
        EquipeFailure::None => None,
        EquipeFailure::MessageBody => Some(
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Banco de dados indisponível" })),
            )
                .into_response(),
        ),
        EquipeFailure::ErrorBody => Some(
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Falha interna" })),
            )
                .into_response(),
        ),
        EquipeFailure::PlainText => Some(
            (StatusCode::INTERNAL_SERVER_ERROR, "sem json aqui").into_response(),
        ),
    }
}

fn list_response<T: serde::Serialize>(null_lists: bool, items: Vec<T>) -> Response {
    if null_lists {
        Json(serde_json::Value::Null).into_response()
    } else {
        Json(items).into_response()
    }
}

async fn login(State(state): State<Shared>, Json(req): Json<LoginRequest>) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("login");

    match state
        .users
        .iter()
        .find(|s| s.user.email == req.login && s.senha == req.senha)
    {
        Some(stored) => Json(stored.user.clone()).into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Login ou senha incorretos" })),
        )
            .into_response(),
    }
}

async fn get_usuario(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("get_usuario");

    match state.users.iter().find(|s| s.user.id_usuario == id) {
        Some(stored) => Json(stored.user.clone()).into_response(),
        None => not_found("Usuário não encontrado"),
    }
}

async fn cadastrar(State(state): State<Shared>, Json(req): Json<CadastroRequest>) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("cadastrar");

    if state.users.iter().any(|s| s.user.email == req.email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "E-mail já cadastrado" })),
        )
            .into_response();
    }
    let user = Usuario {
        id_usuario: state.take_id(),
        nome: req.nome,
        email: req.email,
        id_equipe: None,
        is_gestor: false,
    };
    state.users.push(StoredUser {
        user: user.clone(),
        senha: req.senha,
    });
    (StatusCode::CREATED, Json(user)).into_response()
}

async fn update_usuario(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(req): Json<CadastroRequest>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("update_usuario");

    match state.users.iter_mut().find(|s| s.user.id_usuario == id) {
        Some(stored) => {
            stored.user.nome = req.nome;
            stored.user.email = req.email;
            stored.senha = req.senha;
            Json(stored.user.clone()).into_response()
        }
        None => not_found("Usuário não encontrado"),
    }
}

async fn delete_usuario(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("delete_usuario");

    let before = state.users.len();
    state.users.retain(|s| s.user.id_usuario != id);
    if state.users.len() == before {
        return not_found("Usuário não encontrado");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn sair_da_equipe(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("sair_da_equipe");

    match state.users.iter_mut().find(|s| s.user.id_usuario == id) {
        Some(stored) => {
            stored.user.id_equipe = None;
            stored.user.is_gestor = false;
            Json(stored.user.clone()).into_response()
        }
        None => not_found("Usuário não encontrado"),
    }
}

async fn entrar_na_equipe(
    State(state): State<Shared>,
    Path((id, id_equipe)): Path<(i64, i64)>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("entrar_na_equipe");

    if !state.equipes.iter().any(|e| e.id_equipe == id_equipe) {
        return not_found("Equipe não encontrada");
    }
    match state.users.iter_mut().find(|s| s.user.id_usuario == id) {
        Some(stored) => {
            stored.user.id_equipe = Some(id_equipe);
            Json(stored.user.clone()).into_response()
        }
        None => not_found("Usuário não encontrado"),
    }
}

async fn membros_da_equipe(State(state): State<Shared>, Path(id_equipe): Path<i64>) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("membros_da_equipe");

    let membros: Vec<Usuario> = state
        .users
        .iter()
        .filter(|s| s.user.id_equipe == Some(id_equipe))
        .map(|s| s.user.clone())
        .collect();
    list_response(state.null_lists, membros)
}

async fn create_equipe(State(state): State<Shared>, Json(req): Json<EquipeCreate>) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("create_equipe");

    let id = state.take_id();
    let equipe = Equipe {
        id_equipe: id,
        nome_equipe: req.nome_equipe,
        codigo_equipe: format!("EQ{:04X}", id * 613),
        id_gestor: req.id_gestor,
        dt_criacao: Utc::now(),
    };
    state.equipes.push(equipe.clone());

    // Creating a team links the manager to it.
    if let Some(stored) = state
        .users
        .iter_mut()
        .find(|s| s.user.id_usuario == equipe.id_gestor)
    {
        stored.user.id_equipe = Some(equipe.id_equipe);
        stored.user.is_gestor = true;
    }

    (StatusCode::CREATED, Json(equipe)).into_response()
}

async fn equipes_por_gestor(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("equipes_por_gestor");

    if let Some(response) = equipe_failure_response(state.equipe_failure) {
        return response;
    }
    let equipes: Vec<Equipe> = state
        .equipes
        .iter()
        .filter(|e| e.id_gestor == id)
        .cloned()
        .collect();
    list_response(state.null_lists, equipes)
}

async fn equipe_por_codigo(State(state): State<Shared>, Path(codigo): Path<String>) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("equipe_por_codigo");

    match state.equipes.iter().find(|e| e.codigo_equipe == codigo) {
        Some(equipe) => Json(equipe.clone()).into_response(),
        None => not_found("Equipe não encontrada"),
    }
}

async fn equipe_por_id(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("equipe_por_id");

    if let Some(response) = equipe_failure_response(state.equipe_failure) {
        return response;
    }
    match state.equipes.iter().find(|e| e.id_equipe == id) {
        Some(equipe) => Json(equipe.clone()).into_response(),
        None => not_found("Equipe não encontrada"),
    }
}

async fn update_equipe(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(req): Json<EquipeUpdate>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("update_equipe");

    match state.equipes.iter_mut().find(|e| e.id_equipe == id) {
        Some(equipe) => {
            equipe.nome_equipe = req.nome_equipe;
            Json(equipe.clone()).into_response()
        }
        None => not_found("Equipe não encontrada"),
    }
}

async fn delete_equipe(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("delete_equipe");

    let before = state.equipes.len();
    state.equipes.retain(|e| e.id_equipe != id);
    if state.equipes.len() == before {
        return not_found("Equipe não encontrada");
    }
    // Deleting a team unlinks everyone still in it.
    state.users.iter_mut().for_each(|s| {
        if s.user.id_equipe == Some(id) {
            s.user.id_equipe = None;
            s.user.is_gestor = false;
        }
    });
    StatusCode::NO_CONTENT.into_response()
}

async fn categorias_por_usuario(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("categorias_por_usuario");

    let categorias: Vec<Categoria> = state
        .categorias
        .iter()
        .filter(|c| c.id_usuario == id)
        .cloned()
        .collect();
    list_response(state.null_lists, categorias)
}

async fn create_categoria(
    State(state): State<Shared>,
    Json(req): Json<CategoriaCreate>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("create_categoria");

    let categoria = Categoria {
        id_categoria: state.take_id(),
        nome: req.nome,
        cor_hex: req.cor_hex,
        id_usuario: req.id_usuario,
    };
    state.categorias.push(categoria.clone());
    (StatusCode::CREATED, Json(categoria)).into_response()
}

async fn update_categoria(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(req): Json<CategoriaUpdate>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("update_categoria");

    match state.categorias.iter_mut().find(|c| c.id_categoria == id) {
        Some(categoria) => {
            categoria.nome = req.nome;
            categoria.cor_hex = req.cor_hex;
            Json(categoria.clone()).into_response()
        }
        None => not_found("Categoria não encontrada"),
    }
}

async fn delete_categoria(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("delete_categoria");

    let before = state.categorias.len();
    state.categorias.retain(|c| c.id_categoria != id);
    if state.categorias.len() == before {
        return not_found("Categoria não encontrada");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn tarefas_por_usuario(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("tarefas_por_usuario");

    let tarefas: Vec<Tarefa> = state
        .tarefas
        .iter()
        .filter(|t| t.id_usuario == id)
        .cloned()
        .collect();
    list_response(state.null_lists, tarefas)
}

async fn create_tarefa(State(state): State<Shared>, Json(req): Json<TarefaCreate>) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("create_tarefa");

    let tarefa = Tarefa {
        id_tarefa: state.take_id(),
        titulo: req.titulo,
        descricao: req.descricao,
        id_categoria: req.id_categoria,
        dt_vencimento: req.dt_vencimento,
        tempo_estimado_h: req.tempo_estimado_h,
        status: StatusTarefa::Pendente,
        id_usuario: req.id_usuario,
        dt_criacao: Utc::now(),
        dt_conclusao: None,
    };
    state.tarefas.push(tarefa.clone());
    (StatusCode::CREATED, Json(tarefa)).into_response()
}

async fn update_tarefa(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(req): Json<TarefaUpdate>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("update_tarefa");

    match state.tarefas.iter_mut().find(|t| t.id_tarefa == id) {
        Some(tarefa) => {
            tarefa.titulo = req.titulo;
            tarefa.descricao = req.descricao;
            tarefa.id_categoria = req.id_categoria;
            tarefa.dt_vencimento = req.dt_vencimento;
            tarefa.tempo_estimado_h = req.tempo_estimado_h;
            tarefa.status = req.status;
            if req.status == StatusTarefa::Concluida && tarefa.dt_conclusao.is_none() {
                tarefa.dt_conclusao = Some(Utc::now());
            }
            Json(tarefa.clone()).into_response()
        }
        None => not_found("Tarefa não encontrada"),
    }
}

async fn delete_tarefa(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("delete_tarefa");

    let before = state.tarefas.len();
    state.tarefas.retain(|t| t.id_tarefa != id);
    if state.tarefas.len() == before {
        return not_found("Tarefa não encontrada");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn stats_da_equipe(State(state): State<Shared>, Path(_id): Path<i64>) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("stats_da_equipe");

    let stats = state.stats.clone();
    list_response(state.null_lists, stats)
}

async fn stats_do_usuario(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = state.lock().unwrap();
    state.hit("stats_do_usuario");

    match state.stats.iter().find(|s| s.id_usuario == id) {
        Some(stats) => Json(json!({
            "totalTarefasConcluidas": stats.total_tarefas_concluidas,
            "totalHorasProdutivas": stats.total_horas_produtivas,
            "tarefasPendentes": stats.tarefas_pendentes,
        }))
        .into_response(),
        None => not_found("Usuário não encontrado"),
    }
}
