use flowhome_core::MembroStats;

use crate::api::TarefaApi;
use crate::fetch::{FetchSlot, FetchState};
use crate::session::SessionManager;

/// Message shown when the user has no team (or it could not be resolved).
pub const MSG_SEM_EQUIPE: &str =
    "Você precisa estar em uma equipe e ser o gestor para ver o dashboard.";

/// Message shown to team members who are not the manager.
pub const MSG_ACESSO_RESTRITO: &str = "Acesso restrito ao gestor da equipe.";

/// Team-wide totals, summed over the member aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TotaisEquipe {
    pub concluidas: u64,
    pub horas: f64,
    pub pendentes: u64,
}

/// Data backing the dashboard: the ranking plus the totals row.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    /// Member stats sorted descending by productive hours.
    pub ranking: Vec<MembroStats>,
    pub totais: TotaisEquipe,
}

impl DashboardData {
    fn from_stats(mut stats: Vec<MembroStats>) -> Self {
        stats.sort_by(|a, b| {
            b.total_horas_produtivas
                .partial_cmp(&a.total_horas_produtivas)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let totais = stats.iter().fold(TotaisEquipe::default(), |mut acc, m| {
            acc.concluidas += m.total_tarefas_concluidas;
            acc.horas += m.total_horas_produtivas;
            acc.pendentes += m.tarefas_pendentes;
            acc
        });

        Self {
            ranking: stats,
            totais,
        }
    }
}

/// Controller for the manager-only team dashboard.
pub struct DashboardController {
    tarefas: TarefaApi,
    slot: FetchSlot<DashboardData>,
}

impl DashboardController {
    pub fn new(tarefas: TarefaApi) -> Self {
        Self {
            tarefas,
            slot: FetchSlot::new(),
        }
    }

    pub fn state(&self) -> &FetchState<DashboardData> {
        self.slot.state()
    }

    /// Load the dashboard, gated on the session.
    ///
    /// While bootstrap is in progress nothing happens; no fetch, no
    /// permission verdict. Once settled, a user without a resolved team or
    /// who is not the manager gets a page-level message and the stats
    /// endpoint is never called.
    pub async fn load(&mut self, session: &SessionManager) {
        let snapshot = session.snapshot();
        if snapshot.is_loading {
            return;
        }

        let (user, equipe) = match (snapshot.user, snapshot.minha_equipe) {
            (Some(user), Some(equipe)) => (user, equipe),
            _ => {
                self.slot.set_failed(MSG_SEM_EQUIPE);
                return;
            }
        };

        if !equipe.is_gestor(user.id_usuario) {
            self.slot.set_failed(MSG_ACESSO_RESTRITO);
            return;
        }

        let handle = self.slot.begin();
        let result = self
            .tarefas
            .stats_da_equipe(equipe.id_equipe, Some(handle.token()))
            .await
            .map(DashboardData::from_stats);
        self.slot.settle(&handle, result);
    }

    /// Cancel any in-flight load.
    pub fn unload(&mut self) {
        self.slot.cancel();
    }
}
