use crate::ports::{ContainerSnapshotProvider, HostIdentity};
use dockdns_domain::{
    match_containers, ContainerFilter, DecodedQueries, DomainError, QueryRejection, SrvAnswer,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, instrument, warn};

#[derive(Debug, Clone, Default)]
pub struct SrvResolution {
    pub answers: Vec<SrvAnswer>,
    pub rejections: Vec<QueryRejection>,
}

pub struct ResolveSrvQuestionsUseCase {
    snapshots: Arc<dyn ContainerSnapshotProvider>,
    host: Arc<dyn HostIdentity>,
    filter: ContainerFilter,
}

impl ResolveSrvQuestionsUseCase {
    pub fn new(
        snapshots: Arc<dyn ContainerSnapshotProvider>,
        host: Arc<dyn HostIdentity>,
    ) -> Self {
        Self {
            snapshots,
            host,
            filter: ContainerFilter::discoverable(),
        }
    }

    pub fn with_filter(mut self, filter: ContainerFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Resolve one request's question names into SRV answers.
    ///
    /// Malformed questions are reported in [`SrvResolution::rejections`] and
    /// never fail the request. A failed snapshot read fails the whole request.
    #[instrument(skip_all, fields(questions = questions.len()))]
    pub async fn execute<S: AsRef<str>>(
        &self,
        questions: &[S],
    ) -> Result<SrvResolution, DomainError> {
        let start = Instant::now();
        let queries = DecodedQueries::decode(questions);

        for rejection in &queries.rejections {
            warn!(question = %rejection.question, reason = %rejection.reason, "Invalid discovery question");
        }

        debug!(
            names = ?queries.names,
            labels = ?queries.labels,
            "Decoded discovery query"
        );

        let snapshot = self
            .snapshots
            .list_running(&self.filter)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to read container snapshot"))?;

        let target = self.host.target_host();
        let answers: Vec<SrvAnswer> = match_containers(&queries, &snapshot)
            .iter()
            .flat_map(|matched| {
                debug!(container = %matched.container.id, query = %matched.query_name, "Container matched");
                SrvAnswer::for_match(matched, &target)
            })
            .collect();

        debug!(
            containers = snapshot.len(),
            answers = answers.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Discovery query resolved"
        );

        Ok(SrvResolution {
            answers,
            rejections: queries.rejections,
        })
    }
}
