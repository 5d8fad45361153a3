use dockdns_application::use_cases::ResolveSrvQuestionsUseCase;
use dockdns_domain::Config;
use dockdns_infrastructure::dns::SrvRequestHandler;
use dockdns_infrastructure::runtime::DockerEngineClient;
use dockdns_infrastructure::system::SystemHostIdentity;
use std::sync::Arc;
use tracing::info;

pub struct DiscoveryServices {
    pub handler: SrvRequestHandler,
}

impl DiscoveryServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let runtime = Arc::new(DockerEngineClient::from_config(&config.runtime));
        let host = Arc::new(SystemHostIdentity::resolve(
            config.answer.target_host.as_deref(),
        )?);

        info!(
            socket = %config.runtime.socket_path,
            api_version = %config.runtime.api_version,
            timeout_ms = config.runtime.timeout_ms,
            "Container runtime client configured"
        );

        let use_case = Arc::new(ResolveSrvQuestionsUseCase::new(runtime, host));

        Ok(Self {
            handler: SrvRequestHandler::new(use_case),
        })
    }
}
