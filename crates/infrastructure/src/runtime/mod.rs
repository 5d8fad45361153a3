pub mod container_json;
pub mod docker_client;

pub use docker_client::DockerEngineClient;
