pub mod server;
pub mod srv_records;

pub use server::SrvRequestHandler;
