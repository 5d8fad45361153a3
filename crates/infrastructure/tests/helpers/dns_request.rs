#![allow(dead_code)]

use async_trait::async_trait;
use dockdns_application::ports::{ContainerSnapshotProvider, HostIdentity};
use dockdns_domain::{Container, ContainerFilter, DomainError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, Record, RecordType};
use hickory_proto::serialize::binary::{BinDecodable, BinEncoder};
use hickory_proto::xfer::Protocol;
use hickory_server::authority::{MessageRequest, MessageResponse};
use hickory_server::server::{Request, ResponseHandler, ResponseInfo};
use std::io;
use std::sync::{Arc, Mutex};

/// Build a server-side request carrying one SRV question per name, case kept as given.
pub fn srv_request(names: &[&str]) -> Request {
    let mut message = Message::new();
    message
        .set_id(4242)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    for name in names {
        message.add_query(Query::query(
            Name::from_ascii(name).unwrap(),
            RecordType::SRV,
        ));
    }

    let bytes = message.to_vec().unwrap();
    let request = MessageRequest::from_bytes(&bytes).unwrap();
    Request::new(request, "127.0.0.1:53000".parse().unwrap(), Protocol::Udp)
}

/// Response handler that encodes the response and keeps the decoded message.
#[derive(Clone, Default)]
pub struct CapturingResponseHandler {
    sent: Arc<Mutex<Option<Message>>>,
}

impl CapturingResponseHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn response(&self) -> Message {
        self.sent
            .lock()
            .unwrap()
            .clone()
            .expect("no response was sent")
    }
}

#[async_trait]
impl ResponseHandler for CapturingResponseHandler {
    async fn send_response<'a>(
        &mut self,
        response: MessageResponse<
            '_,
            'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
        >,
    ) -> io::Result<ResponseInfo> {
        let mut buffer = Vec::with_capacity(512);
        let info = {
            let mut encoder = BinEncoder::new(&mut buffer);
            response
                .destructive_emit(&mut encoder)
                .map_err(io::Error::other)?
        };
        let message = Message::from_vec(&buffer).map_err(io::Error::other)?;
        *self.sent.lock().unwrap() = Some(message);
        Ok(info)
    }
}

/// Snapshot provider returning a fixed container list or a fixed error.
pub struct StaticSnapshot {
    result: Result<Vec<Container>, DomainError>,
}

impl StaticSnapshot {
    pub fn containers(containers: Vec<Container>) -> Self {
        Self {
            result: Ok(containers),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl ContainerSnapshotProvider for StaticSnapshot {
    async fn list_running(&self, _filter: &ContainerFilter) -> Result<Vec<Container>, DomainError> {
        self.result.clone()
    }
}

pub struct FixedHost(pub Arc<str>);

impl HostIdentity for FixedHost {
    fn target_host(&self) -> Arc<str> {
        Arc::clone(&self.0)
    }
}
