use super::srv_records::to_srv_record;
use dockdns_application::use_cases::ResolveSrvQuestionsUseCase;
use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Answers discovery questions with SRV records built from the live container set.
#[derive(Clone)]
pub struct SrvRequestHandler {
    use_case: Arc<ResolveSrvQuestionsUseCase>,
}

impl SrvRequestHandler {
    pub fn new(use_case: Arc<ResolveSrvQuestionsUseCase>) -> Self {
        Self { use_case }
    }

    fn normalize_name(name: &str) -> String {
        name.trim_end_matches('.').to_string()
    }

    /// Question names as the client sent them, without the root dot.
    pub fn question_names(request: &Request) -> Vec<String> {
        request
            .queries()
            .iter()
            .map(|query| Self::normalize_name(&query.original().name().to_ascii()))
            .collect()
    }
}

#[async_trait::async_trait]
impl RequestHandler for SrvRequestHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let questions = Self::question_names(request);
        let client = request.src();

        info!(client = %client, questions = ?questions, "Discovery query received");

        let resolution = match self.use_case.execute(questions.as_slice()).await {
            Ok(resolution) => resolution,
            Err(e) => {
                error!(client = %client, error = %e, "Discovery query failed");
                return send_response(request, &mut response_handle, ResponseCode::ServFail, &[])
                    .await;
            }
        };

        let mut answers: Vec<Record> = Vec::with_capacity(resolution.answers.len());
        for answer in &resolution.answers {
            match to_srv_record(answer) {
                Ok(record) => answers.push(record),
                Err(e) => warn!(name = %answer.name, error = %e, "Skipping unencodable SRV answer"),
            }
        }

        debug!(
            client = %client,
            answers = answers.len(),
            rejected = resolution.rejections.len(),
            "Sending discovery response"
        );

        send_response(request, &mut response_handle, ResponseCode::NoError, &answers).await
    }
}

async fn send_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
    answers: &[Record],
) -> ResponseInfo {
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = Header::response_from_request(request.header());
    header.set_authoritative(true);
    header.set_response_code(code);
    let response = builder.build(header, answers.iter(), &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, code = ?code, "Failed to send response");
            let mut header = Header::response_from_request(request.header());
            header.set_response_code(ResponseCode::ServFail);
            ResponseInfo::from(header)
        }
    }
}
