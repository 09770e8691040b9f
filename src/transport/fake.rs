use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::{BoxFuture, HttpRequest, HttpResponse, HttpTransport, TransportError};

#[derive(Debug, Clone)]
enum FakeReply {
    Response { status: u16, body: String },
    Timeout,
}

/// In-memory transport: records every request and answers from a queue.
/// The last queued reply repeats once the queue is down to one entry.
#[derive(Debug, Clone)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    requests: Vec<HttpRequest>,
    replies: VecDeque<FakeReply>,
}

impl FakeTransport {
    pub(crate) fn new(status: u16, body: impl Into<String>) -> Self {
        Self::with_reply(FakeReply::Response {
            status,
            body: body.into(),
        })
    }

    pub(crate) fn timing_out() -> Self {
        Self::with_reply(FakeReply::Timeout)
    }

    /// Queue another reply after the ones already configured.
    pub(crate) fn then(self, status: u16, body: impl Into<String>) -> Self {
        self.state
            .lock()
            .unwrap()
            .replies
            .push_back(FakeReply::Response {
                status,
                body: body.into(),
            });
        self
    }

    fn with_reply(reply: FakeReply) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                requests: Vec::new(),
                replies: VecDeque::from([reply]),
            })),
        }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests()
            .pop()
            .expect("no request reached the transport")
    }

    pub(crate) fn last_json_body(&self) -> Value {
        let body = self.last_request().body.expect("request had no body");
        serde_json::from_slice(&body).unwrap()
    }

    pub(crate) fn last_header(&self, name: &str) -> Option<String> {
        self.last_request()
            .headers
            .get(name)
            .map(|value| value.to_str().unwrap().to_owned())
    }
}

impl HttpTransport for FakeTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
        Box::pin(async move {
            let reply = {
                let mut state = self.state.lock().unwrap();
                state.requests.push(request);
                if state.replies.len() > 1 {
                    state.replies.pop_front()
                } else {
                    state.replies.front().cloned()
                }
            };
            match reply {
                Some(FakeReply::Response { status, body }) => Ok(HttpResponse { status, body }),
                Some(FakeReply::Timeout) => Err(TransportError::Timeout(Box::new(io::Error::new(
                    io::ErrorKind::TimedOut,
                    "fake timeout",
                )))),
                None => Err(TransportError::Other("no reply queued".into())),
            }
        })
    }
}
