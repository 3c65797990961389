// src/core/net.rs
//
// Blocking HTTP GET. Status codes are returned, not raised, so the caller
// decides what a non-200 means (the scraper skips the unit and moves on).

use std::{error::Error, time::Duration};

use crate::config::consts::USER_AGENT;

pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn is_ok(&self) -> bool { self.status == 200 }
}

/// One GET per call. Implemented by the real client and by test doubles.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<Response, Box<dyn Error>>;
}

pub struct HttpClient {
    agent: ureq::Agent,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();
        Self { agent }
    }
}

impl Fetch for HttpClient {
    fn get(&self, url: &str) -> Result<Response, Box<dyn Error>> {
        let t = std::time::Instant::now();
        let result = self.agent
            .get(url)
            .set("Accept-Language", "en-US,en;q=0.9")
            .call();

        let resp = match result {
            Ok(resp) => resp,
            // 4xx/5xx still carry a response; surface the code
            Err(ureq::Error::Status(code, resp)) => {
                logd!("GET {url} -> {code} in {:?}", t.elapsed());
                return Ok(Response { status: code, body: resp.into_string().unwrap_or_default() });
            }
            Err(e) => return Err(Box::new(e)),
        };

        let status = resp.status();
        let body = resp.into_string()?;
        logd!("GET {url} -> {status} ({} bytes) in {:?}", body.len(), t.elapsed());
        Ok(Response { status, body })
    }
}
