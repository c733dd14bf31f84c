//! [`HttpSend`] implementation backed by [`reqwest`].
//!
//! ```no_run
//! use rdsquery_core::Context;
//! use rdsquery_http_send_reqwest::ReqwestHttpSend;
//! use std::time::Duration;
//!
//! # fn main() -> rdsquery_core::Result<()> {
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::with_timeout(Duration::from_secs(10))?);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use rdsquery_core::{Error, HttpSend};
use reqwest::{Client, Request};
use std::time::Duration;

/// ReqwestHttpSend sends requests with a [`reqwest::Client`].
///
/// No timeout is applied by default. Use [`ReqwestHttpSend::with_timeout`] or
/// pass a configured client to [`ReqwestHttpSend::new`] to bound latency.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a new ReqwestHttpSend whose requests fail after `timeout`.
    pub fn with_timeout(timeout: Duration) -> rdsquery_core::Result<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            Error::config_invalid("failed to build http client with timeout").with_source(e)
        })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    /// Errors never carry the request url, its query holds the signature.
    async fn http_send(&self, req: http::Request<Bytes>) -> anyhow::Result<http::Response<Bytes>> {
        let req = Request::try_from(req).map_err(reqwest::Error::without_url)?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(reqwest::Error::without_url)?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(reqwest::Error::without_url)?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
