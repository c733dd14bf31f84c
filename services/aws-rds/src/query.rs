// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::{
    ACTION, ACTION_DESCRIBE_DB_INSTANCES, API_VERSION, DB_INSTANCE_IDENTIFIER, TIMESTAMP, VERSION,
};
use crate::decode::{decode_error, decode_success};
use crate::{Credential, DescribeDbInstancesResponse, ParameterSet, RequestSigner};
use bytes::Bytes;
use http::uri::{Authority, Scheme};
use http::{Method, Request, Uri};
use log::debug;
use rdsquery_core::time::{format_rfc3339, now, DateTime};
use rdsquery_core::{Context, Error, Result};
use serde::de::DeserializeOwned;

/// QueryExecutor sends signed requests to the RDS Query API.
///
/// Each call builds its own parameters and request, so one executor can be
/// shared by concurrent callers.
#[derive(Debug, Clone)]
pub struct QueryExecutor {
    ctx: Context,
    signer: RequestSigner,
    api_version: String,

    time: Option<DateTime>,
}

impl QueryExecutor {
    /// Create a new executor that sends requests through `ctx`.
    pub fn new(ctx: Context) -> Self {
        Self {
            ctx,
            signer: RequestSigner::new(),
            api_version: API_VERSION.to_string(),

            time: None,
        }
    }

    /// Override the API version sent as `Version`.
    pub fn with_api_version(mut self, version: &str) -> Self {
        self.api_version = version.to_string();
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Describe the instance named `db_instance_identifier`.
    pub async fn describe_db_instances(
        &self,
        endpoint: &str,
        cred: &Credential,
        db_instance_identifier: &str,
    ) -> Result<DescribeDbInstancesResponse> {
        let params = ParameterSet::new()
            .with(ACTION, ACTION_DESCRIBE_DB_INSTANCES)
            .with(DB_INSTANCE_IDENTIFIER, db_instance_identifier);

        self.query(params, endpoint, cred).await
    }

    /// Send one signed `GET` with `params` and decode the response into `T`.
    ///
    /// `Version` and `Timestamp` are added to `params` before signing.
    pub async fn query<T: DeserializeOwned>(
        &self,
        params: ParameterSet,
        endpoint: &str,
        cred: &Credential,
    ) -> Result<T> {
        let req = self.build_request(params, endpoint, cred)?;
        let host = req.uri().host().unwrap_or_default().to_string();

        // The cause stays in `source` only: transports may echo the signed url.
        let resp = self
            .ctx
            .http_send(req)
            .await
            .map_err(|e| Error::transport(format!("failed to send request to {host}")).with_source(e))?;

        let (parts, body) = resp.into_parts();
        debug!("got response from {host} with status {}", parts.status);

        if parts.status.is_success() {
            decode_success(&body)
        } else {
            Err(decode_error(parts.status, &body))
        }
    }

    /// Build the signed request without sending it.
    pub fn build_request(
        &self,
        params: ParameterSet,
        endpoint: &str,
        cred: &Credential,
    ) -> Result<Request<Bytes>> {
        if !cred.is_valid() {
            return Err(Error::config_invalid(
                "credential must have both access key id and secret access key",
            ));
        }

        let now = self.time.unwrap_or_else(now);
        let params = params
            .with(VERSION, &self.api_version)
            .with(TIMESTAMP, format_rfc3339(now));

        let endpoint = Endpoint::parse(endpoint)?;
        let signed = self
            .signer
            .sign(&params, cred, &Method::GET, "/", &endpoint.host);

        let uri = format!(
            "{}://{}/?{}",
            endpoint.scheme,
            endpoint.authority,
            signed.to_query_string()
        );
        debug!(
            "built {} request for {}",
            signed.get(ACTION).unwrap_or_default(),
            endpoint.host
        );

        Ok(Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Bytes::new())?)
    }
}

/// Endpoint of the query API.
#[derive(Debug)]
struct Endpoint {
    scheme: Scheme,
    authority: Authority,
    /// Host with explicit port, as used in the string to sign.
    host: String,
}

impl Endpoint {
    fn parse(s: &str) -> Result<Self> {
        let uri: Uri = s.parse().map_err(|e| {
            Error::malformed_endpoint(format!("invalid endpoint {s:?}")).with_source(e)
        })?;

        let scheme = match uri.scheme_str() {
            Some("http") => Scheme::HTTP,
            Some("https") => Scheme::HTTPS,
            Some(v) => {
                return Err(Error::malformed_endpoint(format!(
                    "endpoint {s:?} has unsupported scheme {v:?}"
                )))
            }
            None => {
                return Err(Error::malformed_endpoint(format!(
                    "endpoint {s:?} has no scheme"
                )))
            }
        };

        let authority = uri
            .authority()
            .filter(|v| !v.host().is_empty())
            .cloned()
            .ok_or_else(|| Error::malformed_endpoint(format!("endpoint {s:?} has no host")))?;

        let host = match authority.port() {
            Some(port) => format!("{}:{}", authority.host(), port),
            None => authority.host().to_string(),
        };

        Ok(Self {
            scheme,
            authority,
            host,
        })
    }
}
