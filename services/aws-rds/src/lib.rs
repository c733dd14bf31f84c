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

//! AWS RDS Query API support for rdsquery.
//!
//! This crate signs requests with AWS Signature Version 2 (`HmacSHA256`),
//! sends them through the [`rdsquery_core::HttpSend`] configured on the
//! [`rdsquery_core::Context`] and decodes the XML responses.
//!
//! ## Example
//!
//! ```no_run
//! use rdsquery_aws_rds::{Credential, QueryExecutor};
//! use rdsquery_core::Context;
//!
//! # async fn example(ctx: Context) -> rdsquery_core::Result<()> {
//! let executor = QueryExecutor::new(ctx);
//! let cred = Credential::new("access_key_id", "secret_access_key");
//!
//! let resp = executor
//!     .describe_db_instances("https://rds.us-east-1.amazonaws.com", &cred, "mydb")
//!     .await?;
//! for instance in resp.db_instances {
//!     println!("{} is {}", instance.db_instance_identifier, instance.db_instance_status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Signing only
//!
//! [`RequestSigner`] can be used on its own when the request is sent by
//! other means:
//!
//! ```
//! use http::Method;
//! use rdsquery_aws_rds::{Credential, ParameterSet, RequestSigner};
//!
//! let params = ParameterSet::new()
//!     .with("Action", "DescribeDBInstances")
//!     .with("Version", "2014-10-31")
//!     .with("Timestamp", "2014-10-31T12:00:00Z");
//! let cred = Credential::new("access_key_id", "secret_access_key");
//!
//! let signed = RequestSigner::new().sign(&params, &cred, &Method::GET, "/", "rds.example.com");
//! assert!(!signed.signature().is_empty());
//! ```

#![warn(missing_docs)]

mod constants;
pub use constants::API_VERSION;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod encode;
pub use encode::encode;
pub use encode::is_unreserved;

mod params;
pub use params::ParameterSet;
pub use params::SignedParameters;

mod sign_request;
pub use sign_request::canonical_query_string;
pub use sign_request::string_to_sign;
pub use sign_request::RequestSigner;

mod decode;
pub use decode::decode_error;
pub use decode::decode_success;
pub use decode::DbInstance;
pub use decode::DescribeDbInstancesResponse;

mod query;
pub use query::QueryExecutor;
