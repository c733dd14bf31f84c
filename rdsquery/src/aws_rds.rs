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

//! AWS RDS query support with convenience APIs.

pub use rdsquery_aws_rds::*;

#[cfg(feature = "default-context")]
use crate::{default_context, default_context_with_timeout};
#[cfg(feature = "default-context")]
use rdsquery_core::Result;

/// Create an executor on top of [`default_context`].
///
/// # Example
///
/// ```no_run
/// # async fn example() -> rdsquery_core::Result<()> {
/// use rdsquery::aws_rds::{default_executor, Credential};
///
/// let cred = Credential::new("access_key_id", "secret_access_key");
/// let resp = default_executor()
///     .describe_db_instances("https://rds.us-east-1.amazonaws.com", &cred, "mydb")
///     .await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_executor() -> QueryExecutor {
    QueryExecutor::new(default_context())
}

/// Create an executor from `config`.
///
/// The executor applies `config.timeout` to every request and sends
/// `config.api_version` if set.
#[cfg(feature = "default-context")]
pub fn executor_from_config(config: &Config) -> Result<QueryExecutor> {
    let ctx = match config.timeout {
        Some(timeout) => default_context_with_timeout(timeout)?,
        None => default_context(),
    };

    Ok(QueryExecutor::new(ctx).with_api_version(config.api_version()))
}

/// Load [`Config`] from the environment of the default context.
#[cfg(feature = "default-context")]
pub fn config_from_env() -> Config {
    Config::default().from_env(&default_context())
}
