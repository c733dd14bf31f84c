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

use crate::aws_rds::{Config, Credential, DescribeDbInstancesResponse, QueryExecutor};
use log::debug;
use rdsquery_core::{Context, Error, Result};

/// The four inputs of the describe instances activity.
#[derive(Clone, Default)]
pub struct DescribeDbInstancesInput {
    /// Endpoint of the RDS Query API, like `https://rds.us-east-1.amazonaws.com`.
    pub rds_endpoint: String,
    /// Access key id used to sign the request.
    pub access_key: String,
    /// Secret access key used to sign the request.
    pub secret_key: String,
    /// Identifier of the instance to describe.
    pub db_instance_identifier: String,
}

impl std::fmt::Debug for DescribeDbInstancesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescribeDbInstancesInput")
            .field("rds_endpoint", &self.rds_endpoint)
            .field("credential", &self.credential())
            .field("db_instance_identifier", &self.db_instance_identifier)
            .finish()
    }
}

impl DescribeDbInstancesInput {
    fn credential(&self) -> Credential {
        Credential::new(&self.access_key, &self.secret_key)
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("rds_endpoint", &self.rds_endpoint),
            ("access_key", &self.access_key),
            ("secret_key", &self.secret_key),
            ("db_instance_identifier", &self.db_instance_identifier),
        ] {
            if value.is_empty() {
                return Err(Error::config_invalid(format!("input {name} is required")));
            }
        }
        Ok(())
    }
}

impl TryFrom<&Config> for DescribeDbInstancesInput {
    type Error = Error;

    fn try_from(config: &Config) -> Result<Self> {
        let cred = config.credential()?;

        Ok(Self {
            rds_endpoint: config.endpoint()?.to_string(),
            access_key: cred.access_key_id,
            secret_key: cred.secret_access_key,
            db_instance_identifier: config.db_instance_identifier()?.to_string(),
        })
    }
}

/// Output of an activity run.
#[derive(Debug)]
pub struct ActivityOutput {
    /// Whether the activity finished. Always `true` once [`eval`] returns.
    pub done: bool,
    /// Outcome of the query.
    pub result: Result<DescribeDbInstancesResponse>,
}

/// Run the describe instances activity.
///
/// The activity reports `done` whether the query succeeded or not, the
/// error is kept in [`ActivityOutput::result`] for the caller to inspect.
pub async fn eval(ctx: &Context, input: &DescribeDbInstancesInput) -> ActivityOutput {
    let result = run(ctx, input).await;
    if let Err(err) = &result {
        debug!("describe db instances activity failed: {err}");
    }

    ActivityOutput { done: true, result }
}

async fn run(ctx: &Context, input: &DescribeDbInstancesInput) -> Result<DescribeDbInstancesResponse> {
    input.validate()?;
    debug!(
        "describing db instance {} at {}",
        input.db_instance_identifier, input.rds_endpoint
    );

    QueryExecutor::new(ctx.clone())
        .describe_db_instances(
            &input.rds_endpoint,
            &input.credential(),
            &input.db_instance_identifier,
        )
        .await
}
