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

use super::init_live_test;
use anyhow::Result;
use log::{debug, warn};

#[tokio::test]
async fn test_describe_db_instances() -> Result<()> {
    let Some((executor, config)) = init_live_test() else {
        warn!("RDSQUERY_AWS_RDS_TEST is not set, skipped");
        return Ok(());
    };

    let identifier = config.db_instance_identifier()?;
    let resp = executor
        .describe_db_instances(config.endpoint()?, &config.credential()?, identifier)
        .await?;
    debug!("describe db instances response: {resp:?}");

    assert_eq!(resp.db_instances.len(), 1);
    assert_eq!(resp.db_instances[0].db_instance_identifier, identifier);
    Ok(())
}

#[tokio::test]
async fn test_describe_db_instances_with_invalid_secret() -> Result<()> {
    let Some((executor, config)) = init_live_test() else {
        warn!("RDSQUERY_AWS_RDS_TEST is not set, skipped");
        return Ok(());
    };

    let mut cred = config.credential()?;
    cred.secret_access_key = "invalid_secret_access_key".to_string();

    let err = executor
        .describe_db_instances(config.endpoint()?, &cred, config.db_instance_identifier()?)
        .await
        .expect_err("request signed with a wrong secret must be rejected");
    debug!("describe db instances error: {err}");

    assert!(err.is_api_error());
    assert_eq!(err.status(), 403);
    assert_eq!(err.code(), "SignatureDoesNotMatch");
    Ok(())
}
