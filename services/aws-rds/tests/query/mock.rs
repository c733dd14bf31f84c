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

use super::{init_executor, test_credential, TEST_ACCESS_KEY_ID};
use anyhow::Result;
use http::Method;
use pretty_assertions::assert_eq;
use rdsquery_aws_rds::{ParameterSet, RequestSigner};
use rdsquery_core::ErrorKind;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DESCRIBE_DB_INSTANCES: &str = include_str!("../../testdata/describe_db_instances.xml");
const MALFORMED_BODY: &str = "<DescribeDBInstancesResponse><DescribeDBInstancesResult><DBInstances><DBInstance>\
             <Endpoint><Port>not-a-port</Port></Endpoint>\
             </DBInstance></DBInstances></DescribeDBInstancesResult></DescribeDBInstancesResponse>";

#[tokio::test]
async fn test_describe_db_instances() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("Action", "DescribeDBInstances"))
        .and(query_param("Version", "2014-10-31"))
        .and(query_param("DBInstanceIdentifier", "mydb"))
        .and(query_param("AWSAccessKeyId", TEST_ACCESS_KEY_ID))
        .and(query_param("SignatureVersion", "2"))
        .and(query_param("SignatureMethod", "HmacSHA256"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/xml")
                .set_body_string(DESCRIBE_DB_INSTANCES),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resp = init_executor()?
        .describe_db_instances(&server.uri(), &test_credential(), "mydb")
        .await?;

    assert_eq!(resp.request_id, "9135fff3-8509-11e0-bd9b-a7b1ece36d51");
    assert_eq!(
        resp.db_instances
            .iter()
            .map(|v| v.db_instance_identifier.as_str())
            .collect::<Vec<_>>(),
        vec!["mydb", "reportdb"]
    );
    assert_eq!(resp.db_instances[0].port, 3306);
    assert_eq!(
        resp.db_instances[0].vpc_security_group_ids,
        vec!["sg-0a1b2c3d".to_string(), "sg-4e5f6a7b".to_string()]
    );
    assert!(resp.db_instances[1].multi_az);
    Ok(())
}

#[tokio::test]
async fn test_signature_verifies_on_server_side() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DESCRIBE_DB_INSTANCES))
        .mount(&server)
        .await;

    init_executor()?
        .describe_db_instances(&server.uri(), &test_credential(), "my db/with+chars")
        .await?;

    let requests = server
        .received_requests()
        .await
        .expect("request recording must be enabled");
    assert_eq!(requests.len(), 1);

    let mut signature = None;
    let mut params = ParameterSet::new();
    for (k, v) in requests[0].url.query_pairs() {
        match k.as_ref() {
            "Signature" => signature = Some(v.into_owned()),
            "AWSAccessKeyId" | "SignatureVersion" | "SignatureMethod" => {}
            _ => params = params.with(k, v),
        }
    }
    assert_eq!(params.get("DBInstanceIdentifier"), Some("my db/with+chars"));

    // The signing host keeps the explicit port of the endpoint.
    let host = server.address().to_string();
    let expected = RequestSigner::new().sign(&params, &test_credential(), &Method::GET, "/", &host);
    assert_eq!(signature.as_deref(), Some(expected.signature()));
    Ok(())
}

#[tokio::test]
async fn test_access_denied() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string(
            r#"<ErrorResponse xmlns="http://rds.amazonaws.com/doc/2014-10-31/">
  <Error>
    <Type>Sender</Type>
    <Code>AccessDenied</Code>
    <Message>User is not authorized to perform: rds:DescribeDBInstances</Message>
  </Error>
  <RequestId>7c2d7a4e-2f9b-4c1e-9f0e-3b7d5a0c1e2f</RequestId>
</ErrorResponse>"#,
        ))
        .mount(&server)
        .await;

    let err = init_executor()?
        .describe_db_instances(&server.uri(), &test_credential(), "mydb")
        .await
        .expect_err("request must be denied");

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), 403);
    assert_eq!(err.code(), "AccessDenied");
    assert_eq!(
        err.to_string(),
        "AccessDenied: User is not authorized to perform: rds:DescribeDBInstances"
    );
    Ok(())
}

#[tokio::test]
async fn test_unparsable_error_body() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>upstream failure"))
        .mount(&server)
        .await;

    let err = init_executor()?
        .describe_db_instances(&server.uri(), &test_credential(), "mydb")
        .await
        .expect_err("request must fail");

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), 500);
    assert_eq!(err.code(), "");
    assert_eq!(err.message(), "500 Internal Server Error");
    assert_eq!(err.to_string(), "500: 500 Internal Server Error");
    Ok(())
}

#[tokio::test]
async fn test_malformed_success_body() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(MALFORMED_BODY))
        .mount(&server)
        .await;

    let err = init_executor()?
        .describe_db_instances(&server.uri(), &test_credential(), "mydb")
        .await
        .expect_err("body must not decode");

    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.status(), 0);
    Ok(())
}

#[tokio::test]
async fn test_transport_failure() -> Result<()> {
    // Take a free port and close it again so nothing listens there.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.local_addr()?
    };

    let err = init_executor()?
        .describe_db_instances(&format!("http://{addr}"), &test_credential(), "mydb")
        .await
        .expect_err("connection must fail");

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), 0);
    assert!(std::error::Error::source(&err).is_some());
    Ok(())
}

#[tokio::test]
async fn test_transport_error_hides_credentials() -> Result<()> {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.local_addr()?
    };

    let err = init_executor()?
        .describe_db_instances(&format!("http://{addr}"), &test_credential(), "mydb")
        .await
        .expect_err("connection must fail");

    // Neither the message nor any cause in the chain may carry the signed query.
    let chain = std::iter::successors(Some(&err as &dyn std::error::Error), |e| e.source())
        .map(|e| e.to_string())
        .collect::<Vec<_>>();
    for msg in &chain {
        assert!(!msg.contains(TEST_ACCESS_KEY_ID), "{msg}");
        assert!(!msg.contains("Signature="), "{msg}");
    }
    assert_eq!(err.to_string(), "failed to send request to 127.0.0.1");
    Ok(())
}
