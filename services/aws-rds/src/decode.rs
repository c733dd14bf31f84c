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

//! Decoding of RDS Query API responses.

use http::StatusCode;
use log::warn;
use quick_xml::de;
use rdsquery_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Response of `DescribeDBInstances`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeDbInstancesResponse {
    /// Request id assigned by the service.
    pub request_id: String,
    /// Instances in document order.
    pub db_instances: Vec<DbInstance>,
}

/// One database instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DbInstance {
    /// DNS address of the instance endpoint.
    pub address: String,
    /// Port the instance listens on.
    pub port: u16,
    /// Allocated storage in gibibytes.
    pub allocated_storage: u32,
    /// Storage type like `gp2` or `io1`.
    pub storage_type: String,
    /// Availability zone the instance is located in.
    pub availability_zone: String,
    /// Days automated backups are retained.
    pub backup_retention_period: u32,
    /// Compute and memory class like `db.t3.micro`.
    pub db_instance_class: String,
    /// User supplied identifier.
    pub db_instance_identifier: String,
    /// Current state like `available`.
    pub db_instance_status: String,
    /// Name of the initial database.
    pub db_name: String,
    /// Database engine.
    pub engine: String,
    /// Database engine version.
    pub engine_version: String,
    /// Whether storage is encrypted.
    pub storage_encrypted: bool,
    /// Master user name.
    pub master_username: String,
    /// Whether the instance is a Multi-AZ deployment.
    pub multi_az: bool,
    /// Daily backup window, in UTC.
    pub preferred_backup_window: String,
    /// Weekly maintenance window, in UTC.
    pub preferred_maintenance_window: String,
    /// VPC security group ids in document order.
    pub vpc_security_group_ids: Vec<String>,
    /// DB security group names in document order.
    pub db_security_group_names: Vec<String>,
    /// Name of the first DB parameter group, empty if none.
    pub db_parameter_group_name: String,
}

/// Decode a success body into `T`.
///
/// Malformed or mismatching XML is a [`ErrorKind::Decode`](rdsquery_core::ErrorKind::Decode) error.
pub fn decode_success<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    de::from_reader(body)
        .map_err(|e| Error::decode(format!("failed to decode response body: {e}")).with_source(e))
}

/// Build the error for a non-success response.
///
/// The first `<Error>` entry of the envelope provides code and message. If
/// the body can't be parsed or carries no message, the status line is used
/// so the message is never empty.
pub fn decode_error(status: StatusCode, body: &[u8]) -> Error {
    let status_line = status_line(status);

    let entry = match de::from_reader::<_, ErrorResponse>(body) {
        Ok(resp) => resp.errors.into_iter().next().unwrap_or_default(),
        Err(e) => {
            warn!("failed to parse error response with status {status_line}: {e}");
            ErrorEntry::default()
        }
    };

    Error::api(status.as_u16(), entry.code, entry.message, &status_line)
}

/// Format status as `403 Forbidden`.
fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ErrorResponse {
    #[serde(rename = "Error")]
    errors: Vec<ErrorEntry>,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ErrorEntry {
    code: String,
    message: String,
}

impl<'de> Deserialize<'de> for DescribeDbInstancesResponse {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let resp = DescribeDbInstancesEnvelope::deserialize(deserializer)?;

        Ok(Self {
            request_id: resp.response_metadata.request_id,
            db_instances: resp
                .result
                .db_instances
                .items
                .into_iter()
                .map(DbInstance::from)
                .collect(),
        })
    }
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct DescribeDbInstancesEnvelope {
    #[serde(rename = "DescribeDBInstancesResult")]
    result: DescribeDbInstancesResult,
    response_metadata: ResponseMetadata,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ResponseMetadata {
    request_id: String,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default)]
struct DescribeDbInstancesResult {
    #[serde(rename = "DBInstances")]
    db_instances: DbInstanceList,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default)]
struct DbInstanceList {
    #[serde(rename = "DBInstance")]
    items: Vec<DbInstanceXml>,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct DbInstanceXml {
    endpoint: EndpointXml,
    allocated_storage: u32,
    storage_type: String,
    availability_zone: String,
    backup_retention_period: u32,
    #[serde(rename = "DBInstanceClass")]
    db_instance_class: String,
    #[serde(rename = "DBInstanceIdentifier")]
    db_instance_identifier: String,
    #[serde(rename = "DBInstanceStatus")]
    db_instance_status: String,
    #[serde(rename = "DBName")]
    db_name: String,
    engine: String,
    engine_version: String,
    storage_encrypted: bool,
    master_username: String,
    #[serde(rename = "MultiAZ")]
    multi_az: bool,
    preferred_backup_window: String,
    preferred_maintenance_window: String,
    vpc_security_groups: VpcSecurityGroups,
    #[serde(rename = "DBSecurityGroups")]
    db_security_groups: DbSecurityGroups,
    #[serde(rename = "DBParameterGroups")]
    db_parameter_groups: DbParameterGroups,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct EndpointXml {
    address: String,
    port: u16,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default)]
struct VpcSecurityGroups {
    #[serde(rename = "VpcSecurityGroupMembership")]
    items: Vec<VpcSecurityGroupMembership>,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct VpcSecurityGroupMembership {
    vpc_security_group_id: String,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default)]
struct DbSecurityGroups {
    #[serde(rename = "DBSecurityGroup")]
    items: Vec<DbSecurityGroup>,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default)]
struct DbSecurityGroup {
    #[serde(rename = "DBSecurityGroupName")]
    name: String,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default)]
struct DbParameterGroups {
    #[serde(rename = "DBParameterGroup")]
    items: Vec<DbParameterGroup>,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default)]
struct DbParameterGroup {
    #[serde(rename = "DBParameterGroupName")]
    name: String,
}

impl From<DbInstanceXml> for DbInstance {
    fn from(v: DbInstanceXml) -> Self {
        Self {
            address: v.endpoint.address,
            port: v.endpoint.port,
            allocated_storage: v.allocated_storage,
            storage_type: v.storage_type,
            availability_zone: v.availability_zone,
            backup_retention_period: v.backup_retention_period,
            db_instance_class: v.db_instance_class,
            db_instance_identifier: v.db_instance_identifier,
            db_instance_status: v.db_instance_status,
            db_name: v.db_name,
            engine: v.engine,
            engine_version: v.engine_version,
            storage_encrypted: v.storage_encrypted,
            master_username: v.master_username,
            multi_az: v.multi_az,
            preferred_backup_window: v.preferred_backup_window,
            preferred_maintenance_window: v.preferred_maintenance_window,
            vpc_security_group_ids: v
                .vpc_security_groups
                .items
                .into_iter()
                .map(|g| g.vpc_security_group_id)
                .collect(),
            db_security_group_names: v
                .db_security_groups
                .items
                .into_iter()
                .map(|g| g.name)
                .collect(),
            db_parameter_group_name: v
                .db_parameter_groups
                .items
                .into_iter()
                .next()
                .map(|g| g.name)
                .unwrap_or_default(),
        }
    }
}
