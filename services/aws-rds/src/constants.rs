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

/// RDS Query API version every request is pinned to.
pub const API_VERSION: &str = "2014-10-31";

// Actions used in rds.
pub const ACTION_DESCRIBE_DB_INSTANCES: &str = "DescribeDBInstances";

// Query parameters used in rds.
pub const ACTION: &str = "Action";
pub const VERSION: &str = "Version";
pub const TIMESTAMP: &str = "Timestamp";
pub const DB_INSTANCE_IDENTIFIER: &str = "DBInstanceIdentifier";

// Query parameters added by signature version 2.
pub const AWS_ACCESS_KEY_ID_PARAM: &str = "AWSAccessKeyId";
pub const SIGNATURE_VERSION: &str = "SignatureVersion";
pub const SIGNATURE_METHOD: &str = "SignatureMethod";
pub const SIGNATURE: &str = "Signature";
pub const SIGNATURE_VERSION_2: &str = "2";
pub const HMAC_SHA256: &str = "HmacSHA256";

// Env values used in rds.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_RDS_ENDPOINT: &str = "AWS_RDS_ENDPOINT";
pub const AWS_RDS_DB_INSTANCE_IDENTIFIER: &str = "AWS_RDS_DB_INSTANCE_IDENTIFIER";
