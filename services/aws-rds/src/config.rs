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

use crate::constants::*;
use crate::Credential;
use rdsquery_core::utils::Redact;
use rdsquery_core::{Context, Error, Result};
use std::fmt::{Debug, Formatter};
use std::time::Duration;

/// Config carries all the configuration for RDS queries.
#[derive(Clone, Default)]
pub struct Config {
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_RDS_ENDPOINT`]
    pub endpoint: Option<String>,
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `db_instance_identifier` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_RDS_DB_INSTANCE_IDENTIFIER`]
    pub db_instance_identifier: Option<String>,
    /// `api_version` sent as `Version`, default to [`API_VERSION`].
    pub api_version: Option<String>,
    /// Timeout applied by the transport, none by default.
    pub timeout: Option<Duration>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("access_key_id", &Redact::from(self.access_key_id.as_deref()))
            .field("secret_access_key", &Redact::from(self.secret_access_key.as_deref()))
            .field("db_instance_identifier", &self.db_instance_identifier)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(AWS_RDS_ENDPOINT) {
            self.endpoint.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AWS_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AWS_SECRET_ACCESS_KEY) {
            self.secret_access_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AWS_RDS_DB_INSTANCE_IDENTIFIER) {
            self.db_instance_identifier.get_or_insert(v);
        }

        self
    }

    /// Build the credential from the configured key pair.
    pub fn credential(&self) -> Result<Credential> {
        let access_key_id = required(&self.access_key_id, "access_key_id")?;
        let secret_access_key = required(&self.secret_access_key, "secret_access_key")?;

        Ok(Credential::new(access_key_id, secret_access_key))
    }

    /// The endpoint to send queries to.
    pub fn endpoint(&self) -> Result<&str> {
        required(&self.endpoint, "endpoint")
    }

    /// The instance to describe.
    pub fn db_instance_identifier(&self) -> Result<&str> {
        required(&self.db_instance_identifier, "db_instance_identifier")
    }

    /// The API version to send, falls back to [`API_VERSION`].
    pub fn api_version(&self) -> &str {
        self.api_version.as_deref().unwrap_or(API_VERSION)
    }
}

fn required<'a>(v: &'a Option<String>, name: &str) -> Result<&'a str> {
    match v.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::config_invalid(format!("{name} is required"))),
    }
}
