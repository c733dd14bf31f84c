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

use crate::constants::SIGNATURE;
use std::collections::BTreeMap;

/// Query parameters of a single request.
///
/// Keys are unique and always iterated in alphabetical order, so the query
/// string built from a set is reproducible.
///
/// ```
/// use rdsquery_aws_rds::ParameterSet;
///
/// let params = ParameterSet::new()
///     .with("DBInstanceIdentifier", "mydb")
///     .with("Action", "DescribeDBInstances");
///
/// assert_eq!(params.to_query_string(), "Action=DescribeDBInstances&DBInstanceIdentifier=mydb");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    params: BTreeMap<String, String>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new set with `key` set to `value`, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Get value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Check if the key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if there is no parameter.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate parameters sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as `application/x-www-form-urlencoded` query string, sorted by key.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parameters returned by the signer.
///
/// There is no way to change a signed set: the signature covers exactly the
/// parameters it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedParameters {
    params: ParameterSet,
}

impl SignedParameters {
    pub(crate) fn new(params: ParameterSet) -> Self {
        debug_assert!(params.contains_key(SIGNATURE));
        Self { params }
    }

    /// The base64 encoded signature.
    pub fn signature(&self) -> &str {
        self.params.get(SIGNATURE).unwrap_or_default()
    }

    /// Get value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key)
    }

    /// Number of parameters, `Signature` included.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Always false, a signed set carries at least the auth parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate parameters sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter()
    }

    /// Serialize as `application/x-www-form-urlencoded` query string, sorted by key.
    pub fn to_query_string(&self) -> String {
        self.params.to_query_string()
    }
}
