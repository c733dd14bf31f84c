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
    AWS_ACCESS_KEY_ID_PARAM, HMAC_SHA256, SIGNATURE, SIGNATURE_METHOD, SIGNATURE_VERSION,
    SIGNATURE_VERSION_2,
};
use crate::encode::encode;
use crate::{Credential, ParameterSet, SignedParameters};
use http::Method;
use log::debug;
use rdsquery_core::hash::base64_hmac_sha256;

/// RequestSigner that implement AWS SigV2 with HmacSHA256.
///
/// - [Signature Version 2 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-2.html)
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSigner;

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self
    }

    /// Sign the parameters of a query request.
    ///
    /// Returns a new set with `AWSAccessKeyId`, `SignatureVersion`,
    /// `SignatureMethod` and `Signature` added. `params` is left untouched.
    pub fn sign(
        &self,
        params: &ParameterSet,
        cred: &Credential,
        method: &Method,
        path: &str,
        host: &str,
    ) -> SignedParameters {
        let params = params
            .clone()
            .with(AWS_ACCESS_KEY_ID_PARAM, &cred.access_key_id)
            .with(SIGNATURE_VERSION, SIGNATURE_VERSION_2)
            .with(SIGNATURE_METHOD, HMAC_SHA256);

        let string_to_sign = string_to_sign(method, host, path, &params);
        debug!("calculated string to sign: {string_to_sign}");

        let signature = base64_hmac_sha256(
            cred.secret_access_key.as_bytes(),
            string_to_sign.as_bytes(),
        );

        SignedParameters::new(params.with(SIGNATURE, signature))
    }
}

/// Build the canonical query string.
///
/// Keys and values are encoded separately, joined by `=`, then the pairs are
/// sorted by byte value. Sorting happens after encoding since escaping can
/// change the relative order of two pairs.
pub fn canonical_query_string(params: &ParameterSet) -> String {
    let mut pairs = params
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>();
    pairs.sort_unstable();

    pairs.join("&")
}

/// Build the string to sign.
///
/// ```text
/// GET
/// rds.us-east-1.amazonaws.com
/// /
/// AWSAccessKeyId=...&Action=DescribeDBInstances&...
/// ```
pub fn string_to_sign(method: &Method, host: &str, path: &str, params: &ParameterSet) -> String {
    let query = canonical_query_string(params);

    let mut s = String::with_capacity(method.as_str().len() + host.len() + path.len() + query.len() + 3);
    s.push_str(method.as_str());
    s.push('\n');
    s.push_str(host);
    s.push('\n');
    s.push_str(path);
    s.push('\n');
    s.push_str(&query);
    s
}
