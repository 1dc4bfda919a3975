// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0
//! External gateway of a router.
use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Nullable;
use crate::error::BuilderError;

/// External gateway information of the router.
///
/// Connects the router to an external network. When SNAT is enabled the
/// router translates the source address of outgoing traffic of the attached
/// subnets into its external address.
#[derive(
    Builder,
    Clone,
    Debug,
    Default,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    ToSchema,
    Validate,
)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct ExternalGatewayInfo {
    /// ID of the external network.
    #[validate(length(min = 1, max = 255))]
    pub network_id: String,

    /// Enable Source NAT on the gateway.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_snat: Option<bool>,

    /// IP addresses of the gateway port on the external network.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub external_fixed_ips: Option<Vec<ExternalFixedIp>>,
}

/// Fixed IP of the router gateway port.
#[derive(
    Builder,
    Clone,
    Debug,
    Default,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    ToSchema,
    Validate,
)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct ExternalFixedIp {
    /// Subnet of the external network to allocate the address from.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub subnet_id: Option<String>,

    /// Requested IP address.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(ip)]
    pub ip_address: Option<String>,
}

impl fmt::Display for ExternalGatewayInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExternalGatewayInfo{{network_id={}, enable_snat={}, external_fixed_ips=",
            self.network_id,
            Nullable(&self.enable_snat)
        )?;
        match &self.external_fixed_ips {
            Some(ips) => {
                f.write_str("[")?;
                for (idx, ip) in ips.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{ip}")?;
                }
                f.write_str("]")?;
            }
            None => f.write_str("null")?,
        }
        f.write_str("}")
    }
}

impl fmt::Display for ExternalFixedIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExternalFixedIp{{subnet_id={}, ip_address={}}}",
            Nullable(&self.subnet_id),
            Nullable(&self.ip_address)
        )
    }
}
