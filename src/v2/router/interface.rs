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
//! Router interface types.
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::BuilderError;

/// Body of the add/remove router interface request.
///
/// Exactly one of `subnet_id` or `port_id` is expected by the service.
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
#[builder(build_fn(error = "BuilderError", validate = "Self::validate"))]
#[builder(setter(strip_option, into))]
pub struct RouterInterface {
    /// Subnet to attach the router to.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub subnet_id: Option<String>,

    /// Port to attach the router to.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub port_id: Option<String>,
}

impl RouterInterfaceBuilder {
    fn validate(&self) -> Result<(), String> {
        match (&self.subnet_id, &self.port_id) {
            (Some(Some(_)), Some(Some(_))) => {
                Err("only one of `subnet_id` or `port_id` may be set".into())
            }
            (None, None) => Err("one of `subnet_id` or `port_id` must be set".into()),
            _ => Ok(()),
        }
    }
}

/// Router interface as returned by the service.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize, ToSchema)]
pub struct RouterInterfaceInfo {
    /// Router ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Tenant owning the router.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,

    /// Attached subnet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,

    /// Router port on the subnet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_id: Option<String>,
}
