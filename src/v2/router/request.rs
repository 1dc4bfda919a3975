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
//! Router request bodies.
use http::Method;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use super::{CreateOptions, Router, UpdateOptions};
use crate::config::RouterSection;
use crate::error::NeutronError;

/// Router create request.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct RouterCreateRequest {
    /// Router object.
    pub router: CreateOptions,
}

/// Router update request.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct RouterUpdateRequest {
    /// Router object.
    pub router: UpdateOptions,
}

/// Kind of the router request.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RequestKind {
    Create,
    Update,
}

impl RequestKind {
    /// HTTP method of the request.
    pub fn method(&self) -> Method {
        match self {
            Self::Create => Method::POST,
            Self::Update => Method::PUT,
        }
    }
}

/// Router create or update request.
///
/// Serializes as the `{"router": {...}}` request body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RouterRequest {
    /// Create a router.
    Create(RouterCreateRequest),
    /// Update an existing router.
    Update(RouterUpdateRequest),
}

impl RouterRequest {
    pub fn kind(&self) -> RequestKind {
        match self {
            Self::Create(_) => RequestKind::Create,
            Self::Update(_) => RequestKind::Update,
        }
    }

    /// HTTP method of the request.
    pub fn method(&self) -> Method {
        self.kind().method()
    }

    /// Router fields carried by the request.
    pub fn router(&self) -> &Router {
        match self {
            Self::Create(req) => &req.router,
            Self::Update(req) => &req.router,
        }
    }

    fn router_mut(&mut self) -> &mut Router {
        match self {
            Self::Create(req) => &mut req.router.0,
            Self::Update(req) => &mut req.router.0,
        }
    }

    /// Apply configured defaults and validate the request.
    ///
    /// The service assigned `id` and `status` are dropped from the body. A
    /// create request without a tenant gets the configured
    /// `default_tenant_id`. An explicitly set tenant is kept and update
    /// requests never get a default tenant.
    pub fn prepare(mut self, config: &RouterSection) -> Result<Self, NeutronError> {
        let kind = self.kind();
        let router = self.router_mut();
        let id = router.id.take();
        let status = router.status.take();
        if id.is_some() || status.is_some() {
            warn!(
                ?kind,
                ?id,
                ?status,
                "dropping service assigned fields from router request"
            );
        }

        let request = match self {
            Self::Create(mut req) => {
                if req.router.0.tenant_id.is_none() {
                    if let Some(tenant_id) = &config.default_tenant_id {
                        debug!(
                            tenant_id = tenant_id.as_str(),
                            "applying default tenant to router create request"
                        );
                        req.router.0.tenant_id = Some(tenant_id.clone());
                    }
                }
                Self::Create(req)
            }
            update @ Self::Update(_) => update,
        };

        if config.validate {
            if let Err(err) = request.validate() {
                warn!(kind = ?request.kind(), "router request rejected: {err}");
                return Err(err.into());
            }
            debug!(kind = ?request.kind(), "router request validated");
        }
        Ok(request)
    }
}

impl Validate for RouterRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.router().validate()
    }
}

impl From<CreateOptions> for RouterRequest {
    fn from(value: CreateOptions) -> Self {
        Self::Create(RouterCreateRequest { router: value })
    }
}

impl From<UpdateOptions> for RouterRequest {
    fn from(value: UpdateOptions) -> Self {
        Self::Update(RouterUpdateRequest { router: value })
    }
}
