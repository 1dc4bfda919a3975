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
//! # Router API types
//!
//! A Neutron router forwards packets between internal subnets and, through
//! its external gateway, to an external network.
//!
//! [`Router`] is the resource as reported by the service. Request payloads are
//! assembled with [`Router::create_options`] and [`Router::update_options`],
//! which produce [`CreateOptions`] and [`UpdateOptions`]: router values that
//! only differ from [`Router`] by their type.
use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::Link;
use crate::error::BuilderError;
use crate::v2::NetworkStatus;

mod gateway;
mod interface;
mod options;
mod request;

pub use gateway::*;
pub use interface::*;
pub use options::*;
pub use request::*;

/// Router object.
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
pub struct Router {
    /// Router ID. Assigned by the service.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Router status. Reported by the service.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<NetworkStatus>,

    /// Human-readable router name.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub name: Option<String>,

    /// ID of the tenant owning the router.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub tenant_id: Option<String>,

    /// Administrative state of the router.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_state_up: Option<bool>,

    /// External gateway of the router.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub external_gateway_info: Option<ExternalGatewayInfo>,
}

impl Router {
    /// Builder for the router create request.
    pub fn create_options() -> CreateBuilder {
        CreateBuilder::new()
    }

    /// Builder for the router update request.
    pub fn update_options() -> UpdateBuilder {
        UpdateBuilder::new()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn status(&self) -> Option<NetworkStatus> {
        self.status
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    pub fn admin_state_up(&self) -> Option<bool> {
        self.admin_state_up
    }

    pub fn external_gateway_info(&self) -> Option<&ExternalGatewayInfo> {
        self.external_gateway_info.as_ref()
    }
}

/// Writes `null` for absent values.
pub(crate) struct Nullable<'a, T>(pub(crate) &'a Option<T>);

impl<T: fmt::Display> fmt::Display for Nullable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(val) => val.fmt(f),
            None => f.write_str("null"),
        }
    }
}

impl Router {
    /// Write all fields under the given type name.
    pub(crate) fn fmt_fields(&self, type_name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{type_name}{{id={}, status={}, name={}, tenant_id={}, admin_state_up={}, external_gateway_info={}}}",
            Nullable(&self.id),
            Nullable(&self.status),
            Nullable(&self.name),
            Nullable(&self.tenant_id),
            Nullable(&self.admin_state_up),
            Nullable(&self.external_gateway_info),
        )
    }
}

impl fmt::Display for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_fields("Router", f)
    }
}

/// Router response.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema, Validate)]
pub struct RouterResponse {
    /// Router object.
    #[validate(nested)]
    pub router: Router,
}

/// List of routers.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema, Validate)]
pub struct RouterList {
    /// Collection of router objects.
    #[validate(nested)]
    pub routers: Vec<Router>,

    /// Pagination links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub routers_links: Option<Vec<Link>>,
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use serde_json::json;

    use super::*;

    fn hash_of<T: Hash>(val: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        val.hash(&mut hasher);
        hasher.finish()
    }

    fn sample() -> Router {
        RouterBuilder::default()
            .id("f8a44de0-fc8e-45df-93c7-f79bf3b01c95")
            .status(NetworkStatus::Active)
            .name("router1")
            .tenant_id("d6554fe62e2f41efbb6e026fad5c1542")
            .admin_state_up(true)
            .external_gateway_info(
                ExternalGatewayInfoBuilder::default()
                    .network_id("a87cc70a-3e15-4acf-8205-9b711a3531b7")
                    .enable_snat(true)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_structural_equality() {
        let a = sample();
        let b = sample();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let variants = [
            Router {
                id: Some("a8f3f2d4-0c1e-4b8e-9d0b-6f4c1f7a2b11".into()),
                ..sample()
            },
            Router {
                status: Some(NetworkStatus::Down),
                ..sample()
            },
            Router {
                name: Some("router2".into()),
                ..sample()
            },
            Router {
                tenant_id: None,
                ..sample()
            },
            Router {
                admin_state_up: Some(false),
                ..sample()
            },
            Router {
                external_gateway_info: None,
                ..sample()
            },
        ];
        for other in &variants {
            assert_ne!(&a, other, "{other} compares equal to {a}");
            assert_ne!(hash_of(&a), hash_of(other), "{other} hashes like {a}");
        }
    }

    #[test]
    fn test_accessors() {
        let router = sample();
        assert_eq!(router.id(), Some("f8a44de0-fc8e-45df-93c7-f79bf3b01c95"));
        assert_eq!(router.status(), Some(NetworkStatus::Active));
        assert_eq!(router.name(), Some("router1"));
        assert_eq!(router.tenant_id(), Some("d6554fe62e2f41efbb6e026fad5c1542"));
        assert_eq!(router.admin_state_up(), Some(true));
        assert_eq!(
            router.external_gateway_info().map(|gw| gw.network_id.as_str()),
            Some("a87cc70a-3e15-4acf-8205-9b711a3531b7")
        );

        let empty = Router::default();
        assert!(empty.id().is_none());
        assert!(empty.status().is_none());
        assert!(empty.external_gateway_info().is_none());
    }

    #[test]
    fn test_display_lists_all_fields() {
        let text = sample().to_string();
        for part in [
            "id=f8a44de0-fc8e-45df-93c7-f79bf3b01c95",
            "status=ACTIVE",
            "name=router1",
            "tenant_id=d6554fe62e2f41efbb6e026fad5c1542",
            "admin_state_up=true",
            "network_id=a87cc70a-3e15-4acf-8205-9b711a3531b7",
            "enable_snat=true",
        ] {
            assert!(text.contains(part), "{text} is missing {part}");
        }

        assert_eq!(
            Router::default().to_string(),
            "Router{id=null, status=null, name=null, tenant_id=null, admin_state_up=null, external_gateway_info=null}"
        );
    }

    #[test]
    fn test_debug_lists_all_fields() {
        let text = format!("{:?}", sample());
        for field in [
            "id",
            "status",
            "name",
            "tenant_id",
            "admin_state_up",
            "external_gateway_info",
        ] {
            assert!(text.contains(field));
        }
    }

    #[test]
    fn test_deserialize_response() {
        let rsp: RouterResponse = serde_json::from_value(json!({
            "router": {
                "id": "f8a44de0-fc8e-45df-93c7-f79bf3b01c95",
                "status": "ACTIVE",
                "name": "router1",
                "tenant_id": "d6554fe62e2f41efbb6e026fad5c1542",
                "admin_state_up": true,
                "external_gateway_info": {
                    "network_id": "a87cc70a-3e15-4acf-8205-9b711a3531b7",
                    "enable_snat": true
                },
                "routes": []
            }
        }))
        .unwrap();
        assert_eq!(rsp.router, sample());
    }

    #[test]
    fn test_deserialize_nulls() {
        let router: Router = serde_json::from_value(json!({
            "id": "f8a44de0-fc8e-45df-93c7-f79bf3b01c95",
            "name": null,
            "external_gateway_info": null
        }))
        .unwrap();
        assert_eq!(
            router,
            Router {
                id: Some("f8a44de0-fc8e-45df-93c7-f79bf3b01c95".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_serialize_wire_names() {
        let val = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            val,
            json!({
                "id": "f8a44de0-fc8e-45df-93c7-f79bf3b01c95",
                "status": "ACTIVE",
                "name": "router1",
                "tenant_id": "d6554fe62e2f41efbb6e026fad5c1542",
                "admin_state_up": true,
                "external_gateway_info": {
                    "network_id": "a87cc70a-3e15-4acf-8205-9b711a3531b7",
                    "enable_snat": true
                }
            })
        );
        assert_eq!(json!({}), serde_json::to_value(Router::default()).unwrap());
    }

    #[test]
    fn test_router_list() {
        let list: RouterList = serde_json::from_value(json!({
            "routers": [
                {"id": "r1", "status": "DOWN"},
                {"id": "r2", "status": "PENDING_CREATE"}
            ],
            "routers_links": [
                {"rel": "next", "href": "http://localhost:9696/v2.0/routers?marker=r2"}
            ]
        }))
        .unwrap();
        assert_eq!(list.routers.len(), 2);
        assert_eq!(list.routers[0].status(), Some(NetworkStatus::Down));
        assert_eq!(list.routers[1].status(), Some(NetworkStatus::Unrecognized));
        assert!(list.validate().is_ok());
        assert_eq!(
            list.routers_links.unwrap()[0].href,
            "http://localhost:9696/v2.0/routers?marker=r2"
        );
    }
}
