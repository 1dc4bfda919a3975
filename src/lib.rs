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

//! # OpenStack Neutron API types
//!
//! This crate defines the types of the OpenStack Networking (Neutron) v2 REST
//! API router resource: the [`Router`](v2::router::Router) entity as returned
//! by the service, and the create/update options used to assemble request
//! bodies.
//!
//! Sending requests is not part of this crate. The types carry the `serde`
//! field mapping of the Neutron wire format, so any serde encoder can produce
//! or consume the JSON bodies.
//!
//! ```
//! use openstack_neutron_api_types::v2::router::{ExternalGatewayInfoBuilder, Router};
//!
//! let options = Router::create_options()
//!     .name("edge")
//!     .admin_state_up(true)
//!     .external_gateway_info(
//!         ExternalGatewayInfoBuilder::default()
//!             .network_id("8ca37218-28ff-41cb-9b10-039601ea7e6b")
//!             .build()
//!             .unwrap(),
//!     )
//!     .build();
//!
//! assert_eq!(options.name(), Some("edge"));
//! assert!(options.id().is_none());
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub mod config;
pub mod error;
pub mod v2;

/// Link object.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize, ToSchema, Validate)]
pub struct Link {
    /// Link rel attribute.
    #[validate(length(max = 10))]
    pub rel: String,
    /// link href attribute.
    #[validate(url)]
    pub href: String,
}

/// Return `true` to be used as a positive default for the serde macros.
pub fn default_true() -> bool {
    true
}
