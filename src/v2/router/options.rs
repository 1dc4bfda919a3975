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
//! Router create and update options.
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use tracing::trace;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use super::{ExternalGatewayInfo, Router};

/// Router create options.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CreateOptions(pub(super) Router);

/// Router update options.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct UpdateOptions(pub(super) Router);

mod sealed {
    use super::Router;

    pub trait FromBuilder {
        fn from_builder(router: Router) -> Self;
    }
}

/// Options type produced by [`RouterOptionsBuilder`].
///
/// Implemented by [`CreateOptions`] and [`UpdateOptions`] only.
pub trait RouterOptions: sealed::FromBuilder {}

macro_rules! router_options {
    ($options:ident, $label:literal) => {
        impl sealed::FromBuilder for $options {
            fn from_builder(router: Router) -> Self {
                Self(router)
            }
        }

        impl RouterOptions for $options {}

        impl $options {
            /// Consume the options returning the carried router fields.
            pub fn into_inner(self) -> Router {
                self.0
            }
        }

        impl Deref for $options {
            type Target = Router;

            fn deref(&self) -> &Router {
                &self.0
            }
        }

        impl From<$options> for Router {
            fn from(value: $options) -> Self {
                value.0
            }
        }

        impl Validate for $options {
            fn validate(&self) -> Result<(), ValidationErrors> {
                self.0.validate()
            }
        }

        impl fmt::Display for $options {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt_fields($label, f)
            }
        }
    };
}

router_options!(CreateOptions, "CreateOptions");
router_options!(UpdateOptions, "UpdateOptions");

/// Fluent builder of the router options.
///
/// The type parameter is the options type produced by
/// [`build`](RouterOptionsBuilder::build). Setters may be called in any order;
/// calling a setter again replaces the previous value. Nothing is validated
/// here.
#[derive(Clone, Debug)]
pub struct RouterOptionsBuilder<O> {
    router: Router,
    _options: PhantomData<O>,
}

/// Builder of [`CreateOptions`].
pub type CreateBuilder = RouterOptionsBuilder<CreateOptions>;

/// Builder of [`UpdateOptions`].
pub type UpdateBuilder = RouterOptionsBuilder<UpdateOptions>;

impl<O> Default for RouterOptionsBuilder<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> RouterOptionsBuilder<O> {
    pub fn new() -> Self {
        Self {
            router: Router::default(),
            _options: PhantomData,
        }
    }

    /// Set the router name.
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.router.name = Some(name.into());
        self
    }

    /// Set the owning tenant.
    pub fn tenant_id<S: Into<String>>(mut self, tenant_id: S) -> Self {
        self.router.tenant_id = Some(tenant_id.into());
        self
    }

    /// Set the administrative state.
    pub fn admin_state_up(mut self, admin_state_up: bool) -> Self {
        self.router.admin_state_up = Some(admin_state_up);
        self
    }

    /// Set the external gateway.
    pub fn external_gateway_info(mut self, external_gateway_info: ExternalGatewayInfo) -> Self {
        self.router.external_gateway_info = Some(external_gateway_info);
        self
    }
}

impl<O: RouterOptions> RouterOptionsBuilder<O> {
    /// Copy the accumulated fields into the options.
    pub fn build(self) -> O {
        trace!(
            "building {} from {}",
            std::any::type_name::<O>(),
            self.router
        );
        <O as sealed::FromBuilder>::from_builder(self.router)
    }
}
