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
//! # Configuration
//!
//! Client side defaults applied when preparing router requests.
//!
//! ```ini
//! [router]
//! default_tenant_id = 4fd44f30292945e481c7b8a0c8908869
//! validate = true
//! ```
use config::{File, FileFormat};
use eyre::{Report, WrapErr};
use serde::Deserialize;
use std::path::PathBuf;

use crate::default_true;

#[derive(Debug, Default, Deserialize, Clone)]
pub struct Config {
    /// Router request defaults.
    #[serde(default)]
    pub router: RouterSection,
}

/// Router request configuration.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RouterSection {
    /// Tenant assigned to router create requests that do not name one.
    pub default_tenant_id: Option<String>,

    /// Validate request payloads before handing them out.
    #[serde(default = "default_true")]
    pub validate: bool,
}

impl Default for RouterSection {
    fn default() -> Self {
        Self {
            default_tenant_id: None,
            validate: default_true(),
        }
    }
}

impl Config {
    pub fn new(path: PathBuf) -> Result<Self, Report> {
        let mut builder = config::Config::builder();

        if std::path::Path::new(&path).is_file() {
            builder = builder.add_source(File::from(path).format(FileFormat::Ini));
        }

        builder.try_into()
    }
}

impl TryFrom<config::ConfigBuilder<config::builder::DefaultState>> for Config {
    type Error = Report;
    fn try_from(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, Self::Error> {
        builder
            .set_default("router.validate", "true")?
            .build()
            .wrap_err("Failed to read configuration file")?
            .try_deserialize()
            .wrap_err("Failed to parse configuration file")
    }
}
