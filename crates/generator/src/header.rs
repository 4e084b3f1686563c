//! Banner, copyright, and license notice shared by every generated file

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use terrawrap_common::GeneratorError;

/// License applied to generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum License {
    #[default]
    Apache,
    Mit,
    Mpl,
    None,
}

impl License {
    /// Header notice placed under the copyright line
    pub fn header(&self) -> Option<&'static str> {
        match self {
            License::Apache => Some(APACHE_HEADER),
            License::Mit => Some(MIT_HEADER),
            License::Mpl => Some(MPL_HEADER),
            License::None => None,
        }
    }
}

impl FromStr for License {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apache" | "apache-2.0" | "apache2" => Ok(License::Apache),
            "mit" => Ok(License::Mit),
            "mpl" | "mpl-2.0" | "mpl2" => Ok(License::Mpl),
            "none" | "" => Ok(License::None),
            other => Err(GeneratorError::Generation(format!(
                "Unknown license '{}' (expected apache, mit, mpl, or none)",
                other
            ))),
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            License::Apache => write!(f, "apache"),
            License::Mit => write!(f, "mit"),
            License::Mpl => write!(f, "mpl"),
            License::None => write!(f, "none"),
        }
    }
}

const APACHE_HEADER: &str = r#"Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License."#;

const MIT_HEADER: &str = "Use of this source code is governed by an MIT-style license.
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software, to deal in the Software without restriction, subject to the
conditions stated in the MIT License: https://opensource.org/licenses/MIT";

const MPL_HEADER: &str = "This Source Code Form is subject to the terms of the Mozilla Public
License, v. 2.0. If a copy of the MPL was not distributed with this
file, You can obtain one at https://mozilla.org/MPL/2.0/.";

/// Header block rendered at the top of each generated file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleHeader {
    pub banner: String,
    pub copyright: String,
    pub legal: Option<String>,
}

impl ModuleHeader {
    /// Standard header for a resource; `year` is supplied by the caller so
    /// rendering stays reproducible
    pub fn new(
        resource_type: &str,
        resource_name: &str,
        author: &str,
        year: i32,
        license: License,
    ) -> Self {
        Self {
            banner: banner(resource_type, resource_name),
            copyright: format!("Copyright © {} {}", year, author),
            legal: license.header().map(str::to_string),
        }
    }
}

fn banner(resource_type: &str, resource_name: &str) -> String {
    format!(
        "Resource: {} - {}
Generated by Terrawrap from the provider's resource documentation.

The code generated below was generated using MPL v2.0 licensed code
and documentation, and as such is subject to the terms of the Mozilla Public
License, v. 2.0. If a copy of the MPL was not distributed with this file, You
can obtain one at https://mozilla.org/MPL/2.0/.",
        resource_type, resource_name
    )
}
