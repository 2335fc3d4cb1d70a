// Copyright (c) 2018-2022  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::collections::BTreeMap;
use std::str;

use serde_derive::{Deserialize, Serialize};

use super::coerce;
use super::{LoadBreakdown, RoomInput};
use crate::climate::Region;
use crate::error::HvacError;

/// General project data, shown in reports
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    /// Client name
    #[serde(deserialize_with = "coerce::string")]
    pub client: String,
    /// Site or address
    #[serde(deserialize_with = "coerce::string")]
    pub location: String,
}

/// Climate correction selected for the project.
///
/// A known region code takes precedence over the manual factor.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClimateSelection {
    /// Region code (two letters)
    #[serde(deserialize_with = "coerce::or_default")]
    pub region: Option<String>,
    /// Climate factor entered by the user
    #[serde(deserialize_with = "coerce::optional_number")]
    pub manual_factor: Option<f64>,
}

/// Origin of the climate factor used in a computation
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClimateSource {
    /// Table value of the selected region
    Region(Region),
    /// Factor entered by the user
    Manual,
    /// No usable selection, factor 1.0
    Default,
}

/// Project input document: general data, climate selection and rooms
///
/// {
///   "info": { "client": "ACME", "location": "Rio de Janeiro" },
///   "climate": { "region": "RJ", "manualFactor": 1.0 },
///   "rooms": [ { "id": "r1", "name": "Office", "floor": { "length": 5, "width": 4 } } ]
/// }
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInput {
    /// General data
    #[serde(deserialize_with = "coerce::or_default")]
    pub info: ProjectInfo,
    /// Climate correction
    #[serde(deserialize_with = "coerce::or_default")]
    pub climate: ClimateSelection,
    /// Rooms, in input order
    #[serde(deserialize_with = "coerce::or_default")]
    pub rooms: Vec<RoomInput>,
}

impl str::FromStr for ProjectInput {
    type Err = HvacError;

    fn from_str(s: &str) -> Result<ProjectInput, Self::Err> {
        let s_nobom = if s.starts_with('\u{feff}') {
            &s['\u{feff}'.len_utf8()..]
        } else {
            s
        };
        Ok(serde_json::from_str(s_nobom)?)
    }
}

/// Thermal load results of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResult {
    /// Climate factor applied to every room [-]
    pub climate_factor: f64,
    /// Origin of the climate factor
    pub climate_source: ClimateSource,
    /// Results by room id
    pub rooms: BTreeMap<String, LoadBreakdown>,
    /// Sum of all rooms
    pub totals: LoadBreakdown,
}
