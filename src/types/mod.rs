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

/*!
Types
=====

Basic types for the thermal load computation: classes used to pick coefficients, the room input
data model, the load breakdown and project level input and results.

*/

mod breakdown;
pub(crate) mod coerce;
mod project;
mod room;

pub use breakdown::*;
pub use project::*;
pub use room::*;

use std::fmt;

use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

// ==================== Classes used to select coefficients

/// Window orientation for solar gains.
///
/// South facing windows have no solar gain category in this method and are not represented.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// North
    #[strum(serialize = "north")]
    North,
    /// Northeast
    #[strum(serialize = "northeast")]
    Northeast,
    /// East
    #[strum(serialize = "east")]
    East,
    /// Southeast
    #[strum(serialize = "southeast")]
    Southeast,
    /// Southwest
    #[strum(serialize = "southwest")]
    Southwest,
    /// West
    #[strum(serialize = "west")]
    West,
    /// Northwest
    #[strum(serialize = "northwest")]
    Northwest,
}

/// Orientations with a solar gain coefficient
pub const ORIENTATIONS: [Orientation; 7] = [
    Orientation::North,
    Orientation::Northeast,
    Orientation::East,
    Orientation::Southeast,
    Orientation::Southwest,
    Orientation::West,
    Orientation::Northwest,
];

/// Sun protection of a window.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
pub enum Shading {
    /// No sun protection
    #[strum(serialize = "none")]
    None,
    /// Internal protection (blinds, curtains)
    #[strum(serialize = "internal")]
    Internal,
    /// External protection (awnings, louvres)
    #[strum(serialize = "external")]
    External,
}

impl Default for Shading {
    fn default() -> Self {
        Shading::None
    }
}

/// Wall construction weight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
pub enum ConstructionClass {
    /// Light construction
    #[strum(serialize = "light")]
    Light,
    /// Heavy construction
    #[strum(serialize = "heavy")]
    Heavy,
}

impl Default for ConstructionClass {
    fn default() -> Self {
        ConstructionClass::Light
    }
}

/// Roof or ceiling construction type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
pub enum RoofType {
    /// Plain concrete slab
    #[strum(serialize = "plainSlab")]
    PlainSlab,
    /// Insulated slab
    #[strum(serialize = "insulatedSlab")]
    InsulatedSlab,
    /// Slab between floors
    #[strum(serialize = "interFloor")]
    InterFloor,
    /// Insulated roof
    #[strum(serialize = "insulatedRoof")]
    InsulatedRoof,
    /// Roof without insulation
    #[strum(serialize = "uninsulatedRoof")]
    UninsulatedRoof,
}

/// Roof types, all of them additive
pub const ROOF_TYPES: [RoofType; 5] = [
    RoofType::PlainSlab,
    RoofType::InsulatedSlab,
    RoofType::InterFloor,
    RoofType::InsulatedRoof,
    RoofType::UninsulatedRoof,
];

// ==================== Load categories

/// Thermal load category (I to VIII).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// I - Windows, solar gains
    SolarWindows,
    /// II - Windows, transmission
    TransmissionWindows,
    /// III - Walls
    Walls,
    /// IV - Roof
    Roof,
    /// V - Floor
    Floor,
    /// VI - People
    Occupancy,
    /// VII - Lighting and appliances
    Equipment,
    /// VIII - Doors and open apertures
    OpenApertures,
}

/// Load categories, in report order
pub const CATEGORIES: [Category; 8] = [
    Category::SolarWindows,
    Category::TransmissionWindows,
    Category::Walls,
    Category::Roof,
    Category::Floor,
    Category::Occupancy,
    Category::Equipment,
    Category::OpenApertures,
];

impl Category {
    /// Roman numeral of the category
    pub fn numeral(self) -> &'static str {
        match self {
            Category::SolarWindows => "I",
            Category::TransmissionWindows => "II",
            Category::Walls => "III",
            Category::Roof => "IV",
            Category::Floor => "V",
            Category::Occupancy => "VI",
            Category::Equipment => "VII",
            Category::OpenApertures => "VIII",
        }
    }

    /// Short description
    pub fn description(self) -> &'static str {
        match self {
            Category::SolarWindows => "Windows (solar gains)",
            Category::TransmissionWindows => "Windows (transmission)",
            Category::Walls => "Walls",
            Category::Roof => "Roof",
            Category::Floor => "Floor",
            Category::Occupancy => "People",
            Category::Equipment => "Lighting and appliances",
            Category::OpenApertures => "Doors and open apertures",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.numeral(), self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn class_names() {
        assert_eq!("internal".parse::<Shading>().unwrap(), Shading::Internal);
        assert_eq!(format!("{}", ConstructionClass::Heavy), "heavy");
        assert_eq!("insulatedRoof".parse::<RoofType>().unwrap(), RoofType::InsulatedRoof);
        assert!("south".parse::<Orientation>().is_err());
    }

    #[test]
    fn category_labels() {
        assert_eq!(format!("{}", Category::OpenApertures), "VIII - Doors and open apertures");
        let numerals: Vec<_> = CATEGORIES.iter().map(|c| c.numeral()).collect();
        assert_eq!(numerals, vec!["I", "II", "III", "IV", "V", "VI", "VII", "VIII"]);
    }
}
