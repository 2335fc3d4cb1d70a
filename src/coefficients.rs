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
Coefficient tables
==================

Heat gain coefficients of the table method. Values are given in BTU/h per unit of the input
quantity (m2 of surface, person, W, kW or HP) and must not be changed.
*/

use serde_derive::Serialize;

use crate::types::{ConstructionClass, Orientation, RoofType, Shading};

/// BTU/h in a refrigeration ton (TR)
pub const BTU_PER_TON: f64 = 12_000.0;
/// kcal/h in one BTU/h
pub const KCAL_PER_BTU: f64 = 0.252;

/// Solar gain coefficients of an orientation, by shading class [BTU/h.m2]
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ShadingCoefficients {
    /// No sun protection
    pub none: f64,
    /// Internal protection
    pub internal: f64,
    /// External protection
    pub external: f64,
}

impl ShadingCoefficients {
    /// Coefficient for a shading class
    pub fn get(&self, shading: Shading) -> f64 {
        match shading {
            Shading::None => self.none,
            Shading::Internal => self.internal,
            Shading::External => self.external,
        }
    }
}

/// Wall coefficients by construction weight [BTU/h.m2]
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ConstructionCoefficients {
    /// Light construction
    pub light: f64,
    /// Heavy construction
    pub heavy: f64,
}

impl ConstructionCoefficients {
    /// Coefficient for a construction class
    pub fn get(&self, class: ConstructionClass) -> f64 {
        match class {
            ConstructionClass::Light => self.light,
            ConstructionClass::Heavy => self.heavy,
        }
    }
}

/// Heat gain coefficients
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Coefficients {
    /// Solar windows facing north [BTU/h.m2]
    pub solar_north: ShadingCoefficients,
    /// Solar windows facing northeast [BTU/h.m2]
    pub solar_northeast: ShadingCoefficients,
    /// Solar windows facing east [BTU/h.m2]
    pub solar_east: ShadingCoefficients,
    /// Solar windows facing southeast [BTU/h.m2]
    pub solar_southeast: ShadingCoefficients,
    /// Solar windows facing southwest [BTU/h.m2]
    pub solar_southwest: ShadingCoefficients,
    /// Solar windows facing west [BTU/h.m2]
    pub solar_west: ShadingCoefficients,
    /// Solar windows facing northwest [BTU/h.m2]
    pub solar_northwest: ShadingCoefficients,
    /// Plain glass, transmission [BTU/h.m2]
    pub plain_glass: f64,
    /// Glass block, transmission [BTU/h.m2]
    pub glass_block: f64,
    /// South facing exterior walls [BTU/h.m2]
    pub wall_south: ConstructionCoefficients,
    /// Other exterior walls [BTU/h.m2]
    pub wall_other: ConstructionCoefficients,
    /// Interior walls, any construction [BTU/h.m2]
    pub wall_interior: f64,
    /// Plain slab [BTU/h.m2]
    pub roof_plain_slab: f64,
    /// Insulated slab [BTU/h.m2]
    pub roof_insulated_slab: f64,
    /// Slab between floors [BTU/h.m2]
    pub roof_inter_floor: f64,
    /// Insulated roof [BTU/h.m2]
    pub roof_insulated: f64,
    /// Roof without insulation [BTU/h.m2]
    pub roof_uninsulated: f64,
    /// Floor [BTU/h.m2]
    pub floor: f64,
    /// Person with normal activity [BTU/h]
    pub person_normal: f64,
    /// Person with physical activity [BTU/h]
    pub person_physical: f64,
    /// Incandescent lighting [BTU/h.W]
    pub incandescent: f64,
    /// Fluorescent lighting [BTU/h.W]
    pub fluorescent: f64,
    /// Electric appliances [BTU/h.kW]
    pub appliances: f64,
    /// Motors [BTU/h.HP]
    pub motors: f64,
    /// Computers [BTU/h.W]
    pub computers: f64,
    /// Doors and open apertures [BTU/h.m2]
    pub open_aperture: f64,
}

/// Standard coefficient table
pub const STANDARD_COEFFICIENTS: Coefficients = Coefficients {
    solar_north: ShadingCoefficients {
        none: 1000.0,
        internal: 480.0,
        external: 290.0,
    },
    solar_northeast: ShadingCoefficients {
        none: 1000.0,
        internal: 400.0,
        external: 290.0,
    },
    solar_east: ShadingCoefficients {
        none: 1130.0,
        internal: 550.0,
        external: 360.0,
    },
    solar_southeast: ShadingCoefficients {
        none: 840.0,
        internal: 360.0,
        external: 290.0,
    },
    solar_southwest: ShadingCoefficients {
        none: 1680.0,
        internal: 670.0,
        external: 480.0,
    },
    solar_west: ShadingCoefficients {
        none: 2100.0,
        internal: 920.0,
        external: 630.0,
    },
    solar_northwest: ShadingCoefficients {
        none: 1500.0,
        internal: 630.0,
        external: 400.0,
    },
    plain_glass: 210.0,
    glass_block: 105.0,
    wall_south: ConstructionCoefficients {
        light: 55.0,
        heavy: 42.0,
    },
    wall_other: ConstructionCoefficients {
        light: 84.0,
        heavy: 50.0,
    },
    wall_interior: 33.0,
    roof_plain_slab: 315.0,
    roof_insulated_slab: 125.0,
    roof_inter_floor: 52.0,
    roof_insulated: 72.0,
    roof_uninsulated: 160.0,
    floor: 52.0,
    person_normal: 630.0,
    person_physical: 1000.0,
    incandescent: 4.0,
    fluorescent: 2.0,
    appliances: 860.0,
    motors: 645.0,
    computers: 3.412,
    open_aperture: 630.0,
};

impl Coefficients {
    /// Solar gain coefficients of an orientation
    pub fn solar(&self, orientation: Orientation) -> &ShadingCoefficients {
        match orientation {
            Orientation::North => &self.solar_north,
            Orientation::Northeast => &self.solar_northeast,
            Orientation::East => &self.solar_east,
            Orientation::Southeast => &self.solar_southeast,
            Orientation::Southwest => &self.solar_southwest,
            Orientation::West => &self.solar_west,
            Orientation::Northwest => &self.solar_northwest,
        }
    }

    /// Roof coefficient of a roof type
    pub fn roof(&self, roof_type: RoofType) -> f64 {
        match roof_type {
            RoofType::PlainSlab => self.roof_plain_slab,
            RoofType::InsulatedSlab => self.roof_insulated_slab,
            RoofType::InterFloor => self.roof_inter_floor,
            RoofType::InsulatedRoof => self.roof_insulated,
            RoofType::UninsulatedRoof => self.roof_uninsulated,
        }
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        STANDARD_COEFFICIENTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ORIENTATIONS, ROOF_TYPES};
    use pretty_assertions::assert_eq;

    #[test]
    fn solar_table() {
        let c = STANDARD_COEFFICIENTS;
        let table: Vec<(f64, f64, f64)> = ORIENTATIONS
            .iter()
            .map(|o| {
                let s = c.solar(*o);
                (
                    s.get(Shading::None),
                    s.get(Shading::Internal),
                    s.get(Shading::External),
                )
            })
            .collect();
        assert_eq!(
            table,
            vec![
                (1000.0, 480.0, 290.0),
                (1000.0, 400.0, 290.0),
                (1130.0, 550.0, 360.0),
                (840.0, 360.0, 290.0),
                (1680.0, 670.0, 480.0),
                (2100.0, 920.0, 630.0),
                (1500.0, 630.0, 400.0),
            ]
        );
    }

    #[test]
    fn surface_tables() {
        let c = Coefficients::default();
        assert_eq!(c.wall_south.get(ConstructionClass::Light), 55.0);
        assert_eq!(c.wall_south.get(ConstructionClass::Heavy), 42.0);
        assert_eq!(c.wall_other.get(ConstructionClass::Light), 84.0);
        assert_eq!(c.wall_other.get(ConstructionClass::Heavy), 50.0);
        let roofs: Vec<f64> = ROOF_TYPES.iter().map(|r| c.roof(*r)).collect();
        assert_eq!(roofs, vec![315.0, 125.0, 52.0, 72.0, 160.0]);
    }
}
