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
Climate correction
==================

Regional climate factors for the 27 federative units and resolution of the climate factor that
applies to a project.

Precedence:

1. table value of the selected region, when the code is known (any manual value is ignored)
2. manual factor, when it is a positive number
3. default factor (1.0)

Unknown region codes are not an error here: they behave as if no region was selected.
*/

use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::{HvacError, Result};
use crate::types::{ClimateSelection, ClimateSource};

/// Climate factor used when no region or manual factor is available
pub const DEFAULT_CLIMATE_FACTOR: f64 = 1.0;
/// Lower bound accepted for manual climate factors
pub const MANUAL_FACTOR_MIN: f64 = 0.8;
/// Upper bound accepted for manual climate factors
pub const MANUAL_FACTOR_MAX: f64 = 1.2;

/// Administrative region (federative unit) with a tabulated climate factor
#[allow(missing_docs)]
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString,
)]
pub enum Region {
    AC,
    AL,
    AP,
    AM,
    BA,
    CE,
    DF,
    ES,
    GO,
    MA,
    MT,
    MS,
    MG,
    PA,
    PB,
    PR,
    PE,
    PI,
    RJ,
    RN,
    RS,
    RO,
    RR,
    SC,
    SP,
    SE,
    TO,
}

/// Regions, sorted by name
pub const REGIONS: [Region; 27] = [
    Region::AC,
    Region::AL,
    Region::AP,
    Region::AM,
    Region::BA,
    Region::CE,
    Region::DF,
    Region::ES,
    Region::GO,
    Region::MA,
    Region::MT,
    Region::MS,
    Region::MG,
    Region::PA,
    Region::PB,
    Region::PR,
    Region::PE,
    Region::PI,
    Region::RJ,
    Region::RN,
    Region::RS,
    Region::RO,
    Region::RR,
    Region::SC,
    Region::SP,
    Region::SE,
    Region::TO,
];

impl Region {
    /// Region from its two letter code
    pub fn from_code(code: &str) -> Result<Region> {
        code.trim()
            .parse()
            .map_err(|_| HvacError::RegionUnknown(code.into()))
    }

    /// Climate factor of the region [-]
    pub fn climate_factor(self) -> f64 {
        use Region::*;
        match self {
            AM | RR | PA | AP | MA => 1.05,
            BA => 0.95,
            PR | SC | RS => 0.90,
            MG | RJ | SP => 0.85,
            AC | RO | TO | PI | CE | RN | PB | PE | AL | SE | MT | MS | GO | DF | ES => 1.00,
        }
    }

    /// Full name of the region
    pub fn name(self) -> &'static str {
        use Region::*;
        match self {
            AC => "Acre",
            AL => "Alagoas",
            AP => "Amapá",
            AM => "Amazonas",
            BA => "Bahia",
            CE => "Ceará",
            DF => "Distrito Federal",
            ES => "Espírito Santo",
            GO => "Goiás",
            MA => "Maranhão",
            MT => "Mato Grosso",
            MS => "Mato Grosso do Sul",
            MG => "Minas Gerais",
            PA => "Pará",
            PB => "Paraíba",
            PR => "Paraná",
            PE => "Pernambuco",
            PI => "Piauí",
            RJ => "Rio de Janeiro",
            RN => "Rio Grande do Norte",
            RS => "Rio Grande do Sul",
            RO => "Rondônia",
            RR => "Roraima",
            SC => "Santa Catarina",
            SP => "São Paulo",
            SE => "Sergipe",
            TO => "Tocantins",
        }
    }
}

/// Checks that a manual climate factor lies in [MANUAL_FACTOR_MIN, MANUAL_FACTOR_MAX]
pub fn check_manual_factor(factor: f64) -> Result<f64> {
    if factor >= MANUAL_FACTOR_MIN && factor <= MANUAL_FACTOR_MAX {
        Ok(factor)
    } else {
        Err(HvacError::ClimateFactorOutOfRange(factor))
    }
}

impl ClimateSelection {
    /// Selection with a region code only
    pub fn with_region(code: &str) -> Self {
        ClimateSelection {
            region: Some(code.to_string()),
            manual_factor: None,
        }
    }

    /// Selection with a manual factor only
    pub fn with_factor(factor: f64) -> Self {
        ClimateSelection {
            region: None,
            manual_factor: Some(factor),
        }
    }

    /// Selected region, if the code is known. Empty codes mean no selection.
    pub fn region(&self) -> Option<Region> {
        self.region
            .as_ref()
            .filter(|code| !code.trim().is_empty())
            .and_then(|code| Region::from_code(code).ok())
    }

    /// Climate factor to apply and its origin
    pub fn resolve(&self) -> (f64, ClimateSource) {
        if let Some(region) = self.region() {
            return (region.climate_factor(), ClimateSource::Region(region));
        }
        match self.manual_factor {
            Some(factor) if factor > 0.0 && factor.is_finite() => (factor, ClimateSource::Manual),
            _ => (DEFAULT_CLIMATE_FACTOR, ClimateSource::Default),
        }
    }

    /// Climate factor to apply
    pub fn effective_factor(&self) -> f64 {
        self.resolve().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn climate_table() {
        assert_eq!(REGIONS.len(), 27);
        assert_eq!(Region::RJ.climate_factor(), 0.85);
        assert_eq!(Region::AM.climate_factor(), 1.05);
        assert_eq!(Region::BA.climate_factor(), 0.95);
        assert_eq!(Region::RS.climate_factor(), 0.90);
        assert_eq!(Region::DF.climate_factor(), 1.00);
        assert!(REGIONS
            .iter()
            .all(|r| r.climate_factor() >= 0.85 && r.climate_factor() <= 1.05));
        let n_default = REGIONS.iter().filter(|r| r.climate_factor() == 1.0).count();
        assert_eq!(n_default, 15);
    }

    #[test]
    fn region_codes() {
        assert_eq!(Region::from_code(" SP ").unwrap(), Region::SP);
        assert_eq!(format!("{}", Region::MG), "MG");
        assert_eq!(Region::SP.name(), "São Paulo");
        match Region::from_code("XX") {
            Err(HvacError::RegionUnknown(code)) => assert_eq!(code, "XX"),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn region_wins_over_manual_factor() {
        let sel = ClimateSelection {
            region: Some("RJ".into()),
            manual_factor: Some(1.1),
        };
        assert_eq!(sel.resolve(), (0.85, ClimateSource::Region(Region::RJ)));
    }

    #[test]
    fn manual_and_default_factors() {
        assert_eq!(ClimateSelection::with_factor(1.1).resolve(), (1.1, ClimateSource::Manual));
        assert_eq!(ClimateSelection::with_factor(0.0).effective_factor(), 1.0);
        assert_eq!(ClimateSelection::with_factor(-0.9).effective_factor(), 1.0);
        assert_eq!(ClimateSelection::default().resolve(), (1.0, ClimateSource::Default));
        // Unknown or empty region codes fall back to the manual factor or the default
        let unknown = ClimateSelection {
            region: Some("ZZ".into()),
            manual_factor: Some(0.9),
        };
        assert_eq!(unknown.resolve(), (0.9, ClimateSource::Manual));
        assert_eq!(ClimateSelection::with_region("").effective_factor(), 1.0);
        assert_eq!(ClimateSelection::with_region("ZZ").effective_factor(), 1.0);
    }

    #[test]
    fn manual_factor_range() {
        assert_eq!(check_manual_factor(0.8).unwrap(), 0.8);
        assert_eq!(check_manual_factor(1.2).unwrap(), 1.2);
        assert!(check_manual_factor(0.79).is_err());
        assert!(check_manual_factor(1.5).is_err());
        assert!(check_manual_factor(std::f64::NAN).is_err());
    }
}
