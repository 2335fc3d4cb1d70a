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

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde_derive::{Deserialize, Serialize};

use super::{Category, CATEGORIES};

/// Thermal load by category and totals [BTU/h], for a room or a set of rooms.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBreakdown {
    /// I - Windows, solar gains [BTU/h]
    pub solar_windows: f64,
    /// II - Windows, transmission [BTU/h]
    pub transmission_windows: f64,
    /// III - Walls [BTU/h]
    pub walls: f64,
    /// IV - Roof [BTU/h]
    pub roof: f64,
    /// V - Floor [BTU/h]
    pub floor: f64,
    /// VI - People [BTU/h]
    pub occupancy: f64,
    /// VII - Lighting and appliances [BTU/h]
    pub equipment: f64,
    /// VIII - Doors and open apertures [BTU/h]
    pub open_apertures: f64,
    /// Sum of categories I to VIII, before the climate correction [BTU/h]
    pub subtotal_before_climate: f64,
    /// Subtotal corrected by the climate factor [BTU/h]
    pub total_after_climate: f64,
    /// Corrected total [TR]
    pub total_in_tons: f64,
    /// Corrected total [kcal/h]
    pub total_in_kilocalories: f64,
}

impl LoadBreakdown {
    /// All zero breakdown
    pub fn new() -> Self {
        Default::default()
    }

    /// Load of a category [BTU/h]
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::SolarWindows => self.solar_windows,
            Category::TransmissionWindows => self.transmission_windows,
            Category::Walls => self.walls,
            Category::Roof => self.roof,
            Category::Floor => self.floor,
            Category::Occupancy => self.occupancy,
            Category::Equipment => self.equipment,
            Category::OpenApertures => self.open_apertures,
        }
    }

    /// Category loads, in report order
    pub fn categories(&self) -> [(Category, f64); 8] {
        let mut list = [(Category::SolarWindows, 0.0); 8];
        for (item, category) in list.iter_mut().zip(CATEGORIES.iter()) {
            *item = (*category, self.get(*category));
        }
        list
    }

    /// Sum of the category loads [BTU/h]
    pub fn categories_sum(&self) -> f64 {
        CATEGORIES.iter().map(|c| self.get(*c)).sum()
    }
}

impl fmt::Display for LoadBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ subtotal: {:.2}, total: {:.2} BTU/h, {:.2} TR, {:.2} kcal/h }}",
            self.subtotal_before_climate,
            self.total_after_climate,
            self.total_in_tons,
            self.total_in_kilocalories
        )
    }
}

// Field by field addition, used to fold room results into project totals
impl Add for LoadBreakdown {
    type Output = LoadBreakdown;

    fn add(self, other: LoadBreakdown) -> LoadBreakdown {
        LoadBreakdown {
            solar_windows: self.solar_windows + other.solar_windows,
            transmission_windows: self.transmission_windows + other.transmission_windows,
            walls: self.walls + other.walls,
            roof: self.roof + other.roof,
            floor: self.floor + other.floor,
            occupancy: self.occupancy + other.occupancy,
            equipment: self.equipment + other.equipment,
            open_apertures: self.open_apertures + other.open_apertures,
            subtotal_before_climate: self.subtotal_before_climate + other.subtotal_before_climate,
            total_after_climate: self.total_after_climate + other.total_after_climate,
            total_in_tons: self.total_in_tons + other.total_in_tons,
            total_in_kilocalories: self.total_in_kilocalories + other.total_in_kilocalories,
        }
    }
}

impl<'a> Add for &'a LoadBreakdown {
    type Output = LoadBreakdown;

    fn add(self, other: &LoadBreakdown) -> LoadBreakdown {
        *self + *other
    }
}

impl AddAssign for LoadBreakdown {
    fn add_assign(&mut self, other: LoadBreakdown) {
        *self = *self + other;
    }
}

impl Sum for LoadBreakdown {
    fn sum<I: Iterator<Item = LoadBreakdown>>(iter: I) -> LoadBreakdown {
        iter.fold(LoadBreakdown::new(), Add::add)
    }
}

impl<'a> Sum<&'a LoadBreakdown> for LoadBreakdown {
    fn sum<I: Iterator<Item = &'a LoadBreakdown>>(iter: I) -> LoadBreakdown {
        iter.fold(LoadBreakdown::new(), |acc, b| acc + *b)
    }
}
