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
Room thermal load
=================

Thermal load of a single room with the table method:

- each input quantity (surface, person, W, kW, HP) is multiplied by its coefficient
- quantities are grouped in eight categories (I to VIII)
- the sum of categories is corrected by the climate factor
- the corrected total is also expressed in refrigeration tons and kcal/h

The computation is total: it never fails and it doesn't check signs or ranges.
*/

use crate::coefficients::{Coefficients, BTU_PER_TON, KCAL_PER_BTU, STANDARD_COEFFICIENTS};
use crate::types::{LoadBreakdown, RoomInput, ORIENTATIONS, ROOF_TYPES};

/// Thermal load of a room using the standard coefficients.
///
/// # Arguments
///
/// * `room` - room description
/// * `climate_factor` - climate correction factor [-]
pub fn room_load(room: &RoomInput, climate_factor: f64) -> LoadBreakdown {
    room_load_with(room, climate_factor, &STANDARD_COEFFICIENTS)
}

/// Thermal load of a room using the given coefficient table.
pub fn room_load_with(room: &RoomInput, climate_factor: f64, coefs: &Coefficients) -> LoadBreakdown {
    let solar_windows = solar_windows_load(room, coefs);
    let transmission_windows = transmission_windows_load(room, coefs);
    let walls = walls_load(room, coefs);
    let roof = roof_load(room, coefs);
    let floor = room.floor.area() * coefs.floor;
    let occupancy = occupancy_load(room, coefs);
    let equipment = equipment_load(room, coefs);
    let open_apertures = room.open_apertures.area() * coefs.open_aperture;

    let subtotal_before_climate = solar_windows
        + transmission_windows
        + walls
        + roof
        + floor
        + occupancy
        + equipment
        + open_apertures;
    let total_after_climate = subtotal_before_climate * climate_factor;

    LoadBreakdown {
        solar_windows,
        transmission_windows,
        walls,
        roof,
        floor,
        occupancy,
        equipment,
        open_apertures,
        subtotal_before_climate,
        total_after_climate,
        total_in_tons: total_after_climate / BTU_PER_TON,
        total_in_kilocalories: total_after_climate * KCAL_PER_BTU,
    }
}

/// I - Windows with solar gains. There's no south orientation.
fn solar_windows_load(room: &RoomInput, coefs: &Coefficients) -> f64 {
    ORIENTATIONS
        .iter()
        .map(|orientation| {
            let window = room.solar_windows.get(*orientation);
            window.area() * coefs.solar(*orientation).get(window.shading)
        })
        .sum()
}

/// II - Windows, transmission only
fn transmission_windows_load(room: &RoomInput, coefs: &Coefficients) -> f64 {
    let windows = &room.transmission_windows;
    windows.plain_glass.area() * coefs.plain_glass + windows.glass_block.area() * coefs.glass_block
}

/// III - Walls. Construction class only applies to exterior walls.
fn walls_load(room: &RoomInput, coefs: &Coefficients) -> f64 {
    let walls = &room.walls;
    let class = walls.construction_class;
    walls.south_exterior.area() * coefs.wall_south.get(class)
        + walls.other_exterior.area() * coefs.wall_other.get(class)
        + walls.interior.area() * coefs.wall_interior
}

/// IV - Roof. All roof types add up, even if they overlap.
fn roof_load(room: &RoomInput, coefs: &Coefficients) -> f64 {
    ROOF_TYPES
        .iter()
        .map(|roof_type| room.roof.get(*roof_type).area() * coefs.roof(*roof_type))
        .sum()
}

/// VI - People
fn occupancy_load(room: &RoomInput, coefs: &Coefficients) -> f64 {
    let people = &room.occupancy;
    people.normal_activity * coefs.person_normal + people.physical_activity * coefs.person_physical
}

/// VII - Lighting and appliances
fn equipment_load(room: &RoomInput, coefs: &Coefficients) -> f64 {
    let eq = &room.equipment;
    eq.incandescent_w * coefs.incandescent
        + eq.fluorescent_w * coefs.fluorescent
        + eq.appliances_kw * coefs.appliances
        + eq.motors_hp * coefs.motors
        + eq.computers_w * coefs.computers
}
