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
Room input data
===============

Physical and usage description of a room, as entered by the user.

All dimensions are in meters, people are counts, lighting and computers are in W, appliances in kW
and motors in HP. Every numeric value defaults to 0 when it is missing or not numeric. Negative
values are kept as they are.
*/

use serde_derive::{Deserialize, Serialize};

use super::coerce;
use super::{ConstructionClass, Orientation, RoofType, Shading};

/// Area of a rectangle
pub fn area(width: f64, height: f64) -> f64 {
    width * height
}

/// Window exposed to solar radiation
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarWindow {
    /// Width [m]
    #[serde(deserialize_with = "coerce::number")]
    pub width: f64,
    /// Height [m]
    #[serde(deserialize_with = "coerce::number")]
    pub height: f64,
    /// Sun protection
    #[serde(deserialize_with = "coerce::or_default")]
    pub shading: Shading,
}

impl SolarWindow {
    /// Window area [m2]
    pub fn area(&self) -> f64 {
        area(self.width, self.height)
    }
}

/// Rectangular surface given by width and height (windows, walls, apertures)
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Opening {
    /// Width [m]
    #[serde(deserialize_with = "coerce::number")]
    pub width: f64,
    /// Height [m]
    #[serde(deserialize_with = "coerce::number")]
    pub height: f64,
}

impl Opening {
    /// Surface area [m2]
    pub fn area(&self) -> f64 {
        area(self.width, self.height)
    }
}

/// Horizontal surface given by length and width (roofs, floors)
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Surface {
    /// Length [m]
    #[serde(deserialize_with = "coerce::number")]
    pub length: f64,
    /// Width [m]
    #[serde(deserialize_with = "coerce::number")]
    pub width: f64,
}

impl Surface {
    /// Surface area [m2]
    pub fn area(&self) -> f64 {
        area(self.length, self.width)
    }
}

/// Windows with solar gains, one per orientation (south excluded)
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarWindows {
    /// North
    #[serde(deserialize_with = "coerce::or_default")]
    pub north: SolarWindow,
    /// Northeast
    #[serde(deserialize_with = "coerce::or_default")]
    pub northeast: SolarWindow,
    /// East
    #[serde(deserialize_with = "coerce::or_default")]
    pub east: SolarWindow,
    /// Southeast
    #[serde(deserialize_with = "coerce::or_default")]
    pub southeast: SolarWindow,
    /// Southwest
    #[serde(deserialize_with = "coerce::or_default")]
    pub southwest: SolarWindow,
    /// West
    #[serde(deserialize_with = "coerce::or_default")]
    pub west: SolarWindow,
    /// Northwest
    #[serde(deserialize_with = "coerce::or_default")]
    pub northwest: SolarWindow,
}

impl SolarWindows {
    /// Window for the given orientation
    pub fn get(&self, orientation: Orientation) -> &SolarWindow {
        match orientation {
            Orientation::North => &self.north,
            Orientation::Northeast => &self.northeast,
            Orientation::East => &self.east,
            Orientation::Southeast => &self.southeast,
            Orientation::Southwest => &self.southwest,
            Orientation::West => &self.west,
            Orientation::Northwest => &self.northwest,
        }
    }

    /// Mutable window for the given orientation
    pub fn get_mut(&mut self, orientation: Orientation) -> &mut SolarWindow {
        match orientation {
            Orientation::North => &mut self.north,
            Orientation::Northeast => &mut self.northeast,
            Orientation::East => &mut self.east,
            Orientation::Southeast => &mut self.southeast,
            Orientation::Southwest => &mut self.southwest,
            Orientation::West => &mut self.west,
            Orientation::Northwest => &mut self.northwest,
        }
    }
}

/// Windows without direct solar gains
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransmissionWindows {
    /// Plain glass
    #[serde(deserialize_with = "coerce::or_default")]
    pub plain_glass: Opening,
    /// Glass block
    #[serde(deserialize_with = "coerce::or_default")]
    pub glass_block: Opening,
}

/// Walls of the room
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Walls {
    /// Construction weight, used by exterior walls only
    #[serde(deserialize_with = "coerce::or_default")]
    pub construction_class: ConstructionClass,
    /// South facing exterior walls
    #[serde(deserialize_with = "coerce::or_default")]
    pub south_exterior: Opening,
    /// Other exterior walls
    #[serde(deserialize_with = "coerce::or_default")]
    pub other_exterior: Opening,
    /// Interior walls
    #[serde(deserialize_with = "coerce::or_default")]
    pub interior: Opening,
}

/// Roof and ceiling surfaces. Types are not exclusive and every one of them adds load.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Roof {
    /// Plain concrete slab
    #[serde(deserialize_with = "coerce::or_default")]
    pub plain_slab: Surface,
    /// Insulated slab
    #[serde(deserialize_with = "coerce::or_default")]
    pub insulated_slab: Surface,
    /// Slab between floors
    #[serde(deserialize_with = "coerce::or_default")]
    pub inter_floor: Surface,
    /// Insulated roof
    #[serde(deserialize_with = "coerce::or_default")]
    pub insulated_roof: Surface,
    /// Roof without insulation
    #[serde(deserialize_with = "coerce::or_default")]
    pub uninsulated_roof: Surface,
}

impl Roof {
    /// Surface for the given roof type
    pub fn get(&self, roof_type: RoofType) -> &Surface {
        match roof_type {
            RoofType::PlainSlab => &self.plain_slab,
            RoofType::InsulatedSlab => &self.insulated_slab,
            RoofType::InterFloor => &self.inter_floor,
            RoofType::InsulatedRoof => &self.insulated_roof,
            RoofType::UninsulatedRoof => &self.uninsulated_roof,
        }
    }

    /// Mutable surface for the given roof type
    pub fn get_mut(&mut self, roof_type: RoofType) -> &mut Surface {
        match roof_type {
            RoofType::PlainSlab => &mut self.plain_slab,
            RoofType::InsulatedSlab => &mut self.insulated_slab,
            RoofType::InterFloor => &mut self.inter_floor,
            RoofType::InsulatedRoof => &mut self.insulated_roof,
            RoofType::UninsulatedRoof => &mut self.uninsulated_roof,
        }
    }
}

/// People in the room
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Occupancy {
    /// People with normal activity
    #[serde(deserialize_with = "coerce::number")]
    pub normal_activity: f64,
    /// People with physical activity
    #[serde(deserialize_with = "coerce::number")]
    pub physical_activity: f64,
}

/// Lighting and appliances
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Equipment {
    /// Incandescent lamps [W]
    #[serde(rename = "incandescentW", deserialize_with = "coerce::number")]
    pub incandescent_w: f64,
    /// Fluorescent lamps [W]
    #[serde(rename = "fluorescentW", deserialize_with = "coerce::number")]
    pub fluorescent_w: f64,
    /// Electric appliances [kW]
    #[serde(rename = "appliancesKW", deserialize_with = "coerce::number")]
    pub appliances_kw: f64,
    /// Motors [HP]
    #[serde(rename = "motorsHP", deserialize_with = "coerce::number")]
    pub motors_hp: f64,
    /// Computers [W]
    #[serde(rename = "computersW", deserialize_with = "coerce::number")]
    pub computers_w: f64,
}

/// Room description
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoomInput {
    /// Unique identifier
    #[serde(deserialize_with = "coerce::string")]
    pub id: String,
    /// Display name
    #[serde(deserialize_with = "coerce::string")]
    pub name: String,
    /// I - Windows with solar gains
    #[serde(deserialize_with = "coerce::or_default")]
    pub solar_windows: SolarWindows,
    /// II - Windows, transmission only
    #[serde(deserialize_with = "coerce::or_default")]
    pub transmission_windows: TransmissionWindows,
    /// III - Walls
    #[serde(deserialize_with = "coerce::or_default")]
    pub walls: Walls,
    /// IV - Roof
    #[serde(deserialize_with = "coerce::or_default")]
    pub roof: Roof,
    /// V - Floor
    #[serde(deserialize_with = "coerce::or_default")]
    pub floor: Surface,
    /// VI - People
    #[serde(deserialize_with = "coerce::or_default")]
    pub occupancy: Occupancy,
    /// VII - Lighting and appliances
    #[serde(deserialize_with = "coerce::or_default")]
    pub equipment: Equipment,
    /// VIII - Doors and open apertures
    #[serde(deserialize_with = "coerce::or_default")]
    pub open_apertures: Opening,
}

impl RoomInput {
    /// Empty room: no surfaces, no people, no equipment, unshaded windows and light walls
    pub fn new<I: Into<String>, N: Into<String>>(id: I, name: N) -> Self {
        RoomInput {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_room() {
        let room = RoomInput::new("r1", "Living room");
        assert_eq!(room.id, "r1");
        assert_eq!(room.walls.construction_class, ConstructionClass::Light);
        assert_eq!(room.solar_windows.west.shading, Shading::None);
        assert_eq!(room.floor.area(), 0.0);
    }

    #[test]
    fn room_from_partial_json() {
        let room: RoomInput = serde_json::from_str(
            r#"{
                "id": "k1",
                "name": "Kitchen",
                "solarWindows": {
                    "west": { "width": "1.5", "height": 2, "shading": "external" },
                    "south": { "width": 10, "height": 10, "shading": "none" }
                },
                "walls": { "constructionClass": "concrete", "interior": { "width": 3 } },
                "roof": null,
                "floor": { "length": 5, "width": "" },
                "occupancy": { "normalActivity": 2 },
                "equipment": { "appliancesKW": 1.2, "motorsHP": "x" }
            }"#,
        )
        .unwrap();

        assert_eq!(room.name, "Kitchen");
        assert_eq!(room.solar_windows.west.area(), 3.0);
        assert_eq!(room.solar_windows.west.shading, Shading::External);
        assert_eq!(room.solar_windows.north, SolarWindow::default());
        assert_eq!(room.walls.construction_class, ConstructionClass::Light);
        assert_eq!(room.walls.interior.area(), 0.0);
        assert_eq!(room.roof, Roof::default());
        assert_eq!(room.floor.area(), 0.0);
        assert_eq!(room.occupancy.normal_activity, 2.0);
        assert_eq!(room.occupancy.physical_activity, 0.0);
        assert_eq!(room.equipment.appliances_kw, 1.2);
        assert_eq!(room.equipment.motors_hp, 0.0);
    }

    #[test]
    fn serialized_field_names() {
        let json = serde_json::to_value(&RoomInput::new("a", "b")).unwrap();
        assert!(json["solarWindows"]["northwest"].is_object());
        assert!(json["solarWindows"].get("south").is_none());
        assert_eq!(json["walls"]["constructionClass"], "light");
        assert_eq!(json["equipment"]["appliancesKW"], 0.0);
        assert_eq!(json["roof"]["uninsulatedRoof"]["length"], 0.0);
    }

    #[test]
    fn numeric_room_ids() {
        let rooms: Vec<RoomInput> =
            serde_json::from_str(r#"[{ "id": 1, "name": 101 }, { "id": 2 }, { "id": null }]"#).unwrap();
        assert_eq!(rooms[0].id, "1");
        assert_eq!(rooms[0].name, "101");
        assert_eq!(rooms[1].id, "2");
        assert_eq!(rooms[2].id, "");
    }
}
