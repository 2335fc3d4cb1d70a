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

/*! # Plain text reports

Compact text representation of thermal load results, with two decimals.
*/

use itertools::Itertools; // join

use crate::types::{ClimateSource, LoadBreakdown, ProjectInput, ProjectResult};

/// Compact plain text representation
pub trait AsPlain {
    /// Get in plain format
    fn to_plain(&self) -> String;
}

impl AsPlain for LoadBreakdown {
    fn to_plain(&self) -> String {
        let categories = self
            .categories()
            .iter()
            .map(|(category, value)| format!("{}: {:.2} BTU/h", category, value))
            .join("\n");
        format!(
            "{}
Subtotal = {:.2} BTU/h
Total = {:.2} BTU/h, {:.2} TR, {:.2} kcal/h",
            categories,
            self.subtotal_before_climate,
            self.total_after_climate,
            self.total_in_tons,
            self.total_in_kilocalories
        )
    }
}

impl AsPlain for ClimateSource {
    fn to_plain(&self) -> String {
        match self {
            ClimateSource::Region(region) => format!("region {} - {}", region, region.name()),
            ClimateSource::Manual => "manual".to_string(),
            ClimateSource::Default => "default".to_string(),
        }
    }
}

/// Project report: general data, rooms in input order and project totals
pub fn project_to_plain(input: &ProjectInput, result: &ProjectResult) -> String {
    let mut header = Vec::new();
    if !input.info.client.is_empty() {
        header.push(format!("Client: {}", input.info.client));
    }
    if !input.info.location.is_empty() {
        header.push(format!("Location: {}", input.info.location));
    }
    header.push(format!(
        "Climate factor = {:.2} ({})",
        result.climate_factor,
        result.climate_source.to_plain()
    ));

    // Repeated ids hold the result of their last room
    let rooms = &input.rooms;
    let room_blocks = rooms
        .iter()
        .enumerate()
        .filter(|(i, room)| !rooms[i + 1..].iter().any(|other| other.id == room.id))
        .filter_map(|(_, room)| {
            result.rooms.get(&room.id).map(|load| {
                format!("** Room \"{}\" [{}]\n{}", room.name, room.id, load.to_plain())
            })
        })
        .join("\n\n");

    let mut out = format!("** Project\n{}\n", header.join("\n"));
    if !room_blocks.is_empty() {
        out.push_str(&format!("\n{}\n", room_blocks));
    }
    let repeated = input.repeated_ids();
    let count = if repeated.is_empty() {
        format!("{} rooms", rooms.len())
    } else {
        format!("{} rooms, repeated ids: {}", rooms.len(), repeated.iter().join(", "))
    };
    out.push_str(&format!(
        "\n** Project totals ({})\n{}\n",
        count,
        result.totals.to_plain()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::climate::Region;
    use crate::types::{ClimateSelection, RoomInput};
    use pretty_assertions::assert_eq;

    #[test]
    fn breakdown_to_plain() {
        let mut room = RoomInput::new("r1", "Office");
        room.solar_windows.north.width = 2.0;
        room.solar_windows.north.height = 1.5;
        let load = crate::room_load(&room, 1.0);
        assert_eq!(
            load.to_plain(),
            "I - Windows (solar gains): 3000.00 BTU/h
II - Windows (transmission): 0.00 BTU/h
III - Walls: 0.00 BTU/h
IV - Roof: 0.00 BTU/h
V - Floor: 0.00 BTU/h
VI - People: 0.00 BTU/h
VII - Lighting and appliances: 0.00 BTU/h
VIII - Doors and open apertures: 0.00 BTU/h
Subtotal = 3000.00 BTU/h
Total = 3000.00 BTU/h, 0.25 TR, 756.00 kcal/h"
        );
    }

    #[test]
    fn climate_source_to_plain() {
        assert_eq!(ClimateSource::Region(Region::RJ).to_plain(), "region RJ - Rio de Janeiro");
        assert_eq!(ClimateSource::Manual.to_plain(), "manual");
    }

    #[test]
    fn project_report() {
        let mut input = ProjectInput::default();
        input.info.client = "ACME".into();
        input.climate = ClimateSelection::with_region("SP");
        input.rooms.push(RoomInput::new("a", "Hall"));
        input.rooms.push(RoomInput::new("b", "Office"));
        input.rooms.push(RoomInput::new("a", "Kitchen"));
        let result = input.thermal_load();
        let report = project_to_plain(&input, &result);
        assert!(report.starts_with("** Project\nClient: ACME\nClimate factor = 0.85 (region SP - São Paulo)\n"));
        assert!(!report.contains("Location:"));
        assert!(!report.contains("\"Hall\""));
        assert!(report.contains("** Room \"Office\" [b]"));
        assert!(report.contains("** Room \"Kitchen\" [a]"));
        assert!(report.contains("** Project totals (3 rooms, repeated ids: a)"));
    }
}
