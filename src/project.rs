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
Project thermal load
====================

Aggregation of room loads for a whole project.

The climate factor is resolved once for the project and applied to every room. Room results are
stored by id (later rooms with a repeated id replace earlier ones) and every category and total is
added up into the project totals.
*/

use std::collections::{BTreeMap, BTreeSet};

use crate::room::room_load;
use crate::types::{ClimateSelection, LoadBreakdown, ProjectInput, ProjectResult, RoomInput};

/// Thermal load of a set of rooms.
///
/// # Arguments
///
/// * `rooms` - rooms, processed in order
/// * `selection` - region and manual climate factor of the project
pub fn project_load(rooms: &[RoomInput], selection: &ClimateSelection) -> ProjectResult {
    let (climate_factor, climate_source) = selection.resolve();

    let mut by_room: BTreeMap<String, LoadBreakdown> = BTreeMap::new();
    let mut totals = LoadBreakdown::new();
    for room in rooms {
        let load = room_load(room, climate_factor);
        totals += load;
        by_room.insert(room.id.clone(), load);
    }

    ProjectResult {
        climate_factor,
        climate_source,
        rooms: by_room,
        totals,
    }
}

impl ProjectInput {
    /// Thermal load of the project rooms with the project climate selection
    pub fn thermal_load(&self) -> ProjectResult {
        project_load(&self.rooms, &self.climate)
    }

    /// Room ids used by more than one room, in order of first appearance.
    ///
    /// Only the last room with a repeated id keeps its own result, but every room adds up to the
    /// project totals.
    pub fn repeated_ids(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut repeated = Vec::new();
        for room in &self.rooms {
            let id = room.id.as_str();
            if !seen.insert(id) && !repeated.contains(&id) {
                repeated.push(id);
            }
        }
        repeated
    }
}
