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
hvacload
========

This crate provides a library and binary that **computes the thermal (cooling) load of
buildings** with a table-driven heat gain method: each room input (window, wall, roof and floor
surfaces, people, lighting and appliances) is multiplied by a tabulated coefficient, grouped in
eight load categories and corrected with a regional climate factor.

Results are given in BTU/h, refrigeration tons (TR) and kcal/h, for every room and for the whole
project.

It holds the following assumptions:

- south facing windows have no solar gain category
- roof types are additive, a room may have several of them at the same time
- missing or non numeric input values count as zero and negative values are not rejected
- a selected region always sets the climate factor, a manual factor is only used without a
  known region

# Example

```rust
use hvacload::*;
use hvacload::asplain::AsPlain;
use hvacload::types::{ClimateSelection, RoomInput};

let mut room = RoomInput::new("r1", "Office");
room.solar_windows.north.width = 2.0;
room.solar_windows.north.height = 1.5;
room.floor.length = 5.0;
room.floor.width = 4.0;

let result = project_load(&[room], &ClimateSelection::with_region("RJ"));

assert_eq!(result.climate_factor, 0.85);
println!("{}", result.totals.to_plain());
```

*/

#![deny(missing_docs)]

mod project;
mod room;

pub mod asplain;
pub mod climate;
pub mod coefficients;
pub mod error;
pub mod types;

pub use project::*;
pub use room::*;

/// Library version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
