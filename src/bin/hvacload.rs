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

#[macro_use]
extern crate clap;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;

use clap::{App, AppSettings, Arg};
use failure::Error;
use failure::ResultExt;

use hvacload::asplain::{project_to_plain, AsPlain};
use hvacload::climate::{self, Region, REGIONS};
use hvacload::types::ProjectInput;

// Helpers --------------------------------------------------------------------------------------

fn readfile(path: &Path) -> Result<String, Error> {
    let mut f = File::open(path).context(format!("File {} not found", path.display()))?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .context("Error reading the file")?;
    Ok(contents)
}

fn readstdin() -> Result<String, Error> {
    let mut contents = String::new();
    std::io::stdin()
        .read_to_string(&mut contents)
        .context("Error reading from stdin")?;
    Ok(contents)
}

fn writefile(path: &Path, content: &[u8]) {
    let res = File::create(&path).and_then(|mut file| file.write_all(content));
    if let Err(err) = res {
        eprintln!(
            "ERROR: could not write to \"{}\": {}",
            path.display(),
            err
        );
        exit(exitcode::CANTCREAT);
    }
}

/// Reads the project document from a file or from stdin ("-")
fn get_project(input: &str, verbosity: u64) -> ProjectInput {
    let (source, contents) = if input == "-" {
        ("stdin".to_string(), readstdin())
    } else {
        let path = Path::new(input);
        (format!("\"{}\"", path.display()), readfile(path))
    };
    let contents = contents.unwrap_or_else(|error| {
        eprintln!("ERROR: could not read the project input from {}", source);
        if verbosity > 2 {
            println!("{}", error)
        };
        exit(exitcode::IOERR);
    });
    println!("Project input: {}", source);
    contents.parse().unwrap_or_else(|error| {
        eprintln!("ERROR: wrong format of the project input {} ({})", source, error);
        exit(exitcode::DATAERR);
    })
}

/// Checks the manual climate factor given in the CLI.
fn validate_factor(matches: &clap::ArgMatches<'_>, verbosity: u64) -> Option<f64> {
    if !matches.is_present("factor") {
        return None;
    }
    let factor = value_t!(matches, "factor", f64).unwrap_or_else(|error| {
        eprintln!("ERROR: the climate factor is not a valid number");
        if verbosity > 2 {
            println!("{}", error)
        };
        exit(exitcode::DATAERR);
    });
    Some(climate::check_manual_factor(factor).unwrap_or_else(|error| {
        eprintln!("ERROR: {}", error);
        exit(exitcode::DATAERR);
    }))
}

/// Climate selection
/// CLI arguments > project input > default value (DEFAULT_CLIMATE_FACTOR = 1.0)
fn set_climate(project: &mut ProjectInput, matches: &clap::ArgMatches<'_>, verbosity: u64) {
    if let Some(code) = matches.value_of("region") {
        println!("Region (user): {}", code);
        project.climate.region = Some(code.to_string());
    } else if let Some(code) = &project.climate.region {
        println!("Region (input file): {}", code);
        if project.climate.region().is_none() && !code.trim().is_empty() {
            println!("WARNING: unknown region code \"{}\", region ignored", code);
        }
    }

    if let Some(factor) = validate_factor(matches, verbosity) {
        println!("Manual climate factor (user): {:.2}", factor);
        project.climate.manual_factor = Some(factor);
    } else if let Some(factor) = project.climate.manual_factor {
        println!("Manual climate factor (input file): {:.2}", factor);
        if climate::check_manual_factor(factor).is_err() {
            println!(
                "WARNING: manual climate factor ({:.2}) outside of the [{:.2}, {:.2}] range",
                factor,
                climate::MANUAL_FACTOR_MIN,
                climate::MANUAL_FACTOR_MAX
            );
        }
    }

    if let (Some(region), Some(factor)) = (project.climate.region(), project.climate.manual_factor) {
        println!(
            "WARNING: the factor of region {} ({:.2}) is used instead of the manual climate factor ({:.2})",
            region,
            region.climate_factor(),
            factor
        );
    }
}

// Main -------------------------------------------------------------------------------------------

fn main() {
    let region_codes: Vec<String> = REGIONS.iter().map(Region::to_string).collect();
    let region_values: Vec<&str> = region_codes.iter().map(String::as_str).collect();

    let matches = App::new("HvacLoad")
        .bin_name("hvacload")
        .version(env!("CARGO_PKG_VERSION"))
        .about("HvacLoad - Thermal (cooling) load of buildings with a table-driven heat gain method.")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("input")
            .short("i")
            .long("input")
            .value_name("INPUT")
            .required_unless("showlicense")
            .help("Project input file (JSON). Use - to read from stdin")
            .takes_value(true)
            .display_order(1))
        .arg(Arg::with_name("region")
            .short("r")
            .long("region")
            .value_name("REGION")
            .possible_values(&region_values)
            .help("Region code that sets the climate factor\n")
            .takes_value(true)
            .display_order(2))
        .arg(Arg::with_name("factor")
            .short("f")
            .long("factor")
            .value_name("FACTOR")
            .help("Manual climate factor (0.8 - 1.2), only used without a region")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("output_json")
            .long("json")
            .value_name("OUTPUT_JSON")
            .help("Output file for the detailed results in JSON format")
            .takes_value(true))
        .arg(Arg::with_name("output_input")
            .long("oi")
            .value_name("OUTPUT_INPUT")
            .help("Output file for the normalized project input")
            .takes_value(true))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("license")
            .help("Shows the program license (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!(
            "
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE."
        );
        exit(exitcode::OK);
    }

    // Prologue -----------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");

    if verbosity > 2 {
        println!("Options: ----------");
        println!("{:#?}", matches);
        println!("-------------------");
    }

    println!("** Input data");

    // Project data -------------------------------------------------------------------------------
    let mut project = get_project(matches.value_of("input").unwrap_or("-"), verbosity);

    if verbosity > 1 {
        println!("Rooms: {}", project.rooms.len());
        for room in &project.rooms {
            println!("  [{}] {}", room.id, room.name);
        }
    }

    for id in project.repeated_ids() {
        println!(
            "WARNING: room id \"{}\" is repeated, only the last room with this id is reported but all of them add up to the project totals",
            id
        );
    }

    // Climate factor -----------------------------------------------------------------------------
    set_climate(&mut project, &matches, verbosity);

    // Normalized input output ----------------------------------------------------------------------
    if let Some(path) = matches.value_of_os("output_input") {
        let path = Path::new(path);
        let json = serde_json::to_string_pretty(&project).unwrap_or_else(|error| {
            eprintln!("ERROR: could not convert the project input to JSON");
            if verbosity > 2 {
                println!("{}", error)
            };
            exit(exitcode::DATAERR);
        });
        writefile(&path, json.as_bytes());
        if verbosity > 0 {
            println!("Normalized project input saved to: {}", path.display());
        }
    }

    // Thermal load ---------------------------------------------------------------------------------
    let result = project.thermal_load();

    if verbosity > 0 {
        println!(
            "Climate factor: {:.2} ({})",
            result.climate_factor,
            result.climate_source.to_plain()
        );
    }

    // Results -------------------------------------------------------------------------------------
    if let Some(path) = matches.value_of_os("output_json") {
        let path = Path::new(path);
        if verbosity > 0 {
            println!("Results in JSON format: {}", path.display());
        }
        let json = serde_json::to_string_pretty(&result).unwrap_or_else(|error| {
            eprintln!("ERROR: could not convert the results to JSON");
            if verbosity > 2 {
                println!("{}", error)
            };
            exit(exitcode::DATAERR);
        });
        writefile(&path, json.as_bytes());
    }

    // Plain report is always shown
    println!("** Thermal load");
    println!("{}", project_to_plain(&project, &result));
}
