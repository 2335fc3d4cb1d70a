use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use pretty_assertions::assert_eq;

use hvacload::{climate::*, types::*, *};

fn approx_equal(expected: f64, got: f64) -> bool {
    let res = (expected - got).abs() < 1e-6;
    if !res {
        eprintln!("Expected: {}, Got: {}, Diff: {}", expected, got, expected - got);
    }
    res
}

fn get_project(path: &str) -> ProjectInput {
    let path = Path::new(path);
    let mut f = File::open(path).unwrap();
    let mut contents = String::new();
    f.read_to_string(&mut contents).unwrap();
    contents.parse::<ProjectInput>().unwrap()
}

/// Room with some input in every category
fn full_room(id: &str) -> RoomInput {
    let mut room = RoomInput::new(id, "Meeting room");
    room.solar_windows.north.width = 2.0;
    room.solar_windows.north.height = 1.5;
    room.solar_windows.southwest.width = 1.0;
    room.solar_windows.southwest.height = 1.0;
    room.solar_windows.southwest.shading = Shading::External;
    room.transmission_windows.glass_block.width = 2.0;
    room.transmission_windows.glass_block.height = 1.0;
    room.walls.other_exterior.width = 6.0;
    room.walls.other_exterior.height = 2.5;
    room.roof.insulated_slab.length = 6.0;
    room.roof.insulated_slab.width = 4.0;
    room.floor.length = 6.0;
    room.floor.width = 4.0;
    room.occupancy.normal_activity = 8.0;
    room.equipment.incandescent_w = 200.0;
    room.equipment.motors_hp = 1.0;
    room.open_apertures.width = 1.0;
    room.open_apertures.height = 2.0;
    room
}

fn small_room(id: &str) -> RoomInput {
    let mut room = RoomInput::new(id, "Storage");
    room.walls.interior.width = 3.0;
    room.walls.interior.height = 2.0;
    room.floor.length = 2.0;
    room.floor.width = 2.0;
    room
}

#[test]
fn full_room_categories() {
    let load = room_load(&full_room("r1"), 1.0);
    assert_eq!(load.solar_windows, 3000.0 + 480.0);
    assert_eq!(load.transmission_windows, 210.0);
    assert_eq!(load.walls, 15.0 * 84.0);
    assert_eq!(load.roof, 24.0 * 125.0);
    assert_eq!(load.floor, 24.0 * 52.0);
    assert_eq!(load.occupancy, 8.0 * 630.0);
    assert_eq!(load.equipment, 800.0 + 645.0);
    assert_eq!(load.open_apertures, 1260.0);
    assert!(approx_equal(load.categories_sum(), load.subtotal_before_climate));
}

#[test]
fn totals_are_consistent() {
    for factor in &[0.85, 0.9, 0.95, 1.0, 1.05] {
        let load = room_load(&full_room("r1"), *factor);
        assert!(approx_equal(load.categories_sum(), load.subtotal_before_climate));
        assert!(approx_equal(load.subtotal_before_climate * factor, load.total_after_climate));
        assert!(approx_equal(load.total_after_climate / 12000.0, load.total_in_tons));
        assert!(approx_equal(load.total_after_climate * 0.252, load.total_in_kilocalories));
    }
}

#[test]
fn project_totals_add_up_rooms() {
    let rooms = vec![full_room("a"), small_room("b"), full_room("c")];
    let res = project_load(&rooms, &ClimateSelection::with_region("PR"));
    let sum: LoadBreakdown = res.rooms.values().sum();
    for category in &CATEGORIES {
        assert!(approx_equal(sum.get(*category), res.totals.get(*category)));
    }
    assert!(approx_equal(sum.total_after_climate, res.totals.total_after_climate));
    assert!(approx_equal(sum.total_in_tons, res.totals.total_in_tons));
}

#[test]
fn project_load_is_order_independent() {
    let selection = ClimateSelection::with_factor(0.9);
    let forward = project_load(&[full_room("a"), small_room("b")], &selection);
    let backward = project_load(&[small_room("b"), full_room("a")], &selection);
    assert_eq!(forward.rooms, backward.rooms);
    assert!(approx_equal(
        forward.totals.total_after_climate,
        backward.totals.total_after_climate
    ));
}

#[test]
fn region_takes_precedence_over_manual_factor() {
    for region in &REGIONS {
        let selection = ClimateSelection {
            region: Some(region.to_string()),
            manual_factor: Some(1.2),
        };
        let res = project_load(&[small_room("s")], &selection);
        assert_eq!(res.climate_factor, region.climate_factor());
        assert_eq!(res.climate_source, ClimateSource::Region(*region));
    }
}

#[test]
fn unknown_region_uses_manual_factor() {
    let selection = ClimateSelection {
        region: Some("ZZ".into()),
        manual_factor: Some(0.95),
    };
    assert_eq!(selection.resolve(), (0.95, ClimateSource::Manual));
    let selection = ClimateSelection {
        region: Some("".into()),
        manual_factor: None,
    };
    assert_eq!(selection.resolve(), (1.0, ClimateSource::Default));
}

#[test]
fn region_factor_table() {
    let cases = [
        ("AM", 1.05),
        ("PA", 1.05),
        ("BA", 0.95),
        ("RS", 0.90),
        ("SP", 0.85),
        ("DF", 1.00),
        ("PE", 1.00),
    ];
    for (code, factor) in &cases {
        assert_eq!(Region::from_code(code).unwrap().climate_factor(), *factor);
    }
    assert!(Region::from_code("XX").is_err());
}

#[test]
fn empty_project_is_zero() {
    let res = project_load(&[], &ClimateSelection::with_region("AM"));
    assert_eq!(res.climate_factor, 1.05);
    assert!(res.rooms.is_empty());
    assert_eq!(res.totals, LoadBreakdown::new());
}

#[test]
fn project_from_file() {
    let project = get_project("test_data/project_rj.json");
    assert_eq!(project.info.client, "ACME");
    assert_eq!(project.rooms.len(), 2);

    let res = project.thermal_load();
    assert_eq!(res.climate_factor, 0.85);
    assert_eq!(res.climate_source, ClimateSource::Region(Region::RJ));

    // South windows are ignored and "0,5" HP counts as zero
    let office = &res.rooms["office"];
    assert_eq!(office.solar_windows, 3000.0 + 920.0);
    assert_eq!(office.transmission_windows, 210.0);
    assert_eq!(office.walls, 10.0 * 42.0 + 12.5 * 50.0 + 7.5 * 33.0);
    assert_eq!(office.roof, 20.0 * 315.0);
    let server = &res.rooms["server"];
    assert!(approx_equal(1720.0 + 3412.0, server.equipment));
    assert_eq!(server.walls, 5.0 * 33.0);

    assert_eq!(res.totals.floor, 1040.0 + 208.0);
    assert!(approx_equal(
        (office.subtotal_before_climate + server.subtotal_before_climate) * 0.85,
        res.totals.total_after_climate
    ));
}

#[test]
fn results_to_json() {
    let project = get_project("test_data/single_window.json");
    let res = project.thermal_load();
    let json = serde_json::to_value(&res).unwrap();
    assert_eq!(json["climateFactor"], 1.0);
    assert_eq!(json["rooms"]["r1"]["subtotalBeforeClimate"], 3000.0);
    assert_eq!(json["totals"]["totalInKilocalories"], res.totals.total_in_kilocalories);
}
