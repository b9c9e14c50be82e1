//! Tests for ship-level stowage rules

use stowage::domain::{Container, ContainerShip, DomainError, SerialGenerator};
use stowage::util::testing::init_test_setup;

fn dry_with_cargo(serials: &SerialGenerator, max_load: f64, cargo: f64) -> Container {
    let mut container = Container::dry(serials, max_load);
    container.load_cargo(cargo).unwrap();
    container
}

#[test]
fn given_full_ship_when_loading_then_capacity_exceeded_and_first_container_stays() {
    init_test_setup();
    let serials = SerialGenerator::new();
    let mut ship = ContainerShip::new(20.0, 1, 300.0);

    ship.load_container(Container::dry(&serials, 100.0)).unwrap();
    let rejected = ship
        .load_container(Container::dry(&serials, 100.0))
        .unwrap_err();

    assert_eq!(rejected.error, DomainError::CapacityExceeded(1));
    assert_eq!(rejected.container.serial_number(), "KON-C-2");
    assert_eq!(ship.container_count(), 1);
    assert_eq!(ship.containers()[0].serial_number(), "KON-C-1");
}

// The gross kilogram sum is scaled by 1000 before the comparison with the
// ton limit, so even one unit of cargo trips a 300 ton limit.
#[test]
fn given_scaled_weight_formula_when_loading_one_unit_then_weight_exceeded() {
    init_test_setup();
    let serials = SerialGenerator::new();
    let mut ship = ContainerShip::new(20.0, 10, 300.0);

    let container = dry_with_cargo(&serials, 10.0, 1.0);
    let rejected = ship.load_container(container).unwrap_err();

    assert!(matches!(rejected.error, DomainError::WeightExceeded { .. }));
    assert_eq!(ship.container_count(), 0);
}

#[test]
fn given_limit_above_scaled_sum_when_loading_then_accepted() {
    init_test_setup();
    let serials = SerialGenerator::new();
    let mut ship = ContainerShip::new(20.0, 10, 2000.0);

    let container = dry_with_cargo(&serials, 10.0, 1.0);
    ship.load_container(container).unwrap();

    assert_eq!(ship.container_count(), 1);
    assert_eq!(ship.total_weight(), 1.0);
}

#[test]
fn given_loaded_ship_when_unloading_by_serial_then_container_is_returned() {
    let serials = SerialGenerator::new();
    let mut ship = ContainerShip::new(20.0, 10, 300.0);
    ship.load_container(Container::dry(&serials, 100.0)).unwrap();
    ship.load_container(Container::dry(&serials, 100.0)).unwrap();

    let unloaded = ship.unload_container("KON-C-1").unwrap();

    assert_eq!(unloaded.serial_number(), "KON-C-1");
    assert_eq!(ship.container_count(), 1);
    assert_eq!(ship.containers()[0].serial_number(), "KON-C-2");
}

#[test]
fn given_unknown_serial_when_unloading_then_none_and_ship_unchanged() {
    let serials = SerialGenerator::new();
    let mut ship = ContainerShip::new(20.0, 10, 300.0);
    ship.load_container(Container::dry(&serials, 100.0)).unwrap();

    assert!(ship.unload_container("KON-C-99").is_none());
    assert_eq!(ship.container_count(), 1);
}

#[test]
fn given_matching_serial_when_replacing_then_old_returned_and_new_appended() {
    let serials = SerialGenerator::new();
    let mut ship = ContainerShip::new(20.0, 10, 300.0);
    ship.load_container(Container::dry(&serials, 100.0)).unwrap();
    ship.load_container(Container::dry(&serials, 100.0)).unwrap();
    let new = Container::dry(&serials, 200.0);

    let old = ship.replace_container("KON-C-1", new).unwrap();

    assert_eq!(old.serial_number(), "KON-C-1");
    assert_eq!(ship.container_count(), 2);
    // replacement goes to the end of the load order
    assert_eq!(ship.containers()[0].serial_number(), "KON-C-2");
    assert_eq!(ship.containers()[1].serial_number(), "KON-C-3");
}

#[test]
fn given_unknown_serial_when_replacing_then_not_found_and_ship_unchanged() {
    let serials = SerialGenerator::new();
    let mut ship = ContainerShip::new(20.0, 10, 300.0);
    ship.load_container(Container::dry(&serials, 100.0)).unwrap();
    let new = Container::dry(&serials, 200.0);

    let rejected = ship.replace_container("KON-C-99", new).unwrap_err();

    assert_eq!(
        rejected.error,
        DomainError::NotFound("KON-C-99".to_string())
    );
    assert_eq!(rejected.container.serial_number(), "KON-C-2");
    assert_eq!(ship.container_count(), 1);
    assert_eq!(ship.containers()[0].serial_number(), "KON-C-1");
}

// Replacement removes first and checks second; when the check fails the
// displaced container is gone for good.
#[test]
fn given_rejected_replacement_when_replacing_then_displaced_container_is_not_restored() {
    init_test_setup();
    let serials = SerialGenerator::new();
    let mut ship = ContainerShip::new(20.0, 10, 1500.0);
    ship.load_container(dry_with_cargo(&serials, 10.0, 1.0))
        .unwrap();

    let too_heavy = dry_with_cargo(&serials, 10.0, 2.0);
    let rejected = ship.replace_container("KON-C-1", too_heavy).unwrap_err();

    assert!(matches!(rejected.error, DomainError::WeightExceeded { .. }));
    assert_eq!(rejected.container.serial_number(), "KON-C-2");
    assert_eq!(ship.container_count(), 0, "old container is not restored");
}

#[test]
fn given_two_ships_when_moving_then_container_changes_hold() {
    let serials = SerialGenerator::new();
    let mut source = ContainerShip::new(20.0, 10, 300.0);
    let mut destination = ContainerShip::new(15.0, 10, 300.0);
    source
        .load_container(Container::dry(&serials, 100.0))
        .unwrap();

    source.move_container("KON-C-1", &mut destination).unwrap();

    assert_eq!(source.container_count(), 0);
    assert_eq!(destination.container_count(), 1);
    assert_eq!(destination.containers()[0].serial_number(), "KON-C-1");
}

#[test]
fn given_unknown_serial_when_moving_then_not_found_and_both_ships_unchanged() {
    let serials = SerialGenerator::new();
    let mut source = ContainerShip::new(20.0, 10, 300.0);
    let mut destination = ContainerShip::new(15.0, 10, 300.0);
    source
        .load_container(Container::dry(&serials, 100.0))
        .unwrap();

    let err = source
        .move_container("KON-C-99", &mut destination)
        .unwrap_err();

    assert_eq!(err, DomainError::NotFound("KON-C-99".to_string()));
    assert_eq!(source.container_count(), 1);
    assert_eq!(destination.container_count(), 0);
}

// Transfer is two independent steps; a refusing destination leaves the
// container stranded off both ships.
#[test]
fn given_full_destination_when_moving_then_container_is_stranded_off_both_ships() {
    init_test_setup();
    let serials = SerialGenerator::new();
    let mut source = ContainerShip::new(20.0, 10, 300.0);
    let mut destination = ContainerShip::new(15.0, 0, 300.0);
    source
        .load_container(Container::dry(&serials, 100.0))
        .unwrap();

    let err = source
        .move_container("KON-C-1", &mut destination)
        .unwrap_err();

    assert_eq!(err, DomainError::CapacityExceeded(0));
    assert_eq!(source.container_count(), 0);
    assert_eq!(destination.container_count(), 0);
}

#[test]
fn given_mixed_fleet_when_loading_three_empty_containers_then_all_accepted() {
    init_test_setup();
    let serials = SerialGenerator::new();
    let mut ship = ContainerShip::new(20.0, 10, 300.0);

    let liquid = Container::liquid(&serials, 100.0, true);
    let chilled = Container::refrigerated(&serials, 200.0, "Bananas", 5.0).unwrap();
    let gas = Container::gas(&serials, 150.0, 2.5);

    ship.load_container(liquid).unwrap();
    ship.load_container(chilled).unwrap();
    ship.load_container(gas).unwrap();

    assert_eq!(ship.container_count(), 3);
    assert_eq!(ship.total_weight(), 0.0);
    assert_eq!(ship.manifest(), "KON-C-1, KON-C-2, KON-C-3");
}

#[test]
fn given_loaded_ship_when_displaying_then_header_and_container_lines() {
    let serials = SerialGenerator::new();
    let mut ship = ContainerShip::new(20.0, 10, 300.0);
    ship.load_container(Container::dry(&serials, 100.0)).unwrap();

    let report = ship.to_string();
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "Max Speed: 20 knots");
    assert_eq!(lines[1], "Max Container Count: 10");
    assert_eq!(lines[2], "Max Total Weight: 300 tons");
    assert_eq!(lines[3], "Number of Loaded Containers: 1");
    assert!(lines[4].starts_with("Serial Number: KON-C-1"));
}
