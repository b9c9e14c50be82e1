//! Command dispatch

use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, Depot};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{ContainerShip, PRODUCT_TEMPERATURES};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    match &cli.command {
        Some(Commands::Demo) => _demo(&settings),
        Some(Commands::Products) => _products(),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(&settings),
            ConfigCommands::Template => {
                output::info(&Settings::template());
                Ok(())
            }
        },
        None => Ok(()),
    }
}

/// Run the sample harbor scenario.
///
/// Validation failures are reported and swallowed here; the demo always
/// finishes with a normal exit.
#[instrument(skip(settings))]
fn _demo(settings: &Settings) -> CliResult<()> {
    if let Err(e) = run_demo_scenario(settings) {
        output::error(&e);
    }
    Ok(())
}

fn run_demo_scenario(settings: &Settings) -> Result<(), ApplicationError> {
    let depot = Depot::with_prefix(&settings.serial_prefix);

    let liquid = depot.liquid_container(100.0, true);
    let chilled = depot.refrigerated_container(200.0, "Bananas", 5.0)?;
    let gas = depot.gas_container(150.0, 2.5);
    let chilled_serial = chilled.serial_number().to_string();

    let mut ship = ContainerShip::new(
        settings.ship.max_speed_knots,
        settings.ship.max_container_count,
        settings.ship.max_total_weight_tons,
    );

    for container in [liquid, chilled, gas] {
        ship.load_container(container)
            .map_err(|rejected| ApplicationError::Domain(rejected.error))?;
    }
    debug!("ship manifest: {}", ship.manifest());

    print_ship_info(&ship);

    if let Some(container) = ship
        .containers()
        .iter()
        .find(|c| c.serial_number() == chilled_serial)
    {
        output::info(container);
    }

    let replacement = depot.refrigerated_container(180.0, "Fish", 4.5)?;
    ship.replace_container(&chilled_serial, replacement)
        .map_err(|rejected| ApplicationError::Domain(rejected.error))?;

    print_ship_info(&ship);
    Ok(())
}

fn print_ship_info(ship: &ContainerShip) {
    output::header("Container Ship");
    output::detail(&format!("Max Speed: {} knots", ship.max_speed_knots()));
    output::detail(&format!(
        "Max Container Count: {}",
        ship.max_container_count()
    ));
    output::detail(&format!(
        "Max Total Weight: {} tons",
        ship.max_total_weight_tons()
    ));
    let mut tree = Tree::new(format!(
        "Number of Loaded Containers: {}",
        ship.container_count()
    ));
    for container in ship.containers() {
        tree.push(container.to_string());
    }
    output::info(&tree);
}

#[instrument]
fn _products() -> CliResult<()> {
    output::header("Refrigerated products");
    for (product, temperature) in PRODUCT_TEMPERATURES {
        output::detail(&format!(
            "{}: required temperature {}",
            product, temperature
        ));
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _config_show(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}
