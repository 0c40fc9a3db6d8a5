//! Harbor registry: the fleet of ships and the container yard.
//!
//! The harbor owns every ship (keyed by name, case-insensitive) and every
//! container not currently aboard a ship (the yard, in registration order).
//! Placing a container moves it from the yard into a ship's hold; retrieving
//! reverses the move. A rejected placement leaves the registry unchanged.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::container::Container;
use crate::error::{Error, Result};
use crate::serial::SerialSequence;
use crate::ship::Ship;

/// Registry of ships and yard containers for one harbor.
#[derive(Debug, Default)]
pub struct Harbor {
    ships: HashMap<String, Ship>,
    yard: Vec<Container>,
    serials: SerialSequence,
}

impl Harbor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The serial-number sequence shared by every container built for this
    /// harbor.
    pub fn serials(&self) -> &SerialSequence {
        &self.serials
    }

    /// Register a ship. Names are unique, compared case-insensitively.
    pub fn add_ship(&mut self, ship: Ship) -> Result<()> {
        let key = normalize_name(ship.name());
        if self.ships.contains_key(&key) {
            return Err(Error::DuplicateShipName {
                name: ship.name().to_string(),
            });
        }
        tracing::info!(ship = ship.name(), "ship registered");
        self.ships.insert(key, ship);
        Ok(())
    }

    /// Remove a ship from the registry, returning it (containers aboard and
    /// all) to the caller.
    pub fn remove_ship(&mut self, name: &str) -> Result<Ship> {
        self.ships
            .remove(&normalize_name(name))
            .ok_or_else(|| Error::ShipNotFound {
                name: name.to_string(),
            })
    }

    /// Look up a ship by name (case-insensitive).
    pub fn ship(&self, name: &str) -> Option<&Ship> {
        self.ships.get(&normalize_name(name))
    }

    /// All ships sorted by name.
    pub fn ships_sorted(&self) -> Vec<&Ship> {
        let mut ships: Vec<&Ship> = self.ships.values().collect();
        ships.sort_by(|a, b| a.name().cmp(b.name()));
        ships
    }

    /// Add a container to the yard, returning its serial number.
    pub fn register_container(&mut self, container: Container) -> String {
        let serial = container.serial_number().to_string();
        tracing::info!(serial = %serial, "container registered in yard");
        self.yard.push(container);
        serial
    }

    /// Look up a yard container by serial number.
    pub fn container(&self, serial_number: &str) -> Option<&Container> {
        self.yard
            .iter()
            .find(|c| c.serial_number() == serial_number)
    }

    /// Yard containers in registration order.
    pub fn containers(&self) -> &[Container] {
        &self.yard
    }

    /// Load cargo into a yard container.
    pub fn load_cargo(&mut self, serial_number: &str, mass: f64) -> Result<()> {
        let container = self
            .yard
            .iter_mut()
            .find(|c| c.serial_number() == serial_number)
            .ok_or_else(|| Error::ContainerNotFound {
                serial: serial_number.to_string(),
            })?;
        container.load_cargo(mass)
    }

    /// Move a yard container aboard a ship.
    ///
    /// If the ship refuses the container, it returns to its yard position and
    /// the admission error propagates.
    pub fn place_container(&mut self, serial_number: &str, ship_name: &str) -> Result<()> {
        let position = self
            .yard
            .iter()
            .position(|c| c.serial_number() == serial_number)
            .ok_or_else(|| Error::ContainerNotFound {
                serial: serial_number.to_string(),
            })?;
        let ship = self
            .ships
            .get_mut(&normalize_name(ship_name))
            .ok_or_else(|| Error::ShipNotFound {
                name: ship_name.to_string(),
            })?;

        let container = self.yard.remove(position);
        match ship.load_container(container) {
            Ok(()) => {
                tracing::info!(serial = serial_number, ship = ship_name, "container placed");
                Ok(())
            }
            Err(rejected) => {
                self.yard.insert(position, rejected.container);
                Err(rejected.reason)
            }
        }
    }

    /// Move a container from a ship's hold back into the yard.
    pub fn retrieve_container(&mut self, ship_name: &str, serial_number: &str) -> Result<()> {
        let ship = self
            .ships
            .get_mut(&normalize_name(ship_name))
            .ok_or_else(|| Error::ShipNotFound {
                name: ship_name.to_string(),
            })?;
        let container = ship.unload_container(serial_number)?;
        tracing::info!(serial = serial_number, ship = ship_name, "container retrieved");
        self.yard.push(container);
        Ok(())
    }
}

/// Normalize a ship name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Load a ship roster from a CSV file path.
pub fn load_ship_roster_from_path(path: &Path) -> Result<Vec<Ship>> {
    let file = fs::File::open(path)?;
    load_ship_roster(file)
}

/// Load a ship roster from a CSV reader.
///
/// Expects a header row `name,max_speed,max_containers,max_weight` (any
/// casing, trimmed fields) followed by one row per ship. Every row passes
/// through [`Ship::new`], so roster entries obey the same validation as ships
/// built by hand.
pub fn load_ship_roster<R: Read>(reader: R) -> Result<Vec<Ship>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|err| Error::RosterParse {
            row: 1,
            message: format!("failed to read roster headers: {err}"),
        })?
        .clone();

    let index_of = |field: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(field))
            .ok_or_else(|| Error::RosterParse {
                row: 1,
                message: format!("roster is missing required column {field}"),
            })
    };

    let name_idx = index_of("name")?;
    let speed_idx = index_of("max_speed")?;
    let count_idx = index_of("max_containers")?;
    let weight_idx = index_of("max_weight")?;

    let mut ships = Vec::new();
    let mut row_num: u64 = 1; // header is line 1
    for record in csv_reader.records() {
        row_num += 1;
        let record = record.map_err(|err| Error::RosterParse {
            row: row_num,
            message: err.to_string(),
        })?;

        let field = |idx: usize| record.get(idx).unwrap_or_default();
        let numeric = |idx: usize, label: &str| -> Result<f64> {
            field(idx).parse::<f64>().map_err(|err| Error::RosterParse {
                row: row_num,
                message: format!("invalid {label}: {err}"),
            })
        };

        let max_containers =
            field(count_idx)
                .parse::<usize>()
                .map_err(|err| Error::RosterParse {
                    row: row_num,
                    message: format!("invalid max_containers: {err}"),
                })?;

        let ship = Ship::new(
            field(name_idx),
            numeric(speed_idx, "max_speed")?,
            max_containers,
            numeric(weight_idx, "max_weight")?,
        )
        .map_err(|err| Error::RosterParse {
            row: row_num,
            message: err.to_string(),
        })?;
        ships.push(ship);
    }

    Ok(ships)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::ContainerSpec;

    fn harbor_with_ship(max_container_count: usize, max_weight: f64) -> Harbor {
        let mut harbor = Harbor::new();
        harbor
            .add_ship(Ship::new("Evergreen", 20.0, max_container_count, max_weight).unwrap())
            .unwrap();
        harbor
    }

    fn register_gas_container(harbor: &mut Harbor, tare_weight: f64) -> String {
        let spec = ContainerSpec::new(2.6, 12.0, tare_weight, 10000.0).unwrap();
        let container = Container::gas(spec, 8.0, harbor.serials()).unwrap();
        harbor.register_container(container)
    }

    #[test]
    fn duplicate_ship_names_are_rejected_case_insensitively() {
        let mut harbor = harbor_with_ship(5, 10000.0);
        let err = harbor
            .add_ship(Ship::new("EVERGREEN", 22.0, 3, 5000.0).unwrap())
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateShipName { .. }));
    }

    #[test]
    fn ship_lookup_ignores_case() {
        let harbor = harbor_with_ship(5, 10000.0);
        assert!(harbor.ship("evergreen").is_some());
        assert!(harbor.ship("Maersk").is_none());
    }

    #[test]
    fn removing_a_ship_returns_it_with_its_containers() {
        let mut harbor = harbor_with_ship(5, 10000.0);
        let serial = register_gas_container(&mut harbor, 400.0);
        harbor.place_container(&serial, "Evergreen").unwrap();

        let ship = harbor.remove_ship("Evergreen").unwrap();
        assert_eq!(ship.container_count(), 1);
        assert!(harbor.ship("Evergreen").is_none());
    }

    #[test]
    fn removing_an_unknown_ship_is_not_found() {
        let mut harbor = Harbor::new();
        assert!(matches!(
            harbor.remove_ship("Maersk"),
            Err(Error::ShipNotFound { .. })
        ));
    }

    #[test]
    fn placement_moves_a_container_from_yard_to_ship() {
        let mut harbor = harbor_with_ship(5, 10000.0);
        let serial = register_gas_container(&mut harbor, 400.0);

        harbor.place_container(&serial, "Evergreen").unwrap();
        assert!(harbor.container(&serial).is_none());
        assert_eq!(harbor.ship("Evergreen").unwrap().container_count(), 1);
    }

    #[test]
    fn rejected_placement_leaves_the_registry_unchanged() {
        let mut harbor = harbor_with_ship(5, 500.0);
        let first = register_gas_container(&mut harbor, 400.0);
        let second = register_gas_container(&mut harbor, 300.0);
        harbor.place_container(&first, "Evergreen").unwrap();

        let err = harbor.place_container(&second, "Evergreen").unwrap_err();
        assert!(matches!(err, Error::WeightLimitExceeded { .. }));
        assert!(harbor.container(&second).is_some());
        assert_eq!(harbor.ship("Evergreen").unwrap().container_count(), 1);
    }

    #[test]
    fn placement_on_an_unknown_ship_keeps_the_container_in_the_yard() {
        let mut harbor = Harbor::new();
        let serial = register_gas_container(&mut harbor, 400.0);

        let err = harbor.place_container(&serial, "Maersk").unwrap_err();
        assert!(matches!(err, Error::ShipNotFound { .. }));
        assert!(harbor.container(&serial).is_some());
    }

    #[test]
    fn retrieval_moves_a_container_back_into_the_yard() {
        let mut harbor = harbor_with_ship(5, 10000.0);
        let serial = register_gas_container(&mut harbor, 400.0);
        harbor.place_container(&serial, "Evergreen").unwrap();

        harbor.retrieve_container("Evergreen", &serial).unwrap();
        assert!(harbor.container(&serial).is_some());
        assert_eq!(harbor.ship("Evergreen").unwrap().container_count(), 0);
    }

    #[test]
    fn yard_cargo_loading_reaches_the_right_container() {
        let mut harbor = Harbor::new();
        let spec = ContainerSpec::new(2.6, 12.0, 2200.0, 20000.0).unwrap();
        let container = Container::refrigerated(
            spec,
            crate::temperature::ProductType::Meat,
            4.0,
            harbor.serials(),
        )
        .unwrap();
        let serial = harbor.register_container(container);

        harbor.load_cargo(&serial, 1500.0).unwrap();
        assert_eq!(harbor.container(&serial).unwrap().cargo_mass(), 1500.0);

        let err = harbor.load_cargo("KON-G-99", 10.0).unwrap_err();
        assert!(matches!(err, Error::ContainerNotFound { .. }));
    }

    #[test]
    fn full_harbor_round_trip_over_the_count_limit() {
        let mut harbor = harbor_with_ship(2, 1000.0);
        let first = register_gas_container(&mut harbor, 400.0);
        let second = register_gas_container(&mut harbor, 400.0);
        let third = register_gas_container(&mut harbor, 50.0);

        harbor.place_container(&first, "Evergreen").unwrap();
        harbor.place_container(&second, "Evergreen").unwrap();

        let err = harbor.place_container(&third, "Evergreen").unwrap_err();
        assert!(matches!(err, Error::ContainerLimitReached { limit: 2, .. }));
    }

    #[test]
    fn ships_serialize_for_export() {
        let harbor = harbor_with_ship(2, 1000.0);
        let value = serde_json::to_value(harbor.ships_sorted()).unwrap();
        assert_eq!(value[0]["name"], "Evergreen");
        assert_eq!(value[0]["max_container_count"], 2);
    }

    #[test]
    fn roster_rows_become_validated_ships() {
        let csv = "name,max_speed,max_containers,max_weight\n\
                   Evergreen, 22.5, 8, 120000\n\
                   Maersk, 19.0, 12, 250000\n";
        let ships = load_ship_roster(csv.as_bytes()).unwrap();
        assert_eq!(ships.len(), 2);
        assert_eq!(ships[0].name(), "Evergreen");
        assert_eq!(ships[1].max_container_count(), 12);
    }

    #[test]
    fn roster_with_a_missing_column_is_rejected() {
        let csv = "name,max_speed,max_weight\nEvergreen,22.5,120000\n";
        let err = load_ship_roster(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::RosterParse { row: 1, .. }));
    }

    #[test]
    fn roster_row_errors_carry_the_row_number() {
        let csv = "name,max_speed,max_containers,max_weight\n\
                   Evergreen,fast,8,120000\n";
        let err = load_ship_roster(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::RosterParse { row: 2, .. }));
    }

    #[test]
    fn roster_rows_obey_ship_validation() {
        let csv = "name,max_speed,max_containers,max_weight\n\
                   Evergreen,22.5,0,120000\n";
        let err = load_ship_roster(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::RosterParse { row: 2, .. }));
    }
}
