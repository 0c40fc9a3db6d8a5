//! Interactive harbor session: line commands in, plain-text replies out.
//!
//! Every documented domain failure is caught, printed as an `error:` line,
//! and the session keeps running; only IO failures abort it.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use containership_lib::{
    load_ship_roster_from_path, Container, ContainerSpec, Harbor, ProductType, Ship,
};

const HELP: &str = "\
Commands:
  ship add <name> <max-speed> <max-containers> <max-weight>
  ship remove <name>
  ship show <name>
  ship list
  container gas <height> <depth> <tare> <max-payload> <pressure>
  container liquid <height> <depth> <tare> <max-payload> <hazardous|safe>
  container refrigerated <height> <depth> <tare> <max-payload> <product> <temperature>
  container list
  container show <serial>
  load <serial> <mass>
  place <serial> <ship>
  retrieve <ship> <serial>
  roster <path>
  export
  help
  quit
Names must not contain spaces.";

/// Whether the session should keep reading input after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

enum Reply {
    Text(String),
    Quit,
}

/// One interactive session over a harbor registry.
#[derive(Debug, Default)]
pub struct Session {
    harbor: Harbor,
}

impl Session {
    pub fn new(harbor: Harbor) -> Self {
        Self { harbor }
    }

    /// Read commands until the input ends or a quit command arrives.
    pub fn run(&mut self, input: impl BufRead, output: &mut impl Write) -> Result<()> {
        writeln!(output, "Harbor console ready. Type 'help' for commands.")?;
        for line in input.lines() {
            let line = line?;
            if self.execute(line.trim(), output)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Execute a single command line, writing its reply to `output`.
    pub fn execute(&mut self, line: &str, output: &mut impl Write) -> Result<Flow> {
        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match self.dispatch(&tokens) {
            Ok(Reply::Quit) => Ok(Flow::Quit),
            Ok(Reply::Text(text)) => {
                writeln!(output, "{text}")?;
                Ok(Flow::Continue)
            }
            Err(message) => {
                writeln!(output, "error: {message}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(&mut self, tokens: &[&str]) -> std::result::Result<Reply, String> {
        match tokens {
            ["help"] => Ok(Reply::Text(HELP.to_string())),
            ["quit"] | ["exit"] => Ok(Reply::Quit),

            ["ship", "add", name, speed, count, weight] => {
                let ship = Ship::new(
                    name,
                    parse_number(speed, "max-speed")?,
                    parse_count(count, "max-containers")?,
                    parse_number(weight, "max-weight")?,
                )
                .map_err(|err| err.to_string())?;
                self.harbor.add_ship(ship).map_err(|err| err.to_string())?;
                Ok(Reply::Text(format!("ship {name} registered")))
            }
            ["ship", "remove", name] => {
                let ship = self
                    .harbor
                    .remove_ship(name)
                    .map_err(|err| err.to_string())?;
                Ok(Reply::Text(format!("ship {} removed", ship.name())))
            }
            ["ship", "show", name] => {
                let ship = self
                    .harbor
                    .ship(name)
                    .ok_or_else(|| format!("no ship named {name}"))?;
                Ok(Reply::Text(ship.to_string()))
            }
            ["ship", "list"] => {
                let ships = self.harbor.ships_sorted();
                if ships.is_empty() {
                    return Ok(Reply::Text("no ships registered".to_string()));
                }
                let mut lines = vec![format!("Registered ships ({}):", ships.len())];
                for ship in ships {
                    lines.push(format!(
                        "- {} (speed {}, max containers {}, max weight {})",
                        ship.name(),
                        ship.max_speed(),
                        ship.max_container_count(),
                        ship.max_weight()
                    ));
                }
                Ok(Reply::Text(lines.join("\n")))
            }

            ["container", "gas", height, depth, tare, payload, pressure] => {
                let spec = parse_spec(height, depth, tare, payload)?;
                let container =
                    Container::gas(spec, parse_number(pressure, "pressure")?, self.harbor.serials())
                        .map_err(|err| err.to_string())?;
                let serial = self.harbor.register_container(container);
                Ok(Reply::Text(format!("container {serial} registered")))
            }
            ["container", "liquid", height, depth, tare, payload, cargo] => {
                let spec = parse_spec(height, depth, tare, payload)?;
                let hazardous = match *cargo {
                    "hazardous" => true,
                    "safe" => false,
                    other => return Err(format!("expected 'hazardous' or 'safe', got {other}")),
                };
                let container = Container::liquid(spec, hazardous, self.harbor.serials())
                    .map_err(|err| err.to_string())?;
                let serial = self.harbor.register_container(container);
                Ok(Reply::Text(format!("container {serial} registered")))
            }
            ["container", "refrigerated", height, depth, tare, payload, product, temperature] => {
                let spec = parse_spec(height, depth, tare, payload)?;
                let product: ProductType = product.parse().map_err(|err| format!("{err}"))?;
                let container = Container::refrigerated(
                    spec,
                    product,
                    parse_number(temperature, "temperature")?,
                    self.harbor.serials(),
                )
                .map_err(|err| err.to_string())?;
                let serial = self.harbor.register_container(container);
                Ok(Reply::Text(format!("container {serial} registered")))
            }
            ["container", "list"] => {
                let containers = self.harbor.containers();
                if containers.is_empty() {
                    return Ok(Reply::Text("no containers in the yard".to_string()));
                }
                let mut lines = vec![format!("Yard containers ({}):", containers.len())];
                for container in containers {
                    lines.push(format!("- {}", container.serial_number()));
                }
                Ok(Reply::Text(lines.join("\n")))
            }
            ["container", "show", serial] => {
                let container = self
                    .harbor
                    .container(serial)
                    .ok_or_else(|| format!("no container with serial number {serial}"))?;
                Ok(Reply::Text(container.to_string()))
            }

            ["load", serial, mass] => {
                self.harbor
                    .load_cargo(serial, parse_number(mass, "mass")?)
                    .map_err(|err| err.to_string())?;
                Ok(Reply::Text(format!("cargo loaded into {serial}")))
            }
            ["place", serial, ship] => {
                self.harbor
                    .place_container(serial, ship)
                    .map_err(|err| err.to_string())?;
                Ok(Reply::Text(format!("container {serial} placed on {ship}")))
            }
            ["retrieve", ship, serial] => {
                self.harbor
                    .retrieve_container(ship, serial)
                    .map_err(|err| err.to_string())?;
                Ok(Reply::Text(format!(
                    "container {serial} retrieved from {ship}"
                )))
            }

            ["roster", path] => {
                let ships = load_ship_roster_from_path(Path::new(path))
                    .map_err(|err| format!("failed to load roster {path}: {err}"))?;
                let count = ships.len();
                for ship in ships {
                    self.harbor.add_ship(ship).map_err(|err| err.to_string())?;
                }
                Ok(Reply::Text(format!("{count} ships registered from roster")))
            }
            ["export"] => {
                let snapshot = serde_json::json!({
                    "ships": self.harbor.ships_sorted(),
                    "yard": self.harbor.containers(),
                });
                serde_json::to_string_pretty(&snapshot)
                    .map(Reply::Text)
                    .map_err(|err| err.to_string())
            }

            _ => Err(format!(
                "unrecognized command: {}; type 'help' for the command list",
                tokens.join(" ")
            )),
        }
    }
}

fn parse_number(value: &str, label: &str) -> std::result::Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("{label} must be a number, got {value}"))
}

fn parse_count(value: &str, label: &str) -> std::result::Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("{label} must be a whole number, got {value}"))
}

fn parse_spec(
    height: &str,
    depth: &str,
    tare: &str,
    payload: &str,
) -> std::result::Result<ContainerSpec, String> {
    ContainerSpec::new(
        parse_number(height, "height")?,
        parse_number(depth, "depth")?,
        parse_number(tare, "tare")?,
        parse_number(payload, "max-payload")?,
    )
    .map_err(|err| err.to_string())
}
