//! Build script for skirmish-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates game.toml and generates the board configuration from it

use std::collections::BTreeMap;
use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use skirmish_core::config::Calibration;

/// Highest GPIO number on the RP2040
const MAX_GPIO: u8 = 29;

fn main() {
    setup_linker();
    let config = load_config();
    validate_config(&config);
    generate_config(&config);
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Contents of game.toml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GameConfig {
    #[serde(default)]
    calibration: Calibration,
    pins: PinConfig,
    #[serde(default)]
    buttons: ButtonConfig,
}

/// `[pins]`: GPIO numbers, LSB first for the LED ports
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PinConfig {
    level: Vec<u8>,
    action: Vec<u8>,
    count: Vec<u8>,
    port_select: u8,
    configure: u8,
}

/// `[buttons]`
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ButtonConfig {
    #[serde(default)]
    active_low: bool,
}

/// LED ports and the number of LEDs each must have
const PORTS: [(&str, usize); 3] = [("level", 4), ("action", 2), ("count", 8)];

impl PinConfig {
    fn port(&self, name: &str) -> &[u8] {
        match name {
            "level" => &self.level,
            "action" => &self.action,
            _ => &self.count,
        }
    }
}

/// Read and parse game.toml
fn load_config() -> GameConfig {
    // Re-run if game.toml changes
    println!("cargo:rerun-if-changed=game.toml");

    let config_path = Path::new("game.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: game.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a game.toml configuration file.           ║\n\
            ║  Please create one in the skirmish-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read game.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid game.toml                                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check calibration and pin assignments, failing the build on any error
fn validate_config(config: &GameConfig) {
    let mut errors = Vec::new();

    if let Err(e) = config.calibration.validate() {
        errors.push(format!("[calibration] {}", e));
    }

    let pins = &config.pins;
    for (name, width) in PORTS {
        let count = pins.port(name).len();
        if count != width {
            errors.push(format!(
                "[pins] {} needs {} pins, found {}",
                name, width, count
            ));
        }
    }

    // Every pin in use, with the key that claims it
    let mut claims: Vec<(String, u8)> = Vec::new();
    for (name, _) in PORTS {
        for (bit, &pin) in pins.port(name).iter().enumerate() {
            claims.push((format!("{}[{}]", name, bit), pin));
        }
    }
    claims.push(("port_select".to_string(), pins.port_select));
    claims.push(("configure".to_string(), pins.configure));

    let mut owners: BTreeMap<u8, &str> = BTreeMap::new();
    for (key, pin) in &claims {
        if *pin > MAX_GPIO {
            errors.push(format!("[pins] {} = {} is not a GPIO (0-29)", key, pin));
            continue;
        }
        if let Some(owner) = owners.insert(*pin, key) {
            errors.push(format!(
                "[pins] GPIO{} used by both {} and {}",
                pin, owner, key
            ));
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in game.toml                       ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=game.toml validated successfully");
}

/// `[p.PIN_a.into(), p.PIN_b.into(), ...]`
fn pin_array(pins: &[u8]) -> String {
    let items: Vec<String> = pins.iter().map(|n| format!("p.PIN_{}.into()", n)).collect();
    format!("[{}]", items.join(", "))
}

/// Write `config.rs` into OUT_DIR for the firmware to `include!`
fn generate_config(config: &GameConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let calibration = &config.calibration;
    let pins = &config.pins;
    let polarity = if config.buttons.active_low {
        "ActiveLow"
    } else {
        "ActiveHigh"
    };

    let source = format!(
        "// Generated from game.toml by build.rs\n\
         \n\
         pub const CALIBRATION: Calibration = Calibration {{\n\
         \x20   init_ticks: {init},\n\
         \x20   blink_ticks: {blink},\n\
         \x20   countdown_ticks: {countdown},\n\
         }};\n\
         \n\
         pub const BUTTON_POLARITY: Polarity = Polarity::{polarity};\n\
         \n\
         /// Take the configured pins out of the peripherals\n\
         pub fn take_pins(p: Peripherals) -> BoardPins {{\n\
         \x20   BoardPins {{\n\
         \x20       level: {level},\n\
         \x20       action: {action},\n\
         \x20       count: {count},\n\
         \x20       port_select: p.PIN_{port_select}.into(),\n\
         \x20       configure: p.PIN_{configure}.into(),\n\
         \x20   }}\n\
         }}\n",
        init = calibration.init_ticks,
        blink = calibration.blink_ticks,
        countdown = calibration.countdown_ticks,
        polarity = polarity,
        level = pin_array(&pins.level),
        action = pin_array(&pins.action),
        count = pin_array(&pins.count),
        port_select = pins.port_select,
        configure = pins.configure,
    );

    fs::write(out_dir.join("config.rs"), source).unwrap();
}
