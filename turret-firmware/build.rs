//! Build script for turret-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Parses and validates turret.toml, generating the compiled-in config

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use turret_core::config::{AxisConfig, TurretConfig};

fn main() {
    setup_linker();
    let config = load_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse and validate turret.toml
fn load_config() -> TurretConfig {
    println!("cargo:rerun-if-changed=turret.toml");

    let config_path = Path::new("turret.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: turret.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a turret.toml configuration file.         ║\n\
            ║  Please create one in the turret-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read turret.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: TurretConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid turret.toml                                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid turret configuration                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&e.to_string())
        );
    }

    println!("cargo:warning=turret.toml validated successfully");
    config
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

/// Write the config as a Rust constant into OUT_DIR
fn generate_config(config: &TurretConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let source = format!(
        "pub const TURRET_CONFIG: TurretConfig = TurretConfig {{\n\
         \x20   azimuth: {},\n\
         \x20   elevation: {},\n\
         \x20   timing: TimingConfig {{\n\
         \x20       direction_settle_ms: {},\n\
         \x20       step_low_us: {},\n\
         \x20       fire_settle_ms: {},\n\
         \x20       fire_pulse_ms: {},\n\
         \x20       startup_ms: {},\n\
         \x20   }},\n\
         }};\n",
        axis_literal(&config.azimuth),
        axis_literal(&config.elevation),
        config.timing.direction_settle_ms,
        config.timing.step_low_us,
        config.timing.fire_settle_ms,
        config.timing.fire_pulse_ms,
        config.timing.startup_ms,
    );

    fs::write(out_dir.join("turret_config.rs"), source).unwrap();
}

fn axis_literal(axis: &AxisConfig) -> String {
    format!(
        "AxisConfig {{ bounds: AxisBounds::new({}, {}), home_offset: {}, step_delay_us: {}, max_homing_steps: {:?} }}",
        axis.bounds.min, axis.bounds.max, axis.home_offset, axis.step_delay_us, axis.max_homing_steps
    )
}
