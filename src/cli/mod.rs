//! Command-line interface wiring for the `wificard` binary.
//!
//! This module owns the clap definitions, checks the argument combinations
//! clap cannot express, and runs the card pipeline.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::debug;
use wificard::{
    CardError, DEFAULT_LAYER_HEIGHT, DEFAULT_MATRIX_FILE, DEFAULT_OPENSCAD, DEFAULT_OUTPUT_DIR,
    DEFAULT_SCRIPT, MagnetHoles, ModelParams, OpenScad, PayloadSource, PreviewOptions,
    WifiCredentials, encode_card, generate_models, write_preview,
};

pub mod common;
pub mod utils;

use crate::cli::common::EncryptionArg;
use crate::cli::utils::{display_dir, ensure_parent_dir};

const EXAMPLES: &str = "\
Examples:
  # Generate WiFi card for a network
  wificard --ssid \"MyNetwork\" --password \"MyPassword123\"

  # Generate WiFi card with WEP encryption
  wificard --ssid \"MyNetwork\" --password \"MyPassword123\" --encryption WEP

  # Generate card with custom text
  wificard --raw \"WIFI:S:MyNet;T:WPA;P:secret;;\"";

/// Parsed CLI entrypoint for the `wificard` binary.
#[derive(Parser, Debug)]
#[command(
    name = "wificard",
    version,
    about = "Generate a WiFi QR-code card for 3D printing",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// WiFi network SSID.
    #[arg(long, short = 's')]
    pub ssid: Option<String>,

    /// Raw string to encode (for custom QR codes).
    #[arg(long, short = 'r')]
    pub raw: Option<String>,

    /// WiFi network password (required with --ssid).
    #[arg(long, short = 'p')]
    pub password: Option<String>,

    /// WiFi encryption type.
    #[arg(long, short = 'e', value_enum, default_value_t = EncryptionArg::Wpa)]
    pub encryption: EncryptionArg,

    /// Set if the network is hidden.
    #[arg(long)]
    pub hidden: bool,

    /// Print layer height in mm.
    #[arg(long, short = 'l', default_value_t = DEFAULT_LAYER_HEIGHT)]
    pub layer_height: f64,

    /// Diameter of magnet holes in mm (requires --magnet-depth).
    #[arg(long)]
    pub magnet_diameter: Option<f64>,

    /// Depth of magnet holes in mm (requires --magnet-diameter).
    #[arg(long)]
    pub magnet_depth: Option<f64>,

    /// OpenSCAD executable.
    #[arg(long, env = "OPENSCAD", default_value = DEFAULT_OPENSCAD)]
    pub openscad: PathBuf,

    /// Card geometry script handed to OpenSCAD.
    #[arg(long, default_value = DEFAULT_SCRIPT)]
    pub script: PathBuf,

    /// Directory receiving the STL files.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Include file the geometry script reads the QR matrix from.
    #[arg(long, default_value = DEFAULT_MATRIX_FILE)]
    pub matrix_file: PathBuf,

    /// Also write a PNG preview of the QR code.
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Stop after writing the matrix file; do not run OpenSCAD.
    #[arg(long)]
    pub skip_models: bool,

    /// Enable debug logging.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Check argument combinations, first failure wins.
    pub fn validate(&self) -> Result<ModelParams, CardError> {
        let source = match (&self.ssid, &self.raw) {
            (Some(_), Some(_)) => {
                return Err(CardError::Usage(
                    "--ssid and --raw cannot be used together".to_string(),
                ));
            }
            (None, None) => {
                return Err(CardError::Usage(
                    "one of --ssid or --raw is required".to_string(),
                ));
            }
            (None, Some(raw)) => PayloadSource::Raw(raw.clone()),
            (Some(ssid), None) => {
                let password = self
                    .password
                    .clone()
                    .filter(|password| !password.is_empty())
                    .ok_or_else(|| {
                        CardError::Usage("--password is required when using --ssid".to_string())
                    })?;
                PayloadSource::Wifi(WifiCredentials {
                    ssid: ssid.clone(),
                    password,
                    encryption: self.encryption.into(),
                    hidden: self.hidden,
                })
            }
        };

        let magnets = match (self.magnet_diameter, self.magnet_depth) {
            (Some(diameter), Some(depth)) => Some(MagnetHoles { diameter, depth }),
            (None, None) => None,
            _ => {
                return Err(CardError::Usage(
                    "--magnet-diameter and --magnet-depth must be used together".to_string(),
                ));
            }
        };

        Ok(ModelParams {
            layer_height: self.layer_height,
            source,
            magnets,
        })
    }
}

/// Execute the card pipeline.
pub fn run(cli: Cli) -> Result<()> {
    let params = cli.validate()?;

    println!("Encoding: {}", params.source.payload());
    let matrix = encode_card(&params.source, &cli.matrix_file)?;
    debug!(
        "wrote {}x{} matrix to {}",
        matrix.width(),
        matrix.width(),
        cli.matrix_file.display()
    );

    if let Some(path) = cli.preview.as_ref() {
        ensure_parent_dir(path)?;
        write_preview(path, &matrix, &PreviewOptions::default())?;
        println!("Wrote QR preview to {}", path.display());
    }

    if cli.skip_models {
        println!(
            "Skipping STL export; matrix saved in {}",
            cli.matrix_file.display()
        );
        return Ok(());
    }

    let tool = OpenScad::new(cli.openscad, cli.script);
    generate_models(&tool, &params, &cli.output_dir, |pass, _| {
        println!("Generating {}...", pass.file_name())
    })?;
    println!("Done! STL files saved in {}", display_dir(&cli.output_dir));
    Ok(())
}
