//! Drives OpenSCAD to turn the geometry script into printable STL parts.
//!
//! Each run exports two parts from the same script: the QR code inlay and
//! the card body with its NFC tag pocket. Both passes share one set of
//! `-D name=value` overrides and run strictly one after the other.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info};

use crate::error::{CardError, ToolError};
use crate::payload::PayloadSource;

pub const DEFAULT_OPENSCAD: &str = "openscad";
pub const DEFAULT_SCRIPT: &str = "./wifi-card.scad";
pub const DEFAULT_OUTPUT_DIR: &str = "./output";
pub const DEFAULT_LAYER_HEIGHT: f64 = 0.2;

/// Cylindrical pockets for fridge magnets on the card's back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnetHoles {
    pub diameter: f64,
    pub depth: f64,
}

/// Parameters forwarded to every export pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParams {
    pub layer_height: f64,
    pub source: PayloadSource,
    pub magnets: Option<MagnetHoles>,
}

impl ModelParams {
    /// Shared `-D` overrides.
    ///
    /// SSID and password are wrapped in double quotes verbatim so the script
    /// can print them on the card; they are not escaped. An empty SSID
    /// leaves both out and the script keeps its own defaults.
    pub fn definitions(&self) -> Vec<String> {
        let mut args = define("layerHeight", self.layer_height);
        let creds = self
            .source
            .credentials()
            .filter(|creds| !creds.ssid.is_empty());
        if let Some(creds) = creds {
            args.extend(define("wifiSSID", format!("\"{}\"", creds.ssid)));
            args.extend(define("wifiPassword", format!("\"{}\"", creds.password)));
        }
        if let Some(magnets) = self.magnets {
            args.extend(define("magnetDiameter", magnets.diameter));
            args.extend(define("magnetDepth", magnets.depth));
        }
        args
    }
}

fn define(name: &str, value: impl std::fmt::Display) -> Vec<String> {
    vec!["-D".to_string(), format!("{}={}", name, value)]
}

/// One STL export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelPass {
    /// Only the QR code modules, printed in a contrasting color.
    QrCode,
    /// Card body with the NFC tag cavity.
    MainBody,
}

impl ModelPass {
    pub const ALL: [ModelPass; 2] = [ModelPass::QrCode, ModelPass::MainBody];

    pub fn file_name(&self) -> &'static str {
        match self {
            ModelPass::QrCode => "qrcode.stl",
            ModelPass::MainBody => "main_body.stl",
        }
    }

    fn flags(&self) -> Vec<String> {
        match self {
            ModelPass::QrCode => define("qrCodeOnly", true),
            ModelPass::MainBody => {
                let mut flags = define("qrCodeOnly", false);
                flags.extend(define("nfcTag", true));
                flags
            }
        }
    }

    /// Full `-D` list for this pass: pass flags first, then shared params.
    pub fn arguments(&self, params: &ModelParams) -> Vec<String> {
        let mut args = self.flags();
        args.extend(params.definitions());
        args
    }
}

/// Something that can render the geometry script into `output`.
pub trait ToolRunner {
    fn run_tool(&self, args: &[String], output: &Path) -> Result<(), ToolError>;
}

/// The OpenSCAD command-line exporter.
#[derive(Debug, Clone)]
pub struct OpenScad {
    pub program: PathBuf,
    pub script: PathBuf,
}

impl Default for OpenScad {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_OPENSCAD),
            script: PathBuf::from(DEFAULT_SCRIPT),
        }
    }
}

impl OpenScad {
    pub fn new(program: impl Into<PathBuf>, script: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            script: script.into(),
        }
    }

    fn command(&self, args: &[String], output: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(&self.script).args(args).arg("-o").arg(output);
        cmd
    }
}

impl ToolRunner for OpenScad {
    fn run_tool(&self, args: &[String], output: &Path) -> Result<(), ToolError> {
        let program = self.program.display().to_string();
        let mut cmd = self.command(args, output);
        debug!("running {:?}", cmd);
        let status = cmd.status().map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ToolError::Missing {
                program: program.clone(),
            },
            _ => ToolError::Spawn {
                program: program.clone(),
                source: err,
            },
        })?;
        if status.success() {
            Ok(())
        } else {
            Err(ToolError::Failed {
                program,
                code: status.code(),
            })
        }
    }
}

/// Export every part into `output_dir`, creating it when needed.
///
/// `on_pass` is called right before each pass starts. Stops at the first
/// failing pass; later passes are never started.
pub fn generate_models<R, F>(
    runner: &R,
    params: &ModelParams,
    output_dir: &Path,
    mut on_pass: F,
) -> Result<Vec<PathBuf>, CardError>
where
    R: ToolRunner + ?Sized,
    F: FnMut(ModelPass, &Path),
{
    fs::create_dir_all(output_dir).map_err(|err| CardError::io(output_dir, err))?;

    let mut written = Vec::with_capacity(ModelPass::ALL.len());
    for pass in ModelPass::ALL {
        let output = output_dir.join(pass.file_name());
        on_pass(pass, &output);
        info!("exporting {:?} to {}", pass, output.display());
        runner.run_tool(&pass.arguments(params), &output)?;
        written.push(output);
    }
    Ok(written)
}
