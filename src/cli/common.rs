//! Shared clap helper types for CLI arguments.

use clap::ValueEnum;
use wificard::Encryption;

/// Encryption names accepted by `--encryption`, spelled as in `WIFI:` strings.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptionArg {
    #[value(name = "WPA")]
    Wpa,
    #[value(name = "WEP")]
    Wep,
    #[value(name = "nopass")]
    NoPass,
}

impl From<EncryptionArg> for Encryption {
    fn from(value: EncryptionArg) -> Encryption {
        match value {
            EncryptionArg::Wpa => Encryption::Wpa,
            EncryptionArg::Wep => Encryption::Wep,
            EncryptionArg::NoPass => Encryption::NoPass,
        }
    }
}
