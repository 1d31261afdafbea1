use std::fmt;

/// WiFi authentication type as written in the `T:` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encryption {
    #[default]
    Wpa,
    Wep,
    NoPass,
}

impl Encryption {
    pub fn as_str(&self) -> &'static str {
        match self {
            Encryption::Wpa => "WPA",
            Encryption::Wep => "WEP",
            Encryption::NoPass => "nopass",
        }
    }
}

impl fmt::Display for Encryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Network credentials printed onto the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    pub ssid: String,
    pub password: String,
    pub encryption: Encryption,
    pub hidden: bool,
}

impl WifiCredentials {
    /// ZXing-style `WIFI:` string.
    ///
    /// Reserved characters (`;`, `,`, `"`, `\`) in the SSID or password are
    /// copied as-is; scanners may split such values at the wrong place.
    pub fn to_wifi_string(&self) -> String {
        format!(
            "WIFI:T:{};S:{};P:{};H:{};;",
            self.encryption, self.ssid, self.password, self.hidden
        )
    }
}

/// Where the text stored in the QR code comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    Wifi(WifiCredentials),
    /// Arbitrary text encoded verbatim.
    Raw(String),
}

impl PayloadSource {
    /// The exact string handed to the QR encoder.
    pub fn payload(&self) -> String {
        match self {
            PayloadSource::Wifi(creds) => creds.to_wifi_string(),
            PayloadSource::Raw(text) => text.clone(),
        }
    }

    pub fn credentials(&self) -> Option<&WifiCredentials> {
        match self {
            PayloadSource::Wifi(creds) => Some(creds),
            PayloadSource::Raw(_) => None,
        }
    }
}
