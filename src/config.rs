use crate::gtpu::types::GTPU_PORT;
use crate::packet::ethernet::MacAddr;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Frame parameters for generated end markers. The MAC defaults are
/// placeholders; deployments should set the real egress interface
/// addresses here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndMarkerConfig {
    #[serde(default = "default_src_mac")]
    pub src_mac: MacAddr,
    #[serde(default = "default_dst_mac")]
    pub dst_mac: MacAddr,
    #[serde(default = "default_gtpu_port")]
    pub gtpu_port: u16,
}

fn default_src_mac() -> MacAddr {
    MacAddr([0xFF, 0xAA, 0xFA, 0xAA, 0xFF, 0xAA])
}

fn default_dst_mac() -> MacAddr {
    MacAddr([0xBD; 6])
}

fn default_gtpu_port() -> u16 {
    GTPU_PORT
}

impl Default for EndMarkerConfig {
    fn default() -> Self {
        Self {
            src_mac: default_src_mac(),
            dst_mac: default_dst_mac(),
            gtpu_port: default_gtpu_port(),
        }
    }
}

impl EndMarkerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;
        let config: EndMarkerConfig = serde_yaml::from_str(&content)
            .context("Failed to parse config file")?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.gtpu_port == 0 {
            anyhow::bail!("gtpu_port cannot be zero");
        }
        Ok(())
    }
}
