use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Externally configured rate ceilings. Display-only: they pick tooltips
/// and drive the advisory `advancedneeded` export flag, and never clamp
/// or reject stored values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimits {
    pub normal: i32,
    pub advanced: i32,
}

impl Default for RateLimits {
    fn default() -> Self {
        Self {
            normal: 10_000,
            advanced: 100_000,
        }
    }
}

impl RateLimits {
    pub fn ceiling(&self, advanced: bool) -> i32 {
        if advanced {
            self.advanced
        } else {
            self.normal
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let data = std::fs::read(path)?;
        let limits = serde_json::from_slice(&data)?;
        Ok(limits)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let data = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }
}
