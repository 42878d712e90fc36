//! Engine configuration types.

use serde::{Deserialize, Serialize};

/// When the entitlement countdown starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationPolicy {
    /// Expiry is fixed at creation time (`now + days`).
    Immediate,
    /// The window starts at the first successful login (default).
    #[default]
    Deferred,
}

/// Single-device enforcement mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceBinding {
    /// No device tracking at all.
    Disabled,
    /// Bind on first login, report the bound device, but accept re-logins
    /// from any device.
    Advisory,
    /// Bind on first login and reject re-logins presenting a different
    /// device id (default).
    #[default]
    Enforced,
}

/// Configuration consumed by [`EntitlementEngine`](crate::EntitlementEngine).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Activation policy applied at creation.
    #[serde(default)]
    pub activation: ActivationPolicy,

    /// Days granted at activation when an account carries no `trial_days`.
    #[serde(default = "default_trial_days")]
    pub default_trial_days: i64,

    /// Device binding mode for login handling.
    #[serde(default)]
    pub device_binding: DeviceBinding,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            activation: ActivationPolicy::default(),
            default_trial_days: default_trial_days(),
            device_binding: DeviceBinding::default(),
        }
    }
}

fn default_trial_days() -> i64 {
    7
}
