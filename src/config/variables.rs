//! Configuration record
//!
//! The single source of truth for every persisted setting. One instance
//! exists per controller, owned by [`ConfigManager`](super::ConfigManager)
//! and mutated in place for the life of the firmware.

use super::layout;

/// Motor controller configuration
///
/// Scaled integer fields store the true value multiplied by 10, keeping
/// one decimal digit without floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Pedal assist multiplier, scaled by 10 (20 = 2.0x)
    pub assist_level_factor_x10: u8,
    /// Front light output enabled
    pub head_light: bool,
    /// Walk assist mode enabled
    pub walk_assist: bool,
    /// Battery discharge current limit, in amps
    pub battery_max_current: u8,
    /// Motor power scaling factor, scaled by 10
    pub motor_power_x10: u8,
    /// Battery low-voltage cutoff, in volts scaled by 10
    pub battery_low_voltage_cut_off_x10: u16,
    /// Wheel circumference, in millimetres
    pub wheel_perimeter: u16,
    /// Speed limit, in km/h
    pub wheel_max_speed: u8,
    /// Pedal cadence ceiling, in rpm
    pub pas_max_cadence: u8,
    /// Motor voltage variant (false = 36 V, true = 48 V)
    pub motor_voltage_type: bool,
    /// Provide assistance before the pedals start rotating
    pub assist_without_pedal_rotation: bool,
}

impl Default for Config {
    /// Factory defaults: the decoded form of the default byte table, so
    /// the two can never disagree.
    fn default() -> Self {
        layout::decode(&layout::DEFAULT_TABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_default_table() {
        let config = Config::default();
        assert_eq!(layout::encode(&config), layout::DEFAULT_TABLE);
    }

    #[test]
    fn test_default_flags_are_off() {
        let config = Config::default();
        assert!(!config.head_light);
        assert!(!config.walk_assist);
        assert!(!config.motor_voltage_type);
        assert!(!config.assist_without_pedal_rotation);
    }
}
