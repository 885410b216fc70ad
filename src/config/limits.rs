//! Configuration validation limits
//!
//! Domain-valid bounds for every persisted field. A record decoded from
//! storage is accepted only if every bound holds; a single violation
//! rejects the whole record and triggers default recovery.

use super::variables::Config;

/// Battery discharge current ceiling, in amps
pub const BATTERY_MAX_CURRENT_MAX: u8 = 100;

/// Motor power scaling factor ceiling, scaled by 10
pub const MOTOR_POWER_X10_MAX: u8 = 195;

/// Battery low-voltage cutoff floor, in volts scaled by 10 (16.0 V)
pub const BATTERY_LOW_VOLTAGE_CUT_OFF_X10_MIN: u16 = 160;

/// Battery low-voltage cutoff ceiling, in volts scaled by 10 (63.0 V)
pub const BATTERY_LOW_VOLTAGE_CUT_OFF_X10_MAX: u16 = 630;

/// Wheel circumference floor, in millimetres
pub const WHEEL_PERIMETER_MIN: u16 = 750;

/// Wheel circumference ceiling, in millimetres
pub const WHEEL_PERIMETER_MAX: u16 = 3000;

/// Speed limit ceiling, in km/h
pub const WHEEL_MAX_SPEED_MAX: u8 = 99;

/// Pedal cadence ceiling, in rpm
pub const PAS_MAX_CADENCE_MAX: u8 = 175;

impl Config {
    /// Check every field against its domain-valid bounds.
    ///
    /// Boolean flags and the assist factor have no invalid encodings;
    /// everything else is range-checked.
    pub fn is_valid(&self) -> bool {
        self.battery_max_current <= BATTERY_MAX_CURRENT_MAX
            && self.motor_power_x10 <= MOTOR_POWER_X10_MAX
            && (BATTERY_LOW_VOLTAGE_CUT_OFF_X10_MIN..=BATTERY_LOW_VOLTAGE_CUT_OFF_X10_MAX)
                .contains(&self.battery_low_voltage_cut_off_x10)
            && (WHEEL_PERIMETER_MIN..=WHEEL_PERIMETER_MAX).contains(&self.wheel_perimeter)
            && self.wheel_max_speed <= WHEEL_MAX_SPEED_MAX
            && self.pas_max_cadence <= PAS_MAX_CADENCE_MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().is_valid());
    }

    #[test]
    fn test_battery_max_current_bound() {
        let mut config = Config::default();
        config.battery_max_current = BATTERY_MAX_CURRENT_MAX;
        assert!(config.is_valid());
        config.battery_max_current = BATTERY_MAX_CURRENT_MAX + 1;
        assert!(!config.is_valid());
    }

    #[test]
    fn test_motor_power_bound() {
        let mut config = Config::default();
        config.motor_power_x10 = MOTOR_POWER_X10_MAX;
        assert!(config.is_valid());
        config.motor_power_x10 = MOTOR_POWER_X10_MAX + 1;
        assert!(!config.is_valid());
    }

    #[test]
    fn test_battery_cutoff_bounds() {
        let mut config = Config::default();
        config.battery_low_voltage_cut_off_x10 = BATTERY_LOW_VOLTAGE_CUT_OFF_X10_MIN;
        assert!(config.is_valid());
        config.battery_low_voltage_cut_off_x10 = BATTERY_LOW_VOLTAGE_CUT_OFF_X10_MIN - 1;
        assert!(!config.is_valid());
        config.battery_low_voltage_cut_off_x10 = BATTERY_LOW_VOLTAGE_CUT_OFF_X10_MAX;
        assert!(config.is_valid());
        config.battery_low_voltage_cut_off_x10 = BATTERY_LOW_VOLTAGE_CUT_OFF_X10_MAX + 1;
        assert!(!config.is_valid());
    }

    #[test]
    fn test_wheel_perimeter_bounds() {
        let mut config = Config::default();
        config.wheel_perimeter = WHEEL_PERIMETER_MIN;
        assert!(config.is_valid());
        config.wheel_perimeter = WHEEL_PERIMETER_MIN - 1;
        assert!(!config.is_valid());
        config.wheel_perimeter = WHEEL_PERIMETER_MAX;
        assert!(config.is_valid());
        config.wheel_perimeter = WHEEL_PERIMETER_MAX + 1;
        assert!(!config.is_valid());
    }

    #[test]
    fn test_wheel_max_speed_bound() {
        let mut config = Config::default();
        config.wheel_max_speed = WHEEL_MAX_SPEED_MAX;
        assert!(config.is_valid());
        config.wheel_max_speed = WHEEL_MAX_SPEED_MAX + 1;
        assert!(!config.is_valid());
    }

    #[test]
    fn test_pas_max_cadence_bound() {
        let mut config = Config::default();
        config.pas_max_cadence = PAS_MAX_CADENCE_MAX;
        assert!(config.is_valid());
        config.pas_max_cadence = PAS_MAX_CADENCE_MAX + 1;
        assert!(!config.is_valid());
    }

    #[test]
    fn test_single_bad_field_rejects_whole_record() {
        let mut config = Config::default();
        assert!(config.is_valid());
        config.wheel_perimeter = 0;
        assert!(!config.is_valid());
    }
}
