//! EEPROM byte layout and codec
//!
//! Bidirectional mapping between [`Config`] and its fixed twelve-byte
//! encoding in the data EEPROM.
//!
//! # Byte Layout
//!
//! ```text
//! ┌────────┬──────────────────────────────────────┐
//! │ Offset │ Contents                             │
//! ├────────┼──────────────────────────────────────┤
//! │   0    │ sentinel key (KEY)                   │
//! │   1    │ assist_level_factor_x10              │
//! │   2    │ flags0: bit0 head_light,             │
//! │        │         bit1 walk_assist             │
//! │   3    │ battery_max_current                  │
//! │   4    │ motor_power_x10                      │
//! │  5-6   │ battery_low_voltage_cut_off_x10 (LE) │
//! │  7-8   │ wheel_perimeter (LE)                 │
//! │   9    │ wheel_max_speed                      │
//! │  10    │ pas_max_cadence                      │
//! │  11    │ flags1: bit0 motor_voltage_type,     │
//! │        │         bit1 assist_without_pedal_   │
//! │        │              rotation                │
//! └────────┴──────────────────────────────────────┘
//! ```
//!
//! Encoding is total and deterministic: every in-width record maps to
//! exactly one byte sequence and back. Decoding never fails structurally;
//! range checking is done by [`limits`](super::limits) afterwards.

use bitflags::bitflags;

use super::variables::Config;

/// Sentinel key stored at offset 0.
///
/// Its presence means this firmware has populated the region before; any
/// other value at offset 0 is treated as blank storage.
pub const KEY: u8 = 0xCA;

/// Total bytes stored, sentinel included
pub const EEPROM_BYTES_STORED: usize = 12;

/// Offset of the configuration block within the data EEPROM region
pub const EEPROM_BASE: u32 = 0x0000;

/// Byte offsets within the stored block
pub const ADDRESS_KEY: usize = 0;
pub const ADDRESS_ASSIST_LEVEL_FACTOR_X10: usize = 1;
pub const ADDRESS_FLAGS_0: usize = 2;
pub const ADDRESS_BATTERY_MAX_CURRENT: usize = 3;
pub const ADDRESS_MOTOR_POWER_X10: usize = 4;
pub const ADDRESS_BATTERY_LOW_VOLTAGE_CUT_OFF_X10_0: usize = 5;
pub const ADDRESS_BATTERY_LOW_VOLTAGE_CUT_OFF_X10_1: usize = 6;
pub const ADDRESS_WHEEL_PERIMETER_0: usize = 7;
pub const ADDRESS_WHEEL_PERIMETER_1: usize = 8;
pub const ADDRESS_WHEEL_MAX_SPEED: usize = 9;
pub const ADDRESS_PAS_MAX_CADENCE: usize = 10;
pub const ADDRESS_FLAGS_1: usize = 11;

bitflags! {
    /// Boolean settings packed into the byte at offset 2
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Flags0: u8 {
        /// Front light output enabled
        const HEAD_LIGHT = 1 << 0;
        /// Walk assist mode enabled
        const WALK_ASSIST = 1 << 1;
    }
}

bitflags! {
    /// Boolean settings packed into the byte at offset 11
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Flags1: u8 {
        /// Motor voltage variant (48 V when set)
        const MOTOR_VOLTAGE_TYPE = 1 << 0;
        /// Provide assistance before the pedals start rotating
        const ASSIST_WITHOUT_PEDAL_ROTATION = 1 << 1;
    }
}

/// Factory default values
pub const DEFAULT_ASSIST_LEVEL_FACTOR_X10: u8 = 20;
pub const DEFAULT_BATTERY_MAX_CURRENT: u8 = 16;
pub const DEFAULT_MOTOR_POWER_X10: u8 = 50;
pub const DEFAULT_BATTERY_LOW_VOLTAGE_CUT_OFF_X10: u16 = 390;
pub const DEFAULT_WHEEL_PERIMETER: u16 = 2050;
pub const DEFAULT_WHEEL_MAX_SPEED: u8 = 25;
pub const DEFAULT_PAS_MAX_CADENCE: u8 = 110;

/// Factory default byte table, written whenever storage is blank or fails
/// validation. Must always decode to a record the validator accepts.
pub const DEFAULT_TABLE: [u8; EEPROM_BYTES_STORED] = [
    KEY,
    DEFAULT_ASSIST_LEVEL_FACTOR_X10,
    0, // flags0: light and walk assist off
    DEFAULT_BATTERY_MAX_CURRENT,
    DEFAULT_MOTOR_POWER_X10,
    (DEFAULT_BATTERY_LOW_VOLTAGE_CUT_OFF_X10 & 0xFF) as u8,
    (DEFAULT_BATTERY_LOW_VOLTAGE_CUT_OFF_X10 >> 8) as u8,
    (DEFAULT_WHEEL_PERIMETER & 0xFF) as u8,
    (DEFAULT_WHEEL_PERIMETER >> 8) as u8,
    DEFAULT_WHEEL_MAX_SPEED,
    DEFAULT_PAS_MAX_CADENCE,
    0, // flags1: 36 V motor, pedal rotation required
];

/// Encode a configuration record into its stored byte sequence.
///
/// Pure and total. All bits of the flag bytes outside the defined
/// positions are zero.
pub fn encode(config: &Config) -> [u8; EEPROM_BYTES_STORED] {
    let mut flags0 = Flags0::empty();
    flags0.set(Flags0::HEAD_LIGHT, config.head_light);
    flags0.set(Flags0::WALK_ASSIST, config.walk_assist);

    let mut flags1 = Flags1::empty();
    flags1.set(Flags1::MOTOR_VOLTAGE_TYPE, config.motor_voltage_type);
    flags1.set(
        Flags1::ASSIST_WITHOUT_PEDAL_ROTATION,
        config.assist_without_pedal_rotation,
    );

    let mut bytes = [0u8; EEPROM_BYTES_STORED];
    bytes[ADDRESS_KEY] = KEY;
    bytes[ADDRESS_ASSIST_LEVEL_FACTOR_X10] = config.assist_level_factor_x10;
    bytes[ADDRESS_FLAGS_0] = flags0.bits();
    bytes[ADDRESS_BATTERY_MAX_CURRENT] = config.battery_max_current;
    bytes[ADDRESS_MOTOR_POWER_X10] = config.motor_power_x10;
    bytes[ADDRESS_BATTERY_LOW_VOLTAGE_CUT_OFF_X10_0] =
        (config.battery_low_voltage_cut_off_x10 & 0xFF) as u8;
    bytes[ADDRESS_BATTERY_LOW_VOLTAGE_CUT_OFF_X10_1] =
        (config.battery_low_voltage_cut_off_x10 >> 8) as u8;
    bytes[ADDRESS_WHEEL_PERIMETER_0] = (config.wheel_perimeter & 0xFF) as u8;
    bytes[ADDRESS_WHEEL_PERIMETER_1] = (config.wheel_perimeter >> 8) as u8;
    bytes[ADDRESS_WHEEL_MAX_SPEED] = config.wheel_max_speed;
    bytes[ADDRESS_PAS_MAX_CADENCE] = config.pas_max_cadence;
    bytes[ADDRESS_FLAGS_1] = flags1.bits();
    bytes
}

/// Decode a stored byte sequence into a configuration record.
///
/// The sentinel byte is not interpreted here; storage recognition happens
/// in [`ConfigStore`](super::ConfigStore). Undefined bits in the flag
/// bytes are ignored, so any byte value decodes.
pub fn decode(bytes: &[u8; EEPROM_BYTES_STORED]) -> Config {
    let flags0 = Flags0::from_bits_truncate(bytes[ADDRESS_FLAGS_0]);
    let flags1 = Flags1::from_bits_truncate(bytes[ADDRESS_FLAGS_1]);

    Config {
        assist_level_factor_x10: bytes[ADDRESS_ASSIST_LEVEL_FACTOR_X10],
        head_light: flags0.contains(Flags0::HEAD_LIGHT),
        walk_assist: flags0.contains(Flags0::WALK_ASSIST),
        battery_max_current: bytes[ADDRESS_BATTERY_MAX_CURRENT],
        motor_power_x10: bytes[ADDRESS_MOTOR_POWER_X10],
        battery_low_voltage_cut_off_x10: u16::from(bytes[ADDRESS_BATTERY_LOW_VOLTAGE_CUT_OFF_X10_0])
            | (u16::from(bytes[ADDRESS_BATTERY_LOW_VOLTAGE_CUT_OFF_X10_1]) << 8),
        wheel_perimeter: u16::from(bytes[ADDRESS_WHEEL_PERIMETER_0])
            | (u16::from(bytes[ADDRESS_WHEEL_PERIMETER_1]) << 8),
        wheel_max_speed: bytes[ADDRESS_WHEEL_MAX_SPEED],
        pas_max_cadence: bytes[ADDRESS_PAS_MAX_CADENCE],
        motor_voltage_type: flags1.contains(Flags1::MOTOR_VOLTAGE_TYPE),
        assist_without_pedal_rotation: flags1.contains(Flags1::ASSIST_WITHOUT_PEDAL_ROTATION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> Config {
        Config {
            assist_level_factor_x10: 35,
            head_light: true,
            walk_assist: false,
            battery_max_current: 18,
            motor_power_x10: 75,
            battery_low_voltage_cut_off_x10: 0x0186, // 39.0 V
            wheel_perimeter: 0x0802,                 // 2050 mm
            wheel_max_speed: 45,
            pas_max_cadence: 120,
            motor_voltage_type: true,
            assist_without_pedal_rotation: false,
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let config = sample_config();
        assert_eq!(decode(&encode(&config)), config);
    }

    #[test]
    fn test_round_trip_at_field_extremes() {
        let config = Config {
            assist_level_factor_x10: 255,
            head_light: true,
            walk_assist: true,
            battery_max_current: 255,
            motor_power_x10: 255,
            battery_low_voltage_cut_off_x10: 0xFFFF,
            wheel_perimeter: 0xFFFF,
            wheel_max_speed: 255,
            pas_max_cadence: 255,
            motor_voltage_type: true,
            assist_without_pedal_rotation: true,
        };
        assert_eq!(decode(&encode(&config)), config);
    }

    #[test]
    fn test_encode_places_sentinel_key() {
        assert_eq!(encode(&sample_config())[ADDRESS_KEY], KEY);
        assert_eq!(DEFAULT_TABLE[ADDRESS_KEY], KEY);
    }

    #[test]
    fn test_sixteen_bit_fields_split_little_endian() {
        let bytes = encode(&sample_config());
        assert_eq!(bytes[ADDRESS_BATTERY_LOW_VOLTAGE_CUT_OFF_X10_0], 0x86);
        assert_eq!(bytes[ADDRESS_BATTERY_LOW_VOLTAGE_CUT_OFF_X10_1], 0x01);
        assert_eq!(bytes[ADDRESS_WHEEL_PERIMETER_0], 0x02);
        assert_eq!(bytes[ADDRESS_WHEEL_PERIMETER_1], 0x08);
    }

    #[test]
    fn test_flag_bits_are_independent() {
        let mut config = Config::default();
        config.head_light = true;

        let with_light = encode(&config);
        config.walk_assist = true;
        let with_both = encode(&config);

        // Toggling walk_assist must not disturb the head_light bit
        assert_eq!(
            with_light[ADDRESS_FLAGS_0] & Flags0::HEAD_LIGHT.bits(),
            with_both[ADDRESS_FLAGS_0] & Flags0::HEAD_LIGHT.bits(),
        );
        assert_eq!(with_light[ADDRESS_FLAGS_0], 0b01);
        assert_eq!(with_both[ADDRESS_FLAGS_0], 0b11);
    }

    #[test]
    fn test_packed_bytes_have_no_stray_bits() {
        let mut config = Config::default();
        config.head_light = true;
        config.walk_assist = true;
        config.motor_voltage_type = true;
        config.assist_without_pedal_rotation = true;

        let bytes = encode(&config);
        assert_eq!(bytes[ADDRESS_FLAGS_0], 0b11);
        assert_eq!(bytes[ADDRESS_FLAGS_1], 0b11);
    }

    #[test]
    fn test_decode_ignores_undefined_flag_bits() {
        let mut bytes = DEFAULT_TABLE;
        bytes[ADDRESS_FLAGS_0] = 0xFD; // head_light set, walk_assist clear, junk above
        bytes[ADDRESS_FLAGS_1] = 0xFE; // voltage type clear, assist flag set, junk above

        let config = decode(&bytes);
        assert!(config.head_light);
        assert!(!config.walk_assist);
        assert!(!config.motor_voltage_type);
        assert!(config.assist_without_pedal_rotation);

        // Re-encoding normalizes the undefined bits to zero
        let reencoded = encode(&config);
        assert_eq!(reencoded[ADDRESS_FLAGS_0], 0b01);
        assert_eq!(reencoded[ADDRESS_FLAGS_1], 0b10);
    }
}
