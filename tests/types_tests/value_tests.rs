//! Value Tests
//!
//! Tests for parsing and validating protocol values.

use pjlink::error::ValidationError;
use pjlink::types::{
    ErrorLevel, ErrorStatus, FilterUsageTime, HexBuffer, InputResolution, InputSwitchClass1,
    InputSwitchClass2, InputSwitches, InputType, LampStatus, LampsStatus, MacAddress,
    ModelNumbers, MuteState, MuteTarget, Password, PowerStatus, ProjectorName, Resolution,
    SerialNumber, Volume, VolumeAdjustment,
};

// =============================================================================
// Error Status Tests
// =============================================================================

#[test]
fn test_error_status_all_clear() {
    let status: ErrorStatus = "000000".parse().unwrap();
    assert_eq!(status, ErrorStatus::CLEAR);
    assert!(!status.has_faults());
}

#[test]
fn test_error_status_component_order() {
    let status: ErrorStatus = "012000".parse().unwrap();
    assert_eq!(status.fan, ErrorLevel::Ok);
    assert_eq!(status.lamp, ErrorLevel::Warning);
    assert_eq!(status.temperature, ErrorLevel::Error);
    assert!(status.has_faults());
    assert_eq!(status.to_string(), "012000");
}

#[test]
fn test_error_status_rejects_invalid() {
    for text in ["000003", "00000", "0000000", "00a000", ""] {
        assert_eq!(
            text.parse::<ErrorStatus>(),
            Err(ValidationError::InvalidErrorStatus(text.to_string())),
            "{:?}",
            text
        );
    }
}

// =============================================================================
// Lamp Tests
// =============================================================================

#[test]
fn test_lamps_two_lamps() {
    let lamps: LampsStatus = "1 0 2 1".parse().unwrap();
    assert_eq!(
        lamps.lamps(),
        &[
            LampStatus::new(1, false).unwrap(),
            LampStatus::new(2, true).unwrap()
        ]
    );
    assert_eq!(lamps.to_string(), "1 0 2 1");
}

#[test]
fn test_lamps_odd_count() {
    assert_eq!(
        "1 0 2".parse::<LampsStatus>(),
        Err(ValidationError::OddLampCount(3))
    );
}

#[test]
fn test_lamps_usage_out_of_range() {
    let result = "100000 0".parse::<LampsStatus>();
    assert!(matches!(result, Err(ValidationError::OutOfRange { value: 100000, .. })));
}

#[test]
fn test_lamps_limits() {
    assert!("99999 1".parse::<LampsStatus>().is_ok());
    assert!("1 2".parse::<LampsStatus>().is_err());
    assert!("1 0 1 0 1 0 1 0 1 0 1 0 1 0 1 0".parse::<LampsStatus>().is_ok());
    assert!(matches!(
        "1 0 1 0 1 0 1 0 1 0 1 0 1 0 1 0 1 0".parse::<LampsStatus>(),
        Err(ValidationError::LampCount { count: 9, .. })
    ));
    assert!(LampsStatus::new(Vec::new()).is_err());
}

#[test]
fn test_filter_usage_time() {
    let filter: FilterUsageTime = "1234".parse().unwrap();
    assert_eq!(filter.hours(), 1234);
    assert!("100000".parse::<FilterUsageTime>().is_err());
    assert!(FilterUsageTime::new(99999).is_ok());
}

// =============================================================================
// Resolution Tests
// =============================================================================

#[test]
fn test_resolution_parse() {
    let resolution: Resolution = "1920x1080".parse().unwrap();
    assert_eq!(resolution.horizontal(), 1920);
    assert_eq!(resolution.vertical(), 1080);
    assert_eq!(resolution.to_string(), "1920x1080");
}

#[test]
fn test_resolution_rejects_invalid() {
    for text in ["1920x1080x640", "1920xfoo", "1920", "x1080", "0x1080", "-1x5"] {
        assert_eq!(
            text.parse::<Resolution>(),
            Err(ValidationError::InvalidResolution(text.to_string())),
            "{:?}",
            text
        );
    }
}

#[test]
fn test_input_resolution_markers() {
    assert_eq!("-".parse::<InputResolution>(), Ok(InputResolution::NoSignal));
    assert_eq!("*".parse::<InputResolution>(), Ok(InputResolution::UnknownSignal));
    assert_eq!(
        "800x600".parse::<InputResolution>(),
        Ok(InputResolution::Signal(Resolution::new(800, 600).unwrap()))
    );
}

// =============================================================================
// Input Tests
// =============================================================================

#[test]
fn test_input_class1() {
    let input: InputSwitchClass1 = "31".parse().unwrap();
    assert_eq!(input.input_type(), InputType::Digital);
    assert_eq!(input.channel(), 1);

    assert!("3A".parse::<InputSwitchClass1>().is_err());
    assert!("30".parse::<InputSwitchClass1>().is_err());
    assert!("61".parse::<InputSwitchClass1>().is_err());
    assert!("71".parse::<InputSwitchClass1>().is_err());
}

#[test]
fn test_input_class2() {
    let input: InputSwitchClass2 = "6Z".parse().unwrap();
    assert_eq!(input.input_type(), InputType::Internal);
    assert_eq!(input.channel(), 'Z');
    assert_eq!(input.to_string(), "6Z");

    assert!("3a".parse::<InputSwitchClass2>().is_err());
    assert!("30".parse::<InputSwitchClass2>().is_err());
}

#[test]
fn test_input_class_conversion() {
    let class1: InputSwitchClass1 = "25".parse().unwrap();
    let class2 = InputSwitchClass2::from(class1);
    assert_eq!(class2.to_string(), "25");
    assert_eq!(InputSwitchClass1::try_from(class2), Ok(class1));

    let lettered: InputSwitchClass2 = "2B".parse().unwrap();
    assert!(InputSwitchClass1::try_from(lettered).is_err());
}

#[test]
fn test_input_list() {
    let list: InputSwitches<InputSwitchClass2> = "11 2A 31".parse().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list.to_string(), "11 2A 31");

    let empty: InputSwitches<InputSwitchClass1> = "".parse().unwrap();
    assert!(empty.is_empty());

    assert!("11  21".parse::<InputSwitches<InputSwitchClass1>>().is_err());
}

// =============================================================================
// Mute, Power and Volume Tests
// =============================================================================

#[test]
fn test_mute_state() {
    let state: MuteState = "31".parse().unwrap();
    assert_eq!(state, MuteState::new(MuteTarget::AudioAndVideo, true));
    assert_eq!(state.to_string(), "31");
    assert!("41".parse::<MuteState>().is_err());
    assert!("12".parse::<MuteState>().is_err());
}

#[test]
fn test_power_status() {
    assert_eq!("3".parse::<PowerStatus>(), Ok(PowerStatus::WarmUp));
    assert!(PowerStatus::On.is_powered());
    assert!(!PowerStatus::Cooling.is_powered());
    assert!("4".parse::<PowerStatus>().is_err());
}

#[test]
fn test_volume_clamped() {
    assert_eq!(Volume::new(42).level(), Volume::MAX);
    assert_eq!(Volume::default().level(), 5);

    let top = Volume::new(10).adjusted(VolumeAdjustment::Increase);
    assert_eq!(top.level(), 10);

    let bottom = Volume::new(0).adjusted(VolumeAdjustment::Decrease);
    assert_eq!(bottom.level(), 0);

    assert_eq!(Volume::new(4).adjusted(VolumeAdjustment::Increase).level(), 5);
}

// =============================================================================
// Text Tests
// =============================================================================

#[test]
fn test_text_length_limits() {
    assert!(SerialNumber::new("A".repeat(32)).is_ok());
    assert!(matches!(
        SerialNumber::new("A".repeat(33)),
        Err(ValidationError::TooLong { length: 33, max: 32, .. })
    ));
    assert!(ProjectorName::new("P".repeat(64)).is_ok());
    assert!(ProjectorName::new("P".repeat(65)).is_err());
}

#[test]
fn test_text_character_ranges() {
    assert!(ProjectorName::new("Beamer \u{e9}").is_ok());
    assert!(matches!(
        SerialNumber::new("SN\u{e9}"),
        Err(ValidationError::InvalidCharacter { character: '\u{e9}', .. })
    ));
    assert!(SerialNumber::new("tab\there").is_err());
    assert!(ProjectorName::new("").is_ok());
}

#[test]
fn test_model_numbers() {
    let models: ModelNumbers = "LMP-1 LMP-2".parse().unwrap();
    assert_eq!(models.models().collect::<Vec<_>>(), vec!["LMP-1", "LMP-2"]);
}

#[test]
fn test_password_redacted() {
    let password = Password::new("JBMIA").unwrap();
    assert_eq!(password.as_str(), "JBMIA");
    assert!(!format!("{:?}", password).contains("JBMIA"));
    assert!(Password::new("x".repeat(33)).is_err());
}

// =============================================================================
// Hex and MAC Tests
// =============================================================================

#[test]
fn test_hex_buffer() {
    let buffer = HexBuffer::parse_exact("498e4a67", 4).unwrap();
    assert_eq!(buffer.as_bytes(), &[0x49, 0x8e, 0x4a, 0x67]);
    assert_eq!(buffer.to_string(), "498e4a67");

    assert_eq!(
        HexBuffer::parse_exact("498e4a", 4),
        Err(ValidationError::InvalidDataBufferCount {
            expected: 4,
            actual: 3
        })
    );
    assert!("498e4a6".parse::<HexBuffer>().is_err());
}

#[test]
fn test_mac_address() {
    let mac: MacAddress = "00:1A:2b:3c:4d:5e".parse().unwrap();
    assert_eq!(mac.octets(), [0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]);
    assert_eq!(mac.to_string(), "00:1a:2b:3c:4d:5e");

    for text in ["00:1a:2b:3c:4d", "00:1a:2b:3c:4d:5e:6f", "0:1a:2b:3c:4d:5e", "+0:1a:2b:3c:4d:5e"] {
        assert!(text.parse::<MacAddress>().is_err(), "{:?}", text);
    }
}
