//! Command Table Tests
//!
//! Tests for the command catalog and its class lists.

use pjlink::protocol::{all_class1_commands, all_class2_commands, Command, ValueKind};
use pjlink::types::Class;

// =============================================================================
// Catalog Tests
// =============================================================================

#[test]
fn test_catalog_size() {
    assert_eq!(Command::ALL.len(), 22);
    assert_eq!(all_class1_commands().len(), 11);
    assert_eq!(all_class2_commands().len(), 22);
}

#[test]
fn test_grammar_indexed_by_command() {
    for command in Command::ALL {
        assert_eq!(command.grammar().command, command);
        assert_eq!(command.code().len(), 4);
        assert_eq!(Command::from_code(command.code()), Some(command));
    }
}

#[test]
fn test_codes_are_unique() {
    let mut codes: Vec<&str> = Command::ALL.iter().map(|c| c.code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), Command::ALL.len());
}

#[test]
fn test_from_code_unknown() {
    assert_eq!(Command::from_code("XXXX"), None);
    assert_eq!(Command::from_code("powr"), None);
    assert_eq!(Command::from_code("POW"), None);
}

#[test]
fn test_display_is_code() {
    assert_eq!(Command::InputTerminalName.to_string(), "INNM");
    assert_eq!(Command::Manufacturer.to_string(), "INF1");
}

// =============================================================================
// Class List Tests
// =============================================================================

#[test]
fn test_class_lists_match_table() {
    for command in Command::ALL {
        assert_eq!(
            all_class1_commands().contains(&command),
            command.supports(Class::One),
            "{}",
            command
        );
        assert_eq!(
            all_class2_commands().contains(&command),
            command.supports(Class::Two),
            "{}",
            command
        );
    }
}

#[test]
fn test_class2_is_superset() {
    for command in all_class1_commands() {
        assert!(command.supports(Class::Two), "{}", command);
    }
}

#[test]
fn test_class_lists_keep_catalog_order() {
    assert_eq!(all_class1_commands()[0], Command::Power);
    assert_eq!(all_class1_commands()[10], Command::Class);
    assert_eq!(all_class2_commands(), &Command::ALL[..]);
}

// =============================================================================
// Grammar Tests
// =============================================================================

#[test]
fn test_get_and_set_forms() {
    assert!(Command::Power.has_get() && Command::Power.has_set());
    assert!(Command::Freeze.has_get() && Command::Freeze.has_set());
    assert!(Command::ErrorStatus.has_get() && !Command::ErrorStatus.has_set());
    assert!(!Command::SpeakerVolume.has_get() && Command::SpeakerVolume.has_set());
    assert!(!Command::MicrophoneVolume.has_get() && Command::MicrophoneVolume.has_set());
}

#[test]
fn test_input_terminal_name_takes_parameter() {
    let get = Command::InputTerminalName.grammar().get.unwrap();
    assert_eq!(get.parameter, Some(ValueKind::InputSwitch));
    assert_eq!(get.response, ValueKind::InputTerminalName);

    for command in Command::ALL {
        if command == Command::InputTerminalName {
            continue;
        }
        if let Some(get) = command.grammar().get {
            assert_eq!(get.parameter, None, "{}", command);
        }
    }
}
