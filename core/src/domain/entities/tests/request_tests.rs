//! Unit tests for validator requests

use crate::domain::entities::request::{CheckRequest, ResyncRequest, ValidatorCommand};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_check_args_without_flags() {
    let command = ValidatorCommand::from(CheckRequest::new("alice", "123456"));
    assert_eq!(command.to_args(&[], "-resync"), strings(&["alice", "123456"]));
    assert_eq!(command.mode(), "check");
    assert_eq!(command.username(), "alice");
}

#[test]
fn test_check_args_with_flags() {
    let command = ValidatorCommand::from(CheckRequest::new("alice", "123456"));
    let flags = strings(&["-cp"]);
    assert_eq!(command.to_args(&flags, "-resync"), strings(&["-cp", "alice", "123456"]));
}

#[test]
fn test_resync_args() {
    let command = ValidatorCommand::from(ResyncRequest::new("alice", "111111", "222222"));
    let flags = strings(&["-cp"]);
    // Check flags never leak into resync mode
    assert_eq!(
        command.to_args(&flags, "-resync"),
        strings(&["-resync", "alice", "111111", "222222"])
    );
    assert_eq!(command.mode(), "resync");
}

#[test]
fn test_malformed_values_pass_through() {
    let command = ValidatorCommand::from(CheckRequest::new("", "12 34;rm -rf"));
    assert_eq!(command.to_args(&[], "-resync"), strings(&["", "12 34;rm -rf"]));
}

#[test]
fn test_command_serializes_with_mode_tag() {
    let command = ValidatorCommand::from(CheckRequest::new("bob", "000000"));
    let json = serde_json::to_value(&command).unwrap();
    assert_eq!(json["mode"], "check");
    assert_eq!(json["username"], "bob");
}
