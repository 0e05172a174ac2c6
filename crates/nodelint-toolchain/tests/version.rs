use std::str::FromStr;

use nodelint_toolchain::version::{NodeVersion, VersionError};

#[test]
fn parse_valid_version() {
    let v = NodeVersion::from_str("20.11.1").unwrap();
    assert_eq!(v.major(), 20);
    assert_eq!(v.minor(), 11);
    assert_eq!(v.patch(), 1);
}

#[test]
fn parse_prefixed_version() {
    let v = NodeVersion::from_str("v18.19.0").unwrap();
    assert_eq!(v.to_string(), "18.19.0");
    assert_eq!(v.tag(), "v18.19.0");
}

#[test]
fn parse_partial_versions() {
    assert_eq!(NodeVersion::from_str("v9").unwrap(), NodeVersion::new(9, 0, 0));
    assert_eq!(
        NodeVersion::from_str("10.2").unwrap(),
        NodeVersion::new(10, 2, 0)
    );
}

#[test]
fn parse_pre_release_version() {
    let v = NodeVersion::from_str("v21.0.0-rc.1").unwrap();
    assert_eq!(v.to_string(), "21.0.0-rc.1");
    assert!(v < NodeVersion::new(21, 0, 0));
}

#[test]
fn parse_invalid_version() {
    assert!(NodeVersion::from_str("not-a-version").is_err());
    assert_eq!(NodeVersion::from_str(""), Err(VersionError::Empty));
    assert_eq!(NodeVersion::from_str("v"), Err(VersionError::Empty));
    assert!(NodeVersion::from_str("1.2.3.4").is_err());
    assert!(NodeVersion::from_str("1..2").is_err());
    assert!(NodeVersion::from_str("12.x").is_err());
}

#[test]
fn invalid_prerelease_is_a_comparable_error() {
    let err = NodeVersion::from_str("v1.2.3-").unwrap_err();
    assert!(matches!(err, VersionError::Semver { ref input, .. } if input == "1.2.3-"));
    assert_eq!(NodeVersion::from_str("v1.2.3-"), Err(err.clone()));
    assert!(err.to_string().starts_with("invalid version '1.2.3-'"));
}

#[test]
fn version_ordering() {
    let v1 = NodeVersion::from_str("v16.20.2").unwrap();
    let v2 = NodeVersion::from_str("v18.0.0").unwrap();
    let v3 = NodeVersion::from_str("v20.11.1").unwrap();

    assert!(v1 < v2);
    assert!(v2 < v3);
}
