//! Authentication Tests
//!
//! Tests for digests and the handshake state machine.

use pjlink::auth::{
    level1_digest, level2_digest, xor_randoms, AuthState, Authenticator, HandshakeStep,
    RandomSource, AUTH_REJECTED, RANDOM_LEN,
};
use pjlink::error::{AuthError, PjlinkError, ValidationError};
use pjlink::types::Password;

/// Random source returning 00 01 02 .. 0f
struct CountingRandom;

impl RandomSource for CountingRandom {
    fn fill(&mut self, buf: &mut [u8]) -> pjlink::Result<()> {
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = i as u8;
        }
        Ok(())
    }
}

fn authenticator() -> Authenticator {
    Authenticator::new(Some(Password::new("JBMIA").unwrap()))
}

const LEVEL1_DIGEST: &str = "8a36d09ab68186318cedf79297d3bd47";
const LEVEL2_PROJECTOR_RANDOM: &str = "ffffffffffffffffffffffffffffffff";
const LEVEL2_DIGEST: &str = "cef03c77e6f04b2ad30a5ca8647c6df528320a4311ad139621ad7a113e2b40b4";

// =============================================================================
// Digest Tests
// =============================================================================

#[test]
fn test_level1_vector() {
    assert_eq!(level1_digest("498e4a67", "JBMIA"), LEVEL1_DIGEST);
}

#[test]
fn test_level2_vector() {
    let client: Vec<u8> = (0..16).collect();
    let projector = [0xffu8; 16];
    assert_eq!(
        level2_digest(&client, &projector, "JBMIA").unwrap(),
        LEVEL2_DIGEST
    );
}

#[test]
fn test_xor_bytewise_and_self_inverse() {
    let a: Vec<u8> = (0..16).collect();
    let b: Vec<u8> = (0..16).map(|i| 0xf0 | i).collect();

    let combined = xor_randoms(&a, &b).unwrap();
    assert!(combined.iter().all(|byte| *byte == 0xf0));

    assert_eq!(xor_randoms(&combined, &b).unwrap().to_vec(), a);
    assert_eq!(xor_randoms(&a, &a).unwrap(), [0u8; RANDOM_LEN]);
}

#[test]
fn test_xor_requires_sixteen_bytes() {
    assert_eq!(
        xor_randoms(&[0u8; 15], &[0u8; 16]),
        Err(ValidationError::InvalidDataBufferCount {
            expected: 16,
            actual: 15
        })
    );
    assert!(xor_randoms(&[0u8; 16], &[0u8; 17]).is_err());
}

// =============================================================================
// Banner Tests
// =============================================================================

#[test]
fn test_banner_disabled() {
    let mut auth = Authenticator::new(None);
    assert_eq!(auth.receive_banner("PJLINK 0\r"), Ok(HandshakeStep::Complete));
    assert_eq!(auth.state(), &AuthState::Disabled);
    assert_eq!(auth.prefix(), None);
    assert!(auth.is_ready());
}

#[test]
fn test_banner_requests_probe() {
    let mut auth = authenticator();
    assert_eq!(auth.receive_banner("PJLINK 1 498e4a67"), Ok(HandshakeStep::SendProbe));
    assert!(matches!(
        auth.state(),
        AuthState::SecurityLevelPending { .. }
    ));
    assert!(!auth.is_ready());
    assert_eq!(auth.prefix(), None);
}

#[test]
fn test_banner_without_password() {
    let mut auth = Authenticator::new(None);
    assert_eq!(
        auth.receive_banner("PJLINK 1 498e4a67"),
        Err(AuthError::NoPasswordProvided)
    );
}

#[test]
fn test_banner_malformed() {
    for banner in [
        "PJLINK 2",
        "PJLINK 1",
        "PJLINK 1 498e4a6",
        "PJLINK 1 498E4A67",
        "PJLINK 1 498e4a67ff",
        "PJLINK1 498e4a67",
        "HELLO",
    ] {
        let mut auth = authenticator();
        assert!(
            matches!(auth.receive_banner(banner), Err(AuthError::InvalidBanner(_))),
            "{:?}",
            banner
        );
    }
}

#[test]
fn test_banner_only_once() {
    let mut auth = Authenticator::new(None);
    auth.receive_banner("PJLINK 0").unwrap();
    assert_eq!(
        auth.receive_banner("PJLINK 0"),
        Err(AuthError::OutOfOrder("banner"))
    );
}

// =============================================================================
// Security Level Tests
// =============================================================================

#[test]
fn test_probe_rejected_selects_level1() {
    let mut auth = authenticator();
    auth.receive_banner("PJLINK 1 498e4a67").unwrap();
    auth.receive_probe_response(AUTH_REJECTED, &mut CountingRandom)
        .unwrap();

    assert!(matches!(auth.state(), AuthState::Level1 { .. }));
    assert_eq!(auth.prefix(), Some(LEVEL1_DIGEST));
}

#[test]
fn test_probe_garbage_selects_level1() {
    for answer in [
        "PJLINK 2 0011",
        "PJLINK 2 00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff",
        "PJLINK 2 zz112233445566778899aabbccddeeff",
        "%1POWR=ERR1",
        "",
    ] {
        let mut auth = authenticator();
        auth.receive_banner("PJLINK 1 498e4a67").unwrap();
        auth.receive_probe_response(answer, &mut CountingRandom)
            .unwrap();
        assert_eq!(auth.prefix(), Some(LEVEL1_DIGEST), "{:?}", answer);
    }
}

#[test]
fn test_probe_selects_level2() {
    let mut auth = authenticator();
    auth.receive_banner("PJLINK 1 498e4a67").unwrap();
    let answer = format!("PJLINK 2 {}\r", LEVEL2_PROJECTOR_RANDOM);
    auth.receive_probe_response(&answer, &mut CountingRandom)
        .unwrap();

    let AuthState::Level2 {
        client_random,
        projector_random,
        prefix,
    } = auth.state()
    else {
        panic!("Expected level 2, got {:?}", auth.state());
    };
    assert_eq!(client_random.to_string(), "000102030405060708090a0b0c0d0e0f");
    assert_eq!(projector_random.to_string(), LEVEL2_PROJECTOR_RANDOM);
    assert_eq!(prefix.len(), 96);
    assert_eq!(
        prefix,
        &format!("000102030405060708090a0b0c0d0e0f{}", LEVEL2_DIGEST)
    );
}

#[test]
fn test_probe_before_banner() {
    let mut auth = authenticator();
    let result = auth.receive_probe_response(AUTH_REJECTED, &mut CountingRandom);
    assert!(matches!(
        result,
        Err(PjlinkError::Auth(AuthError::OutOfOrder(_)))
    ));
}

#[test]
fn test_mark_authenticated_is_monotonic() {
    let mut auth = authenticator();
    auth.receive_banner("PJLINK 1 498e4a67").unwrap();
    auth.receive_probe_response(AUTH_REJECTED, &mut CountingRandom)
        .unwrap();

    auth.mark_authenticated();
    assert_eq!(auth.state(), &AuthState::Authenticated);
    assert_eq!(auth.prefix(), None);

    auth.mark_authenticated();
    assert_eq!(auth.state(), &AuthState::Authenticated);
}

#[test]
fn test_mark_authenticated_ignored_when_disabled() {
    let mut auth = Authenticator::new(None);
    auth.receive_banner("PJLINK 0").unwrap();
    auth.mark_authenticated();
    assert_eq!(auth.state(), &AuthState::Disabled);
}
