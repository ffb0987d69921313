//! PTY-based TUI interaction tests
//!
//! Tests keyboard input handling and TUI rendering using pseudo-terminal
//! interaction via expectrl. Every session runs against stub snapper/sndiff
//! scripts from a `StubEnv`, so no real snapshots are read or written.

use crate::e2e::pty_utils::{SnapdeckSession, SpecialKey, StubEnv};
use serial_test::serial;
use std::time::Duration;

/// Test that snapdeck shows the header bar with the config name on startup
#[tokio::test]
#[serial]
async fn test_startup_shows_header() {
    let env = StubEnv::with_snapshots().expect("Failed to build stub env");
    let mut session = SnapdeckSession::spawn(&env).expect("Failed to spawn snapdeck");

    // Wait for header to appear
    session
        .expect_header()
        .expect("Header should appear on startup");

    // The active snapper config is shown next to the title
    session
        .expect("root")
        .expect("Config name should be in header");

    // Clean exit
    session.kill().expect("Should kill process");
}

/// Test that the snapshot listing renders with paired rows
#[tokio::test]
#[serial]
async fn test_startup_shows_listing() {
    let env = StubEnv::with_snapshots().expect("Failed to build stub env");
    let mut session = SnapdeckSession::spawn(&env).expect("Failed to spawn snapdeck");

    session.expect_listing().expect("Table should appear");

    // The zypper pre/post snapshots collapse into one row
    session
        .expect("42 - 43")
        .expect("Paired row should be listed");

    // The status bar reports the raw snapshot count
    session
        .expect("5 snapshots")
        .expect("Status bar should show the count");

    session.kill().expect("Should kill process");
}

/// Test that the configs panel lists every snapper configuration
#[tokio::test]
#[serial]
async fn test_startup_shows_configs_panel() {
    let env = StubEnv::with_snapshots().expect("Failed to build stub env");
    let mut session = SnapdeckSession::spawn(&env).expect("Failed to spawn snapdeck");

    session
        .expect("Configs")
        .expect("Configs panel should appear");
    session
        .expect("/home")
        .expect("Other configs should be listed too");

    session.kill().expect("Should kill process");
}

/// Test that a failing snapper surfaces in the status bar instead of
/// crashing the dashboard
#[tokio::test]
#[serial]
async fn test_listing_failure_shows_status() {
    let env = StubEnv::with_broken_snapper().expect("Failed to build stub env");
    let mut session = SnapdeckSession::spawn(&env).expect("Failed to spawn snapdeck");

    session
        .expect_timeout("Listing failed", Duration::from_secs(5))
        .expect("Failure indicator should appear");

    session.kill().expect("Should kill process");
}

/// Test that 'q' exits the application
#[tokio::test]
#[serial]
async fn test_q_quits() {
    let env = StubEnv::with_snapshots().expect("Failed to build stub env");
    let mut session = SnapdeckSession::spawn(&env).expect("Failed to spawn snapdeck");

    session.expect_header().expect("Header should appear");
    std::thread::sleep(Duration::from_millis(300));

    session.send_key('q').expect("Should send q");
    std::thread::sleep(Duration::from_millis(700));

    assert!(
        !session.is_alive().expect("Should query liveness"),
        "Process should exit after q"
    );
}

/// Test that Ctrl+C exits from raw mode (delivered as a key event, not a
/// signal, since the terminal runs with ISIG off)
#[tokio::test]
#[serial]
async fn test_ctrl_c_quits() {
    let env = StubEnv::with_snapshots().expect("Failed to build stub env");
    let mut session = SnapdeckSession::spawn(&env).expect("Failed to spawn snapdeck");

    session.expect_header().expect("Header should appear");
    std::thread::sleep(Duration::from_millis(300));

    session.send_raw(b"\x03").expect("Should send Ctrl+C");
    std::thread::sleep(Duration::from_millis(700));

    assert!(
        !session.is_alive().expect("Should query liveness"),
        "Process should exit after Ctrl+C"
    );
}

/// Test that navigation and mode keys do not crash the application
#[tokio::test]
#[serial]
async fn test_key_mash_does_not_crash() {
    let env = StubEnv::with_snapshots().expect("Failed to build stub env");
    let mut session = SnapdeckSession::spawn(&env).expect("Failed to spawn snapdeck");

    session.expect_listing().expect("Table should appear");
    std::thread::sleep(Duration::from_millis(300));

    for key in ['j', 'j', 'k', 'r', 'x', '1'] {
        session.send_key(key).expect("Should send key");
        std::thread::sleep(Duration::from_millis(50));
    }
    session
        .send_special(SpecialKey::ArrowDown)
        .expect("Should send arrow");
    session
        .send_special(SpecialKey::Escape)
        .expect("Should send escape");
    std::thread::sleep(Duration::from_millis(300));

    assert!(
        session.is_alive().expect("Should query liveness"),
        "Process should survive arbitrary keys"
    );

    session.quit().expect("Should quit cleanly");
}
