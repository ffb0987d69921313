//! Dashboard workflow tests for end-to-end user journey verification
//!
//! These tests cover multi-step user workflows that exercise multiple
//! features in sequence: expanding rows, walking the change accordion,
//! opening file diffs, comparing arbitrary pairs, and rolling back.
//!
//! ## Stub Environment Constraints
//!
//! Sessions run against stub snapper/sndiff scripts, which means:
//! - The listing and diffs are fixed fixtures, not live snapshots
//! - Rollback records its invocation instead of touching subvolumes
//! - polkit/sudo prompts never appear (elevation is "none")
//!
//! Behavior that needs a real snapper on a btrfs system is covered by
//! `#[ignore]`d tests. Run them manually on such a host:
//!
//! ```bash
//! cargo test --test e2e -- --ignored --nocapture
//! ```

use crate::e2e::pty_utils::{SnapdeckSession, SpecialKey, StubEnv};
use serial_test::serial;
use std::time::Duration;

/// Time to wait after sending input for processing
const INPUT_PROCESSING_DELAY_MS: u64 = 150;

/// Time to wait for application initialization
const INITIALIZATION_DELAY_MS: u64 = 400;

fn pause(ms: u64) {
    std::thread::sleep(Duration::from_millis(ms));
}

/// Move the selection onto the 42-43 pair row (third row of the fixture
/// listing) and expand it
fn expand_pair_row(session: &mut SnapdeckSession) {
    session.expect("42 - 43").expect("Pair row should be listed");
    pause(INITIALIZATION_DELAY_MS);

    for _ in 0..2 {
        session
            .send_special(SpecialKey::ArrowDown)
            .expect("Should send arrow down");
        pause(INPUT_PROCESSING_DELAY_MS);
    }
    session
        .send_special(SpecialKey::Enter)
        .expect("Should send enter");
}

// ─────────────────────────────────────────────────────────
// Row Expansion and the Change Accordion
// ─────────────────────────────────────────────────────────

/// Expanding a pair row opens the changes panel with collapsed sections
#[tokio::test]
#[serial]
async fn test_expand_pair_row_shows_changes() {
    let env = StubEnv::with_snapshots().expect("Failed to build stub env");
    let mut session = SnapdeckSession::spawn(&env).expect("Failed to spawn snapdeck");

    expand_pair_row(&mut session);

    session
        .expect("Changes 42")
        .expect("Panel title should name the pair");
    session
        .expect("Updated Packages")
        .expect("Package sections should appear");
    session
        .expect("Modified Files")
        .expect("File sections should appear");

    session.quit().expect("Should quit cleanly");
}

/// A comparison with no differences reports it in place of the accordion
#[tokio::test]
#[serial]
async fn test_empty_diff_shows_no_changes_found() {
    let env = StubEnv::with_empty_diff().expect("Failed to build stub env");
    let mut session = SnapdeckSession::spawn(&env).expect("Failed to spawn snapdeck");

    expand_pair_row(&mut session);

    session
        .expect("No changes found")
        .expect("Empty result message should appear");

    session.quit().expect("Should quit cleanly");
}

/// Full journey into a file diff: expand, focus the panel, open the
/// Modified Files section, and activate an entry with diff text
#[tokio::test]
#[serial]
async fn test_open_file_diff_modal() {
    let env = StubEnv::with_snapshots().expect("Failed to build stub env");
    let mut session = SnapdeckSession::spawn(&env).expect("Failed to spawn snapdeck");

    expand_pair_row(&mut session);
    session
        .expect("Updated Packages")
        .expect("Sections should appear");

    // Move focus into the panel
    session
        .send_special(SpecialKey::Tab)
        .expect("Should send tab");
    pause(INPUT_PROCESSING_DELAY_MS);

    // Cursor starts on Updated Packages; Modified Files is the fourth
    // populated section of the fixture
    for _ in 0..3 {
        session
            .send_special(SpecialKey::ArrowDown)
            .expect("Should send arrow down");
        pause(INPUT_PROCESSING_DELAY_MS);
    }
    session
        .send_special(SpecialKey::Enter)
        .expect("Should send enter");

    session
        .expect("/etc/fstab")
        .expect("Opened section should list its files");

    // First entry under the header carries diff text
    session
        .send_special(SpecialKey::ArrowDown)
        .expect("Should send arrow down");
    pause(INPUT_PROCESSING_DELAY_MS);
    session
        .send_special(SpecialKey::Enter)
        .expect("Should send enter");

    // The fstab fixture diff adds an xfs mount line
    session
        .expect("xfs")
        .expect("Modal should show the diff text");

    session
        .send_special(SpecialKey::Escape)
        .expect("Should send escape");
    pause(INPUT_PROCESSING_DELAY_MS);

    session.quit().expect("Should quit cleanly");
}

// ─────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────

/// A pre/post pair on the command line opens the compare page directly
#[tokio::test]
#[serial]
async fn test_compare_page_from_cli_args() {
    let env = StubEnv::with_snapshots().expect("Failed to build stub env");
    let mut session =
        SnapdeckSession::spawn_with_args(&env, &["42", "43"]).expect("Failed to spawn snapdeck");

    session
        .expect("Changes 42")
        .expect("Compare page should open with the requested pair");
    session
        .expect("Updated Packages")
        .expect("Diff should load");

    // Escape leaves the page for the dashboard
    session
        .send_special(SpecialKey::Escape)
        .expect("Should send escape");
    session
        .expect_listing()
        .expect("Dashboard should appear after leaving");

    session.quit().expect("Should quit cleanly");
}

/// Picking two snapshots in the compare dialog opens the compare page
#[tokio::test]
#[serial]
async fn test_compare_dialog_flow() {
    let env = StubEnv::with_snapshots().expect("Failed to build stub env");
    let mut session = SnapdeckSession::spawn(&env).expect("Failed to spawn snapdeck");

    session.expect("42 - 43").expect("Listing should appear");
    pause(INITIALIZATION_DELAY_MS);

    session.send_key('c').expect("Should send c");
    session
        .expect("Select pre snapshot")
        .expect("Dialog should open on the pre pick");

    // Pick snapshot 0 as pre, snapshot 1 as post
    session
        .send_special(SpecialKey::Enter)
        .expect("Should send enter");
    session
        .expect("Select post snapshot")
        .expect("Dialog should advance to the post pick");

    session
        .send_special(SpecialKey::ArrowDown)
        .expect("Should send arrow down");
    pause(INPUT_PROCESSING_DELAY_MS);
    session
        .send_special(SpecialKey::Enter)
        .expect("Should send enter");

    session
        .expect("Changes 0")
        .expect("Compare page should open with the picked pair");

    session.quit().expect("Should quit cleanly");
}

// ─────────────────────────────────────────────────────────
// Rollback
// ─────────────────────────────────────────────────────────

/// Confirming a rollback in the action menu invokes snapper with the
/// chosen snapshot number
#[tokio::test]
#[serial]
async fn test_rollback_invokes_snapper() {
    let env = StubEnv::with_snapshots().expect("Failed to build stub env");
    let mut session = SnapdeckSession::spawn(&env).expect("Failed to spawn snapdeck");

    session.expect("42 - 43").expect("Listing should appear");
    pause(INITIALIZATION_DELAY_MS);

    // Select the pair row and open its action menu
    for _ in 0..2 {
        session
            .send_special(SpecialKey::ArrowDown)
            .expect("Should send arrow down");
        pause(INPUT_PROCESSING_DELAY_MS);
    }
    session.send_key('a').expect("Should send a");

    session
        .expect("Rollback to pre")
        .expect("Menu should offer the pre target");
    session
        .expect("Rollback to post")
        .expect("Menu should offer the post target");

    // Choose the post snapshot
    session
        .send_special(SpecialKey::ArrowDown)
        .expect("Should send arrow down");
    pause(INPUT_PROCESSING_DELAY_MS);
    session
        .send_special(SpecialKey::Enter)
        .expect("Should send enter");

    // The menu closes immediately; the rollback runs in the background
    pause(600);

    assert!(
        env.recorded_rollbacks().contains("rollback 43"),
        "snapper stub should have been invoked, got: {:?}",
        env.recorded_rollbacks()
    );
    assert!(
        session.is_alive().expect("Should query liveness"),
        "App should stay up after a rollback"
    );

    session.quit().expect("Should quit cleanly");
}

/// Escape closes the action menu without invoking anything
#[tokio::test]
#[serial]
async fn test_action_menu_cancel() {
    let env = StubEnv::with_snapshots().expect("Failed to build stub env");
    let mut session = SnapdeckSession::spawn(&env).expect("Failed to spawn snapdeck");

    session.expect("42 - 43").expect("Listing should appear");
    pause(INITIALIZATION_DELAY_MS);

    session.send_key('a').expect("Should send a");
    session
        .expect("Rollback to snapshot")
        .expect("Single row should offer one target");

    session
        .send_special(SpecialKey::Escape)
        .expect("Should send escape");
    pause(600);

    assert!(
        env.recorded_rollbacks().is_empty(),
        "Cancel must not invoke snapper"
    );

    session.quit().expect("Should quit cleanly");
}

// ─────────────────────────────────────────────────────────
// Real System
// ─────────────────────────────────────────────────────────

/// Startup against the host's real snapper and configuration.
///
/// **IGNORED:** Needs snapper installed on a btrfs host and polkit/sudo
/// authorization for the listing. Read-only: it only renders the live
/// listing and exits.
#[tokio::test]
#[serial]
#[ignore]
async fn test_startup_with_real_snapper() {
    let mut session = SnapdeckSession::spawn_system(&[]).expect("Failed to spawn snapdeck");

    session
        .expect_header()
        .expect("Header should appear on startup");
    session
        .expect_timeout("snapshots", Duration::from_secs(30))
        .expect("Live listing should load");

    session.kill().expect("Should kill process");
}
