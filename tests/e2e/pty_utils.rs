//! PTY-based TUI testing utilities
//!
//! Provides helpers for spawning snapdeck in a pseudo-terminal and
//! interacting with it programmatically. `StubEnv` builds the sandbox each
//! session runs in: stub snapper/sndiff scripts plus a config that points
//! at them with elevation disabled.

use expectrl::{Captures, Regex, Session};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Default timeout for expect operations
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Result type for PTY operations
pub type PtyResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Wrapper around expectrl::Session with snapdeck-specific helpers
pub struct SnapdeckSession {
    session: Session,
}

impl SnapdeckSession {
    /// Spawn snapdeck against a stub environment
    pub fn spawn(env: &StubEnv) -> PtyResult<Self> {
        Self::spawn_with_args(env, &[])
    }

    /// Spawn snapdeck against a stub environment with extra arguments
    pub fn spawn_with_args(env: &StubEnv, args: &[&str]) -> PtyResult<Self> {
        let mut cmd = std::process::Command::new(binary_path());
        cmd.args(args);
        cmd.env("XDG_CONFIG_HOME", env.config_home());
        cmd.env("XDG_DATA_HOME", env.data_home());

        let session = Session::spawn(cmd)?;

        Ok(SnapdeckSession { session })
    }

    /// Spawn snapdeck with the host's own configuration and tools.
    ///
    /// Only for ignored tests that want a real snapper; everything else goes
    /// through a `StubEnv`.
    pub fn spawn_system(args: &[&str]) -> PtyResult<Self> {
        let mut cmd = std::process::Command::new(binary_path());
        cmd.args(args);

        let session = Session::spawn(cmd)?;

        Ok(SnapdeckSession { session })
    }

    /// Wait for the header bar to appear
    pub fn expect_header(&mut self) -> PtyResult<()> {
        self.session.expect(Regex("Snapdeck"))?;
        Ok(())
    }

    /// Wait for the snapshot table to be on screen
    pub fn expect_listing(&mut self) -> PtyResult<()> {
        self.session.expect(Regex("Snapshots"))?;
        Ok(())
    }

    /// Wait for any output matching a pattern
    pub fn expect(&mut self, pattern: &str) -> PtyResult<Captures> {
        self.expect_timeout(pattern, DEFAULT_TIMEOUT)
    }

    /// Wait for output with custom timeout
    pub fn expect_timeout(&mut self, pattern: &str, timeout: Duration) -> PtyResult<Captures> {
        // Set timeout for this operation
        self.session.set_expect_timeout(Some(timeout));

        // Try to match the pattern (as regex)
        let result = self.session.expect(Regex(pattern));

        // Restore default timeout
        self.session.set_expect_timeout(Some(DEFAULT_TIMEOUT));

        Ok(result?)
    }

    /// Send a key press (single character)
    pub fn send_key(&mut self, key: char) -> PtyResult<()> {
        self.session.send(&key.to_string())?;
        Ok(())
    }

    /// Send special key (arrow, enter, escape, etc.)
    pub fn send_special(&mut self, key: SpecialKey) -> PtyResult<()> {
        self.send_raw(key.as_bytes())
    }

    /// Send raw bytes (for complex key sequences)
    pub fn send_raw(&mut self, bytes: &[u8]) -> PtyResult<()> {
        self.session.send(bytes)?;
        Ok(())
    }

    /// Whether the spawned process is still running
    pub fn is_alive(&mut self) -> PtyResult<bool> {
        Ok(self.session.is_alive()?)
    }

    /// Send quit command and wait for exit
    pub fn quit(&mut self) -> PtyResult<()> {
        // Send 'q' to quit
        self.send_key('q')?;

        // Give it a moment to process
        std::thread::sleep(Duration::from_millis(500));

        // Check if process is still alive
        let alive = self.session.is_alive()?;
        if alive {
            // Still alive, try to force kill
            self.kill()?;
            std::thread::sleep(Duration::from_millis(100));
        }

        Ok(())
    }

    /// Force kill the process
    pub fn kill(&mut self) -> PtyResult<()> {
        // Send Ctrl+C to interrupt the process
        self.send_raw(b"\x03")?;
        std::thread::sleep(Duration::from_millis(100));

        // If still alive, send Ctrl+D (EOF)
        if self.session.is_alive()? {
            self.send_raw(b"\x04")?;
        }

        Ok(())
    }
}

/// Resolve the snapdeck binary under test
fn binary_path() -> String {
    std::env::var("CARGO_BIN_EXE_snapdeck").unwrap_or_else(|_| {
        // Fallback to cargo build artifact
        let manifest_dir = env!("CARGO_MANIFEST_DIR");
        format!("{}/target/debug/snapdeck", manifest_dir)
    })
}

/// Special keys that can be sent to the terminal
#[derive(Debug, Clone, Copy)]
pub enum SpecialKey {
    Enter,
    Escape,
    Tab,
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
}

impl SpecialKey {
    /// Get the ANSI escape sequence for this key
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            SpecialKey::Enter => b"\r",
            SpecialKey::Escape => b"\x1b",
            SpecialKey::Tab => b"\t",
            SpecialKey::ArrowUp => b"\x1b[A",
            SpecialKey::ArrowDown => b"\x1b[B",
            SpecialKey::PageUp => b"\x1b[5~",
            SpecialKey::PageDown => b"\x1b[6~",
        }
    }
}

/// A sandboxed environment for one spawned snapdeck: stub tool scripts and
/// an XDG tree holding the config that selects them
pub struct StubEnv {
    root: TempDir,
}

impl StubEnv {
    /// Standard environment: a populated listing, diffs with changes
    pub fn with_snapshots() -> PtyResult<Self> {
        Self::build(&listing_snapper_script(), &diff_sndiff_script("sndiff_pair"))
    }

    /// Listing loads fine but every comparison comes back all-empty
    pub fn with_empty_diff() -> PtyResult<Self> {
        Self::build(&listing_snapper_script(), &diff_sndiff_script("sndiff_empty"))
    }

    /// snapper fails outright, without producing JSON
    pub fn with_broken_snapper() -> PtyResult<Self> {
        let script = "#!/bin/sh\necho 'IO Error (.snapshots is not a btrfs subvolume).' >&2\nexit 1\n";
        Self::build(script, &diff_sndiff_script("sndiff_empty"))
    }

    fn build(snapper_script: &str, sndiff_script: &str) -> PtyResult<Self> {
        let root = TempDir::new()?;

        let bin = root.path().join("bin");
        fs::create_dir_all(&bin)?;
        let snapper = write_executable(&bin.join("snapper"), snapper_script)?;
        let sndiff = write_executable(&bin.join("sndiff"), sndiff_script)?;

        let config_dir = root.path().join("config").join("snapdeck");
        fs::create_dir_all(&config_dir)?;
        fs::write(
            config_dir.join("config.toml"),
            crate::stub_config_toml(&snapper, &sndiff),
        )?;

        fs::create_dir_all(root.path().join("data"))?;

        Ok(StubEnv { root })
    }

    /// Value for XDG_CONFIG_HOME
    pub fn config_home(&self) -> PathBuf {
        self.root.path().join("config")
    }

    /// Value for XDG_DATA_HOME
    pub fn data_home(&self) -> PathBuf {
        self.root.path().join("data")
    }

    /// Where the snapper stub records rollback invocations
    pub fn rollback_log(&self) -> PathBuf {
        self.root.path().join("rollback.log")
    }

    /// Recorded rollback invocations, one argument line per call
    pub fn recorded_rollbacks(&self) -> String {
        fs::read_to_string(self.rollback_log()).unwrap_or_default()
    }
}

fn write_executable(path: &std::path::Path, content: &str) -> PtyResult<PathBuf> {
    fs::write(path, content)?;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(path.to_path_buf())
}

/// snapper stub serving the standard fixtures; rollback calls are recorded
/// next to the script under ../rollback.log
fn listing_snapper_script() -> String {
    let configs = crate::load_fixture("list_configs");
    let snapshots = crate::load_fixture("list_root");
    let lines = [
        "#!/bin/sh",
        "case \"$*\" in",
        "*list-configs*) cat <<'CONFIGS'",
        configs.trim_end(),
        "CONFIGS",
        ";;",
        "*rollback*)",
        "printf '%s\\n' \"$*\" >> \"$(dirname \"$0\")/../rollback.log\"",
        "echo 'Creating read-only snapshot of default subvolume. (Snapshot 45.)'",
        ";;",
        "*list*) cat <<'SNAPSHOTS'",
        snapshots.trim_end(),
        "SNAPSHOTS",
        ";;",
        "esac",
    ]
    .join("\n");
    lines + "\n"
}

/// sndiff stub serving one fixture regardless of the requested pair
fn diff_sndiff_script(fixture: &str) -> String {
    format!(
        "#!/bin/sh\ncat <<'DIFF'\n{}\nDIFF\n",
        crate::load_fixture(fixture)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_key_bytes() {
        assert_eq!(SpecialKey::Enter.as_bytes(), b"\r");
        assert_eq!(SpecialKey::Escape.as_bytes(), b"\x1b");
        assert_eq!(SpecialKey::Tab.as_bytes(), b"\t");
        assert_eq!(SpecialKey::ArrowUp.as_bytes(), b"\x1b[A");
        assert_eq!(SpecialKey::ArrowDown.as_bytes(), b"\x1b[B");
        assert_eq!(SpecialKey::PageUp.as_bytes(), b"\x1b[5~");
        assert_eq!(SpecialKey::PageDown.as_bytes(), b"\x1b[6~");
    }

    #[test]
    fn test_stub_env_layout() {
        let env = StubEnv::with_snapshots().unwrap();

        let config = env.config_home().join("snapdeck").join("config.toml");
        let content = fs::read_to_string(config).unwrap();
        assert!(content.contains("elevation = \"none\""));

        for tool in ["snapper", "sndiff"] {
            let path = env.config_home().parent().unwrap().join("bin").join(tool);
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_ne!(mode & 0o111, 0, "{} stub should be executable", tool);
        }
    }

    #[test]
    fn test_snapper_stub_dispatches_subcommands() {
        let script = listing_snapper_script();

        // list-configs must match before the broader *list* arm
        let configs_pos = script.find("*list-configs*").unwrap();
        let list_pos = script.find("*list*)").unwrap();
        assert!(configs_pos < list_pos);
        assert!(script.contains("*rollback*"));
    }
}
