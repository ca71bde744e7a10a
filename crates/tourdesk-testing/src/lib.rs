//! Shared fixtures for tourdesk integration tests.
//!
//! [`TestAgency`] stands up an isolated config (zero simulated latency, so
//! tests never sleep) and runs the `tourdesk` binary against it.

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tourdesk_runtime::Config;

pub struct TestAgency {
    _temp_dir: TempDir,
    config_path: PathBuf,
}

impl TestAgency {
    /// Fixture with the default demo data and instant mutations.
    pub fn new() -> Result<Self> {
        let config = Config {
            simulated_latency_ms: 0,
            ..Config::default()
        };
        Self::with_config(&config)
    }

    pub fn with_config(config: &Config) -> Result<Self> {
        let temp_dir = TempDir::new().context("failed to create temp dir")?;
        let config_path = temp_dir.path().join("config.toml");
        config
            .save_to(&config_path)
            .map_err(|e| anyhow::anyhow!("failed to write test config: {}", e))?;

        Ok(Self {
            _temp_dir: temp_dir,
            config_path,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn temp_dir(&self) -> &Path {
        self._temp_dir.path()
    }

    /// Base command with the fixture config applied.
    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("tourdesk").context("tourdesk binary not built")?;
        cmd.arg("--config").arg(&self.config_path);
        Ok(cmd)
    }

    /// Run the binary with `args` and capture the outcome.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let output = self.command()?.args(args).output()?;
        Ok(CliResult { output })
    }
}

pub struct CliResult {
    output: std::process::Output,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.stdout()).with_context(|| {
            format!("stdout is not valid JSON:\n{}", self.stdout())
        })
    }
}

/// Assert helpers mirroring how the suite checks JSON list output.
pub mod assertions {
    use anyhow::{Result, bail};
    use serde_json::Value;

    pub fn assert_tour_count(json: &Value, expected: usize) -> Result<()> {
        let Some(array) = json.as_array() else {
            bail!("expected a JSON array, got: {}", json);
        };
        if array.len() != expected {
            bail!("expected {} tours, got {}", expected, array.len());
        }
        Ok(())
    }

    pub fn assert_prices_in_order(json: &Value, expected: &[i64]) -> Result<()> {
        let Some(array) = json.as_array() else {
            bail!("expected a JSON array, got: {}", json);
        };
        let prices: Vec<i64> = array
            .iter()
            .filter_map(|tour| tour.get("price").and_then(Value::as_i64))
            .collect();
        if prices != expected {
            bail!("expected prices {:?}, got {:?}", expected, prices);
        }
        Ok(())
    }
}
