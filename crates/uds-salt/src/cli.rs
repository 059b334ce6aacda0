//! Salt lookups through the `salt-call` and `salt` executables
//!
//! Each lookup spawns one subprocess with `--out=json` and decodes its
//! stdout. `salt-call` answers for the local minion as `{"local": value}`;
//! `salt --static` answers for every targeted minion as `{"<id>": value}`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::source::PillarSource;

/// [`PillarSource`] backed by the Salt command-line tools.
#[derive(Debug, Clone)]
pub struct SaltCli {
    salt_call: PathBuf,
    salt: PathBuf,
    target: String,
}

impl Default for SaltCli {
    fn default() -> Self {
        Self::new("salt-call", "salt")
    }
}

impl SaltCli {
    pub fn new(salt_call: impl Into<PathBuf>, salt: impl Into<PathBuf>) -> Self {
        Self {
            salt_call: salt_call.into(),
            salt: salt.into(),
            target: "*".to_string(),
        }
    }

    /// Restrict [`PillarSource::minion_grains`] to a minion glob.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    fn local(&self, function: &str, key: &str) -> Result<String> {
        let stdout = run(&self.salt_call, &["--out=json", function, key])?;
        let doc: Value = serde_json::from_str(&stdout).map_err(|source| Error::Parse {
            program: program_name(&self.salt_call),
            source,
        })?;

        doc.get("local")
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .ok_or_else(|| Error::MissingValue {
                key: key.to_string(),
            })
    }
}

impl PillarSource for SaltCli {
    fn pillar_get(&self, key: &str) -> Result<String> {
        self.local("pillar.get", key)
    }

    fn grain_get(&self, key: &str) -> Result<String> {
        self.local("grains.get", key)
    }

    fn minion_grains(&self, key: &str) -> Result<BTreeMap<String, String>> {
        let stdout = run(
            &self.salt,
            &["--out=json", "--static", &self.target, "grains.get", key],
        )?;
        let doc: BTreeMap<String, Value> =
            serde_json::from_str(&stdout).map_err(|source| Error::Parse {
                program: program_name(&self.salt),
                source,
            })?;

        let grains = doc
            .into_iter()
            .filter_map(|(minion, value)| match value {
                Value::String(v) if !v.is_empty() => Some((minion, v)),
                other => {
                    tracing::warn!(%minion, key, value = %other, "ignoring minion without usable grain");
                    None
                }
            })
            .collect();
        Ok(grains)
    }
}

fn program_name(program: &Path) -> String {
    program.display().to_string()
}

/// Run a Salt executable and return its stdout.
fn run(program: &Path, args: &[&str]) -> Result<String> {
    tracing::debug!(program = %program.display(), ?args, "querying salt");

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| Error::Spawn {
            program: program_name(program),
            source,
        })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let code = output.status.code().unwrap_or(-1);
        Err(Error::CommandFailed {
            program: program_name(program),
            code,
            stderr,
        })
    }
}
