#![allow(dead_code)]

use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use empedia::profile::ClientConfig;
use empedia::remote::RemoteClient;
use empedia::session::Session;

pub struct ServerGuard {
    pub base_url: String,
    pub token: String,
    _work_dir: tempfile::TempDir,
    child: Child,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

impl ServerGuard {
    /// Client signed in with the stub's dev token.
    pub fn client(&self) -> Result<RemoteClient> {
        self.client_with_token(&self.token)
    }

    pub fn client_with_token(&self, token: &str) -> Result<RemoteClient> {
        RemoteClient::new(
            ClientConfig::for_url(self.base_url.clone()),
            Session::with_token(token),
        )
    }
}

/// Empty stub.
pub fn spawn_server() -> Result<ServerGuard> {
    spawn(false)
}

/// Stub with the demo records (companies c1/c2, job j1, internship i1, course k1,
/// mentor m1 with program p1, users u1/u2, application a1, enrollment e1).
pub fn spawn_seeded_server() -> Result<ServerGuard> {
    spawn(true)
}

fn spawn(seed: bool) -> Result<ServerGuard> {
    let work_dir = tempfile::tempdir().context("create stub tempdir")?;
    let token = "dev".to_string();
    let addr_file = work_dir.path().join("addr.txt");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_empedia-stub"));
    cmd.arg("--addr")
        .arg("127.0.0.1:0")
        .arg("--addr-file")
        .arg(&addr_file)
        .arg("--dev-token")
        .arg(&token);
    if seed {
        cmd.arg("--seed");
    }
    let child = cmd
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn empedia-stub")?;

    let mut guard = ServerGuard {
        base_url: String::new(),
        token,
        _work_dir: work_dir,
        child,
    };
    guard.base_url = read_addr_file(&addr_file)?;
    wait_for_healthz(&guard.base_url)?;
    Ok(guard)
}

fn read_addr_file(addr_file: &Path) -> Result<String> {
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("addr file not written at {}", addr_file.display());
        }

        if let Ok(s) = std::fs::read_to_string(addr_file) {
            let s = s.trim();
            if !s.is_empty() {
                return Ok(format!("http://{}", s));
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}

pub fn wait_for_healthz(base_url: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("stub did not become healthy at {}/healthz", base_url);
        }
        match client.get(format!("{}/healthz", base_url)).send() {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => {
                thread::sleep(Duration::from_millis(50));
            }
        }
    }
}

pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

pub struct CliOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs the `empedia` binary against `profile_dir` with a clean environment for its own variables.
pub fn run_empedia(profile_dir: &Path, args: &[&str]) -> Result<CliOutput> {
    let out = Command::new(env!("CARGO_BIN_EXE_empedia"))
        .arg("--profile-dir")
        .arg(profile_dir)
        .args(args)
        .env_remove("EMPEDIA_API_URL")
        .env_remove("EMPEDIA_TOKEN")
        .env_remove("EMPEDIA_PROFILE_DIR")
        .env_remove("EMPEDIA_LOG")
        .output()
        .with_context(|| format!("run empedia {:?}", args))?;
    Ok(CliOutput {
        success: out.status.success(),
        stdout: String::from_utf8_lossy(&out.stdout).to_string(),
        stderr: String::from_utf8_lossy(&out.stderr).to_string(),
    })
}

/// Like [`run_empedia`] but fails unless the command succeeds.
pub fn empedia_ok(profile_dir: &Path, args: &[&str]) -> Result<String> {
    let out = run_empedia(profile_dir, args)?;
    if !out.success {
        anyhow::bail!(
            "empedia {:?} failed\nstdout:\n{}\nstderr:\n{}",
            args,
            out.stdout,
            out.stderr
        );
    }
    Ok(out.stdout)
}
