use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

pub const ARROW_SVG: &str =
    "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\"><path d=\"M4 12h16\"/></svg>";

pub struct ServerGuard {
    pub base_url: String,
    data_dir: tempfile::TempDir,
    child: Child,
}

impl ServerGuard {
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Replaces a served file; the server reads from disk on every request.
    #[allow(dead_code)]
    pub fn write_file(&self, rel: &str, contents: &str) -> Result<()> {
        let path = self.data_dir.path().join(rel);
        std::fs::write(&path, contents).with_context(|| format!("write {}", path.display()))
    }
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Manifest referencing files served by the same fixture server.
pub fn sample_manifest(base_url: &str) -> String {
    serde_json::json!({
        "name": "Fixture Library",
        "version": "1.0.0",
        "updated": "2024-05-01T10:30:00Z",
        "totalAssets": 4,
        "assets": [
            {
                "id": "icon-arrow",
                "name": "Arrow",
                "category": "icons",
                "tags": ["navigation"],
                "url": format!("{base_url}/png/arrow.png"),
                "svgUrl": format!("{base_url}/svg/arrow.svg"),
                "size": "24x24"
            },
            {
                "id": "logo-main",
                "name": "Main Logo",
                "category": "logos",
                "url": format!("{base_url}/png/logo.png")
            },
            {
                "id": "icon-star",
                "name": "Star",
                "category": "Icons",
                "url": format!("{base_url}/png/star.png"),
                "svgUrl": ""
            },
            {
                "id": "misc-blob",
                "name": "Blob",
                "url": format!("{base_url}/png/blob.png")
            }
        ]
    })
    .to_string()
}

/// Spawns the fixture server over a temp dir holding `metadata.json`, a
/// malformed manifest and one SVG.
pub fn spawn_server() -> Result<ServerGuard> {
    let data_dir = tempfile::tempdir().context("create server tempdir")?;
    std::fs::create_dir_all(data_dir.path().join("svg")).context("create svg dir")?;
    std::fs::write(data_dir.path().join("svg").join("arrow.svg"), ARROW_SVG)
        .context("write svg")?;
    std::fs::write(data_dir.path().join("broken.json"), "{\"assets\": [")
        .context("write broken manifest")?;

    let addr_file = data_dir.path().join("addr.txt");

    let child = Command::new(env!("CARGO_BIN_EXE_graphics-catalog-server"))
        .args([
            "--addr",
            "127.0.0.1:0",
            "--addr-file",
            addr_file.to_str().context("addr file path")?,
            "--data-dir",
            data_dir.path().to_str().context("data dir path")?,
        ])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn graphics-catalog-server")?;

    let base_url = read_addr_file(&addr_file)?;
    wait_for_healthz(&base_url)?;

    std::fs::write(
        data_dir.path().join("metadata.json"),
        sample_manifest(&base_url),
    )
    .context("write manifest")?;

    Ok(ServerGuard {
        base_url,
        data_dir,
        child,
    })
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
            anyhow::bail!("server did not become healthy at {}/healthz", base_url);
        }
        match client.get(format!("{}/healthz", base_url)).send() {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => {
                thread::sleep(Duration::from_millis(50));
            }
        }
    }
}
