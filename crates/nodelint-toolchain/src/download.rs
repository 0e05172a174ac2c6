//! Node.js archive download from nodejs.org or a configurable mirror.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use nodelint_util::errors::LintError;

use crate::version::NodeVersion;

pub const NODE_DIST_BASE: &str = "https://nodejs.org/dist";

fn client() -> miette::Result<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder()
        .user_agent("nodelint")
        .build()
        .map_err(|e| LintError::Network {
            message: format!("Failed to build HTTP client: {e}"),
        })?)
}

/// File name of the release archive: `node-v20.11.1-linux-x64.tar.gz`.
pub fn tarball_name(version: &NodeVersion, platform: &str) -> String {
    format!("node-{}-{platform}.tar.gz", version.tag())
}

/// Build the download URL for a release archive.
pub fn tarball_url(version: &NodeVersion, platform: &str, mirror: Option<&str>) -> String {
    let base = mirror.unwrap_or(NODE_DIST_BASE);
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        version.tag(),
        tarball_name(version, platform)
    )
}

/// Build the URL of the `SHASUMS256.txt` published next to the archives.
pub fn checksums_url(version: &NodeVersion, mirror: Option<&str>) -> String {
    let base = mirror.unwrap_or(NODE_DIST_BASE);
    format!(
        "{}/{}/SHASUMS256.txt",
        base.trim_end_matches('/'),
        version.tag()
    )
}

/// GET `url` and return the body as text.
pub fn fetch_text(url: &str) -> miette::Result<String> {
    Ok(client()?
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .and_then(|r| r.text())
        .map_err(|e| LintError::Network {
            message: format!("Failed to fetch {url}: {e}"),
        })?)
}

/// Download a file from `url` to `dest`, showing a progress bar.
/// Returns the path written.
pub fn download_file(url: &str, dest: &Path) -> miette::Result<PathBuf> {
    tracing::info!("Downloading {}", url);

    let resp = client()?.get(url).send().map_err(|e| LintError::Network {
        message: format!("Failed to download {url}: {e}"),
    })?;

    if !resp.status().is_success() {
        return Err(LintError::Network {
            message: format!("HTTP {} for {url}", resp.status()),
        }
        .into());
    }

    let pb = resp
        .content_length()
        .filter(|total| *total > 0)
        .map(nodelint_util::progress::download_bar);

    let mut out = File::create(dest).map_err(LintError::Io)?;
    let mut reader = resp;
    let mut buf = [0u8; 8192];
    loop {
        let n = reader.read(&mut buf).map_err(|e| LintError::Network {
            message: format!("Read error: {e}"),
        })?;
        if n == 0 {
            break;
        }
        out.write_all(&buf[..n]).map_err(LintError::Io)?;
        if let Some(ref pb) = pb {
            pb.inc(n as u64);
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    Ok(dest.to_path_buf())
}

/// Find the digest for `filename` in a `SHASUMS256.txt` body
/// (`<hex>  <filename>` per line).
pub fn find_checksum(shasums: &str, filename: &str) -> Option<String> {
    shasums.lines().find_map(|line| {
        let mut parts = line.split_whitespace();
        let hash = parts.next()?;
        let name = parts.next()?;
        (name == filename).then(|| hash.to_lowercase())
    })
}

/// Fetch the expected sha256 of the archive for `version` and `platform`.
/// `None` if the checksum list does not mention the archive.
pub fn fetch_checksum(
    version: &NodeVersion,
    platform: &str,
    mirror: Option<&str>,
) -> miette::Result<Option<String>> {
    let body = fetch_text(&checksums_url(version, mirror))?;
    Ok(find_checksum(&body, &tarball_name(version, platform)))
}

/// Compute SHA-256 of a file and compare to the expected hex digest.
pub fn verify_checksum(file: &Path, expected: &str) -> miette::Result<()> {
    let actual = nodelint_util::hash::sha256_file(file).map_err(LintError::Io)?;
    if actual != expected {
        return Err(LintError::Toolchain {
            message: format!(
                "Checksum mismatch for {}: expected {expected}, got {actual}",
                file.display()
            ),
        }
        .into());
    }
    Ok(())
}
