use anyhow::Result;
use std::path::PathBuf;

const SITEDESK_DIR: &str = ".sitedesk";
const DB_FILE: &str = "sitedesk.db";

/// Environment variable to override the SiteDesk directory.
const SITEDESK_DIR_ENV: &str = "SITEDESK_DIR";

/// Resolve the SiteDesk data directory.
/// Priority: SITEDESK_DIR env var > ~/.sitedesk/
pub fn resolve_sitedesk_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(SITEDESK_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|h| h.join(SITEDESK_DIR))
        .ok_or_else(|| anyhow::anyhow!("Failed to determine home directory"))
}

/// Ensure the SiteDesk directory exists and return its path.
pub fn ensure_sitedesk_dir() -> Result<PathBuf> {
    let dir = resolve_sitedesk_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Ensure the database path exists and return it: ~/.sitedesk/sitedesk.db
pub fn ensure_database_path() -> Result<PathBuf> {
    Ok(ensure_sitedesk_dir()?.join(DB_FILE))
}

/// Convenience helper returning the database path as a UTF-8 string.
pub fn ensure_database_path_string() -> Result<String> {
    Ok(ensure_database_path()?.to_string_lossy().into_owned())
}
