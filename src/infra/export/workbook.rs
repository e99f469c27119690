use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto_from_rs, Reader};
use chrono::NaiveDate;
use directories::UserDirs;

pub fn export_file_name(date: NaiveDate) -> String {
    format!("search_results_{date}.xlsx")
}

/// Opens the payload as a spreadsheet and returns its sheet names.
pub fn inspect_workbook(bytes: &[u8]) -> Result<Vec<String>> {
    let workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|err| anyhow!("payload is not a spreadsheet: {err}"))?;
    let sheets = workbook.sheet_names();
    if sheets.is_empty() {
        return Err(anyhow!("workbook has no sheets"));
    }
    Ok(sheets)
}

/// Where exports land: the user's Downloads folder, else the working directory.
pub fn default_download_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// First free path for `file_name` in `dir`, appending ` (n)` like a browser.
pub fn unique_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }
    let (stem, ext) = match file_name.rsplit_once('.') {
        Some((stem, ext)) => (stem, format!(".{ext}")),
        None => (file_name, String::new()),
    };
    (1..)
        .map(|n| dir.join(format!("{stem} ({n}){ext}")))
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

pub fn save_workbook(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create download dir: {}", dir.display()))?;
    let path = unique_path(dir, file_name);
    fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
