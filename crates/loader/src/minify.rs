//! Rewrites JSON shards without insignificant whitespace.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{LoadError, Result};

/// Compacts a JSON document. Member order and values are kept as they are.
pub fn minify_json(input: &str) -> std::result::Result<String, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    serde_json::to_string(&value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinifiedFile {
    pub file_name: String,
    pub original_size: u64,
    pub minified_size: u64,
}

impl MinifiedFile {
    pub fn saved(&self) -> u64 {
        self.original_size.saturating_sub(self.minified_size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinifyReport {
    pub files: Vec<MinifiedFile>,
}

impl MinifyReport {
    pub fn original_size(&self) -> u64 {
        self.files.iter().map(|file| file.original_size).sum()
    }

    pub fn minified_size(&self) -> u64 {
        self.files.iter().map(|file| file.minified_size).sum()
    }

    /// Fraction of bytes saved, `0.0` for an empty report.
    pub fn saved_ratio(&self) -> f64 {
        let original = self.original_size();
        if original == 0 {
            return 0.0;
        }
        (original - self.minified_size().min(original)) as f64 / original as f64
    }
}

fn kilobytes(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Minifies every `*.json` file of `from` into `to` (created if needed),
/// keeping the file names. Files are processed in name order.
pub fn minify_dir(from: &Path, to: &Path) -> Result<MinifyReport> {
    if !from.is_dir() {
        return Err(LoadError::DataDirNotFound(from.to_path_buf()));
    }
    fs::create_dir_all(to)?;

    let mut report = MinifyReport::default();
    for path in json_files(from)? {
        let input = fs::read_to_string(&path)?;
        let minified = minify_json(&input).map_err(|source| LoadError::InvalidJson {
            location: path.display().to_string(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        fs::write(to.join(&file_name), &minified)?;

        let file = MinifiedFile {
            file_name,
            original_size: input.len() as u64,
            minified_size: minified.len() as u64,
        };
        log::info!(
            "{}: {:.2} KB -> {:.2} KB (saved {:.2} KB)",
            file.file_name,
            kilobytes(file.original_size),
            kilobytes(file.minified_size),
            kilobytes(file.saved())
        );
        report.files.push(file);
    }

    log::info!(
        "minified {} files: {:.2} KB -> {:.2} KB ({:.1}% saved)",
        report.files.len(),
        kilobytes(report.original_size()),
        kilobytes(report.minified_size()),
        report.saved_ratio() * 100.0
    );
    Ok(report)
}
