use crate::models::PDF_MIME;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

lazy_static::lazy_static! {
    static ref SHELL_ESCAPE: Regex = Regex::new(r"\\(.)").expect("valid escape pattern");
}

pub fn get_pdf_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() && mime_type_for(&path) == PDF_MIME {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}

/// Media type as a browser would declare it, judged from the extension only.
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => PDF_MIME,
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "json" => "application/json",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}

/// Extracts the first file path from text pasted by a terminal drop.
///
/// Terminals quote or backslash-escape dropped paths, some send `file://`
/// URIs, several files arrive separated by newlines.
pub fn parse_dropped_path(pasted: &str) -> Option<PathBuf> {
    let first = pasted.lines().map(str::trim).find(|l| !l.is_empty())?;

    let unquoted = if first.len() >= 2
        && ((first.starts_with('\'') && first.ends_with('\''))
            || (first.starts_with('"') && first.ends_with('"')))
    {
        first[1..first.len() - 1].to_string()
    } else {
        SHELL_ESCAPE.replace_all(first, "$1").to_string()
    };

    let path = match unquoted.strip_prefix("file://") {
        Some(rest) => match rest.strip_prefix("localhost") {
            Some(local) if local.starts_with('/') => percent_decode(local),
            _ => percent_decode(rest),
        },
        None => unquoted,
    };

    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && let Some(byte) = s
                .get(i + 1..i + 3)
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
        {
            out.push(byte);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).to_string()
}
