// src/file.rs

use std::{
    error::Error,
    fs::{self, File, OpenOptions},
    io::{BufWriter, Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use crate::csv::{to_export_string, write_row};
use crate::config::options::ExportOptions;

/// Write one export file based on ExportOptions (path, headers policy, delimiter).
/// `row_ix` selects rows in order; `None` exports all of them.
/// Returns the final path written to.
pub fn write_export_single(
    export: &ExportOptions,
    headers: &[String],
    rows: &[Vec<String>],
    row_ix: Option<&[usize]>,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(headers, rows, row_ix, export.include_headers, export.delim());

    fs::write(&path, contents)?;
    Ok(path)
}

/// Ensure parent dir exists; create/truncate file; optionally write header.
pub fn write_rows_start(
    path: &Path,
    headers: Option<&[String]>,
    sep: char,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    if let Some(h) = headers {
        write_row(&mut out, h, sep)?;
    }
    out.flush()?;
    Ok(())
}

/// Append multiple rows to an existing CSV/TSV file (must be created already).
/// A last line without a terminator is closed first so rows never run together.
pub fn append_rows(
    path: &Path,
    rows: &[Vec<String>],
    sep: char,
) -> Result<(), Box<dyn Error>> {
    let unterminated = !ends_with_newline(path)?;
    let file = OpenOptions::new().append(true).open(path)?;
    let mut out = BufWriter::new(file);
    if unterminated && !rows.is_empty() {
        out.write_all(b"\n")?;
    }
    for row in rows {
        write_row(&mut out, row, sep)?;
    }
    out.flush()?;
    Ok(())
}

/// Empty files count as terminated.
fn ends_with_newline(path: &Path) -> Result<bool, Box<dyn Error>> {
    let mut file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_closes_an_unterminated_last_line() {
        let mut path = std::env::temp_dir();
        path.push("incident_file_unterminated.csv");
        fs::write(&path, "a,b\n1,x").unwrap();

        append_rows(&path, &[vec![s!("2"), s!("y")]], ',').unwrap();
        append_rows(&path, &[vec![s!("3"), s!("z")]], ',').unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\n1,x\n2,y\n3,z\n");
    }
}
