pub mod extract;
pub mod gen;
pub mod tools;

use crate::icon::extract::IconRecord;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use thiserror::Error;

/// Drives one run of the tool: scans the source directory, converts each
/// icon, and writes the generated icons file.
#[derive(Debug)]
pub struct IconConverter {
    source_dir: PathBuf,
    output: PathBuf,
}

impl IconConverter {
    /// Validates the source and output paths before any work happens.
    pub fn new(
        source_dir: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<Self, ConvertError> {
        let source_dir = source_dir.as_ref().to_path_buf();
        if !source_dir.is_dir() {
            return Err(ConvertError::SourceDirMissing(source_dir));
        }

        let output = output.as_ref().to_path_buf();
        if output.is_dir() {
            return Err(ConvertError::OutputIsDirectory(output));
        }

        Ok(Self { source_dir, output })
    }

    /// Converts every icon and writes the output file, returning the number
    /// of icons written.
    ///
    /// Export lines are written as each icon completes, so a failure midway
    /// leaves the lines for already-converted icons in the file.
    pub fn run(&self) -> Result<usize, ConvertError> {
        let icons = scan_icons(&self.source_dir)?;

        let mut writer = BufWriter::new(File::create(&self.output)?);
        writeln!(writer, "{}", gen::HEADER)?;

        for icon_file in &icons {
            let record = convert_icon(icon_file)?;
            let slug = gen::slugify(&record.title);
            writeln!(writer, "{}", gen::export_statement(&slug, &record)?)?;
        }

        writer.flush()?;
        Ok(icons.len())
    }
}

/// Lists the `.png` icons in the source directory, sorted by file name.
///
/// Only PNG files drive the output; the conversion routine itself also
/// accepts SVG inputs, but those are not discovered here (see DESIGN.md).
fn scan_icons(source_dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let mut icons = Vec::new();
    for entry in std::fs::read_dir(source_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension() == Some(OsStr::new("png")) {
            icons.push(path);
        }
    }
    icons.sort();
    Ok(icons)
}

/// Converts a single icon file into its extracted record.
///
/// Non-SVG inputs are flattened to a bitmap, traced to SVG, and normalized
/// to a 24x24 canvas via the external tools; SVG inputs are copied to the
/// working path as-is. All `<stem>.tmp.*` artifacts are removed when this
/// returns, successfully or not.
pub fn convert_icon(icon_file: &Path) -> Result<IconRecord, ConvertError> {
    let stem = icon_file
        .file_stem()
        .and_then(OsStr::to_str)
        .ok_or_else(|| ConvertError::BadFileName(icon_file.to_path_buf()))?
        .to_owned();
    let dir = icon_file.parent().unwrap_or_else(|| Path::new("."));

    tracing::info!("converting {stem}");
    let _cleanup = TempArtifacts::new(dir, &stem);
    let work_svg = dir.join(format!("{stem}.tmp.svg"));

    if icon_file.extension() == Some(OsStr::new("svg")) {
        std::fs::copy(icon_file, &work_svg)?;
    } else {
        let bitmap = dir.join(format!("{stem}.tmp.pbm"));
        let traced = dir.join(format!("{stem}.tmp.in.svg"));

        tools::convert([
            OsStr::new("-flatten"),
            icon_file.as_os_str(),
            bitmap.as_os_str(),
        ])?;
        tools::potrace([
            OsStr::new("-s"),
            bitmap.as_os_str(),
            OsStr::new("-o"),
            traced.as_os_str(),
        ])?;
        tools::convert([
            traced.as_os_str(),
            OsStr::new("-resize"),
            OsStr::new("24x24"),
            OsStr::new("-gravity"),
            OsStr::new("center"),
            OsStr::new("-extent"),
            OsStr::new("24x24"),
            work_svg.as_os_str(),
        ])?;
    }

    tracing::info!("extracting {stem}");
    let svg = std::fs::read_to_string(&work_svg)?;
    extract::extract_record(&svg, &stem)
}

/// Removes every `<stem>.tmp.*` file in the directory when dropped.
struct TempArtifacts {
    dir: PathBuf,
    prefix: String,
}

impl TempArtifacts {
    fn new(dir: &Path, stem: &str) -> Self {
        Self {
            dir: dir.to_path_buf(),
            prefix: format!("{stem}.tmp."),
        }
    }
}

impl Drop for TempArtifacts {
    fn drop(&mut self) {
        let Ok(entries) = std::fs::read_dir(&self.dir) else {
            return;
        };
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if name.starts_with(&self.prefix) {
                if let Err(err) = std::fs::remove_file(entry.path()) {
                    tracing::warn!("failed to remove {}: {err}", entry.path().display());
                }
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("an I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("source directory {} does not exist or is not a directory", .0.display())]
    SourceDirMissing(PathBuf),

    #[error("output path {} is a directory", .0.display())]
    OutputIsDirectory(PathBuf),

    #[error("icon file {} has no usable file name", .0.display())]
    BadFileName(PathBuf),

    #[error("failed to spawn {tool}: {source}")]
    ToolSpawn {
        tool: &'static str,
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    Tool {
        tool: &'static str,
        status: ExitStatus,
        stderr: String,
    },

    #[error("failed to parse SVG: {0}")]
    SvgParse(#[from] roxmltree::Error),

    #[error("icon {0} has no group element")]
    MissingGroup(String),

    #[error("icon {0} has a path element without path data")]
    MissingPathData(String),

    #[error("failed to serialize icon record: {0}")]
    Serialize(#[from] serde_json::Error),
}
