use crate::manifest::Manifest;
use crate::result::Result;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Directory name holding installed third-party packages; never traversed.
const DEPENDENCY_DIR: &str = "node_modules";

/// Outcome of an archive run.
pub struct ArchiveSummary {
    pub output_path: PathBuf,

    /// On-disk size of the finished archive.
    pub bytes: u64,

    /// Inclusion entries that did not exist; warned about, never fatal.
    pub missing: Vec<String>,
}

fn is_excluded_dir(name: &str) -> bool {
    name == DEPENDENCY_DIR || name.starts_with('.')
}

/// Only directories are subject to exclusion. The walk root itself always
/// passes, so a hidden top-level inclusion entry is still archived.
fn keep_entry(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    !entry.file_name().to_str().is_some_and(is_excluded_dir)
}

/// Package the manifest's inclusion list into a single deflate-compressed
/// zip at the project root, overwriting any previous archive.
pub fn build(base_dir: &Path, manifest: &Manifest) -> Result<ArchiveSummary> {
    println!("Creating {}...", manifest.output_filename);

    let output_path = base_dir.join(manifest.output_filename);
    let file = File::create(&output_path)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    let mut missing = Vec::new();

    for &item in manifest.include {
        let path = base_dir.join(item);

        if path.is_file() {
            println!("Adding file: {}", item);
            add_file(&mut zip, &path, item, options)?;
        } else if path.is_dir() {
            println!("Adding directory: {}", item);
            add_tree(&mut zip, base_dir, &path, options)?;
        } else {
            println!("Warning: {} not found", item);
            missing.push(item.to_string());
        }
    }

    zip.finish()?;

    let bytes = fs::metadata(&output_path)?.len();
    println!(
        "Success! Created {} ({} bytes)",
        manifest.output_filename, bytes
    );

    Ok(ArchiveSummary {
        output_path,
        bytes,
        missing,
    })
}

fn add_file(
    zip: &mut ZipWriter<File>,
    path: &Path,
    name: &str,
    options: SimpleFileOptions,
) -> Result<()> {
    zip.start_file(name, options)?;
    let mut f = File::open(path)?;
    let mut buffer = Vec::new();
    f.read_to_end(&mut buffer)?;
    zip.write_all(&buffer)?;
    Ok(())
}

fn add_tree(
    zip: &mut ZipWriter<File>,
    base_dir: &Path,
    dir: &Path,
    options: SimpleFileOptions,
) -> Result<()> {
    for entry in WalkDir::new(dir).into_iter().filter_entry(keep_entry) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        // Stored names stay relative to the project root.
        let name = path.strip_prefix(base_dir).unwrap_or(path);
        add_file(zip, path, &name.to_string_lossy(), options)?;
    }

    Ok(())
}
