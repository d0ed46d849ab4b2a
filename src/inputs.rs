use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::batch::InputItem;

/// Detect a sequence file format from its extension, looking through `.gz`
pub fn detect_sequence_format(path: &Path) -> Option<&'static str> {
    let name = path.file_name()?.to_str()?.to_lowercase();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    let ext = Path::new(name).extension()?.to_str()?;

    Some(match ext {
        "fastq" | "fq" => "fastq",
        "fasta" | "fa" | "fna" => "fasta",
        "bam" => "bam",
        "sam" => "sam",
        _ => return None,
    })
}

/// Check if a path should be skipped during discovery
pub fn should_ignore(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

/// Collect sequence files from directories and explicit file paths.
///
/// Directories are walked recursively; explicit files are kept if they exist,
/// whatever their extension. The result is absolute, sorted and free of duplicates.
pub fn collect_inputs<P: AsRef<Path>>(roots: &[P]) -> Result<Vec<InputItem>> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for root in roots {
        let root = root.as_ref();
        if !root.exists() {
            bail!("Input path does not exist: {}", root.display());
        }
        if root.is_file() {
            paths.push(absolute(root)?);
            continue;
        }

        info!("Scanning input directory: {}", root.display());

        for entry in WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !should_ignore(e.path()))
        {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };
            let path = entry.path();

            if !entry.file_type().is_file() {
                continue;
            }

            if detect_sequence_format(path).is_none() {
                debug!("Ignoring non-sequence file: {}", path.display());
                continue;
            }

            paths.push(absolute(path)?);
        }
    }

    paths.sort();
    paths.dedup();

    let items = paths
        .into_iter()
        .map(InputItem::new)
        .collect::<Result<Vec<_>, _>>()?;

    info!("✓ Found {} input files", items.len());
    Ok(items)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).context(format!("Failed to resolve input path: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("seqbatch-{}", Uuid::new_v4()));
            fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn touch(&self, rel: &str) -> PathBuf {
            let path = self.0.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, b"@r1\nACGT\n+\nIIII\n").unwrap();
            path
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn test_detect_sequence_format() {
        assert_eq!(detect_sequence_format(Path::new("a.fastq")), Some("fastq"));
        assert_eq!(detect_sequence_format(Path::new("a.fq.gz")), Some("fastq"));
        assert_eq!(detect_sequence_format(Path::new("A.FA")), Some("fasta"));
        assert_eq!(detect_sequence_format(Path::new("reads.bam")), Some("bam"));
        assert_eq!(detect_sequence_format(Path::new("notes.txt")), None);
        assert_eq!(detect_sequence_format(Path::new("archive.gz")), None);
    }

    #[test]
    fn test_should_ignore() {
        assert!(should_ignore(Path::new("/data/.hidden.fq")));
        assert!(!should_ignore(Path::new("/data/sample.fq")));
    }

    #[test]
    fn test_collect_inputs_walks_sorted() {
        let scratch = ScratchDir::new();
        scratch.touch("b.fq");
        scratch.touch("a.fastq.gz");
        scratch.touch("nested/c.fq");
        scratch.touch("readme.txt");
        scratch.touch(".hidden/d.fq");

        let items = collect_inputs(&[&scratch.0]).unwrap();
        let names: Vec<String> = items
            .iter()
            .map(|i| i.path().file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["a.fastq.gz", "b.fq", "c.fq"]);
        assert!(items.iter().all(|i| i.path().is_absolute()));
    }

    #[test]
    fn test_collect_inputs_explicit_files_dedup() {
        let scratch = ScratchDir::new();
        let file = scratch.touch("sample.fq");
        let other = scratch.touch("sample.dat");

        let items = collect_inputs(&[file.clone(), file, other]).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_inputs_rejects_non_utf8_file() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let scratch = ScratchDir::new();
        let file = scratch.0.join(OsStr::from_bytes(b"s\xff.fq"));
        if fs::write(&file, b"@r1\nACGT\n+\nIIII\n").is_err() {
            // Some filesystems refuse non-UTF-8 names outright
            return;
        }

        let result = collect_inputs(&[file]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_collect_inputs_missing_file() {
        let missing = std::env::temp_dir().join(format!("seqbatch-missing-{}.fq", Uuid::new_v4()));
        let result = collect_inputs(&[missing]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }
}
