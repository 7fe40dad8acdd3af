//! Expansion of user-selected files and folders into a flat, deterministic
//! job queue. Folders are scanned for the supported presentation extensions,
//! optionally descending into subdirectories; the result is deduplicated and
//! sorted lexicographically so enumeration order never depends on the
//! platform.
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::error::Result;
use crate::types::{ConversionJob, is_presentation_file};

/// Expand `inputs` into the sorted set of presentation files they denote.
/// Explicitly listed files must carry a supported extension; anything else is
/// logged and skipped rather than failing the whole selection.
pub fn expand_inputs(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    let mut found: BTreeSet<PathBuf> = BTreeSet::new();

    for input in inputs {
        if input.is_file() {
            if is_presentation_file(input) {
                found.insert(input.clone());
            } else {
                warn!("Skipping non-presentation file: {:?}", input);
            }
        } else if input.is_dir() {
            scan_folder(input, recursive, &mut found)?;
        } else {
            warn!("Skipping missing input: {:?}", input);
        }
    }

    Ok(found.into_iter().collect())
}

fn scan_folder(folder: &Path, recursive: bool, found: &mut BTreeSet<PathBuf>) -> Result<()> {
    let max_depth = if recursive { usize::MAX } else { 1 };

    for entry in WalkDir::new(folder).max_depth(max_depth) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Error scanning {:?}: {}", folder, e);
                continue;
            }
        };
        let path = entry.path();
        if entry.file_type().is_file() && is_presentation_file(path) {
            found.insert(path.to_path_buf());
        }
    }

    Ok(())
}

/// Expand inputs and pair every file with its derived output path.
pub fn build_queue(
    inputs: &[PathBuf],
    recursive: bool,
    output_dir: &Path,
) -> Result<Vec<ConversionJob>> {
    let files = expand_inputs(inputs, recursive)?;
    Ok(files
        .into_iter()
        .map(|source| ConversionJob::new(source, output_dir))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // a.pptx
    // folder/b.ppt
    // folder/notes.txt
    // folder/sub/c.pptx
    fn seed_tree(root: &Path) -> (PathBuf, PathBuf) {
        let a = root.join("a.pptx");
        fs::write(&a, b"stub").unwrap();
        let folder = root.join("folder");
        fs::create_dir_all(folder.join("sub")).unwrap();
        fs::write(folder.join("b.ppt"), b"stub").unwrap();
        fs::write(folder.join("notes.txt"), b"stub").unwrap();
        fs::write(folder.join("sub").join("c.pptx"), b"stub").unwrap();
        (a, folder)
    }

    #[test]
    fn non_recursive_scan_excludes_subdirectories() {
        let tmp = tempfile::tempdir().unwrap();
        let (a, folder) = seed_tree(tmp.path());

        let files = expand_inputs(&[a.clone(), folder.clone()], false).unwrap();
        assert_eq!(files, vec![a, folder.join("b.ppt")]);
    }

    #[test]
    fn recursive_scan_includes_subdirectories() {
        let tmp = tempfile::tempdir().unwrap();
        let (a, folder) = seed_tree(tmp.path());

        let files = expand_inputs(&[a.clone(), folder.clone()], true).unwrap();
        assert_eq!(
            files,
            vec![a, folder.join("b.ppt"), folder.join("sub").join("c.pptx")]
        );
    }

    #[test]
    fn duplicate_selections_collapse() {
        let tmp = tempfile::tempdir().unwrap();
        let (a, folder) = seed_tree(tmp.path());

        // The same file arrives both directly and via its parent folder.
        let files = expand_inputs(&[a.clone(), a.clone(), folder.clone()], false).unwrap();
        assert_eq!(files.iter().filter(|f| **f == a).count(), 1);
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn unsupported_and_missing_inputs_are_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let txt = tmp.path().join("readme.txt");
        fs::write(&txt, b"stub").unwrap();

        let files =
            expand_inputs(&[txt, tmp.path().join("not-there.pptx")], true).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn queue_outputs_land_in_the_output_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let (_a, folder) = seed_tree(tmp.path());

        let jobs = build_queue(&[folder], true, Path::new("/out")).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].output, Path::new("/out").join("b.pdf"));
        assert_eq!(jobs[1].output, Path::new("/out").join("c.pdf"));
    }
}
