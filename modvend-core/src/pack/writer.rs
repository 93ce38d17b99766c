use crate::codec::{Compression, FinishWrite};
use crate::error::{DirRole, Result, VendError};
use crate::util::fsutil::expect_dir;
use std::fs::File;
use std::path::Path;
use tar::{Builder, Header};
use walkdir::WalkDir;

/// Pack every regular file under `input_dir` into a compressed tar archive
/// at `output_dir/archive_name`, overwriting any existing file there.
///
/// Entry names are flattened: they are relative to `input_dir` itself, with
/// no leading folder component (`a.txt`, `sub/b.txt`). Downstream consumers
/// rely on this, so it is part of the archive format contract.
///
/// Directories, symlinks and special files are skipped; only regular file
/// content and metadata (size, mode, mtime) are recorded. On error the
/// partially written archive is left in place and must be treated as
/// invalid by the caller.
pub fn compress_folder(
    input_dir: &Path,
    output_dir: &Path,
    archive_name: &str,
    compression: Compression,
) -> Result<()> {
    expect_dir(input_dir, DirRole::Input)?;
    expect_dir(output_dir, DirRole::Output)?;

    let input_root = std::path::absolute(input_dir)?;

    let dest = output_dir.join(archive_name);
    let out = File::create(&dest).map_err(|e| VendError::Archive {
        context: format!("creating archive {}", dest.display()),
        source: e,
    })?;

    let enc = compression.codec().encoder(out)?;
    let mut tar = Builder::new(enc);

    let walked = append_tree(&input_root, &mut tar);

    // The tar terminator and the compression trailer must go out even when
    // the walk failed, innermost stream first. A walk error wins over a
    // flush error.
    let finished = tar
        .into_inner()
        .map_err(VendError::from)
        .and_then(FinishWrite::finish);

    walked.and(finished)
}

fn append_tree(root: &Path, tar: &mut Builder<Box<dyn FinishWrite>>) -> Result<()> {
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        // walkdir only yields paths under root, so this cannot fail
        let rel = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| VendError::Archive {
                context: format!("relativizing {}", entry.path().display()),
                source: std::io::Error::other(e),
            })?
            .to_path_buf();

        append_file(tar, entry.path(), &rel)?;
    }

    Ok(())
}

fn append_file(
    tar: &mut Builder<Box<dyn FinishWrite>>,
    src: &Path,
    rel: &Path,
) -> Result<()> {
    let meta = src.metadata().map_err(|e| VendError::Archive {
        context: format!("reading metadata of {}", src.display()),
        source: e,
    })?;

    let mut header = Header::new_gnu();
    header.set_metadata(&meta);

    let mut file = File::open(src).map_err(|e| VendError::Archive {
        context: format!("opening {}", src.display()),
        source: e,
    })?;

    // append_data writes the header (handling long names) and then streams
    // the file contents, so no file is ever fully buffered.
    tar.append_data(&mut header, rel, &mut file)
        .map_err(|e| VendError::Archive {
            context: format!("adding {} to archive", rel.display()),
            source: e,
        })?;

    Ok(())
}
