use crate::codec::Compression;
use crate::error::{DirRole, Result, VendError};
use crate::util::fsutil::expect_dir;
use crate::util::sanitize::sanitized_join;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use tar::{Archive, EntryType};

/// Extract a compressed tar archive into `output_dir`.
///
/// Every in-archive name is normalized through [`sanitized_join`] before any
/// filesystem write, so no entry can land outside `output_dir`. Directory
/// entries are created with mode `0o755`; file entries are created with the
/// mode recorded in their header and their contents stream-copied. Extraction
/// is not atomic: the first error aborts and already-written files remain.
pub fn decompress_archive(
    archive_path: &Path,
    output_dir: &Path,
    compression: Compression,
) -> Result<()> {
    expect_dir(output_dir, DirRole::Output)?;

    let file = File::open(archive_path).map_err(|e| VendError::Archive {
        context: format!("opening archive {}", archive_path.display()),
        source: e,
    })?;

    let dec = compression.codec().decoder(file)?;
    let mut archive = Archive::new(dec);

    for entry in archive.entries()? {
        let mut entry = entry?;
        let dest = sanitized_join(output_dir, entry.path()?.as_ref());

        if entry.header().entry_type() == EntryType::Directory {
            create_dir_tree(&dest)?;
            continue;
        }

        if let Some(parent) = dest.parent() {
            create_dir_tree(parent)?;
        }

        let mode = entry.header().mode()?;
        let mut out = open_destination(&dest, mode).map_err(|e| VendError::Archive {
            context: format!("creating extracted file {}", dest.display()),
            source: e,
        })?;

        io::copy(&mut entry, &mut out).map_err(|e| VendError::Archive {
            context: format!("writing extracted file {}", dest.display()),
            source: e,
        })?;
        // out drops here; handles never accumulate across entries
    }

    Ok(())
}

fn create_dir_tree(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(path).map_err(|e| VendError::Archive {
        context: format!("creating directory {}", path.display()),
        source: e,
    })
}

fn open_destination(path: &Path, _mode: u32) -> io::Result<File> {
    let mut opts = OpenOptions::new();
    opts.create(true).truncate(true).write(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(_mode);
    }
    opts.open(path)
}
