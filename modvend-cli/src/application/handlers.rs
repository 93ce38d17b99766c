use modvend_core::error::Result;
use modvend_core::{Compression, Installer, NpmInstaller, compress_folder, decompress_archive};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Full pipeline: unpack the source archive into a staging directory, run
/// the dependency install there, then pack the produced `node_modules` with
/// the same compression method as the source archive.
pub fn handle_vendor(
    src_archive: PathBuf,
    subdir: Option<String>,
    compression: Compression,
    archive_name: String,
    output_dir: PathBuf,
) -> Result<()> {
    let vendor_archive = archive_file_name(&archive_name, compression);

    info!(
        srcarchive = %src_archive.display(),
        outdir = %output_dir.display(),
        archive = %vendor_archive,
        "starting vendor run"
    );

    let unpack_dest = std::env::current_dir()?.join("source_dest");
    fs::create_dir_all(&unpack_dest)?;

    info!(name = %src_archive.display(), "unpacking source archive");
    decompress_archive(&src_archive, &unpack_dest, compression)?;

    let work_dir = match &subdir {
        Some(sub) => unpack_dest.join(sub),
        None => unpack_dest,
    };

    info!(subdir = subdir.as_deref().unwrap_or(""), "installing dependencies");
    NpmInstaller.install(&work_dir)?;
    info!("dependencies installed");

    compress_folder(
        &work_dir.join("node_modules"),
        &output_dir,
        &vendor_archive,
        compression,
    )?;
    info!(archive = %output_dir.join(&vendor_archive).display(), "vendor archive created");

    Ok(())
}

pub fn handle_pack(
    input: PathBuf,
    outdir: PathBuf,
    name: Option<String>,
    compression: Compression,
) -> Result<()> {
    let name = name.unwrap_or_else(|| {
        let base = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "archive".to_string());
        archive_file_name(&base, compression)
    });

    compress_folder(&input, &outdir, &name, compression)?;
    info!(archive = %outdir.join(&name).display(), "archive created");
    Ok(())
}

pub fn handle_unpack(archive: PathBuf, dest: PathBuf, compression: Compression) -> Result<()> {
    decompress_archive(&archive, &dest, compression)?;
    info!(archive = %archive.display(), dest = %dest.display(), "archive extracted");
    Ok(())
}

fn archive_file_name(base: &str, compression: Compression) -> String {
    format!("{}.tar.{}", base, compression.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_file_name_carries_method_extension() {
        assert_eq!(
            archive_file_name("node_vendor", Compression::Gzip),
            "node_vendor.tar.gz"
        );
        assert_eq!(
            archive_file_name("node_vendor", Compression::Zstd),
            "node_vendor.tar.zst"
        );
    }

    #[test]
    fn pack_then_unpack_roundtrips_directory() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        fs::write(src.path().join("pkg.json"), b"{}").unwrap();

        handle_pack(
            src.path().to_path_buf(),
            out.path().to_path_buf(),
            Some("bundle.tar.zst".to_string()),
            Compression::Zstd,
        )
        .unwrap();

        handle_unpack(
            out.path().join("bundle.tar.zst"),
            dest.path().to_path_buf(),
            Compression::Zstd,
        )
        .unwrap();

        assert_eq!(fs::read(dest.path().join("pkg.json")).unwrap(), b"{}");
    }

    #[test]
    fn pack_derives_name_from_input_basename() {
        let work = tempfile::tempdir().unwrap();
        let src = work.path().join("node_modules");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("a.js"), b"x").unwrap();
        let out = tempfile::tempdir().unwrap();

        handle_pack(src, out.path().to_path_buf(), None, Compression::Gzip).unwrap();

        assert!(out.path().join("node_modules.tar.gz").exists());
    }
}
