use clap::{Parser, Subcommand};
use modvend_core::Compression;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Vendor a project's dependency tree into a compressed archive", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Unpack a source archive, install dependencies, re-pack node_modules
    Vendor {
        /// The source archive to unpack
        #[arg(long = "srcarchive")]
        src_archive: PathBuf,

        /// Subdirectory relative to the source code root
        #[arg(long)]
        subdir: Option<String>,

        /// Compression method of the source archive (gz or zst); the vendor
        /// archive is compressed with the same method
        #[arg(long, default_value = "gz")]
        compression: Compression,

        /// Base name of the vendor archive
        #[arg(long = "vendor-archive-name", default_value = "node_vendor")]
        archive_name: String,

        /// Archive output directory
        #[arg(long = "outdir")]
        output_dir: PathBuf,
    },

    /// Pack a directory into a compressed tar archive
    Pack {
        /// Directory whose contents get archived
        input: PathBuf,

        /// Directory the archive is written into
        outdir: PathBuf,

        /// Archive file name; defaults to `<input-basename>.tar.<ext>`
        #[arg(long)]
        name: Option<String>,

        #[arg(long, default_value = "gz")]
        compression: Compression,
    },

    /// Extract a compressed tar archive into a directory
    Unpack {
        archive: PathBuf,

        /// Existing directory to extract into
        dest: PathBuf,

        #[arg(long, default_value = "gz")]
        compression: Compression,
    },
}
