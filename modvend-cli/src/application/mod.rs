pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use modvend_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Vendor {
            src_archive,
            subdir,
            compression,
            archive_name,
            output_dir,
        } => handlers::handle_vendor(src_archive, subdir, compression, archive_name, output_dir),
        Commands::Pack {
            input,
            outdir,
            name,
            compression,
        } => handlers::handle_pack(input, outdir, name, compression),
        Commands::Unpack {
            archive,
            dest,
            compression,
        } => handlers::handle_unpack(archive, dest, compression),
    }
}
