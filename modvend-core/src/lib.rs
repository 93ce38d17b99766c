#![forbid(unsafe_code)]

pub mod error;

pub mod util {
    pub mod fsutil;
    pub mod sanitize;
}

pub mod codec;

pub mod pack {
    pub mod writer;
}

pub mod read {
    pub mod extract;
}

pub mod install;

// Re-exports: stable API surface
pub use codec::Compression;
pub use error::{DirRole, Result, VendError};
pub use install::{Installer, NpmInstaller};
pub use pack::writer::compress_folder;
pub use read::extract::decompress_archive;
