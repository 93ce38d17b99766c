use crate::error::{Result, VendError};
use std::fs::File;
use std::io::{Read, Write};
use std::str::FromStr;

pub mod gzip;
pub mod zstdc;

/// Compression methods the archive pipeline understands.
///
/// Invalid methods are unrepresentable here; the rejection point is
/// [`Compression::from_str`] at the configuration boundary, which fails
/// before any filesystem access.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Compression {
    Gzip,
    Zstd,
}

impl Compression {
    /// Extension conventionally appended to `.tar` archives of this method.
    pub fn extension(self) -> &'static str {
        match self {
            Compression::Gzip => "gz",
            Compression::Zstd => "zst",
        }
    }

    /// The single branch point between the two codec paths.
    pub(crate) fn codec(self) -> &'static dyn Codec {
        match self {
            Compression::Gzip => &gzip::GzipCodec,
            Compression::Zstd => &zstdc::ZstdCodec,
        }
    }
}

impl FromStr for Compression {
    type Err = VendError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "gz" | "gzip" => Ok(Compression::Gzip),
            "zst" | "zstd" => Ok(Compression::Zstd),
            other => Err(VendError::UnsupportedCompression(other.to_string())),
        }
    }
}

/// Write half of a codec. `finish` flushes the compression trailer; an
/// archive is not valid until it has been called.
pub trait FinishWrite: Write {
    fn finish(self: Box<Self>) -> Result<()>;
}

pub trait Codec: Send + Sync {
    fn id(&self) -> Compression;
    fn encoder(&self, file: File) -> Result<Box<dyn FinishWrite>>;
    fn decoder(&self, file: File) -> Result<Box<dyn Read>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_methods() {
        assert_eq!("gz".parse::<Compression>().unwrap(), Compression::Gzip);
        assert_eq!("gzip".parse::<Compression>().unwrap(), Compression::Gzip);
        assert_eq!("zst".parse::<Compression>().unwrap(), Compression::Zstd);
        assert_eq!("zstd".parse::<Compression>().unwrap(), Compression::Zstd);
    }

    #[test]
    fn rejects_unknown_method_by_name() {
        let err = "lz4".parse::<Compression>().unwrap_err();
        match &err {
            VendError::UnsupportedCompression(v) => assert_eq!(v, "lz4"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("lz4"));
    }

    #[test]
    fn extensions_match_archive_suffix() {
        assert_eq!(Compression::Gzip.extension(), "gz");
        assert_eq!(Compression::Zstd.extension(), "zst");
    }

    #[test]
    fn codec_lookup_is_consistent() {
        assert_eq!(Compression::Gzip.codec().id(), Compression::Gzip);
        assert_eq!(Compression::Zstd.codec().id(), Compression::Zstd);
    }
}
