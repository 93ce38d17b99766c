use super::{Codec, Compression, FinishWrite};
use crate::error::Result;
use std::fs::File;
use std::io::Read;
use zstd::stream::read::Decoder;
use zstd::stream::write::Encoder;

pub struct ZstdCodec;

impl FinishWrite for Encoder<'static, File> {
    fn finish(self: Box<Self>) -> Result<()> {
        (*self).finish()?;
        Ok(())
    }
}

impl Codec for ZstdCodec {
    fn id(&self) -> Compression {
        Compression::Zstd
    }

    fn encoder(&self, file: File) -> Result<Box<dyn FinishWrite>> {
        Ok(Box::new(Encoder::new(file, zstd::DEFAULT_COMPRESSION_LEVEL)?))
    }

    fn decoder(&self, file: File) -> Result<Box<dyn Read>> {
        Ok(Box::new(Decoder::new(file)?))
    }
}
