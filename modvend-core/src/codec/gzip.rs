use super::{Codec, Compression, FinishWrite};
use crate::error::Result;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io::{BufReader, Read};

pub struct GzipCodec;

impl FinishWrite for GzEncoder<File> {
    fn finish(self: Box<Self>) -> Result<()> {
        (*self).finish()?;
        Ok(())
    }
}

impl Codec for GzipCodec {
    fn id(&self) -> Compression {
        Compression::Gzip
    }

    fn encoder(&self, file: File) -> Result<Box<dyn FinishWrite>> {
        Ok(Box::new(GzEncoder::new(file, flate2::Compression::default())))
    }

    fn decoder(&self, file: File) -> Result<Box<dyn Read>> {
        Ok(Box::new(GzDecoder::new(BufReader::new(file))))
    }
}
