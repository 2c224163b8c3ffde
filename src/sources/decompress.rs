//! Decompression of fetched content.
//!
//! CommonCrawl files are gzipped by member and need a multi gz decoder (such as [MultiGzDecoder]).
use std::io::Read;

use flate2::read::MultiGzDecoder;
use log::debug;

use crate::error::Error;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decompress gzipped content. Content without the gzip magic bytes is returned as is.
pub fn decompress(bytes: Vec<u8>) -> Result<Vec<u8>, Error> {
    if !bytes.starts_with(&GZIP_MAGIC) {
        debug!("content is not gzipped, keeping it as is");
        return Ok(bytes);
    }

    let mut gzd = MultiGzDecoder::new(bytes.as_slice());
    let mut out = Vec::new();
    gzd.read_to_end(&mut out)?;

    debug!("decompressed {} bytes into {}", bytes.len(), out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    use super::*;

    fn gzip(content: &[u8]) -> Vec<u8> {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(content).unwrap();
        enc.finish().unwrap()
    }

    #[test]
    fn plain_content() {
        let content = b"WARC/1.0\nhello world\n".to_vec();
        assert_eq!(decompress(content.clone()).unwrap(), content);
    }

    #[test]
    fn multi_member() {
        let mut content = gzip(b"first record\n");
        content.extend(gzip(b"second record\n"));

        assert_eq!(
            decompress(content).unwrap(),
            b"first record\nsecond record\n".to_vec()
        );
    }
}
