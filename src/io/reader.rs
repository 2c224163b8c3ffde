//! Record reader.
//!
//! Records end with `\n`, `\r\n` or a bare `\r`, the same way text-mode reads handle line breaks.
use std::io::{BufRead, ErrorKind};

/// Read the next record into `buf`, terminator included.
///
/// Returns the number of bytes read, `0` meaning end of input.
pub fn read_record<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> std::io::Result<usize> {
    let start = buf.len();

    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            break;
        }

        match available.iter().position(|b| *b == b'\n' || *b == b'\r') {
            Some(idx) => {
                let terminator = available[idx];
                buf.extend_from_slice(&available[..=idx]);
                reader.consume(idx + 1);

                // \r\n is a single terminator, possibly split across two buffers.
                if terminator == b'\r' && peek(reader)? == Some(b'\n') {
                    buf.push(b'\n');
                    reader.consume(1);
                }
                break;
            }
            None => {
                let len = available.len();
                buf.extend_from_slice(available);
                reader.consume(len);
            }
        }
    }

    Ok(buf.len() - start)
}

fn peek<R: BufRead>(reader: &mut R) -> std::io::Result<Option<u8>> {
    loop {
        match reader.fill_buf() {
            Ok(available) => return Ok(available.first().copied()),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Remove a trailing `\r\n`, `\n` or `\r`.
pub fn strip_terminator(record: &str) -> &str {
    record
        .strip_suffix("\r\n")
        .or_else(|| record.strip_suffix('\n'))
        .or_else(|| record.strip_suffix('\r'))
        .unwrap_or(record)
}

#[cfg(test)]
mod tests {
    use std::io::BufReader;

    use super::*;

    fn records<R: BufRead>(mut reader: R) -> Vec<String> {
        let mut out = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if read_record(&mut reader, &mut buf).unwrap() == 0 {
                break;
            }
            out.push(String::from_utf8(buf.clone()).unwrap());
        }
        out
    }

    #[test]
    fn all_terminators() {
        let input = "unix\nwindows\r\nmac\rlast";
        assert_eq!(
            records(input.as_bytes()),
            vec!["unix\n", "windows\r\n", "mac\r", "last"]
        );
    }

    #[test]
    fn empty_records() {
        assert_eq!(records("\r\r\n\n".as_bytes()), vec!["\r", "\r\n", "\n"]);
        assert!(records("".as_bytes()).is_empty());
    }

    #[test]
    fn crlf_across_buffers() {
        // a capacity of 1 forces every byte into its own buffer
        let input = "ab\r\ncd\r\rx";
        let reader = BufReader::with_capacity(1, input.as_bytes());
        assert_eq!(records(reader), vec!["ab\r\n", "cd\r", "\r", "x"]);
    }

    #[test]
    fn strip() {
        assert_eq!(strip_terminator("a\r\n"), "a");
        assert_eq!(strip_terminator("a\n"), "a");
        assert_eq!(strip_terminator("a\r"), "a");
        assert_eq!(strip_terminator("a"), "a");
        assert_eq!(strip_terminator("\n\r"), "\n");
    }
}
