use std::io::{self, BufRead};

/// Calls `f` with each line of `reader`, without the trailing `\n` or `\r\n`.
/// Malformed UTF-8 is replaced with U+FFFD instead of failing the read.
pub fn for_each_lossy_line<R: BufRead, F: FnMut(&str)>(mut reader: R, mut f: F) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        f(&String::from_utf8_lossy(&buf));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect_lines(bytes: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();
        for_each_lossy_line(Cursor::new(bytes), |line| lines.push(line.to_string())).unwrap();
        lines
    }

    #[test]
    fn test_strips_line_endings() {
        assert_eq!(collect_lines(b"one\r\ntwo\n\nthree"), vec!["one", "two", "", "three"]);
    }

    #[test]
    fn test_malformed_bytes_are_replaced() {
        assert_eq!(collect_lines(b"caf\xe9 ok\n"), vec!["caf\u{fffd} ok"]);
    }

    #[test]
    fn test_empty_input_has_no_lines() {
        assert!(collect_lines(b"").is_empty());
    }
}
