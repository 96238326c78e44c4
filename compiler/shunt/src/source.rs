//! Line-oriented expression input.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read one expression per line, in file order.
///
/// Line terminators (`\n` or `\r\n`) are stripped; blank lines are kept so
/// that line indices stay aligned with the file.
pub fn read_expressions(path: &Path) -> io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    reader.lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_lines_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1+2\r\n\n-log(2, 4)\n2*2^2^3").unwrap();
        let lines = read_expressions(file.path()).unwrap();
        assert_eq!(lines, vec!["1+2", "", "-log(2, 4)", "2*2^2^3"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_expressions(&dir.path().join("absent.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
