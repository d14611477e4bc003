// Line reader for benchmark text that tolerates stray non-UTF-8 bytes.
// Bad bytes become U+FFFD; only real read failures are errors.

use std::io::BufRead;

use crate::error::Result;

/// Calls `f` on every line of `reader`, without the `\n` / `\r\n` terminator.
pub fn for_each_line<R, F>(reader: R, mut f: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(&str),
{
    for chunk in reader.split(b'\n') {
        let mut bytes = chunk?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        f(&String::from_utf8_lossy(&bytes));
    }
    Ok(())
}
