use std::fmt::Write;

use md5::{Digest, Md5};

use super::Delimiters;

/// MD5 inline type: `[[X]]` renders as the lowercase hex MD5 digest of X's
/// UTF-8 bytes.
pub struct Md5Hash;

impl Md5Hash {
    pub const DELIMITERS: Delimiters = Delimiters {
        open: b"[[",
        close: b"]]",
        forbidden: b"[]",
    };

    pub fn render(inner: &str) -> String {
        let digest = Md5::digest(inner.as_bytes());
        digest.iter().fold(String::with_capacity(32), |mut hex, byte| {
            let _ = write!(hex, "{byte:02x}");
            hex
        })
    }
}
