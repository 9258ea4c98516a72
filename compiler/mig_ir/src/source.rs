//! Byte-exact reconstruction of source text from tree nodes.

/// Writes a node back out as the exact bytes it was parsed from.
///
/// Every field of every node is written in source order, markers included,
/// so for any successfully parsed file `file.to_source()` equals the bytes
/// the parser consumed.
pub trait ToSource {
    /// Append this node's source bytes to `out`.
    fn write_source(&self, out: &mut Vec<u8>);

    /// Source bytes of this node as a fresh buffer.
    fn to_source(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_source(&mut out);
        out
    }
}

impl<T: ToSource> ToSource for Option<T> {
    fn write_source(&self, out: &mut Vec<u8>) {
        if let Some(inner) = self {
            inner.write_source(out);
        }
    }
}

impl<T: ToSource> ToSource for [T] {
    fn write_source(&self, out: &mut Vec<u8>) {
        for item in self {
            item.write_source(out);
        }
    }
}
