use bstr::ByteSlice;

/// Map a byte offset into `input` to a 1-based `(line, column)` pair.
///
/// Columns count chars; each invalid UTF-8 sequence counts as one.
pub(crate) fn locate(input: &[u8], offset: usize) -> (usize, usize) {
    let prefix = &input[..offset.min(input.len())];
    let line_start = prefix.rfind_byte(b'\n').map_or(0, |i| i + 1);
    let line = 1 + prefix.iter().filter(|&&b| b == b'\n').count();
    let column = 1 + prefix[line_start..].chars().count();
    (line, column)
}
