//! Plain line numbers to annotated line numbers

use crate::marker::Marker;

/// Element `i` is the 0-based index in `lines` of plain line `i`.
///
/// An escaped line maps to itself, not to its verbatim escape.
pub fn plain_to_annotated<S: AsRef<str>>(lines: &[S], marker: &Marker) -> Vec<usize> {
    let mut mapping = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].as_ref();
        if marker.is_verbatim_sentinel(line) {
            if i + 1 < lines.len() {
                mapping.push(i + 1);
            }
            i += 2;
        } else {
            if !marker.is_sentinel(line, "") {
                mapping.push(i);
            }
            i += 1;
        }
    }

    mapping
}

/// Annotated index for the 0-based `plain_line`, if it exists.
pub fn annotated_line_for<S: AsRef<str>>(
    lines: &[S],
    marker: &Marker,
    plain_line: usize,
) -> Option<usize> {
    plain_to_annotated(lines, marker).get(plain_line).copied()
}
