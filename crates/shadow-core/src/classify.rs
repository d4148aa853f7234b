//! Splitting annotated lines into content and sentinel groups

use crate::marker::Marker;

/// Annotated lines split into content and the sentinels around it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    /// Plain content lines, in order.
    pub content: Vec<String>,
    /// `sentinels[i]` is the group immediately preceding `content[i]`.
    pub sentinels: Vec<Vec<String>>,
    /// Sentinels after the last content line.
    pub trailing: Vec<String>,
    /// 0-based indices of verbatim escapes with no line after them.
    pub malformed_verbatim: Vec<usize>,
}

impl Classified {
    pub fn is_well_formed(&self) -> bool {
        self.malformed_verbatim.is_empty()
    }
}

/// Classify every line of an annotated file.
///
/// Verbatim escapes are consumed: the line after one is always content.
pub fn classify<S: AsRef<str>>(lines: &[S], marker: &Marker) -> Classified {
    let mut out = Classified::default();
    let mut pending: Vec<String> = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].as_ref();

        if marker.is_verbatim_sentinel(line) {
            match lines.get(i + 1) {
                Some(next) => {
                    out.sentinels.push(std::mem::take(&mut pending));
                    out.content.push(next.as_ref().to_string());
                    i += 2;
                }
                None => {
                    tracing::warn!(line = i + 1, "nothing follows verbatim sentinel");
                    out.malformed_verbatim.push(i);
                    i += 1;
                }
            }
            continue;
        }

        if marker.is_sentinel(line, "") {
            pending.push(line.to_string());
        } else {
            out.sentinels.push(std::mem::take(&mut pending));
            out.content.push(line.to_string());
        }
        i += 1;
    }

    out.trailing = pending;
    out
}
