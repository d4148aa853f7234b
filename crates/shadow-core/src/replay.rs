//! Rebuilding annotated lines from opcodes
//!
//! Old sentinel groups are recalled by old content index and interleaved
//! with the new content. Each group is emitted exactly once and groups keep
//! their relative order; only their position relative to content changes.

use std::collections::VecDeque;

use crate::align::{OpTag, Opcode, align};
use crate::marker::Marker;

/// Per-call replay state.
struct Replay<'a> {
    marker: &'a Marker,
    verbatim_line: String,
    /// Groups not yet written; taken on first emission.
    sentinels: Vec<Vec<String>>,
    results: Vec<String>,
}

impl<'a> Replay<'a> {
    fn new(marker: &'a Marker, sentinels: &[Vec<String>], capacity: usize) -> Self {
        Self {
            marker,
            verbatim_line: marker.verbatim_line(),
            sentinels: sentinels.to_vec(),
            results: Vec::with_capacity(capacity),
        }
    }

    fn put_sentinels(&mut self, i: usize) {
        if let Some(group) = self.sentinels.get_mut(i) {
            self.results.append(group);
        }
    }

    fn put_plain_line(&mut self, line: &str) {
        if self.marker.is_sentinel(line, "") {
            self.results.push(self.verbatim_line.clone());
        }
        self.results.push(line.to_string());
    }

    fn apply(&mut self, op: &Opcode, a: &[String], b: &[String]) {
        match op.tag {
            OpTag::Equal => {
                for i in op.old.clone() {
                    self.put_sentinels(i);
                    self.put_plain_line(&a[i]);
                }
            }
            OpTag::Delete => {
                for i in op.old.clone() {
                    self.put_sentinels(i);
                }
            }
            OpTag::Insert => {
                for line in &b[op.new.clone()] {
                    self.put_plain_line(line);
                }
            }
            OpTag::Replace => {
                let mut queue: VecDeque<&String> = b[op.new.clone()].iter().collect();
                for i in op.old.clone() {
                    self.put_sentinels(i);
                    if let Some(line) = queue.pop_front() {
                        self.put_plain_line(line);
                    }
                }
                for line in queue {
                    self.put_plain_line(line);
                }
            }
        }
    }
}

/// Interleave the old sentinel groups with the new content `b`.
pub fn replay(
    a: &[String],
    b: &[String],
    sentinels: &[Vec<String>],
    trailing: &[String],
    marker: &Marker,
) -> Vec<String> {
    let ops = align(a, b);
    replay_ops(a, b, &ops, sentinels, trailing, marker)
}

/// Like [`replay`], with opcodes already computed by [`align`].
pub fn replay_ops(
    a: &[String],
    b: &[String],
    ops: &[Opcode],
    sentinels: &[Vec<String>],
    trailing: &[String],
    marker: &Marker,
) -> Vec<String> {
    let group_lines: usize = sentinels.iter().map(Vec::len).sum();
    let mut state = Replay::new(marker, sentinels, b.len() + group_lines + trailing.len());

    // Leading sentinels go ahead of anything inserted at position 0
    state.put_sentinels(0);

    for op in ops {
        tracing::trace!(%op, "replay");
        state.apply(op, a, b);
    }

    state.results.extend_from_slice(trailing);
    state.results
}
