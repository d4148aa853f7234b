//! Line alignment between old and new plain content

use std::fmt;
use std::ops::Range;

use similar::{Algorithm, DiffTag, capture_diff_slices};

use crate::error::{Error, Result};

/// Kind of one alignment operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpTag {
    Equal,
    Replace,
    Delete,
    Insert,
}

impl From<DiffTag> for OpTag {
    fn from(tag: DiffTag) -> Self {
        match tag {
            DiffTag::Equal => Self::Equal,
            DiffTag::Replace => Self::Replace,
            DiffTag::Delete => Self::Delete,
            DiffTag::Insert => Self::Insert,
        }
    }
}

/// One alignment operation over ranges of the old and new sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Opcode {
    pub tag: OpTag,
    pub old: Range<usize>,
    pub new: Range<usize>,
}

impl Opcode {
    pub fn new(tag: OpTag, old: Range<usize>, new: Range<usize>) -> Self {
        Self { tag, old, new }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} old[{}:{}] new[{}:{}]",
            self.tag, self.old.start, self.old.end, self.new.start, self.new.end
        )
    }
}

/// Compute the opcodes turning `a` into `b` (Myers diff).
///
/// The ranges cover both sequences completely, in order, without overlap.
pub fn align(a: &[String], b: &[String]) -> Vec<Opcode> {
    capture_diff_slices(Algorithm::Myers, a, b)
        .iter()
        .map(|op| {
            let (tag, old, new) = op.as_tag_tuple();
            Opcode::new(tag.into(), old, new)
        })
        .collect()
}

/// Check that `ops` tile `0..old_len` and `0..new_len` with no gaps.
pub fn validate(ops: &[Opcode], old_len: usize, new_len: usize) -> Result<()> {
    let mut old_pos = 0;
    let mut new_pos = 0;

    for op in ops {
        if op.old.start != old_pos {
            return Err(Error::AlignmentGap {
                side: "old",
                expected: old_pos,
                actual: op.old.start,
            });
        }
        if op.new.start != new_pos {
            return Err(Error::AlignmentGap {
                side: "new",
                expected: new_pos,
                actual: op.new.start,
            });
        }
        old_pos = op.old.end;
        new_pos = op.new.end;
    }

    if old_pos != old_len {
        return Err(Error::AlignmentGap {
            side: "old",
            expected: old_len,
            actual: old_pos,
        });
    }
    if new_pos != new_len {
        return Err(Error::AlignmentGap {
            side: "new",
            expected: new_len,
            actual: new_pos,
        });
    }
    Ok(())
}
