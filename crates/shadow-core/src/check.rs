//! Consistency check of a replayed annotated file

use std::fmt;

use similar::TextDiff;

use crate::classify::classify;
use crate::marker::Marker;

/// All plain lines and all sentinel lines of an annotated file, flattened.
///
/// Verbatim escapes count as neither; the line they escape is plain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Separated {
    pub regular: Vec<String>,
    pub sentinels: Vec<String>,
}

pub fn separate<S: AsRef<str>>(lines: &[S], marker: &Marker) -> Separated {
    let classified = classify(lines, marker);
    let mut sentinels: Vec<String> = classified.sentinels.into_iter().flatten().collect();
    sentinels.extend(classified.trailing);
    Separated {
        regular: classified.content,
        sentinels,
    }
}

/// Outcome of [`verify`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Unified diff of expected vs. derived plain lines, if they differ.
    pub plain_diff: Option<String>,
    /// Unified diff of old vs. new sentinel lines, if they differ.
    pub sentinel_diff: Option<String>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.plain_diff.is_none() && self.sentinel_diff.is_none()
    }

    /// Both diffs, for diagnostics.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        if let Some(diff) = &self.plain_diff {
            out.push_str("Error in updating plain file!\n");
            out.push_str(diff);
        }
        if let Some(diff) = &self.sentinel_diff {
            out.push_str("Sentinels not preserved!\n");
            out.push_str(diff);
        }
        out
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.plain_diff, &self.sentinel_diff) {
            (None, None) => write!(f, "ok"),
            (Some(_), None) => write!(f, "plain lines differ"),
            (None, Some(_)) => write!(f, "sentinels not preserved"),
            (Some(_), Some(_)) => write!(f, "plain lines differ and sentinels not preserved"),
        }
    }
}

/// Check that `new_annotated` strips to `new_plain` and keeps every
/// sentinel of `old_annotated` in order.
pub fn verify<S: AsRef<str>>(
    old_annotated: &[S],
    new_annotated: &[String],
    new_plain: &[String],
    marker: &Marker,
) -> CheckReport {
    let old = separate(old_annotated, marker);
    let new = separate(new_annotated, marker);

    let plain_diff = (!plain_matches(&new.regular, new_plain)).then(|| {
        side_by_side(
            &new.regular,
            new_plain,
            "plain lines derived from result",
            "plain lines",
        )
    });

    let sentinel_diff = (new.sentinels != old.sentinels).then(|| {
        side_by_side(&old.sentinels, &new.sentinels, "old sentinels", "new sentinels")
    });

    let report = CheckReport {
        plain_diff,
        sentinel_diff,
    };
    if !report.is_ok() {
        tracing::warn!("self-check failed: {report}\n{}", report.dump());
    }
    report
}

/// Equal, or equal once the expected last line gets its missing newline.
fn plain_matches(derived: &[String], expected: &[String]) -> bool {
    if derived == expected {
        return true;
    }
    match (derived.split_last(), expected.split_last()) {
        (Some((d_last, d_rest)), Some((e_last, e_rest))) => {
            d_rest == e_rest && !e_last.ends_with('\n') && *d_last == format!("{e_last}\n")
        }
        _ => false,
    }
}

fn side_by_side(left: &[String], right: &[String], left_name: &str, right_name: &str) -> String {
    let left = left.concat();
    let right = right.concat();
    TextDiff::from_lines(&left, &right)
        .unified_diff()
        .context_radius(3)
        .header(left_name, right_name)
        .to_string()
}
