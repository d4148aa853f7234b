//! Reconciling an annotated file with its edited plain twin

use std::path::Path;

use shadow_fs::{io, join_lines};

use crate::align::{self, Opcode};
use crate::check::{self, CheckReport};
use crate::classify::classify;
use crate::config::ShadowConfig;
use crate::error::{Error, Result};
use crate::marker::Marker;
use crate::replay::replay_ops;

/// Whether a call rewrote (or, in dry-run mode, would rewrite) a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Changed {
    Yes,
    No,
}

impl Changed {
    pub fn is_changed(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Changed {
    fn from(changed: bool) -> Self {
        if changed { Self::Yes } else { Self::No }
    }
}

/// Result of the in-memory pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The new annotated lines.
    pub lines: Vec<String>,
    pub ops: Vec<Opcode>,
    /// 0-based indices of dangling verbatim escapes in the old annotated lines.
    pub malformed_verbatim: Vec<usize>,
}

/// Classify, align, and replay without touching the filesystem.
pub fn reconcile_lines<S: AsRef<str>>(
    annotated: &[S],
    plain: &[String],
    marker: &Marker,
) -> Result<Outcome> {
    let classified = classify(annotated, marker);
    tracing::debug!(
        content = classified.content.len(),
        trailing = classified.trailing.len(),
        "classified annotated lines"
    );

    let ops = align::align(&classified.content, plain);
    align::validate(&ops, classified.content.len(), plain.len())?;
    tracing::debug!(ops = ops.len(), "aligned plain lines");

    let lines = replay_ops(
        &classified.content,
        plain,
        &ops,
        &classified.sentinels,
        &classified.trailing,
        marker,
    );

    Ok(Outcome {
        lines,
        ops,
        malformed_verbatim: classified.malformed_verbatim,
    })
}

/// Summary of one [`Reconciler::reconcile`] or [`Reconciler::sync`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub changed: Changed,
    /// Number of dangling verbatim escapes found in the annotated file.
    pub malformed_verbatim: usize,
    /// Present when the self-check ran.
    pub check: Option<CheckReport>,
    /// The plain file was too small to propagate; nothing was read or written.
    pub skipped: bool,
}

impl Report {
    fn skipped() -> Self {
        Self {
            changed: Changed::No,
            malformed_verbatim: 0,
            check: None,
            skipped: true,
        }
    }
}

/// Reconciles file pairs according to a [`ShadowConfig`].
///
/// Holds no per-pair state, so one instance may serve many pairs.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    config: ShadowConfig,
    language: Option<String>,
    dry_run: bool,
}

impl Reconciler {
    pub fn new(config: ShadowConfig) -> Self {
        Self {
            config,
            language: None,
            dry_run: false,
        }
    }

    /// Compute everything but never write.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Language to use when the annotated file has no `@+leo` header.
    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    pub fn config(&self) -> &ShadowConfig {
        &self.config
    }

    /// The annotated file's own convention, else one derived from `path`.
    pub fn marker_for<S: AsRef<str>>(&self, annotated: &[S], path: &Path) -> Marker {
        if let Some(marker) = Marker::scan(annotated) {
            return marker;
        }
        let marker = match &self.language {
            Some(language) => self.config.marker_for_language(language),
            None => self.config.marker_for_path(path),
        };
        tracing::debug!(%marker, path = %path.display(), "no leo header, using language marker");
        marker
    }

    /// Carry edits of `plain` back into `annotated`.
    ///
    /// `annotated` is written only when its content changes, and only after
    /// the whole result has been computed.
    pub fn reconcile(&self, annotated: &Path, plain: &Path) -> Result<Report> {
        let annotated_lines = io::read_lines(annotated).map_err(Error::Read)?;
        let plain_lines = io::read_lines(plain).map_err(Error::Read)?;
        let marker = self.marker_for(&annotated_lines, plain);

        let outcome = reconcile_lines(&annotated_lines, &plain_lines, &marker)?;

        if !outcome.malformed_verbatim.is_empty() {
            let lines: Vec<usize> = outcome.malformed_verbatim.iter().map(|i| i + 1).collect();
            tracing::warn!(path = %annotated.display(), ?lines, "nothing follows verbatim sentinel");
            if self.config.abort_on_malformed {
                return Err(Error::MalformedVerbatim { lines });
            }
        }

        let check = self
            .config
            .self_check
            .then(|| check::verify(&annotated_lines, &outcome.lines, &plain_lines, &marker));
        if let Some(report) = check.as_ref().filter(|r| !r.is_ok()) {
            if self.config.strict_check {
                return Err(Error::SelfCheck {
                    report: Box::new(report.clone()),
                });
            }
        }

        let changed = Changed::from(outcome.lines != annotated_lines);
        if changed.is_changed() && !self.dry_run {
            io::write_text(annotated, &join_lines(&outcome.lines)).map_err(Error::Write)?;
            tracing::info!(path = %annotated.display(), "updated annotated file from {}", plain.display());
        }

        Ok(Report {
            changed,
            malformed_verbatim: outcome.malformed_verbatim.len(),
            check,
            skipped: false,
        })
    }

    /// Reconcile only if `plain` is significant (a regular file larger than
    /// `min_plain_size` bytes); otherwise leave both files untouched.
    pub fn sync(&self, annotated: &Path, plain: &Path) -> Result<Report> {
        if !io::is_significant(plain, self.config.min_plain_size) {
            tracing::debug!(path = %plain.display(), "plain file not significant, skipping");
            return Ok(Report::skipped());
        }
        self.reconcile(annotated, plain)
    }

    /// Regenerate `plain` from `annotated` by removing every sentinel.
    pub fn strip(&self, annotated: &Path, plain: &Path) -> Result<Changed> {
        let annotated_lines = io::read_lines(annotated).map_err(Error::Read)?;
        let marker = self.marker_for(&annotated_lines, plain);
        let separated = check::separate(&annotated_lines, &marker);

        let text = join_lines(&separated.regular);
        let changed = if self.dry_run {
            io::read_text(plain).map_or(true, |existing| existing != text)
        } else {
            io::replace_if_changed(plain, &text).map_err(Error::Write)?
        };

        if changed && !self.dry_run {
            tracing::info!(path = %plain.display(), "wrote plain file from {}", annotated.display());
        }
        Ok(changed.into())
    }
}

/// Reconcile with the default configuration.
pub fn reconcile(annotated: &Path, plain: &Path) -> Result<Changed> {
    Reconciler::default()
        .reconcile(annotated, plain)
        .map(|report| report.changed)
}

/// Strip with the default configuration.
pub fn strip(annotated: &Path, plain: &Path) -> Result<Changed> {
    Reconciler::default().strip(annotated, plain)
}
