use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use shadow_core::{Changed, Error, Reconciler, ShadowConfig, reconcile, strip};
use tempfile::TempDir;

const ANNOTATED: &str = "\
#@+leo-ver=5-thin
#@+node:ekr.1: * @shadow x.py
#@@language python
def spam():
    #@+others
    #@+node:ekr.2: ** eggs
    pass
    #@-others
#@-leo
";

struct Pair {
    _dir: TempDir,
    annotated: PathBuf,
    plain: PathBuf,
}

fn pair(annotated: &str, plain: &str) -> Pair {
    let dir = TempDir::new().unwrap();
    let annotated_path = dir.path().join("LeoFolder").join("x.py");
    let plain_path = dir.path().join("x.py");
    fs::create_dir_all(annotated_path.parent().unwrap()).unwrap();
    fs::write(&annotated_path, annotated).unwrap();
    fs::write(&plain_path, plain).unwrap();
    Pair {
        _dir: dir,
        annotated: annotated_path,
        plain: plain_path,
    }
}

#[test]
fn test_unchanged_plain_is_no_change() {
    let p = pair(ANNOTATED, "def spam():\n    pass\n");
    assert_eq!(reconcile(&p.annotated, &p.plain).unwrap(), Changed::No);
    assert_eq!(fs::read_to_string(&p.annotated).unwrap(), ANNOTATED);
}

#[test]
fn test_edit_is_propagated_and_second_call_is_noop() {
    let p = pair(ANNOTATED, "def spam():\n    return 42\n");

    assert_eq!(reconcile(&p.annotated, &p.plain).unwrap(), Changed::Yes);
    let updated = fs::read_to_string(&p.annotated).unwrap();
    assert_eq!(
        updated,
        "\
#@+leo-ver=5-thin
#@+node:ekr.1: * @shadow x.py
#@@language python
def spam():
    #@+others
    #@+node:ekr.2: ** eggs
    return 42
    #@-others
#@-leo
"
    );

    assert_eq!(reconcile(&p.annotated, &p.plain).unwrap(), Changed::No);
    assert_eq!(fs::read_to_string(&p.annotated).unwrap(), updated);
}

#[test]
fn test_plain_without_final_newline_matches() {
    let p = pair(ANNOTATED, "def spam():\n    pass");
    assert_eq!(reconcile(&p.annotated, &p.plain).unwrap(), Changed::No);
}

#[test]
fn test_dry_run_does_not_write() {
    let p = pair(ANNOTATED, "def ham():\n    pass\n");
    let report = Reconciler::default()
        .with_dry_run(true)
        .reconcile(&p.annotated, &p.plain)
        .unwrap();

    assert_eq!(report.changed, Changed::Yes);
    assert!(report.check.as_ref().is_some_and(|c| c.is_ok()));
    assert_eq!(fs::read_to_string(&p.annotated).unwrap(), ANNOTATED);
}

#[test]
fn test_missing_plain_is_read_error_and_leaves_annotated() {
    let p = pair(ANNOTATED, "");
    fs::remove_file(&p.plain).unwrap();

    let err = reconcile(&p.annotated, &p.plain).unwrap_err();
    assert!(matches!(err, Error::Read(_)));
    assert_eq!(fs::read_to_string(&p.annotated).unwrap(), ANNOTATED);
}

#[test]
fn test_missing_annotated_is_never_created() {
    let p = pair(ANNOTATED, "x = 1\n");
    fs::remove_file(&p.annotated).unwrap();

    assert!(matches!(
        reconcile(&p.annotated, &p.plain),
        Err(Error::Read(_))
    ));
    assert!(!p.annotated.exists());
}

#[test]
fn test_malformed_verbatim_is_counted() {
    let annotated = "#@+leo-ver=5\na\n#@verbatim\n";
    let p = pair(annotated, "a\n");

    let report = Reconciler::default()
        .reconcile(&p.annotated, &p.plain)
        .unwrap();
    assert_eq!(report.malformed_verbatim, 1);
}

#[test]
fn test_malformed_verbatim_can_abort() {
    let annotated = "#@+leo-ver=5\na\n#@verbatim\n";
    let p = pair(annotated, "b\n");
    let config = ShadowConfig {
        abort_on_malformed: true,
        ..ShadowConfig::default()
    };

    let err = Reconciler::new(config)
        .reconcile(&p.annotated, &p.plain)
        .unwrap_err();
    assert!(matches!(err, Error::MalformedVerbatim { ref lines } if lines == &vec![3]));
    assert_eq!(fs::read_to_string(&p.annotated).unwrap(), annotated);
}

#[test]
fn test_headerless_file_uses_extension_marker() {
    let annotated = "#@+node:1\nalpha\n";
    let p = pair(annotated, "alpha\n#@looks-like-a-sentinel\n");

    assert_eq!(reconcile(&p.annotated, &p.plain).unwrap(), Changed::Yes);
    assert_eq!(
        fs::read_to_string(&p.annotated).unwrap(),
        "#@+node:1\nalpha\n#@verbatim\n#@looks-like-a-sentinel\n"
    );
}

#[test]
fn test_prose_mentioning_header_keeps_sentinels() {
    let annotated = "# see @+leo docs\n#@+node:1\nalpha\n#@+node:2\nbeta\n";
    let p = pair(annotated, "# see @+leo docs\nalpha\ngamma\n");

    let report = Reconciler::default()
        .reconcile(&p.annotated, &p.plain)
        .unwrap();
    assert_eq!(report.changed, Changed::Yes);
    assert!(report.check.as_ref().is_some_and(|c| c.is_ok()));
    assert_eq!(
        fs::read_to_string(&p.annotated).unwrap(),
        "# see @+leo docs\n#@+node:1\nalpha\n#@+node:2\ngamma\n"
    );
}

#[test]
fn test_language_override_changes_marker() {
    let annotated = "//@+node:1\nalpha\n";
    let p = pair(annotated, "alpha\n");

    // With the python marker the `//@` line would be content
    let report = Reconciler::default()
        .with_language(Some("c".into()))
        .reconcile(&p.annotated, &p.plain)
        .unwrap();
    assert_eq!(report.changed, Changed::No);
}

#[test]
fn test_sync_skips_insignificant_plain() {
    let p = pair(ANNOTATED, "tiny\n");
    let report = Reconciler::default().sync(&p.annotated, &p.plain).unwrap();

    assert!(report.skipped);
    assert_eq!(report.changed, Changed::No);
    assert_eq!(fs::read_to_string(&p.annotated).unwrap(), ANNOTATED);
}

#[test]
fn test_sync_propagates_significant_plain() {
    let p = pair(ANNOTATED, "def spam():\n    return None\n");
    let report = Reconciler::default().sync(&p.annotated, &p.plain).unwrap();

    assert!(!report.skipped);
    assert_eq!(report.changed, Changed::Yes);
}

#[test]
fn test_strip_writes_plain_file() {
    let p = pair(ANNOTATED, "");
    fs::remove_file(&p.plain).unwrap();

    assert_eq!(strip(&p.annotated, &p.plain).unwrap(), Changed::Yes);
    assert_eq!(
        fs::read_to_string(&p.plain).unwrap(),
        "def spam():\n    pass\n"
    );
    assert_eq!(strip(&p.annotated, &p.plain).unwrap(), Changed::No);
}

#[test]
fn test_strip_keeps_escaped_lines() {
    let p = pair("#@+leo-ver=5\n#@verbatim\n#@x\n#@-leo\n", "");
    strip(&p.annotated, &p.plain).unwrap();
    assert_eq!(fs::read_to_string(&p.plain).unwrap(), "#@x\n");
}

#[test]
fn test_strip_then_reconcile_round_trips() {
    let p = pair(ANNOTATED, "");
    strip(&p.annotated, &p.plain).unwrap();
    assert_eq!(reconcile(&p.annotated, &p.plain).unwrap(), Changed::No);
}
