//! Worked examples of the classify -> align -> replay pipeline

use pretty_assertions::assert_eq;
use shadow_core::{Marker, OpTag, Opcode, align, classify, reconcile_lines, replay};

fn lines(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_replaced_line_keeps_node_sentinel() {
    let m = Marker::line("#");
    let annotated = lines(&["#@+node:1\n", "alpha\n", "#@+node:2\n", "beta\n"]);

    let c = classify(&annotated, &m);
    assert_eq!(c.content, lines(&["alpha\n", "beta\n"]));
    assert_eq!(
        c.sentinels,
        vec![lines(&["#@+node:1\n"]), lines(&["#@+node:2\n"])]
    );
    assert!(c.trailing.is_empty());

    let plain = lines(&["alpha\n", "gamma\n"]);
    assert_eq!(
        align(&c.content, &plain),
        vec![
            Opcode::new(OpTag::Equal, 0..1, 0..1),
            Opcode::new(OpTag::Replace, 1..2, 1..2),
        ]
    );

    let out = replay(&c.content, &plain, &c.sentinels, &c.trailing, &m);
    assert_eq!(
        out,
        lines(&["#@+node:1\n", "alpha\n", "#@+node:2\n", "gamma\n"])
    );
}

#[test]
fn test_lookalike_line_is_escaped_and_recovered() {
    let m = Marker::line("#");
    let annotated = lines(&["#@+leo-ver=5-thin\n", "#@+node:1\n", "a\n", "#@-leo\n"]);
    let plain = lines(&["a\n", "#@fake\n"]);

    let out = reconcile_lines(&annotated, &plain, &m).unwrap().lines;
    let pos = out.iter().position(|l| l == "#@fake\n").unwrap();
    assert_eq!(out[pos - 1], "#@verbatim\n");

    let again = classify(&out, &m);
    assert_eq!(again.content, plain);
    assert!(!again.trailing.contains(&"#@fake\n".to_string()));
    assert!(again.sentinels.iter().flatten().all(|s| s != "#@fake\n"));
}

#[test]
fn test_empty_plain_leaves_only_sentinels() {
    let m = Marker::line("#");
    let annotated = lines(&[
        "#@+leo-ver=5\n",
        "#@+node:1\n",
        "a\n",
        "#@+node:2\n",
        "b\n",
        "#@-leo\n",
    ]);

    let out = reconcile_lines(&annotated, &[], &m).unwrap().lines;
    assert_eq!(
        out,
        lines(&["#@+leo-ver=5\n", "#@+node:1\n", "#@+node:2\n", "#@-leo\n"])
    );
}

#[test]
fn test_empty_plain_on_content_free_file_is_trailing() {
    let m = Marker::line("#");
    let annotated = lines(&["#@+leo-ver=5\n", "#@-leo\n"]);

    let out = reconcile_lines(&annotated, &[], &m).unwrap().lines;
    assert_eq!(out, annotated);
}

#[test]
fn test_block_marker_file() {
    let m = Marker::block("<!--", "-->");
    let annotated = lines(&[
        "<!--@+leo-ver=5-thin-->\n",
        "<!--@+node:1-->\n",
        "<p>one</p>\n",
        "<!-- a real comment -->\n",
        "<!--@-leo-->\n",
    ]);
    let plain = lines(&["<p>one</p>\n", "<p>two</p>\n", "<!-- a real comment -->\n", "<!--@x-->\n"]);

    let out = reconcile_lines(&annotated, &plain, &m).unwrap().lines;
    assert_eq!(
        out,
        lines(&[
            "<!--@+leo-ver=5-thin-->\n",
            "<!--@+node:1-->\n",
            "<p>one</p>\n",
            "<p>two</p>\n",
            "<!-- a real comment -->\n",
            "<!--@verbatim-->\n",
            "<!--@x-->\n",
            "<!--@-leo-->\n",
        ])
    );
}

#[test]
fn test_insert_between_nodes_goes_after_previous_content() {
    let m = Marker::line("#");
    let annotated = lines(&["#@+node:1\n", "a\n", "#@+node:2\n", "b\n"]);
    let plain = lines(&["a\n", "new\n", "b\n"]);

    let out = reconcile_lines(&annotated, &plain, &m).unwrap().lines;
    assert_eq!(
        out,
        lines(&["#@+node:1\n", "a\n", "new\n", "#@+node:2\n", "b\n"])
    );
}
