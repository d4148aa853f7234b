//! Line splitting and joining

/// Split text into lines, each keeping its terminator.
///
/// The final line is normalized to end with `\n` so that a file saved
/// without a trailing newline compares equal to one saved with it.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split_inclusive('\n').map(str::to_string).collect();
    if let Some(last) = lines.last_mut() {
        if !last.ends_with('\n') {
            last.push('\n');
        }
    }
    lines
}

/// Join lines produced by [`split_lines`] back into a single string.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let capacity = lines.iter().map(|l| l.as_ref().len()).sum();
    let mut out = String::with_capacity(capacity);
    for line in lines {
        out.push_str(line.as_ref());
    }
    out
}
