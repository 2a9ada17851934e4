//! Diff rendering for fixture comparison.

/// Render a line diff between expected and actual output.
///
/// Lines present on only one side are reported against an empty line on
/// the other, so a missing or extra tail still shows up.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");

    let exp: Vec<&str> = expected.split('\n').collect();
    let act: Vec<&str> = actual.split('\n').collect();
    for i in 0..exp.len().max(act.len()) {
        let e = exp.get(i).copied();
        let a = act.get(i).copied();
        if e != a {
            out.push_str(&format!("@@ line {} @@\n", i + 1));
            if let Some(e) = e {
                out.push_str(&format!("-{}\n", visible(e)));
            }
            if let Some(a) = a {
                out.push_str(&format!("+{}\n", visible(a)));
            }
        }
    }
    out
}

/// Make trailing spaces and control bytes visible; padding bugs are
/// otherwise invisible in a diff.
fn visible(line: &str) -> String {
    line.escape_debug().to_string().replace(' ', "·")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs() {
        assert_eq!(render_diff("a\nb", "a\nb"), "[identical]");
    }

    #[test]
    fn reports_changed_line() {
        let d = render_diff("one\ntwo", "one\nTWO");
        assert_eq!(d, "--- expected\n+++ actual\n@@ line 2 @@\n-two\n+TWO\n");
    }

    #[test]
    fn reports_missing_tail() {
        let d = render_diff("a\nb", "a");
        assert!(d.ends_with("@@ line 2 @@\n-b\n"));
    }

    #[test]
    fn padding_is_visible() {
        let d = render_diff("[  42]", "[ 42]");
        assert!(d.contains("-[··42]"));
        assert!(d.contains("+[·42]"));
    }

    #[test]
    fn control_bytes_are_escaped() {
        let d = render_diff("a\tb", "a b");
        assert!(d.contains("-a\\tb"));
    }
}
