use crate::parsing::blocks::kinds::{ListKind, Paragraph};

/// Validates converter output invariants.
///
/// Asserts that:
/// - Every container close tag matches the container that is open
/// - No container opens while another one is still open
/// - Nothing is left open at the end
/// - No paragraph's last line carries a break marker
///
/// Inside an open paragraph only `</p>` counts as a tag; any other line is
/// content, since text is never escaped. A paragraph line that is literally
/// `</p>` is still read as the close tag.
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(lines: &[String]) {
    let mut open: Option<(&'static str, usize)> = None;

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_str();
        if matches!(open, Some((Paragraph::CLOSE, _))) && line != Paragraph::CLOSE {
            continue;
        }
        if let Some(close) = closing_tag_for_open(line) {
            assert!(
                open.is_none(),
                "line {i}: {line:?} opened while {open:?} is still open"
            );
            open = Some((close, i));
            continue;
        }
        if is_close_tag(line) {
            match open {
                Some((expected, _)) => assert_eq!(
                    line, expected,
                    "line {i}: close tag does not match the open container"
                ),
                None => panic!("line {i}: {line:?} closes nothing"),
            }
            if line == Paragraph::CLOSE {
                let last = i.checked_sub(1).map(|j| lines[j].as_str()).unwrap_or("");
                assert!(
                    !last.ends_with(Paragraph::BREAK),
                    "line {i}: paragraph ends with a break marker: {last:?}"
                );
            }
            open = None;
        }
    }

    assert!(open.is_none(), "unclosed container at end: {open:?}");
}

fn closing_tag_for_open(line: &str) -> Option<&'static str> {
    if line == Paragraph::OPEN {
        return Some(Paragraph::CLOSE);
    }
    [ListKind::Unordered, ListKind::Ordered]
        .into_iter()
        .find(|k| line == k.open_tag())
        .map(ListKind::close_tag)
}

fn is_close_tag(line: &str) -> bool {
    line == Paragraph::CLOSE
        || line == ListKind::Unordered.close_tag()
        || line == ListKind::Ordered.close_tag()
}
