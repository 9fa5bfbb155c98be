use std::ops::Range;

use super::{
    cursor::Cursor,
    kinds::{Bold, DelimitedSpan, Emphasis},
};

/// Applies every inline substitution to one line of content.
///
/// Bold is rewritten first, then emphasis, so the emphasis pass also sees
/// text that already sits inside `<b>...</b>`.
pub fn substitute(s: &str) -> String {
    let bolded = replace_pairs::<Bold>(s);
    replace_pairs::<Emphasis>(&bolded)
}

/// Replaces each `DELIM inner DELIM` span of kind `K` with its HTML wrapper.
///
/// Matching is left to right, picks the shortest non-empty inner text, and
/// never overlaps. An opener with no closer is copied through verbatim and
/// scanning resumes at the next byte.
pub fn replace_pairs<K: DelimitedSpan>(s: &str) -> String {
    let mut cur = Cursor::new(s);
    let mut out = String::with_capacity(s.len());
    let mut text_start = cur.pos();

    while !cur.eof() {
        if let Some(m) = try_match::<K>(&mut cur) {
            out.push_str(&s[text_start..m.full.start]);
            out.push_str(K::OPEN);
            out.push_str(&s[m.inner]);
            out.push_str(K::CLOSE);
            text_start = m.full.end;
            continue;
        }
        cur.bump();
    }

    out.push_str(&s[text_start..]);
    out
}

/// Byte ranges of a matched delimiter pair.
struct PairMatch {
    /// Full range including both delimiters.
    full: Range<usize>,
    /// Inner text between the delimiters.
    inner: Range<usize>,
}

/// Attempts to match a delimited span starting at the current position.
///
/// Returns `None` if not at an opener or if no closer follows on this line.
/// On failure the cursor is left where it was.
fn try_match<K: DelimitedSpan>(cur: &mut Cursor<'_>) -> Option<PairMatch> {
    if !cur.starts_with(K::DELIM) {
        return None;
    }

    let start = cur.pos();
    let inner_start = start + K::DELIM.len();

    // Inner text must hold at least one byte.
    let mut probe = cur.clone();
    probe.seek(inner_start + 1);
    let inner_end = probe.find(K::DELIM)?;

    let end = inner_end + K::DELIM.len();
    cur.seek(end);

    Some(PairMatch {
        full: start..end,
        inner: inner_start..inner_end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain text", "plain text")]
    #[case("Hello **world**", "Hello <b>world</b>")]
    #[case("**a** and **b**", "<b>a</b> and <b>b</b>")]
    #[case("**a**b**", "<b>a</b>b**")]
    #[case("***a**", "<b>*a</b>")]
    #[case("****", "****")]
    #[case("**unclosed", "**unclosed")]
    #[case("a ** b", "a ** b")]
    #[case("", "")]
    fn bold_pass(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(replace_pairs::<Bold>(input), expected);
    }

    #[rstest]
    #[case("__em__", "<em>em</em>")]
    #[case("x __a__ y __b__ z", "x <em>a</em> y <em>b</em> z")]
    #[case("snake__case", "snake__case")]
    #[case("____", "____")]
    fn emphasis_pass(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(replace_pairs::<Emphasis>(input), expected);
    }

    #[test]
    fn bold_runs_before_emphasis() {
        assert_eq!(
            substitute("**bold __and em__**"),
            "<b>bold <em>and em</em></b>"
        );
    }

    #[test]
    fn emphasis_can_span_bold_markup() {
        // The emphasis pass sees the output of the bold pass.
        assert_eq!(substitute("__a **b** c__"), "<em>a <b>b</b> c</em>");
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(substitute("über **naïve** café"), "über <b>naïve</b> café");
        assert_eq!(substitute("**日本**語"), "<b>日本</b>語");
    }

    #[test]
    fn unmatched_delimiters_pass_through() {
        assert_eq!(substitute("a **b __c"), "a **b __c");
    }
}
