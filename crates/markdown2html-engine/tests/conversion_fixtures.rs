use markdown2html_engine::{format_text, parse, parse_str};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::headings("headings")]
#[case::lists("lists")]
#[case::paragraphs("paragraphs")]
#[case::inline("inline")]
#[case::mixed("mixed")]
#[case::paragraph_then_list("paragraph_then_list")]
#[case::list_after_inner_paragraph("list_after_inner_paragraph")]
#[case::whitespace_lines("whitespace_lines")]
fn fixture(#[case] name: &str) {
    assert_fixture(name);
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    assert_eq!(parse_str(&md), expected);
}

#[test]
fn header_line() {
    assert_eq!(parse(["# Header\n"]), "<h1>Header</h1>\n");
}

#[test]
fn unordered_list_lines() {
    assert_eq!(
        parse(["- item1\n", "- item2\n"]),
        "<ul>\n  <li>item1</li>\n  <li>item2</li>\n</ul>\n"
    );
}

#[test]
fn plain_text_lines() {
    assert_eq!(
        parse(["line1\n", "line2\n"]),
        "<p>\n  line1\n    <br />\n  line2\n</p>\n"
    );
}

#[test]
fn blank_line_gives_two_paragraphs() {
    let html = parse(["line1\n", "\n", "line2\n"]);
    assert_eq!(html.matches("<p>").count(), 2);
    assert_eq!(html.matches("</p>").count(), 2);
}

#[test]
fn list_kinds_do_not_nest() {
    assert_eq!(
        parse(["- a\n", "* b\n"]),
        "<ul>\n  <li>a</li>\n</ul>\n<ol>\n  <li>b</li>\n</ol>\n"
    );
}

#[test]
fn lines_without_terminators_match_lines_with_them() {
    assert_eq!(
        parse(["# T", "- a", "", "text"]),
        parse(["# T\n", "- a\n", "\n", "text\n"])
    );
}

#[test]
fn crlf_source_matches_lf_source() {
    assert_eq!(
        parse_str("# T\r\n* a\r\n\r\nx\r\n"),
        parse_str("# T\n* a\n\nx\n")
    );
}

#[test]
fn conversion_is_deterministic() {
    let md = "# **A**\n- ((c))\n\n[[x]] __y__\n";
    assert_eq!(parse_str(md), parse_str(md));
}

#[test]
fn format_text_properties() {
    assert_eq!(format_text("**bold**"), "<b>bold</b>");
    assert_eq!(format_text("__em__"), "<em>em</em>");
    assert_eq!(format_text("((cool Code))"), "ool ode");
    assert_eq!(format_text("[[abc]]"), "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(format_text("no markup here"), "no markup here");
}

#[test]
fn converted_html_is_not_a_fixed_point() {
    let once = parse_str("# Title\n");
    let twice = parse_str(&once);
    insta::assert_snapshot!(once.trim_end(), @"<h1>Title</h1>");
    assert_eq!(twice, "<p>\n  <h1>Title</h1>\n</p>\n");
}
