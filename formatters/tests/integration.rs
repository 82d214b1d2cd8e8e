use pretty_assertions::assert_eq;

use formatters::{Format, HtmlFormatter, TextFormatter};
use siboom::{ConvertErrorKind, Document, Formatter, convert};

fn render(format: Format, source: &str) -> String {
    let document = Document::from_source(source);
    let formatter = format.formatter();
    convert(&document, formatter.as_ref()).expect("conversion failed")
}

fn html_body(source: &str) -> String {
    let html = HtmlFormatter;
    let out = render(Format::Html, source);
    out.strip_prefix(&html.header())
        .and_then(|rest| rest.strip_suffix(&html.footer()))
        .expect("missing html header or footer")
        .to_string()
}

const SAMPLE: &str = "=Title\nHello *world*.\n * item one\n * item two\nBye.\n";

#[test]
fn html_sample_document() {
    assert_eq!(
        html_body(SAMPLE),
        "<h1>Title</h1>\n\
         \n<p>Hello <i>world</i>.</p>\n\
         \n<ul>\n<li>item one</li>\n<li>item two</li>\n\n</ul>\n\
         \n<p>Bye.</p>\n"
    );
}

#[test]
fn text_sample_document() {
    assert_eq!(
        render(Format::Txt, SAMPLE),
        "\nTITLE\n\nHello _world_.\n\n * item one\n * item two\n\nBye.\n\nEOF\n"
    );
}

#[test]
fn html_document_is_wrapped_once() {
    let out = render(Format::Html, SAMPLE);
    assert!(out.starts_with("<!DOCTYPE HTML"));
    assert_eq!(out.matches("<body>").count(), 1);
    assert!(out.ends_with("</body></html>\n"));
}

#[test]
fn html_escapes_plain_text() {
    assert_eq!(
        html_body("Fish & chips <3 \"now\"\n"),
        "\n<p>Fish &amp; chips &lt;3 &quot;now&quot;</p>\n"
    );
}

#[test]
fn html_keeps_literal_stars() {
    assert_eq!(html_body("2 \\* 3 = 6\n"), "\n<p>2 * 3 = 6</p>\n");
}

#[test]
fn code_block_is_not_scanned() {
    let source = "!code\nlet x = a**b;\nif x < 1 {}\n!\n";
    assert_eq!(
        html_body(source),
        "<pre class=\"code\">\nlet x = a**b;\nif x &lt; 1 {}\n</pre>\n"
    );
    assert_eq!(
        render(Format::Txt, source),
        "\n    let x = a**b;\n    if x < 1 {}\n\n\nEOF\n"
    );
}

#[test]
fn notes_round_trip_through_both_formats() {
    let source = "Siboom is **small**.\n!note\nReally *small*.\n!\n!shownotes\nNotes\n!\n";
    assert_eq!(
        html_body(source),
        "\n<p>Siboom is <b>small</b>.\
         <a class=\"noteref\" href=\"#note1\"><sup>1</sup></a> </p>\n\
         <h1>Notes</h1>\n\
         \n<ul>\n<li><a name=\"note1\">1</a> Really <i>small</i>.</li>\n\n</ul>\n"
    );
    assert_eq!(
        render(Format::Txt, source),
        "Siboom is *small*.[1] \n\nNOTES\n\n\n [1] Really _small_.\n\n\nEOF\n"
    );
}

#[test]
fn citation_and_image_in_text() {
    let source = "!cit\nBrevity is the soul of wit.\nPolonius\n!\n!image\ncat.png\nA cat\n!\n";
    assert_eq!(
        render(Format::Txt, source),
        "\n  Brevity is the soul of wit.\n  -- Polonius\n\n\n  (image: A cat)\n\n\nEOF\n"
    );
}

#[test]
fn unknown_directive_fails_in_every_format() {
    let document = Document::from_source("intro\n!bogus\n!\n");
    for format in Format::ALL {
        let formatter = format.formatter();
        let err = convert(&document, formatter.as_ref()).unwrap_err();
        assert_eq!(err.kind, ConvertErrorKind::UnknownBangForm("bogus".into()));
        assert_eq!(err.line_index, 1);
    }
}

#[test]
fn formatters_can_be_used_directly() {
    let text: &dyn Formatter = &TextFormatter;
    assert_eq!(
        convert(&Document::from_lines(["=a"]), text).unwrap(),
        "\nA\n\n\nEOF\n"
    );
}
