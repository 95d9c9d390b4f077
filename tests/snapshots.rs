//! Snapshot tests for token streams and composite output

use typogr::{tokenize, typogrify, Token};

fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{:?} {:?} {:?}", t.kind, t.text, t.span))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_tokens_with_final_period() {
    let tokens = tokenize("Hello <b>world</b>.");
    insta::assert_snapshot!(render_tokens(&tokens), @r###"
    Text "Hello " 0..6
    Tag "<b>" 6..9
    Text "world" 9..14
    Tag "</b>" 14..18
    Text "." 18..19
    "###);
}

#[test]
fn test_tokens_with_trailing_sentence() {
    let tokens = tokenize("<p>Done</p> and more.");
    insta::assert_snapshot!(render_tokens(&tokens), @r###"
    Tag "<p>" 0..3
    Text "Done" 3..7
    Tag "</p>" 7..11
    Text " and more" 11..20
    Text "." 20..21
    "###);
}

#[test]
fn test_tokens_json() {
    let json = serde_json::to_string(&tokenize("<b>x</b>")).unwrap();
    insta::assert_snapshot!(json, @r###"[{"kind":"tag","text":"<b>","span":{"start":0,"end":3}},{"kind":"text","text":"x","span":{"start":3,"end":4}},{"kind":"tag","text":"</b>","span":{"start":4,"end":8}}]"###);
}

#[test]
fn test_typogrify_document() {
    let source = [
        "<h1>\"Typogr\" -- the 1st try</h1>",
        "<p>It's rock 'n' roll & NASA...</p>",
        "<pre>\"keep\" -- 1st & KU</pre>",
    ]
    .join("\n");

    insta::assert_snapshot!(typogrify(&source), @r###"
    <h1><span class="dquo">&#8220;</span>Typogr&#8221; &#8211; the 1<span class="ord">st</span><span class="widont">&nbsp;</span>try</h1>
    <p>It&#8217;s rock &#8217;n&#8217; roll <span class="amp">&amp;</span><span class="widont">&nbsp;</span><span class="caps">NASA</span>&#8230;</p>
    <pre>"keep" -- 1st & KU</pre>
    "###);
}

#[test]
fn test_typogrify_headline() {
    insta::assert_snapshot!(
        typogrify("<h2>\"Jayhawks\" & KU fans act extremely obnoxiously</h2>"),
        @r###"<h2><span class="dquo">&#8220;</span>Jayhawks&#8221; <span class="amp">&amp;</span> <span class="caps">KU</span> fans act extremely<span class="widont">&nbsp;</span>obnoxiously</h2>"###
    );
}
