#[cfg(test)]
mod tests {
    use crate::highlight::lexer::tokenize;
    use crate::highlight::render::markup::escape;
    use crate::highlight::render::{highlight, render};

    #[test]
    fn styled_and_plain_tokens() {
        assert_eq!(
            highlight("if (x) foo(1);"),
            concat!(
                r#"<span class="token-keyword">if</span> (x) "#,
                r#"<span class="token-function">foo</span>("#,
                r#"<span class="token-number">1</span>);"#,
            )
        );
    }

    #[test]
    fn every_styled_class() {
        assert_eq!(
            highlight("// c\n'#' `a${b}` a = 2"),
            concat!(
                r#"<span class="token-comment">// c</span>"#,
                "\n",
                r#"<span class="token-string">&#39;#&#39;</span> "#,
                r#"<span class="token-template-literal">`a${</span>"#,
                r#"<span class="token-template-expression">b</span>"#,
                r#"<span class="token-template-literal">}`</span> a "#,
                r#"<span class="token-operator">=</span> "#,
                r#"<span class="token-number">2</span>"#,
            )
        );
    }

    #[test]
    fn markup_in_tokens_is_escaped() {
        assert_eq!(
            highlight(r#"a<b && "</span><script>""#),
            concat!(
                "a",
                r#"<span class="token-operator">&lt;</span>b "#,
                r#"<span class="token-operator">&amp;&amp;</span> "#,
                r#"<span class="token-string">&quot;&lt;/span&gt;&lt;script&gt;&quot;</span>"#,
            )
        );

        // Unstyled tokens are escaped too.
        assert_eq!(highlight("@<"), "@<span class=\"token-operator\">&lt;</span>");
        assert_eq!(highlight("\u{e9}&"), "\u{e9}<span class=\"token-operator\">&amp;</span>");
    }

    #[test]
    fn escape_keeps_plain_text() {
        assert_eq!(escape("plain text"), "plain text");
        assert_eq!(escape(""), "");
        assert_eq!(escape("<'&\">"), "&lt;&#39;&amp;&quot;&gt;");
        assert_eq!(escape("ü<ü"), "ü&lt;ü");
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(render(&[]), "");
        assert_eq!(highlight(" \n\t"), " \n\t");
    }

    #[test]
    fn rendering_is_deterministic() {
        let tokens = tokenize("const a = `x${y}z`; # done");
        assert_eq!(render(&tokens), render(&tokens));
    }
}
