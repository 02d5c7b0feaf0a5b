#[cfg(test)]
mod tests {
    use crate::highlight::lexer::TokenizedBuffer;
    use crate::snippet;
    use crate::snippet::{
        render_snippet, BackgroundName, Language, SnippetSettings, ThemeName,
    };
    use crate::Error;

    #[test]
    fn catalog_lookups() {
        assert_eq!("tokyo-night".parse::<ThemeName>().unwrap(), ThemeName::TokyoNight);
        assert_eq!("orange".parse::<BackgroundName>().unwrap(), BackgroundName::Orange);
        assert_eq!("cpp".parse::<Language>().unwrap(), Language::Cpp);
        assert_eq!(Language::Cpp.display_name(), "C++");

        for theme in ThemeName::ALL {
            assert_eq!(theme.theme().value.parse::<ThemeName>().unwrap(), theme);
        }
        for background in BackgroundName::ALL {
            assert_eq!(background.background().value.parse::<BackgroundName>().unwrap(), background);
        }
        for language in Language::ALL {
            assert_eq!(language.value().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn unknown_catalog_keys_are_rejected() {
        assert!(matches!("solarized".parse::<ThemeName>(), Err(Error::UnknownTheme(s)) if s == "solarized"));
        assert!(matches!("Purple".parse::<BackgroundName>(), Err(Error::UnknownBackground(_))));
        assert!(matches!("rust".parse::<Language>(), Err(Error::UnknownLanguage(_))));
    }

    #[test]
    fn default_settings() {
        let settings = SnippetSettings::default();
        assert_eq!(settings.theme, ThemeName::Amoled);
        assert_eq!(settings.background, BackgroundName::Purple);
        assert_eq!(settings.padding, 32);
        assert!(settings.show_line_numbers);
        assert!(settings.show_window_controls);
        assert_eq!(settings.language, Language::Javascript);
        assert_eq!(settings.font_family, "JetBrains Mono");
        assert_eq!(settings.font_size, 14);
    }

    #[test]
    fn settings_from_json() {
        let settings = SnippetSettings::from_json(
            r#"{"theme": "dracula", "showLineNumbers": false, "fontSize": 18}"#,
        )
        .unwrap();
        assert_eq!(
            settings,
            SnippetSettings {
                theme: ThemeName::Dracula,
                show_line_numbers: false,
                font_size: 18,
                ..SnippetSettings::default()
            }
        );

        assert_eq!(SnippetSettings::from_json("{}").unwrap(), SnippetSettings::default());
        assert!(matches!(
            SnippetSettings::from_json(r#"{"theme": "solarized"}"#),
            Err(Error::Settings(_))
        ));
        assert!(matches!(
            SnippetSettings::from_json(r#"{"colour": "red"}"#),
            Err(Error::Settings(_))
        ));
    }

    #[test]
    fn full_snippet() {
        let source = snippet!("let a = 1;\nfoo(a)");
        let buffer = TokenizedBuffer::tokenize(source);
        let html = render_snippet(&buffer, &SnippetSettings::default());

        assert!(html.starts_with(
            "<div class=\"glint-frame\" style=\"background: \
             linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 32px;\">\n"
        ));
        assert!(html.contains("class=\"glint-window theme-amoled\""));
        assert!(html.contains("background-color: #000000; color: #ffffff;"));
        assert!(html.contains("font-family: JetBrains Mono; font-size: 14px;"));
        assert!(html.contains("<span class=\"glint-control glint-control-close\"></span>"));
        assert!(html.contains("<span class=\"glint-language\">JavaScript</span>"));
        assert!(html.contains("<div class=\"glint-gutter\"><div>1</div><div>2</div></div>"));
        assert!(html.contains(concat!(
            "<pre class=\"glint-code\"><code>",
            r#"<span class="token-keyword">let</span> a "#,
            r#"<span class="token-operator">=</span> "#,
            r#"<span class="token-number">1</span>;"#,
            "\n",
            r#"<span class="token-function">foo</span>(a)"#,
            "</code></pre>"
        )));
    }

    #[test]
    fn optional_chrome() {
        let source = snippet!("x");
        let buffer = TokenizedBuffer::tokenize(source);
        let settings = SnippetSettings {
            show_line_numbers: false,
            show_window_controls: false,
            font_family: String::from("\"Fira Code\" <mono>"),
            ..SnippetSettings::default()
        };
        let html = render_snippet(&buffer, &settings);
        assert!(!html.contains("glint-gutter"));
        assert!(!html.contains("glint-titlebar"));
        assert!(html.contains("font-family: &quot;Fira Code&quot; &lt;mono&gt;;"));
    }

    #[test]
    fn empty_snippet_has_one_line() {
        let source = snippet!("");
        let buffer = TokenizedBuffer::tokenize(source);
        let html = render_snippet(&buffer, &SnippetSettings::default());
        assert!(html.contains("<div class=\"glint-gutter\"><div>1</div></div>"));
        assert!(html.contains("<code></code>"));
    }
}
