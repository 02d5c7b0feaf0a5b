//! Themed, self-contained HTML documents for highlighted code snippets.
//!
//! A snippet wraps the highlighted markup in a code window: a gradient backdrop, a themed
//! window with optional title bar controls and language label, and an optional line number
//! gutter. Rasterizing the result is left to whatever displays it.
//!

pub mod catalog;
pub mod settings;

#[cfg(test)]
mod snippet_unittests;

pub use catalog::{Background, BackgroundName, CodeTheme, Language, ThemeName};
pub use settings::SnippetSettings;

use crate::highlight::lexer::TokenizedBuffer;
use crate::highlight::render::{markup, render};

/// Renders `buffer` as an HTML fragment styled by `settings`.
pub fn render_snippet(buffer: &TokenizedBuffer, settings: &SnippetSettings) -> String {
    let theme = settings.theme.theme();
    let background = settings.background.background();
    let mut html = String::new();

    html.push_str(&format!(
        "<div class=\"glint-frame\" style=\"background: {}; padding: {}px;\">\n",
        background.gradient, settings.padding
    ));
    html.push_str(&format!(
        "<div class=\"glint-window theme-{}\" style=\"background-color: {}; color: {}; \
         font-family: {}; font-size: {}px;\">\n",
        theme.value,
        theme.background,
        theme.color,
        markup::escape(&settings.font_family),
        settings.font_size
    ));

    if settings.show_window_controls {
        html.push_str("<div class=\"glint-titlebar\">");
        for control in ["close", "minimize", "zoom"] {
            html.push_str(&format!(
                "<span class=\"glint-control glint-control-{}\"></span>",
                control
            ));
        }
        html.push_str(&format!(
            "<span class=\"glint-language\">{}</span></div>\n",
            settings.language.display_name()
        ));
    }

    html.push_str("<div class=\"glint-body\">");
    if settings.show_line_numbers {
        html.push_str("<div class=\"glint-gutter\">");
        for number in 1..=buffer.line_count() {
            html.push_str(&format!("<div>{}</div>", number));
        }
        html.push_str("</div>");
    }
    html.push_str("<pre class=\"glint-code\"><code>");
    html.push_str(&render(buffer.tokens()));
    html.push_str("</code></pre></div>\n</div>\n</div>\n");

    tracing::trace!(
        file = buffer.file_name(),
        theme = theme.value,
        bytes = html.len(),
        "rendered snippet"
    );
    html
}
