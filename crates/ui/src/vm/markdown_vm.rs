use std::collections::{HashMap, HashSet};

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag};

/// Label shown on fenced blocks that do not name a language. The lesson's
/// diagrams usually arrive this way.
pub const DEFAULT_CODE_LABEL: &str = "ASCII";

/// Render lesson markdown to sanitized HTML.
///
/// The buffer grows mid-token, so the input is routinely truncated: an open
/// fence, half a table row, a dangling `**`. The parser treats all of these as
/// best-effort text; this function never fails.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(input, options).flat_map(|event| match event {
        Event::Start(Tag::CodeBlock(ref kind)) => {
            let label = code_block_label(kind);
            let badge = Event::Html(CowStr::from(format!(
                "<div class=\"code-label\">{label}</div>"
            )));
            vec![badge, event]
        }
        other => vec![other],
    });

    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

/// Language tag of a fenced block, or [`DEFAULT_CODE_LABEL`].
///
/// Only the leading word characters of the info string are kept, so the label
/// is always safe to splice into markup.
#[must_use]
pub fn code_block_label(kind: &CodeBlockKind<'_>) -> String {
    let info = match kind {
        CodeBlockKind::Fenced(info) => info.as_ref(),
        CodeBlockKind::Indented => "",
    };
    let language: String = info
        .trim()
        .chars()
        .take_while(|ch| ch.is_alphanumeric() || *ch == '_')
        .collect();
    if language.is_empty() {
        DEFAULT_CODE_LABEL.to_string()
    } else {
        language
    }
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "hr", "em", "strong", "del", "code", "pre", "blockquote",
        "ul", "ol", "li", "a", "h1", "h2", "h3", "h4", "h5", "h6", "table", "thead", "tbody",
        "tr", "th", "td", "input", "sup",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());
    attributes.insert("div", ["class"].into_iter().collect());
    attributes.insert("code", ["class"].into_iter().collect());
    attributes.insert("th", ["style"].into_iter().collect());
    attributes.insert("td", ["style"].into_iter().collect());
    attributes.insert("input", ["type", "checked", "disabled"].into_iter().collect());
    attributes.insert("ol", ["start"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use pulldown_cmark::{CodeBlockKind, CowStr};

    use super::{DEFAULT_CODE_LABEL, code_block_label, markdown_to_html};

    #[test]
    fn renders_headings_tables_and_strikethrough() {
        let html = markdown_to_html(
            "# Intro\n\n| Model | Use |\n|---|---|\n| LSTM | prices |\n\n~~alpha~~ decays",
        );
        assert!(html.contains("<h1>Intro</h1>"), "{html}");
        assert!(html.contains("<table>"), "{html}");
        assert!(html.contains("<td>LSTM</td>"), "{html}");
        assert!(html.contains("<del>alpha</del>"), "{html}");
    }

    #[test]
    fn unterminated_fence_renders_best_effort() {
        let html = markdown_to_html("Pipeline:\n\n```\n[Data] --> [Model]\n  |");
        assert!(html.contains("<pre>"), "{html}");
        assert!(html.contains("[Data] --&gt; [Model]"), "{html}");
        assert!(html.contains(DEFAULT_CODE_LABEL), "{html}");
    }

    #[test]
    fn truncated_inline_markup_is_kept_as_text() {
        let html = markdown_to_html("Hedge funds use **reinforce");
        assert!(html.contains("**reinforce"), "{html}");

        let html = markdown_to_html("| Model | Use |\n|---|--");
        assert!(html.contains("Model"), "{html}");
    }

    #[test]
    fn code_label_comes_from_fence_language() {
        let html = markdown_to_html("```python\nprint(1)\n```");
        assert!(html.contains("<div class=\"code-label\">python</div>"), "{html}");
        assert!(html.contains("language-python"), "{html}");

        let kind = CodeBlockKind::Fenced(CowStr::from("rust,ignore"));
        assert_eq!(code_block_label(&kind), "rust");
        let kind = CodeBlockKind::Fenced(CowStr::from("<script>"));
        assert_eq!(code_block_label(&kind), DEFAULT_CODE_LABEL);
        assert_eq!(code_block_label(&CodeBlockKind::Indented), DEFAULT_CODE_LABEL);
    }

    #[test]
    fn sanitizes_scripts_and_links() {
        let html = markdown_to_html("[Link](javascript:alert(1))\n\n<script>alert(1)</script>");
        assert!(html.contains("Link"));
        assert!(!html.contains("javascript:"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(markdown_to_html(""), "");
    }
}
