//! Rendering an answer as a terminal card, an HTML page, or JSON.

use colored::Colorize;

use oracle_core::OracleAnswer;
use oracle_core::copy;

/// Column width for wrapped quotation text.
const WRAP_WIDTH: usize = 64;

/// A card for the terminal.
pub fn render_text(answer: &OracleAnswer) -> String {
    let mut out = String::new();

    out.push_str(&format!("  {}\n\n", copy::TITLE.bold()));
    out.push_str(&format!("  {}\n\n", answer.image_url.dimmed()));

    let quoted = format!("\u{201c}{}\u{201d}", answer.main_text);
    for line in wrap(&quoted, WRAP_WIDTH) {
        out.push_str(&format!("  {}\n", line.bold()));
    }
    out.push('\n');
    out.push_str(&format!(
        "  {}\n\n",
        answer.source_label.to_uppercase().dimmed()
    ));

    for line in copy::GUIDE {
        out.push_str(&format!("  {}\n", line.italic()));
    }

    out
}

/// The answer and question as a JSON object.
pub fn render_json(question: &str, answer: &OracleAnswer) -> Result<String, String> {
    let value = serde_json::json!({
        "question": question,
        "main_text": answer.main_text,
        "source_label": answer.source_label,
        "image_url": answer.image_url,
    });
    serde_json::to_string_pretty(&value).map_err(|e| format!("JSON serialization error: {e}"))
}

/// A self-contained HTML page showing the card.
pub fn render_html(question: &str, answer: &OracleAnswer) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str(&format!(
        "  <meta charset=\"utf-8\">\n  <title>{}</title>\n",
        escape_html(copy::TITLE)
    ));
    html.push_str("  <style>\n");
    html.push_str("    body { background: #f9f9f7; color: #2c2c2c; font-family: 'Noto Serif KR', Georgia, serif; max-width: 720px; margin: 0 auto; padding: 0 1em; }\n");
    html.push_str("    header { padding: 50px 0 30px; text-align: center; }\n");
    html.push_str("    h1 { font-size: 36px; color: #1a1a1a; letter-spacing: -1px; margin-bottom: 15px; }\n");
    html.push_str("    .subtitle { font-size: 15px; color: #666; line-height: 1.8; font-style: italic; }\n");
    html.push_str("    .question { color: #555; border-bottom: 1px solid #aaa; padding: 10px 5px; }\n");
    html.push_str("    .card { background: #fff; padding: 20px 20px 40px; margin-top: 40px; text-align: center; box-shadow: 0 15px 40px rgba(0,0,0,0.05); }\n");
    html.push_str("    .card img { width: 100%; max-height: 400px; object-fit: cover; margin-bottom: 30px; filter: grayscale(20%); }\n");
    html.push_str("    .text { font-size: 21px; line-height: 1.7; color: #111; word-break: keep-all; padding: 0 10px; }\n");
    html.push_str("    .source { display: block; margin-top: 25px; font: 12px sans-serif; color: #999; text-transform: uppercase; letter-spacing: 1px; }\n");
    html.push_str("    .guide { margin-top: 50px; padding-top: 20px; border-top: 1px solid #e0e0e0; text-align: center; color: #888; font-size: 13px; }\n");
    html.push_str("  </style>\n</head>\n<body>\n");

    html.push_str("<header>\n");
    html.push_str(&format!("  <h1>{}</h1>\n", escape_html(copy::TITLE)));
    html.push_str(&format!(
        "  <div class=\"subtitle\">{}<br>{}</div>\n",
        escape_html(copy::SUBTITLE[0]),
        escape_html(copy::SUBTITLE[1])
    ));
    html.push_str("</header>\n");

    html.push_str(&format!(
        "<p class=\"question\">{}</p>\n",
        escape_html(question)
    ));

    html.push_str("<div class=\"card\">\n");
    html.push_str(&format!(
        "  <img src=\"{}\" alt=\"\">\n",
        escape_html(&answer.image_url)
    ));
    html.push_str(&format!(
        "  <div class=\"text\">\u{201c}{}\u{201d}</div>\n",
        escape_html(&answer.main_text)
    ));
    html.push_str(&format!(
        "  <span class=\"source\">{}</span>\n",
        escape_html(&answer.source_label)
    ));
    html.push_str("</div>\n");

    html.push_str(&format!(
        "<div class=\"guide\">{}<br>{}</div>\n",
        escape_html(copy::GUIDE[0]),
        escape_html(copy::GUIDE[1])
    ));
    html.push_str("</body>\n</html>\n");

    html
}

/// Escape text for use in HTML content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Greedy word wrap by character count. Words longer than `width` get their
/// own line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
