use std::path::Path;

use oracle_core::copy;

use crate::card;

pub fn run(
    dir: &Path,
    question: &str,
    format: &str,
    output: Option<&Path>,
    pause_ms: u64,
) -> Result<(), String> {
    if !matches!(format, "text" | "html" | "json") {
        return Err(format!(
            "unsupported format: \"{format}\". Use: text, html, json"
        ));
    }

    let config = super::config(dir, pause_ms);
    let oracle = super::load_oracle(&config)?;
    let answer = oracle
        .consult(question)
        .map_err(|e| copy::message_for(&e))?;

    // A card written to a file is plain text and needs no pause.
    if output.is_some() {
        colored::control::set_override(false);
    }

    let content = match format {
        "html" => card::render_html(question, &answer),
        "json" => card::render_json(question, &answer)?,
        _ => {
            if output.is_none() {
                super::turn_page(&config);
            }
            card::render_text(&answer)
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Written to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}
