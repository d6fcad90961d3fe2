use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use oracle_core::copy;

use crate::card;

pub fn run(dir: &Path, pause_ms: u64) -> Result<(), String> {
    let config = super::config(dir, pause_ms);
    let oracle = super::load_oracle(&config)?;
    let data = oracle.data();

    println!("  {}", copy::TITLE.bold());
    for line in copy::SUBTITLE {
        println!("  {}", line.italic());
    }
    println!(
        "  {} quotations, {} images | 'quit' to exit\n",
        data.corpus.len(),
        data.catalog.len()
    );

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("? ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let question = line.trim_end_matches(['\n', '\r']);
        if question.trim().eq_ignore_ascii_case("quit") {
            break;
        }

        match oracle.consult(question) {
            Ok(answer) => {
                super::turn_page(&config);
                println!("\n{}", card::render_text(&answer));
            }
            Err(e) if e.is_user_error() => {
                println!("{}\n", copy::message_for(&e).yellow());
            }
            Err(e) => {
                println!("{}\n", copy::message_for(&e).red());
            }
        }
    }

    println!("  {}", copy::IDLE_FOOTER.dimmed());
    Ok(())
}
