// wordsprint-play: Play a timed round in the terminal.
//
// Type as many distinct words from the chosen list as you can. Each
// accepted word restarts the per-word clock; an answer given after the
// clock ran out ends the round and does not count. End of input (Ctrl-D)
// also ends the round.
//
// Usage:
//   wordsprint-play --list ID --time SECONDS [-l LISTS_DIR] [-v]

use std::io::{self, BufRead, Write};

use wordsprint_cli::countdown::{Countdown, parse_time_per_word};
use wordsprint_core::enums::Verdict;
use wordsprint_engine::CatalogError;
use wordsprint_engine::messages::{self, Messages};
use wordsprint_engine::session::Round;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (verbosity, args) = wordsprint_cli::take_verbosity(&args);
    let (lists_dir, args) = wordsprint_cli::parse_lists_dir(&args);

    if wordsprint_cli::wants_help(&args) {
        println!("wordsprint-play: Play a timed round in the terminal.");
        println!();
        println!("Usage: wordsprint-play --list ID --time SECONDS [-l LISTS_DIR] [-v]");
        println!();
        println!("Options:");
        println!("  -L, --list ID          Word list to play");
        println!("  -t, --time SECONDS     Time allowed per word (positive whole number)");
        println!("  -l, --lists DIR        Directory containing the word-list files");
        println!("  -v, --verbose          More log output on stderr (repeatable)");
        println!("  -h, --help             Print this help");
        return;
    }

    wordsprint_cli::logging::init_logging(verbosity);

    let (list_id, args) = wordsprint_cli::parse_list_id(&args);
    let (time, _) = wordsprint_cli::take_option(&args, "--time", "-t");
    let list_id = list_id.unwrap_or_else(|| wordsprint_cli::fatal("--list is required"));
    let per_word = time
        .as_deref()
        .map(parse_time_per_word)
        .unwrap_or_else(|| Err("--time is required".to_string()))
        .unwrap_or_else(|e| wordsprint_cli::fatal(&e));

    let catalog = wordsprint_cli::load_catalog(lists_dir.as_deref())
        .unwrap_or_else(|e| wordsprint_cli::fatal(&e.to_string()));
    let mut round = match Round::start(&catalog, &list_id) {
        Ok(round) => round,
        Err(CatalogError::EmptyList(_)) => wordsprint_cli::fatal(messages::NO_WORDS_AVAILABLE),
        Err(e) => wordsprint_cli::fatal(&e.to_string()),
    };
    let feedback = Messages::for_list(&list_id);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut clock = Countdown::new(per_word);

    loop {
        print!("[{}s] > ", clock.remaining().as_secs());
        let _ = io::stdout().flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        }
        if clock.expired() {
            println!("Time's up!");
            break;
        }

        match round.submit(&line) {
            None => {}
            Some(Verdict::Accepted { .. }) => {
                clock.restart();
                println!("Score: {}", round.score());
                if round.is_exhausted() {
                    break;
                }
            }
            Some(Verdict::Rejected { entered, reason }) => {
                println!("{}", feedback.render(&entered, reason));
            }
        }
    }

    let summary = round.end();
    println!("{}", messages::game_over(summary.score));
    if summary.entered_words.is_empty() {
        println!("{}", messages::NO_WORDS_ENTERED);
    } else {
        println!("Entered words:");
        for word in &summary.entered_words {
            println!("  {word}");
        }
    }
}
