// wordsprint-check: Check words from stdin against one word list.
//
// Reads words from stdin (one per line) and plays them as one untimed
// round. Output format:
//   A: word -> base    (accepted, scores for base)
//   N: word            (not in the list)
//   D: word            (base already used)
//
// Usage:
//   wordsprint-check --list ID [-l LISTS_DIR] [-v]
//
// Options:
//   -L, --list ID          Word list to check against
//   -l, --lists DIR        Directory containing the word-list files
//   -v, --verbose          More log output on stderr (repeatable)
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use wordsprint_core::enums::{RejectReason, Verdict};
use wordsprint_engine::session::Round;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (verbosity, args) = wordsprint_cli::take_verbosity(&args);
    let (lists_dir, args) = wordsprint_cli::parse_lists_dir(&args);

    if wordsprint_cli::wants_help(&args) {
        println!("wordsprint-check: Check words from stdin against one word list.");
        println!();
        println!("Usage: wordsprint-check --list ID [-l LISTS_DIR] [-v]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  A: word -> base    (accepted)");
        println!("  N: word            (not in the list)");
        println!("  D: word            (already used)");
        println!();
        println!("Options:");
        println!("  -L, --list ID          Word list to check against");
        println!("  -l, --lists DIR        Directory containing the word-list files");
        println!("  -v, --verbose          More log output on stderr (repeatable)");
        println!("  -h, --help             Print this help");
        return;
    }

    wordsprint_cli::logging::init_logging(verbosity);

    let (list_id, _) = wordsprint_cli::parse_list_id(&args);
    let list_id = list_id.unwrap_or_else(|| wordsprint_cli::fatal("--list is required"));

    let catalog = wordsprint_cli::load_catalog(lists_dir.as_deref())
        .unwrap_or_else(|e| wordsprint_cli::fatal(&e.to_string()));
    let mut round =
        Round::start(&catalog, &list_id).unwrap_or_else(|e| wordsprint_cli::fatal(&e.to_string()));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();

        match round.submit(word) {
            None => continue,
            Some(Verdict::Accepted { base, .. }) => {
                let _ = writeln!(out, "A: {word} -> {base}");
            }
            Some(Verdict::Rejected { reason: RejectReason::NotAWord, .. }) => {
                let _ = writeln!(out, "N: {word}");
            }
            Some(Verdict::Rejected { reason: RejectReason::AlreadyUsed, .. }) => {
                let _ = writeln!(out, "D: {word}");
            }
        }
    }
}
