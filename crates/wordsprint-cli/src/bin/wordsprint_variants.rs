// wordsprint-variants: Show the accepted spellings of a word list.
//
// Prints one `variant -> base` line per accepted spelling, sorted by base
// and then by variant. With WORD arguments, only the bases those spellings
// resolve to are shown; a word the list does not accept is reported on
// stderr.
//
// Usage:
//   wordsprint-variants --list ID [-l LISTS_DIR] [WORD...]

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (verbosity, args) = wordsprint_cli::take_verbosity(&args);
    let (lists_dir, args) = wordsprint_cli::parse_lists_dir(&args);

    if wordsprint_cli::wants_help(&args) {
        println!("wordsprint-variants: Show the accepted spellings of a word list.");
        println!();
        println!("Usage: wordsprint-variants --list ID [-l LISTS_DIR] [WORD...]");
        println!();
        println!("Options:");
        println!("  -L, --list ID          Word list to inspect");
        println!("  -l, --lists DIR        Directory containing the word-list files");
        println!("  -v, --verbose          More log output on stderr (repeatable)");
        println!("  -h, --help             Print this help");
        return;
    }

    wordsprint_cli::logging::init_logging(verbosity);

    let (list_id, words) = wordsprint_cli::parse_list_id(&args);
    let list_id = list_id.unwrap_or_else(|| wordsprint_cli::fatal("--list is required"));

    let catalog = wordsprint_cli::load_catalog(lists_dir.as_deref())
        .unwrap_or_else(|e| wordsprint_cli::fatal(&e.to_string()));
    let mapping = catalog
        .mapping(&list_id)
        .unwrap_or_else(|e| wordsprint_cli::fatal(&e.to_string()));

    let (pairs, unknown) = wordsprint_cli::select_variants(mapping, &words);
    for word in &unknown {
        eprintln!("{word}: not a word of list {list_id}");
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for (variant, base) in pairs {
        let _ = writeln!(out, "{variant} -> {base}");
    }
}
