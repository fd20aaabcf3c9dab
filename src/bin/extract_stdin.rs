//! Reads HTML from stdin and writes the extracted recipe as JSON to stdout.

use recipe_scraper::extract_bytes;
use std::io::{self, Read};

fn main() {
    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let result = extract_bytes(&html);

    match serde_json::to_string(&result) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialise result: {e}");
            std::process::exit(1);
        }
    }
}
