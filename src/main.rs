use std::time::Instant;

use sipuri::{SipUriParser, SAMPLE_URIS};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<&str> = if args.is_empty() {
        SAMPLE_URIS.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    let parser = SipUriParser::new();
    let start = Instant::now();

    for input in inputs {
        println!("{}", input);
        match parser.parse(input) {
            Ok(uri) => println!("{}", uri.report()),
            Err(e) => println!("{}\n", e),
        }
    }

    println!("Duration: {:?}", start.elapsed());
}
