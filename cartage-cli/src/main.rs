//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = cartage_cli::run() {
        eprintln!("cartage: {err}");
        std::process::exit(1);
    }
}
