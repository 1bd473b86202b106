//! LexMe CLI
//!
//! Tokenizes one C source file and prints the tokens as JSON (or text).

fn main() {
    lexmec::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Err(e) = lexmec::cli::run(&args, std::io::stdout()) {
        eprintln!("[!] {e}");
        std::process::exit(1);
    }
}
