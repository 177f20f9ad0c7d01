// io for the terminal, process for the exit status
use std::io;
use std::process;

use guess_number::Config;
use guess_number::console::Console;
use guess_number::logging;
use guess_number::secret::RngSecret;

fn main() {
    // Diagnostics go to stderr, filtered by RUST_LOG
    logging::init_logging();

    // Default presentation settings
    let config = Config::default();
    // Secrets come from an entropy-seeded generator, so every run differs
    let mut source = RngSecret::from_entropy();

    // Lock stdin and stdout once for the whole run
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    // Only I/O failures end up here; bad guesses are handled inside the game
    if let Err(e) = guess_number::run(&config, &mut console, &mut source) {
        // Log the failure, print it to standard error, then exit with status 1
        tracing::error!(error = %e, "game aborted");
        eprintln!("{e:#}");
        process::exit(1);
    }
}
