use slogger::cli::run_cli;
use slogger::utils::logger::Logger;

fn main() {
    if let Err(e) = run_cli() {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
