mod cli;
mod modes;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
