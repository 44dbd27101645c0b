//! Entry point for the `teamfit` command-line interface.
#![forbid(unsafe_code)]

#[expect(
    clippy::print_stderr,
    reason = "fatal errors are reported on the terminal before exiting"
)]
fn main() {
    if let Err(err) = teamfit_cli::run() {
        eprintln!("teamfit: {err}");
        std::process::exit(1);
    }
}
