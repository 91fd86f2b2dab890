fn main() {
    if let Err(err) = smlfront_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
