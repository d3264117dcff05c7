fn main() {
    if let Err(err) = pipepal::run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
