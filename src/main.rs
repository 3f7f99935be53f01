fn main() {
    if let Err(err) = hillchart::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
