fn main() {
    if let Err(err) = sprout_notes::entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
