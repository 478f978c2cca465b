//! Short binary name (`sprout`) that forwards to the `sprout_notes` library.

fn main() {
    if let Err(err) = sprout_notes::entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
