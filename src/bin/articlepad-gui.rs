#![cfg(feature = "gui")]
//! Desktop GUI entrypoint.

fn main() {
    if let Err(err) = articlepad::gui::run() {
        eprintln!("articlepad gui failed: {}", err);
        std::process::exit(1);
    }
}
