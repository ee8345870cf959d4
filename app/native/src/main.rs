#![allow(clippy::multiple_crate_versions)]

//! Deskpaper command line interface.

fn main() {
    if let Err(err) = deskpaper_lib::cli::run() {
        eprintln!("deskpaper: {err}");
        std::process::exit(1);
    }
}
