#![windows_subsystem = "windows"]

fn main() {
    extern crate dice_guess;

    if let Err(e) = dice_guess::desktop_main() {
        log::error!("{e:?}");
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}
