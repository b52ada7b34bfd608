fn main() {
    write_git_hash();
    slint_build::compile("ui/appwindow.slint").unwrap();
}

fn write_git_hash() {
    println!("cargo:rerun-if-changed=../.git/HEAD");

    if let Ok(hash) = duct::cmd!("git", "rev-parse", "--short", "HEAD")
        .stderr_null()
        .unchecked()
        .read()
    {
        let hash = hash.trim();
        if !hash.is_empty() {
            println!("cargo:rustc-env=DICE_GUESS_GIT_HASH={hash}");
        }
    }
}
