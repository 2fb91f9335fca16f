// Page logic is shared with native unit tests; only the wasm build drives it.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod carousel;
mod content;
mod counter;
mod modal;
mod motion;
mod skills;
mod theme;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
