use rustc_version::{version_meta, Channel};

fn detect_build_channel() {
    let channel = match version_meta().unwrap().channel {
        Channel::Stable => "CHANNEL_STABLE",
        Channel::Beta => "CHANNEL_BETA",
        Channel::Nightly => "CHANNEL_NIGHTLY",
        Channel::Dev => "CHANNEL_DEV",
    };

    println!("cargo:rustc-cfg={}", channel)
}

fn main() {
    println!("cargo:rerun-if-changed=venue-hours/build.rs");
    detect_build_channel();
}
