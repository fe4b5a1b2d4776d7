#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // P5 16-bit 2x2
    let p5 = b"P5\n2 2\n65535\n\x00\x00\x40\x00\x80\x00\xff\xff";
    fs::write(format!("{dir}/p5_2x2.pgm"), p5).unwrap();

    // P2 16-bit 3x1 with comments
    let p2 = b"P2\n# comment\n3 1 # w h\n4095\n0 2048 4095\n";
    fs::write(format!("{dir}/p2_3x1.pgm"), p2).unwrap();

    // 8-bit PGM, deferred to the generic loader
    let p5_8bit = b"P5\n3 2\n255\n\x00\x40\x80\xc0\xff\x64";
    fs::write(format!("{dir}/p5_8bit_3x2.pgm"), p5_8bit).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p5.bin"), b"P5").unwrap();
    fs::write(format!("{dir}/p5_short.bin"), b"P5 4 4 65535\n\x00\x01").unwrap();
    fs::write(format!("{dir}/p2_bad_token.bin"), b"P2 2 1 1000\n1 x\n").unwrap();

    println!("Generated seed corpus in {dir}/");
}
