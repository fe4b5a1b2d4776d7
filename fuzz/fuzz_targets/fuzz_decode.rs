#![no_main]
use libfuzzer_sys::fuzz_target;

use image_view::{ByteOrder, DecodeOutcome, DecodeRequest, Gradient};

fuzz_target!(|data: &[u8]| {
    // Must never panic, in either byte order
    for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
        let Ok(DecodeOutcome::Image(img)) =
            DecodeRequest::new(data).byte_order(order).decode(enough::Unstoppable)
        else {
            continue;
        };
        assert_eq!(img.samples().len(), img.width as usize * img.height as usize);
        for gradient in [Gradient::Grayscale, Gradient::Rainbow] {
            assert_eq!(img.to_rgb(gradient).pixels().len(), img.samples().len() * 3);
        }
    }
});
