//! Decoder and gradient properties against the public API.

use std::num::NonZeroU16;

use enough::Unstoppable;
use image_view::*;

const ASCII_PGM: &[u8] = include_bytes!("fixtures/16_bit_ascii.pgm");
const ASCII_PGM_NO_COMMENTS: &[u8] = include_bytes!("fixtures/16_bit_ascii_without_comments.pgm");

fn noise_samples(count: usize, max_value: u16) -> Vec<u16> {
    let mut state: u32 = 0xDEAD_BEEF;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state % (u32::from(max_value) + 1)) as u16
        })
        .collect()
}

fn p5(width: u32, height: u32, max_value: u16, samples: &[u16]) -> Vec<u8> {
    let mut out = format!("P5\n{width} {height}\n{max_value}\n").into_bytes();
    for s in samples {
        out.extend_from_slice(&s.to_be_bytes());
    }
    out
}

fn p2(width: u32, height: u32, max_value: u16, samples: &[u16]) -> Vec<u8> {
    let mut out = format!("P2\n{width} {height}\n{max_value}\n");
    for row in samples.chunks(width as usize) {
        let line: Vec<String> = row.iter().map(u16::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out.into_bytes()
}

fn decode_image(data: &[u8]) -> DecodedImage {
    match decode(data, Unstoppable).unwrap() {
        DecodeOutcome::Image(img) => img,
        DecodeOutcome::NotPgm(why) => panic!("expected an image, got {why:?}"),
    }
}

// ── NotPgm ───────────────────────────────────────────────────────────

#[test]
fn eight_bit_headers_are_not_pgm() {
    for max_value in [1u16, 2, 15, 100, 254, 255] {
        let data = p5(2, 2, max_value, &[0, 0]); // 1-byte samples: 4 bytes
        assert_eq!(
            decode(&data, Unstoppable).unwrap(),
            DecodeOutcome::NotPgm(NotPgm::EightBit { max_value }),
        );
        let data = p2(2, 2, max_value, &[0, 1, 0, 1]);
        assert!(matches!(
            decode(&data, Unstoppable).unwrap(),
            DecodeOutcome::NotPgm(NotPgm::EightBit { .. })
        ));
    }
}

#[test]
fn other_formats_are_not_pgm() {
    let cases: [&[u8]; 4] = [
        b"P6\n1 1\n65535\n\x00\x00\x00\x00\x00\x00",
        b"\x89PNG\r\n\x1a\n",
        b"BM",
        b"",
    ];
    for data in cases {
        assert_eq!(
            decode(data, Unstoppable).unwrap(),
            DecodeOutcome::NotPgm(NotPgm::UnrecognizedMagic)
        );
    }
}

// ── Successful decodes ───────────────────────────────────────────────

#[test]
fn binary_sample_count_matches_dimensions() {
    for (w, h) in [(1, 1), (3, 2), (20, 100), (7, 13)] {
        let samples = noise_samples(w as usize * h as usize, 65535);
        let img = decode_image(&p5(w, h, 65535, &samples));
        assert_eq!((img.width, img.height), (w, h));
        assert_eq!(img.samples().len(), (w * h) as usize);
        assert_eq!(img.samples(), &samples[..]);
        assert_eq!(img.variant, PgmVariant::Binary);
    }
}

#[test]
fn ascii_and_binary_encodings_agree() {
    let samples = noise_samples(5 * 4, 4095);
    let ascii = decode_image(&p2(5, 4, 4095, &samples));
    let binary = decode_image(&p5(5, 4, 4095, &samples));
    assert_eq!(ascii.samples(), binary.samples());
    assert_eq!(ascii.max_value, binary.max_value);
    assert_eq!(ascii.max_value.get(), 4095);
}

#[test]
fn little_endian_option_swaps_bytes() {
    let samples = [0x0102, 0xff00, 0x7777, 0x00ff];
    let data = p5(2, 2, 65535, &samples);

    let big = DecodeRequest::new(&data)
        .byte_order(ByteOrder::BigEndian)
        .decode(Unstoppable)
        .unwrap()
        .image()
        .unwrap();
    let little = DecodeRequest::new(&data)
        .byte_order(ByteOrder::LittleEndian)
        .decode(Unstoppable)
        .unwrap()
        .image()
        .unwrap();

    assert_eq!(big.samples(), &samples[..]);
    for (b, l) in big.samples().iter().zip(little.samples()) {
        assert_eq!(b.swap_bytes(), *l);
        let [hi, lo] = b.to_be_bytes();
        assert_eq!(b == l, hi == lo);
    }
}

#[test]
fn byte_order_does_not_affect_ascii() {
    let data = p2(2, 1, 65535, &[0x0102, 3]);
    let img = DecodeRequest::new(&data)
        .byte_order(ByteOrder::LittleEndian)
        .decode(Unstoppable)
        .unwrap()
        .image()
        .unwrap();
    assert_eq!(img.samples(), &[0x0102, 3]);
}

#[test]
fn trailing_bytes_are_ignored() {
    let samples = noise_samples(6, 1023);
    let clean = p5(3, 2, 1023, &samples);
    let mut padded = clean.clone();
    padded.extend_from_slice(b"\x00\xffjunk at the end\n");
    assert_eq!(decode_image(&clean), decode_image(&padded));

    let mut ascii = p2(3, 2, 1023, &samples);
    ascii.extend_from_slice(b"99 not-a-number\n");
    assert_eq!(decode_image(&ascii).samples(), &samples[..]);
}

#[test]
fn ascii_comments_after_max_value() {
    let cases: [&[u8]; 3] = [
        b"P2\n2 1\n65535 # max value\n0 65535\n",
        b"P2\n2 1\n65535\n# data follows\n0 65535\n",
        b"P2\r\n2 1\r\n65535\r\n# data\r\n0 65535\r\n",
    ];
    for data in cases {
        assert_eq!(decode_image(data).samples(), &[0, 65535], "{data:?}");
    }
}

#[test]
fn binary_comment_after_max_value() {
    let img = decode_image(b"P5\n1 1\n65535 # c\n\x01\x02");
    assert_eq!(img.samples(), &[0x0102]);
}

#[test]
fn binary_crlf_header() {
    let img = decode_image(b"P5\r\n2 1\r\n65535\r\n\x0a\x01\x0d\x02");
    assert_eq!(img.samples(), &[0x0a01, 0x0d02]);
}

// ── Failures ─────────────────────────────────────────────────────────

#[test]
fn truncated_binary_body_fails() {
    let samples = noise_samples(12, 65535);
    let data = p5(4, 3, 65535, &samples);
    for cut in 1..=24 {
        let result = decode(&data[..data.len() - cut], Unstoppable);
        assert!(
            matches!(result, Err(PgmError::UnexpectedEof)),
            "cut {cut}: {result:?}"
        );
    }
}

#[test]
fn truncated_ascii_body_fails() {
    assert!(matches!(
        decode(b"P2 2 2 65535\n1 2 3", Unstoppable),
        Err(PgmError::UnexpectedEof)
    ));
}

#[test]
fn non_numeric_ascii_sample_fails() {
    assert!(matches!(
        decode(b"P2 2 1 65535\n1 two\n", Unstoppable),
        Err(PgmError::InvalidData(_))
    ));
}

#[test]
fn zero_header_values_fail() {
    let cases: [&[u8]; 3] = [b"P5 0 2 65535\n", b"P5 2 0 65535\n", b"P2 2 2 0\n"];
    for data in cases {
        assert!(matches!(
            decode(data, Unstoppable),
            Err(PgmError::InvalidHeaderValue { .. })
        ));
    }
}

#[test]
fn limits_are_enforced_before_decoding() {
    let data = p5(20, 100, 65535, &noise_samples(2000, 65535));
    let limits = Limits {
        max_width: Some(10),
        ..Default::default()
    };
    assert!(matches!(
        DecodeRequest::new(&data).with_limits(&limits).decode(Unstoppable),
        Err(PgmError::LimitExceeded(_))
    ));

    let limits = Limits {
        max_memory_bytes: Some(3999),
        ..Default::default()
    };
    assert!(matches!(
        DecodeRequest::new(&data).with_limits(&limits).decode(Unstoppable),
        Err(PgmError::LimitExceeded(_))
    ));

    let limits = Limits {
        max_memory_bytes: Some(4000),
        ..Default::default()
    };
    assert!(DecodeRequest::new(&data).with_limits(&limits).decode(Unstoppable).is_ok());
}

#[test]
fn rgb_memory_limit() {
    // 20x100: 4000 bytes of samples, 6000 bytes of RGB.
    let data = p5(20, 100, 65535, &noise_samples(2000, 65535));
    let limits = Limits {
        max_memory_bytes: Some(5999),
        ..Default::default()
    };
    assert!(matches!(
        DecodeRequest::new(&data)
            .with_limits(&limits)
            .decode_rgb(Gradient::Rainbow, Unstoppable),
        Err(PgmError::LimitExceeded(_))
    ));

    let limits = Limits {
        max_memory_bytes: Some(6000),
        ..Default::default()
    };
    let rgb = DecodeRequest::new(&data)
        .with_limits(&limits)
        .decode_rgb(Gradient::Rainbow, Unstoppable)
        .unwrap()
        .unwrap();
    assert_eq!(rgb.pixels().len(), 6000);
}

#[test]
fn header_parse_skips_body() {
    let header = PgmHeader::parse(b"P5\n# c\n640 480\n65535\n").unwrap().unwrap();
    assert_eq!(header.variant, PgmVariant::Binary);
    assert_eq!((header.width, header.height, header.max_value), (640, 480, 65535));
    assert!(header.is_16bit());
}

// ── Gradient mapping ─────────────────────────────────────────────────

#[test]
fn gradient_oracles() {
    let two = NonZeroU16::new(2).unwrap();
    assert_eq!(map_to_rgb(&[1], two, Gradient::Grayscale), vec![127, 127, 127]);
    assert_eq!(map_to_rgb(&[0], two, Gradient::Rainbow), vec![0, 0, 255]);
    assert_eq!(map_to_rgb(&[1], two, Gradient::Rainbow), vec![0, 255, 0]);
    assert_eq!(map_to_rgb(&[2], two, Gradient::Rainbow), vec![255, 0, 0]);
}

#[test]
fn rgb_buffer_is_three_bytes_per_pixel() {
    let img = decode_image(&p5(20, 100, 65535, &noise_samples(2000, 65535)));
    for gradient in [Gradient::Grayscale, Gradient::Rainbow] {
        let rgb = img.to_rgb(gradient);
        assert_eq!((rgb.width, rgb.height), (20, 100));
        assert_eq!(rgb.pixels().len(), 3 * 20 * 100);
    }
}

#[test]
fn comments_do_not_change_output() {
    let with = decode_image(ASCII_PGM);
    let without = decode_image(ASCII_PGM_NO_COMMENTS);
    assert_eq!((with.width, with.height), (24, 7));
    for gradient in [Gradient::Grayscale, Gradient::Rainbow] {
        assert_eq!(
            with.to_rgb(gradient).pixels(),
            without.to_rgb(gradient).pixels()
        );
    }
}

#[test]
fn fixture_grayscale_levels() {
    let rgb = DecodeRequest::new(ASCII_PGM)
        .decode_rgb(Gradient::Grayscale, Unstoppable)
        .unwrap()
        .unwrap();
    // Row 1: the four letters at 13107, 30583, 48059 and 65535.
    let row = rgb.row(1).unwrap();
    let level = |x: usize| row[x * 3];
    assert_eq!([level(1), level(7), level(13), level(19)], [51, 119, 187, 255]);
    assert_eq!(level(0), 0);
}
