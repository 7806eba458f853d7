use itertools::{iproduct, Itertools};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use utfconv::*;

const ITERATIONS: usize = 2_000;

fn random_units(rng: &mut SmallRng) -> Vec<u16> {
    let len = rng.gen_range(0..24);
    (0..len)
        .map(|_| match rng.gen_range(0..4) {
            0 => rng.gen_range(0x00..0x80),
            1 => rng.gen_range(0xD800..0xDC00),
            2 => rng.gen_range(0xDC00..0xE000),
            _ => rng.gen(),
        })
        .collect()
}

fn random_string(rng: &mut SmallRng) -> String {
    let len = rng.gen_range(0..24);
    (0..len)
        .map(|_| {
            if rng.gen_bool(0.5) {
                rng.gen_range('\0'..='\u{7F}')
            } else {
                rng.gen::<char>()
            }
        })
        .collect()
}

fn random_bytes(rng: &mut SmallRng) -> Vec<u8> {
    let len = rng.gen_range(0..24);
    (0..len)
        .map(|_| {
            if rng.gen_bool(0.3) {
                rng.gen_range(0x80..=0xBF)
            } else {
                rng.gen()
            }
        })
        .collect()
}

#[test]
fn decoded_length_matches_size() {
    let mut rng = SmallRng::seed_from_u64(0x16);

    for _ in 0..ITERATIONS {
        let units = random_units(&mut rng);
        let decoded = decode_utf16(&units);

        assert_eq!(decoded.len(), utf8_len(&units), "units {:04X?}", units);
        assert_eq!(
            decode_utf16_to_string(&units),
            String::from_utf16_lossy(&units),
            "units {:04X?}",
            units
        );
    }
}

#[test]
fn decode_into_exact_and_short_buffers() {
    let mut rng = SmallRng::seed_from_u64(0x8);

    for _ in 0..ITERATIONS {
        let units = random_units(&mut rng);
        let len = utf8_len(&units);

        let mut exact = vec![0; len];
        assert_eq!(decode_utf16_into(&mut exact, &units), Ok(len));
        assert_eq!(exact, decode_utf16(&units));

        if len > 0 {
            let mut short = vec![0; len - 1];
            let error = decode_utf16_into(&mut short, &units).unwrap_err();
            assert!(error.written() + error.required() > short.len());
            assert!(error.available() < error.required());
            assert_eq!(short[..error.written()], exact[..error.written()]);
        }
    }
}

#[test]
fn encoded_str_length_matches_size() {
    let mut rng = SmallRng::seed_from_u64(0x10);

    for _ in 0..ITERATIONS {
        let text = random_string(&mut rng);
        let len = utf16_len_of_str(&text);

        let mut dst = vec![0; len];
        assert_eq!(encode_str(&mut dst, &text), Ok(len));
        assert_eq!(dst, text.encode_utf16().collect_vec());
        assert_eq!(encode_str_to_vec(&text), dst);
    }
}

#[test]
fn encoded_utf8_length_matches_size() {
    let mut rng = SmallRng::seed_from_u64(0xFFFD);

    for _ in 0..ITERATIONS {
        let text = random_string(&mut rng);
        let len = utf16_len_of_utf8(text.as_bytes());
        assert_eq!(len, utf16_len_of_str(&text));

        let mut dst = vec![0; len];
        assert_eq!(encode_utf8(&mut dst, text.as_bytes()), Ok(len));
        assert_eq!(decode_utf16_to_string(&dst), text);
    }
}

#[test]
fn short_destination_is_reported() {
    let mut rng = SmallRng::seed_from_u64(0x10FFFF);

    for _ in 0..ITERATIONS {
        let text = random_string(&mut rng);
        let len = utf16_len_of_str(&text);
        if len == 0 {
            continue;
        }

        let mut dst = vec![0; len - 1];
        let error = encode_utf8(&mut dst, text.as_bytes()).unwrap_err();
        assert!(error.written() < len);
        assert_eq!(error.written() + error.available(), len - 1);
        assert_eq!(
            dst[..error.written()],
            text.encode_utf16().take(error.written()).collect_vec()
        );
    }
}

#[test]
fn malformed_utf8_matches_lossy_decoding() {
    let mut rng = SmallRng::seed_from_u64(0xEF_BF_BD);

    for _ in 0..ITERATIONS {
        let bytes = random_bytes(&mut rng);
        let lossy = String::from_utf8_lossy(&bytes);

        assert_eq!(Utf8Chars::new(&bytes).collect::<String>(), lossy, "bytes {:02X?}", bytes);
        assert_eq!(utf16_len_of_utf8(&bytes), lossy.encode_utf16().count());
        assert_eq!(encode_utf8_to_vec(&bytes), lossy.encode_utf16().collect_vec());
    }
}

#[test]
fn every_scalar_round_trips() {
    let mut units = [0; 2];

    for scalar in (0..=MAX_SCALAR).filter_map(char::from_u32) {
        let n = encode_scalar(&mut units, scalar as u32).unwrap();
        assert_eq!(n, scalar.len_utf16());
        assert_eq!(n, utf16_len_of_scalar(scalar as u32));

        let mut expected = [0; 4];
        assert_eq!(
            decode_utf16(&units[..n]),
            scalar.encode_utf8(&mut expected).as_bytes()
        );
    }
}

#[test]
fn invalid_runes_encode_to_replacement() {
    let invalid = (0xD800..0xE000)
        .chain([0x110000, 0x7FFF_FFFF, u32::MAX])
        .chain([-1i32, i32::MIN].map(|rune| rune as u32));

    for rune in invalid {
        let mut units = [0; 2];
        assert_eq!(encode_scalar(&mut units, rune), Ok(1));
        assert_eq!(units, [0xFFFD, 0]);
        assert_eq!(utf16_len_of_scalar(rune), 1);
    }
}

#[test]
fn surrogate_neighbourhoods() {
    let alphabet = [0x0041, 0xD7FF, 0xD800, 0xDBFF, 0xDC00, 0xDFFF, 0xE000, 0xFFFD];

    for (a, b, c) in iproduct!(alphabet, alphabet, alphabet) {
        let units = [a, b, c];
        let expected = String::from_utf16_lossy(&units);

        assert_eq!(decode_utf16_to_string(&units), expected, "units {:04X?}", units);
        assert_eq!(utf8_len(&units), expected.len());

        let consumed: usize = Utf16Sequences::new(&units).map(|s| s.unit_len()).sum();
        assert_eq!(consumed, units.len());

        let pairs = Utf16Sequences::new(&units)
            .filter(|s| s.class() == UnitClass::Pair)
            .count();
        let invalid = Utf16Sequences::new(&units)
            .filter(|s| s.class() == UnitClass::Invalid)
            .count();
        assert_eq!(
            expected.chars().filter(|c| *c as u32 >= 0x10000).count(),
            pairs
        );
        assert!(invalid <= expected.chars().filter(|c| *c == REPLACEMENT_CHARACTER).count());
    }
}
