#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use pjson::{ErrorKind, ParserOptions};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Map, Value};

const HEADER: usize = 1; // option flags

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

// JSON whitespace first, then bytes the parser must reject as whitespace.
static WS_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r",
    b"\x0c",
    "\u{a0}".as_bytes(),
    "\u{2028}".as_bytes(),
    "\u{3000}".as_bytes(),
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x1F);

        let mut prefix = HEADER;
        let mut remaining_values = with_rng(|rng| rng.random_range(1..=2));
        while prefix < max_size && remaining_values > 0 {
            let limit = max_size - prefix;
            prefix += append_whitespace(&mut data[prefix..], limit);
            let limit = max_size - prefix;
            prefix += append_value(&mut data[prefix..], size, limit);
            remaining_values -= 1;
        }
        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Writes up to four whitespace sequences without exceeding `limit`, mostly
/// from the JSON set. Returns the number of bytes written.
fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }
        let n = rng.random_range(0..=limit.min(4));
        let mut written = 0;
        for _ in 0..n {
            let table = if rng.random_ratio(1, 16) {
                WS_TABLE
            } else {
                &WS_TABLE[..4]
            };
            let w = table[rng.random_range(0..table.len())];
            if written + w.len() > limit {
                break;
            }
            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..=size * 2).min(limit));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = serde_json::to_vec(&value.0).expect("Failed to serialize arbitrary value");
    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let value = match u.choose_index(22)? {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3 => Value::Number(i64::arbitrary(u)?.into()),
            4..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=21 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

fn options(flags: u8) -> ParserOptions {
    ParserOptions {
        allow_trailing_commas: flags & 1 != 0,
        allow_trailing_content: flags & 2 != 0,
        strict_literals: flags & 4 != 0,
        strict_numbers: flags & 8 != 0,
        unbounded_unicode_escapes: flags & 16 != 0,
        ..ParserOptions::default()
    }
}

fn parser(data: &[u8]) {
    let Some((&flags, text)) = data.split_first() else {
        return;
    };

    // Any input, any options: a value or an error, never a panic.
    let _ = pjson::parse_with_options(text, options(flags));

    // Whatever serde_json accepts, strict parsing accepts too, apart from
    // numbers outside i64/f64 and nesting serde_json counts differently.
    if serde_json::from_slice::<Value>(text).is_ok() {
        if let Err(err) = pjson::parse_with_options(text, ParserOptions::strict()) {
            assert!(
                matches!(err.kind(), ErrorKind::InvalidNumber | ErrorKind::NestingTooDeep),
                "serde_json accepted {:?} but strict parsing failed: {err}",
                String::from_utf8_lossy(text),
            );
        }
    }
}

fuzz_target!(|data: &[u8]| parser(data));
