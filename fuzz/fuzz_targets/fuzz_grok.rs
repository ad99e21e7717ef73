#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use numgrok::{Grammar, GrammarOptions, Pattern};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

const HEADER: usize = 1; // flag byte

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r",
    "\u{00A0}".as_bytes(),
    "\u{2003}".as_bytes(),
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
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 1);
        let mut prefix = HEADER;
        prefix += append_whitespace(&mut data[prefix..], max_size - prefix);
        prefix += append_token(&mut data[prefix..], max_size - prefix);
        prefix += append_whitespace(&mut data[prefix..], max_size - prefix);
        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append up to 3 whitespace code points, never exceeding `limit` bytes.
fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        let mut written = 0;
        for _ in 0..rng.random_range(0..=3) {
            let w = WS_TABLE[rng.random_range(0..WS_TABLE.len())];
            if written + w.len() > limit {
                break;
            }
            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

fn append_token(buf: &mut [u8], limit: usize) -> usize {
    let token = loop {
        let bytes: Vec<u8> = with_rng(|rng| (0..64).map(|_| rng.random::<u8>()).collect());
        if let Ok(token) = NumberToken::arbitrary(&mut Unstructured::new(&bytes)) {
            break token.0;
        }
    };
    let len = token.len().min(limit);
    buf[..len].copy_from_slice(&token.as_bytes()[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

/// Number-shaped text: mostly near misses of the literal grammar.
#[derive(Debug)]
struct NumberToken(String);

impl<'a> Arbitrary<'a> for NumberToken {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        const SPECIALS: &[&str] = &[
            "inf", "Infinity", "nan", "NaNQ", "snan", "qnan", "1.#INF", "1.#IND", "1.#QNAN",
            "nan(0x2a)", "nan(\"17\")",
        ];
        let mut out = String::new();
        if u.arbitrary()? {
            out.push(*u.choose(&['+', '-'])?);
        }
        match u.choose_index(4)? {
            0 => out.push_str(u.choose(SPECIALS)?),
            1 => out.push_str(&u.arbitrary::<f64>()?.to_string()),
            2 => out.push_str(&u.arbitrary::<i64>()?.to_string()),
            _ => {
                let digits: u8 = u.int_in_range(0..=12)?;
                for _ in 0..digits {
                    out.push(*u.choose(&['0', '1', '7', '9', '.', 'e', 'x', 'b', 'f'])?);
                }
            }
        }
        if u.ratio(1, 4)? {
            out.push_str(u.arbitrary::<&str>()?);
        }
        Ok(NumberToken(out))
    }
}

fn grok(data: &[u8]) {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let grammar = Grammar::new(GrammarOptions {
        extended_spellings: flags & 1 != 0,
    });
    let text = String::from_utf8_lossy(rest);

    let parsed = grammar.grok_number(&text);
    assert!(text.ends_with(parsed.excess()));
    if parsed.is_parsed() {
        assert!(parsed.sign().is_some());
        assert_eq!(
            parsed.exponent_sign().is_some(),
            parsed.exponent_digits().is_some()
        );
    } else {
        assert_eq!(parsed.excess(), text.as_ref());
    }

    let m = |p| grammar.matches(p, &text);
    assert!(!(m(Pattern::Zero) && m(Pattern::NonZero)));
    assert!(!(m(Pattern::Even) && m(Pattern::Odd)));
    if m(Pattern::Numeric) {
        assert!(parsed.is_complete());
        assert!(m(Pattern::Number));
    }
}

fuzz_target!(|data: &[u8]| grok(data));
