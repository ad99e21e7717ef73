use alloc::{boxed::Box, string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen};

/// Text built from the pieces of the numeric grammar, so that generated
/// inputs land on every branch rather than almost always failing.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NumberText(pub String);

const WHITESPACE: &[&str] = &["", " ", "\t", "\n", "\u{3000}"];
const SPECIALS: &[&str] = &[
    "inf", "INF", "Infinity", "nan", "NaN", "qnan", "nans", "1.#INF", "1.#INF00", "1.#IND",
    "1.#QNAN", "nan(123)", "nan(0x2a)", "nan(\"017\")", "nan(0b11)",
];
const NOISE: &[&str] = &["", "", "", "x", ".", "e", "e+", "#", "()"];

fn pick<'a>(g: &mut Gen, options: &[&'a str]) -> &'a str {
    g.choose(options).copied().unwrap_or_default()
}

/// Up to `max` digits, drawn with a bias towards zero.
fn digits(g: &mut Gen, max: usize) -> String {
    let len = usize::arbitrary(g) % (max + 1);
    (0..len)
        .map(|_| {
            let d = u8::arbitrary(g) % 14;
            char::from(b'0' + if d >= 10 { 0 } else { d })
        })
        .collect()
}

impl Arbitrary for NumberText {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut text = String::new();
        text.push_str(pick(g, WHITESPACE));
        text.push_str(pick(g, &["", "", "+", "-"]));
        if u8::arbitrary(g) % 5 == 0 {
            text.push_str(pick(g, SPECIALS));
        } else {
            text.push_str(&digits(g, 10));
            if bool::arbitrary(g) {
                text.push('.');
                text.push_str(&digits(g, 10));
            }
            if u8::arbitrary(g) % 3 == 0 {
                text.push_str(pick(g, &["e", "E"]));
                text.push_str(pick(g, &["", "+", "-"]));
                text.push_str(&digits(g, 2));
            }
        }
        text.push_str(pick(g, WHITESPACE));
        text.push_str(pick(g, NOISE));
        NumberText(text)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let chars: Vec<char> = self.0.chars().collect();
        Box::new((0..chars.len()).rev().map(move |skip| {
            NumberText(
                chars
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, c)| *c)
                    .collect(),
            )
        }))
    }
}

pub(crate) fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}
