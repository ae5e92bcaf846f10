use quickcheck::{Arbitrary, Gen};

use crate::codec::RawProperty;
use crate::point::MAX_COORDINATE;
use crate::{Color, GameInfo, Move, Node, Point};

/// A board size that passes validation.
#[derive(Clone, Copy, Debug)]
pub struct ValidSize(pub u8);

/// A whole or half point komi.
#[derive(Clone, Copy, Debug)]
pub struct ValidKomi(pub f64);

/// A node that encodes without error and decodes back to itself.
///
/// Placements are sorted black first, since that's the order they are written in.
#[derive(Clone, Debug)]
pub struct ArbitraryNode(pub Node);

impl Arbitrary for ValidSize {
    fn arbitrary(g: &mut Gen) -> Self {
        ValidSize(u8::arbitrary(g) % 25 + 1)
    }
}

impl Arbitrary for ValidKomi {
    fn arbitrary(g: &mut Gen) -> Self {
        let half_points = (u8::arbitrary(g) % 41) as i8 - 20;
        ValidKomi(f64::from(half_points) / 2.0)
    }
}

impl Arbitrary for Point {
    fn arbitrary(g: &mut Gen) -> Self {
        Point {
            x: u8::arbitrary(g) % MAX_COORDINATE,
            y: u8::arbitrary(g) % MAX_COORDINATE,
        }
    }
}

impl Arbitrary for Color {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Color::Unspecified, Color::Black, Color::White])
            .unwrap()
    }
}

fn stone_color(g: &mut Gen) -> Color {
    *g.choose(&[Color::Black, Color::White]).unwrap()
}

impl Arbitrary for ArbitraryNode {
    fn arbitrary(g: &mut Gen) -> Self {
        let game_info = GameInfo {
            size: if bool::arbitrary(g) {
                ValidSize::arbitrary(g).0
            } else {
                0
            },
            komi: Option::<ValidKomi>::arbitrary(g).map(|komi| komi.0),
            player: Color::arbitrary(g),
        };
        // A game info without any values set is not written at all
        let game_info = (game_info != GameInfo::default()).then_some(game_info);

        let mv = if bool::arbitrary(g) {
            let color = stone_color(g);
            let mv = match Option::<Point>::arbitrary(g) {
                Some(point) => Move::new(color, point),
                None => Move::pass(color),
            };
            mv.ok()
        } else {
            None
        };

        let mut placements: Vec<Move> = Vec::<Point>::arbitrary(g)
            .into_iter()
            .filter_map(|point| Move::new(stone_color(g), point).ok())
            .collect();
        // Stable, so the order within each color is kept
        placements.sort_by_key(|placement| placement.color() == Color::White);

        let mut unhandled = std::collections::BTreeMap::new();
        for prop in ["C", "GN", "PB", "PW"] {
            if bool::arbitrary(g) {
                let mut values = Vec::<String>::arbitrary(g);
                values.push(String::arbitrary(g));
                unhandled.insert(String::from(prop), values);
            }
        }

        ArbitraryNode(Node {
            game_info,
            mv,
            placements,
            unhandled,
        })
    }
}

/// Splits property text such as `AB[dd][pp]C[x\]y]` into raw properties,
/// unescaping the values.
pub fn split_properties(text: &str) -> Vec<RawProperty> {
    let mut props = Vec::new();
    let mut chars = text.chars().peekable();
    while chars.peek().is_some() {
        let mut prop = String::new();
        while let Some(c) = chars.next_if(|c| c.is_ascii_uppercase()) {
            prop.push(c);
        }
        assert!(!prop.is_empty(), "Expected a property code in {}", text);
        let mut values = Vec::new();
        while chars.next_if_eq(&'[').is_some() {
            let mut value = String::new();
            loop {
                match chars.next().expect("Unterminated property value") {
                    '\\' => value.push(chars.next().expect("Dangling escape")),
                    ']' => break,
                    c => value.push(c),
                }
            }
            values.push(value);
        }
        props.push(RawProperty { prop, values });
    }
    props
}
