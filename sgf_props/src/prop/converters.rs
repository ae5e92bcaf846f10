use super::{
    Converter, Scope, BLACK_MOVE, BLACK_PLACEMENT, KOMI, PLAYER, SIZE, WHITE_MOVE,
    WHITE_PLACEMENT,
};
use crate::{Color, Move, Node, PropertyError};

pub const MIN_BOARD_SIZE: u8 = 1;
pub const MAX_BOARD_SIZE: u8 = 25;

/// All the property converters, in the order their properties are written.
pub static CONVERTERS: [Converter; 5] = [
    Converter::new(&[SIZE], Scope::RootOnly, decode_size, encode_size),
    Converter::new(
        &[BLACK_PLACEMENT, WHITE_PLACEMENT],
        Scope::AnyNode,
        decode_placements,
        encode_placements,
    ),
    Converter::new(
        &[BLACK_MOVE, WHITE_MOVE],
        Scope::AnyNode,
        decode_move,
        encode_move,
    ),
    Converter::new(&[KOMI], Scope::RootOnly, decode_komi, encode_komi),
    Converter::new(&[PLAYER], Scope::RootOnly, decode_player, encode_player),
];

fn single_value<'a>(prop: &str, values: &'a [String]) -> Result<&'a str, PropertyError> {
    match values {
        [value] => Ok(value.as_str()),
        _ => Err(PropertyError::Arity {
            prop: String::from(prop),
            expected: "exactly 1",
            found: values.len(),
        }),
    }
}

fn decode_size(node: &mut Node, prop: &str, values: &[String]) -> Result<(), PropertyError> {
    let value = single_value(prop, values)?;
    let size: i64 = value.parse().map_err(|err| PropertyError::NotAnInteger {
        prop: String::from(prop),
        value: String::from(value),
        err,
    })?;
    if size < i64::from(MIN_BOARD_SIZE) || size > i64::from(MAX_BOARD_SIZE) {
        return Err(PropertyError::SizeOutOfRange(size));
    }
    // Can't truncate, the range was checked above
    node.game_info_mut().size = size as u8;
    Ok(())
}

fn encode_size(node: &Node) -> Result<String, PropertyError> {
    let Some(game_info) = &node.game_info else {
        return Ok(String::new());
    };
    match game_info.size {
        // Unspecified
        0 => Ok(String::new()),
        size @ MIN_BOARD_SIZE..=MAX_BOARD_SIZE => Ok(format!("{}[{}]", SIZE, size)),
        size => Err(PropertyError::SizeOutOfRange(i64::from(size))),
    }
}

fn decode_placements(
    node: &mut Node,
    prop: &str,
    values: &[String],
) -> Result<(), PropertyError> {
    let color = Color::from_prop(prop)?;
    let mut placements = Vec::with_capacity(values.len());
    for value in values {
        placements.extend(Move::list_from_sgf_point(color, value)?);
    }
    node.placements.extend(placements);
    Ok(())
}

fn encode_placements(node: &Node) -> Result<String, PropertyError> {
    let mut black = String::new();
    let mut white = String::new();
    for placement in &node.placements {
        let point = placement.point().ok_or(PropertyError::PassPlacement)?;
        let out = match placement.color() {
            Color::White => &mut white,
            _ => &mut black,
        };
        out.push('[');
        out.push_str(&point.to_sgf()?);
        out.push(']');
    }
    let mut result = String::new();
    if !black.is_empty() {
        result += BLACK_PLACEMENT;
        result += &black;
    }
    if !white.is_empty() {
        result += WHITE_PLACEMENT;
        result += &white;
    }
    Ok(result)
}

fn decode_move(node: &mut Node, prop: &str, values: &[String]) -> Result<(), PropertyError> {
    let color = Color::from_prop(prop)?;
    if node.mv.is_some() {
        return Err(PropertyError::DuplicateMove);
    }
    let value = match values {
        // No value at all is a pass, just like an empty one
        [] => "",
        [value] => value.as_str(),
        _ => {
            return Err(PropertyError::Arity {
                prop: String::from(prop),
                expected: "zero or 1",
                found: values.len(),
            })
        }
    };
    node.mv = Some(Move::from_sgf_point(color, value)?);
    Ok(())
}

fn encode_move(node: &Node) -> Result<String, PropertyError> {
    let Some(mv) = &node.mv else {
        return Ok(String::new());
    };
    let prop = match mv.color() {
        Color::White => WHITE_MOVE,
        _ => BLACK_MOVE,
    };
    match mv.point() {
        // The empty brackets are needed, omitting the property would lose the pass
        None => Ok(format!("{}[]", prop)),
        Some(point) => Ok(format!("{}[{}]", prop, point.to_sgf()?)),
    }
}

/// Komi is always a whole or a half point.
fn is_valid_komi(komi: f64) -> bool {
    let fractional_part = komi.fract().abs();
    fractional_part == 0.0 || fractional_part == 0.5
}

fn decode_komi(node: &mut Node, prop: &str, values: &[String]) -> Result<(), PropertyError> {
    let value = single_value(prop, values)?;
    let komi: f64 = value.parse().map_err(|err| PropertyError::NotANumber {
        prop: String::from(prop),
        value: String::from(value),
        err,
    })?;
    if !is_valid_komi(komi) {
        return Err(PropertyError::InvalidKomi(komi));
    }
    node.game_info_mut().komi = Some(komi);
    Ok(())
}

fn encode_komi(node: &Node) -> Result<String, PropertyError> {
    let Some(komi) = node.game_info.as_ref().and_then(|game_info| game_info.komi) else {
        return Ok(String::new());
    };
    if !is_valid_komi(komi) {
        return Err(PropertyError::InvalidKomi(komi));
    }
    Ok(format!("{}[{:.1}]", KOMI, komi))
}

fn decode_player(node: &mut Node, prop: &str, values: &[String]) -> Result<(), PropertyError> {
    let value = single_value(prop, values)?;
    let player = match value {
        "B" | "b" => Color::Black,
        "W" | "w" => Color::White,
        _ => return Err(PropertyError::InvalidPlayer(String::from(value))),
    };
    node.game_info_mut().player = player;
    Ok(())
}

fn encode_player(node: &Node) -> Result<String, PropertyError> {
    let letter = node
        .game_info
        .as_ref()
        .and_then(|game_info| game_info.player.sgf_letter());
    match letter {
        Some(letter) => Ok(format!("{}[{}]", PLAYER, letter)),
        None => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::{ValidKomi, ValidSize};
    use crate::{ErrorKind, GameInfo, Point};

    fn values(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| String::from(*s)).collect()
    }

    fn decode(node: &mut Node, prop: &str, raw: &[&str]) -> Result<(), PropertyError> {
        let converter = CONVERTERS
            .iter()
            .find(|conv| conv.props.iter().any(|p| *p == prop))
            .unwrap();
        converter.decode(node, prop, &values(raw))
    }

    fn encode(node: &Node, prop: &str) -> Result<String, PropertyError> {
        let converter = CONVERTERS
            .iter()
            .find(|conv| conv.props.iter().any(|p| *p == prop))
            .unwrap();
        converter.encode(node)
    }

    quickcheck! {
        fn size_roundtrip(size: ValidSize) -> bool {
            let mut node = Node::new();
            decode(&mut node, SIZE, &[size.0.to_string().as_str()]).unwrap();
            encode(&node, SIZE).unwrap() == format!("SZ[{}]", size.0)
        }

        fn komi_roundtrip(komi: ValidKomi) -> bool {
            let mut node = Node::new();
            let rendered = format!("{:.1}", komi.0);
            decode(&mut node, KOMI, &[rendered.as_str()]).unwrap();
            encode(&node, KOMI).unwrap() == format!("KM[{}]", rendered)
        }
    }

    #[test]
    fn size_out_of_range() {
        for raw in ["0", "26", "-1"] {
            let err = decode(&mut Node::new(), SIZE, &[raw]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DomainRange, "{}", raw);
        }
    }

    #[test]
    fn size_not_an_integer() {
        let mut node = Node::new();
        let err = decode(&mut node, SIZE, &["abc"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(node, Node::new());
    }

    #[test]
    fn size_arity() {
        assert_eq!(
            decode(&mut Node::new(), SIZE, &[]).unwrap_err().kind(),
            ErrorKind::Arity
        );
        assert_eq!(
            decode(&mut Node::new(), SIZE, &["9", "13"]).unwrap_err().kind(),
            ErrorKind::Arity
        );
    }

    #[test]
    fn size_encode() {
        let mut node = Node::new();
        assert_eq!(encode(&node, SIZE).unwrap(), "");
        node.game_info = Some(GameInfo::default());
        assert_eq!(encode(&node, SIZE).unwrap(), "");
        node.game_info_mut().size = 30;
        assert_eq!(
            encode(&node, SIZE).unwrap_err(),
            PropertyError::SizeOutOfRange(30)
        );
    }

    #[test]
    fn placements_are_grouped_by_color() {
        let mut node = Node::new();
        decode(&mut node, WHITE_PLACEMENT, &["cc"]).unwrap();
        decode(&mut node, BLACK_PLACEMENT, &["dd", "pp"]).unwrap();
        assert_eq!(node.placements.len(), 3);
        assert_eq!(
            encode(&node, BLACK_PLACEMENT).unwrap(),
            "AB[dd][pp]AW[cc]"
        );
    }

    #[test]
    fn placements_accumulate() {
        let mut node = Node::new();
        decode(&mut node, BLACK_PLACEMENT, &["dd"]).unwrap();
        decode(&mut node, BLACK_PLACEMENT, &["aa:ab"]).unwrap();
        assert_eq!(encode(&node, BLACK_PLACEMENT).unwrap(), "AB[dd][aa][ab]");
        assert_eq!(encode(&Node::new(), WHITE_PLACEMENT).unwrap(), "");
    }

    #[test]
    fn bad_placement_leaves_node_unchanged() {
        let mut node = Node::new();
        let err = decode(&mut node, WHITE_PLACEMENT, &["cc", "c"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert!(node.placements.is_empty());
    }

    #[test]
    fn placement_that_cannot_be_written() {
        let mut node = Node::new();
        node.placements
            .push(Move::new(Color::Black, Point::new(60, 1)).unwrap());
        assert_eq!(encode(&node, BLACK_PLACEMENT).unwrap_err().kind(), ErrorKind::Syntax);
        node.placements = vec![Move::pass(Color::White).unwrap()];
        assert_eq!(
            encode(&node, WHITE_PLACEMENT).unwrap_err(),
            PropertyError::PassPlacement
        );
    }

    #[test]
    fn pass_then_second_move() {
        let mut node = Node::new();
        decode(&mut node, BLACK_MOVE, &[""]).unwrap();
        let mv = node.mv.unwrap();
        assert!(mv.is_pass());
        assert_eq!(mv.color(), Color::Black);
        assert_eq!(encode(&node, BLACK_MOVE).unwrap(), "B[]");

        let err = decode(&mut node, WHITE_MOVE, &["dp"]).unwrap_err();
        assert_eq!(err, PropertyError::DuplicateMove);
        assert_eq!(err.kind(), ErrorKind::StructuralConflict);
        assert_eq!(node.mv, Some(mv));
    }

    #[test]
    fn move_without_values_is_pass() {
        let mut node = Node::new();
        decode(&mut node, WHITE_MOVE, &[]).unwrap();
        assert_eq!(encode(&node, WHITE_MOVE).unwrap(), "W[]");
    }

    #[test]
    fn move_with_point() {
        let mut node = Node::new();
        decode(&mut node, WHITE_MOVE, &["dp"]).unwrap();
        assert_eq!(node.mv.unwrap().point(), Some(Point::new(3, 15)));
        assert_eq!(encode(&node, BLACK_MOVE).unwrap(), "W[dp]");
    }

    #[test]
    fn move_failures() {
        let err = decode(&mut Node::new(), BLACK_MOVE, &["dp", "dd"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arity);
        let err = decode(&mut Node::new(), BLACK_MOVE, &["d"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(encode(&Node::new(), BLACK_MOVE).unwrap(), "");
    }

    #[test]
    fn komi_values() {
        let mut node = Node::new();
        decode(&mut node, KOMI, &["6.5"]).unwrap();
        assert_eq!(encode(&node, KOMI).unwrap(), "KM[6.5]");
        decode(&mut node, KOMI, &["6"]).unwrap();
        assert_eq!(encode(&node, KOMI).unwrap(), "KM[6.0]");
        decode(&mut node, KOMI, &["-0.5"]).unwrap();
        assert_eq!(encode(&node, KOMI).unwrap(), "KM[-0.5]");
    }

    #[test]
    fn zero_komi_is_not_unset() {
        let mut node = Node::new();
        decode(&mut node, KOMI, &["0"]).unwrap();
        assert_eq!(node.game_info.as_ref().unwrap().komi, Some(0.0));
        assert_eq!(encode(&node, KOMI).unwrap(), "KM[0.0]");
    }

    #[test]
    fn komi_failures() {
        let err = decode(&mut Node::new(), KOMI, &["6.3"]).unwrap_err();
        assert_eq!(err, PropertyError::InvalidKomi(6.3));
        let err = decode(&mut Node::new(), KOMI, &["six"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        let err = decode(&mut Node::new(), KOMI, &["NaN"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DomainRange);
        let err = decode(&mut Node::new(), KOMI, &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arity);

        let mut node = Node::new();
        node.game_info_mut().komi = Some(0.25);
        assert_eq!(encode(&node, KOMI).unwrap_err(), PropertyError::InvalidKomi(0.25));
    }

    #[test]
    fn player_is_case_insensitive() {
        let mut node = Node::new();
        decode(&mut node, PLAYER, &["w"]).unwrap();
        assert_eq!(node.game_info.as_ref().unwrap().player, Color::White);
        assert_eq!(encode(&node, PLAYER).unwrap(), "PL[W]");
        decode(&mut node, PLAYER, &["B"]).unwrap();
        assert_eq!(encode(&node, PLAYER).unwrap(), "PL[B]");
    }

    #[test]
    fn player_failures() {
        let err = decode(&mut Node::new(), PLAYER, &["x"]).unwrap_err();
        assert_eq!(err, PropertyError::InvalidPlayer(String::from("x")));
        assert!(err.to_string().contains("'x'"));
        let err = decode(&mut Node::new(), PLAYER, &["B", "W"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arity);
    }

    #[test]
    fn root_properties_without_game_info() {
        let node = Node::new();
        for conv in CONVERTERS.iter().filter(|conv| conv.scope == Scope::RootOnly) {
            assert_eq!(conv.encode(&node).unwrap(), "");
        }
        let mut node = Node::new();
        node.game_info = Some(GameInfo::default());
        for prop in [SIZE, KOMI, PLAYER] {
            assert_eq!(encode(&node, prop).unwrap(), "");
        }
    }
}
