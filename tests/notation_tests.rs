//! Position and move codec integration tests.

use muhle_rules::core::{Board, Move, Player, Point, Position, COORDINATES};
use muhle_rules::error::RulesError;
use muhle_rules::notation::{decode_move, decode_position, encode_move, encode_position};
use muhle_rules::rules::MoveCommitted;
use muhle_rules::{GameOver, RulesConfig, Variant};

fn p(index: u8) -> Point {
    Point::new(index)
}

// =============================================================================
// Position Codec
// =============================================================================

/// Test the documented sample string.
#[test]
fn test_decode_documented_sample() {
    let position = decode_position("w:wa7,d7,g7:ba4,b4,c4:4").unwrap();

    assert_eq!(position.player, Player::White);
    assert_eq!(position.plies, 6);
    assert_eq!(position.board, Board::from_points(&[p(0), p(1), p(2)], &[p(9), p(10), p(11)]));
}

/// Test that the coordinate table matches point indices.
#[test]
fn test_coordinate_table() {
    let text = format!("w:w{}:b:1", COORDINATES.join(","));
    let position = decode_position(&text).unwrap();
    assert_eq!(position.board.count(Player::White), 24);
    assert_eq!(encode_position(&position), text);
    assert_eq!(p(12).to_string(), "e4");
}

/// Test that encoding is canonical and stable after one round trip.
#[test]
fn test_canonical_idempotence() {
    for text in [
        "b:bg1,a1,d2:wc5,a7:7",
        "w:w:b:1",
        "b:wg7,f6,e5:b:13",
        "w:bd1:wd7:40",
    ] {
        let once = encode_position(&decode_position(text).unwrap());
        let twice = encode_position(&decode_position(&once).unwrap());
        assert_eq!(once, twice, "{text}");
    }
    assert_eq!(
        encode_position(&decode_position("b:bg1,a1,d2:wc5,a7:7").unwrap()),
        "b:wa7,c5:bd2,a1,g1:7"
    );
}

/// Test that turn and side to move map onto the ply count.
#[test]
fn test_turn_arithmetic() {
    for (text, plies) in [("w:w:b:1", 0), ("b:w:b:1", 1), ("w:w:b:2", 2), ("b:w:b:10", 19)] {
        let position: Position = text.parse().unwrap();
        assert_eq!(position.plies, plies);
        assert_eq!(position.to_string(), text);
    }
}

/// Test that grammar violations are rejected whole.
#[test]
fn test_invalid_positions() {
    for text in ["w:wa7:b", "w:wa7:wb4:1", "w:wa7:ba7:1", "w:w:b:0", "n:w:b:1", "w:wz9:b:1"] {
        assert!(matches!(
            decode_position(text),
            Err(RulesError::InvalidPositionString { .. })
        ));
    }
}

// =============================================================================
// Move Codec
// =============================================================================

/// Test that every shape survives encoding and decoding.
#[test]
fn test_move_shapes() {
    let cases = [
        (Move::place(p(7)), "d5"),
        (Move::place_capture(p(7), p(12)), "d5xe4"),
        (Move::slide(p(4), p(7)), "d6-d5"),
        (Move::slide_capture(p(4), p(7), p(12)), "d6-d5xe4"),
    ];
    for (mv, text) in cases {
        assert_eq!(encode_move(&mv), text);
        assert_eq!(decode_move(text).unwrap(), mv);
    }
}

/// Test that malformed move text is rejected.
#[test]
fn test_invalid_moves() {
    for text in ["", "d4", "d5-", "d5x", "d5-e4-f4", "h1", "d5 "] {
        assert!(matches!(decode_move(text), Err(RulesError::InvalidMoveString { .. })));
    }
}

// =============================================================================
// Serde
// =============================================================================

/// Test that public value types survive a JSON round trip.
#[test]
fn test_serde_round_trip() {
    let position = decode_position("b:wa7,d7:bg1:3").unwrap();
    let json = serde_json::to_string(&position).unwrap();
    let back: Position = serde_json::from_str(&json).unwrap();
    assert_eq!(back, position);
    assert_eq!(back.plies, position.plies);

    let event = MoveCommitted {
        mv: Move::slide_capture(p(4), p(7), p(12)),
        mover: Player::Black,
        ply: 31,
        game_over: GameOver::WinnerBlack,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert_eq!(serde_json::from_str::<MoveCommitted>(&json).unwrap(), event);

    let config = RulesConfig::new(Variant::Twelve).with_fifty_move_plies(60);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(serde_json::from_str::<RulesConfig>(&json).unwrap(), config);
}

/// Test that out-of-range point indices are rejected by deserialization.
#[test]
fn test_serde_rejects_bad_point() {
    assert_eq!(serde_json::from_str::<Point>("23").unwrap(), p(23));
    assert!(serde_json::from_str::<Point>("24").is_err());
}

/// Test that deserialized configs go through the same threshold checks as the builders.
#[test]
fn test_serde_rejects_bad_draw_thresholds() {
    let json = r#"{"variant":"Nine","fifty_move_plies":100,"repetition_count":3}"#;
    assert_eq!(serde_json::from_str::<RulesConfig>(json).unwrap(), RulesConfig::default());

    let json = r#"{"variant":"Nine","fifty_move_plies":100,"repetition_count":1}"#;
    let err = serde_json::from_str::<RulesConfig>(json).unwrap_err();
    assert!(err.to_string().contains("repetition threshold"));

    let json = r#"{"variant":"Twelve","fifty_move_plies":0,"repetition_count":3}"#;
    let err = serde_json::from_str::<RulesConfig>(json).unwrap_err();
    assert!(err.to_string().contains("fifty-move threshold"));
}
