use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_parse() {
    assert_eq!("black".parse::<Stone>().ok(), Some(Stone::Black));
    assert_eq!(" White ".parse::<Stone>().ok(), Some(Stone::White));
    assert!("empty".parse::<Stone>().is_err());
    assert!("red".parse::<Stone>().is_err());
}

#[test]
fn test_pos_conversion() {
    let pos = CENTER;
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2, Pos::new(7, 7));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, 15));
    assert_eq!(Pos::checked(15, 0), None);
    assert_eq!(Pos::checked(3, 4), Some(Pos::new(3, 4)));
}

#[test]
fn test_pos_offset_and_distance() {
    let pos = Pos::new(1, 1);
    assert_eq!(pos.offset(-1, -1, 1), Some(Pos::new(0, 0)));
    assert_eq!(pos.offset(-1, -1, 2), None);
    assert_eq!(CENTER.center_distance(), 0);
    assert_eq!(Pos::new(0, 0).center_distance(), 14);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 14).to_index(), 14);
    assert_eq!(Pos::new(14, 0).to_index(), 210);
    assert_eq!(Pos::new(14, 14).to_index(), 224);
}

#[test]
fn test_with_stone_leaves_original_untouched() {
    let board = Board::new();
    let next = board.with_stone(CENTER, Stone::Black);
    assert!(board.is_board_empty());
    assert_eq!(next.get(CENTER), Stone::Black);
    assert_eq!(next.stone_count(), 1);
}

#[test]
fn test_stone_iterators() {
    let mut board = Board::new();
    board.place_stone(Pos::new(3, 3), Stone::Black);
    board.place_stone(Pos::new(1, 2), Stone::White);
    board.place_stone(Pos::new(3, 1), Stone::Black);

    let blacks: Vec<Pos> = board.stones(Stone::Black).collect();
    assert_eq!(blacks, vec![Pos::new(3, 1), Pos::new(3, 3)]);
    assert_eq!(board.occupied().count(), 3);
    assert_eq!(board.empty_cells().count(), TOTAL_CELLS - 3);
}

#[test]
fn test_board_json_round_trip() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 0), Stone::Black);
    board.place_stone(Pos::new(14, 13), Stone::White);

    let json = serde_json::to_value(board).unwrap();
    assert_eq!(json[0][0], "black");
    assert_eq!(json[14][13], "white");
    assert!(json[7][7].is_null());

    let back: Board = serde_json::from_value(json).unwrap();
    assert_eq!(back, board);
}

#[test]
fn test_board_json_rejects_bad_shape() {
    let short = serde_json::json!([[null, null]]);
    assert!(serde_json::from_value::<Board>(short).is_err());

    let mut rows = vec![vec![serde_json::Value::Null; 15]; 15];
    rows[4].pop();
    assert!(serde_json::from_value::<Board>(serde_json::json!(rows)).is_err());
}

#[test]
fn test_board_json_rejects_unknown_cell() {
    let mut rows = vec![vec![serde_json::Value::Null; 15]; 15];
    rows[2][2] = serde_json::json!("red");
    assert!(serde_json::from_value::<Board>(serde_json::json!(rows)).is_err());

    rows[2][2] = serde_json::json!(1);
    assert!(serde_json::from_value::<Board>(serde_json::json!(rows)).is_err());
}

#[test]
fn test_from_rows_error_kind() {
    let rows: Vec<Vec<Option<Stone>>> = vec![vec![None; 15]; 14];
    match Board::from_rows(&rows) {
        Err(crate::error::EngineError::InvalidBoard(msg)) => assert!(msg.contains("14")),
        other => panic!("expected InvalidBoard, got {other:?}"),
    }
}

#[test]
fn test_display_grid() {
    let mut board = Board::new();
    board.place_stone(CENTER, Stone::Black);
    let text = board.to_string();
    assert_eq!(text.lines().count(), 16);
    assert!(text.contains('X'));
}
