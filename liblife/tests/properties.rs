use liblife::{Board, Position};
use proptest::prelude::*;

prop_compose! {
    fn arb_board()(width in 1usize..12, height in 1usize..12)(
        alive in prop::collection::vec(any::<bool>(), width * height),
        width in Just(width),
        height in Just(height),
    ) -> Board {
        let mut board = Board::new(width, height).unwrap();
        for (index, alive) in alive.into_iter().enumerate() {
            let pos = Position::new(index % width, index / width);
            board.set_alive(pos, alive).unwrap();
        }
        board
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn step_preserves_dimensions(mut board in arb_board(), steps in 0usize..8) {
        let (width, height) = (board.width(), board.height());

        for _ in 0..steps {
            board.step();
        }

        prop_assert_eq!(board.width(), width);
        prop_assert_eq!(board.height(), height);
        prop_assert_eq!(board.rows().count(), height);
        prop_assert!(board.rows().all(|row| row.len() == width));
        prop_assert_eq!(board.generation(), steps as u64);
    }

    #[test]
    fn equal_boards_step_identically(board in arb_board()) {
        let mut a = board.clone();
        let mut b = Board::new(board.width(), board.height()).unwrap();
        for pos in board.alive_positions() {
            b.set_alive(pos, true).unwrap();
        }

        a.step();
        b.step();

        prop_assert_eq!(a, b);
    }

    #[test]
    fn neighbor_count_is_bounded(board in arb_board()) {
        for cell in board.cells() {
            let count = board.alive_neighbors(cell.pos()).unwrap();
            prop_assert!(count <= 8, "{} neighbors at {}", count, cell.pos());
        }
    }

    #[test]
    fn cells_know_their_position(mut board in arb_board()) {
        board.step();
        for (y, row) in board.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                prop_assert_eq!(cell.pos(), Position::new(x, y));
            }
        }
    }

    #[test]
    fn out_of_range_access_fails(board in arb_board(), dx in 0usize..4, dy in 0usize..4) {
        let beyond = Position::new(board.width() + dx, dy);
        let below = Position::new(dx, board.height() + dy);

        prop_assert!(board.cell(beyond).is_err());
        prop_assert!(board.cell(below).is_err());
        prop_assert!(board.alive_neighbors(beyond).is_err());
    }
}
