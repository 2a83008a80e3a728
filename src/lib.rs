//! Crate root module declarations for the Plum Sparring chess opponent.
//!
//! Exposes the board model, move legality, the minimax search, the three
//! difficulty-tier engines and the FEN/rendering/match helpers so binaries,
//! benches and external callers can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_select;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
