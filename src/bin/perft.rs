//! Node-count enumeration from the standard starting position, with an
//! optional side-by-side run of the shakmaty reference implementation.
//!
//! The two engines agree only while castling, en passant, and promotion are
//! out of reach and no pawn is involved in a check, which from the starting
//! position holds through depth 4 (20 / 400 / 8902 / 197281).

use clap::Parser;
use shakmaty::{Chess, Position};

use arbitro::{Board, Color};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 4)]
    depth: u8,

    /// Also run shakmaty at the same depth and report both counts.
    #[arg(short, long)]
    compare: bool,
}

fn main() {
    let args = Args::parse();

    let board = Board::initial();
    let start = std::time::Instant::now();
    let nodes = perft(&board, Color::White, args.depth);
    let duration = start.elapsed();
    println!(
        "arbitro  perft({}) = {} nodes ({} ms)",
        args.depth,
        nodes,
        duration.as_millis()
    );

    if args.compare {
        let pos = Chess::default();
        let start = std::time::Instant::now();
        let reference = perft_shakmaty(&pos, args.depth);
        let duration = start.elapsed();
        println!(
            "shakmaty perft({}) = {} nodes ({} ms)",
            args.depth,
            reference,
            duration.as_millis()
        );
        if nodes == reference {
            println!("counts agree");
        } else {
            println!("counts DIVERGE (expected above depth 4: rule sets differ)");
        }
    }
}

fn perft(board: &Board, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    for piece in board.pieces(side) {
        for to in board.valid_moves(piece) {
            let mut next = board.clone();
            next.apply_move(piece.pos, to);
            nodes += perft(&next, side.opponent(), depth - 1);
        }
    }
    nodes
}

fn perft_shakmaty(pos: &Chess, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    for m in pos.legal_moves() {
        let mut new_pos = pos.clone();
        new_pos.play_unchecked(&m);
        nodes += perft_shakmaty(&new_pos, depth - 1);
    }
    nodes
}
