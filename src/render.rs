//! Text rendering of a board for the terminal.

use jeopardy_core::{Board, Clue, Coord, RevealState};

const HIDDEN: char = '?';
const QUESTION: char = '○';
const ANSWER: char = '●';

/// Get the marker for a reveal state.
fn state_symbol(state: RevealState) -> char {
    match state {
        RevealState::Hidden => HIDDEN,
        RevealState::QuestionShown => QUESTION,
        RevealState::AnswerShown => ANSWER,
    }
}

/// Render a board as one branch per category, clues addressed by cell id.
///
/// Example output:
/// ```text
/// [0] Science
/// ├── 0-0 ?
/// ├── 0-1 ○ What is H2O?
/// └── 0-2 ● Water
/// ```
pub fn render_board(board: &Board) -> String {
    let mut output = String::new();
    for (i, category) in board.categories().iter().enumerate() {
        output.push_str(&format!("[{}] {}\n", i, category.title));
        for (j, clue) in category.clues.iter().enumerate() {
            let is_last = j == category.clues.len() - 1;
            render_clue(&mut output, Coord::new(i, j), clue, is_last);
        }
    }
    output
}

fn render_clue(output: &mut String, coord: Coord, clue: &Clue, is_last: bool) {
    let branch = if is_last { "└── " } else { "├── " };
    output.push_str(branch);
    output.push_str(&coord.to_string());
    output.push(' ');
    output.push(state_symbol(clue.reveal_state()));
    if let Some(text) = clue.visible_text() {
        output.push(' ');
        output.push_str(text);
    }
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use jeopardy_core::Category;

    fn board() -> Board {
        Board::new(vec![
            Category::new(
                "Science",
                vec![
                    Clue::new("Frozen water", "Ice"),
                    Clue::new("What is H2O?", "Water"),
                    Clue::new("Closest star", "The Sun"),
                ],
            ),
            Category::new(
                "Math",
                vec![
                    Clue::new("2+2", "4"),
                    Clue::new("1+1", "2"),
                    Clue::new("3*3", "9"),
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_fresh_board() {
        let output = render_board(&board());
        let expected = "[0] Science\n├── 0-0 ?\n├── 0-1 ?\n└── 0-2 ?\n[1] Math\n├── 1-0 ?\n├── 1-1 ?\n└── 1-2 ?\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_revealed_cells() {
        let mut board = board();
        board.reveal(Coord::new(0, 1)).unwrap();
        board.reveal(Coord::new(0, 2)).unwrap();
        board.reveal(Coord::new(0, 2)).unwrap();

        let output = render_board(&board);
        assert!(output.starts_with(
            "[0] Science\n├── 0-0 ?\n├── 0-1 ○ What is H2O?\n└── 0-2 ● The Sun\n"
        ));
    }

    #[test]
    fn test_empty_board() {
        assert_eq!(render_board(&Board::new(vec![]).unwrap()), "");
    }
}
