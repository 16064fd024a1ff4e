//! Human-readable solver output.

use cryptoquip_core::{Outcome, Puzzle, SolveReport};

const WRAP_COLUMN: usize = 72;

pub fn preamble(puzzle: &Puzzle) {
    for (cipher, clear) in puzzle.hints() {
        println!("Hint: {cipher} = {clear}");
    }
    println!("{} total cipher words", puzzle.words().len());
    println!("{} unique cipher words", puzzle.unique_words().count());
    println!("{} total cipher letters", puzzle.cipher_letters().len());
    println!();
}

pub fn report(puzzle: &Puzzle, report: &SolveReport) {
    for snap in &report.snapshots {
        println!("---cycle {}---", snap.cycle);
        println!(
            "dictionary: {} shapes, {} words",
            snap.dictionary.shapes, snap.dictionary.words
        );
        for (cipher, candidates) in &snap.candidates {
            let letters: Vec<String> = candidates.iter().map(char::to_string).collect();
            println!(
                "cipher letter {cipher} ({}): {}",
                candidates.len(),
                letters.join(" ")
            );
        }
        println!("{} letters solved", snap.solved.len());
        println!();
    }

    solved_letter_table(puzzle, report);
    println!();
    println!("Solved puzzle:");
    solved_words(puzzle, report);

    match report.outcome {
        Outcome::Converged => println!("Fully solved in {} cycles.", report.cycles),
        Outcome::Exhausted => println!(
            "Partially solved: {} of {} letters after {} cycles.",
            report.mapping.len(),
            puzzle.cipher_letters().len(),
            report.cycles
        ),
        Outcome::Contradiction => println!("Contradiction: puzzle unsolvable as given."),
    }

    if !report.diagnostics.is_empty() {
        println!();
        println!("Diagnostics:");
        for d in &report.diagnostics {
            println!("  {d}");
        }
    }
}

/// Two aligned rows: cipher letters over their solutions, `?` where
/// unsolved.
fn solved_letter_table(puzzle: &Puzzle, report: &SolveReport) {
    println!("Solved letters:");
    let cipher_row: Vec<String> = puzzle
        .cipher_letters()
        .iter()
        .map(char::to_string)
        .collect();
    let clear_row: Vec<String> = puzzle
        .cipher_letters()
        .iter()
        .map(|&c| report.mapping.get(c).unwrap_or('?').to_string())
        .collect();
    println!("{}", cipher_row.join(" "));
    println!("{}", clear_row.join(" "));
}

/// The puzzle in reading order, cipher line over decoded line, wrapped.
fn solved_words(puzzle: &Puzzle, report: &SolveReport) {
    let mut cipher_line = String::new();
    let mut clear_line = String::new();

    for word in puzzle.words() {
        if !cipher_line.is_empty() && cipher_line.len() + 1 + word.len() > WRAP_COLUMN {
            println!("{cipher_line}");
            println!("{clear_line}");
            println!();
            cipher_line.clear();
            clear_line.clear();
        }
        if !cipher_line.is_empty() {
            cipher_line.push(' ');
            clear_line.push(' ');
        }
        cipher_line.push_str(word);
        clear_line.push_str(&report.mapping.decode(word));
    }

    if !cipher_line.is_empty() {
        println!("{cipher_line}");
        println!("{clear_line}");
        println!();
    }
}
