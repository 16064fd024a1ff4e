//! Basic example of using the cryptoquip engine

use std::collections::BTreeMap;

use cryptoquip_core::{Outcome, Puzzle, ShapeDict, Solver, SolverConfig};

fn main() {
    // A tiny cleartext dictionary; real runs load /usr/share/dict/words
    let dictionary = ShapeDict::build(
        ["the", "quick", "brown", "fox", "top", "cat", "dog", "deed", "noon"]
            .map(String::from),
    );
    println!(
        "Dictionary: {} shapes, {} words\n",
        dictionary.shape_count(),
        dictionary.word_count()
    );

    // The enciphered words, plus one hint: cipher 'x' decodes to 't'
    let puzzle = Puzzle::new(
        vec!["xlk".to_string()],
        BTreeMap::from([('x', 't')]),
    );

    println!("Solving...\n");
    let solver = Solver::with_config(SolverConfig::default());
    let report = solver.solve(&puzzle, &dictionary);

    for (cipher, clear) in report.mapping.iter() {
        println!("{cipher} -> {clear}");
    }

    for word in puzzle.words() {
        println!("{word} decodes to {}", report.mapping.decode(word));
    }

    match report.outcome {
        Outcome::Converged => println!("\nSolved in {} cycles", report.cycles),
        Outcome::Exhausted => println!("\nRan out of cycles ({} used)", report.cycles),
        Outcome::Contradiction => println!("\nPuzzle is unsolvable as given"),
    }
}
