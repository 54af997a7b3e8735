//! Example: cutting a rod both ways.
//!
//! Run with:
//! `cargo run --example rod_cutting`

use rodcut::{compare, Solution};

fn print_solution(label: &str, s: &Solution) {
    println!("  {label}:");
    println!("    max profit:     {}", s.max_profit);
    println!("    pieces:         {:?}", s.cuts);
    println!("    number of cuts: {}", s.number_of_cuts);
}

fn main() {
    let scenarios: [(&str, i64, Vec<i64>); 3] = [
        ("base case", 5, vec![2, 5, 7, 8, 10]),
        ("best left uncut", 3, vec![1, 3, 8]),
        ("unit pieces", 4, vec![3, 5, 6, 7]),
    ];

    for (name, length, prices) in scenarios {
        println!("Scenario: {name}");
        println!("  rod length: {length}");
        println!("  prices:     {prices:?}");

        match compare(length, &prices) {
            Ok(cmp) => {
                print_solution("top-down (memoized)", &cmp.top_down);
                print_solution("bottom-up (tabulated)", &cmp.bottom_up);
                if !cmp.profits_agree() {
                    eprintln!("  strategies disagree on the optimum");
                    std::process::exit(1);
                }
                if !cmp.cuts_agree() {
                    println!("  (different optimal decompositions at a tie)");
                }
            }
            Err(err) => {
                eprintln!("  invalid input: {err}");
                std::process::exit(2);
            }
        }
        println!();
    }
}
