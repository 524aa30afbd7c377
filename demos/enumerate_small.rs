//! Basic example: enumerate and convert every free tree on six vertices

use freetree::prelude::*;

fn main() {
    println!("=== Free trees on 6 vertices ===\n");

    for (index, seq) in free_trees(6).unwrap().enumerate() {
        println!("Tree {}: {}", index + 1, seq);
        let matrix = adjacency_matrix(&seq);
        for row in matrix.rows() {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            println!("  {}", cells.join(" "));
        }
        println!();
    }

    println!("--- Counts without enumeration ---");
    for n in 1..=16 {
        println!(
            "n = {:2}: {:>8} free, {:>10} rooted",
            n,
            count_free_trees(n).unwrap(),
            count_rooted_trees(n).unwrap()
        );
    }
}
