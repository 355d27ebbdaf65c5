//! Text output formatter

pub fn output_text(leaves: &[String]) {
    for leaf in leaves {
        println!("{}", leaf);
    }
}
