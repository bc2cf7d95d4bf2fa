//! Basic usage of the splitter API
//!
//! Run with: cargo run --example basic_usage

use hangul_splitter_core::{
    decompose_syllable, keep_only_hangul, split_hangul_blocks, HangulBlock, SplitOptions,
    SplitterConfig,
};

fn main() {
    let text = "괜찮아요? 값은 2,000원!";

    println!("Input: {text}");
    println!();

    // Default options: expand compound letters, no spaces
    println!(
        "Default:          {}",
        split_hangul_blocks(text, SplitOptions::default())
    );

    // Keep compound letters as they are
    let keep_compounds = SplitOptions::default().with_split_complex_letters(false);
    println!(
        "Keep compounds:   {}",
        split_hangul_blocks(text, keep_compounds)
    );

    // Space out the letters for speech output
    let spaced = SplitOptions::default().with_insert_spaces_between_letters(true);
    println!("Spaced:           {}", split_hangul_blocks(text, spaced));

    // Strip everything that is not Hangul first
    let hangul_only = keep_only_hangul(text, true);
    println!(
        "Hangul only:      {}",
        split_hangul_blocks(&hangul_only, spaced)
    );
    println!();

    // Per-character details
    for ch in "값ㅘA".chars() {
        let block = HangulBlock::of(ch).map_or("-", |block| block.name());
        match decompose_syllable(ch) {
            Some(syllable) => {
                let letters: String = syllable.letters().into_iter().collect();
                println!("{ch} U+{:04X} {block}: {letters}", ch as u32);
            }
            None => println!("{ch} U+{:04X} {block}", ch as u32),
        }
    }
    println!();

    // Persisted configuration
    println!("Default configuration:");
    println!("{}", SplitterConfig::template());
}
