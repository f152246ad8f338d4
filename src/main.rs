//! Example binary for the File Split Engine

use anyhow::Result;
use file_split_engine::{fallback_analysis, ContentSplitter, SplitOptions, SplitStrategy};

fn main() -> Result<()> {
    println!("File Split Engine v{}", file_split_engine::VERSION);

    let content = "alpha\nbravo\ncharlie\ndelta\necho\nfoxtrot\n";
    let options = SplitOptions {
        create_index: true,
        ..Default::default()
    };

    let splitter = ContentSplitter::new();
    let result = splitter.split(content, "phonetic.txt", &SplitStrategy::Lines(2), &options);

    println!(
        "Split {} bytes into {} parts (balance score {:.1})",
        content.len(),
        result.total_parts,
        result.stats.balance_score
    );

    for part in &result.parts {
        if part.is_index_manifest {
            println!("--- manifest: {} ---\n{}", part.filename, part.content);
        } else {
            println!(
                "{}: {:?} (bytes {}-{}, lines {}-{})",
                part.filename, part.content, part.start_byte, part.end_byte, part.start_line, part.end_line
            );
        }
    }

    println!(
        "Fallback analysis: {}",
        serde_json::to_string_pretty(&fallback_analysis(&result))?
    );

    Ok(())
}
