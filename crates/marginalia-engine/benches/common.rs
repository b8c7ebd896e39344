// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_journal_content(size: usize) -> String {
    let base = "## Section\n\nParagraph with **some** content and a note.^[With __its own__ body.]\nIt continues on a second line with `code` and ==highlights==.\n\n- Bullet point\n- Another item^-[aside]\n\n1. first\n2. second\n\n```rust\nfn example() {\n    println!(\"Hello <world>\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_notes(depth: usize) -> String {
    let mut content = String::from("Deep");
    for level in 0..depth {
        content.push_str(&format!(" ^[level {level}"));
    }
    content.push_str(&"]".repeat(depth));
    content
}
