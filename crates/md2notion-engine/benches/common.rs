// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic*, `code` and a [link](https://example.com).\n\n- Bullet point\n  - Nested item\n- [x] Done task\n\n> Quoted ~~text~~\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_complex_markdown(sections: usize, depth: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {}\n\n", section));
        content.push_str(&generate_nested_list(depth));
        content.push('\n');
    }

    content
}

#[allow(dead_code)]
fn generate_nested_list(depth: usize) -> String {
    let mut content = String::new();
    for level in 0..depth {
        let indent = "  ".repeat(level);
        for i in 0..3 {
            content.push_str(&format!(
                "{}{}. Item {} with __strong__ and _emphasis_ at level {}\n",
                indent,
                i + 1,
                i,
                level
            ));
        }
    }
    content
}

#[allow(dead_code)]
pub fn generate_long_paragraph(chars: usize) -> String {
    "lorem ipsum *dolor* sit amet ".chars().cycle().take(chars).collect()
}
