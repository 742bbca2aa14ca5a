//! Code block language names accepted by Notion.

/// Language used when a fence has no info string or an unknown one.
pub const PLAIN_TEXT: &str = "plain text";

/// Languages Notion accepts for code blocks.
pub const NOTION_LANGUAGES: &[&str] = &[
    "abap", "arduino", "bash", "basic", "c", "clojure", "coffeescript", "c++", "c#", "css",
    "dart", "diff", "docker", "elixir", "elm", "erlang", "flow", "fortran", "f#", "gherkin",
    "glsl", "go", "graphql", "groovy", "haskell", "html", "java", "javascript", "json", "julia",
    "kotlin", "latex", "less", "lisp", "livescript", "lua", "makefile", "markdown", "markup",
    "matlab", "mermaid", "nix", "objective-c", "ocaml", "pascal", "perl", "php", "plain text",
    "powershell", "prolog", "protobuf", "python", "r", "reason", "ruby", "rust", "sass", "scala",
    "scheme", "scss", "shell", "sql", "swift", "typescript", "vb.net", "verilog", "vhdl",
    "visual basic", "webassembly", "xml", "yaml", "java/c/c++/c#",
];

/// Maps a fence info string to a Notion language name.
///
/// Only the first word counts. Common aliases are resolved; anything else
/// Notion would reject becomes [`PLAIN_TEXT`].
pub fn normalize_language(info: &str) -> &'static str {
    let Some(word) = info.split_whitespace().next() else {
        return PLAIN_TEXT;
    };
    let word = word.trim_start_matches('{').trim_end_matches('}').to_lowercase();

    let canonical = match word.as_str() {
        "js" | "jsx" | "mjs" | "node" => "javascript",
        "ts" | "tsx" => "typescript",
        "py" | "python3" => "python",
        "rs" => "rust",
        "sh" | "zsh" | "console" | "shell-session" => "shell",
        "ps" | "ps1" | "pwsh" => "powershell",
        "yml" => "yaml",
        "cpp" | "cxx" | "cc" | "hpp" => "c++",
        "cs" | "csharp" => "c#",
        "fs" | "fsharp" => "f#",
        "md" => "markdown",
        "golang" => "go",
        "rb" => "ruby",
        "kt" | "kts" => "kotlin",
        "dockerfile" => "docker",
        "make" | "mk" => "makefile",
        "objc" | "objectivec" => "objective-c",
        "proto" => "protobuf",
        "tex" => "latex",
        "hs" => "haskell",
        "ex" | "exs" => "elixir",
        "erl" => "erlang",
        "clj" => "clojure",
        "wasm" | "wat" => "webassembly",
        "vb" => "visual basic",
        "text" | "txt" | "plain" | "plaintext" => PLAIN_TEXT,
        "htm" | "xhtml" => "html",
        "patch" => "diff",
        other => other,
    };

    NOTION_LANGUAGES
        .iter()
        .copied()
        .find(|lang| *lang == canonical)
        .unwrap_or(PLAIN_TEXT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "plain text")]
    #[case("rust", "rust")]
    #[case("Rust", "rust")]
    #[case("rs", "rust")]
    #[case("js", "javascript")]
    #[case("python title=\"x.py\"", "python")]
    #[case("{python}", "python")]
    #[case("cpp", "c++")]
    #[case("yml", "yaml")]
    #[case("brainfuck", "plain text")]
    #[case("   ", "plain text")]
    fn maps_info_strings(#[case] info: &str, #[case] expected: &str) {
        assert_eq!(normalize_language(info), expected);
    }

    #[test]
    fn every_alias_target_is_a_notion_language() {
        for alias in ["jsx", "tsx", "sh", "pwsh", "cs", "fs", "md", "golang", "kt", "proto"] {
            assert_ne!(normalize_language(alias), PLAIN_TEXT, "alias {alias}");
        }
    }
}
