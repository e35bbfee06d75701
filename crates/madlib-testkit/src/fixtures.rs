//! Madlib fixtures shared by tests

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Smallest useful madlib: one word filler, two paragraphs
pub const FOX_MADLIB: &str = r#"
[[fillers]]
id = "animal"
type = "word"
friendly_text = "An animal"
example_text = "fox"

[[text]]
segment = "static"
text = "Once upon a "

[[text]]
segment = "fillable"
id = "animal"

[[text]]
segment = "static"
text = " time."

[[text]]
segment = "newline"

[[text]]
segment = "static"
text = "The end."
"#;

/// One filler of every type
pub const ALL_TYPES_MADLIB: &str = r#"
[[fillers]]
id = "thing"
type = "word"
friendly_text = "A thing"
example_text = "lamp"

[[fillers]]
id = "name"
type = "properNoun"
friendly_text = "A name"
example_text = "Ada"

[[fillers]]
id = "mood"
type = "adjective"
friendly_text = "A mood ending in y"
example_text = "happy"

[[fillers]]
id = "saying"
type = "quote"
friendly_text = "A saying, in quotes"
example_text = "'Hello'"

[[text]]
segment = "fillable"
id = "name"

[[text]]
segment = "static"
text = " felt "

[[text]]
segment = "fillable"
id = "mood"

[[text]]
segment = "static"
text = " about the "

[[text]]
segment = "fillable"
id = "thing"

[[text]]
segment = "static"
text = " and said "

[[text]]
segment = "fillable"
id = "saying"

[[text]]
segment = "newline"
"#;

/// Fillable segment pointing at a filler that does not exist
pub const UNKNOWN_FILLABLE_MADLIB: &str = r#"
[[fillers]]
id = "animal"
type = "word"
friendly_text = "An animal"
example_text = "fox"

[[text]]
segment = "fillable"
id = "plant"
"#;

/// Two fillers sharing an id
pub const DUPLICATE_ID_MADLIB: &str = r#"
[[fillers]]
id = "animal"
type = "word"
friendly_text = "An animal"
example_text = "fox"

[[fillers]]
id = "animal"
type = "word"
friendly_text = "Another animal"
example_text = "owl"
"#;

/// Write `content` to `dir/name` and return the path
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// Write an answers file (one `id = "value"` entry per answer) and return the path
pub fn write_answers(dir: &Path, name: &str, answers: &[(&str, &str)]) -> PathBuf {
    let table: BTreeMap<&str, &str> = answers.iter().copied().collect();
    let content = toml::to_string(&table).expect("Failed to serialize answers");
    write_fixture(dir, name, &content)
}
