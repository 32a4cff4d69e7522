// composer_core/src/editcmd.rs
use crate::color::HslColor;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq)]
pub enum EditWord {
    Index(usize),
    At,
    Value(f64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyStatus {
    Applied,
    Incomplete, // valid so far, but needs more tokens
    NotEditor,  // doesn't look like editor syntax
}

fn lex(input: &str) -> Vec<String> {
    input.split_whitespace().map(|s| s.to_string()).collect()
}

fn parse_words(tokens: &[String]) -> Result<Vec<EditWord>, ApplyStatus> {
    if tokens.is_empty() {
        return Err(ApplyStatus::NotEditor);
    }

    // If it doesn't start with an entry index, we treat it as "not our syntax"
    let Ok(index) = tokens[0].parse::<usize>() else {
        return Err(ApplyStatus::NotEditor);
    };

    let mut out = vec![EditWord::Index(index)];
    for t in &tokens[1..] {
        let w = match t.as_str() {
            "@" => EditWord::At,
            _ => {
                if let Ok(v) = t.parse::<f64>() {
                    EditWord::Value(v)
                } else {
                    // Unknown token in editor mode -> treat as "not our syntax"
                    return Err(ApplyStatus::NotEditor);
                }
            }
        };
        out.push(w);
    }

    Ok(out)
}

/// Try a line of quick editor syntax against the session.
///
/// Grammar:
/// `<index>`
/// `<index> @ <h> <s> <l>`
///
/// Examples:
/// `3`            selects entry 3
/// `3 @ 120 100 50`  selects entry 3 and replaces it with hsl(120,100,50)
pub fn try_apply_editor_line(line: &str, session: &mut Session) -> ApplyStatus {
    let tokens = lex(line);
    let words = match parse_words(&tokens) {
        Ok(w) => w,
        Err(status) => return status,
    };

    let mut i = 0;

    let index = match words.get(i) {
        Some(EditWord::Index(n)) => *n,
        _ => return ApplyStatus::NotEditor,
    };
    i += 1;

    // Apply selection immediately (clamped by the editor)
    session.editor.select(index);

    match words.get(i) {
        None => ApplyStatus::Applied,
        Some(EditWord::At) => {
            i += 1;
            let mut hsl = [0.0f64; 3];
            for slot in &mut hsl {
                match words.get(i) {
                    Some(EditWord::Value(v)) => *slot = *v,
                    _ => return ApplyStatus::Incomplete, // "3 @" or "3 @ 120"
                }
                i += 1;
            }
            session
                .editor
                .replace_selected(HslColor::new(hsl[0], hsl[1], hsl[2]));
            ApplyStatus::Applied
        }
        _ => ApplyStatus::Applied,
    }
}
