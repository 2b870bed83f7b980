//! Command words and name normalization for the interactive prompt.

/// What the user asked for at the top-level prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Find,
    Exit,
}

impl Command {
    /// Case-insensitive match on the command word. `None` if unrecognized.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "add" => Some(Command::Add),
            "remove" => Some(Command::Remove),
            "find" => Some(Command::Find),
            "exit" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Title-cases every run of letters, then swaps spaces for underscores:
/// `kevin bacon (i)` becomes `Kevin_Bacon_(I)`.
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;
    for c in raw.trim().chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            in_word = false;
            out.push(if c == ' ' { '_' } else { c });
        }
    }
    out
}
