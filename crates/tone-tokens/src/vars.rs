//! Custom-property collection.
//!
//! A declaration is `--name: value;` where `name` is ASCII alphanumerics and
//! hyphens and `value` is at least one character up to the next `;`. The
//! value is stored trimmed. Anything else in the block is skipped.

use std::collections::BTreeMap;

/// Token name → raw declared value for one theme block.
///
/// Later declarations of the same name replace earlier ones, matching the
/// cascade inside a single rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarMap {
    vars: BTreeMap<String, String>,
}

impl VarMap {
    /// Collect every custom-property declaration in `block`.
    #[must_use]
    pub fn parse(block: &str) -> Self {
        let mut vars = BTreeMap::new();
        let mut pos = 0;

        while let Some(offset) = block[pos..].find("--") {
            let start = pos + offset;
            let body = start + 2;
            match declaration_at(&block[body..]) {
                Some((name, value, consumed)) => {
                    vars.insert(name.to_owned(), value.trim().to_owned());
                    pos = body + consumed;
                }
                None => pos = start + 1,
            }
        }

        Self { vars }
    }

    /// Value declared for `name` (without the leading `--`).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate declarations in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Match `name \s* : value ;` at the start of `s` (just past a `--`).
///
/// Returns the name, the untrimmed value, and the bytes consumed through
/// the terminating `;`.
fn declaration_at(s: &str) -> Option<(&str, &str, usize)> {
    let name_len = s
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'-')
        .count();
    if name_len == 0 {
        return None;
    }

    let value = s[name_len..].trim_start().strip_prefix(':')?;
    let semi = value.find(';')?;
    if semi == 0 {
        return None;
    }

    let consumed = s.len() - value.len() + semi + 1;
    Some((&s[..name_len], &value[..semi], consumed))
}
