use colored::Colorize;

/// A single occurrence of the needle in a page's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// Character offset into the lowercased text
    pub offset: usize,
    pub context: String,
}

/// Find every occurrence of `needle` in `haystack`, ignoring case.
///
/// Both strings are lowercased first, so offsets and context refer to the
/// lowercased text. After a hit the search resumes one character past its
/// start, which means overlapping occurrences are reported too.
pub fn scan(haystack: &str, needle: &str, context_chars: usize, highlight: bool) -> Matches {
    let text = haystack.to_lowercase();
    let needle = needle.to_lowercase();

    // Byte offset of every char, plus the end of the text
    let mut bounds: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
    bounds.push(text.len());

    Matches {
        needle_chars: needle.chars().count(),
        text,
        needle,
        bounds,
        context_chars,
        highlight,
        pos: 0,
    }
}

pub struct Matches {
    text: String,
    needle: String,
    needle_chars: usize,
    bounds: Vec<usize>,
    context_chars: usize,
    highlight: bool,
    pos: usize,
}

impl Matches {
    fn char_index(&self, byte: usize) -> usize {
        self.bounds.partition_point(|&b| b < byte)
    }

    fn context(&self, start_char: usize) -> String {
        let end_char = start_char + self.needle_chars;
        let total = self.bounds.len() - 1;

        let ctx_begin = self.bounds[start_char.saturating_sub(self.context_chars)];
        let ctx_end = self.bounds[end_char.saturating_add(self.context_chars).min(total)];
        let start = self.bounds[start_char];
        let end = self.bounds[end_char];

        let matched = single_line(&self.text[start..end]);
        let mut context = String::with_capacity(ctx_end - ctx_begin + 16);
        context.push_str(&single_line(&self.text[ctx_begin..start]));
        if self.highlight {
            context.push_str(&matched.red().bold().to_string());
        } else {
            context.push_str(&matched);
        }
        context.push_str(&single_line(&self.text[end..ctx_end]));
        context
    }
}

/// Replace each control character (line breaks, tabs, form feeds) with a
/// space, keeping the character count unchanged.
fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

impl Iterator for Matches {
    type Item = Hit;

    fn next(&mut self) -> Option<Hit> {
        if self.needle.is_empty() || self.pos >= self.text.len() {
            return None;
        }

        let start = match self.text[self.pos..].find(&self.needle) {
            Some(rel) => self.pos + rel,
            None => {
                self.pos = self.text.len();
                return None;
            }
        };

        let offset = self.char_index(start);
        let context = self.context(offset);
        self.pos = self.bounds[offset + 1];

        Some(Hit { offset, context })
    }
}
