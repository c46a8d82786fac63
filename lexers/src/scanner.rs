#![deny(warnings)]

/// Character cursor over an input string.
///
/// Everything consumed since the last `ignore`/`extract_string` forms the
/// pending lexeme. `buffer_pos`/`set_buffer_pos` allow backtracking.
pub struct Scanner {
    src: Vec<char>,
    mark: usize,
    pos: usize,
}

impl Iterator for Scanner {
    type Item = char;
    fn next(&mut self) -> Option<char> {
        let next = self.src.get(self.pos).copied()?;
        self.pos += 1;
        Some(next)
    }
}

impl Scanner {
    pub fn new(source: &str) -> Scanner {
        Scanner{src: source.chars().collect(), mark: 0, pos: 0}
    }

    pub fn buffer_pos(&self) -> usize { self.pos }

    // moving back before the mark drags the mark along
    pub fn set_buffer_pos(&mut self, pos: usize) -> bool {
        if pos > self.src.len() {
            return false;
        }
        self.pos = pos;
        self.mark = self.mark.min(pos);
        true
    }

    pub fn is_done(&self) -> bool { self.pos >= self.src.len() }

    // last consumed char
    pub fn curr(&self) -> Option<char> {
        self.pos.checked_sub(1).map(|p| self.src[p])
    }

    pub fn peek(&self) -> Option<char> {
        self.src.get(self.pos).copied()
    }

    pub fn accept(&mut self, what: char) -> Option<char> {
        match self.peek() {
            Some(next) if next == what => self.next(),
            _ => None,
        }
    }

    // Advance only if the next char is in the 'any' set
    pub fn accept_any(&mut self, any: &[char]) -> Option<char> {
        match self.peek() {
            Some(next) if any.contains(&next) => self.next(),
            _ => None,
        }
    }

    // Skip over the 'over' set, result is if the scanner was advanced
    pub fn skip_all(&mut self, over: &[char]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() { advanced = true; }
        advanced
    }

    pub fn view(&self) -> &[char] {
        &self.src[self.mark..self.pos]
    }

    pub fn ignore(&mut self) {
        self.mark = self.pos;
    }

    pub fn extract_string(&mut self) -> String {
        let lexeme = self.view().iter().collect();
        self.ignore();
        lexeme
    }
}
