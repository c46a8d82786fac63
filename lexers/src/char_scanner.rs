#![deny(warnings)]

use crate::scanner::Scanner;

static WHITE: &[char] = &[' ', '\n', '\r', '\t'];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static MATH_OPS: &[char] = &['+', '-', '*', '/', '^', '±', '(', ')'];


impl Scanner {
    pub fn skip_ws(&mut self) -> bool {
        self.skip_all(WHITE)
    }

    // discard whitespace and whatever lexeme was pending
    pub fn ignore_ws(&mut self) {
        self.skip_ws();
        self.ignore();
    }

    // scan numbers like [0-9]+(\.[0-9]+)?(E-?[0-9]+)?
    // Blanks around 'E' and its sign are allowed and dropped: "1 E - 5" -> "1E-5"
    pub fn scan_number(&mut self) -> Option<String> {
        if !self.skip_all(DIGITS) {
            return None;
        }
        // check for fractional part, else it's just an integer
        let backtrack = self.buffer_pos();
        if self.accept('.').is_some() && !self.skip_all(DIGITS) {
            self.set_buffer_pos(backtrack);
        }
        let mut number = self.extract_string();
        // check for exponent part
        let backtrack = self.buffer_pos();
        self.skip_ws();
        if self.accept('E').is_some() {
            self.skip_ws();
            let negative = self.accept('-').is_some();
            self.skip_ws();
            self.ignore();
            if self.skip_all(DIGITS) {
                number.push('E');
                if negative { number.push('-'); }
                number.push_str(&self.extract_string());
                return Some(number);
            }
        }
        self.set_buffer_pos(backtrack);
        Some(number)
    }

    pub fn scan_math_op(&mut self) -> Option<String> {
        self.accept_any(MATH_OPS)?;
        Some(self.extract_string())
    }

    // scan [a-zA-Z]+, digits end a name so "sin2" reads as "sin" "2"
    pub fn scan_identifier(&mut self) -> Option<String> {
        let mut advanced = false;
        while let Some(c) = self.peek() {
            if !c.is_ascii_alphabetic() { break; }
            self.next();
            advanced = true;
        }
        if advanced { Some(self.extract_string()) } else { None }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_number() {
        let tests = vec![
            "987", "0", "41.98", "0.5", "28E3", "54E-33", "85.365E3", "6.14E-5",
        ];
        for t in tests.iter() {
            let result = Scanner::new(t).scan_number();
            assert_eq!(Some(t.to_string()), result);
        }
    }

    #[test]
    fn scan_spaced_exponent() {
        let mut s = Scanner::new("1 E - 5 + 2");
        assert_eq!(s.scan_number(), Some("1E-5".to_string()));
        assert!(s.skip_ws());
        assert_eq!(s.peek(), Some('+'));

        let mut s = Scanner::new("2.5E 7");
        assert_eq!(s.scan_number(), Some("2.5E7".to_string()));
        assert!(s.is_done());
    }

    #[test]
    fn scan_number_backtracks() {
        // trailing dot and dangling exponent aren't part of the number
        let mut s = Scanner::new("3.");
        assert_eq!(s.scan_number(), Some("3".to_string()));
        assert_eq!(s.next(), Some('.'));

        let mut s = Scanner::new("4 E - x");
        assert_eq!(s.scan_number(), Some("4".to_string()));
        assert_eq!(s.peek(), Some(' '));
        s.ignore_ws();
        assert_eq!(s.scan_identifier(), Some("E".to_string()));

        assert_eq!(Scanner::new("-3").scan_number(), None);
        assert_eq!(Scanner::new("e5").scan_number(), None);
    }

    #[test]
    fn scan_math_ops() {
        let tests = vec!["(", ")", "*", "^", "+", "-", "/", "±"];
        for t in tests.iter() {
            let result = Scanner::new(t).scan_math_op();
            assert_eq!(Some(t.to_string()), result);
        }
        assert_eq!(Scanner::new("%").scan_math_op(), None);
    }

    #[test]
    fn scan_identifiers() {
        let tests = vec!["sin", "ln", "ctg", "anyword", "X"];
        for t in tests.iter() {
            let result = Scanner::new(t).scan_identifier();
            assert_eq!(Some(t.to_string()), result);
        }
        let mut s = Scanner::new("cos2");
        assert_eq!(s.scan_identifier(), Some("cos".to_string()));
        assert_eq!(s.scan_number(), Some("2".to_string()));
    }
}
