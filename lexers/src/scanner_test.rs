use crate::scanner::Scanner;

#[test]
fn test_extremes() {
    let mut s = Scanner::new("sin(x)@");
    assert_eq!(s.curr(), None);
    assert_eq!(s.next(), Some('s'));
    assert_eq!(s.curr(), Some('s'));
    while s.next() != Some('@') {}
    assert_eq!(s.curr(), Some('@'));
    assert!(s.is_done());
    assert_eq!(s.next(), None);
    assert_eq!(s.peek(), None);
}

#[test]
fn test_extract() {
    let mut s = Scanner::new("cos (1 + 2)");
    for _ in 0..3 { assert!(s.next().is_some()); }
    assert_eq!(s.extract_string(), "cos");
    assert_eq!(s.view(), &[] as &[char]);
    assert_eq!(s.peek(), Some(' '));
    s.ignore_ws();
    for _ in 0..4 { assert!(s.next().is_some()); }
    assert_eq!(s.extract_string(), "(1 +");
}

#[test]
fn test_accept() {
    let mut s = Scanner::new("lln  x");
    assert!(!s.skip_ws());
    assert_eq!(s.accept('l'), Some('l'));
    assert_eq!(s.accept_any(&['l', 'n']), Some('l'));
    assert_eq!(s.accept('l'), None);
    assert_eq!(s.accept_any(&['n']), Some('n'));
    assert!(s.skip_ws());
    assert!(!s.skip_ws());
    assert_eq!(s.curr(), Some(' '));
    assert_eq!(s.peek(), Some('x'));
}

#[test]
fn test_backtrack() {
    let mut s = Scanner::new("12 E -");
    assert!(s.skip_all(&['1', '2']));
    s.ignore();
    let backtrack = s.buffer_pos();
    assert!(s.skip_ws());
    assert_eq!(s.accept('E'), Some('E'));
    assert!(s.set_buffer_pos(backtrack));
    assert_eq!(s.peek(), Some(' '));
    assert!(s.view().is_empty());
    assert!(!s.set_buffer_pos(100));
}
