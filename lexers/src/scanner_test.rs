use crate::scanner::Scanner;

#[test]
fn test_extremes() {
    let mut s = Scanner::from_str("12+3@");
    assert_eq!(s.prev(), None);
    assert_eq!(s.offset(), None);
    assert_eq!(s.next(), Some('1'));
    assert_eq!(s.offset(), Some(0));
    assert_eq!(s.prev(), None);
    while s.next() != Some('@') {}
    assert_eq!(s.curr(), Some('@'));
    assert_eq!(s.offset(), Some(4));
    assert_eq!(s.prev(), Some('3'));
    assert_eq!(s.next(), Some('@'));
    assert_eq!(s.next(), None);
    assert_eq!(s.offset(), None);
    assert_eq!(s.next(), None);
}

#[test]
fn test_peek() {
    let mut s = Scanner::from_str("(4)");
    assert_eq!(s.peek(), Some('('));
    assert_eq!(s.pos(), -1);
    assert_eq!(s.next(), Some('('));
    assert_eq!(s.peek(), Some('4'));
    assert_eq!(s.curr(), Some('('));
    assert_eq!(s.next(), Some('4'));
    assert_eq!(s.next(), Some(')'));
    assert_eq!(s.peek(), None);
    assert_eq!(s.curr(), Some(')'));
}

#[test]
fn test_multibyte_offsets() {
    // offsets count chars, not bytes
    let mut s = Scanner::from_str("1\u{a0}000€");
    let mut last = None;
    while let Some(c) = s.next() {
        last = Some((c, s.offset()));
    }
    assert_eq!(last, Some(('€', Some(5))));
}
