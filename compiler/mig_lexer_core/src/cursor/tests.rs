use super::*;

// === Peek ===

#[test]
fn peek_does_not_advance() {
    let cursor = Cursor::new(b"abc");
    assert_eq!(cursor.peek(2), Ok(&b"ab"[..]));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn peek_past_end_is_end_of_input() {
    let cursor = Cursor::new(b"a");
    assert_eq!(cursor.peek(2), Err(EndOfInput));
    assert_eq!(cursor.peek(1), Ok(&b"a"[..]));
}

#[test]
fn peek_zero_at_eof() {
    let cursor = Cursor::new(b"");
    assert!(cursor.is_eof());
    assert_eq!(cursor.peek(0), Ok(&b""[..]));
}

// === Consume ===

#[test]
fn consume_advances() {
    let mut cursor = Cursor::new(b"// x");
    assert_eq!(cursor.consume(2), Ok(&b"//"[..]));
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.remaining(), b" x");
}

#[test]
fn consume_past_end_leaves_offset() {
    let mut cursor = Cursor::new(b"abc");
    cursor.advance(2);
    assert_eq!(cursor.consume(2), Err(EndOfInput));
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn consume_byte_walks_to_eof() {
    let mut cursor = Cursor::new(b"hi");
    assert_eq!(cursor.consume_byte(), Ok(b'h'));
    assert_eq!(cursor.consume_byte(), Ok(b'i'));
    assert!(cursor.is_eof());
    assert_eq!(cursor.consume_byte(), Err(EndOfInput));
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn interior_null_is_ordinary_byte() {
    let mut cursor = Cursor::new(b"a\0b");
    cursor.advance(1);
    assert!(!cursor.is_eof());
    assert_eq!(cursor.consume_byte(), Ok(0));
    assert_eq!(cursor.consume_byte(), Ok(b'b'));
}

#[test]
#[should_panic(expected = "cannot advance")]
fn advance_past_end_panics() {
    let mut cursor = Cursor::new(b"ab");
    cursor.advance(3);
}

// === Rewind / Checkpoint ===

#[test]
fn rewind_steps_back() {
    let mut cursor = Cursor::new(b"abcdef");
    cursor.advance(4);
    cursor.rewind(3);
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.consume_byte(), Ok(b'b'));
}

#[test]
#[should_panic(expected = "cannot rewind")]
fn rewind_below_zero_panics() {
    let mut cursor = Cursor::new(b"abc");
    cursor.advance(1);
    cursor.rewind(2);
}

#[test]
fn restore_returns_to_checkpoint() {
    let mut cursor = Cursor::new(b"  //");
    let checkpoint = cursor.checkpoint();
    cursor.advance(3);
    assert_eq!(cursor.since(checkpoint), b"  /");
    cursor.restore(checkpoint);
    assert_eq!(cursor.pos(), checkpoint.pos());
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn copied_cursor_is_independent_snapshot() {
    let mut cursor = Cursor::new(b"xyz");
    let snapshot = cursor;
    cursor.advance(2);
    assert_eq!(snapshot.pos(), 0);
    assert_eq!(cursor.pos(), 2);
}

// === Bulk scanning ===

#[test]
fn eat_while_returns_run() {
    let mut cursor = Cursor::new(b"aaab");
    assert_eq!(cursor.eat_while(|b| b == b'a'), b"aaa");
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.eat_while(|b| b == b'a'), b"");
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_while_stops_at_eof() {
    let mut cursor = Cursor::new(b"   ");
    assert_eq!(cursor.eat_while(|b| b == b' '), b"   ");
    assert!(cursor.is_eof());
}

#[test]
fn eat_until_stops_at_byte() {
    let mut cursor = Cursor::new(b" foo */");
    assert_eq!(cursor.eat_until(b'*'), Ok(&b" foo "[..]));
    assert_eq!(cursor.peek(1), Ok(&b"*"[..]));
}

#[test]
fn eat_until_missing_byte_leaves_offset() {
    let mut cursor = Cursor::new(b"foo bar");
    cursor.advance(1);
    assert_eq!(cursor.eat_until(b'*'), Err(EndOfInput));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn end_of_input_display() {
    assert_eq!(EndOfInput.to_string(), "unexpected end of input");
}
