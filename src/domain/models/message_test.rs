use super::Author;
use super::Message;

#[test]
fn it_executes_new() {
    let msg = Message::new(Author::User, "Hallo!");
    assert_eq!(msg.author, Author::User);
    assert_eq!(msg.text, "Hallo!".to_string());
}

#[test]
fn it_executes_new_replacing_tabs() {
    let msg = Message::new(Author::User, "\t\tHallo!");
    assert_eq!(msg.text, "    Hallo!".to_string());
}

#[test]
fn it_executes_append() {
    let mut msg = Message::new(Author::Assistant, "Guten");
    msg.append(" Tag!");
    assert_eq!(msg.text, "Guten Tag!");
}

#[test]
fn it_executes_append_with_tabs() {
    let mut msg = Message::new(Author::Assistant, "Guten");
    msg.append("\tTag!");
    assert_eq!(msg.text, "Guten  Tag!");
}

#[test]
fn it_wraps_long_lines() {
    let msg = Message::new(Author::Assistant, "aaa bbb ccc");
    assert_eq!(
        msg.as_string_lines(7),
        vec!["aaa".to_string(), "bbb".to_string(), "ccc".to_string()]
    );
    assert_eq!(
        msg.as_string_lines(8),
        vec!["aaa bbb".to_string(), "ccc".to_string()]
    );
}

#[test]
fn it_keeps_blank_lines_when_wrapping() {
    let msg = Message::new(Author::Assistant, "erste Zeile\n\nzweite Zeile");
    assert_eq!(
        msg.as_string_lines(40),
        vec![
            "erste Zeile".to_string(),
            " ".to_string(),
            "zweite Zeile".to_string()
        ]
    );
}
