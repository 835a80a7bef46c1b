use super::*;

#[test]
fn first_line_first_column() {
    let fl = FileLocations::new(b"abc\ndef\n", "t.star");
    let loc = fl.locate(0);
    assert_eq!(loc.line, 1);
    assert_eq!(loc.column, 1);
}

#[test]
fn second_line_starts_after_newline() {
    let fl = FileLocations::new(b"abc\ndef\n", "t.star");
    let loc = fl.locate(4);
    assert_eq!(loc.line, 2);
    assert_eq!(loc.column, 1);
}

#[test]
fn mid_line_column() {
    let fl = FileLocations::new(b"abc\ndef\n", "t.star");
    let loc = fl.locate(6); // 'f' in "def"
    assert_eq!(loc.line, 2);
    assert_eq!(loc.column, 3);
}

#[test]
fn end_of_buffer_is_valid() {
    let buf = b"abc\n";
    let fl = FileLocations::new(buf, "t.star");
    let loc = fl.locate(buf.len() as u32);
    assert_eq!(loc.line, 2);
    assert_eq!(loc.column, 1);
}

#[test]
fn no_newlines_single_line() {
    let fl = FileLocations::new(b"hello", "t.star");
    let loc = fl.locate(3);
    assert_eq!(loc.line, 1);
    assert_eq!(loc.column, 4);
}

#[test]
fn file_name_preserved() {
    let fl = FileLocations::new(b"x", "path/to/file.star");
    assert_eq!(&**fl.file(), "path/to/file.star");
    assert_eq!(&*fl.locate(0).file, "path/to/file.star");
}
