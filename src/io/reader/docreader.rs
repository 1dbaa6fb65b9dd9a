/*! Line-delimited JSON reader.

Yields the `text` field of each document, one document per line.
!*/
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

use serde_json::Value;

use crate::error::Error;

/// Iterates over the lines of a reader, decoding each one as a JSON document.
///
/// Each item is:
/// - `Ok(Some(text))` when the document has a string `text` field,
/// - `Ok(None)` when the document has no `text` field, or when it is not a string,
/// - `Err(Error::Serde(_))` when the line is not valid JSON,
/// - `Err(Error::Io(_))` when the line could not be read (including invalid UTF-8).
///
/// Only [Error::Io] is meant to be fatal: a malformed line does not prevent
/// reading the following ones.
#[derive(Debug)]
pub struct Reader<T>
where
    T: Read,
{
    lines: Lines<BufReader<T>>,
}

pub type DocReader = Reader<File>;

impl DocReader {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handler = File::open(src)?;
        Ok(Self::new(handler))
    }
}

impl<T> Reader<T>
where
    T: Read,
{
    pub fn new(inner: T) -> Self {
        let br = BufReader::new(inner);
        Self { lines: br.lines() }
    }

    /// Extract the `text` field of a single JSON document.
    pub fn parse_line(line: &str) -> Result<Option<String>, Error> {
        let document: Value = serde_json::from_str(line)?;
        let text = match document {
            Value::Object(mut fields) => match fields.remove("text") {
                Some(Value::String(text)) => Some(text),
                _ => None,
            },
            _ => None,
        };
        Ok(text)
    }
}

impl<T> Iterator for Reader<T>
where
    T: Read,
{
    type Item = Result<Option<String>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(Error::Io(e))),
        };

        Some(Self::parse_line(&line))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn gen_data() -> String {
        [
            r#"{"id": "12", "url": "https://foo.bar/baz", "title": "Foo", "text": "foo bar\nbaz quux"}"#,
            r#"{"id": "13", "title": "no text"}"#,
            r#"{"id": "14", "text": null}"#,
            r#"{"id": "15", "text": 42}"#,
            r#"{"id": "16", "text": "#,
            r#"["text"]"#,
            r#"{"text": "Ünïcödé"}"#,
        ]
        .join("\n")
    }

    #[test]
    fn test_read() {
        let reader = Reader::new(Cursor::new(gen_data()));
        let items: Vec<_> = reader.collect();
        assert_eq!(items.len(), 7);

        assert_eq!(
            items[0].as_ref().unwrap(),
            &Some("foo bar\nbaz quux".to_string())
        );
        assert_eq!(items[1].as_ref().unwrap(), &None);
        assert_eq!(items[2].as_ref().unwrap(), &None);
        assert_eq!(items[3].as_ref().unwrap(), &None);
        assert!(matches!(items[4], Err(Error::Serde(_))));
        assert_eq!(items[5].as_ref().unwrap(), &None);
        assert_eq!(items[6].as_ref().unwrap(), &Some("Ünïcödé".to_string()));
    }

    #[test]
    fn test_empty_line_is_malformed() {
        let reader = Reader::new(Cursor::new("{\"text\": \"a\"}\n\n{\"text\": \"b\"}\n"));
        let items: Vec<_> = reader.collect();
        assert_eq!(items.len(), 3);
        assert!(matches!(items[1], Err(Error::Serde(_))));
        assert_eq!(items[2].as_ref().unwrap(), &Some("b".to_string()));
    }

    #[test]
    fn test_invalid_utf8() {
        let data: Vec<u8> = vec![b'{', b'}', b'\n', 0xff, 0xfe, b'\n'];
        let reader = Reader::new(Cursor::new(data));
        let items: Vec<_> = reader.collect();
        assert_eq!(items[0].as_ref().unwrap(), &None);
        assert!(matches!(items[1], Err(Error::Io(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(DocReader::from_path(Path::new("svdkjljlkmjlmdsfljkf.jsonl")).is_err());
    }
}
