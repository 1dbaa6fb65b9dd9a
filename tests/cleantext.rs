use std::collections::HashSet;
use std::fs::{create_dir, read_to_string, File};
use std::io::Write;
use std::path::Path;

use dumpclean::error::Error;
use dumpclean::filtering::Stopwords;
use dumpclean::io::reader::DocReader;
use dumpclean::pipelines::cleantext::CleanOptions;
use dumpclean::pipelines::{CleanText, Pipeline};
use dumpclean::transformers::{Normalizer, Transform};
use tempfile::tempdir;

const FOX: &str = r#"{"id": "1", "title": "Fox", "text": "The Quick Brown Fox Jumps! 123"}"#;

fn write_lines(path: &Path, lines: &[String]) {
    let mut f = File::create(path).unwrap();
    for line in lines {
        writeln!(f, "{}", line).unwrap();
    }
}

fn write_stopwords(path: &Path) {
    std::fs::write(path, "the\nof\nand\n").unwrap();
}

fn options(min_words: usize, batch_size: usize, workers: usize) -> CleanOptions {
    CleanOptions {
        min_words,
        min_word_length: 2,
        batch_size,
        pattern: "wiki_".to_string(),
        workers: Some(workers),
    }
}

/// spells `n` with letters only, so that digits do not split words.
fn letters(mut n: usize) -> String {
    let mut s = String::new();
    loop {
        s.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            return s;
        }
    }
}

/// generates a document with `nb_words` words, each containing `id`.
fn gen_document(id: usize, nb_words: usize) -> String {
    let words: Vec<String> = (0..nb_words)
        .map(|i| format!("Wörd{}{}", letters(id), "abc".repeat(i % 3 + 1)))
        .collect();
    serde_json::json!({ "id": id, "text": format!("The {}\nof 42!", words.join(", ")) })
        .to_string()
}

#[test]
fn quick_brown_fox() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("dump");
    create_dir(&src).unwrap();
    create_dir(src.join("AA")).unwrap();
    write_lines(&src.join("AA").join("wiki_00"), &vec![FOX.to_string(); 201]);

    let stopwords = dir.path().join("stopwords.txt");
    std::fs::write(&stopwords, "the\n").unwrap();
    let dst = dir.path().join("out").join("cleaned.csv");

    // each document keeps 4 words.
    let p = CleanText::new(src, dst.clone(), stopwords, options(3, 50, 2));
    let stats = p.run().unwrap();

    assert_eq!(stats.files, 1);
    assert_eq!(stats.accepted(), 201);

    let content = read_to_string(&dst).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 201);
    assert!(lines.iter().all(|line| *line == "quick brown fox jumps"));
}

#[test]
fn quick_brown_fox_default_threshold() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("dump");
    create_dir(&src).unwrap();
    create_dir(src.join("AA")).unwrap();
    write_lines(&src.join("AA").join("wiki_00"), &vec![FOX.to_string(); 201]);

    let stopwords = dir.path().join("stopwords.txt");
    std::fs::write(&stopwords, "the\n").unwrap();
    let dst = dir.path().join("cleaned.csv");

    let p = CleanText::new(src, dst.clone(), stopwords, options(200, 5000, 2));
    let stats = p.run().unwrap();

    assert_eq!(stats.accepted(), 0);
    assert_eq!(stats.documents.rejected, 201);
    assert_eq!(read_to_string(&dst).unwrap(), "");
}

#[test]
fn no_loss_single_file() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("dump");
    create_dir(&src).unwrap();
    create_dir(src.join("AA")).unwrap();

    // mix of long, short, textless and malformed documents.
    let mut lines = Vec::new();
    for id in 0..100 {
        let line = match id % 5 {
            0 => gen_document(id, 3),
            1 => format!(r#"{{"id": {}}}"#, id),
            2 => format!(r#"{{"id": {}, "text": "#, id),
            _ => gen_document(id, 10 + id),
        };
        lines.push(line);
    }
    let input = src.join("AA").join("wiki_00");
    write_lines(&input, &lines);

    let stopwords = dir.path().join("stopwords.txt");
    write_stopwords(&stopwords);
    let dst = dir.path().join("cleaned.txt");

    let p = CleanText::new(src, dst.clone(), stopwords.clone(), options(5, 7, 1));
    let stats = p.run().unwrap();

    // expected output, computed sequentially.
    let words: HashSet<String> = ["the", "of", "and"].iter().map(|w| w.to_string()).collect();
    let normalizer = Normalizer::new(Stopwords::from(words), 2, 5);
    let expected: Vec<String> = DocReader::from_path(&input)
        .unwrap()
        .filter_map(|text| text.ok().flatten())
        .filter_map(|text| normalizer.transform(&text))
        .collect();

    let content = read_to_string(&dst).unwrap();
    let got: Vec<&str> = content.lines().collect();

    // single worker, single file: order is kept too.
    assert_eq!(got, expected);
    assert_eq!(stats.accepted(), expected.len());
    assert_eq!(stats.documents.lines, 100);
    assert_eq!(stats.documents.no_text, 20);
    assert_eq!(stats.documents.malformed, 20);
    assert_eq!(stats.documents.rejected, 20);
    assert_eq!(stats.accepted(), 40);
}

#[test]
fn concurrent_writes() {
    const NB_FOLDERS: usize = 4;
    const NB_FILES: usize = 6;
    const NB_DOCS: usize = 40;

    let dir = tempdir().unwrap();
    let src = dir.path().join("dump");
    create_dir(&src).unwrap();

    let mut expected = Vec::new();
    let words: HashSet<String> = ["the", "of", "and"].iter().map(|w| w.to_string()).collect();
    let normalizer = Normalizer::new(Stopwords::from(words), 2, 5);

    for folder in 0..NB_FOLDERS {
        let folder_path = src.join(format!("A{}", folder));
        create_dir(&folder_path).unwrap();
        for file in 0..NB_FILES {
            let lines: Vec<String> = (0..NB_DOCS)
                .map(|doc| gen_document((folder * NB_FILES + file) * NB_DOCS + doc, 50))
                .collect();
            for line in &lines {
                let text = DocReader::parse_line(line).unwrap().unwrap();
                expected.push(normalizer.transform(&text).unwrap());
            }
            write_lines(&folder_path.join(format!("wiki_{:02}", file)), &lines);
        }
        // not matching the pattern
        write_lines(
            &folder_path.join("readme"),
            &[r#"{"text": "should never be read at all"}"#.to_string()],
        );
    }

    let stopwords = dir.path().join("stopwords.txt");
    write_stopwords(&stopwords);
    let dst = dir.path().join("cleaned.txt");

    let p = CleanText::new(src, dst.clone(), stopwords, options(5, 3, 4));
    let stats = p.run().unwrap();
    assert_eq!(stats.files, NB_FOLDERS * NB_FILES);
    assert_eq!(stats.accepted(), NB_FOLDERS * NB_FILES * NB_DOCS);

    let content = read_to_string(&dst).unwrap();
    let mut got: Vec<&str> = content.lines().collect();
    let mut expected: Vec<&str> = expected.iter().map(String::as_str).collect();
    got.sort_unstable();
    expected.sort_unstable();

    // every line is a complete normalizer output.
    assert_eq!(got, expected);
}

#[test]
fn rerun_truncates() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("dump");
    create_dir(&src).unwrap();
    create_dir(src.join("AA")).unwrap();
    write_lines(&src.join("AA").join("wiki_00"), &vec![FOX.to_string(); 3]);

    let stopwords = dir.path().join("stopwords.txt");
    write_stopwords(&stopwords);
    let dst = dir.path().join("cleaned.txt");

    let p = CleanText::new(src, dst.clone(), stopwords, options(0, 2, 2));
    p.run().unwrap();
    p.run().unwrap();

    assert_eq!(read_to_string(&dst).unwrap().lines().count(), 3);
}

#[test]
fn missing_inputs() {
    let dir = tempdir().unwrap();
    let stopwords = dir.path().join("stopwords.txt");
    write_stopwords(&stopwords);
    let dst = dir.path().join("cleaned.txt");

    let p = CleanText::new(
        dir.path().join("svdkjljlkmjlmdsfljkf"),
        dst.clone(),
        stopwords,
        CleanOptions::default(),
    );
    assert!(matches!(p.run(), Err(Error::DirectoryNotFound(_))));

    let p = CleanText::new(
        dir.path().to_path_buf(),
        dst.clone(),
        dir.path().join("fzjoijzoecijzoiej.txt"),
        CleanOptions::default(),
    );
    assert!(matches!(p.run(), Err(Error::FileNotFound(_))));

    // nothing was created
    assert!(!dst.exists());
}
