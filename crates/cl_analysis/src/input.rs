use std::fmt;
use std::io::Cursor;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use cl_core::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Txt,
    Csv,
    Xls,
    Xlsx,
}

impl FileKind {
    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "txt" => Ok(FileKind::Txt),
            "csv" => Ok(FileKind::Csv),
            "xls" => Ok(FileKind::Xls),
            "xlsx" => Ok(FileKind::Xlsx),
            other => Err(Error::UnsupportedFileType(other.to_string())),
        }
    }

    pub fn from_filename(filename: &str) -> Result<Self> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .ok_or_else(|| Error::UnsupportedFileType(filename.to_string()))?;
        Self::from_extension(extension)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Txt => "txt",
            FileKind::Csv => "csv",
            FileKind::Xls => "xls",
            FileKind::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the comments of a request came from.
#[derive(Debug, Clone)]
pub enum CommentInput {
    File { filename: String, bytes: Vec<u8> },
    Text(String),
}

/// Turn whatever the caller supplied into a non-empty list of comments.
///
/// `None` means neither a file nor a text block was provided.
pub fn extract_comments(input: Option<CommentInput>) -> Result<Vec<String>> {
    let comments = match input {
        None => return Err(Error::NoInput),
        Some(CommentInput::File { filename, bytes }) => {
            let kind = FileKind::from_filename(&filename)?;
            parse_file(kind, &bytes)?
        }
        Some(CommentInput::Text(text)) => parse_text(&text),
    };

    if comments.is_empty() {
        return Err(Error::NoComments);
    }
    Ok(comments)
}

pub fn parse_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_file(kind: FileKind, bytes: &[u8]) -> Result<Vec<String>> {
    match kind {
        FileKind::Txt => {
            let text = std::str::from_utf8(bytes).map_err(|e| unparseable(kind, e))?;
            Ok(parse_text(text))
        }
        FileKind::Csv => parse_csv(bytes),
        FileKind::Xls | FileKind::Xlsx => parse_workbook(kind, bytes),
    }
}

fn parse_csv(bytes: &[u8]) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut comments = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| unparseable(FileKind::Csv, e))?;
        if let Some(cell) = record.get(0).map(str::trim).filter(|cell| !cell.is_empty()) {
            comments.push(cell.to_string());
        }
    }
    Ok(comments)
}

fn parse_workbook(kind: FileKind, bytes: &[u8]) -> Result<Vec<String>> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes.to_vec())).map_err(|e| unparseable(kind, e))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|e| unparseable(kind, e))?,
        None => return Ok(Vec::new()),
    };

    Ok(range
        .rows()
        .filter_map(|row| row.first())
        .filter(|cell| !matches!(cell, Data::Empty))
        .map(|cell| cell.to_string().trim().to_string())
        .filter(|cell| !cell.is_empty())
        .collect())
}

fn unparseable(kind: FileKind, err: impl fmt::Display) -> Error {
    tracing::warn!("Failed to parse {} upload: {}", kind, err);
    Error::Unparseable {
        kind: kind.to_string(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(filename: &str, contents: &[u8]) -> Option<CommentInput> {
        Some(CommentInput::File {
            filename: filename.to_string(),
            bytes: contents.to_vec(),
        })
    }

    #[test]
    fn test_file_kind_detection() {
        assert_eq!(FileKind::from_filename("comments.txt").unwrap(), FileKind::Txt);
        assert_eq!(FileKind::from_filename("Export.CSV").unwrap(), FileKind::Csv);
        assert_eq!(FileKind::from_filename("sheet.xls").unwrap(), FileKind::Xls);
        assert_eq!(FileKind::from_filename("archive.tar.xlsx").unwrap(), FileKind::Xlsx);
        assert_eq!(FileKind::from_filename(".txt").unwrap(), FileKind::Txt);
        assert!(matches!(FileKind::from_filename("notes."), Err(Error::UnsupportedFileType(ext)) if ext.is_empty()));
        assert!(matches!(FileKind::from_filename("report.pdf"), Err(Error::UnsupportedFileType(ext)) if ext == "pdf"));
        assert!(matches!(FileKind::from_filename("README"), Err(Error::UnsupportedFileType(_))));
    }

    #[test]
    fn test_text_is_split_and_trimmed() {
        let comments = parse_text("  first comment \n\n\r\nsecond comment\r\n   \nthird");
        assert_eq!(comments, vec!["first comment", "second comment", "third"]);
    }

    #[test]
    fn test_txt_upload() {
        let comments = extract_comments(file("notes.txt", b"Loved it\nHated it\n")).unwrap();
        assert_eq!(comments, vec!["Loved it", "Hated it"]);
    }

    #[test]
    fn test_csv_drops_blank_rows() {
        let csv = b"Great product,5\n,3\n\nTerrible support,1\n   ,2\nWould buy again\n";
        let comments = extract_comments(file("reviews.csv", csv)).unwrap();
        // six input rows: one fully blank line, two rows with an empty first cell
        assert_eq!(comments, vec!["Great product", "Terrible support", "Would buy again"]);
    }

    #[test]
    fn test_csv_quoted_cells_keep_commas() {
        let csv = b"\"Fast, friendly and cheap\",x\n\"Slow\"\n";
        let comments = extract_comments(file("reviews.csv", csv)).unwrap();
        assert_eq!(comments, vec!["Fast, friendly and cheap", "Slow"]);
    }

    #[test]
    fn test_unsupported_upload_is_rejected() {
        let result = extract_comments(file("report.pdf", b"%PDF-1.4"));
        assert!(matches!(result, Err(Error::UnsupportedFileType(_))));
    }

    #[test]
    fn test_missing_and_empty_inputs() {
        assert!(matches!(extract_comments(None), Err(Error::NoInput)));
        assert!(matches!(extract_comments(file("empty.txt", b"")), Err(Error::NoComments)));
        assert!(matches!(
            extract_comments(Some(CommentInput::Text("  \n \n".to_string()))),
            Err(Error::NoComments)
        ));
    }

    #[test]
    fn test_corrupt_content_is_unparseable() {
        let result = extract_comments(file("broken.xlsx", b"definitely not a zip archive"));
        assert!(matches!(result, Err(Error::Unparseable { ref kind, .. }) if kind == "xlsx"));

        let result = extract_comments(file("latin1.txt", &[0x66, 0x6f, 0xff, 0xfe]));
        assert!(matches!(result, Err(Error::Unparseable { ref kind, .. }) if kind == "txt"));
    }
}
