use cl_analysis::input::{parse_file, FileKind};
use cl_analysis::{extract_comments, CommentInput};

const COMMENTS_XLSX: &[u8] = include_bytes!("fixtures/comments.xlsx");

// Sheet "Comments": A1 text (B1 also set), B2 only, A3 blank, A4 5, A5 text, A6 4.5.
// Sheet "Notes" holds one more comment that must not be read.
#[test]
fn test_xlsx_reads_first_column_of_first_sheet() {
    let comments = parse_file(FileKind::Xlsx, COMMENTS_XLSX).unwrap();
    assert_eq!(comments, vec!["Great product", "5", "Awful support", "4.5"]);
}

#[test]
fn test_xlsx_upload_through_extract() {
    let comments = extract_comments(Some(CommentInput::File {
        filename: "Survey.XLSX".to_string(),
        bytes: COMMENTS_XLSX.to_vec(),
    }))
    .unwrap();
    assert_eq!(comments.len(), 4);
    assert!(!comments.iter().any(|c| c == "only in column B" || c == "From the second sheet"));
}
