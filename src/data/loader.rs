//! CSV question bank reader.
//!
//! The canonical file is UTF-8, comma-delimited, with a header row naming
//! the columns:
//!
//! ```text
//! question,option_a,option_b,option_c,option_d,option_e,answer,reference_document,reference_clause
//! ```
//!
//! `option_c` through `option_e` may be absent or left blank. Column order
//! does not matter and names are matched case-insensitively; bare letters
//! (`A`..`E`) and the titles used by the Vietnamese bank (`Câu hỏi`,
//! `Phương án A`, `Đ.án đúng`, ...) are accepted as well.
//!
//! The header does not have to be the first line. Some exports carry a
//! title row above it, so the reader scans the first few rows and promotes
//! the first one that names every required column.

use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::error::LoadError;
use crate::models::{OptionLabel, QuestionRecord, QuizOption, Reference};

/// How many leading rows are considered when looking for the header.
const HEADER_SCAN_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Question,
    Option(OptionLabel),
    Answer,
    Document,
    Clause,
}

fn classify(header: &str) -> Option<Column> {
    let name = header.trim_start_matches('\u{feff}').trim().to_lowercase();

    match name.as_str() {
        "question" | "question_text" | "câu hỏi" => return Some(Column::Question),
        "answer" | "correct" | "correct_answer" | "đ.án đúng" | "đáp án đúng" => {
            return Some(Column::Answer);
        }
        "reference_document" | "document" | "số văn bản tham chiếu (kèm trích yếu văn bản)" => {
            return Some(Column::Document);
        }
        "reference_clause" | "clause" | "điều khoản tham chiếu cụ thể" => {
            return Some(Column::Clause);
        }
        _ => {}
    }

    let letter = ["option_", "option ", "phương án "]
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .unwrap_or(name.as_str());
    if letter.chars().count() != 1 {
        return None;
    }
    letter.parse().ok().map(Column::Option)
}

/// Positions of the known columns within a row.
#[derive(Debug, Default)]
struct ColumnMap {
    question: Option<usize>,
    options: [Option<usize>; 5],
    answer: Option<usize>,
    document: Option<usize>,
    clause: Option<usize>,
}

impl ColumnMap {
    fn from_header(row: &StringRecord) -> Self {
        let mut map = Self::default();
        for (index, cell) in row.iter().enumerate() {
            let slot = match classify(cell) {
                Some(Column::Question) => &mut map.question,
                Some(Column::Option(label)) => &mut map.options[label as usize],
                Some(Column::Answer) => &mut map.answer,
                Some(Column::Document) => &mut map.document,
                Some(Column::Clause) => &mut map.clause,
                None => continue,
            };
            // First occurrence wins.
            slot.get_or_insert(index);
        }
        map
    }

    fn missing(&self) -> Vec<String> {
        let required = [
            ("question", self.question),
            ("option_a", self.options[OptionLabel::A as usize]),
            ("option_b", self.options[OptionLabel::B as usize]),
            ("answer", self.answer),
            ("reference_document", self.document),
            ("reference_clause", self.clause),
        ];
        required
            .iter()
            .filter(|(_, position)| position.is_none())
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

/// Load and validate every question in a CSV file.
pub fn load_questions_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<QuestionRecord>, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = read_questions(file, path)?;
    info!(path = %path.display(), questions = questions.len(), "loaded question bank");
    Ok(questions)
}

/// Parse questions from any reader. `path` is only used in error messages.
pub fn read_questions<R: io::Read>(source: R, path: &Path) -> Result<Vec<QuestionRecord>, LoadError> {
    let csv_error = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let rows = reader
        .records()
        .collect::<Result<Vec<StringRecord>, csv::Error>>()
        .map_err(csv_error)?;

    let (header_index, columns) = find_header(&rows, path)?;
    debug!(row = header_index, "resolved question bank header");

    let mut questions = Vec::new();
    for row in &rows[header_index + 1..] {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let line = row.position().map_or(0, |position| position.line());
        questions.push(parse_row(row, &columns, questions.len(), line)?);
    }

    if questions.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(questions)
}

fn find_header(rows: &[StringRecord], path: &Path) -> Result<(usize, ColumnMap), LoadError> {
    if rows.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    let mut closest: Option<Vec<String>> = None;
    for (index, row) in rows.iter().take(HEADER_SCAN_ROWS).enumerate() {
        let columns = ColumnMap::from_header(row);
        let missing = columns.missing();
        if missing.is_empty() {
            return Ok((index, columns));
        }
        if closest.as_ref().is_none_or(|best| missing.len() < best.len()) {
            closest = Some(missing);
        }
    }

    Err(LoadError::MissingColumns {
        path: path.to_path_buf(),
        missing: closest.unwrap_or_default(),
    })
}

fn cell(row: &StringRecord, position: Option<usize>) -> &str {
    position.and_then(|index| row.get(index)).unwrap_or("").trim()
}

fn parse_row(
    row: &StringRecord,
    columns: &ColumnMap,
    id: usize,
    line: u64,
) -> Result<QuestionRecord, LoadError> {
    let options = OptionLabel::ALL
        .iter()
        .filter_map(|&label| {
            let value = cell(row, columns.options[label as usize]);
            (!value.is_empty()).then(|| QuizOption {
                label,
                value: value.to_string(),
            })
        })
        .collect();

    let correct_label: OptionLabel = cell(row, columns.answer)
        .parse()
        .map_err(|reason: String| LoadError::malformed(line, format!("answer {}", reason)))?;

    let record = QuestionRecord {
        id,
        text: cell(row, columns.question).to_string(),
        options,
        correct_label,
        reference: Reference {
            document: cell(row, columns.document).to_string(),
            clause: cell(row, columns.clause).to_string(),
        },
    };
    record
        .validate()
        .map_err(|reason| LoadError::malformed(line, reason))?;

    Ok(record)
}
