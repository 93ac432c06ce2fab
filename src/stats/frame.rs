use std::io::Read;

/// One provider response held as a table of text cells.
///
/// Column names are lowercased on construction so candidate lookups are
/// case-insensitive. Cells stay as text; `number` parses on demand and treats
/// blank or unparsable cells as missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Frame {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let columns = columns
            .into_iter()
            .map(|c| normalize_header(&c))
            .collect();
        Self { columns, rows }
    }

    /// Decode a CSV document with a header row.
    ///
    /// Savant leaderboards sometimes prefix the header with a UTF-8 BOM and pad
    /// cells with spaces; both are stripped. Ragged rows are accepted.
    pub fn from_csv_reader<R: Read>(rdr: R) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(rdr);

        let columns: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first candidate column present, in priority order.
    /// `None` means no candidate exists in this frame.
    pub fn find_column(&self, candidates: &[&str]) -> Option<usize> {
        candidates.iter().find_map(|candidate| {
            self.columns
                .iter()
                .position(|c| c.eq_ignore_ascii_case(candidate))
        })
    }

    pub fn text(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    pub fn number(&self, row: usize, col: usize) -> Option<f64> {
        let cell = self.text(row, col)?.trim();
        if cell.is_empty() {
            return None;
        }
        cell.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// New frame with the same columns and only the rows whose `col` cell
    /// satisfies `keep`. Rows missing the cell are dropped.
    pub fn filter_by_text(&self, col: usize, keep: impl Fn(&str) -> bool) -> Frame {
        let rows = self
            .rows
            .iter()
            .filter(|row| row.get(col).is_some_and(|cell| keep(cell)))
            .cloned()
            .collect();

        Frame {
            columns: self.columns.clone(),
            rows,
        }
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(csv_data: &str) -> Frame {
        Frame::from_csv_reader(csv_data.as_bytes()).unwrap()
    }

    #[test]
    fn decodes_savant_style_csv() {
        let f = frame(
            "\u{feff}\"last_name, first_name\",player_id,Team,pa,xwoba\n\
             \"Judge, Aaron\",592450,NYY,704,0.458\n\
             \"Soto, Juan\",665742, NYM ,713,0.422",
        );

        assert_eq!(
            f.columns(),
            &["last_name, first_name", "player_id", "team", "pa", "xwoba"]
        );
        assert_eq!(f.len(), 2);
        assert_eq!(f.text(0, 0), Some("Judge, Aaron"));
        assert_eq!(f.text(1, 2), Some("NYM"));
        assert_eq!(f.number(1, 3), Some(713.0));
    }

    #[test]
    fn header_only_document_is_empty() {
        let f = frame("team,pa,xwoba\n");
        assert!(f.is_empty());
        assert_eq!(f.columns().len(), 3);
    }

    #[test]
    fn blank_document_has_no_columns() {
        let f = frame("");
        assert!(f.is_empty());
        assert!(f.columns().is_empty());
    }

    #[test]
    fn find_column_respects_candidate_order() {
        let f = frame("team,attempts,team_name_alt\nNYY,10,NYY");

        assert_eq!(f.find_column(&["team_name_alt", "team"]), Some(2));
        assert_eq!(f.find_column(&["pa", "attempts"]), Some(1));
        assert_eq!(f.find_column(&["xwoba", "est_woba"]), None);
    }

    #[test]
    fn number_treats_blank_and_garbage_as_missing() {
        let f = frame("a,b,c,d\n1.5,,abc,nan");

        assert_eq!(f.number(0, 0), Some(1.5));
        assert_eq!(f.number(0, 1), None);
        assert_eq!(f.number(0, 2), None);
        assert_eq!(f.number(0, 3), None);
        assert_eq!(f.number(0, 9), None);
        assert_eq!(f.number(5, 0), None);
    }

    #[test]
    fn ragged_rows_are_tolerated() {
        let f = frame("team,pa\nNYY\nBOS,300");
        assert_eq!(f.len(), 2);
        assert_eq!(f.text(0, 1), None);

        let kept = f.filter_by_text(1, |_| true);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept.text(0, 0), Some("BOS"));
    }

    #[test]
    fn filter_keeps_columns() {
        let f = frame("team,pa\nNYY,100\nBOS,200\nNYY,300");
        let nyy = f.filter_by_text(0, |t| t == "NYY");

        assert_eq!(nyy.columns(), f.columns());
        assert_eq!(nyy.len(), 2);
        assert_eq!(nyy.number(1, 1), Some(300.0));
    }

    #[test]
    fn new_lowercases_columns() {
        let f = Frame::new(
            vec!["Team".to_string(), " PA ".to_string()],
            vec![vec!["NYY".to_string(), "12".to_string()]],
        );
        assert_eq!(f.columns(), &["team", "pa"]);
        assert_eq!(f.find_column(&["pa"]), Some(1));
    }
}
