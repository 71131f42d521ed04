//! Generic table: column descriptors over any row type
//!
//! One `TableView` serves every collection listing. Rows are filtered by a
//! case-insensitive text match over all rendered cells, sorted stably by
//! one column, then paginated.

use crate::search::compare_labels;
use crate::source::EntityRecord;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Rows per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Comparable cell value
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    /// Numeric when the text parses as a number
    pub fn from_text(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => SortKey::Number(n),
            _ => SortKey::Text(text.to_string()),
        }
    }

    fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
            (SortKey::Text(a), SortKey::Text(b)) => compare_labels(a, b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

type Render<R> = Box<dyn Fn(&R) -> String + Send + Sync>;
type KeyFn<R> = Box<dyn Fn(&R) -> SortKey + Send + Sync>;

/// One column: header, cell renderer, optional sort key
pub struct Column<R> {
    header: String,
    render: Render<R>,
    sort_key: Option<KeyFn<R>>,
}

impl<R> Column<R> {
    /// Unsortable column
    pub fn new(header: impl Into<String>, render: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        Column {
            header: header.into(),
            render: Box::new(render),
            sort_key: None,
        }
    }

    /// Sort on the rendered cell text
    pub fn sortable(self) -> Self
    where
        R: 'static,
    {
        let Column { header, render, .. } = self;
        let render = Arc::new(render);
        let for_key = Arc::clone(&render);
        Column {
            header,
            render: Box::new(move |row: &R| render(row)),
            sort_key: Some(Box::new(move |row: &R| SortKey::from_text(&for_key(row)))),
        }
    }

    /// Sort on an explicit key
    pub fn with_sort_key(mut self, key: impl Fn(&R) -> SortKey + Send + Sync + 'static) -> Self {
        self.sort_key = Some(Box::new(key));
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn is_sortable(&self) -> bool {
        self.sort_key.is_some()
    }

    pub fn render(&self, row: &R) -> String {
        (self.render)(row)
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .field("sortable", &self.is_sortable())
            .finish()
    }
}

impl Column<EntityRecord> {
    /// Sortable column showing one record field
    pub fn field(key: &str) -> Self {
        let owned = key.to_string();
        Column::new(key, move |row: &EntityRecord| row.text(&owned)).sortable()
    }
}

/// Filter, sort and paginate rows of `R`
#[derive(Debug)]
pub struct TableView<R> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    filter: String,
    sort: Option<(usize, SortDirection)>,
    page_size: usize,
}

impl<R> TableView<R> {
    pub fn new(columns: Vec<Column<R>>, rows: Vec<R>) -> Self {
        TableView {
            columns,
            rows,
            filter: String::new(),
            sort: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Page size; zero is treated as one
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(Column::header).collect()
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// Sort by the column named `header` (case-insensitive).
    ///
    /// Returns false, leaving the order unchanged, when no sortable column
    /// has that header.
    pub fn sort_by(&mut self, header: &str, direction: SortDirection) -> bool {
        let position = self
            .columns
            .iter()
            .position(|c| c.is_sortable() && c.header.eq_ignore_ascii_case(header));
        match position {
            Some(index) => {
                self.sort = Some((index, direction));
                true
            }
            None => false,
        }
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    pub fn render_row(&self, row: &R) -> Vec<String> {
        self.columns.iter().map(|c| c.render(row)).collect()
    }

    fn matches(&self, row: &R, needle: &str) -> bool {
        needle.is_empty()
            || self
                .columns
                .iter()
                .any(|c| c.render(row).to_lowercase().contains(needle))
    }

    /// Filtered and sorted rows
    pub fn rows(&self) -> Vec<&R> {
        let needle = self.filter.to_lowercase();
        let mut rows: Vec<&R> = self.rows.iter().filter(|row| self.matches(row, &needle)).collect();

        if let Some((index, direction)) = self.sort {
            if let Some(key) = self.columns.get(index).and_then(|c| c.sort_key.as_ref()) {
                let mut keyed: Vec<(SortKey, &R)> = rows.into_iter().map(|row| (key(row), row)).collect();
                keyed.sort_by(|(a, _), (b, _)| match direction {
                    SortDirection::Ascending => a.compare(b),
                    SortDirection::Descending => b.compare(a),
                });
                rows = keyed.into_iter().map(|(_, row)| row).collect();
            }
        }
        rows
    }

    /// Matching row count
    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of pages; an empty table still has one (empty) page
    pub fn page_count(&self) -> usize {
        self.len().div_ceil(self.page_size).max(1)
    }

    /// Rows of page `index`, counting from zero
    pub fn page(&self, index: usize) -> Vec<&R> {
        self.rows()
            .into_iter()
            .skip(index.saturating_mul(self.page_size))
            .take(self.page_size)
            .collect()
    }
}

impl TableView<EntityRecord> {
    /// Table over collection rows with one column per field of the first
    /// row. URIs are left out; the id identifies the row.
    pub fn for_records(records: Vec<EntityRecord>) -> Self {
        let columns = records
            .first()
            .map(|first| {
                first
                    .keys()
                    .filter(|key| *key != "uri")
                    .map(Column::<EntityRecord>::field)
                    .collect()
            })
            .unwrap_or_default();
        TableView::new(columns, records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Person {
        name: &'static str,
        works: u32,
    }

    fn table() -> TableView<Person> {
        TableView::new(
            vec![
                Column::new("Name", |p: &Person| p.name.to_string()).sortable(),
                Column::new("Works", |p: &Person| p.works.to_string())
                    .with_sort_key(|p| SortKey::Number(p.works as f64)),
                Column::new("Note", |_: &Person| "-".to_string()),
            ],
            vec![
                Person { name: "Saadia Gaon", works: 9 },
                Person { name: "Abraham ibn Daud", works: 2 },
                Person { name: "Gersonides", works: 12 },
                Person { name: "Ábraham bar Hiyya", works: 2 },
            ],
        )
    }

    fn names(rows: &[&Person]) -> Vec<&'static str> {
        rows.iter().map(|p| p.name).collect()
    }

    #[test]
    fn test_filter_is_case_insensitive_over_cells() {
        let mut table = table();
        table.set_filter("ABRAHAM");
        assert_eq!(table.len(), 1);
        table.set_filter("12");
        assert_eq!(names(&table.rows()), vec!["Gersonides"]);
    }

    #[test]
    fn test_sort_text_uses_collation() {
        let mut table = table();
        assert!(table.sort_by("name", SortDirection::Ascending));
        assert_eq!(
            names(&table.rows()),
            vec!["Ábraham bar Hiyya", "Abraham ibn Daud", "Gersonides", "Saadia Gaon"]
        );
    }

    #[test]
    fn test_numeric_sort_is_stable() {
        let mut table = table();
        table.sort_by("Works", SortDirection::Descending);
        assert_eq!(
            names(&table.rows()),
            vec!["Gersonides", "Saadia Gaon", "Abraham ibn Daud", "Ábraham bar Hiyya"]
        );
        table.sort_by("Works", SortDirection::Ascending);
        assert_eq!(names(&table.rows())[..2], ["Abraham ibn Daud", "Ábraham bar Hiyya"]);
    }

    #[test]
    fn test_unsortable_column_rejected() {
        let mut table = table();
        assert!(!table.sort_by("Note", SortDirection::Ascending));
        assert!(!table.sort_by("Missing", SortDirection::Ascending));
        assert_eq!(names(&table.rows())[0], "Saadia Gaon");
    }

    #[test]
    fn test_pagination() {
        let table = table().with_page_size(3);
        assert_eq!(table.page_count(), 2);
        assert_eq!(table.page(0).len(), 3);
        assert_eq!(names(&table.page(1)), vec!["Ábraham bar Hiyya"]);
        assert!(table.page(2).is_empty());

        let empty: TableView<Person> = TableView::new(vec![], vec![]);
        assert_eq!(empty.page_count(), 1);
    }

    #[test]
    fn test_for_records() {
        let table = TableView::for_records(vec![
            EntityRecord::new()
                .with("id", "w2")
                .with("uri", "http://x#w2")
                .with("label", "Moreh Nevukhim")
                .with("year", 1190),
            EntityRecord::new()
                .with("id", "w1")
                .with("uri", "http://x#w1")
                .with("label", "Kuzari")
                .with("year", 1140),
        ]);
        assert_eq!(table.headers(), vec!["id", "label", "year"]);

        let mut table = table;
        table.sort_by("year", SortDirection::Ascending);
        assert_eq!(table.rows()[0].id(), "w1");
        assert_eq!(table.render_row(table.rows()[0]), vec!["w1", "Kuzari", "1140"]);
    }
}
