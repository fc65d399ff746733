use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};

/// A single field value read out of a row for filtering or sorting.
///
/// `Missing` stands in for absent data (e.g. an unprocessed withdrawal has no
/// processed-at instant). It satisfies no active predicate and orders after
/// every present value, but it never causes an error.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Amount(f64),
    Count(i64),
    Timestamp(DateTime<Utc>),
    Missing,
}

impl FieldValue {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Timestamp(at) => Some(*at),
            _ => None,
        }
    }

    fn canonical_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(text) => Some(text.clone()),
            FieldValue::Amount(value) => Some(value.to_string()),
            FieldValue::Count(value) => Some(value.to_string()),
            FieldValue::Timestamp(_) | FieldValue::Missing => None,
        }
    }
}

/// A row type whose fields the table engine can read.
pub trait Tabular {
    type Field: Copy + Eq;

    fn field(&self, field: Self::Field) -> FieldValue;
}

/// One active filter condition. All active predicates combine with logical
/// AND; a predicate in its unset state (blank term, empty set, open range)
/// passes every row.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate<F> {
    /// Case-insensitive substring match on one text field.
    TextContains { field: F, term: String },
    /// Case-insensitive substring match across several fields; a row passes
    /// when any of them contains the term.
    TextAnyContains { fields: Vec<F>, term: String },
    /// Exact membership of the field's canonical text form in a value set.
    OneOf { field: F, values: Vec<String> },
    /// Inclusive calendar-date range over a timestamp field. Either bound may
    /// be open; both open means unset.
    DateRange {
        field: F,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl<F: Copy + Eq> Predicate<F> {
    pub fn is_active(&self) -> bool {
        match self {
            Predicate::TextContains { term, .. } => !term.trim().is_empty(),
            Predicate::TextAnyContains { term, .. } => !term.trim().is_empty(),
            Predicate::OneOf { values, .. } => !values.is_empty(),
            Predicate::DateRange { start, end, .. } => start.is_some() || end.is_some(),
        }
    }

    pub fn matches<R: Tabular<Field = F>>(&self, row: &R) -> bool {
        if !self.is_active() {
            return true;
        }

        match self {
            Predicate::TextContains { field, term } => text_contains(&row.field(*field), term),
            Predicate::TextAnyContains { fields, term } => fields
                .iter()
                .any(|field| text_contains(&row.field(*field), term)),
            Predicate::OneOf { field, values } => row
                .field(*field)
                .canonical_text()
                .is_some_and(|text| values.iter().any(|value| value == &text)),
            Predicate::DateRange { field, start, end } => {
                let Some(at) = row.field(*field).timestamp() else {
                    return false;
                };
                let day = at.date_naive();
                start.map_or(true, |from| day >= from) && end.map_or(true, |to| day <= to)
            }
        }
    }
}

fn text_contains(value: &FieldValue, term: &str) -> bool {
    let Some(text) = value.canonical_text() else {
        return false;
    };
    text.to_lowercase().contains(&term.trim().to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// The single active sort key: a field plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<F> {
    pub field: F,
    pub direction: SortDirection,
}

/// Compares two field values for ordering. Numeric and timestamp fields
/// compare naturally; text compares case-insensitively, the same casing rule
/// the filters use. `Missing` (and any mismatched pairing) orders last.
fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Text(a), FieldValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (FieldValue::Amount(a), FieldValue::Amount(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Count(a), FieldValue::Count(b)) => a.cmp(b),
        (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => a.cmp(b),
        (FieldValue::Missing, FieldValue::Missing) => Ordering::Equal,
        (FieldValue::Missing, _) => Ordering::Greater,
        (_, FieldValue::Missing) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

/// Stable sort; ties keep their original relative order.
pub fn sort_rows<R: Tabular>(rows: &mut [R], spec: SortSpec<R::Field>) {
    rows.sort_by(|a, b| {
        let ordering = compare_values(&a.field(spec.field), &b.field(spec.field));
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Keeps every row that satisfies all active predicates.
pub fn apply_filters<R>(rows: &[R], predicates: &[Predicate<R::Field>]) -> Vec<R>
where
    R: Tabular + Clone,
{
    rows.iter()
        .filter(|row| predicates.iter().all(|predicate| predicate.matches(*row)))
        .cloned()
        .collect()
}

/// Rows-per-page selection. Restricting this to an enumerated set rejects
/// invalid sizes at the input boundary; the engine itself never validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn from_rows(rows: usize) -> Option<Self> {
        match rows {
            10 => Some(PageSize::Ten),
            20 => Some(PageSize::Twenty),
            50 => Some(PageSize::Fifty),
            100 => Some(PageSize::Hundred),
            _ => None,
        }
    }

    pub fn rows(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

/// The visible slice request: 1-based page number plus page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub size: PageSize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            page: 1,
            size: PageSize::default(),
        }
    }
}

/// The output of the pipeline: the visible rows plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<R> {
    pub rows: Vec<R>,
    pub page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
}

/// Slices one page out of the ordered rows. The requested page is clamped
/// into `[1, total_pages]`; an empty input still yields a single empty page.
pub fn paginate<R: Clone>(rows: &[R], window: PageWindow) -> PageView<R> {
    let size = window.size.rows();
    let total_rows = rows.len();
    let total_pages = total_rows.div_ceil(size).max(1);
    let page = window.page.clamp(1, total_pages);

    let start = (page - 1) * size;
    let end = (start + size).min(total_rows);
    let page_rows = if start < total_rows {
        rows[start..end].to_vec()
    } else {
        Vec::new()
    };

    PageView {
        rows: page_rows,
        page,
        total_pages,
        total_rows,
    }
}

/// The whole filter → sort → paginate pipeline as one pure value. Recomputed
/// from scratch on every input change; there is no incremental state.
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery<F> {
    pub predicates: Vec<Predicate<F>>,
    pub sort: Option<SortSpec<F>>,
    pub window: PageWindow,
}

impl<F: Copy + Eq> Default for TableQuery<F> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
            sort: None,
            window: PageWindow::default(),
        }
    }
}

impl<F: Copy + Eq> TableQuery<F> {
    pub fn run<R>(&self, rows: &[R]) -> PageView<R>
    where
        R: Tabular<Field = F> + Clone,
    {
        let mut filtered = apply_filters(rows, &self.predicates);
        if let Some(spec) = self.sort {
            sort_rows(&mut filtered, spec);
        }
        paginate(&filtered, self.window)
    }

    /// Filter, sort, and page-size changes restart paging at the first page;
    /// only explicit navigation keeps the current position.
    pub fn set_predicates(&mut self, predicates: Vec<Predicate<F>>) {
        self.predicates = predicates;
        self.window.page = 1;
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec<F>>) {
        self.sort = sort;
        self.window.page = 1;
    }

    pub fn set_size(&mut self, size: PageSize) {
        self.window.size = size;
        self.window.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.window.page = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum EntryField {
        Name,
        Category,
        Amount,
        At,
        Note,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        name: String,
        category: String,
        amount: f64,
        at: DateTime<Utc>,
        note: Option<String>,
    }

    impl Tabular for Entry {
        type Field = EntryField;

        fn field(&self, field: EntryField) -> FieldValue {
            match field {
                EntryField::Name => FieldValue::Text(self.name.clone()),
                EntryField::Category => FieldValue::Text(self.category.clone()),
                EntryField::Amount => FieldValue::Amount(self.amount),
                EntryField::At => FieldValue::Timestamp(self.at),
                EntryField::Note => self
                    .note
                    .clone()
                    .map(FieldValue::Text)
                    .unwrap_or(FieldValue::Missing),
            }
        }
    }

    fn entry(name: &str, category: &str, amount: f64, day: u32) -> Entry {
        Entry {
            name: name.to_string(),
            category: category.to_string(),
            amount,
            at: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
            note: None,
        }
    }

    fn sample_entries() -> Vec<Entry> {
        vec![
            entry("Alice", "deposit", 120.0, 3),
            entry("bob", "withdrawal", 45.5, 9),
            entry("Carol", "deposit", 300.0, 15),
            entry("dave", "bet", 12.0, 21),
        ]
    }

    #[test]
    fn inactive_predicates_pass_every_row() {
        let rows = sample_entries();
        let predicates = vec![
            Predicate::TextContains {
                field: EntryField::Name,
                term: "   ".to_string(),
            },
            Predicate::OneOf {
                field: EntryField::Category,
                values: Vec::new(),
            },
            Predicate::DateRange {
                field: EntryField::At,
                start: None,
                end: None,
            },
        ];

        let filtered = apply_filters(&rows, &predicates);

        assert_eq!(filtered.len(), rows.len(), "unset filters should pass all rows");
    }

    #[test]
    fn text_filter_is_case_insensitive_substring() {
        let rows = sample_entries();
        let predicates = vec![Predicate::TextContains {
            field: EntryField::Name,
            term: "ALI".to_string(),
        }];

        let filtered = apply_filters(&rows, &predicates);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Alice");
    }

    #[test]
    fn filtered_rows_satisfy_every_active_predicate() {
        let rows = sample_entries();
        let predicates = vec![
            Predicate::OneOf {
                field: EntryField::Category,
                values: vec!["deposit".to_string()],
            },
            Predicate::DateRange {
                field: EntryField::At,
                start: Some(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
                end: None,
            },
        ];

        let filtered = apply_filters(&rows, &predicates);

        assert_eq!(filtered.len(), 1, "only Carol matches both predicates");
        for row in &filtered {
            assert!(
                predicates.iter().all(|p| p.matches(row)),
                "every kept row should satisfy every predicate"
            );
        }
    }

    #[test]
    fn missing_field_fails_active_filter_but_passes_unset_one() {
        let mut rows = sample_entries();
        rows[0].note = Some("flagged".to_string());

        let active = vec![Predicate::TextContains {
            field: EntryField::Note,
            term: "flag".to_string(),
        }];
        let unset = vec![Predicate::TextContains {
            field: EntryField::Note,
            term: String::new(),
        }];

        assert_eq!(apply_filters(&rows, &active).len(), 1);
        assert_eq!(apply_filters(&rows, &unset).len(), rows.len());
    }

    #[test]
    fn single_day_range_matches_only_that_day() {
        let rows = sample_entries();
        let day = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        let predicates = vec![Predicate::DateRange {
            field: EntryField::At,
            start: Some(day),
            end: Some(day),
        }];

        let filtered = apply_filters(&rows, &predicates);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "bob");
    }

    #[test]
    fn sort_is_stable_and_idempotent() {
        let mut rows = sample_entries();
        rows.push(entry("Erin", "deposit", 120.0, 27));
        let spec = SortSpec {
            field: EntryField::Amount,
            direction: SortDirection::Asc,
        };

        sort_rows(&mut rows, spec);
        let once = rows.clone();
        sort_rows(&mut rows, spec);

        assert_eq!(rows, once, "repeated sort should not reorder");
        // Alice (120.0) entered before Erin (120.0); stability keeps that order.
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["dave", "bob", "Alice", "Erin", "Carol"]);
    }

    #[test]
    fn text_sort_ignores_case() {
        let mut rows = sample_entries();
        sort_rows(
            &mut rows,
            SortSpec {
                field: EntryField::Name,
                direction: SortDirection::Asc,
            },
        );

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "bob", "Carol", "dave"]);
    }

    #[test]
    fn missing_values_sort_last_ascending() {
        let mut rows = sample_entries();
        rows[1].note = Some("checked".to_string());
        rows[3].note = Some("audit".to_string());

        sort_rows(
            &mut rows,
            SortSpec {
                field: EntryField::Note,
                direction: SortDirection::Asc,
            },
        );

        assert_eq!(rows[0].note.as_deref(), Some("audit"));
        assert_eq!(rows[1].note.as_deref(), Some("checked"));
        assert!(rows[2].note.is_none() && rows[3].note.is_none());
    }

    #[test]
    fn paginate_clamps_page_and_computes_totals() {
        let rows: Vec<i64> = (0..23).collect();
        let view = paginate(
            &rows,
            PageWindow {
                page: 9,
                size: PageSize::Ten,
            },
        );

        assert_eq!(view.total_pages, 3);
        assert_eq!(view.page, 3, "out-of-range page should clamp to the last");
        assert_eq!(view.rows, vec![20, 21, 22]);
        assert_eq!(view.total_rows, 23);
    }

    #[test]
    fn paginate_empty_source_yields_single_empty_page() {
        let rows: Vec<i64> = Vec::new();
        let view = paginate(&rows, PageWindow::default());

        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page, 1);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_rows, 0);
    }

    #[test]
    fn paginate_round_trip_reproduces_all_rows() {
        let rows: Vec<i64> = (0..57).collect();
        let size = PageSize::Twenty;
        let total_pages = paginate(&rows, PageWindow { page: 1, size }).total_pages;

        let mut collected = Vec::new();
        for page in 1..=total_pages {
            collected.extend(paginate(&rows, PageWindow { page, size }).rows);
        }

        assert_eq!(collected, rows, "pages concatenated in order should equal the input");
    }

    #[test]
    fn page_size_rejects_values_outside_the_allowed_set() {
        assert_eq!(PageSize::from_rows(20), Some(PageSize::Twenty));
        assert_eq!(PageSize::from_rows(25), None);
        assert_eq!(PageSize::from_rows(0), None);
    }

    #[test]
    fn query_pipeline_filters_sorts_and_pages() {
        // 100 rows, a filter narrowing to 23, page size 10: page 3 holds 3 rows.
        let rows: Vec<Entry> = (0..100)
            .map(|i| {
                let category = if i % 4 == 0 && i < 92 { "deposit" } else { "bet" };
                entry(&format!("user{i:03}"), category, i as f64, 1 + (i % 28) as u32)
            })
            .collect();

        let query = TableQuery {
            predicates: vec![Predicate::OneOf {
                field: EntryField::Category,
                values: vec!["deposit".to_string()],
            }],
            sort: Some(SortSpec {
                field: EntryField::Amount,
                direction: SortDirection::Asc,
            }),
            window: PageWindow {
                page: 3,
                size: PageSize::Ten,
            },
        };

        let view = query.run(&rows);

        assert_eq!(view.total_rows, 23);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.page, 3);
        assert_eq!(view.rows.len(), 3);
        assert!(view.rows.windows(2).all(|w| w[0].amount <= w[1].amount));
    }

    #[test]
    fn filter_change_restarts_paging_at_the_first_page() {
        // 60 rows viewed on page 5; a new filter narrows to 15 rows (2 pages).
        // The next view must be page 1, not a clamp onto the shrunken last page.
        let rows: Vec<Entry> = (0..60)
            .map(|i| {
                let category = if i < 15 { "deposit" } else { "bet" };
                entry(&format!("user{i:03}"), category, i as f64, 1 + (i % 28) as u32)
            })
            .collect();

        let mut query: TableQuery<EntryField> = TableQuery::default();
        query.set_page(5);
        assert_eq!(query.run(&rows).page, 5);

        query.set_predicates(vec![Predicate::OneOf {
            field: EntryField::Category,
            values: vec!["deposit".to_string()],
        }]);
        let view = query.run(&rows);

        assert_eq!(view.total_pages, 2);
        assert_eq!(view.page, 1, "a filter change should land on the first page");
        assert_eq!(view.rows.len(), 10);
    }

    #[test]
    fn sort_and_size_changes_reset_the_page_but_navigation_keeps_it() {
        let mut query: TableQuery<EntryField> = TableQuery::default();

        query.set_page(3);
        query.set_sort(Some(SortSpec {
            field: EntryField::Amount,
            direction: SortDirection::Desc,
        }));
        assert_eq!(query.window.page, 1);

        query.set_page(2);
        query.set_size(PageSize::Fifty);
        assert_eq!(query.window.page, 1);

        query.set_page(4);
        assert_eq!(query.window.page, 4, "plain navigation should not reset");
    }
}
