//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from a static table description.

/// Table name and column list of one record type. The primary key is the first column.
#[derive(Clone, Copy, Debug)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

impl Table {
    pub fn pk(&self) -> &'static str {
        self.columns[0]
    }

    /// Columns after the primary key, in bind order.
    pub fn fields(&self) -> &'static [&'static str] {
        &self.columns[1..]
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains(&column)
    }
}

/// Quote identifier for PostgreSQL (safe: only from static table descriptions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn select_column_list(table: &Table) -> String {
    table
        .columns
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT one row by `column` (the primary key or an alternate key). Caller binds the key as $1.
/// On a duplicated alternate key the row with the lowest primary key wins.
pub fn select_by(table: &Table, column: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1 ORDER BY {} LIMIT 1",
        select_column_list(table),
        quoted(table.name),
        quoted(column),
        quoted(table.pk())
    )
}

/// SELECT all rows, or rows where `filter` equals $1, ordered by primary key.
pub fn select_list(table: &Table, filter: Option<&str>) -> String {
    let where_clause = filter
        .map(|col| format!(" WHERE {} = $1", quoted(col)))
        .unwrap_or_default();
    format!(
        "SELECT {} FROM {}{} ORDER BY {}",
        select_column_list(table),
        quoted(table.name),
        where_clause,
        quoted(table.pk())
    )
}

/// INSERT every column. Placeholders follow column order, primary key first.
pub fn insert(table: &Table) -> String {
    let placeholders: Vec<String> = (1..=table.columns.len()).map(|n| format!("${}", n)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quoted(table.name),
        select_column_list(table),
        placeholders.join(", ")
    )
}

/// UPDATE every non-key column by primary key. The key binds as $1, fields as $2.. in order.
pub fn update(table: &Table) -> String {
    let sets: Vec<String> = table
        .fields()
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{} = ${}", quoted(col), i + 2))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = $1",
        quoted(table.name),
        sets.join(", "),
        quoted(table.pk())
    )
}

/// DELETE by primary key ($1).
pub fn delete(table: &Table) -> String {
    format!("DELETE FROM {} WHERE {} = $1", quoted(table.name), quoted(table.pk()))
}
