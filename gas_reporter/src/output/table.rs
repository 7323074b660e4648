//!
//! A Markdown pipe table.
//!

///
/// A Markdown pipe table.
///
/// A table without rows renders its header and separator only.
///
#[derive(Debug)]
pub struct Table {
    /// Column titles.
    pub header: Vec<String>,
    /// Data rows; each must have as many cells as the header.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    ///
    /// A shortcut constructor.
    ///
    pub fn new<const N: usize>(header: [&str; N]) -> Self {
        Self {
            header: header.into_iter().map(str::to_owned).collect(),
            rows: Vec::new(),
        }
    }

    ///
    /// Appends a data row.
    ///
    pub fn push<const N: usize>(&mut self, row: [String; N]) {
        debug_assert_eq!(N, self.header.len());
        self.rows.push(row.into());
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "| {} |", self.header.join(" | "))?;
        writeln!(
            f,
            "|{}|",
            self.header
                .iter()
                .map(|_| "---")
                .collect::<Vec<&str>>()
                .join("|")
        )?;
        for row in self.rows.iter() {
            writeln!(f, "| {} |", row.join(" | "))?;
        }
        Ok(())
    }
}
