use crate::Fault;
use anyhow::Context;
use std::path::Path;

/// The comma-separated table behind policy files and tournament reports.
///
/// The first row is a header, the first column of every later row is its
/// identifier. Cells holding a comma or a quote are wrapped in quotes with
/// inner quotes doubled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }
    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
    pub fn header(&self) -> &[String] {
        &self.header
    }
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
    /// Sheet line number of the i-th data row (1-based, header is line 1).
    pub fn line(i: usize) -> usize {
        i + 2
    }

    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Ok(Self::parse(&text)?)
    }
    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.render())
            .with_context(|| format!("writing {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self, Fault> {
        let mut lines = text
            .trim_end()
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim_end_matches('\r')));
        let header = match lines.next() {
            Some((n, line)) => Self::split(n, line)?,
            None => {
                return Err(Fault::Malformed {
                    line: 1,
                    reason: "missing header".into(),
                });
            }
        };
        let mut sheet = Self::new(header);
        for (n, line) in lines {
            let row = Self::split(n, line)?;
            if row.len() != sheet.header.len() {
                return Err(Fault::Malformed {
                    line: n,
                    reason: format!("{} cells, header has {}", row.len(), sheet.header.len()),
                });
            }
            sheet.push(row);
        }
        Ok(sheet)
    }

    pub fn render(&self) -> String {
        std::iter::once(&self.header)
            .chain(self.rows.iter())
            .map(|row| {
                row.iter()
                    .map(|cell| Self::quote(cell))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .map(|line| line + "\n")
            .collect()
    }

    fn quote(cell: &str) -> String {
        if cell.contains(',') || cell.contains('"') {
            format!("\"{}\"", cell.replace('"', "\"\""))
        } else {
            cell.to_string()
        }
    }

    fn split(n: usize, line: &str) -> Result<Vec<String>, Fault> {
        let mut cells = Vec::new();
        let mut cell = String::new();
        let mut quoted = false;
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            match (quoted, c) {
                (true, '"') if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                (true, '"') => quoted = false,
                (true, c) => cell.push(c),
                (false, '"') if cell.is_empty() => quoted = true,
                (false, ',') => cells.push(std::mem::take(&mut cell)),
                (false, c) => cell.push(c),
            }
        }
        if quoted {
            return Err(Fault::Malformed {
                line: n,
                reason: "unterminated quote".into(),
            });
        }
        cells.push(cell);
        Ok(cells)
    }
}
