use crate::element::Element;
use crate::render_md::{RenderPlan, render_element};
use crate::types::Alignment;

/// Pipe table.
///
/// Rows shorter than the widest row (header included) are padded with empty
/// cells. Columns without an explicit alignment take the pad alignment, which
/// is the last given alignment unless set with [`Table::alignment_pad`], and
/// `Left` when nothing was given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    header: Vec<Element>,
    rows: Vec<Vec<Element>>,
    alignment: Vec<Alignment>,
    alignment_pad: Option<Alignment>,
    compact: bool,
}

impl Table {
    pub fn new<T: Into<Element>>(header: impl IntoIterator<Item = T>) -> Self {
        Self {
            header: cells(header),
            ..Self::default()
        }
    }

    /// Build a table from named columns. Short columns are padded with empty
    /// cells.
    pub fn from_columns<K, C, T>(columns: impl IntoIterator<Item = (K, C)>) -> Self
    where
        K: Into<Element>,
        C: IntoIterator<Item = T>,
        T: Into<Element>,
    {
        let mut header = Vec::new();
        let mut data: Vec<Vec<Element>> = Vec::new();
        for (name, column) in columns {
            header.push(name.into());
            data.push(cells(column));
        }
        let height = data.iter().map(Vec::len).max().unwrap_or(0);
        let rows = (0..height)
            .map(|i| {
                data.iter()
                    .map(|column| column.get(i).cloned().unwrap_or_else(empty_cell))
                    .collect()
            })
            .collect();
        Self {
            header,
            rows,
            ..Self::default()
        }
    }

    pub fn row<T: Into<Element>>(mut self, row: impl IntoIterator<Item = T>) -> Self {
        self.append(row);
        self
    }

    pub fn append<T: Into<Element>>(&mut self, row: impl IntoIterator<Item = T>) {
        self.rows.push(cells(row));
    }

    /// Per-column alignments, left to right.
    pub fn alignment(mut self, alignment: impl IntoIterator<Item = Alignment>) -> Self {
        self.alignment = alignment.into_iter().collect();
        self
    }

    /// Alignment for columns past the end of the alignment list.
    pub fn alignment_pad(mut self, pad: Alignment) -> Self {
        self.alignment_pad = Some(pad);
        self
    }

    /// Align every column the same way.
    pub fn uniform_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment.clear();
        self.alignment_pad = Some(alignment);
        self
    }

    /// Render without padding or outer pipes.
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn header(&self) -> &[Element] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<Element>] {
        &self.rows
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Number of columns after padding.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }

    fn alignments(&self, width: usize) -> Vec<Alignment> {
        let pad = self
            .alignment_pad
            .or_else(|| self.alignment.last().copied())
            .unwrap_or_default();
        self.alignment
            .iter()
            .copied()
            .chain(std::iter::repeat(pad))
            .take(width)
            .collect()
    }

    pub(crate) fn render(&self, plan: &RenderPlan) -> String {
        let width = self.width();
        let render_row = |row: &[Element]| -> Vec<String> {
            let mut rendered: Vec<String> =
                row.iter().map(|cell| render_element(cell, plan)).collect();
            rendered.resize(width, String::new());
            rendered
        };
        let header = render_row(&self.header);
        let body: Vec<Vec<String>> = self.rows.iter().map(|row| render_row(&row[..])).collect();
        let alignments = self.alignments(width);

        if self.compact {
            let markers: Vec<String> = alignments.iter().map(|a| a.marker(3)).collect();
            return std::iter::once(&header)
                .chain(std::iter::once(&markers))
                .chain(body.iter())
                .map(|row| row.join("|"))
                .collect::<Vec<_>>()
                .join("\n");
        }

        let mut widths = vec![3; width];
        for row in std::iter::once(&header).chain(body.iter()) {
            for (column, cell) in row.iter().enumerate() {
                widths[column] = widths[column].max(cell.chars().count());
            }
        }
        let pad_row = |row: &[String]| -> Vec<String> {
            row.iter()
                .zip(&widths)
                .zip(&alignments)
                .map(|((cell, &w), align)| align.pad(cell, w))
                .collect()
        };
        let markers: Vec<String> = alignments
            .iter()
            .zip(&widths)
            .map(|(align, &w)| align.marker(w))
            .collect();

        std::iter::once(pad_row(&header))
            .chain(std::iter::once(markers))
            .chain(body.iter().map(|row| pad_row(&row[..])))
            .map(|row| format!("| {} |", row.join(" | ")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn cells<T: Into<Element>>(row: impl IntoIterator<Item = T>) -> Vec<Element> {
    row.into_iter().map(Into::into).collect()
}

fn empty_cell() -> Element {
    Element::Raw(String::new())
}
