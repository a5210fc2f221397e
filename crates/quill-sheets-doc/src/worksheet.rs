//! Worksheet type

use std::collections::BTreeMap;

use quill_sheets_chart::{CanonicalChart, Chart};
use quill_sheets_core::{
    CellAddress, CellEntry, CellValue, Error, MergeRange, Result, StyleId, StyleRef,
    StyleRegistry, MAX_COLS, MAX_ROWS,
};
use serde::Serialize;

/// One cell: a value plus a resolved style id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub value: CellValue,
    pub style: StyleId,
}

impl Cell {
    fn new(value: CellValue, style: StyleId) -> Self {
        Self { value, style }
    }
}

/// A row or column grouping span
///
/// The outline level is an unvalidated pass-through; the renderer (or the
/// auxiliary grouping editor) is the authority on its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupSpan {
    pub start: u32,
    pub end: u32,
    pub outline_level: u8,
    pub hidden: bool,
}

/// Records which serialization path a sheet was built for
///
/// Sheets built for the auxiliary post-processing library keep the
/// renderer's streaming path and receive their grouping in a second pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineHint {
    /// Built for the primary renderer
    #[default]
    Primary,
    /// Built for the auxiliary document-editing library
    Auxiliary,
}

/// A column selector: letters or a 1-based index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
    Letter(String),
    Index(u32),
}

impl ColumnRef {
    /// Resolve to a validated 1-based column number
    pub fn resolve(&self) -> Result<u16> {
        match self {
            ColumnRef::Letter(letters) => CellAddress::letters_to_col(letters),
            ColumnRef::Index(col) => {
                if *col == 0 || *col > MAX_COLS as u32 {
                    Err(Error::ColumnOutOfBounds(*col, MAX_COLS))
                } else {
                    Ok(*col as u16)
                }
            }
        }
    }
}

impl From<&str> for ColumnRef {
    fn from(letters: &str) -> Self {
        ColumnRef::Letter(letters.to_string())
    }
}

impl From<u32> for ColumnRef {
    fn from(col: u32) -> Self {
        ColumnRef::Index(col)
    }
}

impl From<u16> for ColumnRef {
    fn from(col: u16) -> Self {
        ColumnRef::Index(col as u32)
    }
}

/// Charts anchored at one cell, stacked in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct ChartAnchor {
    pub cell: CellAddress,
    pub charts: Vec<CanonicalChart>,
}

/// A worksheet (single sheet in a workbook)
///
/// The cell grid is sparse; only written cells are stored. Rows can be
/// filled by random-access assignment, by the streaming append protocol, or
/// by bulk loading, and all three converge on the same grid.
#[derive(Debug, Default)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Sparse cell grid: row → column → cell (both 1-based)
    cells: BTreeMap<u32, BTreeMap<u16, Cell>>,
    /// Custom row heights
    row_heights: BTreeMap<u32, f64>,
    /// Custom column widths
    col_widths: BTreeMap<u16, f64>,
    /// Merged ranges (non-overlapping)
    merges: Vec<MergeRange>,
    /// Row grouping spans
    grouped_rows: Vec<GroupSpan>,
    /// Column grouping spans
    grouped_cols: Vec<GroupSpan>,
    /// Auto-filter ranges in canonical "A1:C1" form
    auto_filters: Vec<String>,
    /// Chart attachments in insertion order
    charts: Vec<ChartAnchor>,
    /// Pending streaming row buffer
    pending_row: Vec<Cell>,
    /// Next row the streaming protocol will commit to (1-based)
    next_row: u32,
    /// Pre-allocation hint carried into the canonical document
    dimension_hint: Option<(u32, u16)>,
    /// Which serialization path this sheet was built for
    engine_hint: EngineHint,
}

impl Worksheet {
    /// Create a new empty worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            next_row: 1,
            ..Self::default()
        }
    }

    /// Create a worksheet pre-filled from a 2-D value grid
    ///
    /// Values land at A1 onwards with the default style; the streaming
    /// cursor continues after the loaded rows.
    pub fn from_plain_data<S, R, V>(name: S, data: R) -> Result<Self>
    where
        S: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let mut sheet = Self::new(name);
        // Default-styled loads never touch the registry; a scratch one keeps
        // the append path uniform.
        let mut scratch = StyleRegistry::new();
        for row_values in data {
            for value in row_values {
                sheet.append(value, None, &mut scratch)?;
            }
            sheet.commit_row()?;
        }
        Ok(sheet)
    }

    /// Record a pre-allocation hint of `n_rows` x `n_cols`
    ///
    /// The hint is carried into the canonical document so the renderer can
    /// size its buffers up front; it does not materialize any cells.
    pub fn pre_allocate(&mut self, n_rows: u32, n_cols: u32) -> Result<()> {
        if n_rows > MAX_ROWS {
            return Err(Error::RowOutOfBounds(n_rows, MAX_ROWS));
        }
        if n_cols > MAX_COLS as u32 {
            return Err(Error::ColumnOutOfBounds(n_cols, MAX_COLS));
        }
        self.dimension_hint = Some((n_rows, n_cols as u16));
        Ok(())
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Which serialization path this sheet was built for
    pub fn engine_hint(&self) -> EngineHint {
        self.engine_hint
    }

    /// Mark this sheet as built for the auxiliary post-processing library
    pub fn set_engine_hint(&mut self, hint: EngineHint) {
        self.engine_hint = hint;
    }

    // === Cell access ===

    /// Read a cell; an unset cell reads as empty with the default style
    pub fn cell(&self, addr: CellAddress) -> Cell {
        self.cells
            .get(&addr.row)
            .and_then(|row| row.get(&addr.col))
            .cloned()
            .unwrap_or_default()
    }

    /// Read a cell's value; an unset cell reads as [`CellValue::Empty`]
    pub fn value(&self, addr: CellAddress) -> CellValue {
        self.cell(addr).value
    }

    /// Number of written cells
    pub fn cell_count(&self) -> usize {
        self.cells.values().map(BTreeMap::len).sum()
    }

    /// Check if no cell has been written
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over written cells in (row, col) order
    pub fn iter_cells(&self) -> impl Iterator<Item = (CellAddress, &Cell)> {
        self.cells.iter().flat_map(|(&row, cols)| {
            cols.iter()
                .map(move |(&col, cell)| (CellAddress { row, col }, cell))
        })
    }

    // === Cell mutation ===

    /// Set a cell value with the default style
    pub fn set_cell<V: Into<CellValue>>(&mut self, addr: CellAddress, value: V) {
        self.put(addr, Cell::new(value.into(), StyleId::DEFAULT));
    }

    /// Set a cell value with a style resolved through the registry
    ///
    /// Resolution happens here, at assignment time; an unknown style fails
    /// before the cell is touched.
    pub fn set_cell_styled<V, S>(
        &mut self,
        addr: CellAddress,
        value: V,
        style: S,
        registry: &mut StyleRegistry,
    ) -> Result<()>
    where
        V: Into<CellValue>,
        S: Into<StyleRef>,
    {
        let style = registry.resolve(&style.into())?;
        self.put(addr, Cell::new(value.into(), style));
        Ok(())
    }

    /// Apply a loosely-typed entry (value plus optional style tag)
    pub fn set_entry(
        &mut self,
        addr: CellAddress,
        entry: CellEntry,
        registry: &mut StyleRegistry,
    ) -> Result<()> {
        let style = match entry.style {
            Some(style) => registry.resolve(&style)?,
            None => StyleId::DEFAULT,
        };
        self.put(addr, Cell::new(entry.value, style));
        Ok(())
    }

    /// Remove a cell, leaving it unset
    pub fn clear_cell(&mut self, addr: CellAddress) {
        if let Some(row) = self.cells.get_mut(&addr.row) {
            row.remove(&addr.col);
            if row.is_empty() {
                self.cells.remove(&addr.row);
            }
        }
    }

    fn put(&mut self, addr: CellAddress, cell: Cell) {
        self.cells.entry(addr.row).or_default().insert(addr.col, cell);
    }

    // === Streaming append protocol ===

    /// Push one value onto the pending row buffer
    ///
    /// The style resolves through the registry now, not at commit or
    /// serialize time, so a typo fails before thousands of rows are built
    /// with it. A failed append leaves the buffer untouched.
    pub fn append<V: Into<CellValue>>(
        &mut self,
        value: V,
        style: Option<StyleRef>,
        registry: &mut StyleRegistry,
    ) -> Result<()> {
        let style = match style {
            Some(style) => registry.resolve(&style)?,
            None => StyleId::DEFAULT,
        };
        if self.pending_row.len() >= MAX_COLS as usize {
            return Err(Error::ColumnOutOfBounds(MAX_COLS as u32 + 1, MAX_COLS));
        }
        self.pending_row.push(Cell::new(value.into(), style));
        Ok(())
    }

    /// Append a whole row of values sharing one style
    ///
    /// With `auto_commit` the row is committed immediately.
    pub fn append_row<I, V>(
        &mut self,
        values: I,
        style: Option<StyleRef>,
        auto_commit: bool,
        registry: &mut StyleRegistry,
    ) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        // Resolve once so a bad style fails before the first push
        let style = match style {
            Some(style) => Some(StyleRef::Resolved(registry.resolve(&style)?)),
            None => None,
        };
        for value in values {
            self.append(value, style.clone(), registry)?;
        }
        if auto_commit {
            self.commit_row()?;
        }
        Ok(())
    }

    /// Flush the pending buffer into the grid at the next unused row
    ///
    /// Committing an empty buffer still advances the cursor, leaving a
    /// blank row. Returns the committed row index.
    pub fn commit_row(&mut self) -> Result<u32> {
        let last_used = self.cells.keys().next_back().copied().unwrap_or(0);
        let row = self.next_row.max(last_used + 1);
        if row > MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS));
        }

        for (i, cell) in self.pending_row.drain(..).enumerate() {
            let addr = CellAddress {
                row,
                col: (i + 1) as u16,
            };
            self.cells.entry(addr.row).or_default().insert(addr.col, cell);
        }
        self.next_row = row + 1;
        Ok(row)
    }

    /// Check if the pending buffer holds uncommitted values
    pub fn has_pending_row(&self) -> bool {
        !self.pending_row.is_empty()
    }

    /// Commit the pending buffer only if it holds values
    ///
    /// Used as the implicit final flush before serialization, so an
    /// un-flushed buffer never silently vanishes.
    pub(crate) fn flush_pending(&mut self) -> Result<()> {
        if self.has_pending_row() {
            self.commit_row()?;
        }
        Ok(())
    }

    // === Row/column sizing ===

    /// Set a custom row height
    pub fn set_row_height(&mut self, row: u32, height: f64) -> Result<()> {
        if row == 0 || row > MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS));
        }
        self.row_heights.insert(row, height);
        Ok(())
    }

    /// Set a custom column width; the column is given by letters or index
    pub fn set_col_width<C: Into<ColumnRef>>(&mut self, col: C, width: f64) -> Result<()> {
        let col = col.into().resolve()?;
        self.col_widths.insert(col, width);
        Ok(())
    }

    /// Custom row heights (row → points)
    pub fn row_heights(&self) -> &BTreeMap<u32, f64> {
        &self.row_heights
    }

    /// Custom column widths (column → characters)
    pub fn col_widths(&self) -> &BTreeMap<u16, f64> {
        &self.col_widths
    }

    // === Merging ===

    /// Merge a range of cells
    ///
    /// The range is already legal by construction; what is checked here is
    /// overlap: any intersection with an existing merge (an exact duplicate
    /// included) is rejected at insertion time.
    pub fn merge(&mut self, range: MergeRange) -> Result<()> {
        for existing in &self.merges {
            if range.overlaps(existing) {
                return Err(Error::MergeConflict(range.to_a1()));
            }
        }
        self.merges.push(range);
        Ok(())
    }

    /// Merge a range given in "A1:C2" notation
    pub fn merge_parse(&mut self, range: &str) -> Result<()> {
        self.merge(MergeRange::parse(range)?)
    }

    /// Merged ranges in insertion order
    pub fn merges(&self) -> &[MergeRange] {
        &self.merges
    }

    // === Grouping ===

    /// Group a span of rows under an outline level
    pub fn group_rows(&mut self, start: u32, end: u32, outline_level: u8, hidden: bool) -> Result<()> {
        if start == 0 || start > MAX_ROWS {
            return Err(Error::RowOutOfBounds(start, MAX_ROWS));
        }
        if end == 0 || end > MAX_ROWS {
            return Err(Error::RowOutOfBounds(end, MAX_ROWS));
        }
        if start > end {
            return Err(Error::InvalidRange(format!(
                "group start {} is after end {}",
                start, end
            )));
        }
        self.grouped_rows.push(GroupSpan {
            start,
            end,
            outline_level,
            hidden,
        });
        Ok(())
    }

    /// Group a span of columns under an outline level
    pub fn group_cols(&mut self, start: u32, end: u32, outline_level: u8, hidden: bool) -> Result<()> {
        if start == 0 || start > MAX_COLS as u32 {
            return Err(Error::ColumnOutOfBounds(start, MAX_COLS));
        }
        if end == 0 || end > MAX_COLS as u32 {
            return Err(Error::ColumnOutOfBounds(end, MAX_COLS));
        }
        if start > end {
            return Err(Error::InvalidRange(format!(
                "group start {} is after end {}",
                start, end
            )));
        }
        self.grouped_cols.push(GroupSpan {
            start,
            end,
            outline_level,
            hidden,
        });
        Ok(())
    }

    /// Row grouping spans in insertion order
    pub fn grouped_rows(&self) -> &[GroupSpan] {
        &self.grouped_rows
    }

    /// Column grouping spans in insertion order
    pub fn grouped_cols(&self) -> &[GroupSpan] {
        &self.grouped_cols
    }

    /// Check if this sheet requests any outline grouping
    pub fn has_grouping(&self) -> bool {
        !self.grouped_rows.is_empty() || !self.grouped_cols.is_empty()
    }

    // === Auto filter ===

    /// Add an auto-filter over a range given in "A1:C1" notation
    pub fn auto_filter(&mut self, range: &str) -> Result<()> {
        let range = MergeRange::parse(range)?;
        self.auto_filters.push(range.to_a1());
        Ok(())
    }

    /// Auto-filter ranges in insertion order
    pub fn auto_filters(&self) -> &[String] {
        &self.auto_filters
    }

    // === Charts ===

    /// Anchor a single chart at a cell
    pub fn add_chart(&mut self, anchor: CellAddress, chart: &Chart) -> Result<()> {
        self.add_charts(anchor, std::slice::from_ref(chart))
    }

    /// Anchor an ordered list of charts at one cell
    ///
    /// List order is preserved and becomes the stacking order presented to
    /// the renderer. An empty list means no chart specification was
    /// supplied and is rejected.
    pub fn add_charts(&mut self, anchor: CellAddress, charts: &[Chart]) -> Result<()> {
        if charts.is_empty() {
            return Err(Error::Chart(
                quill_sheets_chart::ChartError::MissingChart.to_string(),
            ));
        }
        let normalized = charts
            .iter()
            .map(|c| c.normalize().map_err(|e| Error::Chart(e.to_string())))
            .collect::<Result<Vec<_>>>()?;
        self.charts.push(ChartAnchor {
            cell: anchor,
            charts: normalized,
        });
        Ok(())
    }

    /// Chart attachments in insertion order
    pub fn charts(&self) -> &[ChartAnchor] {
        &self.charts
    }

    /// Pre-allocation hint, if any
    pub fn dimension_hint(&self) -> Option<(u32, u16)> {
        self.dimension_hint
    }
}
