//! Workbook type - the main document structure

use crate::props::{FileProperties, WorkbookProtection};
use crate::worksheet::{ColumnRef, EngineHint, Worksheet};
use quill_sheets_chart::Chart;
use quill_sheets_core::{
    CellAddress, CellValue, Error, MergeRange, Result, Style, StyleId, StyleRef, StyleRegistry,
    MAX_SHEET_NAME_LEN,
};

/// A workbook: the ordered collection of worksheets plus global state
///
/// The workbook exclusively owns its worksheets and its [`StyleRegistry`];
/// the registry lives and dies with one build, so two workbooks in the same
/// process never see each other's style identifiers.
#[derive(Debug)]
pub struct Workbook {
    /// Worksheets in insertion order; names are unique
    sheets: Vec<Worksheet>,
    /// Index of the sheet the streaming conveniences target
    active: usize,
    /// File properties (fixed key set)
    file_props: FileProperties,
    /// Workbook protection, if requested
    protection: Option<WorkbookProtection>,
    /// Per-build style table
    registry: StyleRegistry,
}

impl Workbook {
    /// Create a new workbook with one default sheet "Sheet1"
    pub fn new() -> Self {
        Self {
            sheets: vec![Worksheet::new("Sheet1")],
            active: 0,
            file_props: FileProperties::default(),
            protection: None,
            registry: StyleRegistry::new(),
        }
    }

    // === Sheet management ===

    /// Number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Sheet names in insertion order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(Worksheet::name).collect()
    }

    /// Get a sheet by name
    pub fn sheet(&self, name: &str) -> Result<&Worksheet> {
        self.sheets
            .iter()
            .find(|ws| ws.name() == name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))
    }

    /// Get a mutable sheet by name
    pub fn sheet_mut(&mut self, name: &str) -> Result<&mut Worksheet> {
        self.sheets
            .iter_mut()
            .find(|ws| ws.name() == name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))
    }

    /// Iterate over all sheets in insertion order
    pub fn sheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.sheets.iter()
    }

    /// The sheet the streaming conveniences currently target
    pub fn active_sheet(&self) -> &Worksheet {
        &self.sheets[self.active]
    }

    /// Create a new sheet and make it active
    ///
    /// Creating a sheet never disturbs other sheets' committed rows; each
    /// sheet keeps its own streaming buffer and cursor.
    pub fn create_sheet(&mut self, name: &str) -> Result<()> {
        self.validate_sheet_name(name)?;
        self.sheets.push(Worksheet::new(name));
        self.active = self.sheets.len() - 1;
        Ok(())
    }

    /// Add an existing worksheet (e.g. built from plain data)
    pub fn add_worksheet(&mut self, sheet: Worksheet) -> Result<()> {
        self.validate_sheet_name(sheet.name())?;
        self.sheets.push(sheet);
        Ok(())
    }

    /// Remove a sheet by name
    ///
    /// The last remaining sheet cannot be removed.
    pub fn remove_sheet(&mut self, name: &str) -> Result<Worksheet> {
        if self.sheets.len() == 1 {
            return Err(Error::LastSheet);
        }
        let index = self
            .sheets
            .iter()
            .position(|ws| ws.name() == name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))?;

        let sheet = self.sheets.remove(index);
        if self.active >= self.sheets.len() {
            self.active = self.sheets.len() - 1;
        } else if index < self.active {
            self.active -= 1;
        }
        Ok(sheet)
    }

    /// Switch the active sheet
    ///
    /// Only the target of the streaming conveniences changes; every sheet's
    /// committed rows and pending buffer are untouched.
    pub fn switch_sheet(&mut self, name: &str) -> Result<()> {
        self.active = self
            .sheets
            .iter()
            .position(|ws| ws.name() == name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))?;
        Ok(())
    }

    /// Rename a sheet
    pub fn rename_sheet(&mut self, name: &str, new_name: &str) -> Result<()> {
        self.sheet(name)?;
        if name != new_name {
            self.validate_sheet_name(new_name)?;
        }
        self.sheet_mut(name)?.set_name(new_name);
        Ok(())
    }

    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("sheet name cannot be empty".into()));
        }
        if name.len() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "sheet name cannot contain '{}'",
                c
            )));
        }

        let name_lower = name.to_lowercase();
        if self
            .sheets
            .iter()
            .any(|ws| ws.name().to_lowercase() == name_lower)
        {
            return Err(Error::DuplicateSheetName(name.to_string()));
        }
        Ok(())
    }

    // === Styles ===

    /// Register a style under a stable name, usable from any sheet
    pub fn add_style<S: Into<String>>(&mut self, name: S, style: Style) -> Result<StyleId> {
        self.registry.register_named(name, style)
    }

    /// Register an anonymous style, returning its deduplicated id
    pub fn register_style(&mut self, style: Style) -> StyleId {
        self.registry.register(style)
    }

    /// The workbook's style registry
    pub fn styles(&self) -> &StyleRegistry {
        &self.registry
    }

    /// The workbook's style registry, mutable
    pub fn styles_mut(&mut self) -> &mut StyleRegistry {
        &mut self.registry
    }

    // === Streaming conveniences (active sheet) ===

    /// Append one default-styled value to the active sheet's pending row
    pub fn row_append<V: Into<CellValue>>(&mut self, value: V) -> Result<()> {
        self.sheets[self.active].append(value, None, &mut self.registry)
    }

    /// Append one styled value to the active sheet's pending row
    ///
    /// The style resolves now; an unknown name fails before the value is
    /// buffered.
    pub fn row_append_styled<V, S>(&mut self, value: V, style: S) -> Result<()>
    where
        V: Into<CellValue>,
        S: Into<StyleRef>,
    {
        self.sheets[self.active].append(value, Some(style.into()), &mut self.registry)
    }

    /// Append a whole row of values sharing one style
    pub fn row_append_list<I, V>(
        &mut self,
        values: I,
        style: Option<StyleRef>,
        create_row: bool,
    ) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.sheets[self.active].append_row(values, style, create_row, &mut self.registry)
    }

    /// Commit the active sheet's pending row
    pub fn create_row(&mut self) -> Result<u32> {
        self.sheets[self.active].commit_row()
    }

    // === Sheet-addressed conveniences ===

    /// Set a column width on a named sheet
    pub fn set_cell_width<C: Into<ColumnRef>>(
        &mut self,
        sheet: &str,
        col: C,
        width: f64,
    ) -> Result<()> {
        self.sheet_mut(sheet)?.set_col_width(col, width)
    }

    /// Set a row height on a named sheet
    pub fn set_cell_height(&mut self, sheet: &str, row: u32, height: f64) -> Result<()> {
        self.sheet_mut(sheet)?.set_row_height(row, height)
    }

    /// Merge a range on a named sheet
    pub fn merge_cell(&mut self, sheet: &str, range: MergeRange) -> Result<()> {
        self.sheet_mut(sheet)?.merge(range)
    }

    /// Anchor one chart on a named sheet
    pub fn add_chart(&mut self, sheet: &str, anchor: CellAddress, chart: &Chart) -> Result<()> {
        self.sheet_mut(sheet)?.add_chart(anchor, chart)
    }

    /// Anchor an ordered list of charts on a named sheet
    pub fn add_charts(
        &mut self,
        sheet: &str,
        anchor: CellAddress,
        charts: &[Chart],
    ) -> Result<()> {
        self.sheet_mut(sheet)?.add_charts(anchor, charts)
    }

    /// Group rows on a named sheet
    pub fn group_rows(
        &mut self,
        sheet: &str,
        start: u32,
        end: u32,
        outline_level: u8,
        hidden: bool,
    ) -> Result<()> {
        self.sheet_mut(sheet)?
            .group_rows(start, end, outline_level, hidden)
    }

    /// Group columns on a named sheet
    pub fn group_cols(
        &mut self,
        sheet: &str,
        start: u32,
        end: u32,
        outline_level: u8,
        hidden: bool,
    ) -> Result<()> {
        self.sheet_mut(sheet)?
            .group_cols(start, end, outline_level, hidden)
    }

    /// Add an auto-filter on a named sheet
    pub fn auto_filter(&mut self, sheet: &str, range: &str) -> Result<()> {
        self.sheet_mut(sheet)?.auto_filter(range)
    }

    /// Mark a named sheet as built for the auxiliary library
    pub fn set_engine_hint(&mut self, sheet: &str, hint: EngineHint) -> Result<()> {
        self.sheet_mut(sheet)?.set_engine_hint(hint);
        Ok(())
    }

    // === File properties & protection ===

    /// Set a file property by its wire key
    ///
    /// Unknown keys fail here, at the call, never at serialize time.
    pub fn set_file_props(&mut self, key: &str, value: &str) -> Result<()> {
        self.file_props.set(key, value)
    }

    /// The workbook's file properties
    pub fn file_props(&self) -> &FileProperties {
        &self.file_props
    }

    /// Protect the workbook structure
    pub fn protect_workbook(
        &mut self,
        algorithm: &str,
        password: &str,
        lock_structure: bool,
        lock_windows: bool,
    ) -> Result<()> {
        self.protection = Some(WorkbookProtection::new(
            algorithm,
            password,
            lock_structure,
            lock_windows,
        )?);
        Ok(())
    }

    /// The workbook's protection settings, if any
    pub fn protection(&self) -> Option<&WorkbookProtection> {
        self.protection.as_ref()
    }

    pub(crate) fn sheets_mut_slice(&mut self) -> &mut [Worksheet] {
        &mut self.sheets
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}
