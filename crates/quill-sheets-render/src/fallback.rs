//! Auxiliary grouping fallback
//!
//! The primary renderer's streaming writer cannot express outline
//! grouping. When a streamed document carries grouping requests, a second
//! pass re-opens the rendered bytes and applies them through the auxiliary
//! document-editing library, which sits behind [`GroupingEditor`].

use crate::RenderError;
use quill_sheets_doc::Document;

/// Whether a request groups rows or columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupDimension {
    Rows,
    Cols,
}

/// One outline-grouping request for the second pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingRequest {
    /// Sheet the span belongs to
    pub sheet: String,
    pub dimension: GroupDimension,
    pub start: u32,
    pub end: u32,
    pub outline_level: u8,
    pub hidden: bool,
}

/// The auxiliary document-editing library boundary
///
/// Implementations re-open `rendered`, apply every request, and return new
/// bytes; everything else in the original bytes must be preserved
/// unchanged.
pub trait GroupingEditor {
    fn apply(
        &self,
        rendered: &[u8],
        requests: &[GroupingRequest],
    ) -> Result<Vec<u8>, RenderError>;
}

/// Collect every grouping request in the document, sheet by sheet
pub fn grouping_requests(document: &Document) -> Vec<GroupingRequest> {
    let mut requests = Vec::new();
    for sheet in &document.content {
        for span in &sheet.grouped_rows {
            requests.push(GroupingRequest {
                sheet: sheet.name.clone(),
                dimension: GroupDimension::Rows,
                start: span.start,
                end: span.end,
                outline_level: span.outline_level,
                hidden: span.hidden,
            });
        }
        for span in &sheet.grouped_cols {
            requests.push(GroupingRequest {
                sheet: sheet.name.clone(),
                dimension: GroupDimension::Cols,
                start: span.start,
                end: span.end,
                outline_level: span.outline_level,
                hidden: span.hidden,
            });
        }
    }
    requests
}
