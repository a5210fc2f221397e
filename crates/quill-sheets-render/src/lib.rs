//! # quill-sheets-render
//!
//! The renderer boundary: the [`Renderer`] trait the external binary
//! renderer is reached through, a native (C ABI) implementation with scoped
//! foreign-buffer ownership, and the auxiliary [`GroupingEditor`] used for
//! the two-pass outline-grouping fallback.

mod fallback;
mod native;

pub use fallback::{grouping_requests, GroupDimension, GroupingEditor, GroupingRequest};
pub use native::{ExportFn, FreeFn, NativeRenderer};

use quill_sheets_core::{Error, Result};
use quill_sheets_doc::{Document, RenderMode, Workbook};
use thiserror::Error as ThisError;

/// Errors raised at the renderer boundary
#[derive(Debug, ThisError)]
pub enum RenderError {
    /// The renderer returned a null or empty result
    #[error("renderer returned no data")]
    EmptyOutput,

    /// The renderer signalled a failure
    #[error("renderer failure: {0}")]
    Native(String),

    /// The renderer's payload could not be decoded
    #[error("invalid renderer payload: {0}")]
    Payload(String),

    /// The grouping second pass was required but no editor was supplied
    #[error("grouping fallback requires an auxiliary editor")]
    MissingEditor,
}

/// The external rendering engine
///
/// `render` is treated as a pure function from document to bytes. A failure
/// (including a null/empty result) must propagate to the caller; it is
/// never retried.
pub trait Renderer {
    fn render(&self, document: &Document) -> std::result::Result<Vec<u8>, RenderError>;
}

/// Serialize a workbook, render it, and apply the grouping fallback
///
/// When outline grouping exists and at least one sheet was built for the
/// auxiliary library, the document takes the renderer's streaming path and
/// the groupings are applied in a second pass over the rendered bytes —
/// the streaming writer cannot express them itself. Grouping requests are
/// never silently dropped: if the second pass is required and no editor is
/// available, that is an error.
pub fn render_workbook<R: Renderer>(
    workbook: &mut Workbook,
    renderer: &R,
    editor: Option<&dyn GroupingEditor>,
) -> Result<Vec<u8>> {
    let document = workbook.serialize()?;
    log::debug!("rendering document on the {:?} path", document.engine);

    let bytes = renderer
        .render(&document)
        .map_err(|e| Error::Render(e.to_string()))?;

    // Grouping on the streaming path means serialize() routed it to the
    // second pass.
    if document.engine == RenderMode::Streaming && document.has_grouping() {
        let editor = editor.ok_or_else(|| Error::Render(RenderError::MissingEditor.to_string()))?;
        let requests = grouping_requests(&document);
        log::debug!("applying {} grouping request(s) in a second pass", requests.len());
        return editor
            .apply(&bytes, &requests)
            .map_err(|e| Error::Render(e.to_string()));
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quill_sheets_doc::EngineHint;

    /// Renders the document's JSON encoding verbatim
    struct EchoRenderer;

    impl Renderer for EchoRenderer {
        fn render(&self, document: &Document) -> std::result::Result<Vec<u8>, RenderError> {
            document
                .to_json()
                .map_err(|e| RenderError::Payload(e.to_string()))
        }
    }

    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn render(&self, _: &Document) -> std::result::Result<Vec<u8>, RenderError> {
            Err(RenderError::Native("out of disk".into()))
        }
    }

    /// Prepends a marker so tests can observe the second pass
    struct MarkerEditor;

    impl GroupingEditor for MarkerEditor {
        fn apply(
            &self,
            rendered: &[u8],
            requests: &[GroupingRequest],
        ) -> std::result::Result<Vec<u8>, RenderError> {
            let mut out = format!("grouped:{};", requests.len()).into_bytes();
            out.extend_from_slice(rendered);
            Ok(out)
        }
    }

    #[test]
    fn test_render_without_grouping_skips_second_pass() {
        let mut wb = Workbook::new();
        let bytes = render_workbook(&mut wb, &EchoRenderer, Some(&MarkerEditor)).unwrap();
        assert!(!bytes.starts_with(b"grouped:"));
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_grouping_without_auxiliary_takes_non_streaming_path() {
        let mut wb = Workbook::new();
        wb.group_rows("Sheet1", 2, 5, 1, false).unwrap();

        // The primary renderer writes the grouping itself; no second pass
        let bytes = render_workbook(&mut wb, &EchoRenderer, Some(&MarkerEditor)).unwrap();
        assert!(!bytes.starts_with(b"grouped:"));
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["Engine"], "normalWriter");
    }

    #[test]
    fn test_grouping_with_auxiliary_runs_second_pass() {
        let mut wb = Workbook::new();
        wb.group_rows("Sheet1", 2, 5, 1, false).unwrap();
        wb.group_cols("Sheet1", 1, 3, 1, true).unwrap();
        wb.set_engine_hint("Sheet1", EngineHint::Auxiliary).unwrap();

        let bytes = render_workbook(&mut wb, &EchoRenderer, Some(&MarkerEditor)).unwrap();
        assert!(bytes.starts_with(b"grouped:2;"));
    }

    #[test]
    fn test_grouping_second_pass_requires_editor() {
        let mut wb = Workbook::new();
        wb.group_rows("Sheet1", 2, 5, 1, false).unwrap();
        wb.set_engine_hint("Sheet1", EngineHint::Auxiliary).unwrap();

        assert!(matches!(
            render_workbook(&mut wb, &EchoRenderer, None),
            Err(Error::Render(_))
        ));
    }

    #[test]
    fn test_renderer_failure_propagates() {
        let mut wb = Workbook::new();
        assert!(matches!(
            render_workbook(&mut wb, &FailingRenderer, None),
            Err(Error::Render(_))
        ));
    }
}
