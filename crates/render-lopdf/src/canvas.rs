use crate::helpers::{font_dictionary, to_win_ansi};
use crate::layout::{PAGE_HEIGHT, PAGE_WIDTH, PageCursor, TextStyle};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use std::io::Write;
use tessera_render_core::RenderError;

const PDF_VERSION: &str = "1.7";
const PRODUCER: &str = "Tessera";

/// Builds the PDF object graph page by page, starting a new page whenever
/// the next line would cross the bottom margin.
///
/// Each filled page is added to the document as soon as it closes. Nothing
/// reaches the output until [`PdfCanvas::finish`], so a failed render drops
/// the canvas with its partial document.
pub(crate) struct PdfCanvas {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    operations: Vec<Operation>,
    cursor: PageCursor,
}

impl PdfCanvas {
    pub fn new() -> Self {
        let mut document = Document::with_version(PDF_VERSION);
        let pages_id = document.new_object_id();
        let resources_id = document.add_object(dictionary! { "Font" => font_dictionary() });
        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            operations: Vec::new(),
            cursor: PageCursor::top(),
        }
    }

    /// Draws one line made of `(x, text)` runs sharing `style`, then moves
    /// the cursor down by the style's line height. Empty runs are skipped.
    pub fn draw_line(&mut self, style: &TextStyle, runs: &[(f32, &str)]) -> Result<(), RenderError> {
        if !self.cursor.fits(style) {
            self.close_page()?;
        }
        let y = self.cursor.baseline(style);
        for (x, text) in runs {
            if text.is_empty() {
                continue;
            }
            self.show_text(style, *x, y, text);
        }
        self.cursor.advance(style);
        Ok(())
    }

    fn show_text(&mut self, style: &TextStyle, x: f32, y: f32, text: &str) {
        let font = Object::Name(style.face.resource_name().as_bytes().to_vec());
        self.operations.push(Operation::new("BT", vec![]));
        self.operations.push(Operation::new("Tf", vec![font, style.size.into()]));
        self.operations.push(Operation::new("Td", vec![x.into(), y.into()]));
        self.operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        self.operations.push(Operation::new("ET", vec![]));
    }

    fn close_page(&mut self) -> Result<(), RenderError> {
        let content = Content { operations: std::mem::take(&mut self.operations) };
        let content_id = self
            .document
            .add_object(Stream::new(Dictionary::new(), content.encode()?));

        let media_box: Vec<Object> = vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()];
        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => media_box,
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        self.cursor = PageCursor::top();
        log::trace!("Closed PDF page {}", self.page_ids.len());
        Ok(())
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len() + 1
    }

    /// Closes the last page, which always exists even when nothing was drawn,
    /// then writes the whole document to `target`.
    pub fn finish<W: Write>(mut self, target: &mut W) -> Result<(), RenderError> {
        self.close_page()?;

        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
        self.document.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => self.page_ids.len() as i64,
            }),
        );
        let catalog_id = self
            .document
            .add_object(dictionary! { "Type" => "Catalog", "Pages" => self.pages_id });
        let info_id = self.document.add_object(dictionary! {
            "Producer" => Object::string_literal(PRODUCER),
        });
        self.document.trailer.set("Root", catalog_id);
        self.document.trailer.set("Info", info_id);

        self.document.save_to(target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{PARAGRAPH, TABLE_ROW};

    fn finish(canvas: PdfCanvas) -> Vec<u8> {
        let mut bytes = Vec::new();
        canvas.finish(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn empty_canvas_is_a_single_blank_page() {
        let bytes = finish(PdfCanvas::new());
        assert!(bytes.starts_with(b"%PDF-1.7"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn records_producer_and_catalog() {
        let doc = Document::load_mem(&finish(PdfCanvas::new())).unwrap();
        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_dictionary(info_id).unwrap();
        assert!(matches!(info.get(b"Producer").unwrap(), Object::String(s, _) if s == b"Tessera"));
        assert!(doc.catalog().is_ok());
    }

    #[test]
    fn breaks_page_when_line_would_cross_margin() {
        let mut canvas = PdfCanvas::new();
        for _ in 0..46 {
            canvas.draw_line(&PARAGRAPH, &[(50.0, "line")]).unwrap();
        }
        assert_eq!(canvas.page_count(), 1);
        canvas.draw_line(&TABLE_ROW, &[(50.0, "next")]).unwrap();
        assert_eq!(canvas.page_count(), 2);

        let doc = Document::load_mem(&finish(canvas)).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn pages_share_one_font_resource() {
        let mut canvas = PdfCanvas::new();
        for _ in 0..60 {
            canvas.draw_line(&PARAGRAPH, &[(50.0, "x")]).unwrap();
        }
        let doc = Document::load_mem(&finish(canvas)).unwrap();
        let resources: Vec<ObjectId> = doc
            .get_pages()
            .values()
            .map(|&id| {
                doc.get_dictionary(id)
                    .unwrap()
                    .get(b"Resources")
                    .unwrap()
                    .as_reference()
                    .unwrap()
            })
            .collect();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0], resources[1]);
    }
}
