use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object};

/// Strings shown with `Tj` on each page, in page order
pub fn page_texts(doc: &LopdfDocument) -> Vec<Vec<String>> {
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let Ok(bytes) = doc.get_page_content(page_id) else {
                return Vec::new();
            };
            let Ok(content) = Content::decode(&bytes) else {
                return Vec::new();
            };
            content
                .operations
                .iter()
                .filter(|op| op.operator == "Tj")
                .filter_map(|op| match op.operands.first() {
                    Some(Object::String(s, _)) => Some(String::from_utf8_lossy(s).into_owned()),
                    _ => None,
                })
                .collect()
        })
        .collect()
}

/// Extract all text content from a PDF document, one line per text run
pub fn extract_text(doc: &LopdfDocument) -> String {
    page_texts(doc)
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n")
}

/// Base font names of every font dictionary in the document
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    fn collect(object: &Object, fonts: &mut Vec<String>) {
        let Ok(dict) = object.as_dict() else {
            return;
        };
        let is_font = dict
            .get(b"Type")
            .and_then(|t| t.as_name())
            .is_ok_and(|t| t == b"Font");
        if is_font {
            if let Ok(name) = dict.get(b"BaseFont").and_then(|f| f.as_name()) {
                fonts.push(String::from_utf8_lossy(name).into_owned());
            }
        }
        for (_, value) in dict.iter() {
            collect(value, fonts);
        }
    }

    let mut fonts = Vec::new();
    for object in doc.objects.values() {
        collect(object, &mut fonts);
    }
    fonts.sort();
    fonts.dedup();
    fonts
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}
