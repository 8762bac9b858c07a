//! Buffered PDF document assembly on top of `lopdf::Document`.

use facture_render_core::RenderError;
use lopdf::content::Content;
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::io::Cursor;

/// Collects pages and shared resources, then writes the document trailer.
///
/// The Pages tree and Resources dictionary get their object ids up front so
/// every page can reference them; their contents are filled in by
/// [`PdfWriter::finish`] once all pages and images are known.
pub struct PdfWriter {
    doc: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    fonts: Dictionary,
    xobjects: Dictionary,
}

impl PdfWriter {
    pub fn new(base_font: &str) -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let resources_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => base_font.to_string(),
            "Encoding" => "WinAnsiEncoding",
        });
        let mut fonts = Dictionary::new();
        fonts.set("F1", font_id);

        Self {
            doc,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            fonts,
            xobjects: Dictionary::new(),
        }
    }

    /// Register an image XObject under the given resource name.
    pub fn add_image(&mut self, name: &str, image: Stream) -> ObjectId {
        let id = self.doc.add_object(image);
        self.xobjects.set(name.as_bytes().to_vec(), id);
        id
    }

    /// Write one page's content stream and page object.
    pub fn add_page(
        &mut self,
        content: Content,
        page_width: f32,
        page_height: f32,
    ) -> Result<ObjectId, RenderError> {
        let data = content.encode()?;
        let content_id = self.doc.add_object(Stream::new(dictionary! {}, data));
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), page_width.into(), page_height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        Ok(page_id)
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Assemble the Pages tree, Resources, and Catalog, and serialize.
    pub fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        let kids: Vec<Object> = self.page_ids.iter().copied().map(Object::Reference).collect();
        let count = self.page_ids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let mut resources = dictionary! { "Font" => Object::Dictionary(self.fonts) };
        if !self.xobjects.is_empty() {
            resources.set("XObject", Object::Dictionary(self.xobjects));
        }
        self.doc
            .objects
            .insert(self.resources_id, Object::Dictionary(resources));

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);
        self.doc.compress();

        let mut cursor = Cursor::new(Vec::new());
        self.doc.save_to(&mut cursor)?;
        Ok(cursor.into_inner())
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new("Helvetica")
    }
}
