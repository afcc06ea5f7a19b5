use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

pub enum FixturePage<'a> {
    Text(&'a str),
    /// No content stream at all
    Empty,
    /// Text shown with an Identity-H font that has no ToUnicode map, which
    /// lopdf refuses to decode
    Undecodable(&'a str),
}

/// Build a PDF in memory with one page per entry. `None` yields a page
/// with no content stream at all.
pub fn pdf_with_pages(pages: &[Option<&str>]) -> Vec<u8> {
    let pages: Vec<FixturePage> = pages
        .iter()
        .map(|page| match page {
            Some(text) => FixturePage::Text(text),
            None => FixturePage::Empty,
        })
        .collect();
    build_pdf(&pages)
}

pub fn build_pdf(pages: &[FixturePage]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let cid_font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type0",
        "BaseFont" => "Courier",
        "Encoding" => "Identity-H",
    });
    let cid_resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => cid_font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for spec in pages {
        let (text, resources) = match spec {
            FixturePage::Text(text) => (Some(*text), resources_id),
            FixturePage::Empty => (None, resources_id),
            FixturePage::Undecodable(text) => (Some(*text), cid_resources_id),
        };

        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Resources" => resources,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        if let Some(text) = text {
            page.set("Contents", text_stream(&mut doc, text));
        }

        kids.push(doc.add_object(page).into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// One text block per line of `text`
fn text_stream(doc: &mut Document, text: &str) -> ObjectId {
    let mut operations = Vec::new();
    for (i, line) in text.lines().enumerate() {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
        operations.push(Operation::new(
            "Td",
            vec![72.into(), (720 - 14 * i as i64).into()],
        ));
        operations.push(Operation::new("Tj", vec![Object::string_literal(line)]));
        operations.push(Operation::new("ET", vec![]));
    }

    let content = Content { operations };
    doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()))
}
