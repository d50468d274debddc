use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color as PdfColor, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference,
    Point, Polygon, Pt, Rgb,
};
use crate::error::ExportError;
use crate::renderer::document::layout::{Color, DocumentLayout, Element};

const LAYER_NAME: &str = "content";

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// 배치 결과를 PDF 바이트로 직렬화
pub fn write_pdf(layout: &DocumentLayout, title: &str) -> Result<Vec<u8>, ExportError> {
    let width: Mm = Pt(layout.page_width).into();
    let height: Mm = Pt(layout.page_height).into();
    let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, LAYER_NAME);

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Pdf(format!("{e:?}")))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExportError::Pdf(format!("{e:?}")))?,
    };

    for (i, page) in layout.pages.iter().enumerate() {
        let layer = if i == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = doc.add_page(width, height, LAYER_NAME);
            doc.get_page(page_index).get_layer(layer_index)
        };

        for element in &page.elements {
            draw(&layer, element, layout.page_height, &fonts);
        }
    }

    doc.save_to_bytes()
        .map_err(|e| ExportError::Pdf(format!("{e:?}")))
}

fn draw(layer: &PdfLayerReference, element: &Element, page_height: f32, fonts: &Fonts) {
    match element {
        Element::Text { x, y, size, bold, color, text } => {
            layer.set_fill_color(pdf_color(*color));
            let font = if *bold { &fonts.bold } else { &fonts.regular };
            layer.use_text(text.clone(), *size, mm(*x), mm(page_height - y), font);
        }
        Element::Rect { x, y, width, height, color } => {
            let corners = [
                (*x, *y),
                (x + width, *y),
                (x + width, y + height),
                (*x, y + height),
            ];
            fill_polygon(layer, &corners, *color, page_height);
        }
        Element::Polygon { points, color } => {
            fill_polygon(layer, points, *color, page_height);
        }
        Element::Line { from, to, color } => {
            layer.set_outline_color(pdf_color(*color));
            layer.set_outline_thickness(0.75);
            layer.add_line(Line {
                points: vec![
                    (point(*from, page_height), false),
                    (point(*to, page_height), false),
                ],
                is_closed: false,
            });
        }
    }
}

fn fill_polygon(layer: &PdfLayerReference, points: &[(f32, f32)], color: Color, page_height: f32) {
    if points.len() < 3 {
        return;
    }
    layer.set_fill_color(pdf_color(color));
    layer.add_polygon(Polygon {
        rings: vec![points.iter().map(|p| (point(*p, page_height), false)).collect()],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
}

/// 레이아웃은 좌상단 원점, PDF는 좌하단 원점
fn point((x, y): (f32, f32), page_height: f32) -> Point {
    Point::new(mm(x), mm(page_height - y))
}

fn mm(pt: f32) -> Mm {
    Pt(pt).into()
}

fn pdf_color(color: Color) -> PdfColor {
    PdfColor::Rgb(Rgb::new(color.r, color.g, color.b, None))
}
