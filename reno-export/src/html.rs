//! Printable HTML rendering.
//!
//! Renders a [`ProposalDocument`] to the two-page document handed to the
//! platform's print facility: page 1 carries the summary, before photo, and
//! scope of work; page 2 carries the after image and the inclusion
//! checklist. Rendering is deterministic and side-effect free; the print
//! dialog itself lives behind the `PrintSink` port.

use std::fmt::Write;

use crate::document::ProposalDocument;

/// Brand label shown in the document header.
const BRAND: &str = "Renoviz";

/// Embedded print stylesheet.
const STYLE: &str = "\
body{font-family:'Inter',Helvetica,sans-serif;color:#1e293b;margin:0;padding:0;line-height:1.5}\
.page{padding:40px 50px;box-sizing:border-box;width:100%;max-width:850px;margin:0 auto;background:white}\
.header{display:flex;justify-content:space-between;align-items:flex-end;border-bottom:2px solid #0f172a;padding-bottom:20px;margin-bottom:40px}\
.logo{font-size:24px;font-weight:800;color:#0f172a;letter-spacing:-0.5px}\
.doc-title{font-size:14px;text-transform:uppercase;letter-spacing:2px;color:#64748b;font-weight:600}\
.info-grid{display:grid;grid-template-columns:1fr 1fr;gap:40px;margin-bottom:40px}\
.info-item{margin-bottom:15px}\
.label{display:block;font-size:11px;text-transform:uppercase;color:#64748b;font-weight:600;letter-spacing:0.5px;margin-bottom:4px}\
.value{font-size:15px;font-weight:500;color:#0f172a}\
.section-title{font-size:18px;font-weight:700;color:#0f172a;border-left:4px solid #0284c7;padding-left:12px;margin:30px 0 15px 0}\
.description{background:#f8fafc;padding:20px;border-radius:8px;font-size:14px;color:#334155;border:1px solid #e2e8f0}\
.image-card{margin-bottom:20px;break-inside:avoid}\
.image-label{font-size:12px;font-weight:700;color:#fff;background:#0f172a;display:inline-block;padding:4px 12px;border-radius:4px 4px 0 0}\
.main-image{width:100%;height:400px;object-fit:cover;border-radius:0 4px 4px 4px;border:1px solid #cbd5e1;display:block}\
.image-missing{width:100%;height:120px;display:flex;align-items:center;justify-content:center;color:#94a3b8;border:1px dashed #cbd5e1;border-radius:4px}\
.scope-list{list-style:none;padding:0;display:grid;grid-template-columns:1fr 1fr;gap:15px}\
.scope-list li{background:#fff;border:1px solid #e2e8f0;padding:12px;border-radius:6px;font-size:13px}\
.scope-list li strong{display:block;color:#0284c7;margin-bottom:4px}\
.note{margin-top:30px;border-left:4px solid #22c55e}\
.footer{margin-top:50px;border-top:1px solid #e2e8f0;padding-top:20px;display:flex;justify-content:space-between;font-size:10px;color:#94a3b8}\
.break{page-break-before:always}\
@media print{body{-webkit-print-color-adjust:exact}.break{break-before:page}}";

/// Render a proposal to the full two-page HTML document.
#[must_use]
pub fn render_html(doc: &ProposalDocument) -> String {
    let mut html = String::with_capacity(8192);
    let title = escape_html(&format!("Executive Summary - {}", doc.space_name));

    let _ = write!(
        html,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title><style>{STYLE}</style></head><body>",
    );

    render_summary_page(&mut html, doc);
    html.push_str("<div class=\"break\"></div>");
    render_design_page(&mut html, doc);

    html.push_str("</body></html>");
    tracing::debug!("Rendered proposal document ({} bytes)", html.len());
    html
}

/// Page 1: summary grid, before photo, and scope of work.
fn render_summary_page(html: &mut String, doc: &ProposalDocument) {
    html.push_str("<div class=\"page\">");
    render_header(html, "Executive Summary");

    let _ = write!(
        html,
        "<div class=\"info-grid\"><div>\
         <div class=\"info-item\"><span class=\"label\">Project Name</span>\
         <div class=\"value\">{}</div></div>\
         <div class=\"info-item\"><span class=\"label\">Client</span>\
         <div class=\"value\">{}</div></div></div>\
         <div style=\"text-align:right\">\
         <div class=\"info-item\"><span class=\"label\">Date</span>\
         <div class=\"value\">{}</div></div>\
         <div class=\"info-item\"><span class=\"label\">Est. Budget</span>\
         <div class=\"value\">${:.2}</div></div></div></div>",
        escape_html(&doc.project_name),
        escape_html(&doc.client_name),
        escape_html(&doc.date_label),
        doc.quote_amount,
    );

    html.push_str("<div class=\"section-title\">Current Condition Analysis</div>");
    render_image_card(
        html,
        "BEFORE RENOVATION",
        doc.before_image
            .as_ref()
            .map(reno_core::ImagePayload::data_uri),
    );

    let scope = if doc.scope_text.trim().is_empty() {
        "No description provided.".to_string()
    } else {
        escape_html(&doc.scope_text)
    };
    let _ = write!(
        html,
        "<div class=\"section-title\">Scope of Work</div><div class=\"description\">{scope}</div>",
    );

    render_footer(html, 1);
    html.push_str("</div>");
}

/// Page 2: after image, inclusion checklist, and the professional note.
fn render_design_page(html: &mut String, doc: &ProposalDocument) {
    html.push_str("<div class=\"page\">");
    render_header(html, "Design Proposal");

    html.push_str("<div class=\"section-title\">AI Visualization</div>");
    render_image_card(
        html,
        "PROPOSED AFTER",
        doc.after_image
            .as_ref()
            .map(reno_core::ImagePayload::data_uri),
    );

    html.push_str(
        "<div class=\"section-title\">Project Specifications &amp; Inclusions</div>\
         <ul class=\"scope-list\">",
    );
    for item in &doc.inclusions {
        let _ = write!(
            html,
            "<li><strong>{}</strong>{}</li>",
            escape_html(&item.title),
            escape_html(&item.detail),
        );
    }
    html.push_str("</ul>");

    html.push_str(
        "<div class=\"description note\"><strong>Professional Note:</strong> This visualization \
         represents the design intent. Final finishes may vary based on material availability \
         and site conditions.</div>",
    );

    render_footer(html, 2);
    html.push_str("</div>");
}

fn render_header(html: &mut String, doc_title: &str) {
    let _ = write!(
        html,
        "<div class=\"header\"><div class=\"logo\">{BRAND}</div>\
         <div class=\"doc-title\">{doc_title}</div></div>",
    );
}

fn render_image_card(html: &mut String, label: &str, data_uri: Option<String>) {
    html.push_str("<div class=\"image-card\">");
    let _ = write!(html, "<div class=\"image-label\">{label}</div>");
    match data_uri {
        Some(uri) => {
            let _ = write!(
                html,
                "<img src=\"{}\" class=\"main-image\">",
                escape_html(&uri)
            );
        }
        None => {
            html.push_str("<div class=\"image-missing\">Photo unavailable</div>");
        }
    }
    html.push_str("</div>");
}

fn render_footer(html: &mut String, page: u8) {
    let _ = write!(
        html,
        "<div class=\"footer\"><span>Generated by {BRAND}</span><span>Page {page} of 2</span></div>",
    );
}

/// Escape special HTML characters.
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::InclusionItem;
    use reno_core::{ImageFormat, ImagePayload};

    fn sample_document() -> ProposalDocument {
        ProposalDocument {
            project_name: "Smith Kitchen".to_string(),
            client_name: "John Smith".to_string(),
            date_label: "2026-08-07".to_string(),
            quote_amount: 25000.0,
            space_name: "Kitchen".to_string(),
            before_image: Some(ImagePayload::from_bytes(ImageFormat::Jpeg, b"before")),
            after_image: Some(ImagePayload::from_bytes(ImageFormat::Png, b"after")),
            scope_text: "Replace cabinets with white shaker, quartz counters.".to_string(),
            inclusions: vec![
                InclusionItem {
                    title: "Electrical".to_string(),
                    detail: "Rough-in and trim.".to_string(),
                },
                InclusionItem {
                    title: "Design Concept".to_string(),
                    detail: "Implementation of the proposed aesthetic and layout.".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_render_has_two_pages() {
        let html = render_html(&sample_document());
        assert_eq!(html.matches("<div class=\"page\">").count(), 2);
        assert_eq!(html.matches("<div class=\"break\"></div>").count(), 1);
        assert!(html.contains("Page 1 of 2"));
        assert!(html.contains("Page 2 of 2"));
    }

    #[test]
    fn test_render_embeds_both_images_as_data_uris() {
        let doc = sample_document();
        let html = render_html(&doc);
        assert!(html.contains(&escape_html(
            &doc.before_image.as_ref().expect("before").data_uri()
        )));
        assert!(html.contains(&escape_html(
            &doc.after_image.as_ref().expect("after").data_uri()
        )));
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = sample_document();
        assert_eq!(render_html(&doc), render_html(&doc));
    }

    #[test]
    fn test_render_escapes_user_text() {
        let mut doc = sample_document();
        doc.scope_text = "Granite <tier 1> & \"premium\" finishes".to_string();
        let html = render_html(&doc);
        assert!(html.contains("Granite &lt;tier 1&gt; &amp; &quot;premium&quot; finishes"));
        assert!(!html.contains("<tier 1>"));
    }

    #[test]
    fn test_render_includes_checklist_entries() {
        let html = render_html(&sample_document());
        assert!(html.contains("<strong>Electrical</strong>"));
        assert!(html.contains("<strong>Design Concept</strong>"));
    }

    #[test]
    fn test_missing_images_render_placeholder() {
        let mut doc = sample_document();
        doc.before_image = None;
        doc.after_image = None;
        let html = render_html(&doc);
        assert_eq!(html.matches("Photo unavailable").count(), 2);
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_empty_scope_falls_back() {
        let mut doc = sample_document();
        doc.scope_text = "   ".to_string();
        let html = render_html(&doc);
        assert!(html.contains("No description provided."));
    }
}
