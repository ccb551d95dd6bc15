//! # Parser Module
//!
//! Turns a results page body into [`SearchResult`]s. Missing sub-elements degrade to
//! empty strings or zero and never fail the record.

use scraper::{ ElementRef, Html, Selector };

use crate::markup::inner_markup;
use crate::model::{ Icon, SearchResult };
use crate::selectors::CompiledSelectors;
use crate::text::{ clean, to_int };

/// Parses `body` and extracts at most `limit` results in document order.
///
/// A `limit` of zero or below means every matched entry is returned. The HTML5
/// tree builder recovers from any malformed markup, so every body yields a
/// document.
pub fn parse_results(body: &str, selectors: &CompiledSelectors, limit: i64) -> Vec<SearchResult> {
    let document = Html::parse_document(body);

    let mut results = Vec::new();
    for (index, entry) in document.select(&selectors.entry).enumerate() {
        if limit > 0 && (index as i64) >= limit {
            break;
        }
        results.push(collect_result(index, entry, selectors));
    }

    if results.is_empty() {
        log::warn!("No result entries matched; the page layout may have changed");
    } else {
        log::debug!("Extracted {} results", results.len());
    }

    results
}

fn collect_result(index: usize, entry: ElementRef, selectors: &CompiledSelectors) -> SearchResult {
    let url = find(index, entry, &selectors.url, "url");
    let title = find(index, entry, &selectors.title, "title");
    let snippet = find(index, entry, &selectors.snippet, "snippet");
    let icon = find(index, entry, &selectors.icon, "icon");

    SearchResult {
        html_formatted_url: inner_html(url),
        html_title: inner_html(title),
        html_snippet: inner_html(snippet),
        formatted_url: inner_text(url),
        title: inner_text(title),
        snippet: inner_text(snippet),
        icon: collect_icon(icon),
    }
}

fn collect_icon(icon: Option<ElementRef>) -> Icon {
    Icon {
        src: attr(icon, "src").to_string(),
        width: to_int(attr(icon, "width")),
        height: to_int(attr(icon, "height")),
    }
}

fn attr<'a>(element: Option<ElementRef<'a>>, name: &str) -> &'a str {
    element.and_then(|el| el.value().attr(name)).unwrap_or("")
}

fn find<'a>(
    index: usize,
    entry: ElementRef<'a>,
    selector: &Selector,
    field: &str
) -> Option<ElementRef<'a>> {
    // first match only; text is never joined across several matches
    let found = entry.select(selector).next();
    if found.is_none() {
        log::debug!("Result #{} has no {} element", index, field);
    }
    found
}

fn inner_html(element: Option<ElementRef>) -> String {
    element.map(|el| clean(&inner_markup(el))).unwrap_or_default()
}

fn inner_text(element: Option<ElementRef>) -> String {
    element.map(|el| clean(&el.text().collect::<String>())).unwrap_or_default()
}
