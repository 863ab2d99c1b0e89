pub mod price;

#[cfg(test)]
mod tests;

use crate::listing::Listing;
use crate::request::ENDPOINT;
use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::Html;

/// Tag name of a listing container candidate
const CONTAINER_TAG: &str = "div";

/// Attribute whose value is the stable listing identifier
const IDENTITY_ATTR: &str = "data-testid";

/// Overlay artifact rendered into some cards; not listing data
const WATERMARK: &str = "Protection";

/// Text fragments and link targets collected off a container subtree,
/// in document order.
#[derive(Debug, Default)]
struct Collected {
    texts: Vec<String>,
    links: Vec<String>,
}

/// Extracts listing records from a parsed search-result document.
///
/// Every `div` carrying the identity attribute is a listing container;
/// containers may nest, and each one yields its own record. A malformed
/// container never fails the batch - it produces a record with whatever
/// could be recovered, keyed by its id.
///
/// The tree is assumed acyclic by construction of the upstream parser.
pub fn extract(document: &Html) -> Vec<Listing> {
    let mut listings = Vec::new();

    for node in document.tree.root().descendants() {
        if let Node::Element(element) = node.value() {
            if element.name() == CONTAINER_TAG {
                if let Some(id) = element.attr(IDENTITY_ATTR) {
                    listings.push(node_to_listing(node, id));
                }
            }
        }
    }

    ::log::debug!("Extracted {} listing containers", listings.len());
    listings
}

/// Builds a listing from a container node.
///
/// Fields come from the container's first child subtree only, mapped by
/// fixed position: user, time, title, price, description, condition.
/// A card exposing fewer than six fragments keeps its id but leaves the
/// text fields empty. The second collected link, when present, is the
/// listing's relative path.
fn node_to_listing(container: NodeRef<'_, Node>, id: &str) -> Listing {
    let collected = container
        .first_child()
        .map(collect_fragments)
        .unwrap_or_default();

    let mut listing = Listing {
        id: id.to_string(),
        ..Listing::default()
    };

    if collected.texts.len() >= 6 {
        listing.user = collected.texts[0].clone();
        listing.time = collected.texts[1].clone();
        listing.title = collected.texts[2].clone();
        listing.price = price::parse_price(&collected.texts[3]);
        listing.description = collected.texts[4].clone();
        listing.condition = collected.texts[5].clone();
    }

    if collected.links.len() >= 2 {
        listing.url = format!("{}{}", ENDPOINT, collected.links[1]);
    }

    listing
}

/// Collects every text fragment and anchor target in the subtree rooted
/// at `subtree`, in pre-order.
///
/// Fragments are trimmed but empty ones still count toward the positional
/// mapping; only the watermark artifact is dropped.
fn collect_fragments(subtree: NodeRef<'_, Node>) -> Collected {
    let mut collected = Collected::default();

    for node in subtree.descendants() {
        match node.value() {
            Node::Text(text) => {
                let raw: &str = &text.text;
                if raw != WATERMARK {
                    collected.texts.push(raw.trim().to_string());
                }
            }
            Node::Element(element) if element.name() == "a" => {
                if let Some(href) = element.attr("href") {
                    collected.links.push(href.to_string());
                }
            }
            _ => {}
        }
    }

    collected
}
