use crate::extract::extract;
use scraper::Html;

// Fixtures are single-line on purpose: whitespace between tags would
// introduce extra text nodes and shift the positional mapping, exactly
// as it would in the live markup.
const FULL_CARD: &str = concat!(
    "<div data-testid=\"listing-101\"><div>",
    "<p>gadgetguy</p><p>2 days ago</p><p>Mechanical Keyboard</p>",
    "<p>S$1,250</p><p>Hot-swappable, boxed</p><p>Like new</p>",
    "<a href=\"/u/gadgetguy\"></a><a href=\"/p/mechanical-keyboard-101\"></a>",
    "</div></div>",
);

#[test]
fn test_full_card_maps_fields_positionally() {
    let document = Html::parse_document(FULL_CARD);
    let listings = extract(&document);

    assert_eq!(listings.len(), 1);
    let listing = &listings[0];
    assert_eq!(listing.id, "listing-101");
    assert_eq!(listing.user, "gadgetguy");
    assert_eq!(listing.time, "2 days ago");
    assert_eq!(listing.title, "Mechanical Keyboard");
    assert_eq!(listing.price, 1250.0);
    assert_eq!(listing.description, "Hot-swappable, boxed");
    assert_eq!(listing.condition, "Like new");
    assert_eq!(
        listing.url,
        "https://www.carousell.sg/p/mechanical-keyboard-101"
    );
}

#[test]
fn test_five_fragments_keep_id_but_no_fields() {
    let html = concat!(
        "<div data-testid=\"listing-102\"><div>",
        "<p>gadgetguy</p><p>2 days ago</p><p>Mechanical Keyboard</p>",
        "<p>S$1,250</p><p>Hot-swappable, boxed</p>",
        "</div></div>",
    );
    let document = Html::parse_document(html);
    let listings = extract(&document);

    assert_eq!(listings.len(), 1);
    let listing = &listings[0];
    assert_eq!(listing.id, "listing-102");
    assert_eq!(listing.user, "");
    assert_eq!(listing.title, "");
    assert_eq!(listing.price, 0.0);
    assert_eq!(listing.condition, "");
}

#[test]
fn test_fragments_beyond_condition_are_ignored() {
    let html = concat!(
        "<div data-testid=\"listing-103\"><div>",
        "<p>seller</p><p>1 hour ago</p><p>Monitor</p>",
        "<p>S$420</p><p>27 inch</p><p>Lightly used</p>",
        "<p>extra one</p><p>extra two</p>",
        "</div></div>",
    );
    let document = Html::parse_document(html);
    let listings = extract(&document);

    assert_eq!(listings[0].condition, "Lightly used");
    assert_eq!(listings[0].price, 420.0);
}

#[test]
fn test_watermark_fragment_is_excluded() {
    let html = concat!(
        "<div data-testid=\"listing-104\"><div>",
        "<p>seller</p><span>Protection</span><p>1 hour ago</p><p>Monitor</p>",
        "<p>S$420</p><p>27 inch</p><p>Lightly used</p>",
        "</div></div>",
    );
    let document = Html::parse_document(html);
    let listings = extract(&document);

    // The overlay text does not occupy a position
    assert_eq!(listings[0].user, "seller");
    assert_eq!(listings[0].time, "1 hour ago");
    assert_eq!(listings[0].condition, "Lightly used");
}

#[test]
fn test_whitespace_only_fragments_occupy_positions() {
    let html = concat!(
        "<div data-testid=\"listing-105\"><div>",
        "<b> </b><p>seller</p><p>1 hour ago</p><p>Monitor</p>",
        "<p>S$420</p><p>27 inch</p>",
        "</div></div>",
    );
    let document = Html::parse_document(html);
    let listings = extract(&document);

    // The blank fragment shifts everything down one position
    let listing = &listings[0];
    assert_eq!(listing.user, "");
    assert_eq!(listing.time, "seller");
    assert_eq!(listing.title, "1 hour ago");
    assert_eq!(listing.price, 0.0);
    assert_eq!(listing.description, "S$420");
    assert_eq!(listing.condition, "27 inch");
}

#[test]
fn test_fewer_than_two_links_leaves_url_empty() {
    let no_links = concat!(
        "<div data-testid=\"listing-106\"><div>",
        "<p>u</p><p>t</p><p>title</p><p>S$5</p><p>d</p><p>c</p>",
        "</div></div>",
    );
    let one_link = concat!(
        "<div data-testid=\"listing-107\"><div>",
        "<p>u</p><p>t</p><p>title</p><p>S$5</p><p>d</p><p>c</p>",
        "<a href=\"/u/someone\"></a>",
        "</div></div>",
    );

    let listings = extract(&Html::parse_document(no_links));
    assert_eq!(listings[0].url, "");

    let listings = extract(&Html::parse_document(one_link));
    assert_eq!(listings[0].url, "");
}

#[test]
fn test_second_link_becomes_listing_url() {
    let html = concat!(
        "<div data-testid=\"listing-108\"><div>",
        "<a href=\"/u/someone\"></a><a href=\"/p/item-108\"></a><a href=\"/p/other\"></a>",
        "</div></div>",
    );
    let listings = extract(&Html::parse_document(html));

    assert_eq!(listings[0].url, "https://www.carousell.sg/p/item-108");
}

#[test]
fn test_fields_come_from_first_child_subtree_only() {
    // The sibling of the first child has a full set of fragments, but
    // only the first child's subtree is collected
    let html = concat!(
        "<div data-testid=\"listing-109\">",
        "<div><p>orphan</p></div>",
        "<div><p>u</p><p>t</p><p>title</p><p>S$5</p><p>d</p><p>c</p></div>",
        "</div>",
    );
    let listings = extract(&Html::parse_document(html));

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].id, "listing-109");
    assert_eq!(listings[0].title, "");
    assert_eq!(listings[0].user, "");
}

#[test]
fn test_container_without_children_still_yields_record() {
    let listings = extract(&Html::parse_document("<div data-testid=\"bare-9\"></div>"));

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].id, "bare-9");
    assert_eq!(listings[0].title, "");
    assert_eq!(listings[0].url, "");
}

#[test]
fn test_nested_containers_each_yield_a_record() {
    let html = concat!(
        "<div data-testid=\"outer-1\"><div>",
        "<p>u1</p><p>t1</p><p>title one</p><p>S$10</p><p>d1</p><p>c1</p>",
        "<div data-testid=\"inner-2\"><div>",
        "<p>u2</p><p>t2</p><p>title two</p><p>S$20</p><p>d2</p><p>c2</p>",
        "</div></div>",
        "</div></div>",
    );
    let listings = extract(&Html::parse_document(html));

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].id, "outer-1");
    assert_eq!(listings[0].user, "u1");
    assert_eq!(listings[1].id, "inner-2");
    assert_eq!(listings[1].user, "u2");
    assert_eq!(listings[1].price, 20.0);
}

#[test]
fn test_sibling_cards_extract_in_document_order() {
    let html = concat!(
        "<div data-testid=\"first\"></div>",
        "<div data-testid=\"second\"></div>",
        "<div data-testid=\"third\"></div>",
    );
    let listings = extract(&Html::parse_document(html));

    let ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}

#[test]
fn test_elements_without_identity_are_ignored() {
    let html = concat!(
        "<span data-testid=\"not-a-div\">x</span>",
        "<div class=\"card\"><p>no identity</p></div>",
    );
    let listings = extract(&Html::parse_document(html));

    assert!(listings.is_empty());
}

#[test]
fn test_fragments_are_trimmed() {
    let html = concat!(
        "<div data-testid=\"listing-110\"><div>",
        "<p>  seller  </p><p>\n1 hour ago\n</p><p>Monitor</p>",
        "<p>S$420</p><p>27 inch</p><p>Lightly used</p>",
        "</div></div>",
    );
    let listings = extract(&Html::parse_document(html));

    assert_eq!(listings[0].user, "seller");
    assert_eq!(listings[0].time, "1 hour ago");
}
