//! Canned-answer composition for product questions.
//!
//! The composer turns a ranked match set and the original query into a
//! display-ready reply. Intent detection is a precedence-ordered list of
//! trigger-word checks; the first hit picks the handler, and two catch-alls
//! (price tables, category blurb) close the chain.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::matcher::{CatalogMatcher, ScoredRecord};
use crate::price::{PriceNode, format_prices, lowest_price};
use crate::record::{Category, ProductRecord};
use crate::templates;

const INGREDIENT_TERMS: &[&str] = &[
    "ingredient", "ingredients", "made of", "contains", "what's in", "recipe", "allergen",
    "allergy",
];
const SIZE_TERMS: &[&str] = &[
    "size", "sizes", "how big", "how large", "dimension", "inches", "inch", "\"",
];
const FLAVOR_TERMS: &[&str] = &["flavor", "flavors", "taste", "tastes", "what flavors"];
const CUSTOMIZATION_TERMS: &[&str] = &[
    "custom", "customize", "personalize", "design", "decoration", "topper", "add",
];
const DELIVERY_TERMS: &[&str] = &[
    "delivery", "deliver", "pickup", "pick up", "shipping", "transport",
];
const ORDERING_TERMS: &[&str] = &[
    "order", "ordering", "how to order", "minimum", "lead time", "advance", "book",
];
const PRICE_TERMS: &[&str] = &[
    "price", "cost", "how much", "pricing", "rate", "fee", "charge", "expensive", "cheap",
    "budget",
];

/// Ingredient words the menu copy is scanned for when answering
/// ingredient/allergen questions.
const INGREDIENT_MENTIONS: &[&str] = &["cream cheese", "chocolate", "ube", "carrot", "coffee", "bacon"];

/// Flavor names as they appear (capitalized) in the menu copy.
const FLAVOR_MENTIONS: &[&str] = &["Red Velvet", "Chocolate", "Ube", "Carrot"];

static MIN_ORDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)minimum[^.]*\.").expect("valid minimum-order pattern"));

/// Query intent, in evaluation precedence order. First match wins; `Prices`
/// and the blurb fallback are mutually exclusive catch-alls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    Ingredients,
    Sizes,
    Flavors,
    Customization,
    Delivery,
    Ordering,
    Prices,
}

/// The ordered (triggers, intent) table the detector walks.
const INTENT_TRIGGERS: &[(Intent, &[&str])] = &[
    (Intent::Ingredients, INGREDIENT_TERMS),
    (Intent::Sizes, SIZE_TERMS),
    (Intent::Flavors, FLAVOR_TERMS),
    (Intent::Customization, CUSTOMIZATION_TERMS),
    (Intent::Delivery, DELIVERY_TERMS),
    (Intent::Ordering, ORDERING_TERMS),
    (Intent::Prices, PRICE_TERMS),
];

fn detect_intent(lower_query: &str) -> Option<Intent> {
    INTENT_TRIGGERS
        .iter()
        .find(|(_, terms)| terms.iter().any(|t| lower_query.contains(t)))
        .map(|(intent, _)| *intent)
}

/// A composed reply: the text to show, the image references to attach, and
/// the matched records the caller threads into prompt building.
#[derive(Debug, Clone)]
pub struct ProductReply {
    pub content: String,
    /// At most 3 image references, in match-rank order.
    pub images: Vec<String>,
    /// The records the reply was built from, for the prompt context block.
    pub context: Vec<ProductRecord>,
}

/// Composes canned answers from catalog matches.
pub struct ResponseComposer<'a> {
    matcher: CatalogMatcher<'a>,
}

impl<'a> ResponseComposer<'a> {
    pub fn new(catalog: &'a [ProductRecord]) -> Self {
        Self {
            matcher: CatalogMatcher::new(catalog),
        }
    }

    pub fn matcher(&self) -> &CatalogMatcher<'a> {
        &self.matcher
    }

    /// Reply for queries that want product images.
    ///
    /// Returns `None` unless at least one record matches and the query is
    /// either an explicit image request or product-specific. An explicit
    /// image request bypasses intent detection entirely and just presents
    /// the matched items.
    pub fn generate_image_response(&self, query: &str) -> Option<ProductReply> {
        let matches = self.matcher.find_relevant(query, 3);
        if matches.is_empty() {
            return None;
        }

        let is_image_request = self.matcher.is_image_request(query);
        let is_product_query = self.matcher.is_product_specific_query(query);
        if !is_image_request && !is_product_query {
            return None;
        }

        let content = if is_image_request {
            if matches.len() == 1 {
                format!("Here's an image of {}:", matches[0].record.description)
            } else {
                let bullets: Vec<String> = matches
                    .iter()
                    .map(|m| format!("• {}", m.record.description))
                    .collect();
                format!("Here are some images from our menu:\n{}", bullets.join("\n"))
            }
        } else {
            self.detailed_answer(&query.to_lowercase(), &matches)
        };

        Some(build_reply(content, &matches, matches.len()))
    }

    /// Detailed answer for product questions, or `None` when the query is
    /// not product-specific or nothing matches. Uses up to 5 matches for
    /// the answer text and attaches at most 3 images.
    pub fn answer_product_question(&self, query: &str) -> Option<ProductReply> {
        if !self.matcher.is_product_specific_query(query) {
            return None;
        }

        let matches = self.matcher.find_relevant(query, 5);
        if matches.is_empty() {
            return None;
        }

        let content = self.detailed_answer(&query.to_lowercase(), &matches);
        Some(build_reply(content, &matches, 3))
    }

    fn detailed_answer(&self, lower_query: &str, matches: &[ScoredRecord<'_>]) -> String {
        let intent = detect_intent(lower_query);
        debug!(?intent, matched = matches.len(), "composing product answer");
        match intent {
            Some(Intent::Ingredients) => answer_ingredients(matches),
            Some(Intent::Sizes) => answer_sizes(matches),
            Some(Intent::Flavors) => answer_flavors(matches),
            Some(Intent::Customization) => answer_customization(matches),
            Some(Intent::Delivery) => templates::DELIVERY_INFO.to_string(),
            Some(Intent::Ordering) => answer_ordering(matches),
            Some(Intent::Prices) => answer_prices(matches),
            None => fallback_blurb(matches),
        }
    }
}

fn build_reply(content: String, matches: &[ScoredRecord<'_>], max_images: usize) -> ProductReply {
    ProductReply {
        content,
        images: matches
            .iter()
            .take(max_images)
            .map(|m| m.record.filename.clone())
            .collect(),
        context: matches.iter().map(|m| m.record.clone()).collect(),
    }
}

fn answer_ingredients(matches: &[ScoredRecord<'_>]) -> String {
    let mut out = String::from("Here's information about ingredients and allergens:\n\n");
    for m in matches {
        let description = m.record.description.to_lowercase();
        if INGREDIENT_MENTIONS.iter().any(|t| description.contains(t)) {
            out.push_str(&format!(
                "**{}:**\n{}\n\n",
                m.record.category.display_name(),
                m.record.description
            ));
        }
    }
    out.push_str(templates::ALLERGEN_FOOTER);
    out
}

fn answer_sizes(matches: &[ScoredRecord<'_>]) -> String {
    let mut out = String::from("Here are the available sizes:\n\n");
    for m in matches {
        if let Some(prices) = &m.record.prices {
            let size_info = extract_size_info(prices);
            if !size_info.is_empty() {
                out.push_str(&format!("**{}:**\n", m.record.category.display_name()));
                for line in &size_info {
                    out.push_str(&format!("• {line}\n"));
                }
                out.push('\n');
            }
        }
    }
    out.push_str(templates::SIZE_FOOTER);
    out
}

/// Pull `label size: ₱amount` lines out of a price tree. A label counts as
/// a size when it contains an inch mark or the word "inch"; the walk covers
/// any depth, carrying the parent label as a prefix.
fn extract_size_info(prices: &PriceNode) -> Vec<String> {
    let mut out = Vec::new();
    if let PriceNode::Group(entries) = prices {
        for (key, value) in entries {
            collect_sizes("", key, value, &mut out);
        }
    }
    out
}

fn collect_sizes(prefix: &str, key: &str, node: &PriceNode, out: &mut Vec<String>) {
    let label = if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix} {key}")
    };
    let is_size_label = key.contains('"') || key.to_lowercase().contains("inch");

    match node {
        PriceNode::Group(entries) => {
            for (sub_key, sub_node) in entries {
                if is_size_label {
                    if let Some(text) = leaf_text(sub_node) {
                        out.push(format!("{label} {sub_key}: ₱{text}"));
                    }
                } else {
                    collect_sizes(&label, sub_key, sub_node, out);
                }
            }
        }
        leaf => {
            if is_size_label {
                if let Some(text) = leaf_text(leaf) {
                    out.push(format!("{label}: ₱{text}"));
                }
            }
        }
    }
}

fn leaf_text(node: &PriceNode) -> Option<String> {
    match node {
        PriceNode::Amount(v) => Some(format!("{v}")),
        PriceNode::Quote(q) => Some(q.clone()),
        PriceNode::Group(_) => None,
    }
}

fn answer_flavors(matches: &[ScoredRecord<'_>]) -> String {
    let mut out = String::from("Here are our available flavors:\n\n");
    let mut cupcake_flavors_listed = false;

    for m in matches {
        let record = m.record;
        if record.category == Category::Cupcakes && record.prices.is_some() {
            // The cupcake menu lists every flavor; show it once and skip
            // further cupcake records.
            if cupcake_flavors_listed {
                continue;
            }
            out.push_str("**Cupcake Flavors:**\n");
            if let Some(prices) = &record.prices {
                for flavor in prices.labels() {
                    out.push_str(&format!("• {flavor}\n"));
                }
            }
            out.push('\n');
            cupcake_flavors_listed = true;
        } else if FLAVOR_MENTIONS.iter().any(|f| record.description.contains(f)) {
            out.push_str(&format!(
                "**{}:**\n{}\n\n",
                record.category.display_name(),
                record.summary_sentence()
            ));
        }
    }

    out.push_str(templates::FLAVOR_FOOTER);
    out
}

fn answer_customization(matches: &[ScoredRecord<'_>]) -> String {
    let mut out = String::from("Here are our customization options:\n\n");
    for m in matches {
        let record = m.record;
        let description = record.description.to_lowercase();
        if ["custom", "topper", "decoration", "design"]
            .iter()
            .any(|t| description.contains(t))
        {
            out.push_str(&format!(
                "**{}:**\n{}\n\n",
                record.category.display_name(),
                record.description
            ));
            if let Some(prices) = &record.prices {
                out.push_str("Customization pricing:\n");
                out.push_str(&format_prices(prices));
                out.push('\n');
            }
        }
    }
    out.push_str(templates::CUSTOMIZATION_FOOTER);
    out
}

fn answer_ordering(matches: &[ScoredRecord<'_>]) -> String {
    let mut out = String::from("**How to Order:**\n\n");
    for m in matches {
        if m.record.description.to_lowercase().contains("minimum") {
            if let Some(found) = MIN_ORDER_RE.find(&m.record.description) {
                out.push_str(&format!("• {}\n", found.as_str()));
            }
        }
    }
    out.push_str(templates::ORDERING_PROCESS);
    out
}

fn answer_prices(matches: &[ScoredRecord<'_>]) -> String {
    let mut out = String::from("Here are the current prices for our products:\n\n");
    for m in matches {
        if let Some(prices) = &m.record.prices {
            if !prices.is_empty() {
                out.push_str(&format!("**{}:**\n", m.record.category.display_name()));
                out.push_str(&format_prices(prices));
                out.push('\n');
            }
        }
    }
    out.push_str(templates::PRICE_FOOTER);
    out
}

fn fallback_blurb(matches: &[ScoredRecord<'_>]) -> String {
    let primary = matches
        .first()
        .map(|m| m.record.category)
        .unwrap_or_default();
    let mut out = templates::blurb_for(primary).to_string();

    if matches.len() == 1 {
        out.push_str(&format!("\n\n{}", record_summary(matches[0].record)));
    } else if matches.len() <= 3 {
        out.push_str("\n\nHere are some specific options that match your query:");
        for m in matches {
            out.push_str(&format!("\n• {}", record_summary(m.record)));
        }
    }

    out
}

fn record_summary(record: &ProductRecord) -> String {
    let mut summary = record.summary_sentence().to_string();
    if let Some(prices) = &record.prices {
        if !prices.is_empty() {
            summary.push_str(&format!(" (Starting from ₱{})", lowest_price(prices)));
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CATALOG;

    fn composer() -> ResponseComposer<'static> {
        ResponseComposer::new(&CATALOG)
    }

    #[test]
    fn six_inch_red_velvet_price_question_quotes_1200() {
        let c = composer();
        let reply = c
            .answer_product_question("how much is a 6 inch red velvet cake")
            .expect("product question should be answered");
        assert!(reply.content.contains("1200"), "got: {}", reply.content);
        assert!(reply
            .context
            .iter()
            .any(|r| r.filename == "4-basic-cakes.jpeg"));
        assert!(reply.images.len() <= 3);
    }

    #[test]
    fn show_me_cupcakes_takes_the_image_branch() {
        let c = composer();
        let reply = c
            .generate_image_response("show me your cupcakes")
            .expect("image request with matches");
        assert!(reply.content.starts_with("Here"));
        assert!(
            reply.content.contains("Here's an image of")
                || reply.content.contains("Here are some images from our menu:")
        );
        assert!(!reply.images.is_empty());
        // The image branch never renders price tables.
        assert!(!reply.content.contains('₱'));
    }

    #[test]
    fn no_matches_means_no_reply_even_for_image_requests() {
        let c = composer();
        assert!(c.generate_image_response("show me").is_none());
        assert!(c
            .generate_image_response("show me a quantum flux capacitor")
            .is_none());
    }

    #[test]
    fn non_product_queries_are_left_to_the_model() {
        let c = composer();
        assert!(c.answer_product_question("tell me a joke").is_none());
    }

    #[test]
    fn flavor_questions_list_the_cupcake_menu_once() {
        let c = composer();
        let reply = c
            .answer_product_question("cupcake flavors")
            .expect("flavor question");
        assert!(reply.content.contains("**Cupcake Flavors:**"));
        assert!(reply.content.contains("Banana Crumb"));
        assert_eq!(reply.content.matches("**Cupcake Flavors:**").count(), 1);
    }

    #[test]
    fn delivery_questions_get_the_fixed_faq_block() {
        let c = composer();
        let reply = c
            .answer_product_question("do you offer cake delivery")
            .expect("delivery question");
        assert!(reply.content.contains("**Delivery & Pickup Information:**"));
        assert!(reply.content.contains("Metro Manila"));
    }

    #[test]
    fn ordering_questions_extract_minimum_order_sentences() {
        let c = composer();
        let reply = c
            .answer_product_question("what is the minimum order for diy kits")
            .expect("ordering question");
        assert!(reply.content.starts_with("**How to Order:**"));
        assert!(reply.content.to_lowercase().contains("minimum"));
        assert!(reply.content.contains("**Ordering Process:**"));
    }

    #[test]
    fn ingredient_questions_append_the_allergen_disclaimer() {
        let c = composer();
        let reply = c
            .answer_product_question("what ingredients are in the red velvet cupcakes")
            .expect("ingredient question");
        assert!(reply
            .content
            .starts_with("Here's information about ingredients and allergens:"));
        assert!(reply.content.contains("Common allergens"));
    }

    #[test]
    fn price_questions_render_full_tables_with_peso_signs() {
        let c = composer();
        let reply = c
            .answer_product_question("cake pops cost")
            .expect("price question");
        assert!(reply
            .content
            .starts_with("Here are the current prices for our products:"));
        assert!(reply.content.contains('₱'));
        assert!(reply.content.contains("Prices are in Philippine Pesos"));
    }

    #[test]
    fn size_extraction_walks_nested_grids() {
        let basic = CATALOG
            .iter()
            .find(|r| r.filename == "4-basic-cakes.jpeg")
            .unwrap();
        let info = extract_size_info(basic.prices.as_ref().unwrap());
        assert!(info.iter().any(|l| l == "Red Velvet Cake 6\": ₱1200"));
    }
}
