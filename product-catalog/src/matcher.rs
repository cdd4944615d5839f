//! Keyword scoring of customer queries against the catalog.

use tracing::debug;

use crate::record::ProductRecord;

/// Phrases that signal the customer wants to see product photos.
pub const IMAGE_REQUEST_PHRASES: &[&str] = &[
    "show me", "picture", "photo", "image", "images", "see", "look", "view", "display",
    "what does", "how does", "what do", "how do", "example", "examples", "sample", "samples",
    "can i see", "let me see", "show", "showcase", "gallery", "portfolio",
    "what looks like", "appearance", "visual", "design", "style",
];

/// Commerce-domain terms that mark a question as being about our products.
pub const PRODUCT_QUERY_TERMS: &[&str] = &[
    "cupcake", "cake", "price", "pricing", "cost", "how much", "flavor", "flavors",
    "order", "ordering", "buy", "purchase", "delivery", "pickup", "custom", "design",
    "size", "sizes", "menu", "available", "options", "diy", "kit", "red velvet",
    "chocolate", "vanilla", "minimum", "lead time", "ingredient", "allergen",
];

/// A catalog record paired with its relevance score for one query.
#[derive(Debug, Clone, Copy)]
pub struct ScoredRecord<'a> {
    pub record: &'a ProductRecord,
    pub score: u32,
}

/// Ranks catalog records against free-text queries.
///
/// Scoring is deterministic for a fixed catalog and query and never fails:
/// an empty catalog or query simply produces no matches.
pub struct CatalogMatcher<'a> {
    catalog: &'a [ProductRecord],
}

impl<'a> CatalogMatcher<'a> {
    pub fn new(catalog: &'a [ProductRecord]) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a [ProductRecord] {
        self.catalog
    }

    /// Score every record against `query` and return the best matches.
    ///
    /// Per record: +10 when a keyword equals the whole lowercased query,
    /// else +5 when the query contains the keyword; +3 when description
    /// and query contain each other (either direction); +8 per whitespace
    /// token of the query equal to a keyword. The token bonus stacks on
    /// top of the substring bonus — intentional, kept for behavioral
    /// parity with the shipped matcher.
    ///
    /// Results keep only positive scores, sorted descending (ties keep
    /// catalog order) and truncated to `max_results`.
    pub fn find_relevant(&self, query: &str, max_results: usize) -> Vec<ScoredRecord<'a>> {
        let lower = query.to_lowercase();
        // An empty query would "match" every description via the empty
        // substring; it yields no matches instead.
        if lower.trim().is_empty() {
            return Vec::new();
        }
        let mut matches: Vec<ScoredRecord<'a>> = Vec::new();

        for record in self.catalog {
            let mut score = 0u32;

            for keyword in &record.keywords {
                let keyword = keyword.to_lowercase();
                if keyword == lower {
                    score += 10;
                } else if lower.contains(&keyword) {
                    score += 5;
                }
            }

            let description = record.description.to_lowercase();
            if lower.contains(&description) || description.contains(&lower) {
                score += 3;
            }

            for word in lower.split_whitespace() {
                for keyword in &record.keywords {
                    if word == keyword.to_lowercase() {
                        score += 8;
                    }
                }
            }

            if score > 0 {
                matches.push(ScoredRecord { record, score });
            }
        }

        // Stable sort keeps catalog order on equal scores.
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(max_results);

        debug!(query = %query, matched = matches.len(), "catalog query scored");
        matches
    }

    /// True when the query asks to see images/photos of products.
    pub fn is_image_request(&self, query: &str) -> bool {
        let lower = query.to_lowercase();
        IMAGE_REQUEST_PHRASES.iter().any(|p| lower.contains(p))
    }

    /// True when the query is about products, pricing, or ordering.
    pub fn is_product_specific_query(&self, query: &str) -> bool {
        let lower = query.to_lowercase();
        PRODUCT_QUERY_TERMS.iter().any(|p| lower.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CATALOG;

    fn matcher() -> CatalogMatcher<'static> {
        CatalogMatcher::new(&CATALOG)
    }

    #[test]
    fn respects_max_results_with_positive_descending_scores() {
        let m = matcher();
        for max in [1, 3, 5] {
            let results = m.find_relevant("chocolate cake for a birthday party", max);
            assert!(results.len() <= max);
            assert!(results.iter().all(|r| r.score > 0));
            assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }

    #[test]
    fn exact_keyword_equality_earns_the_full_bonus() {
        let m = matcher();
        let results = m.find_relevant("cupcakes", 5);
        assert!(!results.is_empty());
        // "cupcakes" is a keyword of the cupcake menu record: exact match
        // (+10) plus the token match (+8).
        let top = &results[0];
        assert_eq!(top.record.filename, "1-cupcakes.jpeg");
        assert!(top.score >= 10);
    }

    #[test]
    fn ties_preserve_catalog_order() {
        let m = matcher();
        let results = m.find_relevant("party treats", 13);
        for pair in results.windows(2) {
            if pair[0].score == pair[1].score {
                let pos = |f: &str| CATALOG.iter().position(|r| r.filename == f).unwrap();
                assert!(pos(&pair[0].record.filename) < pos(&pair[1].record.filename));
            }
        }
    }

    #[test]
    fn unrelated_queries_match_nothing() {
        let m = matcher();
        assert!(m.find_relevant("quantum flux capacitor", 3).is_empty());
        assert!(m.find_relevant("", 3).is_empty());
    }

    #[test]
    fn predicates_trigger_on_their_own_word_sets() {
        let m = matcher();
        assert!(m.is_image_request("show me"));
        assert!(m.is_image_request("can I see the gallery?"));
        assert!(!m.is_image_request("how much is delivery"));

        assert!(m.is_product_specific_query("how much is a cupcake"));
        assert!(m.is_product_specific_query("what is the minimum order"));
        assert!(!m.is_product_specific_query("tell me a joke"));
    }

    #[test]
    fn predicates_are_independent_of_each_other() {
        let m = matcher();
        // A pure visual request with no commerce terms.
        assert!(m.is_image_request("show me"));
        assert!(!m.is_product_specific_query("show me"));
        // A pure commerce question with no visual phrasing.
        assert!(m.is_product_specific_query("allergen list please"));
        assert!(!m.is_image_request("allergen list please"));
    }
}
