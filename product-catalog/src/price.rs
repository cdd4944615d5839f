//! Nested price tables for menu records.
//!
//! Menu pricing in the source data mixes plain amounts, free-text quotes
//! ("quoted based on design"), and nested size/variant grids at the same
//! level. [`PriceNode`] models that shape as a tagged tree so rendering and
//! minimum extraction can match exhaustively instead of type-sniffing.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A node in a price table.
///
/// Groups preserve insertion order (menus read top to bottom), so the
/// variant holds a vector of pairs rather than a map. Depth is unbounded;
/// the catalog data nests at most two levels, but the walkers below do not
/// assume that.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceNode {
    /// A plain numeric amount in pesos.
    Amount(f64),
    /// A descriptive amount, e.g. "quoted based on design".
    Quote(String),
    /// A labeled sub-table (size grid, variant list, add-on set).
    Group(Vec<(String, PriceNode)>),
}

impl PriceNode {
    /// Top-level entry labels, in menu order. Empty for leaf nodes.
    pub fn labels(&self) -> Vec<&str> {
        match self {
            PriceNode::Group(entries) => entries.iter().map(|(k, _)| k.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// True for a `Group` with no entries or a non-group node.
    pub fn is_empty(&self) -> bool {
        match self {
            PriceNode::Group(entries) => entries.is_empty(),
            _ => false,
        }
    }
}

// Serializes the way the source data was written in JSON: amounts as bare
// numbers (integers when whole), quotes as strings, groups as objects.
// The prompt builder relies on this to reproduce the product-context block.
impl Serialize for PriceNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PriceNode::Amount(v) if v.fract() == 0.0 => serializer.serialize_i64(*v as i64),
            PriceNode::Amount(v) => serializer.serialize_f64(*v),
            PriceNode::Quote(q) => serializer.serialize_str(q),
            PriceNode::Group(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Render a price table as bullet lines.
///
/// Flat entries become `• label: ₱value`; a nested group becomes
/// `• label:` followed by indented `- sub: ₱value` lines, two further
/// spaces per extra level. Underscores in labels render as spaces.
pub fn format_prices(prices: &PriceNode) -> String {
    let mut out = String::new();
    if let PriceNode::Group(entries) = prices {
        for (key, value) in entries {
            render_entry(&mut out, key, value, 0);
        }
    }
    out
}

fn render_entry(out: &mut String, key: &str, node: &PriceNode, depth: usize) {
    let label = key.replace('_', " ");
    let marker = if depth == 0 { "•" } else { "-" };
    let indent = "  ".repeat(depth);
    match node {
        PriceNode::Group(entries) => {
            out.push_str(&format!("{indent}{marker} {label}:\n"));
            for (sub_key, sub_node) in entries {
                render_entry(out, sub_key, sub_node, depth + 1);
            }
        }
        PriceNode::Amount(v) => out.push_str(&format!("{indent}{marker} {label}: ₱{v}\n")),
        PriceNode::Quote(q) => out.push_str(&format!("{indent}{marker} {label}: ₱{q}\n")),
    }
}

/// Minimum numeric leaf of a price tree, or 0 when there is none.
///
/// Quote leaves are parsed by stripping every character that is not a digit
/// or a dot; unparseable remainders are ignored.
pub fn lowest_price(prices: &PriceNode) -> f64 {
    let mut lowest = f64::INFINITY;
    walk_lowest(prices, &mut lowest);
    if lowest.is_finite() { lowest } else { 0.0 }
}

fn walk_lowest(node: &PriceNode, lowest: &mut f64) {
    match node {
        PriceNode::Amount(v) => {
            if *v < *lowest {
                *lowest = *v;
            }
        }
        PriceNode::Quote(q) => {
            let cleaned: String = q
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            if let Ok(v) = cleaned.parse::<f64>() {
                if v < *lowest {
                    *lowest = v;
                }
            }
        }
        PriceNode::Group(entries) => {
            for (_, value) in entries {
                walk_lowest(value, lowest);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(entries: Vec<(&str, PriceNode)>) -> PriceNode {
        PriceNode::Group(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    #[test]
    fn formats_flat_size_grid() {
        let prices = g(vec![
            ("6\"", PriceNode::Amount(1200.0)),
            ("8\"", PriceNode::Amount(1600.0)),
        ]);
        let rendered = format_prices(&prices);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("1200") && lines[0].contains('₱'));
        assert!(lines[1].contains("1600") && lines[1].contains('₱'));
    }

    #[test]
    fn formats_nested_groups_with_indentation() {
        let prices = g(vec![(
            "cake_bouquet",
            g(vec![("6\" round", PriceNode::Amount(3500.0))]),
        )]);
        let rendered = format_prices(&prices);
        assert!(rendered.starts_with("• cake bouquet:\n"));
        assert!(rendered.contains("  - 6\" round: ₱3500\n"));
    }

    #[test]
    fn formats_arbitrary_depth_without_assuming_two_levels() {
        let prices = g(vec![(
            "outer",
            g(vec![("middle", g(vec![("inner", PriceNode::Amount(5.0))]))]),
        )]);
        let rendered = format_prices(&prices);
        assert!(rendered.contains("    - inner: ₱5\n"));
    }

    #[test]
    fn lowest_price_descends_nested_grids() {
        let prices = g(vec![(
            "Red Velvet Cake",
            g(vec![
                ("6\"", PriceNode::Amount(1200.0)),
                ("8\"", PriceNode::Amount(1600.0)),
                ("10\"", PriceNode::Amount(2000.0)),
            ]),
        )]);
        assert_eq!(lowest_price(&prices), 1200.0);
    }

    #[test]
    fn lowest_price_parses_quotes_and_ignores_unparseable_ones() {
        let prices = g(vec![
            ("base", PriceNode::Quote("quoted based on design".into())),
            ("board", PriceNode::Amount(500.0)),
        ]);
        assert_eq!(lowest_price(&prices), 500.0);

        let quoted_only = g(vec![("base", PriceNode::Quote("depends on design".into()))]);
        assert_eq!(lowest_price(&quoted_only), 0.0);
    }

    #[test]
    fn serializes_like_the_source_json() {
        let prices = g(vec![
            ("monogram_cupcakes", PriceNode::Amount(2000.0)),
            ("base_price", PriceNode::Quote("quoted based on design".into())),
        ]);
        let json = serde_json::to_string(&prices).unwrap();
        assert_eq!(
            json,
            r#"{"monogram_cupcakes":2000,"base_price":"quoted based on design"}"#
        );
    }
}
