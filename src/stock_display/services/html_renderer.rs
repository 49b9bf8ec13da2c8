use super::card_builder::{RenderModel, StockCardView};
use crate::stock_display::domain::{Element, Node};

/// Suffix of the count header, e.g. "3 Stock Items"
pub const COUNT_HEADER_SUFFIX: &str = "Stock Items";

/// Turns a render model into markup nodes.
///
/// This is the only place stock data becomes markup; the output for a
/// given model is always identical.
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn render(model: &RenderModel) -> Vec<Node> {
        match model {
            RenderModel::StockList { cards } => vec![
                Element::new("h3")
                    .class("numberOfStock")
                    .text(&format!("{} {}", cards.len(), COUNT_HEADER_SUFFIX))
                    .into(),
                Element::new("div")
                    .class("stockItemsWrapper")
                    .children(cards.iter().map(Self::render_card))
                    .into(),
            ],
            RenderModel::Message(message) => {
                vec![Element::new("p").class("message").text(message).into()]
            }
        }
    }

    fn render_card(card: &StockCardView) -> Node {
        let features = card.features.iter().map(|feature| {
            Node::from(
                Element::new("p")
                    .class("stockFeatureItem")
                    .child(Element::new("strong").text(feature.label))
                    .child(Node::text(&format!(" {}", feature.value))),
            )
        });

        Element::new("div")
            .class("stockItem")
            .child(Element::new("p").class("stockItemHeading").text(&card.heading))
            .child(
                Element::new("img")
                    .class("stockItemImage")
                    .attr("src", &card.image_src)
                    .attr("alt", &card.image_alt),
            )
            .child(Element::new("div").class("stockFeatures").children(features))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stock_display::domain::markup::nodes_to_html;
    use crate::stock_display::domain::{FetchOutcome, StockRecord};
    use crate::stock_display::services::CardBuilder;
    use serde_json::json;

    fn model_for(records: Vec<serde_json::Value>) -> RenderModel {
        CardBuilder::new().build(&FetchOutcome::Records(
            records.into_iter().map(StockRecord::from_value).collect(),
        ))
    }

    fn count_class(nodes: &[Node], class: &str) -> usize {
        let mut found = Vec::new();
        for node in nodes {
            node.find_by_class(class, &mut found);
        }
        found.len()
    }

    #[test]
    fn test_header_contains_count() {
        let nodes = HtmlRenderer::render(&model_for(vec![json!({}), json!({}), json!({})]));
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].text_content(), "3 Stock Items");
        assert_eq!(count_class(&nodes, "stockItem"), 3);
    }

    #[test]
    fn test_empty_list_keeps_header_and_grid() {
        let nodes = HtmlRenderer::render(&model_for(vec![]));
        assert_eq!(nodes[0].text_content(), "0 Stock Items");
        assert_eq!(count_class(&nodes, "stockItemsWrapper"), 1);
        assert_eq!(count_class(&nodes, "stockItem"), 0);
    }

    #[test]
    fn test_message_has_no_header_or_grid() {
        let nodes = HtmlRenderer::render(&RenderModel::Message(
            "Network response was not ok".to_string(),
        ));
        let html = nodes_to_html(&nodes);
        assert_eq!(html, "<p class=\"message\">Network response was not ok</p>\n");
        assert_eq!(count_class(&nodes, "numberOfStock"), 0);
        assert_eq!(count_class(&nodes, "stockItem"), 0);
    }

    #[test]
    fn test_card_markup() {
        let nodes = HtmlRenderer::render(&model_for(vec![json!({
            "make": "Toyota",
            "model": "Corolla",
            "images": []
        })]));
        let html = nodes_to_html(&nodes);

        assert!(html.contains(r#"<p class="stockItemHeading">Toyota - Corolla</p>"#));
        assert!(html.contains(
            r#"src="https://placehold.co/250x167/e1e1e1/bebebe?text=No%20Image&amp;font=lato""#
        ));
        assert!(html.contains(r#"alt="Toyota Corolla""#));
        assert!(html.contains("<strong>Transmission</strong> N/A"));
        assert!(html.contains("<strong>Stock №</strong> N/A"));
    }

    #[test]
    fn test_untrusted_values_are_escaped() {
        let nodes = HtmlRenderer::render(&model_for(vec![json!({
            "make": "<img src=x onerror=alert(1)>",
            "model": "\"quoted\""
        })]));
        let html = nodes_to_html(&nodes);
        assert!(!html.contains("<img src=x"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("&quot;quoted&quot;"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let model = model_for(vec![json!({ "make": "Kia", "odometer": 10 })]);
        assert_eq!(
            nodes_to_html(&HtmlRenderer::render(&model)),
            nodes_to_html(&HtmlRenderer::render(&model))
        );
    }
}
