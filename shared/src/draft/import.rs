//! Import-merge from another product
//!
//! The form lets the operator pull a single axis from an existing product
//! into the current draft, so shared style groups, size charts, or FAQ
//! blocks don't have to be retyped. Values are appended; only FAQs are
//! de-duplicated (case-insensitive question+answer match).

use super::state::ProductDraft;
use crate::models::{Product, normalize_swatch};

/// Axis that can be imported from another product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportAxis {
    Sizes,
    Colors,
    Fabrics,
    Styles,
    Descriptions,
    Faqs,
    DeliveryInfo,
    ReturnsInfo,
}

impl ProductDraft {
    /// Merge one axis of `source` into this draft. Returns how many entries
    /// were appended (or, for text axes, 1 when a field was copied).
    pub fn import_axis(&mut self, source: &Product, axis: ImportAxis) -> usize {
        match axis {
            ImportAxis::Sizes => {
                self.sizes.extend(source.sizes.iter().cloned());
                source.sizes.len()
            }
            ImportAxis::Colors => {
                let count = source.colors.len();
                self.colors
                    .extend(source.colors.iter().cloned().map(normalize_swatch));
                count
            }
            ImportAxis::Fabrics => {
                self.fabrics.extend(source.fabrics.iter().cloned());
                source.fabrics.len()
            }
            ImportAxis::Styles => {
                self.styles.extend(source.styles.iter().cloned());
                source.styles.len()
            }
            ImportAxis::Descriptions => {
                let mut copied = 0;
                if !source.description.trim().is_empty() {
                    self.description = source.description.clone();
                    copied += 1;
                }
                if !source.long_description.trim().is_empty() {
                    self.long_description = source.long_description.clone();
                    copied += 1;
                }
                copied
            }
            ImportAxis::Faqs => {
                let existing: Vec<(String, String)> =
                    self.faqs.iter().map(faq_key).collect();
                let mut appended = 0;
                for faq in &source.faqs {
                    if !existing.contains(&faq_key(faq)) {
                        self.faqs.push(faq.clone());
                        appended += 1;
                    }
                }
                appended
            }
            ImportAxis::DeliveryInfo => match &source.delivery_info {
                Some(section) => {
                    self.delivery_info = Some(section.clone());
                    1
                }
                None => 0,
            },
            ImportAxis::ReturnsInfo => match &source.returns_info {
                Some(section) => {
                    self.returns_info = Some(section.clone());
                    1
                }
                None => 0,
            },
        }
    }
}

fn faq_key(faq: &crate::models::Faq) -> (String, String) {
    (
        faq.question.trim().to_lowercase(),
        faq.answer.trim().to_lowercase(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Faq;

    fn source_product(json: &str) -> Product {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_import_sizes_appends() {
        let mut draft = ProductDraft::new();
        draft.sizes.push(crate::models::SizeOption {
            name: "Single".into(),
            price_delta: 0.0,
        });
        let source = source_product(
            r#"{"id": 1, "name": "Src", "category": 1,
                "sizes": [{"name": "Double", "price_delta": 50.0}, {"name": "King", "price_delta": 90.0}]}"#,
        );
        assert_eq!(draft.import_axis(&source, ImportAxis::Sizes), 2);
        assert_eq!(draft.sizes.len(), 3);
        // No de-duplication on sizes, even identical names would append.
    }

    #[test]
    fn test_import_faqs_dedups_case_insensitively() {
        let mut draft = ProductDraft::new();
        draft.faqs.push(Faq {
            question: "Does it creak?".into(),
            answer: "No.".into(),
        });
        let source = source_product(
            r#"{"id": 1, "name": "Src", "category": 1, "faqs": [
                {"question": "DOES IT CREAK?", "answer": "no."},
                {"question": "Is assembly required?", "answer": "Yes, tools included."}
            ]}"#,
        );
        assert_eq!(draft.import_axis(&source, ImportAxis::Faqs), 1);
        assert_eq!(draft.faqs.len(), 2);
        assert_eq!(draft.faqs[1].question, "Is assembly required?");
    }

    #[test]
    fn test_import_same_question_different_answer_appends() {
        let mut draft = ProductDraft::new();
        draft.faqs.push(Faq {
            question: "Does it creak?".into(),
            answer: "No.".into(),
        });
        let source = source_product(
            r#"{"id": 1, "name": "Src", "category": 1, "faqs": [
                {"question": "Does it creak?", "answer": "Only slightly."}
            ]}"#,
        );
        assert_eq!(draft.import_axis(&source, ImportAxis::Faqs), 1);
        assert_eq!(draft.faqs.len(), 2);
    }

    #[test]
    fn test_import_descriptions_skips_empty_source() {
        let mut draft = ProductDraft::new();
        draft.description = "Keep me".into();
        let source = source_product(
            r#"{"id": 1, "name": "Src", "category": 1, "long_description": "Long copy."}"#,
        );
        assert_eq!(draft.import_axis(&source, ImportAxis::Descriptions), 1);
        assert_eq!(draft.description, "Keep me");
        assert_eq!(draft.long_description, "Long copy.");
    }

    #[test]
    fn test_import_delivery_info() {
        let mut draft = ProductDraft::new();
        let source = source_product(
            r#"{"id": 1, "name": "Src", "category": 1,
                "delivery_info": {"title": "Delivery", "body": "2-3 weeks."}}"#,
        );
        assert_eq!(draft.import_axis(&source, ImportAxis::DeliveryInfo), 1);
        assert_eq!(draft.delivery_info.as_ref().unwrap().body, "2-3 weeks.");

        let empty = source_product(r#"{"id": 2, "name": "Src2", "category": 1}"#);
        assert_eq!(draft.import_axis(&empty, ImportAxis::DeliveryInfo), 0);
        // Existing section survives an empty import.
        assert!(draft.delivery_info.is_some());
    }

    #[test]
    fn test_import_styles_normalizes_legacy_shapes() {
        let mut draft = ProductDraft::new();
        let source = source_product(
            r#"{"id": 1, "name": "Src", "category": 1,
                "styles": [{"name": "Headboard Style", "options": ["Plain", "Wingback"]}]}"#,
        );
        assert_eq!(draft.import_axis(&source, ImportAxis::Styles), 1);
        assert_eq!(draft.styles[0].options[1].label, "Wingback");
    }
}
