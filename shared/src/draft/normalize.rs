//! Draft validation and payload normalization
//!
//! `to_payload` is the single exit point of the composer: it validates the
//! draft, computes derived fields, applies the wingback adjustment, strips
//! placeholder entries, and emits the exact shape the backend expects.
//! Empty optional collections become `None` so a partial edit never
//! overwrites server-side state with `[]`.

use super::dimensions::adjust_dimensions_for_style;
use super::pricing::compute_original_price;
use super::state::ProductDraft;
use super::DraftError;
use crate::models::{
    ColorSwatch, DimensionRow, Fabric, Faq, InfoSection, InfoTab, MattressOption, ProductPayload,
    SizeOption, StyleGroup, normalize_swatch,
};

impl ProductDraft {
    /// Check the draft's invariants, reporting the first offending field.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingField("name"));
        }
        if self.category.is_none() {
            return Err(DraftError::MissingField("category"));
        }
        if self.price < 0.0 {
            return Err(DraftError::NegativePrice(self.price));
        }
        if !(0.0..100.0).contains(&self.discount_percent) {
            return Err(DraftError::DiscountOutOfRange(self.discount_percent));
        }
        if self.images_required() && !self.images.iter().any(|i| !i.trim().is_empty()) {
            return Err(DraftError::MissingImages);
        }
        Ok(())
    }

    /// Normalize the draft into the submission payload.
    pub fn to_payload(&self) -> Result<ProductPayload, DraftError> {
        self.validate()?;

        let original_price =
            compute_original_price(self.price, self.discount_percent, self.original_price)?;

        let styles = clean_styles(&self.styles);
        let dimensions = clean_dimensions(&self.dimensions, &styles);

        Ok(ProductPayload {
            name: self.name.trim().to_string(),
            description: opt_text(&self.description),
            long_description: opt_text(&self.long_description),
            // validate() guarantees a category
            category: self.category.unwrap_or_default(),
            subcategory: self.subcategory,
            price: self.price,
            discount_percent: self.discount_percent,
            original_price,
            delivery_charge: self.delivery_charge,
            is_bestseller: self.is_bestseller,
            is_new: self.is_new,
            show_size_icons: self.show_size_icons,
            images: non_empty(clean_urls(&self.images)),
            videos: non_empty(clean_urls(&self.videos)),
            sizes: non_empty(clean_sizes(&self.sizes)),
            colors: non_empty(clean_colors(&self.colors)),
            fabrics: non_empty(clean_fabrics(&self.fabrics)),
            styles: non_empty(styles),
            mattresses: non_empty(clean_mattresses(&self.mattresses)),
            dimensions: non_empty(dimensions),
            faqs: non_empty(clean_faqs(&self.faqs)),
            delivery_info: clean_section(self.delivery_info.as_ref()),
            returns_info: clean_section(self.returns_info.as_ref()),
            custom_tabs: non_empty(clean_tabs(&self.custom_tabs)),
            filter_options: non_empty(self.filter_options.clone()),
        })
    }
}

fn opt_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn non_empty<T>(list: Vec<T>) -> Option<Vec<T>> {
    if list.is_empty() { None } else { Some(list) }
}

fn clean_urls(urls: &[String]) -> Vec<String> {
    urls.iter()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .collect()
}

fn clean_sizes(sizes: &[SizeOption]) -> Vec<SizeOption> {
    sizes
        .iter()
        .filter(|s| !s.name.trim().is_empty())
        .map(|s| SizeOption {
            name: s.name.trim().to_string(),
            price_delta: s.price_delta,
        })
        .collect()
}

fn clean_colors(colors: &[ColorSwatch]) -> Vec<ColorSwatch> {
    colors
        .iter()
        .filter(|c| !c.name.trim().is_empty())
        .map(|c| {
            normalize_swatch(ColorSwatch {
                name: c.name.trim().to_string(),
                hex_code: c.hex_code.as_deref().and_then(opt_text),
                image: c.image.as_deref().and_then(opt_text),
            })
        })
        .collect()
}

/// Fabrics need a name and at least one named colour; anything less is a
/// placeholder row from the form.
fn clean_fabrics(fabrics: &[Fabric]) -> Vec<Fabric> {
    fabrics
        .iter()
        .filter_map(|f| {
            let name = f.name.trim();
            if name.is_empty() {
                return None;
            }
            let colors: Vec<_> = f
                .colors
                .iter()
                .filter(|c| !c.name.trim().is_empty())
                .map(|c| crate::models::FabricColor {
                    name: c.name.trim().to_string(),
                    image: c.image.as_deref().and_then(opt_text),
                })
                .collect();
            if colors.is_empty() {
                return None;
            }
            Some(Fabric {
                name: name.to_string(),
                is_shared: f.is_shared,
                colors,
            })
        })
        .collect()
}

/// Unlabelled options are placeholders; groups with no name or no surviving
/// options are dropped with them.
fn clean_styles(styles: &[StyleGroup]) -> Vec<StyleGroup> {
    styles
        .iter()
        .filter_map(|group| {
            let name = group.name.trim();
            if name.is_empty() {
                return None;
            }
            let options: Vec<_> = group
                .options
                .iter()
                .filter(|o| !o.label.trim().is_empty())
                .map(|o| crate::models::StyleOption {
                    label: o.label.trim().to_string(),
                    description: o.description.trim().to_string(),
                    icon: o.icon.as_deref().and_then(opt_text),
                    price_delta: o.price_delta,
                    sizes: o
                        .sizes
                        .iter()
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect(),
                })
                .collect();
            if options.is_empty() {
                return None;
            }
            Some(StyleGroup {
                name: name.to_string(),
                options,
            })
        })
        .collect()
}

fn clean_mattresses(mattresses: &[MattressOption]) -> Vec<MattressOption> {
    mattresses
        .iter()
        .filter(|m| !m.name.trim().is_empty())
        .map(|m| MattressOption {
            name: m.name.trim().to_string(),
            description: m.description.trim().to_string(),
            image: m.image.as_deref().and_then(opt_text),
            price: m.price,
            source_product: m.source_product,
        })
        .collect()
}

fn clean_dimensions(rows: &[DimensionRow], styles: &[StyleGroup]) -> Vec<DimensionRow> {
    let cleaned: Vec<DimensionRow> = rows
        .iter()
        .filter(|r| !r.measurement.trim().is_empty())
        .map(|r| DimensionRow {
            measurement: r.measurement.trim().to_string(),
            values: r
                .values
                .iter()
                .map(|(size, value)| (size.trim().to_string(), value.trim().to_string()))
                .collect(),
        })
        .collect();
    adjust_dimensions_for_style(&cleaned, styles)
}

fn clean_faqs(faqs: &[Faq]) -> Vec<Faq> {
    faqs.iter()
        .filter(|f| !f.question.trim().is_empty() && !f.answer.trim().is_empty())
        .map(|f| Faq {
            question: f.question.trim().to_string(),
            answer: f.answer.trim().to_string(),
        })
        .collect()
}

fn clean_section(section: Option<&InfoSection>) -> Option<InfoSection> {
    section.and_then(|s| {
        let body = s.body.trim();
        if body.is_empty() {
            return None;
        }
        Some(InfoSection {
            title: s.title.trim().to_string(),
            body: body.to_string(),
        })
    })
}

fn clean_tabs(tabs: &[InfoTab]) -> Vec<InfoTab> {
    tabs.iter()
        .filter(|t| !t.title.trim().is_empty())
        .map(|t| InfoTab {
            title: t.title.trim().to_string(),
            body: t.body.trim().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::VariantAxis;
    use crate::models::{Product, StyleOption};

    fn valid_draft() -> ProductDraft {
        let mut draft = ProductDraft::new();
        draft.name = "Oslo Bed".into();
        draft.category = Some(2);
        draft.price = 499.0;
        draft.images = vec!["https://cdn.example/oslo.jpg".into()];
        draft
    }

    #[test]
    fn test_validation_order_names_first_offender() {
        let draft = ProductDraft::new();
        assert_eq!(draft.validate(), Err(DraftError::MissingField("name")));

        let mut draft = ProductDraft::new();
        draft.name = "Bed".into();
        assert_eq!(draft.validate(), Err(DraftError::MissingField("category")));
    }

    #[test]
    fn test_create_requires_an_image() {
        let mut draft = valid_draft();
        draft.images = vec!["   ".into()];
        assert_eq!(draft.validate(), Err(DraftError::MissingImages));
    }

    #[test]
    fn test_edit_with_server_images_waives_requirement() {
        let product: Product = serde_json::from_str(
            r#"{"id": 9, "name": "Bed", "category": 1, "price": 100.0, "images": ["a.jpg"]}"#,
        )
        .unwrap();
        let mut draft = ProductDraft::from_product(product);
        draft.images.clear();
        assert!(draft.validate().is_ok());
        // Omitted entirely so the server keeps its images.
        assert!(draft.to_payload().unwrap().images.is_none());
    }

    #[test]
    fn test_discount_at_hundred_blocks_submission() {
        let mut draft = valid_draft();
        draft.discount_percent = 100.0;
        assert_eq!(draft.validate(), Err(DraftError::DiscountOutOfRange(100.0)));
    }

    #[test]
    fn test_payload_derives_original_price() {
        let mut draft = valid_draft();
        draft.price = 80.0;
        draft.discount_percent = 20.0;
        draft.original_price = Some(999.0);
        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.original_price, Some(100.0));
    }

    #[test]
    fn test_placeholders_dropped() {
        let mut draft = valid_draft();
        draft.add_entry(VariantAxis::Sizes);
        draft.sizes[0].name = "  King  ".into();
        draft.add_entry(VariantAxis::Sizes); // left empty

        draft.add_entry(VariantAxis::Styles);
        draft.styles[0].name = "Headboard Style".into();
        draft.styles[0].options = vec![
            StyleOption {
                label: "Plain".into(),
                ..StyleOption::default()
            },
            StyleOption::default(), // empty label
        ];
        draft.add_entry(VariantAxis::Styles); // unnamed group

        draft.add_entry(VariantAxis::Fabrics);
        draft.fabrics[0].name = "Linen".into(); // no colours: placeholder

        let payload = draft.to_payload().unwrap();
        let sizes = payload.sizes.unwrap();
        assert_eq!(sizes.len(), 1);
        assert_eq!(sizes[0].name, "King");

        let styles = payload.styles.unwrap();
        assert_eq!(styles.len(), 1);
        assert_eq!(styles[0].options.len(), 1);

        assert!(payload.fabrics.is_none());
    }

    #[test]
    fn test_empty_collections_omitted() {
        let draft = valid_draft();
        let payload = draft.to_payload().unwrap();
        assert!(payload.videos.is_none());
        assert!(payload.faqs.is_none());
        assert!(payload.custom_tabs.is_none());
        assert!(payload.filter_options.is_none());
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("\"faqs\""));
    }

    #[test]
    fn test_wingback_applied_during_normalization() {
        let mut draft = valid_draft();
        draft.styles = vec![StyleGroup {
            name: "Headboard Style".into(),
            options: vec![StyleOption {
                label: "Wingback Headboard".into(),
                ..StyleOption::default()
            }],
        }];
        draft.dimensions = vec![DimensionRow {
            measurement: "Overall Width".into(),
            values: [("Double".to_string(), "90 cm (35.4\")".to_string())]
                .into_iter()
                .collect(),
        }];
        let payload = draft.to_payload().unwrap();
        let rows = payload.dimensions.unwrap();
        assert_eq!(rows[0].values["Double"], "94 cm (37.0\")");
    }

    #[test]
    fn test_roundtrip_equals_source_minus_placeholders() {
        let product: Product = serde_json::from_str(
            r##"{
                "id": 3, "name": "Hove Ottoman Bed", "category": 2, "price": 649.0,
                "images": ["a.jpg"],
                "sizes": [{"name": "Double", "price_delta": 0.0}, {"name": ""}],
                "colors": [{"name": "Slate", "hex_code": "#708090"}, {"name": ""}],
                "faqs": [{"question": "Q1", "answer": "A1"}, {"question": "Q2", "answer": ""}]
            }"##,
        )
        .unwrap();
        let expected_sizes = clean_sizes(&product.sizes);
        let expected_colors = clean_colors(&product.colors);
        let expected_faqs = clean_faqs(&product.faqs);

        let draft = ProductDraft::from_product(product);
        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.sizes.unwrap(), expected_sizes);
        assert_eq!(payload.colors.unwrap(), expected_colors);
        assert_eq!(payload.faqs.unwrap(), expected_faqs);
    }
}
