//! Draft state and entry management

use crate::models::{
    ColorSwatch, DimensionRow, Fabric, FabricColor, Faq, InfoSection, InfoTab, MattressOption,
    Product, SizeOption, StyleGroup, StyleOption, normalize_swatch,
};

/// One of the draft's editable collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantAxis {
    Sizes,
    Colors,
    Fabrics,
    Styles,
    Mattresses,
    Faqs,
    DimensionRows,
    CustomTabs,
}

/// A prefilled entry for one of the draft's collections, e.g. a size picked
/// from another product's chart
#[derive(Debug, Clone)]
pub enum VariantEntry {
    Size(SizeOption),
    Color(ColorSwatch),
    Fabric(Fabric),
    Style(StyleGroup),
    Mattress(MattressOption),
    Faq(Faq),
    DimensionRow(DimensionRow),
    CustomTab(InfoTab),
}

/// In-memory, form-bound representation of a product being created or edited
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    /// Server-side product ID when editing; `None` when creating
    pub existing_id: Option<i64>,
    /// How many images the server already held at hydration time. The
    /// image requirement is waived on edit only when this is non-zero.
    server_image_count: usize,

    pub name: String,
    pub description: String,
    pub long_description: String,
    pub category: Option<i64>,
    pub subcategory: Option<i64>,
    pub price: f64,
    pub discount_percent: f64,
    /// Explicit original price; ignored when a discount derives one
    pub original_price: Option<f64>,
    pub delivery_charge: Option<f64>,
    pub is_bestseller: bool,
    pub is_new: bool,
    pub show_size_icons: bool,

    pub images: Vec<String>,
    pub videos: Vec<String>,

    pub sizes: Vec<SizeOption>,
    pub colors: Vec<ColorSwatch>,
    pub fabrics: Vec<Fabric>,
    pub styles: Vec<StyleGroup>,
    pub mattresses: Vec<MattressOption>,

    pub dimensions: Vec<DimensionRow>,
    pub faqs: Vec<Faq>,
    pub delivery_info: Option<InfoSection>,
    pub returns_info: Option<InfoSection>,
    pub custom_tabs: Vec<InfoTab>,

    pub filter_options: Vec<i64>,
}

impl ProductDraft {
    /// Fresh draft for a new product
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate a draft from a fetched product (edit mode).
    ///
    /// Style options were already normalized during deserialization; colour
    /// swatches are normalized here so legacy `image` fields never reach
    /// the form.
    pub fn from_product(product: Product) -> Self {
        let server_image_count = product.images.len();
        Self {
            existing_id: Some(product.id),
            server_image_count,
            name: product.name,
            description: product.description,
            long_description: product.long_description,
            category: Some(product.category),
            subcategory: product.subcategory,
            price: product.price,
            discount_percent: product.discount_percent,
            original_price: product.original_price,
            delivery_charge: product.delivery_charge,
            is_bestseller: product.is_bestseller,
            is_new: product.is_new,
            show_size_icons: product.show_size_icons,
            images: product.images,
            videos: product.videos,
            sizes: product.sizes,
            colors: product.colors.into_iter().map(normalize_swatch).collect(),
            fabrics: product.fabrics,
            styles: product.styles,
            mattresses: product.mattresses,
            dimensions: product.dimensions,
            faqs: product.faqs,
            delivery_info: product.delivery_info,
            returns_info: product.returns_info,
            custom_tabs: product.custom_tabs,
            filter_options: product.filter_options,
        }
    }

    /// Whether this draft will create a new product on submit
    pub fn is_create(&self) -> bool {
        self.existing_id.is_none()
    }

    /// Whether the image invariant applies to this draft
    pub(crate) fn images_required(&self) -> bool {
        self.is_create() || self.server_image_count == 0
    }

    /// Append an empty entry to the named collection.
    ///
    /// No uniqueness is enforced; placeholders are dropped at normalization.
    pub fn add_entry(&mut self, axis: VariantAxis) {
        match axis {
            VariantAxis::Sizes => self.sizes.push(SizeOption::default()),
            VariantAxis::Colors => self.colors.push(ColorSwatch::default()),
            VariantAxis::Fabrics => self.fabrics.push(Fabric::default()),
            VariantAxis::Styles => self.styles.push(StyleGroup::default()),
            VariantAxis::Mattresses => self.mattresses.push(MattressOption::default()),
            VariantAxis::Faqs => self.faqs.push(Faq::default()),
            VariantAxis::DimensionRows => self.dimensions.push(DimensionRow::default()),
            VariantAxis::CustomTabs => self.custom_tabs.push(InfoTab::default()),
        }
    }

    /// Append a prefilled entry to its collection.
    ///
    /// Like [`add_entry`](Self::add_entry), no uniqueness is enforced.
    pub fn add_entry_with(&mut self, entry: VariantEntry) {
        match entry {
            VariantEntry::Size(size) => self.sizes.push(size),
            VariantEntry::Color(color) => self.colors.push(color),
            VariantEntry::Fabric(fabric) => self.fabrics.push(fabric),
            VariantEntry::Style(style) => self.styles.push(style),
            VariantEntry::Mattress(mattress) => self.mattresses.push(mattress),
            VariantEntry::Faq(faq) => self.faqs.push(faq),
            VariantEntry::DimensionRow(row) => self.dimensions.push(row),
            VariantEntry::CustomTab(tab) => self.custom_tabs.push(tab),
        }
    }

    /// Remove an entry by position. Out-of-range indexes are a no-op.
    pub fn remove_entry(&mut self, axis: VariantAxis, index: usize) -> bool {
        fn remove_at<T>(list: &mut Vec<T>, index: usize) -> bool {
            if index < list.len() {
                list.remove(index);
                true
            } else {
                false
            }
        }
        match axis {
            VariantAxis::Sizes => remove_at(&mut self.sizes, index),
            VariantAxis::Colors => remove_at(&mut self.colors, index),
            VariantAxis::Fabrics => remove_at(&mut self.fabrics, index),
            VariantAxis::Styles => remove_at(&mut self.styles, index),
            VariantAxis::Mattresses => remove_at(&mut self.mattresses, index),
            VariantAxis::Faqs => remove_at(&mut self.faqs, index),
            VariantAxis::DimensionRows => remove_at(&mut self.dimensions, index),
            VariantAxis::CustomTabs => remove_at(&mut self.custom_tabs, index),
        }
    }

    /// Append an empty option to a style group. Returns false when the
    /// group index is out of range.
    pub fn add_style_option(&mut self, group: usize) -> bool {
        match self.styles.get_mut(group) {
            Some(g) => {
                g.options.push(StyleOption::default());
                true
            }
            None => false,
        }
    }

    /// Append an empty colour swatch to a fabric. Returns false when the
    /// fabric index is out of range.
    pub fn add_fabric_color(&mut self, fabric: usize) -> bool {
        match self.fabrics.get_mut(fabric) {
            Some(f) => {
                f.colors.push(FabricColor::default());
                true
            }
            None => false,
        }
    }
}
