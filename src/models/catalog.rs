// src/models/catalog.rs

use serde::Serialize;
use utoipa::ToSchema;

pub const DEFAULT_ICON: &str = "tag";

// Chave gravada na categoria -> ícone usado pelo painel.
const CATEGORY_ICONS: &[(&str, &str)] = &[
    ("shirt", "shirt"),
    ("polera", "shirt"),
    ("pants", "pants"),
    ("shoes", "footprints"),
    ("calzado", "footprints"),
    ("bag", "shopping-bag"),
    ("accessories", "watch"),
    ("hat", "hard-hat"),
    ("kids", "baby"),
    ("sport", "dumbbell"),
    ("home", "home"),
    ("gift", "gift"),
];

pub fn icon_for(key: Option<&str>) -> &'static str {
    let Some(key) = key.map(|k| k.trim().to_ascii_lowercase()) else {
        return DEFAULT_ICON;
    };
    CATEGORY_ICONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttributeOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttributeGroup {
    #[schema(example = "size")]
    pub key: &'static str,
    #[schema(example = "Talla")]
    pub label: &'static str,
    pub options: Vec<AttributeOption>,
}

const fn opt(value: &'static str, label: &'static str) -> AttributeOption {
    AttributeOption { value, label }
}

/// Listas fixas de atributos usadas pelo formulário de produto.
pub fn attribute_groups() -> Vec<AttributeGroup> {
    vec![
        AttributeGroup {
            key: "size",
            label: "Talla",
            options: vec![
                opt("xs", "XS"),
                opt("s", "S"),
                opt("m", "M"),
                opt("l", "L"),
                opt("xl", "XL"),
                opt("xxl", "XXL"),
            ],
        },
        AttributeGroup {
            key: "color",
            label: "Color",
            options: vec![
                opt("black", "Negro"),
                opt("white", "Blanco"),
                opt("red", "Rojo"),
                opt("blue", "Azul"),
                opt("green", "Verde"),
                opt("beige", "Beige"),
            ],
        },
        AttributeGroup {
            key: "material",
            label: "Material",
            options: vec![
                opt("cotton", "Algodón"),
                opt("polyester", "Poliéster"),
                opt("leather", "Cuero"),
                opt("wool", "Lana"),
            ],
        },
        AttributeGroup {
            key: "gender",
            label: "Género",
            options: vec![
                opt("unisex", "Unisex"),
                opt("women", "Mujer"),
                opt("men", "Hombre"),
                opt("kids", "Niños"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_lookup_has_default() {
        assert_eq!(icon_for(Some("Shoes")), "footprints");
        assert_eq!(icon_for(Some("spaceship")), DEFAULT_ICON);
        assert_eq!(icon_for(None), DEFAULT_ICON);
    }

    #[test]
    fn attribute_values_are_unique_per_group() {
        for group in attribute_groups() {
            let mut values: Vec<_> = group.options.iter().map(|o| o.value).collect();
            values.sort_unstable();
            values.dedup();
            assert_eq!(values.len(), group.options.len(), "group {}", group.key);
        }
    }
}
